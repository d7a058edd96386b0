//! Event-level and run-level analysis.
#![allow(clippy::cast_precision_loss)]

use crate::config::AnalysisConfig;
use crate::fiducial::{check_event_fiduciality, FiducialSummary};
use fanal_core::{McEvent, Result};
use fanal_reco::reconstruct_event;
use rayon::prelude::*;
use serde::Serialize;

/// Analysis result of one event.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EventAnalysis {
    /// Event number.
    pub event_id: u64,
    /// Number of Monte-Carlo hits.
    pub n_hits: usize,
    /// Number of voxels after reconstruction.
    pub n_voxels: usize,
    /// Total deposited energy (MeV).
    pub energy: f64,
    /// Fiduciality outcome.
    pub fiducial: FiducialSummary,
}

/// Counters accumulated over a run.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AnalysisStatistics {
    /// Events analyzed.
    pub n_events: usize,
    /// Events accepted as fiducial (rescued ones included).
    pub n_fiducial: usize,
    /// Events outside the volume accepted thanks to a low veto energy.
    pub n_rescued: usize,
    /// Events rejected.
    pub n_vetoed: usize,
    /// Hits over all events.
    pub total_hits: usize,
    /// Voxels over all events.
    pub total_voxels: usize,
}

impl AnalysisStatistics {
    /// Adds one event to the counters.
    pub fn record(&mut self, event: &EventAnalysis) {
        self.n_events += 1;
        self.total_hits += event.n_hits;
        self.total_voxels += event.n_voxels;
        if event.fiducial.is_fiducial {
            self.n_fiducial += 1;
            if event.fiducial.is_rescued() {
                self.n_rescued += 1;
            }
        } else {
            self.n_vetoed += 1;
        }
    }

    /// Fraction of events accepted, 0 for an empty run.
    #[must_use]
    pub fn fiducial_efficiency(&self) -> f64 {
        if self.n_events == 0 {
            0.0
        } else {
            self.n_fiducial as f64 / self.n_events as f64
        }
    }
}

/// Per-event results of a run, in input order, and their statistics.
#[derive(Debug, Clone, Default)]
pub struct AnalysisRun {
    /// One entry per input event.
    pub events: Vec<EventAnalysis>,
    /// Run counters.
    pub statistics: AnalysisStatistics,
}

/// Reconstructs one event and checks its fiduciality.
///
/// # Errors
/// Returns [`fanal_core::Error::EmptyInput`] if the event has no hits.
pub fn analyze_event(event: &McEvent, config: &AnalysisConfig) -> Result<EventAnalysis> {
    let voxels = reconstruct_event(&event.hits, config.spatial_def, config.drift_velocity)?;
    let fiducial =
        check_event_fiduciality(&voxels, &config.fid_dimensions, config.min_veto_energy)?;

    Ok(EventAnalysis {
        event_id: event.event_id,
        n_hits: event.len(),
        n_voxels: voxels.len(),
        energy: event.total_energy(),
        fiducial,
    })
}

/// Analyzes all events of a run in parallel.
///
/// # Errors
/// Fails on the first invalid configuration or event without hits.
pub fn analyze_events(events: &[McEvent], config: &AnalysisConfig) -> Result<AnalysisRun> {
    config.validate()?;
    log::debug!(
        "analyzing {} events ({} definition, fiducial {:?})",
        events.len(),
        config.spatial_def,
        config.fid_dimensions
    );

    let results = events
        .par_iter()
        .map(|event| analyze_event(event, config))
        .collect::<Result<Vec<_>>>()?;

    let mut statistics = AnalysisStatistics::default();
    for event in &results {
        statistics.record(event);
    }

    log::info!(
        "{} of {} events fiducial ({} rescued by veto threshold)",
        statistics.n_fiducial,
        statistics.n_events,
        statistics.n_rescued
    );

    Ok(AnalysisRun {
        events: results,
        statistics,
    })
}
