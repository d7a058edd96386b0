//! fanal-ana: Event selection and analysis.
//!
//! - [`check_event_fiduciality`] - geometric fiducial filter with veto-energy rescue
//! - [`get_ana_group_name`] / [`get_reco_group_name`] - output group naming
//! - [`AnalysisConfig`] - analysis parameters, loadable from JSON
//! - [`analyze_events`] - parallel reconstruction and selection of a run
//!
#![warn(missing_docs)]

mod config;
mod fiducial;
mod naming;
mod processing;

pub use config::AnalysisConfig;
pub use fiducial::{check_event_fiduciality, FiducialSummary};
pub use naming::{get_ana_group_name, get_ana_group_name_str, get_reco_group_name};
pub use processing::{
    analyze_event, analyze_events, AnalysisRun, AnalysisStatistics, EventAnalysis,
};
