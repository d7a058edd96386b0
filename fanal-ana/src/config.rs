//! Analysis configuration.

use fanal_core::units::{KEV, MM, MUS};
use fanal_core::{Error, Result, SpatialDef, VolumeDim};
use serde::Deserialize;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Parameters of one analysis pass.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisConfig {
    /// Energy resolution (FWHM, percent), used to name output groups.
    pub fwhm: f64,
    /// Voxel size selector.
    pub spatial_def: SpatialDef,
    /// Drift velocity (mm/ns).
    pub drift_velocity: f64,
    /// Fiducial volume.
    pub fid_dimensions: VolumeDim,
    /// Veto energy below which events outside the volume are kept (MeV).
    pub min_veto_energy: f64,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            fwhm: 0.5,
            spatial_def: SpatialDef::Low,
            drift_velocity: 1.0 * MM / MUS,
            fid_dimensions: VolumeDim::default(),
            min_veto_energy: 10.0 * KEV,
        }
    }
}

// On-disk schema: lengths in mm, drift velocity in mm/us, energies in keV.
#[derive(Deserialize)]
#[serde(default, deny_unknown_fields)]
struct JsonConfig {
    fwhm: f64,
    spatial_def: String,
    drift_velocity_mm_per_us: f64,
    fiducial: JsonFiducial,
    min_veto_energy_kev: f64,
}

impl Default for JsonConfig {
    fn default() -> Self {
        let config = AnalysisConfig::default();
        Self {
            fwhm: config.fwhm,
            spatial_def: config.spatial_def.to_string(),
            drift_velocity_mm_per_us: config.drift_velocity / (MM / MUS),
            fiducial: JsonFiducial::default(),
            min_veto_energy_kev: config.min_veto_energy / KEV,
        }
    }
}

#[derive(Deserialize)]
#[serde(default, deny_unknown_fields)]
struct JsonFiducial {
    z_min: f64,
    z_max: f64,
    rad: f64,
}

impl Default for JsonFiducial {
    fn default() -> Self {
        let volume = VolumeDim::default();
        Self {
            z_min: volume.z_min / MM,
            z_max: volume.z_max / MM,
            rad: volume.rad / MM,
        }
    }
}

impl AnalysisConfig {
    /// Creates a configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the energy resolution.
    #[must_use]
    pub fn with_fwhm(mut self, fwhm: f64) -> Self {
        self.fwhm = fwhm;
        self
    }

    /// Sets the spatial definition.
    #[must_use]
    pub fn with_spatial_def(mut self, spatial_def: SpatialDef) -> Self {
        self.spatial_def = spatial_def;
        self
    }

    /// Sets the drift velocity.
    #[must_use]
    pub fn with_drift_velocity(mut self, drift_velocity: f64) -> Self {
        self.drift_velocity = drift_velocity;
        self
    }

    /// Sets the fiducial volume.
    #[must_use]
    pub fn with_fid_dimensions(mut self, fid_dimensions: VolumeDim) -> Self {
        self.fid_dimensions = fid_dimensions;
        self
    }

    /// Sets the veto energy threshold.
    #[must_use]
    pub fn with_min_veto_energy(mut self, min_veto_energy: f64) -> Self {
        self.min_veto_energy = min_veto_energy;
        self
    }

    /// Load configuration from a JSON file.
    ///
    /// # Errors
    /// Returns [`Error::ConfigError`] if the file cannot be read or parsed,
    /// and any validation error of [`AnalysisConfig::validate`].
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)
            .map_err(|e| Error::ConfigError(format!("{}: {}", path.display(), e)))?;
        let json_config: JsonConfig = serde_json::from_reader(BufReader::new(file))
            .map_err(|e| Error::ConfigError(format!("{}: {}", path.display(), e)))?;
        Self::from_json_config(json_config)
    }

    /// Load configuration from a JSON string.
    ///
    /// Missing fields keep their default values.
    ///
    /// # Errors
    /// Returns [`Error::ConfigError`] on malformed JSON,
    /// [`Error::UnknownSpatialDef`] for an unknown `spatial_def`, and any
    /// validation error of [`AnalysisConfig::validate`].
    pub fn from_json(json: &str) -> Result<Self> {
        let json_config: JsonConfig =
            serde_json::from_str(json).map_err(|e| Error::ConfigError(e.to_string()))?;
        Self::from_json_config(json_config)
    }

    fn from_json_config(config: JsonConfig) -> Result<Self> {
        let analysis = Self {
            fwhm: config.fwhm,
            spatial_def: config.spatial_def.parse()?,
            drift_velocity: config.drift_velocity_mm_per_us * MM / MUS,
            fid_dimensions: VolumeDim::new(
                config.fiducial.z_min * MM,
                config.fiducial.z_max * MM,
                config.fiducial.rad * MM,
            ),
            min_veto_energy: config.min_veto_energy_kev * KEV,
        };
        analysis.validate()?;
        Ok(analysis)
    }

    /// Checks parameter consistency.
    ///
    /// # Errors
    /// Returns [`Error::ConfigError`] for a negative or non-finite drift
    /// velocity, veto threshold or FWHM, and [`Error::InvalidVolume`] for
    /// bad fiducial dimensions.
    pub fn validate(&self) -> Result<()> {
        if !(self.fwhm.is_finite() && self.fwhm >= 0.0) {
            return Err(Error::ConfigError(format!(
                "fwhm must be non-negative, got {}",
                self.fwhm
            )));
        }
        if !(self.drift_velocity.is_finite() && self.drift_velocity >= 0.0) {
            return Err(Error::ConfigError(format!(
                "drift velocity must be non-negative, got {}",
                self.drift_velocity
            )));
        }
        if !(self.min_veto_energy.is_finite() && self.min_veto_energy >= 0.0) {
            return Err(Error::ConfigError(format!(
                "veto energy threshold must be non-negative, got {}",
                self.min_veto_energy
            )));
        }
        self.fid_dimensions.validate()
    }
}
