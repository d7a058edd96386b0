//! `fanal` command-line tool.
//!
//! Reconstructs Monte-Carlo events from a hit table and classifies them as
//! fiducial or not.
#![allow(clippy::uninlined_format_args)]

use clap::{Parser, Subcommand};

use fanal_ana::{analyze_events, get_ana_group_name, get_reco_group_name, AnalysisConfig};
use fanal_core::units::{KEV, MM, MUS};
use fanal_core::SpatialDef;
use fanal_io::{DataFileWriter, HitTableReader};
use fanal_reco::get_voxel_size;
use std::path::PathBuf;
use std::time::Instant;
use thiserror::Error;

/// Result type for CLI operations.
type Result<T> = std::result::Result<T, CliError>;

/// CLI error types.
#[derive(Error, Debug)]
enum CliError {
    #[error("I/O error: {0}")]
    FanalIo(#[from] fanal_io::Error),

    #[error("Core error: {0}")]
    Core(#[from] fanal_core::Error),
}

fn parse_spatial_def(value: &str) -> std::result::Result<SpatialDef, fanal_core::Error> {
    value.parse()
}

/// Monte-Carlo event reconstruction and fiducial selection.
#[derive(Parser)]
#[command(name = "fanal")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Reconstruct the events of a hit table and check their fiduciality
    Analyze {
        /// Input hit table (CSV: event_id,x,y,z,time,energy)
        input: PathBuf,

        /// Output CSV with one row per event
        #[arg(short, long)]
        output: PathBuf,

        /// JSON configuration file (flags below take precedence)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Spatial definition: low or high
        #[arg(long, value_parser = parse_spatial_def)]
        spatial_def: Option<SpatialDef>,

        /// Drift velocity (mm/us)
        #[arg(long)]
        drift_velocity: Option<f64>,

        /// Fiducial lower Z bound (mm)
        #[arg(long)]
        z_min: Option<f64>,

        /// Fiducial upper Z bound (mm)
        #[arg(long)]
        z_max: Option<f64>,

        /// Fiducial radius (mm)
        #[arg(long)]
        rad: Option<f64>,

        /// Veto energy threshold (keV)
        #[arg(long)]
        min_veto_energy_kev: Option<f64>,

        /// Write run statistics as JSON to this file
        #[arg(long)]
        summary: Option<PathBuf>,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Print the voxel size of a spatial definition
    VoxelSize {
        /// Spatial definition: low or high
        #[arg(value_parser = parse_spatial_def)]
        spatial_def: SpatialDef,
    },

    /// Print the output group name of a configuration
    GroupName {
        /// Energy resolution (FWHM, percent)
        fwhm: f64,

        /// Spatial definition: low or high
        #[arg(value_parser = parse_spatial_def)]
        spatial_def: SpatialDef,

        /// Print the reconstruction group instead of the analysis group
        #[arg(long)]
        reco: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let verbose = matches!(cli.command, Commands::Analyze { verbose: true, .. });
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(if verbose { "debug" } else { "warn" }),
    )
    .init();

    match cli.command {
        Commands::Analyze {
            input,
            output,
            config,
            spatial_def,
            drift_velocity,
            z_min,
            z_max,
            rad,
            min_veto_energy_kev,
            summary,
            verbose: _,
        } => {
            let mut analysis = match &config {
                Some(path) => AnalysisConfig::from_file(path)?,
                None => AnalysisConfig::default(),
            };
            if let Some(spatial_def) = spatial_def {
                analysis.spatial_def = spatial_def;
            }
            if let Some(velocity) = drift_velocity {
                analysis.drift_velocity = velocity * MM / MUS;
            }
            if let Some(z_min) = z_min {
                analysis.fid_dimensions.z_min = z_min * MM;
            }
            if let Some(z_max) = z_max {
                analysis.fid_dimensions.z_max = z_max * MM;
            }
            if let Some(rad) = rad {
                analysis.fid_dimensions.rad = rad * MM;
            }
            if let Some(threshold) = min_veto_energy_kev {
                analysis.min_veto_energy = threshold * KEV;
            }
            analysis.validate()?;

            log::info!("Reading: {}", input.display());
            log::info!(
                "Spatial definition: {} (voxel size {:?} mm)",
                analysis.spatial_def,
                get_voxel_size(analysis.spatial_def)
            );
            log::info!(
                "Fiducial volume: z in ({}, {}) mm, r < {} mm",
                analysis.fid_dimensions.z_min / MM,
                analysis.fid_dimensions.z_max / MM,
                analysis.fid_dimensions.rad / MM
            );
            log::info!(
                "Veto energy threshold: {} keV",
                analysis.min_veto_energy / KEV
            );

            let start = Instant::now();

            let events = HitTableReader::open(&input)?.read_events()?;
            let run = analyze_events(&events, &analysis)?;

            let mut writer = DataFileWriter::create(&output)?;
            writer.write_events_csv(&run.events, true)?;
            log::info!("Wrote events to: {}", output.display());

            if let Some(path) = &summary {
                DataFileWriter::create(path)?.write_json(&run.statistics)?;
                log::info!("Wrote summary to: {}", path.display());
            }

            let elapsed = start.elapsed();
            let stats = &run.statistics;

            println!(
                "Analyzed {} events in {:.2}s ({})",
                stats.n_events,
                elapsed.as_secs_f64(),
                get_ana_group_name(analysis.fwhm, analysis.spatial_def)
            );
            println!("Total hits: {}", stats.total_hits);
            println!("Total voxels: {}", stats.total_voxels);
            println!(
                "Fiducial events: {} ({:.2}%), {} rescued by veto threshold",
                stats.n_fiducial,
                stats.fiducial_efficiency() * 100.0,
                stats.n_rescued
            );
            println!("Vetoed events: {}", stats.n_vetoed);
        }

        Commands::VoxelSize { spatial_def } => {
            let (dx, dy, dz) = get_voxel_size(spatial_def);
            println!("{} {} {}", dx / MM, dy / MM, dz / MM);
        }

        Commands::GroupName {
            fwhm,
            spatial_def,
            reco,
        } => {
            if reco {
                println!("{}", get_reco_group_name(fwhm, spatial_def));
            } else {
                println!("{}", get_ana_group_name(fwhm, spatial_def));
            }
        }
    }

    Ok(())
}
