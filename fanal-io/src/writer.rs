//! Writers for analysis results.

use crate::Result;
use fanal_ana::EventAnalysis;
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Column names of the per-event CSV output.
pub const EVENT_CSV_HEADER: &str =
    "event_id,n_hits,n_voxels,energy,min_z,max_z,max_rad,veto_energy,fiducial";

/// Writer for analysis output files.
pub struct DataFileWriter {
    writer: BufWriter<File>,
}

impl DataFileWriter {
    /// Creates a new file writer.
    ///
    /// # Errors
    /// Returns an error if the file cannot be created.
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::create(path)?;
        let writer = BufWriter::new(file);
        Ok(Self { writer })
    }

    /// Writes per-event results as CSV rows, preceded by the header if
    /// `include_header` is set.
    ///
    /// # Errors
    /// Returns an error if writing fails.
    pub fn write_events_csv(
        &mut self,
        events: &[EventAnalysis],
        include_header: bool,
    ) -> Result<()> {
        if include_header {
            writeln!(self.writer, "{EVENT_CSV_HEADER}")?;
        }

        for event in events {
            let fid = &event.fiducial;
            writeln!(
                self.writer,
                "{},{},{},{},{},{},{},{},{}",
                event.event_id,
                event.n_hits,
                event.n_voxels,
                event.energy,
                fid.min_z,
                fid.max_z,
                fid.max_rad,
                fid.veto_energy,
                u8::from(fid.is_fiducial)
            )?;
        }

        self.writer.flush()?;
        Ok(())
    }

    /// Writes any serializable value as pretty-printed JSON.
    ///
    /// # Errors
    /// Returns an error if serialization or writing fails.
    pub fn write_json<T: Serialize>(&mut self, value: &T) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.writer, value)?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }

}

#[cfg(test)]
mod tests {
    use super::*;
    use fanal_ana::{AnalysisStatistics, FiducialSummary};
    use tempfile::NamedTempFile;

    fn event(event_id: u64, is_fiducial: bool) -> EventAnalysis {
        EventAnalysis {
            event_id,
            n_hits: 12,
            n_voxels: 4,
            energy: 2.5,
            fiducial: FiducialSummary {
                min_z: 30.0,
                max_z: 75.5,
                max_rad: 12.25,
                veto_energy: if is_fiducial { 0.0 } else { 0.5 },
                in_volume: is_fiducial,
                is_fiducial,
            },
        }
    }

    #[test]
    fn test_write_events_csv() {
        let file = NamedTempFile::new().unwrap();
        let mut writer = DataFileWriter::create(file.path()).unwrap();

        writer.write_events_csv(&[event(0, true)], true).unwrap();
        writer.write_events_csv(&[event(1, false)], false).unwrap();

        let content = std::fs::read_to_string(file.path()).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], EVENT_CSV_HEADER);
        assert_eq!(lines[1], "0,12,4,2.5,30,75.5,12.25,0,1");
        assert_eq!(lines[2], "1,12,4,2.5,30,75.5,12.25,0.5,0");
    }

    #[test]
    fn test_write_statistics_json() {
        let file = NamedTempFile::new().unwrap();
        let mut writer = DataFileWriter::create(file.path()).unwrap();

        let mut stats = AnalysisStatistics::default();
        stats.record(&event(0, true));
        stats.record(&event(1, false));
        writer.write_json(&stats).unwrap();

        let content = std::fs::read_to_string(file.path()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert_eq!(value["n_events"], 2);
        assert_eq!(value["n_fiducial"], 1);
        assert_eq!(value["n_vetoed"], 1);
        assert_eq!(value["total_hits"], 24);
    }
}
