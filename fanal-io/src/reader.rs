//! Monte-Carlo hit table reader.

use crate::{Error, Result};
use fanal_core::{McEvent, McHit};
use serde::Deserialize;
use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

/// Columns every hit table must provide (in any order).
pub const HIT_TABLE_COLUMNS: [&str; 6] = ["event_id", "x", "y", "z", "time", "energy"];

// One row of the table; extra columns are ignored.
#[derive(Deserialize)]
struct HitRow {
    event_id: u64,
    x: f64,
    y: f64,
    z: f64,
    time: f64,
    energy: f64,
}

/// Reader for CSV hit tables.
///
/// The first record is a header naming at least the columns in
/// [`HIT_TABLE_COLUMNS`]. Fields may be quoted, surrounding whitespace is
/// trimmed, and blank lines and lines starting with `#` are skipped. Hits are
/// grouped into events by `event_id`, events keep the order of their first
/// hit.
pub struct HitTableReader {
    path: PathBuf,
}

impl HitTableReader {
    /// Opens a hit table.
    ///
    /// # Errors
    /// Returns an error if the file does not exist.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        // Fail early on a missing file
        File::open(&path)?;
        Ok(Self { path })
    }

    /// Reads all events of the table.
    ///
    /// # Errors
    /// Returns an I/O error or [`Error::InvalidFormat`] naming the offending
    /// line.
    pub fn read_events(&self) -> Result<Vec<McEvent>> {
        let events = Self::parse(File::open(&self.path)?)?;
        log::debug!("read {} events from {}", events.len(), self.path.display());
        Ok(events)
    }

    /// Parses a hit table from any reader.
    ///
    /// # Errors
    /// Same as [`HitTableReader::read_events`].
    pub fn parse<R: Read>(reader: R) -> Result<Vec<McEvent>> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .comment(Some(b'#'))
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers = csv_reader.headers().map_err(format_error)?;
        if headers.is_empty() {
            return Err(Error::InvalidFormat("missing header line".to_string()));
        }
        for name in HIT_TABLE_COLUMNS {
            if !headers.iter().any(|header| header == name) {
                return Err(Error::InvalidFormat(format!("header lacks column '{name}'")));
            }
        }

        let mut events: Vec<McEvent> = Vec::new();
        let mut index: HashMap<u64, usize> = HashMap::new();

        for row in csv_reader.deserialize::<HitRow>() {
            let row = row.map_err(format_error)?;

            let slot = *index.entry(row.event_id).or_insert_with(|| {
                events.push(McEvent::new(row.event_id));
                events.len() - 1
            });
            events[slot].push(McHit::new(row.x, row.y, row.z, row.time, row.energy));
        }

        Ok(events)
    }
}

fn format_error(err: csv::Error) -> Error {
    let line = err.position().map(csv::Position::line);
    let message = err.to_string();
    match err.into_kind() {
        csv::ErrorKind::Io(io) => Error::Io(io),
        _ => match line {
            Some(line) => Error::InvalidFormat(format!("line {line}: {message}")),
            None => Error::InvalidFormat(message),
        },
    }
}
