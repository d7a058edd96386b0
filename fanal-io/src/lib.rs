//! fanal-io: File I/O for fanal.
//!
//! Reads Monte-Carlo hit tables and writes per-event analysis results and
//! run summaries.
//!

mod error;
mod reader;
mod writer;

pub use error::{Error, Result};
pub use reader::{HitTableReader, HIT_TABLE_COLUMNS};
pub use writer::{DataFileWriter, EVENT_CSV_HEADER};
