//! CSV output backend.
//!
//! Creates two files in the output directory:
//! - `barge_snapshots.csv`
//! - `vessel_snapshots.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use bk_state::StateSnapshot;

use crate::OutputResult;
use crate::row::{BargeRow, VesselRow, barge_rows, vessel_rows};
use crate::writer::OutputWriter;

pub const BARGE_FILE: &str = "barge_snapshots.csv";
pub const VESSEL_FILE: &str = "vessel_snapshots.csv";

/// Writes one row per barge and one row per vessel for every snapshot.
pub struct CsvWriter {
    barges:   Writer<File>,
    vessels:  Writer<File>,
    finished: bool,
}

impl CsvWriter {
    /// Create the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut barges = Writer::from_path(dir.join(BARGE_FILE))?;
        barges.write_record(BargeRow::HEADER)?;

        let mut vessels = Writer::from_path(dir.join(VESSEL_FILE))?;
        vessels.write_record(VesselRow::HEADER)?;

        Ok(Self {
            barges,
            vessels,
            finished: false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_snapshot(&mut self, snapshot: &StateSnapshot) -> OutputResult<()> {
        for row in barge_rows(snapshot) {
            self.barges.write_record(row.record())?;
        }
        for row in vessel_rows(snapshot) {
            self.vessels.write_record(row.record())?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.barges.flush()?;
        self.vessels.flush()?;
        Ok(())
    }
}
