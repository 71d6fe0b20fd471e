//! JSON output backend.
//!
//! Streams every snapshot into a single array in `snapshots.json`, one
//! element per recorded minute, in the external record format.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use bk_state::StateSnapshot;

use crate::OutputResult;
use crate::writer::OutputWriter;

pub const SNAPSHOT_FILE: &str = "snapshots.json";

/// Writes `[record, record, …]` incrementally.  The closing bracket is
/// written by [`finish`][OutputWriter::finish]; until then the file is not
/// valid JSON.
pub struct JsonWriter {
    out:      BufWriter<File>,
    written:  usize,
    finished: bool,
}

impl JsonWriter {
    /// Create `snapshots.json` in `dir` and open the array.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut out = BufWriter::new(File::create(dir.join(SNAPSHOT_FILE))?);
        out.write_all(b"[")?;
        Ok(Self { out, written: 0, finished: false })
    }

    /// Records written so far.
    pub fn written(&self) -> usize {
        self.written
    }
}

impl OutputWriter for JsonWriter {
    fn write_snapshot(&mut self, snapshot: &StateSnapshot) -> OutputResult<()> {
        if self.written > 0 {
            self.out.write_all(b",")?;
        }
        self.out.write_all(b"\n")?;
        serde_json::to_writer(&mut self.out, snapshot)?;
        self.written += 1;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.out.write_all(b"\n]\n")?;
        self.out.flush()?;
        Ok(())
    }
}
