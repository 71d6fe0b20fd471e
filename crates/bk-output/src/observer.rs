//! `SimOutputObserver<W>` — bridges `SimObserver` to an `OutputWriter`.

use tracing::debug;

use bk_sim::{SimConfig, SimObserver};
use bk_state::SimulationState;

use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that writes recorded minutes to any [`OutputWriter`]
/// backend (JSON, CSV, …).
///
/// Errors from the writer are stored internally because `SimObserver` methods
/// have no return value.  After `sim.run()` returns, check for errors with
/// [`take_error`][Self::take_error].
pub struct SimOutputObserver<W: OutputWriter> {
    writer:     W,
    interval:   u64,
    written:    u64,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    /// Create an observer backed by `writer` that keeps every
    /// `config.snapshot_interval`-th minute.
    pub fn new(writer: W, config: &SimConfig) -> Self {
        Self {
            writer,
            interval:   config.snapshot_interval.max(1),
            written:    0,
            last_error: None,
        }
    }

    /// Take the stored write error (if any) after `sim.run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Snapshots handed to the writer so far.
    pub fn written(&self) -> u64 {
        self.written
    }

    /// Unwrap the inner writer (e.g. to inspect files after the sim).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_snapshot(&mut self, state: &SimulationState) {
        if !state.time().0.is_multiple_of(self.interval) {
            return;
        }
        let result = self.writer.write_snapshot(&state.snapshot());
        if result.is_ok() {
            self.written += 1;
        }
        self.store_err(result);
    }

    fn on_sim_end(&mut self, _final_state: &SimulationState) {
        let result = self.writer.finish();
        debug!(written = self.written, "output finished");
        self.store_err(result);
    }
}
