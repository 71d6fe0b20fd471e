//! The `OutputWriter` trait implemented by all backend writers.

use bk_state::{SimulationState, StateSnapshot};

use crate::OutputResult;

/// Trait implemented by the JSON and CSV writers.
///
/// Errors are stored by [`SimOutputObserver`][crate::SimOutputObserver] and
/// retrieved with `take_error`, since observer hooks cannot fail.
pub trait OutputWriter {
    /// Write the record for one minute.
    fn write_snapshot(&mut self, snapshot: &StateSnapshot) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}

/// Write every `interval`-th state of a finished run, then finish.
///
/// Uses the same minute filter as the observer (`time % interval == 0`);
/// `interval` 0 is treated as 1.
pub fn write_history<W: OutputWriter>(
    writer:   &mut W,
    history:  &[SimulationState],
    interval: u64,
) -> OutputResult<()> {
    let interval = interval.max(1);
    for state in history.iter().filter(|s| s.time().0.is_multiple_of(interval)) {
        writer.write_snapshot(&state.snapshot())?;
    }
    writer.finish()
}
