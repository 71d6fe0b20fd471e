//! `bk-state` — mutable-per-minute simulation state and its transitions.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                      |
//! |----------------|---------------------------------------------------------------|
//! | [`action`]     | `Action` — one queued physical operation of a barge           |
//! | [`state`]      | `VesselState`, `BargeState`, `SimulationState`                |
//! | [`candidates`] | `Candidate`, `candidates()` — legal assignments this minute   |
//! | [`apply`]      | `apply()` — reserve a target and enqueue its action sequence  |
//! | [`engine`]     | `advance()` — execute one minute of every barge's queue       |
//! | [`snapshot`]   | `StateSnapshot` — the per-minute output record                |
//! | [`invariants`] | `check_invariants()` — bounds and reservation checks          |
//! | [`error`]      | `StateError`, `StateResult<T>`                                |
//!
//! # One simulated minute
//!
//! ```text
//! state(t) ──► candidates ──► apply ... (repeat until no candidates)
//!          ──► advance ──► state(t+1)
//! ```
//!
//! `advance` never touches its input.  States share the `Instance` and every
//! vessel/barge record behind `Arc`s; a step copies only the records it
//! changes, so any state kept in a trajectory stays valid after later steps.

pub mod action;
pub mod apply;
pub mod candidates;
pub mod engine;
pub mod error;
pub mod invariants;
pub mod snapshot;
pub mod state;

#[cfg(test)]
mod tests;

pub use action::Action;
pub use apply::apply;
pub use candidates::{Candidate, candidates};
pub use engine::advance;
pub use error::{StateError, StateResult};
pub use invariants::{InvariantViolation, check_invariants};
pub use snapshot::{BargeSnapshot, StateSnapshot, VesselSnapshot};
pub use state::{BargeState, SimulationState, VesselState};
