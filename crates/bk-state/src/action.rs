//! Queued barge actions.

use std::fmt;

use bk_core::{Target, VesselId};

/// One physical operation in a barge's action queue.
///
/// Only the head of the queue is worked on, one minute at a time.  The
/// `Display` form is the action tag used in snapshots: `GO:370`,
/// `SETUP_INIT:ORIGIN`, `REFUEL`, `FUEL:4`, `SETUP_END:4`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    /// Sail to a quay position, metres.
    GoTo(f64),
    /// Moor at the target.
    SetupInit(Target),
    /// Unmoor from the target; completing it releases the reservation.
    SetupEnd(Target),
    /// Pump fuel from the origin until full.
    Refuel,
    /// Pump fuel into a vessel.
    Fuel(VesselId),
}

impl Action {
    /// The four actions that serve `target` once the barge is at `position`.
    pub fn sequence_for(target: Target, position: f64) -> [Action; 4] {
        let transfer = match target {
            Target::Origin     => Action::Refuel,
            Target::Vessel(id) => Action::Fuel(id),
        };
        [
            Action::GoTo(position),
            Action::SetupInit(target),
            transfer,
            Action::SetupEnd(target),
        ]
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::GoTo(pos)         => write!(f, "GO:{pos}"),
            Action::SetupInit(target) => write!(f, "SETUP_INIT:{target}"),
            Action::SetupEnd(target)  => write!(f, "SETUP_END:{target}"),
            Action::Refuel            => f.write_str("REFUEL"),
            Action::Fuel(id)          => write!(f, "FUEL:{id}"),
        }
    }
}
