//! `bk-core` — foundational types for the bunker barge simulator.
//!
//! This crate is a dependency of every other `bk-*` crate.  It has no `bk-*`
//! dependencies and only one external one (`rand`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module      | Contents                                              |
//! |-------------|-------------------------------------------------------|
//! | [`ids`]     | `VesselId`, `BargeId`                                 |
//! | [`target`]  | `Target` — origin or a vessel                         |
//! | [`time`]    | `Minute` clock value                                  |
//! | [`units`]   | knots → metres/minute, quay spacing, arrival epsilon  |
//! | [`rng`]     | `SimRng` (seeded, per trial)                          |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod ids;
pub mod rng;
pub mod target;
pub mod time;
pub mod units;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use ids::{BargeId, VesselId};
pub use rng::SimRng;
pub use target::Target;
pub use time::Minute;
pub use units::{ARRIVAL_EPSILON_M, DISTANCE_BETWEEN_POINTS_M, knots_to_m_per_min};
