//! `bk-policy` — which legal assignment to commit next.
//!
//! | Module     | Contents                                                  |
//! |------------|-----------------------------------------------------------|
//! | [`model`]  | `DecisionPolicy` trait, `PolicyKind`                      |
//! | [`greedy`] | `GreedyPolicy`, `GreedyScore`                             |
//! | [`random`] | `RandomPolicy` — uniform pick from a seeded `SimRng`      |
//! | [`error`]  | `PolicyError`, `PolicyResult<T>`                          |
//!
//! The driver calls [`DecisionPolicy::choose`] repeatedly within a minute,
//! regenerating candidates after each commit, so a policy only ever decides
//! one assignment at a time and never looks ahead.

pub mod error;
pub mod greedy;
pub mod model;
pub mod random;


pub use error::{PolicyError, PolicyResult};
pub use greedy::{GreedyPolicy, GreedyScore};
pub use model::{DecisionPolicy, PolicyKind};
pub use random::RandomPolicy;
