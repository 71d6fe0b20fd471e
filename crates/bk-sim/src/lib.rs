//! `bk-sim` — the minute loop that drives a bunker barge simulation.
//!
//! # One minute
//!
//! ```text
//! while time <= max departure_time:
//!   ① Record   — the current state is pushed onto the history and handed
//!                to SimObserver::on_snapshot.
//!   ② Assign   — candidates → policy.choose → apply, repeated until the
//!                generator returns nothing.  Every match for the minute is
//!                made before anything moves.
//!   ③ Advance  — one unit of work per barge queue; time + 1.
//! ```
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                    |
//! |------------|-----------------------------------------------------------|
//! | `parallel` | [`run_trials`] spreads trials over Rayon's thread pool.   |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use bk_model::load_instance_json;
//! use bk_sim::{NoopObserver, SimBuilder};
//!
//! let instance = load_instance_json("port.json".as_ref())?;
//! let mut sim = SimBuilder::new(instance).build()?;
//! let history = sim.run(&mut NoopObserver)?;
//! ```

pub mod builder;
pub mod config;
pub mod error;
pub mod observer;
pub mod sim;
pub mod trials;


pub use builder::SimBuilder;
pub use config::SimConfig;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use sim::{Simulation, run_simulation};
pub use trials::{TrialOutcome, median_trial, run_trials};
