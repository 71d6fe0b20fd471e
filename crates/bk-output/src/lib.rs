//! `bk-output` — simulation output writers for the bunker barge simulator.
//!
//! | Backend | Files created                                          |
//! |---------|--------------------------------------------------------|
//! | JSON    | `snapshots.json` (array of per-minute records)         |
//! | CSV     | `barge_snapshots.csv`, `vessel_snapshots.csv`          |
//!
//! Both backends implement [`OutputWriter`] and are driven by
//! [`SimOutputObserver`], which implements `bk_sim::SimObserver`, or by
//! [`write_history`] for a run that has already finished.
//!
//! # Usage
//!
//! ```rust,ignore
//! use bk_output::{CsvWriter, SimOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = SimOutputObserver::new(writer, &config);
//! sim.run(&mut obs)?;
//! if let Some(e) = obs.take_error() {
//!     eprintln!("output error: {e}");
//! }
//! ```

pub mod csv;
pub mod error;
pub mod json;
pub mod observer;
pub mod row;
pub mod writer;


pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use json::JsonWriter;
pub use observer::SimOutputObserver;
pub use row::{BargeRow, VesselRow};
pub use writer::{OutputWriter, write_history};
