//! `bk-model` — the immutable problem instance.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                    |
//! |--------------|-------------------------------------------------------------|
//! | [`vessel`]   | `Vessel` — arrival/departure window, demand, docking point  |
//! | [`barge`]    | `Barge` — capacity, reload threshold, speed model           |
//! | [`params`]   | `PortParams` — tide, flow rate, setup times                 |
//! | [`instance`] | `Instance` — validated bundle with id → index lookup        |
//! | [`record`]   | Serde wire records for the instance JSON format             |
//! | [`loader`]   | Read/write instance JSON files                              |
//! | [`error`]    | `ModelError`, `ModelResult<T>`                              |
//!
//! An `Instance` is built once, validated, and never mutated; simulation
//! states share it through an `Arc`.

pub mod barge;
pub mod error;
pub mod instance;
pub mod loader;
pub mod params;
pub mod record;
pub mod vessel;


pub use barge::Barge;
pub use error::{ModelError, ModelResult};
pub use instance::Instance;
pub use loader::{load_instance_json, load_instance_reader, save_instance_json};
pub use params::PortParams;
pub use record::{BargeRecord, InstanceRecord, VesselRecord};
pub use vessel::Vessel;
