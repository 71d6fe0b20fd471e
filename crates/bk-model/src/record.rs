//! Wire records for the instance JSON format.
//!
//! ```json
//! {
//!   "vessels": [{"id": 1, "arrival_time": 0, "departure_time": 600, "fuel_demand": 1500, "point": 12}],
//!   "barges":  [{"id": 1, "fuel_capacity": 5000, "base_move_speed_knots": 4, "move_speed_per_ton": -0.001}],
//!   "tide_amplitude": 2,
//!   "tide_period": 1440,
//!   "fuel_flow_rate_per_minute": 8.333333333333334,
//!   "origin_setup_time": 60,
//!   "vessel_setup_time": 60
//! }
//! ```
//!
//! Port constants and barge speeds that are missing fall back to the
//! [`PortParams`] / [`Barge`] defaults.  Unknown fields such as `name` are
//! ignored.

use serde::{Deserialize, Serialize};

use bk_core::{BargeId, Minute, VesselId};

use crate::{Barge, Instance, ModelError, PortParams, Vessel};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VesselRecord {
    pub id:             VesselId,
    pub arrival_time:   Minute,
    pub departure_time: Minute,
    pub fuel_demand:    f64,
    pub point:          u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BargeRecord {
    pub id:            BargeId,
    pub fuel_capacity: f64,
    /// Explicit reload threshold; derived from `min_fuel_fraction` if absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_fuel: Option<f64>,
    #[serde(default = "default_base_speed")]
    pub base_move_speed_knots: f64,
    #[serde(default = "default_speed_per_ton")]
    pub move_speed_per_ton: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InstanceRecord {
    pub vessels: Vec<VesselRecord>,
    pub barges:  Vec<BargeRecord>,
    #[serde(default = "default_tide_amplitude")]
    pub tide_amplitude: f64,
    #[serde(default = "default_tide_period")]
    pub tide_period: f64,
    #[serde(default = "default_flow_rate")]
    pub fuel_flow_rate_per_minute: f64,
    #[serde(default = "default_setup_time")]
    pub origin_setup_time: u64,
    #[serde(default = "default_setup_time")]
    pub vessel_setup_time: u64,
    #[serde(default = "default_min_fuel_fraction")]
    pub min_fuel_fraction: f64,
}

fn default_base_speed() -> f64 { Barge::DEFAULT_BASE_MOVE_SPEED_KNOTS }
fn default_speed_per_ton() -> f64 { Barge::DEFAULT_MOVE_SPEED_PER_TON }
fn default_tide_amplitude() -> f64 { PortParams::DEFAULT_TIDE_AMPLITUDE }
fn default_tide_period() -> f64 { PortParams::DEFAULT_TIDE_PERIOD }
fn default_flow_rate() -> f64 { PortParams::DEFAULT_FLOW_RATE }
fn default_setup_time() -> u64 { PortParams::DEFAULT_SETUP_TIME }
fn default_min_fuel_fraction() -> f64 { PortParams::DEFAULT_MIN_FUEL_FRACTION }

// ── Conversions ───────────────────────────────────────────────────────────────

impl TryFrom<InstanceRecord> for Instance {
    type Error = ModelError;

    fn try_from(rec: InstanceRecord) -> Result<Self, Self::Error> {
        let params = PortParams {
            tide_amplitude:            rec.tide_amplitude,
            tide_period:               rec.tide_period,
            fuel_flow_rate_per_minute: rec.fuel_flow_rate_per_minute,
            origin_setup_time:         rec.origin_setup_time,
            vessel_setup_time:         rec.vessel_setup_time,
            min_fuel_fraction:         rec.min_fuel_fraction,
        };

        let vessels = rec
            .vessels
            .into_iter()
            .map(|v| Vessel {
                id:             v.id,
                arrival_time:   v.arrival_time,
                departure_time: v.departure_time,
                fuel_demand:    v.fuel_demand,
                point:          v.point,
            })
            .collect();

        let barges = rec
            .barges
            .into_iter()
            .map(|b| Barge {
                id:                    b.id,
                fuel_capacity:         b.fuel_capacity,
                min_fuel:              b.min_fuel.unwrap_or(b.fuel_capacity * params.min_fuel_fraction),
                base_move_speed_knots: b.base_move_speed_knots,
                move_speed_per_ton:    b.move_speed_per_ton,
            })
            .collect();

        Instance::new(vessels, barges, params)
    }
}

impl From<&Instance> for InstanceRecord {
    fn from(inst: &Instance) -> Self {
        let p = inst.params();
        Self {
            vessels: inst
                .vessels()
                .iter()
                .map(|v| VesselRecord {
                    id:             v.id,
                    arrival_time:   v.arrival_time,
                    departure_time: v.departure_time,
                    fuel_demand:    v.fuel_demand,
                    point:          v.point,
                })
                .collect(),
            barges: inst
                .barges()
                .iter()
                .map(|b| BargeRecord {
                    id:                    b.id,
                    fuel_capacity:         b.fuel_capacity,
                    min_fuel:              Some(b.min_fuel),
                    base_move_speed_knots: b.base_move_speed_knots,
                    move_speed_per_ton:    b.move_speed_per_ton,
                })
                .collect(),
            tide_amplitude:            p.tide_amplitude,
            tide_period:               p.tide_period,
            fuel_flow_rate_per_minute: p.fuel_flow_rate_per_minute,
            origin_setup_time:         p.origin_setup_time,
            vessel_setup_time:         p.vessel_setup_time,
            min_fuel_fraction:         p.min_fuel_fraction,
        }
    }
}

impl From<Instance> for InstanceRecord {
    fn from(inst: Instance) -> Self {
        InstanceRecord::from(&inst)
    }
}
