//! Flat per-entity rows for tabular backends.

use bk_state::{BargeSnapshot, StateSnapshot, VesselSnapshot};

/// Separator between action tags in the `action_queue` column.
pub const ACTION_SEPARATOR: &str = ";";

/// One barge at one minute.
#[derive(Debug, Clone, PartialEq)]
pub struct BargeRow {
    pub time:                u64,
    pub id:                  u32,
    pub location:            f64,
    pub current_fuel:        f64,
    pub fuel_capacity:       f64,
    /// Empty when unreserved, `ORIGIN`, or the vessel id.
    pub current_vessel_id:   String,
    pub setup_init_progress: Option<u64>,
    pub setup_end_progress:  Option<u64>,
    /// Action tags joined with [`ACTION_SEPARATOR`], head first.
    pub action_queue:        String,
    pub speed:               f64,
}

impl BargeRow {
    pub const HEADER: [&'static str; 10] = [
        "time",
        "id",
        "location",
        "current_fuel",
        "fuel_capacity",
        "current_vessel_id",
        "setup_init_progress",
        "setup_end_progress",
        "action_queue",
        "speed",
    ];

    pub fn new(time: u64, b: &BargeSnapshot) -> Self {
        Self {
            time,
            id:                  b.id.get(),
            location:            b.location,
            current_fuel:        b.current_fuel,
            fuel_capacity:       b.fuel_capacity,
            current_vessel_id:   b.current_vessel_id.map(|t| t.to_string()).unwrap_or_default(),
            setup_init_progress: b.setup_init_progress,
            setup_end_progress:  b.setup_end_progress,
            action_queue:        b.action_queue.join(ACTION_SEPARATOR),
            speed:               b.speed,
        }
    }

    /// Cells in [`HEADER`][Self::HEADER] order; `None` counters are empty.
    pub fn record(&self) -> [String; 10] {
        [
            self.time.to_string(),
            self.id.to_string(),
            self.location.to_string(),
            self.current_fuel.to_string(),
            self.fuel_capacity.to_string(),
            self.current_vessel_id.clone(),
            optional(self.setup_init_progress),
            optional(self.setup_end_progress),
            self.action_queue.clone(),
            self.speed.to_string(),
        ]
    }
}

/// One vessel at one minute.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VesselRow {
    pub time:                u64,
    pub id:                  u32,
    pub position:            f64,
    pub current_fuel_demand: f64,
    pub fuel_demand:         f64,
    pub arrival_time:        u64,
    pub departure_time:      u64,
}

impl VesselRow {
    pub const HEADER: [&'static str; 7] = [
        "time",
        "id",
        "position",
        "current_fuel_demand",
        "fuel_demand",
        "arrival_time",
        "departure_time",
    ];

    pub fn new(time: u64, v: &VesselSnapshot) -> Self {
        Self {
            time,
            id:                  v.id.get(),
            position:            v.position,
            current_fuel_demand: v.current_fuel_demand,
            fuel_demand:         v.fuel_demand,
            arrival_time:        v.arrival_time.0,
            departure_time:      v.departure_time.0,
        }
    }

    pub fn record(&self) -> [String; 7] {
        [
            self.time.to_string(),
            self.id.to_string(),
            self.position.to_string(),
            self.current_fuel_demand.to_string(),
            self.fuel_demand.to_string(),
            self.arrival_time.to_string(),
            self.departure_time.to_string(),
        ]
    }
}

/// Barge rows of one snapshot, in instance order.
pub fn barge_rows(snapshot: &StateSnapshot) -> impl Iterator<Item = BargeRow> + '_ {
    snapshot.barges.iter().map(|b| BargeRow::new(snapshot.time.0, b))
}

/// Vessel rows of one snapshot, in instance order.
pub fn vessel_rows(snapshot: &StateSnapshot) -> impl Iterator<Item = VesselRow> + '_ {
    snapshot.vessels.iter().map(|v| VesselRow::new(snapshot.time.0, v))
}

fn optional(v: Option<u64>) -> String {
    v.map(|n| n.to_string()).unwrap_or_default()
}
