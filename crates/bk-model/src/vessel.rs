//! Moored vessels.

use bk_core::{DISTANCE_BETWEEN_POINTS_M, Minute, VesselId};

/// A vessel moored at a docking point for a fixed window.
#[derive(Debug, Clone, PartialEq)]
pub struct Vessel {
    pub id: VesselId,
    /// First minute the vessel is in port.
    pub arrival_time: Minute,
    /// Minute the vessel leaves; it is no longer in port at this minute.
    pub departure_time: Minute,
    /// Tons of fuel requested on arrival.
    pub fuel_demand: f64,
    /// Docking point index along the quay, starting at 1.
    pub point: u32,
}

impl Vessel {
    /// Distance from the origin along the quay, metres.
    #[inline]
    pub fn position(&self) -> f64 {
        self.point as f64 * DISTANCE_BETWEEN_POINTS_M
    }

    /// `arrival_time <= now < departure_time`.
    #[inline]
    pub fn in_port(&self, now: Minute) -> bool {
        self.arrival_time <= now && now < self.departure_time
    }

    /// Minutes left before departure; negative once it has left.
    #[inline]
    pub fn remaining_time(&self, now: Minute) -> i64 {
        now.until(self.departure_time)
    }
}
