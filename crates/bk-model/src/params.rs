//! Port-wide physical constants.

use std::f64::consts::TAU;

use bk_core::{Minute, Target};

/// Constants shared by every vessel and barge of an instance.
#[derive(Debug, Clone, PartialEq)]
pub struct PortParams {
    /// Peak tide current, knots.
    pub tide_amplitude: f64,
    /// Tide period, minutes.
    pub tide_period: f64,
    /// Tons pumped per minute, both when reloading and when fuelling.
    pub fuel_flow_rate_per_minute: f64,
    /// Minutes to moor/unmoor at the origin.
    pub origin_setup_time: u64,
    /// Minutes to moor/unmoor alongside a vessel.
    pub vessel_setup_time: u64,
    /// Fraction of capacity below which a barge must reload.
    pub min_fuel_fraction: f64,
}

impl PortParams {
    pub const DEFAULT_TIDE_AMPLITUDE: f64 = 2.0;
    pub const DEFAULT_TIDE_PERIOD: f64 = 24.0 * 60.0;
    pub const DEFAULT_FLOW_RATE: f64 = 500.0 / 60.0;
    pub const DEFAULT_SETUP_TIME: u64 = 60;
    pub const DEFAULT_MIN_FUEL_FRACTION: f64 = 0.05;
    /// Longest accepted setup time, minutes.
    pub const MAX_SETUP_TIME: u64 = u32::MAX as u64;

    /// Signed tide current at minute `t`, knots.
    #[inline]
    pub fn tide_speed(&self, t: Minute) -> f64 {
        self.tide_amplitude * (TAU * t.as_f64() / self.tide_period).sin()
    }

    /// Setup duration for mooring at `target`.
    #[inline]
    pub fn setup_time(&self, target: Target) -> u64 {
        match target {
            Target::Origin    => self.origin_setup_time,
            Target::Vessel(_) => self.vessel_setup_time,
        }
    }
}

impl Default for PortParams {
    fn default() -> Self {
        Self {
            tide_amplitude:            Self::DEFAULT_TIDE_AMPLITUDE,
            tide_period:               Self::DEFAULT_TIDE_PERIOD,
            fuel_flow_rate_per_minute: Self::DEFAULT_FLOW_RATE,
            origin_setup_time:         Self::DEFAULT_SETUP_TIME,
            vessel_setup_time:         Self::DEFAULT_SETUP_TIME,
            min_fuel_fraction:         Self::DEFAULT_MIN_FUEL_FRACTION,
        }
    }
}
