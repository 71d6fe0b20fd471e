//! Physical units used on the quay.

/// Spacing between consecutive docking points, metres.
pub const DISTANCE_BETWEEN_POINTS_M: f64 = 370.0;

/// Metres in one nautical mile.
pub const METERS_PER_NAUTICAL_MILE: f64 = 1852.0;

/// A barge closer than this to its `GoTo` target has arrived.
pub const ARRIVAL_EPSILON_M: f64 = 1e-6;

/// Convert a speed in knots to metres per minute.
#[inline]
pub fn knots_to_m_per_min(knots: f64) -> f64 {
    knots * METERS_PER_NAUTICAL_MILE / 60.0
}
