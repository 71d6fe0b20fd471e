//! Fuel barges.

use bk_core::BargeId;

/// A barge that carries fuel from the origin to vessels.
#[derive(Debug, Clone, PartialEq)]
pub struct Barge {
    pub id: BargeId,
    /// Tons the barge holds when full.
    pub fuel_capacity: f64,
    /// Below this many tons the barge may only be sent to reload.
    pub min_fuel: f64,
    /// Speed of an empty barge in still water, knots.
    pub base_move_speed_knots: f64,
    /// Knots subtracted from the base speed per ton carried.
    pub move_speed_per_ton: f64,
}

impl Barge {
    pub const DEFAULT_BASE_MOVE_SPEED_KNOTS: f64 = 4.0;
    pub const DEFAULT_MOVE_SPEED_PER_TON: f64 = -0.001;

    /// A barge with the default speed model and a reload threshold of
    /// `min_fuel_fraction × fuel_capacity`.
    pub fn new(id: BargeId, fuel_capacity: f64, min_fuel_fraction: f64) -> Self {
        Self {
            id,
            fuel_capacity,
            min_fuel:              fuel_capacity * min_fuel_fraction,
            base_move_speed_knots: Self::DEFAULT_BASE_MOVE_SPEED_KNOTS,
            move_speed_per_ton:    Self::DEFAULT_MOVE_SPEED_PER_TON,
        }
    }

    /// Override the speed model.
    pub fn with_speed(mut self, base_move_speed_knots: f64, move_speed_per_ton: f64) -> Self {
        self.base_move_speed_knots = base_move_speed_knots;
        self.move_speed_per_ton    = move_speed_per_ton;
        self
    }

    /// Signed speed over ground, knots, when heading in `direction` (±1)
    /// with `fuel` tons aboard and a signed `tide` current.
    #[inline]
    pub fn speed_knots(&self, fuel: f64, direction: f64, tide: f64) -> f64 {
        direction * (self.base_move_speed_knots - self.move_speed_per_ton * fuel) + tide
    }
}
