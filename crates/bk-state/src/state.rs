//! Per-entity simulation state.

use std::collections::VecDeque;
use std::sync::Arc;

use bk_core::{BargeId, Minute, Target, VesselId};
use bk_model::{Barge, Instance};

use crate::Action;

// ── VesselState ───────────────────────────────────────────────────────────────

/// Mutable state of one vessel.
#[derive(Debug, Clone, PartialEq)]
pub struct VesselState {
    pub id: VesselId,
    /// Tons still wanted.  Starts at the vessel's `fuel_demand`, never
    /// increases, never drops below 0.
    pub current_fuel_demand: f64,
}

// ── BargeState ────────────────────────────────────────────────────────────────

/// Mutable state of one barge.
#[derive(Debug, Clone, PartialEq)]
pub struct BargeState {
    pub id: BargeId,
    /// Metres from the origin along the quay.
    pub location: f64,
    /// Tons aboard, `0..=fuel_capacity`.
    pub current_fuel: f64,
    /// Exclusive reservation held from assignment until `SetupEnd` completes.
    pub current_vessel_id: Option<Target>,
    pub setup_init_progress: Option<u64>,
    pub setup_end_progress: Option<u64>,
    /// Pending operations; the head gets one minute of work per step.
    pub action_queue: VecDeque<Action>,
}

impl BargeState {
    /// A barge moored at the origin with a full load.
    pub fn at_origin(barge: &Barge) -> Self {
        Self {
            id:                  barge.id,
            location:            0.0,
            current_fuel:        barge.fuel_capacity,
            current_vessel_id:   None,
            setup_init_progress: None,
            setup_end_progress:  None,
            action_queue:        VecDeque::new(),
        }
    }

    /// `true` if the barge holds no reservation and has nothing queued.
    #[inline]
    pub fn is_idle(&self) -> bool {
        self.current_vessel_id.is_none() && self.action_queue.is_empty()
    }

    /// Signed speed over ground in knots heading in `direction` (±1).
    #[inline]
    pub fn speed_knots(&self, barge: &Barge, direction: f64, tide: f64) -> f64 {
        barge.speed_knots(self.current_fuel, direction, tide)
    }
}

// ── SimulationState ───────────────────────────────────────────────────────────

/// Everything that changes during a run, at one minute.
///
/// Vessel and barge records are stored in the same order as in the
/// [`Instance`], each behind its own `Arc`.  Cloning a state copies only
/// pointers; mutating a record through [`vessel_mut_at`][Self::vessel_mut_at] or
/// [`barge_mut`][Self::barge_mut] copies that record first if another state
/// still shares it.
#[derive(Debug, Clone)]
pub struct SimulationState {
    pub(crate) time:     Minute,
    pub(crate) instance: Arc<Instance>,
    pub(crate) vessels:  Vec<Arc<VesselState>>,
    pub(crate) barges:   Vec<Arc<BargeState>>,
}

impl SimulationState {
    /// The state at minute 0: every vessel wants its full demand, every barge
    /// is full and idle at the origin.
    pub fn new(instance: Arc<Instance>) -> Self {
        let vessels = instance
            .vessels()
            .iter()
            .map(|v| Arc::new(VesselState { id: v.id, current_fuel_demand: v.fuel_demand }))
            .collect();
        let barges = instance
            .barges()
            .iter()
            .map(|b| Arc::new(BargeState::at_origin(b)))
            .collect();
        Self { time: Minute::ZERO, instance, vessels, barges }
    }

    // ── Read access ───────────────────────────────────────────────────────

    #[inline]
    pub fn time(&self) -> Minute {
        self.time
    }

    #[inline]
    pub fn instance(&self) -> &Arc<Instance> {
        &self.instance
    }

    /// Tide current at the state's minute, knots.
    #[inline]
    pub fn tide_speed(&self) -> f64 {
        self.instance.tide_speed(self.time)
    }

    pub fn vessel_states(&self) -> impl ExactSizeIterator<Item = &VesselState> {
        self.vessels.iter().map(|v| v.as_ref())
    }

    pub fn barge_states(&self) -> impl ExactSizeIterator<Item = &BargeState> {
        self.barges.iter().map(|b| b.as_ref())
    }

    /// Vessel state at instance position `idx`.
    #[inline]
    pub fn vessel_at(&self, idx: usize) -> &VesselState {
        &self.vessels[idx]
    }

    /// Barge state at instance position `idx`.
    #[inline]
    pub fn barge_at(&self, idx: usize) -> &BargeState {
        &self.barges[idx]
    }

    pub fn vessel(&self, id: VesselId) -> Option<&VesselState> {
        self.instance.vessel_idx(id).map(|i| self.vessel_at(i))
    }

    pub fn barge(&self, id: BargeId) -> Option<&BargeState> {
        self.instance.barge_idx(id).map(|i| self.barge_at(i))
    }

    /// Tons still wanted across all vessels.
    pub fn remaining_demand(&self) -> f64 {
        self.vessel_states().map(|v| v.current_fuel_demand).sum()
    }

    /// Tons delivered so far across all vessels.
    pub fn delivered_fuel(&self) -> f64 {
        self.instance.total_demand() - self.remaining_demand()
    }

    /// `true` while `time` has not passed the last departure.
    pub fn within_horizon(&self) -> bool {
        self.instance.max_departure().is_some_and(|end| self.time <= end)
    }

    /// `true` if `self` and `other` still share barge record `idx` (neither
    /// has written to it since they diverged).
    pub fn shares_barge(&self, other: &SimulationState, idx: usize) -> bool {
        Arc::ptr_eq(&self.barges[idx], &other.barges[idx])
    }

    /// `true` if `self` and `other` still share vessel record `idx`.
    pub fn shares_vessel(&self, other: &SimulationState, idx: usize) -> bool {
        Arc::ptr_eq(&self.vessels[idx], &other.vessels[idx])
    }

    // ── Copy-on-write access ──────────────────────────────────────────────

    /// Mutable vessel record at `idx`, copied first if shared.
    #[inline]
    pub fn vessel_mut_at(&mut self, idx: usize) -> &mut VesselState {
        Arc::make_mut(&mut self.vessels[idx])
    }

    /// Mutable barge record at `idx`, copied first if shared.
    #[inline]
    pub fn barge_mut_at(&mut self, idx: usize) -> &mut BargeState {
        Arc::make_mut(&mut self.barges[idx])
    }

    pub fn barge_mut(&mut self, id: BargeId) -> Option<&mut BargeState> {
        let idx = self.instance.barge_idx(id)?;
        Some(self.barge_mut_at(idx))
    }
}
