//! Unit tests for bk-state.

use std::sync::Arc;

use bk_core::{BargeId, Minute, Target, VesselId};
use bk_model::{Barge, Instance, PortParams, Vessel};

use crate::{Action, Candidate, SimulationState};

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Still water, equal origin/vessel setup times.
fn params(setup: u64, flow: f64) -> PortParams {
    PortParams {
        tide_amplitude:            0.0,
        tide_period:               1440.0,
        fuel_flow_rate_per_minute: flow,
        origin_setup_time:         setup,
        vessel_setup_time:         setup,
        min_fuel_fraction:         0.05,
    }
}

fn vessel(id: u32, arrival: u64, departure: u64, demand: f64, point: u32) -> Vessel {
    Vessel {
        id:             VesselId(id),
        arrival_time:   Minute(arrival),
        departure_time: Minute(departure),
        fuel_demand:    demand,
        point,
    }
}

/// 4 knots regardless of load.
fn barge(id: u32, capacity: f64) -> Barge {
    Barge::new(BargeId(id), capacity, 0.05).with_speed(4.0, 0.0)
}

fn state(vessels: Vec<Vessel>, barges: Vec<Barge>, params: PortParams) -> SimulationState {
    SimulationState::new(Arc::new(Instance::new(vessels, barges, params).unwrap()))
}

fn cand(barge: u32, target: Target) -> Candidate {
    Candidate::new(BargeId(barge), target)
}

fn v(id: u32) -> Target {
    Target::Vessel(VesselId(id))
}

/// 4 knots in metres per minute.
const FOUR_KNOTS_M_PER_MIN: f64 = 4.0 * 1852.0 / 60.0;

// ── Initial state ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod initial {
    use super::*;

    #[test]
    fn barges_start_full_and_idle_at_origin() {
        let s = state(vec![vessel(1, 0, 600, 500.0, 1)], vec![barge(1, 5000.0)], params(60, 10.0));
        assert_eq!(s.time(), Minute::ZERO);
        let b = s.barge(BargeId(1)).unwrap();
        assert_eq!(b.location, 0.0);
        assert_eq!(b.current_fuel, 5000.0);
        assert!(b.is_idle());
        assert_eq!(s.vessel(VesselId(1)).unwrap().current_fuel_demand, 500.0);
        assert_eq!(s.delivered_fuel(), 0.0);
        assert!(s.within_horizon());
    }
}

// ── Candidate generation ──────────────────────────────────────────────────────

#[cfg(test)]
mod candidates {
    use super::*;

    #[test]
    fn every_idle_barge_pairs_with_every_eligible_vessel() {
        let s = state(
            vec![vessel(1, 0, 600, 500.0, 1), vessel(2, 0, 600, 500.0, 2)],
            vec![barge(1, 5000.0), barge(2, 5000.0)],
            params(60, 10.0),
        );
        assert_eq!(
            s.candidates(),
            vec![cand(1, v(1)), cand(1, v(2)), cand(2, v(1)), cand(2, v(2))]
        );
    }

    #[test]
    fn busy_barge_never_appears() {
        let mut s = state(
            vec![vessel(1, 0, 600, 500.0, 1), vessel(2, 0, 600, 500.0, 2)],
            vec![barge(1, 5000.0), barge(2, 5000.0)],
            params(60, 10.0),
        );
        s.apply(BargeId(1), v(1)).unwrap();
        let c = s.candidates();
        assert!(c.iter().all(|c| c.barge != BargeId(1)));
        // Vessel 1 is reserved, so barge 2 only sees vessel 2.
        assert_eq!(c, vec![cand(2, v(2))]);
    }

    #[test]
    fn queued_actions_without_reservation_still_exclude() {
        let mut s = state(vec![vessel(1, 0, 600, 500.0, 1)], vec![barge(1, 5000.0)], params(60, 10.0));
        s.barge_mut(BargeId(1)).unwrap().action_queue.push_back(Action::GoTo(0.0));
        assert!(s.candidates().is_empty());
    }

    #[test]
    fn low_fuel_barge_only_gets_origin() {
        let mut s = state(
            vec![vessel(1, 0, 600, 500.0, 1)],
            vec![barge(1, 5000.0), barge(2, 5000.0)],
            params(60, 10.0),
        );
        s.barge_mut(BargeId(1)).unwrap().current_fuel = 100.0; // min_fuel = 250
        assert_eq!(s.candidates(), vec![cand(1, Target::Origin), cand(2, v(1))]);
    }

    #[test]
    fn at_most_one_origin_candidate() {
        let mut s = state(vec![], vec![barge(1, 100.0), barge(2, 100.0)], params(60, 10.0));
        s.barge_mut(BargeId(1)).unwrap().current_fuel = 0.0;
        s.barge_mut(BargeId(2)).unwrap().current_fuel = 0.0;
        assert_eq!(s.candidates(), vec![cand(1, Target::Origin)]);
    }

    #[test]
    fn reserved_origin_blocks_other_low_barges() {
        let mut s = state(vec![], vec![barge(1, 100.0), barge(2, 100.0)], params(60, 10.0));
        s.barge_mut(BargeId(1)).unwrap().current_fuel = 0.0;
        s.barge_mut(BargeId(2)).unwrap().current_fuel = 0.0;
        s.apply(BargeId(1), Target::Origin).unwrap();
        assert!(s.candidates().is_empty());
    }

    #[test]
    fn vessel_not_in_port_is_skipped() {
        let s = state(
            vec![vessel(1, 10, 600, 500.0, 1), vessel(2, 0, 600, 500.0, 2)],
            vec![barge(1, 5000.0)],
            params(60, 10.0),
        );
        assert_eq!(s.candidates(), vec![cand(1, v(2))]);
    }

    #[test]
    fn satisfied_vessel_is_skipped() {
        let s = state(vec![vessel(1, 0, 600, 0.0, 1)], vec![barge(1, 5000.0)], params(60, 10.0));
        assert!(s.candidates().is_empty());
    }

    #[test]
    fn vessel_leaving_within_two_setups_is_skipped() {
        // departure − time = 119 < 2 × 60.
        let s = state(vec![vessel(1, 0, 119, 500.0, 1)], vec![barge(1, 5000.0)], params(60, 10.0));
        assert!(s.candidates().is_empty());
        // Exactly 2 × 60 is still enough.
        let s = state(vec![vessel(1, 0, 120, 500.0, 1)], vec![barge(1, 5000.0)], params(60, 10.0));
        assert_eq!(s.candidates(), vec![cand(1, v(1))]);
    }

    #[test]
    fn longest_setup_time_keeps_short_stays_out() {
        let setup = PortParams::MAX_SETUP_TIME;
        let s = state(vec![vessel(1, 0, 100, 500.0, 1)], vec![barge(1, 5000.0)], params(setup, 10.0));
        assert!(s.candidates().is_empty());
    }
}

// ── Applying assignments ──────────────────────────────────────────────────────

#[cfg(test)]
mod apply {
    use super::*;
    use crate::StateError;

    #[test]
    fn vessel_sequence() {
        let mut s = state(vec![vessel(7, 0, 600, 500.0, 2)], vec![barge(1, 5000.0)], params(60, 10.0));
        s.apply(BargeId(1), v(7)).unwrap();
        let b = s.barge(BargeId(1)).unwrap();
        assert_eq!(b.current_vessel_id, Some(v(7)));
        assert_eq!(
            b.action_queue.iter().copied().collect::<Vec<_>>(),
            vec![
                Action::GoTo(740.0),
                Action::SetupInit(v(7)),
                Action::Fuel(VesselId(7)),
                Action::SetupEnd(v(7)),
            ]
        );
    }

    #[test]
    fn origin_sequence() {
        let mut s = state(vec![], vec![barge(1, 5000.0)], params(60, 10.0));
        s.apply(BargeId(1), Target::Origin).unwrap();
        let tags: Vec<String> = s
            .barge(BargeId(1))
            .unwrap()
            .action_queue
            .iter()
            .map(ToString::to_string)
            .collect();
        assert_eq!(tags, ["GO:0", "SETUP_INIT:ORIGIN", "REFUEL", "SETUP_END:ORIGIN"]);
    }

    #[test]
    fn unknown_ids_fail_without_side_effects() {
        let mut s = state(vec![vessel(1, 0, 600, 500.0, 1)], vec![barge(1, 5000.0)], params(60, 10.0));
        assert_eq!(s.apply(BargeId(9), v(1)), Err(StateError::UnknownBarge(BargeId(9))));
        assert_eq!(s.apply(BargeId(1), v(9)), Err(StateError::UnknownTarget(v(9))));
        assert!(s.barge(BargeId(1)).unwrap().is_idle());
    }
}

// ── Time step ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod engine {
    use super::*;

    #[test]
    fn advance_is_pure_and_increments_time() {
        let mut s0 = state(vec![vessel(1, 0, 600, 500.0, 1)], vec![barge(1, 5000.0)], params(60, 10.0));
        s0.apply(BargeId(1), v(1)).unwrap();
        let s1 = s0.advance();
        assert_eq!(s0.time(), Minute(0));
        assert_eq!(s1.time(), Minute(1));
        assert_eq!(s0.barge(BargeId(1)).unwrap().location, 0.0);
        assert!((s1.barge(BargeId(1)).unwrap().location - FOUR_KNOTS_M_PER_MIN).abs() < 1e-9);
    }

    #[test]
    fn idle_records_stay_shared() {
        let mut s0 = state(
            vec![vessel(1, 0, 600, 500.0, 1)],
            vec![barge(1, 5000.0), barge(2, 5000.0)],
            params(60, 10.0),
        );
        s0.apply(BargeId(1), v(1)).unwrap();
        let s1 = s0.advance();
        assert!(!s1.shares_barge(&s0, 0));
        assert!(s1.shares_barge(&s0, 1));
        assert!(s1.shares_vessel(&s0, 0));
    }

    #[test]
    fn goto_arrives_without_overshoot() {
        let mut s = state(vec![vessel(1, 0, 600, 500.0, 1)], vec![barge(1, 5000.0)], params(60, 10.0));
        s.apply(BargeId(1), v(1)).unwrap();
        // 370 m at 123.47 m/min: two full minutes, then the remainder.
        for _ in 0..2 {
            s = s.advance();
            assert!(matches!(s.barge(BargeId(1)).unwrap().action_queue[0], Action::GoTo(_)));
        }
        s = s.advance();
        let b = s.barge(BargeId(1)).unwrap();
        assert_eq!(b.location, 370.0);
        assert_eq!(b.action_queue[0], Action::SetupInit(v(1)));
    }

    #[test]
    fn goto_toward_origin_moves_backwards() {
        let mut s = state(vec![vessel(1, 0, 600, 500.0, 1)], vec![barge(1, 5000.0)], params(60, 10.0));
        {
            let b = s.barge_mut(BargeId(1)).unwrap();
            b.location = 370.0;
            b.current_vessel_id = Some(Target::Origin);
            b.action_queue.push_back(Action::GoTo(0.0));
        }
        let s = s.advance();
        let loc = s.barge(BargeId(1)).unwrap().location;
        assert!((loc - (370.0 - FOUR_KNOTS_M_PER_MIN)).abs() < 1e-9);
    }

    #[test]
    fn tide_adds_to_forward_speed() {
        let p = PortParams { tide_amplitude: 2.0, ..params(60, 10.0) };
        let mut s = state(vec![vessel(1, 0, 600, 500.0, 67)], vec![barge(1, 5000.0)], p);
        s.apply(BargeId(1), v(1)).unwrap();
        s.time = Minute(360); // tide peak, +2 knots
        let s = s.advance();
        let loc = s.barge(BargeId(1)).unwrap().location;
        assert!((loc - 6.0 * 1852.0 / 60.0).abs() < 1e-6);
    }

    #[test]
    fn heavier_barge_is_slower_with_positive_penalty() {
        let heavy = Barge::new(BargeId(1), 5000.0, 0.05).with_speed(4.0, 0.0004);
        let mut s = state(vec![vessel(1, 0, 600, 500.0, 67)], vec![heavy], params(60, 10.0));
        s.apply(BargeId(1), v(1)).unwrap();
        let s = s.advance();
        // 4 − 0.0004 × 5000 = 2 knots.
        let loc = s.barge(BargeId(1)).unwrap().location;
        assert!((loc - 2.0 * 1852.0 / 60.0).abs() < 1e-9);
    }

    #[test]
    fn setup_counts_minutes_then_pops() {
        let mut s = state(vec![], vec![barge(1, 100.0)], params(3, 10.0));
        {
            let b = s.barge_mut(BargeId(1)).unwrap();
            b.current_vessel_id = Some(Target::Origin);
            b.action_queue.extend([Action::SetupInit(Target::Origin), Action::SetupEnd(Target::Origin)]);
        }
        s = s.advance();
        assert_eq!(s.barge(BargeId(1)).unwrap().setup_init_progress, Some(1));
        s = s.advance();
        assert_eq!(s.barge(BargeId(1)).unwrap().setup_init_progress, Some(2));
        s = s.advance();
        let b = s.barge(BargeId(1)).unwrap();
        assert_eq!(b.setup_init_progress, None);
        assert_eq!(b.action_queue.len(), 1);
        // SetupInit never releases the reservation.
        assert_eq!(b.current_vessel_id, Some(Target::Origin));

        for _ in 0..2 {
            s = s.advance();
        }
        assert_eq!(s.barge(BargeId(1)).unwrap().setup_end_progress, Some(2));
        s = s.advance();
        let b = s.barge(BargeId(1)).unwrap();
        assert!(b.is_idle());
        assert_eq!(b.setup_end_progress, None);
    }

    #[test]
    fn refuel_caps_at_capacity() {
        let mut s = state(vec![], vec![barge(1, 100.0)], params(60, 30.0));
        {
            let b = s.barge_mut(BargeId(1)).unwrap();
            b.current_fuel = 0.0;
            b.current_vessel_id = Some(Target::Origin);
            b.action_queue.push_back(Action::Refuel);
        }
        for expected in [30.0, 60.0, 90.0] {
            s = s.advance();
            let b = s.barge(BargeId(1)).unwrap();
            assert_eq!(b.current_fuel, expected);
            assert_eq!(b.action_queue.len(), 1);
        }
        s = s.advance();
        let b = s.barge(BargeId(1)).unwrap();
        assert_eq!(b.current_fuel, 100.0);
        assert!(b.action_queue.is_empty());
    }

    /// Barge alongside vessel 1, about to pump.
    fn fuelling(demand: f64, aboard: f64, departure: u64) -> SimulationState {
        let mut s = state(vec![vessel(1, 0, departure, demand, 1)], vec![barge(1, 5000.0)], params(60, 10.0));
        let b = s.barge_mut(BargeId(1)).unwrap();
        b.location = 370.0;
        b.current_fuel = aboard;
        b.current_vessel_id = Some(v(1));
        b.action_queue.extend([Action::Fuel(VesselId(1)), Action::SetupEnd(v(1))]);
        s
    }

    #[test]
    fn fuel_transfers_flow_per_minute() {
        let s = fuelling(25.0, 1000.0, 600).advance();
        assert_eq!(s.vessel(VesselId(1)).unwrap().current_fuel_demand, 15.0);
        assert_eq!(s.barge(BargeId(1)).unwrap().current_fuel, 990.0);
        assert_eq!(s.barge(BargeId(1)).unwrap().action_queue.len(), 2);

        let s = s.advance().advance();
        assert_eq!(s.vessel(VesselId(1)).unwrap().current_fuel_demand, 0.0);
        assert_eq!(s.barge(BargeId(1)).unwrap().current_fuel, 975.0);
        assert_eq!(s.barge(BargeId(1)).unwrap().action_queue[0], Action::SetupEnd(v(1)));
    }

    #[test]
    fn fuel_stops_when_barge_runs_dry() {
        let s = fuelling(500.0, 4.0, 600).advance();
        assert_eq!(s.barge(BargeId(1)).unwrap().current_fuel, 0.0);
        assert_eq!(s.vessel(VesselId(1)).unwrap().current_fuel_demand, 496.0);
        assert_eq!(s.barge(BargeId(1)).unwrap().action_queue[0], Action::SetupEnd(v(1)));
    }

    #[test]
    fn fuel_disengages_before_departure() {
        // departure 200, setup 60: must leave once 200 − 1 ≤ t + 60, i.e. t ≥ 139.
        let mut s = fuelling(500.0, 1000.0, 200);
        s.time = Minute(138);
        let s = s.advance();
        assert_eq!(s.barge(BargeId(1)).unwrap().action_queue.len(), 2);
        let s = s.advance();
        assert_eq!(s.vessel(VesselId(1)).unwrap().current_fuel_demand, 480.0);
        assert_eq!(s.barge(BargeId(1)).unwrap().action_queue[0], Action::SetupEnd(v(1)));
    }

    #[test]
    fn fuel_near_the_end_of_time_disengages() {
        let mut s = fuelling(500.0, 1000.0, u64::MAX);
        s.time = Minute(u64::MAX - 2);
        let s = s.advance();
        assert_eq!(s.vessel(VesselId(1)).unwrap().current_fuel_demand, 490.0);
        assert_eq!(s.barge(BargeId(1)).unwrap().action_queue[0], Action::SetupEnd(v(1)));
    }
}

// ── Snapshots ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod snapshot {
    use super::*;

    #[test]
    fn field_names_and_wire_values() {
        let mut s = state(vec![vessel(1, 0, 600, 500.0, 1)], vec![barge(1, 5000.0)], params(60, 10.0));
        s.apply(BargeId(1), v(1)).unwrap();
        let json = serde_json::to_value(s.snapshot()).unwrap();

        assert_eq!(json["time"], 0);
        assert_eq!(json["tide_speed"], 0.0);
        let b = &json["barges"][0];
        assert_eq!(b["id"], 1);
        assert_eq!(b["location"], 0.0);
        assert_eq!(b["current_fuel"], 5000.0);
        assert_eq!(b["fuel_capacity"], 5000.0);
        assert_eq!(b["current_vessel_id"], 1);
        assert!(b["setup_init_progress"].is_null());
        assert!(b["setup_end_progress"].is_null());
        assert_eq!(b["action_queue"][0], "GO:370");
        assert_eq!(b["action_queue"][2], "FUEL:1");
        assert_eq!(b["speed"], 4.0);
        let vs = &json["vessels"][0];
        assert_eq!(vs["id"], 1);
        assert_eq!(vs["position"], 370.0);
        assert_eq!(vs["current_fuel_demand"], 500.0);
        assert_eq!(vs["fuel_demand"], 500.0);
        assert_eq!(vs["arrival_time"], 0);
        assert_eq!(vs["departure_time"], 600);
    }

    #[test]
    fn origin_reservation_serialises_as_marker() {
        let mut s = state(vec![], vec![barge(1, 5000.0)], params(60, 10.0));
        s.apply(BargeId(1), Target::Origin).unwrap();
        let json = serde_json::to_value(s.snapshot()).unwrap();
        assert_eq!(json["barges"][0]["current_vessel_id"], "ORIGIN");
    }

    #[test]
    fn snapshot_survives_json() {
        let mut s = state(vec![vessel(1, 0, 600, 500.0, 1)], vec![barge(1, 5000.0)], params(60, 10.0));
        s.apply(BargeId(1), v(1)).unwrap();
        let snap = s.advance().snapshot();
        let back: crate::StateSnapshot =
            serde_json::from_str(&serde_json::to_string(&snap).unwrap()).unwrap();
        assert_eq!(back, snap);
    }
}

// ── Invariants ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod invariants {
    use super::*;
    use crate::{InvariantViolation, check_invariants};

    #[test]
    fn fresh_and_stepped_states_are_clean() {
        let mut s = state(vec![vessel(1, 0, 600, 500.0, 1)], vec![barge(1, 5000.0)], params(60, 10.0));
        assert!(check_invariants(&s).is_empty());
        s.apply(BargeId(1), v(1)).unwrap();
        for _ in 0..200 {
            s = s.advance();
            assert!(check_invariants(&s).is_empty());
        }
    }

    #[test]
    fn shared_reservation_detected() {
        let mut s = state(
            vec![vessel(1, 0, 600, 500.0, 1)],
            vec![barge(1, 5000.0), barge(2, 5000.0)],
            params(60, 10.0),
        );
        s.apply(BargeId(1), v(1)).unwrap();
        s.apply(BargeId(2), v(1)).unwrap();
        assert_eq!(
            check_invariants(&s),
            vec![InvariantViolation::SharedReservation {
                target: v(1),
                first:  BargeId(1),
                second: BargeId(2),
            }]
        );
    }

    #[test]
    fn bounds_detected() {
        let mut s = state(vec![vessel(1, 0, 600, 500.0, 1)], vec![barge(1, 5000.0)], params(60, 10.0));
        s.barge_mut(BargeId(1)).unwrap().current_fuel = 6000.0;
        s.barge_mut(BargeId(1)).unwrap().location = 400.0;
        s.vessel_mut_at(0).current_fuel_demand = -1.0;
        assert_eq!(check_invariants(&s).len(), 3);
    }
}
