//! Unit tests for pit-model.

use pit_core::{CarProfile, DriverId, DriverProfile, Entry, TrackId, TrackProfile};

use crate::{DriverSimState, TickOutcome};

// ── Helpers ───────────────────────────────────────────────────────────────────

/// 3 sectors × 10 km, wear factor 10.
fn track() -> TrackProfile {
    TrackProfile {
        track_id:               TrackId(1),
        sectors:                3,
        lap_length_km:          10.0,
        tire_wear_factor:       10.0,
        overtaking_difficulty:  0.1,
        safety_car_probability: 0.01,
    }
}

fn entry(id: u32) -> Entry {
    Entry {
        id: DriverId(id),
        driver: DriverProfile {
            name:            "Max Verstappen".into(),
            aggression:      0.85,
            consistency:     0.90,
            tire_management: 0.80,
            risk_tolerance:  0.90,
        },
        car: CarProfile {
            name:               "Red Bull".into(),
            engine_power:       0.95,
            aero_efficiency:    0.98,
            cooling_efficiency: 0.88,
            reliability:        0.92,
        },
    }
}

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

// ── physics ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod physics_tests {
    use super::*;
    use crate::physics;

    #[test]
    fn skill_and_speed() {
        let e = entry(0);
        assert!(approx(physics::driver_skill(&e.driver), 1.025));
        assert!(approx(physics::speed_kph(&e, 0.0), 220.0 * 0.95 * 1.025));
        // Fully worn tires cost 40 % of speed.
        assert!(approx(physics::speed_kph(&e, 1.0), 220.0 * 0.95 * 1.025 * 0.6));
    }

    #[test]
    fn wear_rate_scales_with_track_and_aggression() {
        let e = entry(0);
        assert!(approx(physics::wear_per_tick(&track(), &e.driver), 0.00425));
        let smooth = TrackProfile { tire_wear_factor: 0.0, ..track() };
        assert_eq!(physics::wear_per_tick(&smooth, &e.driver), 0.0);
    }

    #[test]
    fn pit_cost_from_reliability() {
        assert!(approx(physics::pit_stop_secs(&entry(0).car), 2.08));
        let mut c = entry(0).car;
        c.reliability = 0.0;
        assert!(approx(physics::pit_stop_secs(&c), 3.0));
    }

    #[test]
    fn pit_threshold_from_tire_management_and_risk() {
        // 0.65 + 0.80 * 0.25 + (0.90 - 0.5) * 0.15
        assert!(approx(physics::pit_threshold(&entry(0).driver), 0.91));
        let mut cautious = entry(0).driver;
        cautious.tire_management = 0.0;
        cautious.risk_tolerance = 0.0;
        assert!(approx(physics::pit_threshold(&cautious), 0.575));
    }
}

// ── DriverSimState ────────────────────────────────────────────────────────────

#[cfg(test)]
mod state_tests {
    use pit_core::Tick;

    use super::*;

    #[test]
    fn grid_state_is_zeroed() {
        let s = DriverSimState::on_grid();
        assert_eq!(s.lap, 0);
        assert_eq!(s.sector, 0);
        assert_eq!(s.tire_wear, 0.0);
        assert_eq!(s.distance_in_lap_km, 0.0);
        assert_eq!(s.total_time_secs(), 0.0);
        assert!(!s.has_pitted && !s.is_on_pit);
        assert_eq!(s, DriverSimState::default());
    }

    #[test]
    fn driving_tick_uses_wear_before_the_tick() {
        let (t, e) = (track(), entry(0));
        let mut s = DriverSimState::on_grid();
        let outcome = s.apply_tick(&t, &e, false);

        let expected_speed = 220.0 * 0.95 * 1.025;
        match outcome {
            TickOutcome::Drove { speed_kph, sector_completed, lap_completed } => {
                assert!(approx(speed_kph, expected_speed));
                assert!(!sector_completed && !lap_completed);
            }
            other => panic!("expected Drove, got {other:?}"),
        }
        assert!(approx(s.tire_wear, 0.00425));
        assert!(approx(s.distance_in_lap_km, expected_speed * 0.005));
        assert_eq!(s.driving_ticks, Tick(1));
        assert!(approx(s.total_time_secs(), 0.02));
    }

    #[test]
    fn sector_boundary_carries_excess_distance() {
        let (t, e) = (track(), entry(0));
        let mut s = DriverSimState::on_grid();
        let mut ticks = 0;
        loop {
            ticks += 1;
            if let TickOutcome::Drove { sector_completed: true, .. } = s.apply_tick(&t, &e, false) {
                break;
            }
        }
        // ~1.07 km per tick against a 3.33 km sector.
        assert_eq!(ticks, 4);
        assert_eq!(s.sector, 1);
        assert!(s.distance_in_lap_km > 0.0 && s.distance_in_lap_km < t.sector_length_km());
    }

    #[test]
    fn lap_completes_after_last_sector() {
        let (t, e) = (track(), entry(0));
        let mut s = DriverSimState::on_grid();
        let mut boundaries = 0;
        loop {
            match s.apply_tick(&t, &e, false) {
                TickOutcome::Drove { lap_completed: true, .. } => {
                    boundaries += 1;
                    break;
                }
                TickOutcome::Drove { sector_completed: true, .. } => boundaries += 1,
                _ => {}
            }
        }
        // Grid slot (sector 0) plus three timed sectors.
        assert_eq!(boundaries, 4);
        assert_eq!(s.lap, 1);
        assert_eq!(s.sector, 1);
        assert!(s.has_finished(1));
        assert!(!s.has_finished(2));
    }

    #[test]
    fn wear_clamps_at_one() {
        let (t, e) = (track(), entry(0));
        let mut s = DriverSimState { tire_wear: 0.999, ..DriverSimState::on_grid() };
        s.apply_tick(&t, &e, false);
        assert_eq!(s.tire_wear, 1.0);
        s.apply_tick(&t, &e, false);
        assert_eq!(s.tire_wear, 1.0);
    }

    #[test]
    fn pit_tick_resets_wear_and_charges_cost_without_progress() {
        let (t, e) = (track(), entry(0));
        let mut s = DriverSimState::on_grid();
        for _ in 0..3 {
            s.apply_tick(&t, &e, false);
        }
        let before = s.clone();

        let outcome = s.apply_tick(&t, &e, true);
        match outcome {
            TickOutcome::Pitted { cost_secs } => assert!(approx(cost_secs, 2.08)),
            other => panic!("expected Pitted, got {other:?}"),
        }
        assert_eq!(s.tire_wear, 0.0);
        assert!(s.has_pitted && s.is_on_pit);
        assert_eq!(s.distance_in_lap_km, before.distance_in_lap_km);
        assert_eq!(s.sector, before.sector);
        assert_eq!(s.driving_ticks, before.driving_ticks);
        assert!(approx(s.total_time_secs(), before.total_time_secs() + 2.08));
    }

    #[test]
    fn on_pit_lasts_one_tick_and_has_pitted_latches() {
        let (t, e) = (track(), entry(0));
        let mut s = DriverSimState::on_grid();
        s.apply_tick(&t, &e, true);
        assert!(s.is_on_pit);

        s.apply_tick(&t, &e, false);
        assert!(!s.is_on_pit);
        assert!(s.has_pitted);
        assert!(s.distance_in_lap_km > 0.0);
    }

    #[test]
    fn progress_ordering() {
        let leader = DriverSimState { lap: 3, sector: 1, ..DriverSimState::on_grid() };
        let same_lap_further = DriverSimState { lap: 2, sector: 3, ..DriverSimState::on_grid() };
        let same_sector_behind = DriverSimState {
            lap: 2, sector: 3, distance_in_lap_km: -1.0, ..DriverSimState::on_grid()
        };
        let mut field = [same_sector_behind.clone(), leader.clone(), same_lap_further.clone()];
        field.sort_by(DriverSimState::cmp_progress);
        assert_eq!(field, [leader, same_lap_further, same_sector_behind]);
    }
}

// ── Policies ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod policy_tests {
    use super::*;
    use crate::{ForcedLap, PitPolicy, TargetStrategy, WearThreshold};

    #[test]
    fn forced_lap_pits_only_on_its_lap() {
        let e = entry(0);
        let policy = ForcedLap { lap: 2 };
        let on_lap = |lap| DriverSimState { lap, ..DriverSimState::on_grid() };
        assert!(!policy.should_pit(&e, &on_lap(1)));
        assert!(policy.should_pit(&e, &on_lap(2)));
        assert!(!policy.should_pit(&e, &on_lap(3)));
    }

    #[test]
    fn forced_lap_pits_once() {
        let e = entry(0);
        let pitted = DriverSimState { lap: 2, has_pitted: true, ..DriverSimState::on_grid() };
        assert!(!ForcedLap { lap: 2 }.should_pit(&e, &pitted));
    }

    #[test]
    fn wear_threshold_is_strictly_greater() {
        let e = entry(0); // threshold 0.91
        let worn = |tire_wear| DriverSimState { tire_wear, ..DriverSimState::on_grid() };
        assert!(!WearThreshold.should_pit(&e, &worn(0.90)));
        assert!(WearThreshold.should_pit(&e, &worn(0.92)));
        let pitted = DriverSimState { has_pitted: true, ..worn(1.0) };
        assert!(!WearThreshold.should_pit(&e, &pitted));
    }

    #[test]
    fn target_strategy_routes_by_driver() {
        let policy = TargetStrategy::new(DriverId(0), 4);
        let worn_on_lap_4 = DriverSimState { lap: 4, tire_wear: 1.0, ..DriverSimState::on_grid() };
        let fresh_on_lap_4 = DriverSimState { lap: 4, ..DriverSimState::on_grid() };

        // Target follows its forced lap regardless of wear.
        assert!(policy.should_pit(&entry(0), &fresh_on_lap_4));
        let worn_on_lap_1 = DriverSimState { lap: 1, tire_wear: 1.0, ..DriverSimState::on_grid() };
        assert!(!policy.should_pit(&entry(0), &worn_on_lap_1));

        // Everyone else follows the wear threshold regardless of lap.
        assert!(policy.should_pit(&entry(1), &worn_on_lap_4));
        assert!(!policy.should_pit(&entry(1), &fresh_on_lap_4));
    }
}
