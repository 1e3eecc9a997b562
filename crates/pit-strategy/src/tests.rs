//! Tests for pit-strategy.

use pit_core::{CarProfile, DriverId, DriverProfile, TrackId, TrackProfile};
use pit_scenario::{Scenario, ScenarioBuilder};
use pit_sim::{RaceSimulator, SimError};

use crate::result::select_best;
use crate::{CandidateEvaluation, SearchConfig, SearchError, StrategyAnalyzer};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn track(tire_wear_factor: f64) -> TrackProfile {
    TrackProfile {
        track_id: TrackId(1),
        sectors: 3,
        lap_length_km: 10.0,
        tire_wear_factor,
        overtaking_difficulty: 0.1,
        safety_car_probability: 0.01,
    }
}

fn entry(name: &str, consistency: f64, tire_management: f64, engine_power: f64, reliability: f64)
    -> (DriverProfile, CarProfile)
{
    (
        DriverProfile {
            name: name.into(),
            aggression: 0.8, consistency, tire_management, risk_tolerance: 0.8,
        },
        CarProfile {
            name: format!("{name} car"),
            engine_power, aero_efficiency: 0.9, cooling_efficiency: 0.9, reliability,
        },
    )
}

fn field() -> Vec<(DriverProfile, CarProfile)> {
    vec![
        entry("Max Verstappen", 0.90, 0.80, 0.95, 0.92),
        entry("Lewis Hamilton", 0.95, 0.95, 0.90, 0.98),
        entry("Charles Leclerc", 0.75, 0.70, 0.98, 0.85),
    ]
}

fn scenario(tire_wear_factor: f64, total_laps: u32) -> Scenario {
    ScenarioBuilder::new(track(tire_wear_factor), total_laps)
        .entries(field())
        .build()
        .unwrap()
}

// ── Candidate range ───────────────────────────────────────────────────────────

#[cfg(test)]
mod candidate_tests {
    use super::*;

    #[test]
    fn excludes_grid_and_final_lap() {
        let s = scenario(10.0, 6);
        let a = StrategyAnalyzer::new(&s);
        assert_eq!(a.candidate_laps().unwrap(), 1..=5);
    }

    #[test]
    fn short_races_have_no_candidates() {
        for laps in [0, 1] {
            let s = scenario(10.0, laps);
            let a = StrategyAnalyzer::new(&s);
            assert_eq!(
                a.candidate_laps(),
                Err(SearchError::NoCandidateLaps { total_laps: laps })
            );
            assert_eq!(
                a.find_optimal_for_driver(DriverId(0)),
                Err(SearchError::NoCandidateLaps { total_laps: laps })
            );
        }
    }

    #[test]
    fn two_lap_race_has_one_candidate() {
        let s = scenario(10.0, 2);
        let a = StrategyAnalyzer::new(&s);
        let evals = a.evaluate_candidates(DriverId(1)).unwrap();
        assert_eq!(evals.len(), 1);
        assert_eq!(evals[0].pit_lap, 1);
        assert_eq!(a.find_optimal_for_driver(DriverId(1)).unwrap().pit_lap, 1);
    }

    #[test]
    fn evaluations_match_direct_simulation_in_lap_order() {
        let s = scenario(10.0, 6);
        let a = StrategyAnalyzer::new(&s);
        let sim = RaceSimulator::new(&s);

        let evals = a.evaluate_candidates(DriverId(2)).unwrap();
        let laps: Vec<u32> = evals.iter().map(|e| e.pit_lap).collect();
        assert_eq!(laps, vec![1, 2, 3, 4, 5]);
        for e in &evals {
            assert_eq!(e.total_time_secs, sim.simulate_race(DriverId(2), e.pit_lap).unwrap());
        }
    }
}

// ── Optimal search ────────────────────────────────────────────────────────────

#[cfg(test)]
mod search_tests {
    use super::*;

    #[test]
    fn optimum_beats_or_equals_every_candidate() {
        let s = scenario(10.0, 8);
        let a = StrategyAnalyzer::new(&s);
        let sim = RaceSimulator::new(&s);

        for driver in s.driver_ids() {
            let best = a.find_optimal_for_driver(driver).unwrap();
            assert_eq!(best.driver, driver);
            assert!((1..8).contains(&best.pit_lap));
            assert_eq!(best.total_time_secs, sim.simulate_race(driver, best.pit_lap).unwrap());
            for lap in 1..8 {
                assert!(best.total_time_secs <= sim.simulate_race(driver, lap).unwrap());
            }
        }
    }

    #[test]
    fn equal_times_resolve_to_earliest_lap() {
        // No wear: every stop costs the same and buys nothing.
        let s = scenario(0.0, 5);
        let a = StrategyAnalyzer::new(&s);

        let evals = a.evaluate_candidates(DriverId(0)).unwrap();
        let first = evals[0].total_time_secs;
        assert!(evals.iter().all(|e| e.total_time_secs == first));

        let best = a.find_optimal_for_driver(DriverId(0)).unwrap();
        assert_eq!(best.pit_lap, 1);
        assert_eq!(best.total_time_secs, first);
    }

    #[test]
    fn no_stop_is_faster_without_wear() {
        let s = scenario(0.0, 5);
        let a = StrategyAnalyzer::new(&s);
        let best = a.find_optimal_for_driver(DriverId(1)).unwrap();
        let baseline = a.no_stop_time(DriverId(1)).unwrap();
        assert!(baseline < best.total_time_secs);
    }

    #[test]
    fn unknown_driver_is_rejected() {
        let s = scenario(10.0, 5);
        let a = StrategyAnalyzer::new(&s);
        let err = || SearchError::Sim(SimError::UnknownDriver { driver: DriverId(3), count: 3 });
        assert_eq!(a.find_optimal_for_driver(DriverId(3)), Err(err()));
        assert_eq!(a.no_stop_time(DriverId(3)), Err(err()));
    }

    #[test]
    fn select_best_prefers_earlier_lap_on_ties() {
        let evals = [
            CandidateEvaluation { pit_lap: 1, total_time_secs: 10.5 },
            CandidateEvaluation { pit_lap: 2, total_time_secs: 10.0 },
            CandidateEvaluation { pit_lap: 3, total_time_secs: 10.0 },
            CandidateEvaluation { pit_lap: 4, total_time_secs: 11.0 },
        ];
        assert_eq!(select_best(&evals).unwrap().pit_lap, 2);
        assert!(select_best(&[]).is_none());
    }
}

// ── Multi-driver analysis ─────────────────────────────────────────────────────

#[cfg(test)]
mod analyze_tests {
    use super::*;

    #[test]
    fn results_follow_request_order() {
        let s = scenario(10.0, 6);
        let a = StrategyAnalyzer::new(&s);

        let request = [DriverId(2), DriverId(0)];
        let results = a.analyze_strategies(&request).unwrap();
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].driver, DriverId(2));
        assert_eq!(results[1].driver, DriverId(0));
        assert_eq!(results[0], a.find_optimal_for_driver(DriverId(2)).unwrap());
        assert_eq!(results[1], a.find_optimal_for_driver(DriverId(0)).unwrap());
    }

    #[test]
    fn drivers_are_searched_independently() {
        let s = scenario(10.0, 6);
        let a = StrategyAnalyzer::new(&s);

        let alone = a.analyze_strategies(&[DriverId(1)]).unwrap();
        let together = a.analyze_strategies(&[DriverId(0), DriverId(1), DriverId(2)]).unwrap();
        assert_eq!(alone[0], together[1]);
    }

    #[test]
    fn repeated_searches_agree() {
        let s = scenario(10.0, 6);
        let a = StrategyAnalyzer::new(&s);
        let ids: Vec<DriverId> = s.driver_ids().collect();
        assert_eq!(a.analyze_strategies(&ids).unwrap(), a.analyze_strategies(&ids).unwrap());
    }

    #[test]
    fn empty_request_is_empty() {
        let s = scenario(10.0, 1);
        let a = StrategyAnalyzer::new(&s);
        assert!(a.analyze_strategies(&[]).unwrap().is_empty());
    }

    #[test]
    fn any_unknown_driver_fails_the_whole_request() {
        let s = scenario(10.0, 6);
        let a = StrategyAnalyzer::new(&s);
        let err = a.analyze_strategies(&[DriverId(0), DriverId(9)]).unwrap_err();
        assert_eq!(
            err,
            SearchError::Sim(SimError::UnknownDriver { driver: DriverId(9), count: 3 })
        );
    }

    #[test]
    fn configured_thread_count_gives_the_same_answer() {
        let s = scenario(10.0, 6);
        let ids: Vec<DriverId> = s.driver_ids().collect();
        let default = StrategyAnalyzer::new(&s).analyze_strategies(&ids).unwrap();
        let config = SearchConfig { num_threads: Some(2) };
        let pooled = StrategyAnalyzer::with_config(&s, &config)
            .unwrap()
            .analyze_strategies(&ids)
            .unwrap();
        assert_eq!(default, pooled);
    }
}
