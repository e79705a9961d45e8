//! Unit tests for cc-experiment.

use cc_core::SimRng;
use cc_sim::NoopObserver;

use crate::{
    ExperimentError, ExperimentRunner, Scenario, ScenarioSet, improvement_pct,
    parse_scenarios_toml,
};

// ── Helpers ───────────────────────────────────────────────────────────────────

/// The stock set, shortened so tests stay fast.
fn short_default() -> ScenarioSet {
    ScenarioSet::call_center_default().with_timing(500, 1)
}

// ── Improvement arithmetic ────────────────────────────────────────────────────

#[cfg(test)]
mod improvement {
    use super::*;

    #[test]
    fn halving_the_wait_is_fifty_percent() {
        assert_eq!(improvement_pct(10.0, 5.0), 50.0);
    }

    #[test]
    fn zero_baseline_yields_zero() {
        assert_eq!(improvement_pct(0.0, 3.0), 0.0);
        assert_eq!(improvement_pct(0.0, 0.0), 0.0);
    }

    #[test]
    fn worse_than_baseline_is_negative() {
        assert_eq!(improvement_pct(4.0, 6.0), -50.0);
    }

    #[test]
    fn baseline_against_itself_is_zero() {
        assert_eq!(improvement_pct(2.37, 2.37), 0.0);
    }
}

// ── ScenarioSet ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod scenario_set {
    use super::*;

    #[test]
    fn stock_set_matches_staffing_study() {
        let set = ScenarioSet::call_center_default();
        let names: Vec<&str> = set.scenarios.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["3_agents", "4_agents", "5_agents"]);
        assert_eq!(set.baseline, "3_agents");
        assert_eq!((set.total_time, set.dt, set.seed), (2_000, 1, 42));
        for (s, servers) in set.scenarios.iter().zip([3, 4, 5]) {
            assert_eq!(s.servers, servers);
            assert_eq!(s.arrival_probability, 0.5);
            assert_eq!((s.service_time.min, s.service_time.max), (3, 7));
        }
        assert!(set.validate().is_ok());
    }

    #[test]
    fn config_for_uses_set_timing() {
        let set = ScenarioSet::call_center_default().with_timing(60, 2);
        let cfg = set.config_for(&set.scenarios[1]);
        assert_eq!(cfg.num_servers, 4);
        assert_eq!(cfg.total_time, 60);
        assert_eq!(cfg.dt, 2);
    }

    #[test]
    fn empty_set_rejected() {
        let set = ScenarioSet::new(vec![]);
        assert!(matches!(set.validate(), Err(ExperimentError::NoScenarios)));
    }

    #[test]
    fn duplicate_names_rejected() {
        let set = ScenarioSet::new(vec![
            Scenario::new("a", 1, 0.5, (1, 2)),
            Scenario::new("a", 2, 0.5, (1, 2)),
        ]);
        assert!(matches!(set.validate(), Err(ExperimentError::DuplicateScenario(n)) if n == "a"));
    }

    #[test]
    fn unknown_baseline_rejected() {
        let set = short_default().with_baseline("9_agents");
        assert!(matches!(set.validate(), Err(ExperimentError::UnknownBaseline(n)) if n == "9_agents"));
    }

    #[test]
    fn invalid_scenario_named_in_error() {
        let set = ScenarioSet::new(vec![
            Scenario::new("ok", 2, 0.5, (1, 2)),
            Scenario::new("broken", 0, 0.5, (1, 2)),
        ]);
        let err = set.validate().unwrap_err();
        assert!(matches!(&err, ExperimentError::Scenario { name, .. } if name == "broken"));
        assert!(err.to_string().contains("server count must be at least 1"));
    }

    #[test]
    fn bad_timing_rejected_for_every_scenario() {
        let set = short_default().with_timing(100, 3);
        assert!(matches!(set.validate(), Err(ExperimentError::Scenario { .. })));
    }
}

// ── Runner ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod runner {
    use super::*;

    #[test]
    fn invalid_set_never_runs() {
        assert!(ExperimentRunner::new(ScenarioSet::new(vec![])).is_err());
    }

    #[test]
    fn results_keep_scenario_order() {
        let report = ExperimentRunner::new(short_default()).unwrap().run_seeded().unwrap();
        let names: Vec<&str> = report.runs.iter().map(|r| r.scenario.name.as_str()).collect();
        assert_eq!(names, ["3_agents", "4_agents", "5_agents"]);
        let compared: Vec<&str> = report.comparisons.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(compared, names);
    }

    #[test]
    fn baseline_improvement_is_zero() {
        let report = ExperimentRunner::new(short_default()).unwrap().run_seeded().unwrap();
        assert_eq!(report.comparison("3_agents").unwrap().improvement_pct, 0.0);
        assert_eq!(report.baseline_run().unwrap().scenario.servers, 3);
    }

    #[test]
    fn comparisons_follow_formula() {
        let report = ExperimentRunner::new(short_default()).unwrap().run_seeded().unwrap();
        let base = report.get("3_agents").unwrap().result.avg_wait;
        for c in &report.comparisons {
            let own = report.get(&c.name).unwrap().result.avg_wait;
            assert_eq!(c.avg_wait, own);
            assert_eq!(c.improvement_pct, improvement_pct(base, own));
        }
    }

    #[test]
    fn more_agents_wait_less() {
        let report = ExperimentRunner::new(ScenarioSet::call_center_default())
            .unwrap()
            .run_seeded()
            .unwrap();
        let three = report.get("3_agents").unwrap().result.avg_wait;
        let five = report.get("5_agents").unwrap().result.avg_wait;
        assert!(three > five, "3 agents {three} vs 5 agents {five}");
        assert!(report.comparison("5_agents").unwrap().improvement_pct > 0.0);
    }

    #[test]
    fn idle_baseline_makes_every_improvement_zero() {
        let set = ScenarioSet::new(vec![
            Scenario::new("quiet", 2, 0.0, (3, 7)),
            Scenario::new("busy", 2, 0.9, (3, 7)),
        ])
        .with_timing(200, 1);
        let report = ExperimentRunner::new(set).unwrap().run_seeded().unwrap();
        assert_eq!(report.get("quiet").unwrap().result.avg_wait, 0.0);
        assert!(report.comparisons.iter().all(|c| c.improvement_pct == 0.0));
    }

    #[test]
    fn scenarios_continue_one_stream() {
        let set = short_default();
        let report = ExperimentRunner::new(set.clone())
            .unwrap()
            .run(&mut SimRng::new(7))
            .unwrap();

        // Same thing by hand: one stream, scenarios back to back.
        let mut rng = SimRng::new(7);
        for (scenario, run) in set.scenarios.iter().zip(&report.runs) {
            let expected = cc_sim::run(set.config_for(scenario), &mut rng, &mut NoopObserver).unwrap();
            assert_eq!(run.result, expected);
        }

        // The second scenario did not start from a fresh seed.
        let fresh = cc_sim::run(
            set.config_for(&set.scenarios[1]),
            &mut SimRng::new(7),
            &mut NoopObserver,
        )
        .unwrap();
        assert_ne!(report.runs[1].result, fresh);
    }

    #[test]
    fn seeded_run_is_reproducible() {
        let runner = ExperimentRunner::new(short_default().with_seed(99)).unwrap();
        let a = runner.run_seeded().unwrap();
        let b = runner.run(&mut SimRng::new(99)).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.seed, 99);
    }

    #[test]
    fn max_queue_overall_is_largest_scenario_peak() {
        let report = ExperimentRunner::new(short_default()).unwrap().run_seeded().unwrap();
        let peak = report.runs.iter().map(|r| r.result.max_queue).max().unwrap();
        assert_eq!(report.max_queue_overall(), peak);
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn independent_streams_are_reproducible() {
        let runner = ExperimentRunner::new(short_default()).unwrap();
        let a = runner.run_independent().unwrap();
        let b = runner.run_independent().unwrap();
        assert_eq!(a, b);
        let names: Vec<&str> = a.runs.iter().map(|r| r.scenario.name.as_str()).collect();
        assert_eq!(names, ["3_agents", "4_agents", "5_agents"]);
    }
}

// ── TOML loader ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod loader {
    use super::*;
    use crate::load_scenarios_toml;

    const FULL: &str = r#"
total_time = 600
dt         = 2
seed       = 7
baseline   = "two"

[[scenario]]
name                = "one"
servers             = 1
arrival_probability = 0.3
service_time        = [2, 4]

[[scenario]]
name                = "two"
servers             = 2
arrival_probability = 0.3
service_time        = [2, 4]
"#;

    #[test]
    fn parses_full_file() {
        let set = parse_scenarios_toml(FULL).unwrap();
        assert_eq!((set.total_time, set.dt, set.seed), (600, 2, 7));
        assert_eq!(set.baseline, "two");
        assert_eq!(set.scenarios.len(), 2);
        assert_eq!(set.scenarios[0], Scenario::new("one", 1, 0.3, (2, 4)));
    }

    #[test]
    fn missing_settings_take_defaults() {
        let text = r#"
[[scenario]]
name                = "solo"
servers             = 3
arrival_probability = 0.5
service_time        = [3, 7]
"#;
        let set = parse_scenarios_toml(text).unwrap();
        assert_eq!((set.total_time, set.dt, set.seed), (2_000, 1, 42));
        assert_eq!(set.baseline, "solo");
    }

    #[test]
    fn no_scenarios_is_an_error() {
        assert!(matches!(parse_scenarios_toml("seed = 1\n"), Err(ExperimentError::NoScenarios)));
    }

    #[test]
    fn unknown_field_is_a_parse_error() {
        let text = "colour = \"red\"\n";
        assert!(matches!(parse_scenarios_toml(text), Err(ExperimentError::Parse(_))));
    }

    #[test]
    fn inverted_range_is_rejected() {
        let text = r#"
[[scenario]]
name                = "bad"
servers             = 1
arrival_probability = 0.5
service_time        = [7, 3]
"#;
        assert!(matches!(parse_scenarios_toml(text), Err(ExperimentError::Scenario { .. })));
    }

    #[test]
    fn loads_from_file() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("scenarios.toml");
        std::fs::write(&path, FULL).unwrap();
        let set = load_scenarios_toml(&path).unwrap();
        assert_eq!(set.scenarios.len(), 2);
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let err = load_scenarios_toml(&dir.path().join("nope.toml")).unwrap_err();
        assert!(matches!(err, ExperimentError::Io(_)));
    }
}
