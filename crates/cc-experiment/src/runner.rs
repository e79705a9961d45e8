//! The experiment runner.

use cc_core::{RandomSource, SimRng};
use cc_sim::TracingObserver;
use tracing::info;

use crate::{ExperimentError, ExperimentReport, ExperimentResult, Scenario, ScenarioRun, ScenarioSet};

/// Runs every scenario of a validated [`ScenarioSet`] through the engine.
///
/// # Stream sharing
///
/// [`run`](Self::run) and [`run_seeded`](Self::run_seeded) execute scenarios
/// strictly in order on a single stream: scenario *k* continues exactly where
/// scenario *k − 1* stopped drawing.  Results across scenarios are therefore
/// correlated draws from one sequence, not independent trials, and running
/// them concurrently would change them.
///
/// With the `parallel` feature, [`run_independent`](Self::run_independent)
/// gives each scenario its own stream derived from the seed instead; its
/// numbers differ from the sequential ones but are just as reproducible.
#[derive(Clone, Debug)]
pub struct ExperimentRunner {
    set: ScenarioSet,
}

impl ExperimentRunner {
    /// Validate `set` up front; an invalid set never starts running.
    pub fn new(set: ScenarioSet) -> ExperimentResult<Self> {
        set.validate()?;
        Ok(Self { set })
    }

    pub fn set(&self) -> &ScenarioSet {
        &self.set
    }

    /// Run every scenario in order on `rng`.
    ///
    /// The stream is never reseeded; callers that want reproducible results
    /// seed it once before the first call.
    pub fn run<R: RandomSource + ?Sized>(&self, rng: &mut R) -> ExperimentResult<ExperimentReport> {
        let mut runs = Vec::with_capacity(self.set.scenarios.len());
        for scenario in &self.set.scenarios {
            runs.push(self.run_one(scenario, rng)?);
        }
        Ok(ExperimentReport::from_runs(self.set.baseline.clone(), self.set.seed, runs))
    }

    /// Run every scenario on a fresh stream seeded with `set.seed`.
    pub fn run_seeded(&self) -> ExperimentResult<ExperimentReport> {
        let mut rng = SimRng::new(self.set.seed);
        self.run(&mut rng)
    }

    /// Run scenarios concurrently, each on `SimRng::child(index)` of a root
    /// stream seeded with `set.seed`.
    #[cfg(feature = "parallel")]
    pub fn run_independent(&self) -> ExperimentResult<ExperimentReport> {
        use rayon::prelude::*;

        let mut root = SimRng::new(self.set.seed);
        let streams: Vec<SimRng> = (0..self.set.scenarios.len())
            .map(|i| root.child(i as u64))
            .collect();

        let runs = self
            .set
            .scenarios
            .par_iter()
            .zip(streams.into_par_iter())
            .map(|(scenario, mut rng)| self.run_one(scenario, &mut rng))
            .collect::<ExperimentResult<Vec<_>>>()?;

        Ok(ExperimentReport::from_runs(self.set.baseline.clone(), self.set.seed, runs))
    }

    fn run_one<R: RandomSource + ?Sized>(
        &self,
        scenario: &Scenario,
        rng: &mut R,
    ) -> ExperimentResult<ScenarioRun> {
        let config = self.set.config_for(scenario);
        let mut observer = TracingObserver::labelled(scenario.name.as_str());
        let result = cc_sim::run(config, rng, &mut observer).map_err(|source| {
            ExperimentError::Scenario { name: scenario.name.clone(), source }
        })?;

        info!(
            "{}: avg_wait={:.2}s, max_queue={}, throughput={}, utilization={:.1}%",
            scenario.name, result.avg_wait, result.max_queue, result.throughput, result.utilization,
        );
        Ok(ScenarioRun { scenario: scenario.clone(), result })
    }
}
