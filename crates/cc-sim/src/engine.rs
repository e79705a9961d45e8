//! The `CallCenter` state aggregate and its step pipeline.

use std::collections::VecDeque;

use cc_core::{RandomSource, SimClock, SimConfig, SimTime};
use tracing::debug;

use crate::result::RunStats;
use crate::{Assignment, CallId, RunResult, Server, SimResult, StepObserver, WaitingCall};

/// What happened during one step.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct StepReport {
    pub time:      SimTime,
    /// Whether a call arrived this step.
    pub arrived:   bool,
    /// Calls assigned to servers this step.
    pub assigned:  usize,
    /// Queue length sampled at the end of the step.
    pub queue_len: usize,
}

// ── CallCenter ────────────────────────────────────────────────────────────────

/// All state of one run, exclusively owned.
///
/// `CallCenter` drives the four-phase step pipeline:
///
/// 1. **Arrival**: one uniform draw; below `arrival_probability` a call joins
///    the back of the queue stamped with the current time.
/// 2. **Service progress**: every busy server works off up to `dt` seconds.
///    A server that reaches zero is idle for phase 3 of the *same* step.
/// 3. **Assignment**: idle servers, scanned in index order, each take the
///    queue head and draw a service duration.
/// 4. **Sampling**: the queue length is recorded.
///
/// The order is fixed.
///
/// Create with [`CallCenter::new`], advance with [`step`](Self::step) or
/// [`run_to_end`](Self::run_to_end), and consume with
/// [`finish`](Self::finish).
#[derive(Clone, Debug)]
pub struct CallCenter {
    config: SimConfig,

    /// Step clock; `clock.now` is the time of the next step to run.
    pub clock: SimClock,

    /// Servers by index.  Lower index wins ties during assignment.
    pub servers: Vec<Server>,

    /// Waiting calls, head first.
    pub queue: VecDeque<WaitingCall>,

    stats: RunStats,
}

impl CallCenter {
    /// Validate `config` and build the initial state: all servers idle,
    /// empty queue, clock at zero.
    pub fn new(config: SimConfig) -> SimResult<Self> {
        config.validate()?;
        let steps = usize::try_from(config.total_steps()).unwrap_or(0);
        Ok(Self {
            clock:   config.make_clock(),
            servers: vec![Server::default(); config.num_servers],
            queue:   VecDeque::new(),
            stats:   RunStats::with_capacity(steps),
            config,
        })
    }

    /// The validated configuration the run was built from.
    #[inline]
    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// `true` once every step of the run has been executed.
    #[inline]
    pub fn is_finished(&self) -> bool {
        self.clock.is_finished()
    }

    /// Servers with work remaining.
    pub fn busy_servers(&self) -> usize {
        self.servers.iter().filter(|s| !s.is_idle()).count()
    }

    /// Calls served so far.
    #[inline]
    pub fn served(&self) -> u64 {
        self.stats.served
    }

    /// Waits recorded so far, in assignment order.
    #[inline]
    pub fn wait_times(&self) -> &[u64] {
        &self.stats.wait_times
    }

    // ── Public API ────────────────────────────────────────────────────────

    /// Run one step at `clock.now` and advance the clock.
    ///
    /// Returns `None` without touching the state or the random stream if
    /// the run is already finished.
    pub fn step<R, O>(&mut self, rng: &mut R, observer: &mut O) -> Option<StepReport>
    where
        R: RandomSource + ?Sized,
        O: StepObserver + ?Sized,
    {
        if self.is_finished() {
            return None;
        }
        let now = self.clock.now;
        observer.on_step_start(now);

        let arrived = self.admit_arrival(now, rng, observer);
        self.progress_service();
        let assigned = self.assign_idle_servers(now, rng, observer);
        let queue_len = self.sample_queue(now);

        observer.on_step_end(now, queue_len, self.busy_servers());
        self.clock.advance();

        Some(StepReport { time: now, arrived, assigned, queue_len })
    }

    /// Run at most `n` steps, stopping early at the end of the run.
    ///
    /// Returns the number of steps actually executed.  Useful for tests and
    /// incremental stepping.
    pub fn run_steps<R, O>(&mut self, n: u64, rng: &mut R, observer: &mut O) -> u64
    where
        R: RandomSource + ?Sized,
        O: StepObserver + ?Sized,
    {
        let mut done = 0;
        while done < n && self.step(rng, observer).is_some() {
            done += 1;
        }
        done
    }

    /// Run every remaining step.
    pub fn run_to_end<R, O>(&mut self, rng: &mut R, observer: &mut O)
    where
        R: RandomSource + ?Sized,
        O: StepObserver + ?Sized,
    {
        while self.step(rng, observer).is_some() {}
    }

    /// Consume the state and compute the result record.
    ///
    /// Utilization is always measured against the full configured capacity
    /// (`num_servers × total_time`), so finishing early reports the
    /// fraction of the whole run spent busy so far.
    pub fn finish(self) -> RunResult {
        let waiting = self.queue.len();
        self.stats.into_result(&self.config, &self.servers, waiting)
    }

    // ── Step phases ───────────────────────────────────────────────────────

    /// Phase 1: at most one arrival per step.
    pub(crate) fn admit_arrival<R, O>(&mut self, now: SimTime, rng: &mut R, observer: &mut O) -> bool
    where
        R: RandomSource + ?Sized,
        O: StepObserver + ?Sized,
    {
        if rng.uniform() >= self.config.arrival_probability {
            return false;
        }
        let call = WaitingCall {
            id:           CallId(self.stats.arrived),
            arrival_time: now,
        };
        self.stats.arrived += 1;
        self.queue.push_back(call);
        observer.on_arrival(&call);
        true
    }

    /// Phase 2: busy servers work off one step.  Returns the busy seconds
    /// accrued across all servers.
    pub(crate) fn progress_service(&mut self) -> u64 {
        let dt = self.config.dt;
        self.servers.iter_mut().map(|s| s.progress(dt)).sum()
    }

    /// Phase 3: hand queued calls to idle servers in index order.  Returns
    /// the number of calls assigned.
    pub(crate) fn assign_idle_servers<R, O>(
        &mut self,
        now: SimTime,
        rng: &mut R,
        observer: &mut O,
    ) -> usize
    where
        R: RandomSource + ?Sized,
        O: StepObserver + ?Sized,
    {
        let range = self.config.service_time;
        let mut assigned = 0;

        for (index, server) in self.servers.iter_mut().enumerate() {
            if !server.is_idle() {
                continue;
            }
            let Some(call) = self.queue.pop_front() else {
                break;
            };

            // Calls are only ever stamped with a step time already reached.
            let wait = now - call.arrival_time;
            let service_time = rng.uniform_inclusive(range.min, range.max);
            server.start(service_time);

            self.stats.wait_times.push(wait);
            self.stats.served += 1;
            assigned += 1;

            observer.on_assignment(&Assignment {
                time: now,
                server: index,
                call,
                wait,
                service_time,
            });
        }
        assigned
    }

    /// Phase 4: record the queue length after assignment.
    pub(crate) fn sample_queue(&mut self, now: SimTime) -> usize {
        let len = self.queue.len();
        self.stats.queue_series.push(crate::QueueSample { time: now, len });
        len
    }
}

// ── One-shot entry point ──────────────────────────────────────────────────────

/// Validate `config`, run every step on `rng`, and return the result record.
///
/// The stream is only read, never reseeded, so consecutive calls sharing one
/// `rng` continue the same sequence of draws.
pub fn run<R, O>(config: SimConfig, rng: &mut R, observer: &mut O) -> SimResult<RunResult>
where
    R: RandomSource + ?Sized,
    O: StepObserver + ?Sized,
{
    let mut center = CallCenter::new(config)?;
    debug!(
        "starting run: {} servers, p={}, service {}, {} steps of {}s",
        center.config().num_servers,
        center.config().arrival_probability,
        center.config().service_time,
        center.clock.total_steps(),
        center.config().dt,
    );
    center.run_to_end(rng, observer);
    let result = center.finish();
    observer.on_run_end(&result);
    Ok(result)
}
