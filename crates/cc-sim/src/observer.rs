//! Step observer trait for progress reporting and trace collection.

use cc_core::SimTime;
use tracing::{debug, trace};

use crate::{RunResult, WaitingCall};

/// A call bound to a server during the assignment phase.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Assignment {
    pub time:         SimTime,
    /// Index of the server that took the call.
    pub server:       usize,
    pub call:         WaitingCall,
    /// `time - call.arrival_time`.
    pub wait:         u64,
    /// Drawn service duration.
    pub service_time: u64,
}

/// Callbacks invoked by [`CallCenter`][crate::CallCenter] at key points in
/// the step pipeline.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example: queue printer
///
/// ```rust,ignore
/// struct QueuePrinter { every: u64 }
///
/// impl StepObserver for QueuePrinter {
///     fn on_step_end(&mut self, now: SimTime, queue_len: usize, _busy: usize) {
///         if now.0 % self.every == 0 {
///             println!("{now}: {queue_len} waiting");
///         }
///     }
/// }
/// ```
pub trait StepObserver {
    /// Called at the very start of each step, before the arrival phase.
    fn on_step_start(&mut self, _now: SimTime) {}

    /// Called when a call joins the queue.
    fn on_arrival(&mut self, _call: &WaitingCall) {}

    /// Called for every call handed to a server, in server index order.
    fn on_assignment(&mut self, _assignment: &Assignment) {}

    /// Called after the sampling phase.
    ///
    /// `queue_len` is the sampled length; `busy_servers` counts servers with
    /// work remaining.
    fn on_step_end(&mut self, _now: SimTime, _queue_len: usize, _busy_servers: usize) {}

    /// Called once by [`run`][crate::run] with the finished record.
    fn on_run_end(&mut self, _result: &RunResult) {}
}

/// A [`StepObserver`] that does nothing.  Use when you need to call `run` but
/// don't want callbacks.
pub struct NoopObserver;

impl StepObserver for NoopObserver {}

/// A [`StepObserver`] that emits `tracing` events: one `trace!` per
/// assignment and a `debug!` summary at run end.
#[derive(Default)]
pub struct TracingObserver {
    label: Option<String>,
}

impl TracingObserver {
    /// Tag every event with `label` (usually the scenario name).
    pub fn labelled(label: impl Into<String>) -> Self {
        Self { label: Some(label.into()) }
    }

    fn label(&self) -> &str {
        self.label.as_deref().unwrap_or("-")
    }
}

impl StepObserver for TracingObserver {
    fn on_assignment(&mut self, a: &Assignment) {
        trace!(
            "[{}] {} server {} took {} (waited {}s, service {}s)",
            self.label(),
            a.time,
            a.server,
            a.call.id,
            a.wait,
            a.service_time,
        );
    }

    fn on_run_end(&mut self, result: &RunResult) {
        debug!(
            "[{}] run finished: served {} of {} arrivals, avg_wait {:.2}s, max_queue {}, utilization {:.1}%",
            self.label(),
            result.throughput,
            result.calls_arrived,
            result.avg_wait,
            result.max_queue,
            result.utilization,
        );
    }
}
