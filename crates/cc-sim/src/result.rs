//! The per-run result record and the accumulators that build it.

use cc_core::{SimConfig, SimTime};

use crate::Server;

/// One queue-length observation, taken at the end of a step.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QueueSample {
    pub time: SimTime,
    pub len:  usize,
}

/// Aggregate metrics for one completed run.
///
/// Returned by value from [`CallCenter::finish`][crate::CallCenter::finish];
/// nothing inside refers back to the engine state.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunResult {
    /// Mean wait in seconds over every call that began service.  0 when no
    /// call was served.
    pub avg_wait:          f64,
    /// Largest end-of-step queue length.
    pub max_queue:         usize,
    /// Calls that began service.
    pub throughput:        u64,
    /// Busy server-seconds over available server-seconds, as a percentage.
    pub utilization:       f64,
    /// `(time, queue length)` after each step, in step order.
    pub queue_time_series: Vec<QueueSample>,
    /// Every recorded wait, in assignment order.
    pub wait_times:        Vec<u64>,
    /// `total_busy_time` of each server, by index.
    pub server_busy_time:  Vec<u64>,
    /// Calls that joined the queue over the run.
    pub calls_arrived:     u64,
    /// Calls still queued when the run ended.
    pub calls_waiting:     usize,
}

/// Running statistics owned by the engine during a run.
#[derive(Clone, Debug, Default)]
pub(crate) struct RunStats {
    pub wait_times:   Vec<u64>,
    pub queue_series: Vec<QueueSample>,
    pub served:       u64,
    pub arrived:      u64,
}

impl RunStats {
    pub fn with_capacity(steps: usize) -> Self {
        Self {
            queue_series: Vec::with_capacity(steps),
            ..Self::default()
        }
    }

    /// Fold the accumulators into the final record.
    pub fn into_result(self, config: &SimConfig, servers: &[Server], calls_waiting: usize) -> RunResult {
        let avg_wait = mean(&self.wait_times);
        let max_queue = self.queue_series.iter().map(|s| s.len).max().unwrap_or(0);

        let server_busy_time: Vec<u64> = servers.iter().map(|s| s.total_busy_time).collect();
        let busy: u64 = server_busy_time.iter().sum();
        let capacity = config.capacity_secs();
        let utilization = if capacity == 0 {
            0.0
        } else {
            busy as f64 / capacity as f64 * 100.0
        };

        RunResult {
            avg_wait,
            max_queue,
            throughput: self.served,
            utilization,
            queue_time_series: self.queue_series,
            wait_times: self.wait_times,
            server_busy_time,
            calls_arrived: self.arrived,
            calls_waiting,
        }
    }
}

/// Arithmetic mean; 0 for an empty slice.
fn mean(values: &[u64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let sum: u128 = values.iter().map(|&v| v as u128).sum();
    sum as f64 / values.len() as f64
}

#[cfg(test)]
mod tests {
    use super::mean;

    #[test]
    fn mean_of_empty_is_zero() {
        assert_eq!(mean(&[]), 0.0);
    }

    #[test]
    fn mean_of_values() {
        assert_eq!(mean(&[0, 4]), 2.0);
        assert_eq!(mean(&[1, 2, 3, 4]), 2.5);
    }
}
