//! `cc-sim`: the time-stepped call-center engine.
//!
//! # Step pipeline
//!
//! ```text
//! for t in (0..total_time).step_by(dt):
//!   ① Arrival     : one uniform draw; below p a call joins the queue tail.
//!   ② Progress    : busy servers work off dt seconds (floor 0); servers
//!                   that finish are idle for ③ of this same step.
//!   ③ Assignment  : idle servers in index order pop the queue head, record
//!                   the wait, and draw a service time in [min, max].
//!   ④ Sampling    : record (t, queue length).
//! ```
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use cc_core::{SimConfig, SimRng};
//! use cc_sim::{run, NoopObserver};
//!
//! let mut rng = SimRng::new(42);
//! let result = run(SimConfig::new(3, 0.5, (3, 7)), &mut rng, &mut NoopObserver)?;
//! println!("avg wait {:.2}s", result.avg_wait);
//! ```

pub mod engine;
pub mod error;
pub mod observer;
pub mod result;
pub mod server;


pub use engine::{run, CallCenter, StepReport};
pub use error::{SimError, SimResult};
pub use observer::{Assignment, NoopObserver, StepObserver, TracingObserver};
pub use result::{QueueSample, RunResult};
pub use server::{CallId, Server, WaitingCall};
