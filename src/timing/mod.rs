//! # Response Timing
//!
//! Wraps a unit of work, measures its wall-clock latency on a monotonic
//! clock and nests the work's body under `objects`, next to the elapsed
//! `time` in seconds:
//!
//! ```text
//! {"time": 0.0123, "objects": <original body>}
//! ```
//!
//! The wrapper never inspects what the work does. It only needs the result
//! to expose a replaceable body (see [`Envelope`]). Errors from the work are
//! returned unchanged and no timing is reported for them.

mod envelope;
mod measure;

pub use envelope::Envelope;
pub use measure::{measure, measure_async, measure_value, MeasuredResult};
