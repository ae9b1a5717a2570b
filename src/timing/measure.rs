//! Timed execution of a single operation.

use std::future::Future;
use std::time::Instant;

use serde::Serialize;
use serde_json::{json, Value};

use super::envelope::Envelope;

/// The outcome of a measured call.
///
/// Serializes as `{"time": <elapsed>, "objects": <payload>}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MeasuredResult<T> {
    /// Seconds spent inside the measured call. Never negative.
    #[serde(rename = "time")]
    pub elapsed: f64,

    /// Whatever the call produced, untouched.
    #[serde(rename = "objects")]
    pub payload: T,
}

impl<T> MeasuredResult<T> {
    /// Run `op` once and record how long it took.
    pub fn capture<F>(op: F) -> Self
    where
        F: FnOnce() -> T,
    {
        let start = Instant::now();
        let payload = op();
        let elapsed = start.elapsed().as_secs_f64();

        Self { elapsed, payload }
    }

    /// Run a fallible `op` once. An error is returned as-is, without timing.
    pub fn try_capture<E, F>(op: F) -> Result<Self, E>
    where
        F: FnOnce() -> Result<T, E>,
    {
        let start = Instant::now();
        let payload = op()?;
        let elapsed = start.elapsed().as_secs_f64();

        Ok(Self { elapsed, payload })
    }
}

impl<R: Envelope> MeasuredResult<R> {
    /// Nest the payload's body under `objects` and hand the payload back.
    pub fn into_envelope(self) -> R {
        nest_body(self.payload, self.elapsed)
    }
}

fn nest_body<R: Envelope>(mut result: R, elapsed: f64) -> R {
    let body = std::mem::take(result.body_mut());
    *result.body_mut() = json!({
        "time": elapsed,
        "objects": body,
    });
    result
}

/// Execute `operation` exactly once and wrap its body with the elapsed time.
///
/// On success the returned `R` is the operation's own result with its body
/// replaced by `{"time": elapsed, "objects": original_body}`. On failure the
/// operation's error is returned unchanged.
pub fn measure<R, E, F>(operation: F) -> Result<R, E>
where
    R: Envelope,
    F: FnOnce() -> Result<R, E>,
{
    MeasuredResult::try_capture(operation).map(MeasuredResult::into_envelope)
}

/// Async form of [`measure`]. The clock spans the whole `.await`.
pub async fn measure_async<R, E, F, Fut>(operation: F) -> Result<R, E>
where
    R: Envelope,
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<R, E>>,
{
    let start = Instant::now();
    let result = operation().await?;
    Ok(nest_body(result, start.elapsed().as_secs_f64()))
}

/// Convenience for callers holding a plain [`Value`] body.
pub fn measure_value<F>(operation: F) -> Value
where
    F: FnOnce() -> Value,
{
    MeasuredResult::capture(operation).into_envelope()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::time::Duration;

    struct Reply {
        status: u16,
        body: Value,
    }

    impl Envelope for Reply {
        fn body_mut(&mut self) -> &mut Value {
            &mut self.body
        }
    }

    #[test]
    fn test_body_is_nested_under_objects() {
        let reply = measure(|| {
            Ok::<_, ()>(Reply {
                status: 201,
                body: json!([1, 2, 3]),
            })
        })
        .unwrap();

        assert_eq!(reply.status, 201);
        assert_eq!(reply.body["objects"], json!([1, 2, 3]));
        assert!(reply.body["time"].as_f64().unwrap() >= 0.0);
    }

    #[test]
    fn test_null_body_stays_null() {
        let value = measure(|| Ok::<_, ()>(Value::Null)).unwrap();
        assert_eq!(value["objects"], Value::Null);
        assert_eq!(value.as_object().unwrap().len(), 2);
    }

    #[test]
    fn test_operation_runs_once() {
        let calls = Cell::new(0);
        let _ = measure(|| {
            calls.set(calls.get() + 1);
            Ok::<_, ()>(json!({"a": 1}))
        });
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_error_passes_through() {
        let result: Result<Value, &str> = measure(|| Err("boom"));
        assert_eq!(result.unwrap_err(), "boom");
    }

    #[test]
    fn test_capture_records_sleep() {
        let measured = MeasuredResult::capture(|| {
            std::thread::sleep(Duration::from_millis(20));
            "done"
        });
        assert_eq!(measured.payload, "done");
        assert!(measured.elapsed >= 0.019);
    }

    #[test]
    fn test_measured_result_serialization() {
        let measured = MeasuredResult {
            elapsed: 0.5,
            payload: vec!["x"],
        };
        let json = serde_json::to_value(&measured).unwrap();
        assert_eq!(json, json!({"time": 0.5, "objects": ["x"]}));
    }

    #[test]
    fn test_measure_value() {
        let value = measure_value(|| json!("hello"));
        assert_eq!(value["objects"], "hello");
    }

    #[tokio::test]
    async fn test_measure_async_spans_await() {
        let value = measure_async(|| async {
            tokio::time::sleep(Duration::from_millis(30)).await;
            Ok::<_, ()>(json!({"k": "v"}))
        })
        .await
        .unwrap();

        assert_eq!(value["objects"], json!({"k": "v"}));
        assert!(value["time"].as_f64().unwrap() >= 0.029);
    }
}
