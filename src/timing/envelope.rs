//! Result shapes the timing wrapper can rewrite.

use serde_json::Value;

/// A result object with a replaceable JSON body.
///
/// Everything other than the body (status, headers, ...) belongs to the
/// implementor and is left alone by [`measure`](super::measure).
pub trait Envelope {
    /// Mutable access to the body that gets nested under `objects`.
    fn body_mut(&mut self) -> &mut Value;
}

/// A bare JSON value is its own body.
impl Envelope for Value {
    fn body_mut(&mut self) -> &mut Value {
        self
    }
}
