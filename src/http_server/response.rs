//! Handler result type.

use axum::http::header::{HeaderValue, CACHE_CONTROL};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use serde_json::Value;

use crate::cache::CachedResponse;
use crate::timing::Envelope;

use super::errors::ApiResult;

/// Status, headers and a JSON body, rendered only at the edge so that
/// wrappers can still reshape the body.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Value,
}

impl ApiResponse {
    pub fn new(status: StatusCode, body: Value) -> Self {
        Self {
            status,
            headers: HeaderMap::new(),
            body,
        }
    }

    /// 200 with a serialized payload
    pub fn json<T: Serialize>(payload: &T) -> ApiResult<Self> {
        Ok(Self::new(StatusCode::OK, serde_json::to_value(payload)?))
    }

    /// 200 with a `null` body
    pub fn empty() -> Self {
        Self::new(StatusCode::OK, Value::Null)
    }

    /// Mark the response cacheable by clients for `max_age_secs`
    pub fn with_max_age(mut self, max_age_secs: u64) -> Self {
        if let Ok(value) = HeaderValue::from_str(&format!("max-age={}", max_age_secs)) {
            self.headers.insert(CACHE_CONTROL, value);
        }
        self
    }

    pub fn to_cached(&self) -> CachedResponse {
        CachedResponse {
            status: self.status.as_u16(),
            body: self.body.clone(),
        }
    }

    pub fn from_cached(cached: CachedResponse) -> Self {
        let status = StatusCode::from_u16(cached.status).unwrap_or(StatusCode::OK);
        Self::new(status, cached.body)
    }
}

impl Envelope for ApiResponse {
    fn body_mut(&mut self) -> &mut Value {
        &mut self.body
    }
}

impl IntoResponse for ApiResponse {
    fn into_response(self) -> Response {
        (self.status, self.headers, Json(self.body)).into_response()
    }
}
