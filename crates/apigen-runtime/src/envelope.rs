//! Response envelope and status mapping

use crate::error::ApiError;
use http::StatusCode;
use http::header::{CONTENT_TYPE, HeaderValue};
use serde::{Deserialize, Serialize};

/// Content type of every envelope body
pub const CONTENT_TYPE_JSON: &str = "application/json";

/// Uniform body of every generated endpoint.
///
/// ```json
/// {"response": {"id": 42}, "error": ""}
/// {"error": "login must be not empty"}
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseEnvelope {
    /// Payload on success; omitted on error or when the payload is null
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response: Option<serde_json::Value>,

    /// Error message, empty on success
    #[serde(default)]
    pub error: String,
}

impl ResponseEnvelope {
    /// Create a success envelope
    pub fn success(payload: serde_json::Value) -> Self {
        Self {
            response: (!payload.is_null()).then_some(payload),
            error: String::new(),
        }
    }

    /// Create an error envelope
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            response: None,
            error: message.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.error.is_empty()
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, serde_json::Error> {
        serde_json::to_vec(self)
    }

    pub fn from_bytes(data: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(data)
    }
}

/// A rendered response: status plus serialized envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub status: StatusCode,
    pub content_type: &'static str,
    pub body: Vec<u8>,
}

impl Response {
    /// Decode the body back into an envelope
    pub fn envelope(&self) -> Result<ResponseEnvelope, serde_json::Error> {
        ResponseEnvelope::from_bytes(&self.body)
    }

    /// Convert into an [`http::Response`]
    pub fn into_http(self) -> http::Response<Vec<u8>> {
        let mut response = http::Response::new(self.body);
        *response.status_mut() = self.status;
        response
            .headers_mut()
            .insert(CONTENT_TYPE, HeaderValue::from_static(self.content_type));
        response
    }
}

/// Build the response for a dispatched request.
///
/// `Ok` becomes `200` with the payload; an [`ApiError`] keeps its status;
/// anything else becomes `500`. The envelope is always the body.
pub fn respond(result: anyhow::Result<serde_json::Value>) -> Response {
    let (status, envelope) = match result {
        Ok(payload) => (StatusCode::OK, ResponseEnvelope::success(payload)),
        Err(err) => {
            let status = ApiError::status_of(&err);
            if status.is_server_error() {
                tracing::error!(error = %format!("{err:#}"), "request failed");
            } else {
                tracing::debug!(status = status.as_u16(), error = %err, "request rejected");
            }
            (status, ResponseEnvelope::error(err.to_string()))
        }
    };

    match envelope.to_bytes() {
        Ok(body) => Response {
            status,
            content_type: CONTENT_TYPE_JSON,
            body,
        },
        Err(err) => {
            tracing::error!(error = %err, "failed to encode response envelope");
            Response {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                content_type: CONTENT_TYPE_JSON,
                body: br#"{"error":"failed to encode response"}"#.to_vec(),
            }
        }
    }
}

/// Serialize a business result into an envelope payload
pub fn to_payload<T: Serialize>(value: T) -> anyhow::Result<serde_json::Value> {
    Ok(serde_json::to_value(value)?)
}
