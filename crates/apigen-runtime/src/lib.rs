//! apigen-runtime - Support code for apigen-generated handlers
//!
//! Generated code depends on this crate (usually through the `apigen` facade):
//! - [`Request`] abstraction over the hosting server's request type
//! - [`Params`] and [`FromParams`] for URL-encoded parameter decoding
//! - [`ApiError`] carrying an HTTP status
//! - [`ResponseEnvelope`], [`Response`], and [`respond`] for the uniform body
//! - [`Handler`], implemented by every generated router
//!
//! Everything here is stateless per request, so a [`Handler`] can be shared
//! across threads by the hosting server.

mod envelope;
mod error;
mod params;
mod request;

pub use envelope::{CONTENT_TYPE_JSON, Response, ResponseEnvelope, respond, to_payload};
pub use error::ApiError;
pub use params::{FromParams, Params};
pub use request::{Request, RequestContext, SimpleRequest};

// Generated code names these through the runtime path.
pub use anyhow;
pub use http::StatusCode;
pub use serde_json;

/// A router generated for one receiver type.
pub trait Handler: Send + Sync {
    /// Dispatch on the exact request path and render the envelope
    fn serve_http(&self, req: &dyn Request) -> Response;
}

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        ApiError, FromParams, Handler, Params, Request, RequestContext, Response,
        ResponseEnvelope, SimpleRequest,
    };
}
