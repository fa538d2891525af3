//! # apigen
//!
//! HTTP handlers generated from annotated Rust source.
//!
//! apigen reads business methods and parameter structs at build time and
//! generates, for each of them:
//! - a `FromParams` impl that decodes and validates URL-encoded parameters
//! - a wrapper that checks credentials and the HTTP method before calling
//!   the business method
//! - a router per receiver type that dispatches on the request path and
//!   answers with a `{"response": ..., "error": ""}` envelope
//!
//! ## Quick Start
//!
//! Add to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! apigen = "0.3"
//!
//! [build-dependencies]
//! apigen-codegen = "0.3"
//! apigen-core = "0.3"
//! ```
//!
//! ## Declaring an API
//!
//! ```ignore
//! use apigen::prelude::*;
//!
//! #[derive(Debug, Default, Validate)]
//! pub struct ProfileParams {
//!     #[apivalidator = "required,paramname=user_login"]
//!     pub login: String,
//! }
//!
//! #[derive(Serialize)]
//! pub struct User {
//!     pub login: String,
//! }
//!
//! pub struct MyApi;
//!
//! impl MyApi {
//!     /// apigen:api {"url": "/user/profile", "auth": false}
//!     pub fn profile(&self, _ctx: &RequestContext, params: ProfileParams) -> anyhow::Result<User> {
//!         Ok(User { login: params.login })
//!     }
//! }
//!
//! // Generated by build.rs from this file
//! mod generated {
//!     include!(concat!(env!("OUT_DIR"), "/api_gen.rs"));
//! }
//! ```
//!
//! `MyApi` then implements [`Handler`]:
//!
//! ```ignore
//! let response = MyApi.serve_http(&SimpleRequest::get("/user/profile?user_login=bob"));
//! assert_eq!(response.status, StatusCode::OK);
//! ```
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports from:
//! - [`apigen_runtime`] - Request/response types used by generated code
//! - [`apigen_macros`] - The `Validate` derive that checks field tags at compile time

// Re-export runtime types; generated code names them as `::apigen::*`
pub use apigen_runtime::{
    ApiError, CONTENT_TYPE_JSON, FromParams, Handler, Params, Request, RequestContext, Response,
    ResponseEnvelope, SimpleRequest, StatusCode, anyhow, respond, serde_json, to_payload,
};

// Re-export macros
pub use apigen_macros::Validate;

// Re-export common dependencies that service authors need
pub use serde;
pub use tracing;

/// Prelude module for convenient imports.
///
/// Use `use apigen::prelude::*;` to import commonly used types.
///
/// This includes:
/// - Runtime traits: `Handler`, `Request`, `FromParams`
/// - Runtime types: `ApiError`, `RequestContext`, `SimpleRequest`, `StatusCode`
/// - Macros: `Validate`
/// - Serde derives for payload types
pub mod prelude {
    pub use crate::{
        ApiError, FromParams, Handler, Request, RequestContext, Response, SimpleRequest,
        StatusCode, Validate, anyhow,
    };

    pub use serde::{Deserialize, Serialize};
}
