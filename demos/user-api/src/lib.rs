//! user-api - Demo service for apigen
//!
//! Business logic lives in [`api`]; `build.rs` generates the request
//! validators, wrappers, and routers for it. Both receivers implement
//! [`apigen::Handler`]:
//!
//! ```
//! use apigen::{Handler, SimpleRequest, StatusCode};
//! use user_api::MyApi;
//!
//! let api = MyApi::new();
//! let response = api.serve_http(&SimpleRequest::get("/user/profile?login=rvasily"));
//! assert_eq!(response.status, StatusCode::OK);
//! ```

pub mod api;

pub use api::{
    CreateParams, GreetParams, Greeting, MyApi, NewUser, OtherApi, OtherCreateParams, OtherUser, ProfileParams,
    SearchParams, SearchResult, User,
};
