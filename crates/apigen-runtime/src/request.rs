//! Request abstraction consumed by generated routers and wrappers

/// The view of an HTTP request that generated code needs.
///
/// Hosting servers implement this for their own request type; an impl for
/// [`http::Request`] and the in-memory [`SimpleRequest`] are provided.
pub trait Request {
    /// Request method, e.g. `GET`
    fn method(&self) -> &str;

    /// Path without the query string
    fn path(&self) -> &str;

    /// First value of a header, matched case-insensitively
    fn header(&self, name: &str) -> Option<&str>;

    /// Raw query string without the leading `?`
    fn query(&self) -> &str;

    /// Raw request body
    fn body(&self) -> &[u8];
}

impl<B: AsRef<[u8]>> Request for http::Request<B> {
    fn method(&self) -> &str {
        http::Request::method(self).as_str()
    }

    fn path(&self) -> &str {
        self.uri().path()
    }

    fn header(&self, name: &str) -> Option<&str> {
        self.headers().get(name).and_then(|v| v.to_str().ok())
    }

    fn query(&self) -> &str {
        self.uri().query().unwrap_or("")
    }

    fn body(&self) -> &[u8] {
        http::Request::body(self).as_ref()
    }
}

/// Per-request context handed to business methods
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestContext {
    /// Request method
    pub method: String,
    /// Request path
    pub path: String,
    /// Value of `X-Request-Id`, if the caller sent one
    pub request_id: Option<String>,
}

impl RequestContext {
    /// Header carrying a caller-supplied request ID
    pub const REQUEST_ID_HEADER: &'static str = "X-Request-Id";

    /// Capture the context of an incoming request
    pub fn from_request(req: &dyn Request) -> Self {
        Self {
            method: req.method().to_string(),
            path: req.path().to_string(),
            request_id: req.header(Self::REQUEST_ID_HEADER).map(str::to_string),
        }
    }
}

/// Owned, in-memory request.
///
/// Handy for tests and for servers that do not use the `http` crate.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SimpleRequest {
    method: String,
    path: String,
    query: String,
    headers: Vec<(String, String)>,
    body: Vec<u8>,
}

impl SimpleRequest {
    /// Create a request. `target` may carry a query string (`/path?a=1`).
    pub fn new(method: impl Into<String>, target: &str) -> Self {
        let (path, query) = target.split_once('?').unwrap_or((target, ""));
        Self {
            method: method.into(),
            path: path.to_string(),
            query: query.to_string(),
            headers: Vec::new(),
            body: Vec::new(),
        }
    }

    pub fn get(target: &str) -> Self {
        Self::new("GET", target)
    }

    pub fn post(target: &str) -> Self {
        Self::new("POST", target)
    }

    /// Add a header
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Replace the query string
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    /// Set the body
    pub fn with_body(mut self, body: impl Into<Vec<u8>>) -> Self {
        self.body = body.into();
        self
    }
}

impl Request for SimpleRequest {
    fn method(&self) -> &str {
        &self.method
    }

    fn path(&self) -> &str {
        &self.path
    }

    fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    fn query(&self) -> &str {
        &self.query
    }

    fn body(&self) -> &[u8] {
        &self.body
    }
}
