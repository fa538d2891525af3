//! URL-encoded request parameters

use crate::request::Request;

/// Decoded `application/x-www-form-urlencoded` pairs, in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params {
    pairs: Vec<(String, String)>,
}

impl Params {
    /// Decode a query string or form body
    pub fn parse(input: &[u8]) -> Self {
        url::form_urlencoded::parse(input).into_owned().collect()
    }

    /// Parameters of a request: the query string for `GET`, the body otherwise
    pub fn from_request(req: &dyn Request) -> Self {
        if req.method() == http::Method::GET.as_str() {
            Self::parse(req.query().as_bytes())
        } else {
            Self::parse(req.body())
        }
    }

    /// First value of `name`, or `""` when absent
    pub fn get(&self, name: &str) -> &str {
        self.pairs
            .iter()
            .find(|(k, _)| k == name)
            .map_or("", |(_, v)| v.as_str())
    }

    /// Every value of `name`
    pub fn get_all<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.pairs
            .iter()
            .filter(move |(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.pairs.iter().any(|(k, _)| k == name)
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

impl FromIterator<(String, String)> for Params {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            pairs: iter.into_iter().collect(),
        }
    }
}

/// Types that can be decoded and validated from request parameters.
///
/// Generated for every struct with validated fields.
pub trait FromParams: Sized {
    fn from_params(params: &Params) -> Result<Self, crate::ApiError>;
}
