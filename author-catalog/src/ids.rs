//! Request identifiers
//!
//! Request IDs are `req_` followed by a UUIDv7 in simple (hex) form, which
//! keeps them time-sortable for log correlation.

use http::{HeaderValue, Request};
use std::fmt;
use tower_http::request_id::{MakeRequestId, RequestId as TowerRequestId};
use uuid::Uuid;

/// A request identifier
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestId(String);

impl RequestId {
    /// The prefix used for request IDs
    pub const PREFIX: &'static str = "req";

    /// Creates a new request ID from a fresh UUIDv7
    #[must_use]
    pub fn new() -> Self {
        Self(format!("{}_{}", Self::PREFIX, Uuid::now_v7().simple()))
    }

    /// Returns the request ID as a string slice
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for RequestId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// `MakeRequestId` for tower-http's request-id layers
#[derive(Debug, Clone, Copy, Default)]
pub struct MakeTypedRequestId;

impl MakeRequestId for MakeTypedRequestId {
    fn make_request_id<B>(&mut self, _request: &Request<B>) -> Option<TowerRequestId> {
        HeaderValue::from_str(RequestId::new().as_str())
            .ok()
            .map(TowerRequestId::new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_id_format() {
        let id = RequestId::new();
        assert!(id.as_str().starts_with("req_"));
        assert_eq!(id.as_str().len(), "req_".len() + 32);
    }

    #[test]
    fn test_request_ids_are_unique() {
        assert_ne!(RequestId::new(), RequestId::new());
    }

    #[test]
    fn test_make_request_id_produces_header_value() {
        let request = Request::builder().uri("/authors").body(()).unwrap();
        let id = MakeTypedRequestId.make_request_id(&request).unwrap();
        assert!(id.header_value().to_str().unwrap().starts_with("req_"));
    }
}
