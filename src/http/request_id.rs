//! Request ID generation.
//!
//! Every request carries an `x-request-id` header, generated here when the
//! client did not supply one and propagated to the response.

use axum::http::{HeaderValue, Request};
use tower_http::request_id::{MakeRequestId, RequestId};
use uuid::Uuid;

/// UUID v4 request id source for `SetRequestIdLayer`.
#[derive(Clone, Copy, Default)]
pub struct RequestUuid;

impl MakeRequestId for RequestUuid {
    fn make_request_id<B>(&mut self, _request: &Request<B>) -> Option<RequestId> {
        let id = Uuid::new_v4().to_string();
        HeaderValue::from_str(&id).ok().map(RequestId::new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;

    #[test]
    fn test_generates_parseable_uuid() {
        let mut source = RequestUuid;
        let request = Request::builder().body(Body::empty()).unwrap();
        let id = source.make_request_id(&request).unwrap();
        let value = id.header_value().to_str().unwrap();
        assert!(Uuid::parse_str(value).is_ok());
    }
}
