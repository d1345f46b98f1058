//! Request tracking layers
//!
//! Request ids are generated for incoming requests that carry none and are
//! echoed on the response. Credential headers are marked sensitive so the
//! trace layer never prints them.

use http::header::{self, HeaderName};
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    sensitive_headers::SetSensitiveRequestHeadersLayer,
};

use crate::ids::MakeTypedRequestId;

/// Headers masked in request logs
///
/// `auth` is the OneView session header; clients that talk to both services
/// tend to send it here too.
pub const SENSITIVE_HEADERS: [HeaderName; 5] = [
    header::AUTHORIZATION,
    header::COOKIE,
    header::SET_COOKIE,
    HeaderName::from_static("auth"),
    HeaderName::from_static("x-auth-token"),
];

/// Sets `x-request-id` to a typed [`RequestId`](crate::ids::RequestId) when absent
pub fn request_id_layer() -> SetRequestIdLayer<MakeTypedRequestId> {
    SetRequestIdLayer::x_request_id(MakeTypedRequestId)
}

/// Copies `x-request-id` from the request to the response
pub fn request_id_propagation_layer() -> PropagateRequestIdLayer {
    PropagateRequestIdLayer::x_request_id()
}

pub fn sensitive_headers_layer() -> SetSensitiveRequestHeadersLayer {
    SetSensitiveRequestHeadersLayer::new(SENSITIVE_HEADERS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::Request, routing::get, Router};
    use tower::ServiceExt;

    #[test]
    fn test_sensitive_headers() {
        assert!(SENSITIVE_HEADERS.contains(&header::AUTHORIZATION));
        assert!(SENSITIVE_HEADERS.contains(&HeaderName::from_static("auth")));
    }

    #[tokio::test]
    async fn test_request_id_round_trip() {
        let app = Router::new()
            .route("/", get(|| async { "ok" }))
            .layer(request_id_propagation_layer())
            .layer(request_id_layer());

        let generated = app
            .clone()
            .oneshot(Request::get("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        let id = generated.headers()["x-request-id"].to_str().unwrap();
        assert!(id.starts_with("req_"));

        let supplied = app
            .oneshot(
                Request::get("/")
                    .header("x-request-id", "client-chosen")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(supplied.headers()["x-request-id"], "client-chosen");
    }
}
