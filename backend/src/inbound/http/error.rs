//! HTTP failure mapping for the course endpoints.
//!
//! Every failure reaches the client as `500` with a fixed, endpoint-specific
//! message in `{"error": "..."}`. The structured domain cause is logged with
//! the request's trace identifier and never serialised.

use std::fmt;

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::ToSchema;

use crate::domain::Error;
use crate::middleware::TraceId;

/// Result alias for course handlers.
pub type EndpointResult<T> = Result<T, EndpointFailure>;

/// Wire body for failed course requests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    /// Fixed, endpoint-specific description.
    #[schema(example = "Failed to load active students")]
    pub error: String,
}

/// A handler failure carrying the public message and the logged cause.
#[derive(Debug)]
pub struct EndpointFailure {
    message: &'static str,
    cause: Error,
}

impl EndpointFailure {
    /// Wrap `cause` behind the public `message`, logging the cause.
    pub fn new(message: &'static str, cause: Error) -> Self {
        let trace_id = TraceId::current().map(|id| id.to_string());
        error!(
            trace_id = trace_id.as_deref().unwrap_or("-"),
            code = %cause.code(),
            cause = cause.message(),
            "{message}"
        );
        Self { message, cause }
    }

    /// Public message sent to the client.
    pub fn message(&self) -> &'static str {
        self.message
    }

    /// Domain error that caused the failure.
    pub fn cause(&self) -> &Error {
        &self.cause
    }
}

impl fmt::Display for EndpointFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message)
    }
}

impl ResponseError for EndpointFailure {
    fn status_code(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorBody {
            error: self.message.to_owned(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;
    use rstest::rstest;

    #[rstest]
    #[case(Error::service_unavailable("pool checkout timed out"))]
    #[case(Error::internal("syntax error at or near"))]
    #[case(Error::invalid_request("category too long"))]
    #[actix_web::test]
    async fn every_cause_maps_to_fixed_500_body(#[case] cause: Error) {
        let failure = EndpointFailure::new("Failed to fetch categories", cause.clone());

        let response = failure.error_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = to_bytes(response.into_body()).await.expect("body");
        let body: serde_json::Value = serde_json::from_slice(&bytes).expect("json");
        assert_eq!(body, serde_json::json!({"error": "Failed to fetch categories"}));
        assert!(!String::from_utf8_lossy(&bytes).contains(cause.message()));
    }

    #[rstest]
    fn cause_is_retained_for_callers() {
        let cause = Error::service_unavailable("refused");
        let failure = EndpointFailure::new("Failed to load active students", cause.clone());

        assert_eq!(failure.cause(), &cause);
        assert_eq!(failure.to_string(), "Failed to load active students");
    }
}
