//! Builders wiring domain services to HTTP state.

use std::sync::Arc;

use actix_web::web;
use tracing::info;

use coursehub::domain::{CategoryLookupService, EnrollmentQueryService};
use coursehub::inbound::http::state::HttpState;
use coursehub::outbound::memory::{InMemoryCourseRepository, InMemoryEnrollmentRepository};
use coursehub::outbound::persistence::{
    DbConnectionManager, DieselCourseRepository, DieselEnrollmentRepository,
};

/// Reason reported by every course endpoint when no database URL is set.
pub(super) const NO_DATABASE: &str = "no database configured";

/// Diesel-backed services when a connection manager is configured.
///
/// Without one the same services run over repositories that fail every call
/// with a connection error, so course endpoints answer with their fixed 500
/// instead of inventing data.
pub(super) fn build_http_state(
    connections: Option<&Arc<DbConnectionManager>>,
) -> web::Data<HttpState> {
    let state = match connections {
        Some(connections) => {
            let enrollments = DieselEnrollmentRepository::new(Arc::clone(connections));
            let courses = DieselCourseRepository::new(Arc::clone(connections));
            HttpState::new(
                Arc::new(EnrollmentQueryService::new(Arc::new(enrollments))),
                Arc::new(CategoryLookupService::new(Arc::new(courses))),
            )
        }
        None => {
            info!("{NO_DATABASE}; course endpoints will report the store as unavailable");
            HttpState::new(
                Arc::new(EnrollmentQueryService::new(Arc::new(
                    InMemoryEnrollmentRepository::unavailable(NO_DATABASE),
                ))),
                Arc::new(CategoryLookupService::new(Arc::new(
                    InMemoryCourseRepository::unavailable(NO_DATABASE),
                ))),
            )
        }
    };
    web::Data::new(state)
}
