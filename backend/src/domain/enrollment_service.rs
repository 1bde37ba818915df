//! Enrollment query service.
//!
//! Wraps an [`EnrollmentRepository`] and maps persistence failures into
//! domain errors. The service never retries and never returns partial data.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use crate::domain::ports::{ActiveStudentsQuery, EnrollmentRepository, EnrollmentRepositoryError};
use crate::domain::{EnrollmentFilter, Error, StudentId};

/// Read-side service over course enrollments.
#[derive(Clone)]
pub struct EnrollmentQueryService {
    repository: Arc<dyn EnrollmentRepository>,
}

impl EnrollmentQueryService {
    /// Service reading enrollments from `repository`.
    pub fn new(repository: Arc<dyn EnrollmentRepository>) -> Self {
        Self { repository }
    }

    /// Distinct students with at least one enrollment matching `filter`.
    ///
    /// # Errors
    /// Returns [`Error`] with `ServiceUnavailable` when the store cannot be
    /// reached and `InternalError` when the query fails.
    pub async fn distinct_students(&self, filter: EnrollmentFilter) -> Result<Vec<StudentId>, Error> {
        self.repository
            .distinct_students(filter)
            .await
            .map_err(map_repository_error)
    }

    /// Number of distinct students with an enrollment matching `filter`.
    ///
    /// # Errors
    /// Same mapping as [`Self::distinct_students`].
    pub async fn count_students(&self, filter: EnrollmentFilter) -> Result<u64, Error> {
        let count = self
            .repository
            .count_distinct_students(filter)
            .await
            .map_err(map_repository_error)?;
        debug!(?filter, count, "counted distinct students");
        Ok(count)
    }
}

fn map_repository_error(error: EnrollmentRepositoryError) -> Error {
    match error {
        EnrollmentRepositoryError::Connection { message } => Error::service_unavailable(message),
        EnrollmentRepositoryError::Query { message } => Error::internal(message),
    }
}

#[async_trait]
impl ActiveStudentsQuery for EnrollmentQueryService {
    async fn count_active_students(&self) -> Result<u64, Error> {
        self.count_students(EnrollmentFilter::active()).await
    }
}

#[cfg(test)]
mod tests {
    //! Coverage for filter forwarding and error mapping.
    use super::*;
    use crate::domain::ErrorCode;
    use crate::domain::ports::MockEnrollmentRepository;
    use rstest::rstest;

    fn service(repository: MockEnrollmentRepository) -> EnrollmentQueryService {
        EnrollmentQueryService::new(Arc::new(repository))
    }

    #[tokio::test]
    async fn count_active_students_uses_active_filter() {
        let mut repository = MockEnrollmentRepository::new();
        repository
            .expect_count_distinct_students()
            .withf(|filter| *filter == EnrollmentFilter::active())
            .times(1)
            .return_once(|_| Ok(3));

        let count = service(repository)
            .count_active_students()
            .await
            .expect("count should succeed");

        assert_eq!(count, 3);
    }

    #[tokio::test]
    async fn distinct_students_forwards_filter_and_rows() {
        let student = StudentId::random();
        let filter = EnrollmentFilter::all();
        let mut repository = MockEnrollmentRepository::new();
        repository
            .expect_distinct_students()
            .withf(move |received| *received == filter)
            .times(1)
            .return_once(move |_| Ok(vec![student]));

        let students = service(repository)
            .distinct_students(filter)
            .await
            .expect("query should succeed");

        assert_eq!(students, vec![student]);
    }

    #[rstest]
    #[case(EnrollmentRepositoryError::connection("refused"), ErrorCode::ServiceUnavailable)]
    #[case(EnrollmentRepositoryError::query("syntax"), ErrorCode::InternalError)]
    #[tokio::test]
    async fn count_maps_repository_failures(
        #[case] failure: EnrollmentRepositoryError,
        #[case] expected: ErrorCode,
    ) {
        let mut repository = MockEnrollmentRepository::new();
        repository
            .expect_count_distinct_students()
            .return_once(move |_| Err(failure));

        let err = service(repository)
            .count_active_students()
            .await
            .expect_err("failure should propagate");

        assert_eq!(err.code(), expected);
    }
}
