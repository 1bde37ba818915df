//! Driven port for reading course enrollments.
//!
//! The enrollment collection is read-only from this service's point of view.
//! Adapters translate an [`EnrollmentFilter`] into a store query and return
//! student identifiers with duplicates already collapsed.

use async_trait::async_trait;

use crate::domain::{EnrollmentFilter, StudentId};

use super::define_port_error;

define_port_error! {
    /// Errors raised when reading enrollments.
    pub enum EnrollmentRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "enrollment read connection failed: {message}",
        /// Query failed during execution or row conversion.
        Query { message: String } =>
            "enrollment read query failed: {message}",
    }
}

/// Port for enrollment reads.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EnrollmentRepository: Send + Sync {
    /// Count distinct student identifiers among enrollments matching `filter`.
    async fn count_distinct_students(
        &self,
        filter: EnrollmentFilter,
    ) -> Result<u64, EnrollmentRepositoryError>;

    /// Return distinct student identifiers matching `filter`, ascending.
    async fn distinct_students(
        &self,
        filter: EnrollmentFilter,
    ) -> Result<Vec<StudentId>, EnrollmentRepositoryError>;
}
