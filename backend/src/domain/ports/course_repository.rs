//! Driven port for reading the course collection.

use async_trait::async_trait;

use super::define_port_error;

define_port_error! {
    /// Errors raised when reading courses.
    pub enum CourseRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "course read connection failed: {message}",
        /// Query failed during execution or row conversion.
        Query { message: String } =>
            "course read query failed: {message}",
    }
}

/// Port for course reads.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CourseRepository: Send + Sync {
    /// Return the distinct raw category labels stored on courses.
    ///
    /// Labels are returned as stored; validation and ordering happen in the
    /// domain service so every adapter behaves the same way.
    async fn distinct_categories(&self) -> Result<Vec<String>, CourseRepositoryError>;
}
