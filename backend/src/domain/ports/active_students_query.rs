//! Driving port for active-student reporting.
//!
//! HTTP handlers depend on this port rather than on the enrollment
//! repository, so they stay testable without a database.

use async_trait::async_trait;

use crate::domain::Error;

/// Use-case port answering "how many students are currently active?".
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ActiveStudentsQuery: Send + Sync {
    /// Number of distinct students holding at least one active enrollment.
    async fn count_active_students(&self) -> Result<u64, Error>;
}

/// Fixture query returning a fixed count, used by handler tests.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureActiveStudentsQuery;

/// Value reported by [`FixtureActiveStudentsQuery`].
pub const FIXTURE_ACTIVE_STUDENTS: u64 = 0;

#[async_trait]
impl ActiveStudentsQuery for FixtureActiveStudentsQuery {
    async fn count_active_students(&self) -> Result<u64, Error> {
        Ok(FIXTURE_ACTIVE_STUDENTS)
    }
}
