//! PostgreSQL-backed enrollment read adapter.

use std::sync::Arc;

use async_trait::async_trait;
use diesel::dsl::count_distinct;
use diesel::pg::Pg;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use uuid::Uuid;

use crate::domain::ports::{EnrollmentRepository, EnrollmentRepositoryError};
use crate::domain::{EnrollmentFilter, StudentId};

use super::connection::DbConnectionManager;
use super::diesel_basic_error_mapping::{map_basic_diesel_error, map_basic_pool_error};
use super::pool::PoolError;
use super::schema::course_enrollments;

/// Diesel-backed implementation of [`EnrollmentRepository`].
#[derive(Clone)]
pub struct DieselEnrollmentRepository {
    connections: Arc<DbConnectionManager>,
}

impl DieselEnrollmentRepository {
    /// Create a repository sharing the process-wide connection manager.
    pub fn new(connections: Arc<DbConnectionManager>) -> Self {
        Self { connections }
    }
}

fn map_pool_error(error: PoolError) -> EnrollmentRepositoryError {
    map_basic_pool_error(error, EnrollmentRepositoryError::connection)
}

fn map_diesel_error(error: diesel::result::Error) -> EnrollmentRepositoryError {
    map_basic_diesel_error(
        error,
        EnrollmentRepositoryError::query,
        EnrollmentRepositoryError::connection,
    )
}

/// Narrow a boxed `course_enrollments` query by status and course.
macro_rules! apply_enrollment_filter {
    ($query:expr, $filter:expr) => {{
        let filter: EnrollmentFilter = $filter;
        let mut query = $query;
        if let Some(flag) = filter.status().as_flag() {
            query = query.filter(course_enrollments::is_active.eq(flag));
        }
        if let Some(course_id) = filter.course_id() {
            query = query.filter(course_enrollments::course_id.eq(*course_id.as_uuid()));
        }
        query
    }};
}

#[async_trait]
impl EnrollmentRepository for DieselEnrollmentRepository {
    async fn count_distinct_students(
        &self,
        filter: EnrollmentFilter,
    ) -> Result<u64, EnrollmentRepositoryError> {
        let pool = self
            .connections
            .ensure_connected()
            .await
            .map_err(map_pool_error)?;
        let mut conn = pool.get().await.map_err(map_pool_error)?;

        let query = apply_enrollment_filter!(
            course_enrollments::table
                .select(count_distinct(course_enrollments::student_id))
                .into_boxed::<Pg>(),
            filter
        );
        let count: i64 = query
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        u64::try_from(count)
            .map_err(|_| EnrollmentRepositoryError::query(format!("negative count {count}")))
    }

    async fn distinct_students(
        &self,
        filter: EnrollmentFilter,
    ) -> Result<Vec<StudentId>, EnrollmentRepositoryError> {
        let pool = self
            .connections
            .ensure_connected()
            .await
            .map_err(map_pool_error)?;
        let mut conn = pool.get().await.map_err(map_pool_error)?;

        let query = apply_enrollment_filter!(
            course_enrollments::table
                .select(course_enrollments::student_id)
                .distinct()
                .order(course_enrollments::student_id.asc())
                .into_boxed::<Pg>(),
            filter
        );
        let rows: Vec<Uuid> = query.load(&mut conn).await.map_err(map_diesel_error)?;

        Ok(rows.into_iter().map(StudentId::from).collect())
    }
}
