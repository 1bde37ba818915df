//! PostgreSQL-backed course read adapter.

use std::sync::Arc;

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{CourseRepository, CourseRepositoryError};

use super::connection::DbConnectionManager;
use super::diesel_basic_error_mapping::{map_basic_diesel_error, map_basic_pool_error};
use super::schema::courses;

/// Diesel-backed implementation of [`CourseRepository`].
#[derive(Clone)]
pub struct DieselCourseRepository {
    connections: Arc<DbConnectionManager>,
}

impl DieselCourseRepository {
    /// Create a repository sharing the process-wide connection manager.
    pub fn new(connections: Arc<DbConnectionManager>) -> Self {
        Self { connections }
    }
}

#[async_trait]
impl CourseRepository for DieselCourseRepository {
    async fn distinct_categories(&self) -> Result<Vec<String>, CourseRepositoryError> {
        let pool = self
            .connections
            .ensure_connected()
            .await
            .map_err(|err| map_basic_pool_error(err, CourseRepositoryError::connection))?;
        let mut conn = pool
            .get()
            .await
            .map_err(|err| map_basic_pool_error(err, CourseRepositoryError::connection))?;

        courses::table
            .select(courses::category)
            .distinct()
            .load::<String>(&mut conn)
            .await
            .map_err(|err| {
                map_basic_diesel_error(
                    err,
                    CourseRepositoryError::query,
                    CourseRepositoryError::connection,
                )
            })
    }
}
