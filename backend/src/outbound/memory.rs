//! In-memory repositories over fixed record sets.
//!
//! These adapters answer the same questions as the Diesel repositories by
//! filtering plain vectors. An adapter built with `unavailable` fails every
//! call with a connection error, which lets tests simulate a database outage.

use std::collections::BTreeSet;

use async_trait::async_trait;

use crate::domain::ports::{
    CourseRepository, CourseRepositoryError, EnrollmentRepository, EnrollmentRepositoryError,
};
use crate::domain::{Course, CourseEnrollment, EnrollmentFilter, StudentId};

/// Enrollment repository backed by a vector.
#[derive(Debug, Clone, Default)]
pub struct InMemoryEnrollmentRepository {
    enrollments: Vec<CourseEnrollment>,
    outage: Option<String>,
}

impl InMemoryEnrollmentRepository {
    /// Repository answering from `enrollments`.
    pub fn new(enrollments: Vec<CourseEnrollment>) -> Self {
        Self {
            enrollments,
            outage: None,
        }
    }

    /// Repository whose every call fails with a connection error.
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self {
            enrollments: Vec::new(),
            outage: Some(reason.into()),
        }
    }

    fn matching(&self, filter: EnrollmentFilter) -> Result<BTreeSet<StudentId>, EnrollmentRepositoryError> {
        if let Some(reason) = &self.outage {
            return Err(EnrollmentRepositoryError::connection(reason.clone()));
        }
        Ok(self
            .enrollments
            .iter()
            .filter(|enrollment| filter.matches(enrollment))
            .map(CourseEnrollment::student_id)
            .collect())
    }
}

#[async_trait]
impl EnrollmentRepository for InMemoryEnrollmentRepository {
    async fn count_distinct_students(
        &self,
        filter: EnrollmentFilter,
    ) -> Result<u64, EnrollmentRepositoryError> {
        let students = self.matching(filter)?;
        u64::try_from(students.len())
            .map_err(|err| EnrollmentRepositoryError::query(err.to_string()))
    }

    async fn distinct_students(
        &self,
        filter: EnrollmentFilter,
    ) -> Result<Vec<StudentId>, EnrollmentRepositoryError> {
        Ok(self.matching(filter)?.into_iter().collect())
    }
}

/// Course repository backed by a vector.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCourseRepository {
    courses: Vec<Course>,
    outage: Option<String>,
}

impl InMemoryCourseRepository {
    /// Repository answering from `courses`.
    pub fn new(courses: Vec<Course>) -> Self {
        Self {
            courses,
            outage: None,
        }
    }

    /// Repository whose every call fails with a connection error.
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self {
            courses: Vec::new(),
            outage: Some(reason.into()),
        }
    }
}

#[async_trait]
impl CourseRepository for InMemoryCourseRepository {
    async fn distinct_categories(&self) -> Result<Vec<String>, CourseRepositoryError> {
        if let Some(reason) = &self.outage {
            return Err(CourseRepositoryError::connection(reason.clone()));
        }
        let labels: BTreeSet<&str> = self
            .courses
            .iter()
            .map(|course| course.category().as_ref())
            .collect();
        Ok(labels.into_iter().map(str::to_owned).collect())
    }
}
