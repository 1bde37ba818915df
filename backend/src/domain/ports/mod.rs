//! Domain ports and supporting types for the hexagonal boundary.
//!
//! Driven ports (`*Repository`) are implemented by outbound adapters; driving
//! ports (`*Query`) are implemented by domain services and consumed by
//! inbound adapters.

mod macros;
pub(crate) use macros::define_port_error;

mod active_students_query;
mod course_categories_query;
mod course_repository;
mod enrollment_repository;

#[cfg(test)]
pub use active_students_query::MockActiveStudentsQuery;
pub use active_students_query::{
    ActiveStudentsQuery, FIXTURE_ACTIVE_STUDENTS, FixtureActiveStudentsQuery,
};
#[cfg(test)]
pub use course_categories_query::MockCourseCategoriesQuery;
pub use course_categories_query::{
    CourseCategoriesQuery, FIXTURE_CATEGORIES, FixtureCourseCategoriesQuery,
};
#[cfg(test)]
pub use course_repository::MockCourseRepository;
pub use course_repository::{CourseRepository, CourseRepositoryError};
#[cfg(test)]
pub use enrollment_repository::MockEnrollmentRepository;
pub use enrollment_repository::{EnrollmentRepository, EnrollmentRepositoryError};
