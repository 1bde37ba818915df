//! Driving port for the course category listing.

use async_trait::async_trait;

use crate::domain::{CourseCategory, Error};

/// Use-case port returning the categories shown in course navigation.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CourseCategoriesQuery: Send + Sync {
    /// Distinct categories in ascending order.
    ///
    /// Stored labels are trimmed before deduplication, so values differing
    /// only in surrounding whitespace (`" Music "` and `"Music"`) are reported
    /// once. Blank labels are omitted.
    async fn categories(&self) -> Result<Vec<CourseCategory>, Error>;
}

/// Fixture query returning a fixed category set, used by handler tests.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureCourseCategoriesQuery;

/// Labels reported by [`FixtureCourseCategoriesQuery`], already sorted.
pub const FIXTURE_CATEGORIES: [&str; 3] = ["Business", "Design", "Development"];

#[async_trait]
impl CourseCategoriesQuery for FixtureCourseCategoriesQuery {
    async fn categories(&self) -> Result<Vec<CourseCategory>, Error> {
        // Compile-time constants; an invalid label is a programming error
        // surfaced as an internal error rather than a panic.
        FIXTURE_CATEGORIES
            .iter()
            .map(|label| {
                CourseCategory::new(label)
                    .map_err(|err| Error::internal(format!("invalid fixture category: {err}")))
            })
            .collect()
    }
}
