//! Category lookup service.
//!
//! Reads raw labels from the course collection, drops blank ones, validates
//! the rest and returns them deduplicated in ascending order. Deduplication
//! happens after trimming, so labels differing only in surrounding whitespace
//! collapse into one category.

use std::collections::BTreeSet;
use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::domain::ports::{CourseCategoriesQuery, CourseRepository, CourseRepositoryError};
use crate::domain::{CourseCategory, CourseCategoryValidationError, Error};

/// Service backing the category listing.
#[derive(Clone)]
pub struct CategoryLookupService {
    repository: Arc<dyn CourseRepository>,
}

impl CategoryLookupService {
    /// Service reading labels from `repository`.
    pub fn new(repository: Arc<dyn CourseRepository>) -> Self {
        Self { repository }
    }
}

fn map_repository_error(error: CourseRepositoryError) -> Error {
    match error {
        CourseRepositoryError::Connection { message } => Error::service_unavailable(message),
        CourseRepositoryError::Query { message } => Error::internal(message),
    }
}

fn normalise(labels: Vec<String>) -> Result<Vec<CourseCategory>, Error> {
    let mut categories = BTreeSet::new();
    for label in labels {
        match CourseCategory::new(&label) {
            Ok(category) => {
                categories.insert(category);
            }
            Err(CourseCategoryValidationError::Blank) => {
                debug!("skipping blank course category");
            }
            Err(err) => {
                warn!(error = %err, "stored course category failed validation");
                return Err(Error::invalid_request(format!("stored category: {err}")));
            }
        }
    }
    Ok(categories.into_iter().collect())
}

#[async_trait]
impl CourseCategoriesQuery for CategoryLookupService {
    async fn categories(&self) -> Result<Vec<CourseCategory>, Error> {
        let labels = self
            .repository
            .distinct_categories()
            .await
            .map_err(map_repository_error)?;
        normalise(labels)
    }
}
