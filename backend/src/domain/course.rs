//! Course data model.

use std::fmt;

use serde::Serialize;

use super::enrollment::CourseId;

/// Maximum number of characters accepted in a category label.
pub const CATEGORY_MAX: usize = 64;

/// Validation errors returned by [`CourseCategory::new`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CourseCategoryValidationError {
    /// Label is empty after trimming.
    #[error("category must not be blank")]
    Blank,
    /// Label exceeds the length limit.
    #[error("category must be at most {max} characters")]
    TooLong { max: usize },
}

/// Classification label attached to a course.
///
/// Labels are free-form. Surrounding whitespace is trimmed on construction.
///
/// # Examples
/// ```
/// use coursehub::domain::CourseCategory;
///
/// let category = CourseCategory::new("  Data Science ").expect("valid category");
/// assert_eq!(category.as_ref(), "Data Science");
/// assert!(CourseCategory::new("   ").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct CourseCategory(String);

impl CourseCategory {
    /// Validate and trim `label`.
    pub fn new(label: impl AsRef<str>) -> Result<Self, CourseCategoryValidationError> {
        let trimmed = label.as_ref().trim();
        if trimmed.is_empty() {
            return Err(CourseCategoryValidationError::Blank);
        }
        if trimmed.chars().count() > CATEGORY_MAX {
            return Err(CourseCategoryValidationError::TooLong { max: CATEGORY_MAX });
        }
        Ok(Self(trimmed.to_owned()))
    }
}

impl AsRef<str> for CourseCategory {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for CourseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<CourseCategory> for String {
    fn from(value: CourseCategory) -> Self {
        value.0
    }
}

/// A course offering. Only the category is read by this service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Course {
    id: CourseId,
    title: String,
    category: CourseCategory,
}

impl Course {
    /// Assemble a course from validated parts.
    pub const fn new(id: CourseId, title: String, category: CourseCategory) -> Self {
        Self {
            id,
            title,
            category,
        }
    }

    /// Course identifier.
    pub const fn id(&self) -> CourseId {
        self.id
    }

    /// Display title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Category the course is filed under.
    pub const fn category(&self) -> &CourseCategory {
        &self.category
    }
}
