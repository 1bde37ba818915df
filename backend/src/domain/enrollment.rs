//! Enrollment data model.
//!
//! An enrollment links one student to one course and carries an active flag.
//! Enrollments are created and toggled elsewhere; this service only reads
//! them.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Validation errors returned when parsing identifiers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdentifierValidationError {
    /// Input was empty or whitespace.
    Empty,
    /// Input is not a UUID.
    InvalidUuid,
}

impl fmt::Display for IdentifierValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "identifier must not be empty"),
            Self::InvalidUuid => write!(f, "identifier must be a valid UUID"),
        }
    }
}

impl std::error::Error for IdentifierValidationError {}

macro_rules! uuid_identifier {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            /// Parse an identifier from its canonical string form.
            pub fn new(id: impl AsRef<str>) -> Result<Self, IdentifierValidationError> {
                let raw = id.as_ref();
                if raw.is_empty() {
                    return Err(IdentifierValidationError::Empty);
                }
                Uuid::parse_str(raw)
                    .map(Self)
                    .map_err(|_| IdentifierValidationError::InvalidUuid)
            }

            /// Generate a fresh random identifier.
            pub fn random() -> Self {
                Self(Uuid::new_v4())
            }

            /// Access the underlying UUID.
            pub const fn as_uuid(&self) -> &Uuid {
                &self.0
            }
        }

        impl From<Uuid> for $name {
            fn from(value: Uuid) -> Self {
                Self(value)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.fmt(f)
            }
        }
    };
}

uuid_identifier!(
    /// Stable identifier of a student.
    StudentId
);
uuid_identifier!(
    /// Stable identifier of a course.
    CourseId
);
uuid_identifier!(
    /// Stable identifier of a single enrollment record.
    EnrollmentId
);

/// One student's enrollment in one course.
///
/// Uniqueness of `(student_id, course_id)` is assumed by callers but not
/// enforced here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseEnrollment {
    id: EnrollmentId,
    student_id: StudentId,
    course_id: CourseId,
    is_active: bool,
}

impl CourseEnrollment {
    /// Record that `student_id` is enrolled in `course_id`.
    pub const fn new(
        id: EnrollmentId,
        student_id: StudentId,
        course_id: CourseId,
        is_active: bool,
    ) -> Self {
        Self {
            id,
            student_id,
            course_id,
            is_active,
        }
    }

    /// Enrollment identifier.
    pub const fn id(&self) -> EnrollmentId {
        self.id
    }

    /// Enrolled student.
    pub const fn student_id(&self) -> StudentId {
        self.student_id
    }

    /// Course enrolled in.
    pub const fn course_id(&self) -> CourseId {
        self.course_id
    }

    /// Whether the enrollment is currently active.
    pub const fn is_active(&self) -> bool {
        self.is_active
    }
}

/// Which enrollments a query should consider by status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EnrollmentStatus {
    /// Only enrollments flagged active.
    #[default]
    Active,
    /// Only enrollments flagged inactive.
    Inactive,
    /// Every enrollment regardless of status.
    Any,
}

impl EnrollmentStatus {
    /// The `is_active` value to filter on, or `None` when unrestricted.
    pub const fn as_flag(self) -> Option<bool> {
        match self {
            Self::Active => Some(true),
            Self::Inactive => Some(false),
            Self::Any => None,
        }
    }
}

/// Filter applied to enrollment queries.
///
/// # Examples
/// ```
/// use coursehub::domain::{CourseId, EnrollmentFilter, EnrollmentStatus};
///
/// let course = CourseId::random();
/// let filter = EnrollmentFilter::active().for_course(course);
/// assert_eq!(filter.status(), EnrollmentStatus::Active);
/// assert_eq!(filter.course_id(), Some(course));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EnrollmentFilter {
    status: EnrollmentStatus,
    course_id: Option<CourseId>,
}

impl EnrollmentFilter {
    /// Active enrollments across all courses.
    pub const fn active() -> Self {
        Self::with_status(EnrollmentStatus::Active)
    }

    /// Every enrollment across all courses.
    pub const fn all() -> Self {
        Self::with_status(EnrollmentStatus::Any)
    }

    /// Filter on `status` across all courses.
    pub const fn with_status(status: EnrollmentStatus) -> Self {
        Self {
            status,
            course_id: None,
        }
    }

    /// Restrict the filter to a single course.
    #[must_use]
    pub const fn for_course(mut self, course_id: CourseId) -> Self {
        self.course_id = Some(course_id);
        self
    }

    /// Status the filter accepts.
    pub const fn status(&self) -> EnrollmentStatus {
        self.status
    }

    /// Course restriction, if any.
    pub const fn course_id(&self) -> Option<CourseId> {
        self.course_id
    }

    /// Whether an enrollment satisfies this filter.
    pub fn matches(&self, enrollment: &CourseEnrollment) -> bool {
        let status_ok = self
            .status
            .as_flag()
            .is_none_or(|flag| enrollment.is_active() == flag);
        let course_ok = self
            .course_id
            .is_none_or(|course| enrollment.course_id() == course);
        status_ok && course_ok
    }
}
