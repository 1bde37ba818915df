//! Domain primitives, services and ports.
//!
//! Purpose: define strongly typed course and enrollment entities, the read
//! services over them, and the ports that keep persistence and HTTP details
//! at the edges.
//!
//! Public surface:
//! - `Error` / `ErrorCode`: structured failure type used by services.
//! - `CourseEnrollment`, `EnrollmentFilter`, identifiers: enrollment model.
//! - `Course`, `CourseCategory`: course model.
//! - `EnrollmentQueryService`, `CategoryLookupService`: read services.
//! - `ColorScheme`, `ColorSchemeInitializer`: shell presentation defaults.

mod category_service;
pub mod course;
pub mod enrollment;
mod enrollment_service;
pub mod error;
pub mod ports;
pub mod presentation;

pub use self::category_service::CategoryLookupService;
pub use self::course::{CATEGORY_MAX, Course, CourseCategory, CourseCategoryValidationError};
pub use self::enrollment::{
    CourseEnrollment, CourseId, EnrollmentFilter, EnrollmentId, EnrollmentStatus,
    IdentifierValidationError, StudentId,
};
pub use self::enrollment_service::EnrollmentQueryService;
pub use self::error::{Error, ErrorCode};
pub use self::presentation::{
    COLOR_SCHEME_ATTRIBUTE, ColorScheme, ColorSchemeInitializer, DocumentRoot, RootAttributes,
    UnknownColorScheme,
};
