//! Diesel table definitions for the PostgreSQL schema.
//!
//! Must match `backend/migrations`. Regenerate with `diesel print-schema`
//! after changing a migration.

diesel::table! {
    /// Course offerings.
    courses (id) {
        /// Primary key: UUID v4 identifier.
        id -> Uuid,
        /// Display title (max 200 characters).
        title -> Varchar,
        /// Free-form classification label (max 64 characters).
        category -> Varchar,
        /// Record creation timestamp.
        created_at -> Timestamptz,
    }
}

diesel::table! {
    /// One row per student/course enrollment.
    course_enrollments (id) {
        /// Primary key: UUID v4 identifier.
        id -> Uuid,
        /// Enrolled student.
        student_id -> Uuid,
        /// Course the student is enrolled in.
        course_id -> Uuid,
        /// Whether the enrollment is currently active.
        is_active -> Bool,
        /// Record creation timestamp.
        created_at -> Timestamptz,
    }
}

diesel::joinable!(course_enrollments -> courses (course_id));
diesel::allow_tables_to_appear_in_same_query!(courses, course_enrollments);
