//! Shared HTTP adapter state.
//!
//! Handlers accept this state via `actix_web::web::Data` so they only depend
//! on domain ports and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{
    ActiveStudentsQuery, CourseCategoriesQuery, FixtureActiveStudentsQuery,
    FixtureCourseCategoriesQuery,
};

/// Dependency bundle for the course handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Port answering the active-student count.
    pub active_students: Arc<dyn ActiveStudentsQuery>,
    /// Port listing distinct course categories.
    pub categories: Arc<dyn CourseCategoriesQuery>,
}

impl HttpState {
    /// Construct state from the two read ports.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use coursehub::domain::ports::{FixtureActiveStudentsQuery, FixtureCourseCategoriesQuery};
    /// use coursehub::inbound::http::state::HttpState;
    ///
    /// let state = HttpState::new(
    ///     Arc::new(FixtureActiveStudentsQuery),
    ///     Arc::new(FixtureCourseCategoriesQuery),
    /// );
    /// let _categories = state.categories.clone();
    /// ```
    pub fn new(
        active_students: Arc<dyn ActiveStudentsQuery>,
        categories: Arc<dyn CourseCategoriesQuery>,
    ) -> Self {
        Self {
            active_students,
            categories,
        }
    }

    /// State backed entirely by fixture ports.
    ///
    /// Intended for handler tests. The server never falls back to it; without
    /// a database the course endpoints fail instead.
    pub fn fixtures() -> Self {
        Self::new(
            Arc::new(FixtureActiveStudentsQuery),
            Arc::new(FixtureCourseCategoriesQuery),
        )
    }
}
