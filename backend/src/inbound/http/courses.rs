//! Course read endpoints.
//!
//! ```text
//! GET /api/courses/active-students
//! GET /api/courses/categories
//! ```

use actix_web::{get, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::inbound::http::error::{EndpointFailure, EndpointResult, ErrorBody};
use crate::inbound::http::state::HttpState;

/// Public message for a failed active-student count.
pub const ACTIVE_STUDENTS_FAILURE: &str = "Failed to load active students";
/// Public message for a failed category listing.
pub const CATEGORIES_FAILURE: &str = "Failed to fetch categories";

/// Response payload for the active-student count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ActiveStudentsResponse {
    /// Distinct students with at least one active enrollment.
    #[schema(example = 42)]
    pub active_students: u64,
}

/// Response payload for the category listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CategoriesResponse {
    /// Distinct category labels in ascending order.
    #[schema(example = json!(["Business", "Design", "Development"]))]
    pub categories: Vec<String>,
}

/// Register the course endpoints under `/api/courses`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/courses")
            .service(active_students)
            .service(categories),
    );
}

/// Count distinct students with at least one active enrollment.
#[utoipa::path(
    get,
    path = "/api/courses/active-students",
    responses(
        (status = 200, description = "Active student count", body = ActiveStudentsResponse),
        (status = 500, description = "Count could not be computed", body = ErrorBody)
    ),
    tags = ["courses"],
    operation_id = "getActiveStudents"
)]
#[get("/active-students")]
pub async fn active_students(
    state: web::Data<HttpState>,
) -> EndpointResult<web::Json<ActiveStudentsResponse>> {
    let active_students = state
        .active_students
        .count_active_students()
        .await
        .map_err(|cause| EndpointFailure::new(ACTIVE_STUDENTS_FAILURE, cause))?;
    Ok(web::Json(ActiveStudentsResponse { active_students }))
}

/// List the distinct course categories.
#[utoipa::path(
    get,
    path = "/api/courses/categories",
    responses(
        (status = 200, description = "Distinct categories", body = CategoriesResponse),
        (status = 500, description = "Categories could not be loaded", body = ErrorBody)
    ),
    tags = ["courses"],
    operation_id = "getCourseCategories"
)]
#[get("/categories")]
pub async fn categories(
    state: web::Data<HttpState>,
) -> EndpointResult<web::Json<CategoriesResponse>> {
    let categories = state
        .categories
        .categories()
        .await
        .map_err(|cause| EndpointFailure::new(CATEGORIES_FAILURE, cause))?;
    Ok(web::Json(CategoriesResponse {
        categories: categories.into_iter().map(String::from).collect(),
    }))
}
