//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers the course endpoints, the health probes and the shell
//! route together with their response schemas. The document backs Swagger UI
//! in debug builds and is exported via `cargo run --bin openapi-dump`.

use utoipa::OpenApi;

use crate::inbound::http::courses::{ActiveStudentsResponse, CategoriesResponse};
use crate::inbound::http::error::ErrorBody;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "CourseHub backend API",
        description = "Read-only course reporting endpoints, health probes and the app shell."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::courses::active_students,
        crate::inbound::http::courses::categories,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
        crate::inbound::http::shell::app_shell,
    ),
    components(schemas(ActiveStudentsResponse, CategoriesResponse, ErrorBody)),
    tags(
        (name = "courses", description = "Course and enrollment reporting"),
        (name = "health", description = "Endpoints for health checks"),
        (name = "shell", description = "Client application bootstrap document")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    //! Tests verifying registered paths and schema fields.

    use super::*;
    use rstest::rstest;
    use utoipa::openapi::RefOr;
    use utoipa::openapi::schema::Schema;

    fn assert_object_schema_has_field(schema: &RefOr<Schema>, field: &str) {
        match schema {
            RefOr::T(Schema::Object(obj)) => {
                assert!(
                    obj.properties.contains_key(field),
                    "schema should have field '{field}'"
                );
            }
            _ => panic!("expected Object schema"),
        }
    }

    #[rstest]
    #[case("/api/courses/active-students")]
    #[case("/api/courses/categories")]
    #[case("/health/ready")]
    #[case("/health/live")]
    #[case("/")]
    fn path_is_documented(#[case] path: &str) {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key(path), "missing {path}");
    }

    #[rstest]
    #[case("ActiveStudentsResponse", "activeStudents")]
    #[case("CategoriesResponse", "categories")]
    #[case("ErrorBody", "error")]
    fn schema_exposes_wire_field(#[case] name: &str, #[case] field: &str) {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;
        let schema = schemas.get(name).expect("schema registered");
        assert_object_schema_has_field(schema, field);
    }
}
