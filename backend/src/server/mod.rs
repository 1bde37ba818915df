//! Server construction and middleware wiring.

mod config;
#[cfg(feature = "metrics")]
mod metrics;
mod state_builders;

pub use config::ServerConfig;

#[cfg(feature = "metrics")]
use metrics::MetricsLayer;
use state_builders::build_http_state;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};

use coursehub::Trace;
#[cfg(debug_assertions)]
use coursehub::doc::ApiDoc;
use coursehub::domain::ColorSchemeInitializer;
use coursehub::inbound::http::courses;
use coursehub::inbound::http::health::{HealthState, live, ready};
use coursehub::inbound::http::shell::{AppShell, app_shell};
use coursehub::inbound::http::state::HttpState;
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

#[derive(Clone)]
struct AppDependencies {
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
    shell: web::Data<AppShell>,
}

fn build_app(
    deps: AppDependencies,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let AppDependencies {
        health_state,
        http_state,
        shell,
    } = deps;

    let app = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .app_data(shell)
        .wrap(Trace)
        .configure(courses::configure)
        .service(ready)
        .service(live)
        .service(app_shell);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));

    app
}

/// Construct the HTTP server.
///
/// The shell document is assembled here, once, so the color scheme
/// initializer runs exactly once per process regardless of worker count.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let server_health_state = health_state.clone();
    let http_state = build_http_state(config.connections.as_ref());
    let initializer = ColorSchemeInitializer::new(config.color_scheme);
    let shell = web::Data::new(AppShell::assemble(&initializer));
    let ServerConfig {
        bind_addr,
        connections: _,
        color_scheme: _,
        #[cfg(feature = "metrics")]
        prometheus,
    } = config;

    #[cfg(feature = "metrics")]
    let metrics_layer = MetricsLayer::from_option(prometheus);

    let server = HttpServer::new(move || {
        let app = build_app(AppDependencies {
            health_state: server_health_state.clone(),
            http_state: http_state.clone(),
            shell: shell.clone(),
        });

        #[cfg(feature = "metrics")]
        let app = app.wrap(metrics_layer.clone());

        app
    })
    .bind(bind_addr)?
    .run();

    health_state.mark_ready();
    Ok(server)
}

#[cfg(test)]
mod tests {
    use actix_web::http::StatusCode;
    use actix_web::test as actix_test;
    use rstest::{fixture, rstest};
    use serde_json::json;

    use coursehub::domain::ColorScheme;
    use coursehub::domain::ports::FIXTURE_CATEGORIES;
    use coursehub::inbound::http::courses::{ACTIVE_STUDENTS_FAILURE, CATEGORIES_FAILURE};
    use coursehub::middleware::TRACE_ID_HEADER;

    use super::*;

    #[fixture]
    fn deps() -> AppDependencies {
        AppDependencies {
            health_state: web::Data::new(HealthState::new()),
            http_state: web::Data::new(HttpState::fixtures()),
            shell: web::Data::new(AppShell::assemble(&ColorSchemeInitializer::new(
                ColorScheme::Dark,
            ))),
        }
    }

    #[rstest]
    #[actix_web::test]
    async fn course_routes_are_mounted_and_traced(deps: AppDependencies) {
        let app = actix_test::init_service(build_app(deps)).await;

        let req = actix_test::TestRequest::get()
            .uri("/api/courses/categories")
            .to_request();
        let res = actix_test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::OK);
        assert!(res.headers().contains_key(TRACE_ID_HEADER));
        let body: serde_json::Value = actix_test::read_body_json(res).await;
        assert_eq!(body, json!({"categories": FIXTURE_CATEGORIES}));
    }

    #[rstest]
    #[case("/api/courses/active-students", ACTIVE_STUDENTS_FAILURE)]
    #[case("/api/courses/categories", CATEGORIES_FAILURE)]
    #[actix_web::test]
    async fn course_routes_fail_without_a_database(
        mut deps: AppDependencies,
        #[case] uri: &str,
        #[case] message: &str,
    ) {
        deps.http_state = build_http_state(None);
        let app = actix_test::init_service(build_app(deps)).await;

        let res =
            actix_test::call_service(&app, actix_test::TestRequest::get().uri(uri).to_request())
                .await;

        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body: serde_json::Value = actix_test::read_body_json(res).await;
        assert_eq!(body, json!({"error": message}));
    }

    #[rstest]
    #[actix_web::test]
    async fn shell_is_served_at_root(deps: AppDependencies) {
        let app = actix_test::init_service(build_app(deps)).await;

        let res = actix_test::call_service(&app, actix_test::TestRequest::get().uri("/").to_request()).await;

        assert_eq!(res.status(), StatusCode::OK);
        let body = actix_test::read_body(res).await;
        assert!(
            std::str::from_utf8(&body)
                .expect("utf8")
                .contains(r#"data-theme="dark""#)
        );
    }

    #[rstest]
    #[actix_web::test]
    async fn readiness_reflects_shared_state(deps: AppDependencies) {
        let health = deps.health_state.clone();
        let app = actix_test::init_service(build_app(deps)).await;

        let readiness = || actix_test::TestRequest::get().uri("/health/ready").to_request();
        assert_eq!(
            actix_test::call_service(&app, readiness()).await.status(),
            StatusCode::SERVICE_UNAVAILABLE
        );

        health.mark_ready();
        assert_eq!(actix_test::call_service(&app, readiness()).await.status(), StatusCode::OK);
    }
}
