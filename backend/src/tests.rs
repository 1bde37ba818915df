//! Tests for the application bootstrap, covering metrics initialisation and
//! readiness signalling.

use super::create_server;
use super::server::ServerConfig;
#[cfg(feature = "metrics")]
use super::{PrometheusMetricsBuilder, initialize_metrics};
use actix_web::web;
use coursehub::domain::ColorScheme;
use coursehub::inbound::http::health::HealthState;
use rstest::{fixture, rstest};
use std::net::SocketAddr;

#[fixture]
fn health_state() -> web::Data<HealthState> {
    web::Data::new(HealthState::new())
}

#[fixture]
fn bind_address() -> SocketAddr {
    SocketAddr::from(([127, 0, 0, 1], 0))
}

#[cfg(feature = "metrics")]
#[test]
fn initialize_metrics_returns_none_on_error() {
    let metrics = initialize_metrics(|| -> Result<_, &str> { Err("boom") });
    assert!(metrics.is_none(), "expected metrics to be absent on error");
}

#[cfg(feature = "metrics")]
#[test]
fn initialize_metrics_returns_metrics_on_success() {
    let metrics = initialize_metrics(|| {
        PrometheusMetricsBuilder::new("test")
            .endpoint("/metrics")
            .build()
    });

    assert!(
        metrics.is_some(),
        "expected metrics to be present on success"
    );
}

#[rstest]
#[actix_rt::test]
async fn create_server_marks_ready(health_state: web::Data<HealthState>, bind_address: SocketAddr) {
    assert!(!health_state.is_ready(), "state should start unready");

    let _server = create_server(
        health_state.clone(),
        ServerConfig::new(bind_address).with_color_scheme(ColorScheme::Dark),
    )
    .expect("server should build against fixtures");

    assert!(
        health_state.is_ready(),
        "server creation should mark readiness"
    );
}

#[rstest]
#[actix_rt::test]
async fn create_server_reports_bind_failure(health_state: web::Data<HealthState>) {
    let taken = std::net::TcpListener::bind("127.0.0.1:0").expect("ephemeral port");
    let addr = taken.local_addr().expect("local addr");

    let result = create_server(health_state.clone(), ServerConfig::new(addr));

    assert!(result.is_err(), "binding an occupied port should fail");
    assert!(!health_state.is_ready());
}
