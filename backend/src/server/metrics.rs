//! Optional Prometheus middleware.
//!
//! `App::wrap` needs one concrete middleware type whether or not metrics
//! initialised, so both cases are boxed behind the same service type.

use std::sync::Arc;

use actix_service::{
    Service, ServiceExt as _, Transform,
    boxed::{self, BoxService},
};
use actix_web::body::{BoxBody, MessageBody};
use actix_web::dev::{ServiceRequest, ServiceResponse};
use actix_web::middleware::Compat;
use actix_web_prom::PrometheusMetrics;
use futures_util::future::LocalBoxFuture;

type BoxedService = BoxService<ServiceRequest, ServiceResponse<BoxBody>, actix_web::Error>;

/// Prometheus middleware when configured, a pass-through otherwise.
#[derive(Clone, Default)]
pub(crate) struct MetricsLayer {
    prometheus: Option<Arc<PrometheusMetrics>>,
}

impl MetricsLayer {
    #[must_use]
    pub(crate) fn from_option(prometheus: Option<PrometheusMetrics>) -> Self {
        Self {
            prometheus: prometheus.map(Arc::new),
        }
    }
}

impl<S, B> Transform<S, ServiceRequest> for MetricsLayer
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error> + 'static,
    B: MessageBody + 'static,
{
    type Response = ServiceResponse<BoxBody>;
    type Error = actix_web::Error;
    type InitError = ();
    type Transform = BoxedService;
    type Future = LocalBoxFuture<'static, Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        let Some(prometheus) = self.prometheus.clone() else {
            let passthrough = service.map(|res: ServiceResponse<B>| res.map_into_boxed_body());
            return Box::pin(async move { Ok(boxed::service(passthrough)) });
        };
        let wrapped = Compat::new((*prometheus).clone()).new_transform(service);
        Box::pin(async move { Ok(boxed::service(wrapped.await?)) })
    }
}

#[cfg(test)]
mod tests {
    use actix_web::http::StatusCode;
    use actix_web::{App, HttpResponse, test as actix_test, web};
    use actix_web_prom::PrometheusMetricsBuilder;

    use super::*;

    async fn ok() -> HttpResponse {
        HttpResponse::Ok().finish()
    }

    async fn status_of(layer: MetricsLayer, uri: &str) -> StatusCode {
        let app = actix_test::init_service(App::new().wrap(layer).route("/ping", web::get().to(ok))).await;
        actix_test::call_service(&app, actix_test::TestRequest::get().uri(uri).to_request())
            .await
            .status()
    }

    #[actix_web::test]
    async fn disabled_layer_passes_requests_through() {
        let layer = MetricsLayer::from_option(None);

        assert_eq!(status_of(layer.clone(), "/ping").await, StatusCode::OK);
        assert_eq!(status_of(layer, "/metrics").await, StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn enabled_layer_serves_metrics_endpoint() {
        let prometheus = PrometheusMetricsBuilder::new("coursehub_test")
            .endpoint("/metrics")
            .build()
            .expect("metrics should build for tests");
        let layer = MetricsLayer::from_option(Some(prometheus));

        assert_eq!(status_of(layer.clone(), "/ping").await, StatusCode::OK);
        assert_eq!(status_of(layer, "/metrics").await, StatusCode::OK);
    }
}
