use crate::cli::ServeArgs;
use crate::infra::{AppState, InMemoryResponseRepository, InMemorySessionStore};
use crate::routes::with_survey_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::info;

use pss_survey::config::AppConfig;
use pss_survey::error::AppError;
use pss_survey::survey::{AdminAccess, AdminSessionService, SurveyService};
use pss_survey::telemetry;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    if config.admin.access_code.is_none() {
        info!("ADMIN_ACCESS_CODE is not set; admin login will be rejected until it is configured");
    }

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let repository = Arc::new(InMemoryResponseRepository::default());
    let survey_service = Arc::new(SurveyService::new(repository));

    let session_store = Arc::new(InMemorySessionStore::default());
    let admin_sessions = Arc::new(AdminSessionService::new(
        AdminAccess::from_config(&config.admin),
        session_store,
    ));

    let app = with_survey_routes(survey_service, admin_sessions)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "survey service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
