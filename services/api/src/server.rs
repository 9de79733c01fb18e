use crate::cli::ServeArgs;
use crate::infra::{AppState, InMemoryCheckoutGateway};
use crate::routes::{cors_layer, with_checkout_routes};
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use benefit_check::checkout::CheckoutService;
use benefit_check::config::AppConfig;
use benefit_check::error::AppError;
use benefit_check::telemetry;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::{info, warn};

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    if config.checkout.auto_settle {
        warn!("sandbox checkout auto-settle is enabled; paid verdicts are served without payment");
    }
    let gateway = Arc::new(InMemoryCheckoutGateway::new(
        config.checkout.auto_settle,
        config.checkout.session_ttl,
    ));
    let checkout_service = Arc::new(CheckoutService::new(gateway, config.checkout.clone()));

    let app = with_checkout_routes(checkout_service)
        .layer(Extension(app_state))
        .layer(cors_layer())
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        auto_settle = config.checkout.auto_settle,
        "benefit simulator ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
