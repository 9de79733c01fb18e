use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Router,
};
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::error;

use super::domain::{SessionCreatedView, SessionId};
use super::gateway::{CheckoutGateway, GatewayError};
use super::service::{CheckoutService, CheckoutServiceError};
use crate::eligibility::ProgramType;
use crate::intake::{program_from_form, IntakeError};

/// Confirmation callback payload posted by the success page.
#[derive(Debug, Clone, Deserialize)]
pub struct VerifyPaymentRequest {
    #[serde(rename = "sessionId")]
    pub session_id: String,
}

/// Router builder exposing the paid checkout flow and the free rental simulator.
pub fn checkout_router<G>(service: Arc<CheckoutService<G>>) -> Router
where
    G: CheckoutGateway + 'static,
{
    Router::new()
        .route("/api/crear-sesion-de-pago", post(create_session_handler::<G>))
        .route(
            "/api/verificar-pago-y-obtener-resultado",
            post(verify_payment_handler::<G>),
        )
        .route("/api/bono-alquiler-joven", post(rental_handler::<G>))
        .with_state(service)
}

pub(crate) async fn create_session_handler<G>(
    State(service): State<Arc<CheckoutService<G>>>,
    axum::Json(form): axum::Json<Value>,
) -> Response
where
    G: CheckoutGateway + 'static,
{
    let result = program_from_form(&form)
        .map_err(CheckoutServiceError::from)
        .and_then(|program| service.create_session(program, &form));

    match result {
        Ok(session) => {
            let view = SessionCreatedView::from(&session);
            (StatusCode::OK, axum::Json(view)).into_response()
        }
        Err(err) => error_response(err, "Error al crear la sesión de pago."),
    }
}

pub(crate) async fn verify_payment_handler<G>(
    State(service): State<Arc<CheckoutService<G>>>,
    axum::Json(request): axum::Json<VerifyPaymentRequest>,
) -> Response
where
    G: CheckoutGateway + 'static,
{
    let session_id = SessionId(request.session_id);
    match service.confirm_and_evaluate(&session_id) {
        Ok(verdict) => (StatusCode::OK, axum::Json(verdict)).into_response(),
        Err(err) => error_response(err, "Error al verificar el pago."),
    }
}

pub(crate) async fn rental_handler<G>(
    State(service): State<Arc<CheckoutService<G>>>,
    axum::Json(form): axum::Json<Value>,
) -> Response
where
    G: CheckoutGateway + 'static,
{
    match service.evaluate_free(ProgramType::RentalSubsidy, &form) {
        Ok(verdict) => (StatusCode::OK, axum::Json(verdict)).into_response(),
        Err(err) => error_response(err, "Error al calcular el resultado."),
    }
}

fn status_for(err: &CheckoutServiceError) -> StatusCode {
    match err {
        CheckoutServiceError::Intake(IntakeError::Program(_))
        | CheckoutServiceError::FreeProgram(_)
        | CheckoutServiceError::PaymentRequired(_)
        | CheckoutServiceError::PaymentIncomplete => StatusCode::BAD_REQUEST,
        CheckoutServiceError::Intake(_) => StatusCode::UNPROCESSABLE_ENTITY,
        CheckoutServiceError::Gateway(GatewayError::NotFound) => StatusCode::NOT_FOUND,
        CheckoutServiceError::Gateway(GatewayError::Unavailable(_))
        | CheckoutServiceError::CorruptSnapshot(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Client errors echo the cause; server errors log it and return a generic message.
fn error_response(err: CheckoutServiceError, server_message: &str) -> Response {
    let status = status_for(&err);
    let message = if status.is_server_error() {
        error!(error = %err, "checkout request failed");
        server_message.to_string()
    } else {
        err.to_string()
    };

    (status, axum::Json(json!({ "error": message }))).into_response()
}
