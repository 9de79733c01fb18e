use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use axum::response::Response;
use chrono::{Duration, Utc};
use serde_json::{json, Value};

use crate::checkout::domain::{CheckoutRequest, CheckoutSession, PaymentStatus, SessionId};
use crate::checkout::gateway::{CheckoutGateway, GatewayError};
use crate::checkout::{checkout_router, CheckoutService};
use crate::config::CheckoutConfig;

#[derive(Default, Clone)]
pub(super) struct MemoryGateway {
    sessions: Arc<Mutex<HashMap<SessionId, CheckoutSession>>>,
    requests: Arc<Mutex<Vec<CheckoutRequest>>>,
    retrievals: Arc<AtomicU64>,
}

impl MemoryGateway {
    pub(super) fn settle(&self, id: &SessionId) {
        let mut guard = self.sessions.lock().expect("gateway mutex poisoned");
        if let Some(session) = guard.get_mut(id) {
            session.payment_status = PaymentStatus::Paid;
        }
    }

    pub(super) fn tamper(&self, id: &SessionId, form_data: &str) {
        let mut guard = self.sessions.lock().expect("gateway mutex poisoned");
        if let Some(session) = guard.get_mut(id) {
            session.metadata.form_data = form_data.to_string();
        }
    }

    pub(super) fn requests(&self) -> Vec<CheckoutRequest> {
        self.requests.lock().expect("gateway mutex poisoned").clone()
    }

    pub(super) fn retrievals(&self) -> u64 {
        self.retrievals.load(Ordering::Relaxed)
    }
}

impl CheckoutGateway for MemoryGateway {
    fn create_session(&self, request: CheckoutRequest) -> Result<CheckoutSession, GatewayError> {
        let mut guard = self.sessions.lock().expect("gateway mutex poisoned");
        let id = SessionId(format!("cs_test_{:04}", guard.len() + 1));
        let session = CheckoutSession {
            id: id.clone(),
            payment_status: PaymentStatus::Unpaid,
            url: format!("https://checkout.test/pay/{}", id.0),
            metadata: request.metadata.clone(),
            created_at: Utc::now(),
        };
        guard.insert(id, session.clone());
        self.requests
            .lock()
            .expect("gateway mutex poisoned")
            .push(request);
        Ok(session)
    }

    fn retrieve_session(&self, id: &SessionId) -> Result<CheckoutSession, GatewayError> {
        self.retrievals.fetch_add(1, Ordering::Relaxed);
        let guard = self.sessions.lock().expect("gateway mutex poisoned");
        guard.get(id).cloned().ok_or(GatewayError::NotFound)
    }
}

pub(super) struct UnavailableGateway;

impl CheckoutGateway for UnavailableGateway {
    fn create_session(&self, _request: CheckoutRequest) -> Result<CheckoutSession, GatewayError> {
        Err(GatewayError::Unavailable("provider timeout".to_string()))
    }

    fn retrieve_session(&self, _id: &SessionId) -> Result<CheckoutSession, GatewayError> {
        Err(GatewayError::Unavailable("provider timeout".to_string()))
    }
}

pub(super) fn checkout_config() -> CheckoutConfig {
    CheckoutConfig {
        public_domain: "https://simulador.example/".to_string(),
        price_cents: 1000,
        currency: "eur".to_string(),
        auto_settle: false,
        session_ttl: Duration::hours(24),
    }
}

pub(super) fn build_service() -> (CheckoutService<MemoryGateway>, MemoryGateway) {
    let gateway = MemoryGateway::default();
    let service = CheckoutService::new(Arc::new(gateway.clone()), checkout_config());
    (service, gateway)
}

pub(super) fn router_with_service(service: CheckoutService<MemoryGateway>) -> axum::Router {
    checkout_router(Arc::new(service))
}

pub(super) fn imv_form() -> Value {
    json!({
        "edad": "30",
        "residencia": "2",
        "adultos": "1",
        "menores": "0",
        "monoparental": "no",
        "ingresosHogar": "400",
        "patrimonioHogar": "5000"
    })
}

pub(super) fn over52_form() -> Value {
    json!({
        "programa": "subsidio-52",
        "edad": "53",
        "paroAgotado": "si",
        "ingresos": "800",
        "cotizacionJubilacion": "16",
        "cotizacionDesempleo": "7"
    })
}

pub(super) fn rental_form() -> Value {
    json!({
        "edad": "40",
        "ingresosAnuales": "15000",
        "alquilerMensual": "500",
        "tienePropiedad": "no"
    })
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 16 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

pub(super) fn json_request(uri: &str, body: &Value) -> axum::http::Request<axum::body::Body> {
    axum::http::Request::post(uri)
        .header(axum::http::header::CONTENT_TYPE, "application/json")
        .body(axum::body::Body::from(
            serde_json::to_vec(body).expect("serialize body"),
        ))
        .expect("request builds")
}
