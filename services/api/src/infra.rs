use benefit_check::checkout::{
    CheckoutGateway, CheckoutRequest, CheckoutSession, GatewayError, PaymentStatus, SessionId,
};
use chrono::{DateTime, Duration, Utc};
use metrics_exporter_prometheus::PrometheusHandle;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::debug;

const SANDBOX_CHECKOUT_URL: &str = "https://checkout.sandbox.local/pay";

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Sandbox payment provider keeping sessions in memory.
///
/// With `auto_settle` every new session is reported as paid so the success page can
/// complete the flow without a real provider. Sessions older than `session_ttl` are
/// forgotten, as a hosted provider expires them.
#[derive(Clone)]
pub(crate) struct InMemoryCheckoutGateway {
    sessions: Arc<Mutex<HashMap<SessionId, CheckoutSession>>>,
    sequence: Arc<AtomicU64>,
    auto_settle: bool,
    session_ttl: Duration,
}

impl InMemoryCheckoutGateway {
    pub(crate) fn new(auto_settle: bool, session_ttl: Duration) -> Self {
        Self {
            sessions: Arc::default(),
            sequence: Arc::default(),
            auto_settle,
            session_ttl,
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, HashMap<SessionId, CheckoutSession>>, GatewayError> {
        self.sessions
            .lock()
            .map_err(|_| GatewayError::Unavailable("session store poisoned".to_string()))
    }

    fn is_expired(&self, session: &CheckoutSession, now: DateTime<Utc>) -> bool {
        session.created_at + self.session_ttl <= now
    }

    /// Forget sessions that expired by `now`.
    pub(crate) fn purge_expired(&self, now: DateTime<Utc>) -> Result<usize, GatewayError> {
        let mut guard = self.lock()?;
        let before = guard.len();
        guard.retain(|_, session| !self.is_expired(session, now));
        let purged = before - guard.len();
        if purged > 0 {
            debug!(purged, "expired sandbox checkout sessions purged");
        }
        Ok(purged)
    }
}

impl CheckoutGateway for InMemoryCheckoutGateway {
    fn create_session(&self, request: CheckoutRequest) -> Result<CheckoutSession, GatewayError> {
        let now = Utc::now();
        self.purge_expired(now)?;

        let next = self.sequence.fetch_add(1, Ordering::Relaxed) + 1;
        let id = SessionId(format!("cs_{next:06}"));
        let payment_status = if self.auto_settle {
            PaymentStatus::Paid
        } else {
            PaymentStatus::Unpaid
        };

        let session = CheckoutSession {
            id: id.clone(),
            payment_status,
            url: format!("{SANDBOX_CHECKOUT_URL}/{id}"),
            metadata: request.metadata,
            created_at: now,
        };

        debug!(
            session_id = %id,
            amount_cents = request.line_item.unit_amount_cents,
            currency = %request.line_item.currency,
            success_url = %request.success_url,
            "sandbox checkout session opened"
        );

        self.lock()?.insert(id, session.clone());
        Ok(session)
    }

    fn retrieve_session(&self, id: &SessionId) -> Result<CheckoutSession, GatewayError> {
        let guard = self.lock()?;
        guard
            .get(id)
            .filter(|session| !self.is_expired(session, Utc::now()))
            .cloned()
            .ok_or(GatewayError::NotFound)
    }
}
