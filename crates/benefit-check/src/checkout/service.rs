use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use chrono::{DateTime, Utc};
use serde_json::Value;
use tracing::{debug, info, warn};

use super::domain::{
    CheckoutRequest, CheckoutSession, LineItem, PaymentStatus, SessionId, SessionMetadata,
};
use super::gateway::{CheckoutGateway, GatewayError};
use crate::config::CheckoutConfig;
use crate::eligibility::{evaluate, EligibilityVerdict, ProgramType};
use crate::intake::{profile_from_form, IntakeError};

const PRODUCT_DESCRIPTION: &str = "Cálculo de cuantía, requisitos y documentos necesarios.";

/// Verdict kept until its session can no longer be confirmed.
#[derive(Debug, Clone)]
struct CachedVerdict {
    verdict: EligibilityVerdict,
    expires_at: DateTime<Utc>,
}

/// Service gating the paid simulators behind a confirmed checkout session.
pub struct CheckoutService<G> {
    gateway: Arc<G>,
    config: CheckoutConfig,
    verdicts: Mutex<HashMap<SessionId, CachedVerdict>>,
}

impl<G> CheckoutService<G>
where
    G: CheckoutGateway + 'static,
{
    pub fn new(gateway: Arc<G>, config: CheckoutConfig) -> Self {
        Self {
            gateway,
            config,
            verdicts: Mutex::new(HashMap::new()),
        }
    }

    /// Open a checkout session carrying a snapshot of the validated form.
    pub fn create_session(
        &self,
        program: ProgramType,
        form: &Value,
    ) -> Result<CheckoutSession, CheckoutServiceError> {
        if !program.requires_payment() {
            return Err(CheckoutServiceError::FreeProgram(program));
        }

        // Forms must parse before any charge exists.
        profile_from_form(program, form)?;

        let domain = self.config.public_domain.trim_end_matches('/');
        let request = CheckoutRequest {
            line_item: LineItem {
                name: program.product_name().to_string(),
                description: PRODUCT_DESCRIPTION.to_string(),
                unit_amount_cents: self.config.price_cents,
                currency: self.config.currency.clone(),
                quantity: 1,
            },
            metadata: SessionMetadata {
                program,
                form_data: form.to_string(),
            },
            success_url: format!("{domain}/pago-exitoso.html?session_id={{CHECKOUT_SESSION_ID}}"),
            cancel_url: format!("{domain}/pago-cancelado.html"),
        };

        let session = self.gateway.create_session(request)?;
        info!(session_id = %session.id, %program, "checkout session created");
        Ok(session)
    }

    /// Evaluate the stored snapshot of a paid session.
    ///
    /// The rules engine runs once per session; later confirmations within the session TTL
    /// return the cached verdict.
    pub fn confirm_and_evaluate(
        &self,
        session_id: &SessionId,
    ) -> Result<EligibilityVerdict, CheckoutServiceError> {
        let session = self.gateway.retrieve_session(session_id)?;

        if session.payment_status != PaymentStatus::Paid {
            warn!(
                %session_id,
                status = session.payment_status.label(),
                "payment confirmation requested for unpaid session"
            );
            return Err(CheckoutServiceError::PaymentIncomplete);
        }

        let now = Utc::now();
        let mut verdicts = self.verdicts.lock().unwrap_or_else(PoisonError::into_inner);
        evict_expired(&mut verdicts, now);
        if let Some(cached) = verdicts.get(&session.id) {
            return Ok(cached.verdict.clone());
        }

        let form: Value = serde_json::from_str(&session.metadata.form_data)
            .map_err(|err| CheckoutServiceError::CorruptSnapshot(err.into()))?;
        let profile = profile_from_form(session.metadata.program, &form)
            .map_err(CheckoutServiceError::CorruptSnapshot)?;

        let verdict = evaluate(&profile);
        let expires_at = session.created_at + self.config.session_ttl;
        if expires_at > now {
            verdicts.insert(
                session.id,
                CachedVerdict {
                    verdict: verdict.clone(),
                    expires_at,
                },
            );
        }
        Ok(verdict)
    }

    /// Drop cached verdicts whose sessions have expired by `now`.
    pub fn evict_expired_verdicts(&self, now: DateTime<Utc>) -> usize {
        let mut verdicts = self.verdicts.lock().unwrap_or_else(PoisonError::into_inner);
        evict_expired(&mut verdicts, now)
    }

    #[cfg(test)]
    pub(crate) fn cached_verdicts(&self) -> usize {
        self.verdicts
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Evaluate a free simulator directly, bypassing checkout.
    pub fn evaluate_free(
        &self,
        program: ProgramType,
        form: &Value,
    ) -> Result<EligibilityVerdict, CheckoutServiceError> {
        if program.requires_payment() {
            return Err(CheckoutServiceError::PaymentRequired(program));
        }

        let profile = profile_from_form(program, form)?;
        Ok(evaluate(&profile))
    }
}

fn evict_expired(verdicts: &mut HashMap<SessionId, CachedVerdict>, now: DateTime<Utc>) -> usize {
    let before = verdicts.len();
    verdicts.retain(|_, cached| cached.expires_at > now);
    let evicted = before - verdicts.len();
    if evicted > 0 {
        debug!(evicted, "expired checkout verdicts evicted");
    }
    evicted
}

/// Error raised by the checkout service.
#[derive(Debug, thiserror::Error)]
pub enum CheckoutServiceError {
    #[error(transparent)]
    Intake(#[from] IntakeError),
    #[error("program '{0}' is free and does not use checkout")]
    FreeProgram(ProgramType),
    #[error("program '{0}' requires a paid checkout session")]
    PaymentRequired(ProgramType),
    #[error("El pago no ha sido completado.")]
    PaymentIncomplete,
    #[error(transparent)]
    Gateway(#[from] GatewayError),
    #[error("stored form snapshot is unreadable: {0}")]
    CorruptSnapshot(IntakeError),
}
