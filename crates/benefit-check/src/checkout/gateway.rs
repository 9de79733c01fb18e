use super::domain::{CheckoutRequest, CheckoutSession, SessionId};

/// Payment provider abstraction so the service can be exercised without network access.
pub trait CheckoutGateway: Send + Sync {
    fn create_session(&self, request: CheckoutRequest) -> Result<CheckoutSession, GatewayError>;
    fn retrieve_session(&self, id: &SessionId) -> Result<CheckoutSession, GatewayError>;
}

/// Error enumeration for provider failures.
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    #[error("checkout session not found")]
    NotFound,
    #[error("payment provider unavailable: {0}")]
    Unavailable(String),
}
