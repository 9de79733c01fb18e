//! Payment gate for the paid simulators.
//!
//! A checkout session records the program and a snapshot of the submitted form. Once the
//! provider reports the session as paid, that snapshot is evaluated exactly once and the
//! verdict returned to the browser.

pub mod domain;
pub mod gateway;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{
    CheckoutRequest, CheckoutSession, LineItem, PaymentStatus, SessionCreatedView, SessionId,
    SessionMetadata,
};
pub use gateway::{CheckoutGateway, GatewayError};
pub use router::{checkout_router, VerifyPaymentRequest};
pub use service::{CheckoutService, CheckoutServiceError};
