use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::eligibility::ProgramType;

/// Identifier issued by the payment provider for a checkout session.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(pub String);

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    Unpaid,
    Paid,
}

impl PaymentStatus {
    pub fn label(&self) -> &'static str {
        match self {
            PaymentStatus::Unpaid => "unpaid",
            PaymentStatus::Paid => "paid",
        }
    }
}

/// Data stored alongside the session so the evaluation can be replayed after payment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionMetadata {
    pub program: ProgramType,
    /// Serialized form exactly as captured when the session was created.
    pub form_data: String,
}

/// Single priced item on the checkout page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    pub name: String,
    pub description: String,
    pub unit_amount_cents: u32,
    pub currency: String,
    pub quantity: u32,
}

/// Everything the provider needs to open a hosted checkout page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutRequest {
    pub line_item: LineItem,
    pub metadata: SessionMetadata,
    pub success_url: String,
    pub cancel_url: String,
}

/// Provider view of a checkout session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutSession {
    pub id: SessionId,
    pub payment_status: PaymentStatus,
    pub url: String,
    pub metadata: SessionMetadata,
    pub created_at: DateTime<Utc>,
}

/// Response body handed back to the browser after creating a session.
#[derive(Debug, Clone, Serialize)]
pub struct SessionCreatedView {
    pub id: SessionId,
    pub url: String,
}

impl From<&CheckoutSession> for SessionCreatedView {
    fn from(session: &CheckoutSession) -> Self {
        Self {
            id: session.id.clone(),
            url: session.url.clone(),
        }
    }
}
