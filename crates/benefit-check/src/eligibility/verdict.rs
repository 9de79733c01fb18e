use serde::{Deserialize, Serialize};

use super::money::Amount;

/// Complete eligibility decision returned to the simulator frontend.
///
/// Field names on the wire are the ones the published simulators already read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EligibilityVerdict {
    #[serde(rename = "elegible")]
    pub eligible: bool,
    #[serde(rename = "titulo", default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(rename = "motivo")]
    pub reason: String,
    #[serde(
        rename = "cuantiaEstimada",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub estimated_monthly_amount: Option<Amount>,
    #[serde(
        rename = "cuantia_texto",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub amount_text: Option<String>,
    #[serde(rename = "documentos")]
    pub documents: Vec<String>,
}

impl EligibilityVerdict {
    /// Ineligible outcome: no amount and no document checklist.
    pub(crate) fn denied(title: &str, reason: impl Into<String>) -> Self {
        Self {
            eligible: false,
            title: Some(title.to_string()),
            reason: reason.into(),
            estimated_monthly_amount: None,
            amount_text: None,
            documents: Vec::new(),
        }
    }

    pub(crate) fn granted(title: &str, reason: impl Into<String>, documents: &[&str]) -> Self {
        Self {
            eligible: true,
            title: Some(title.to_string()),
            reason: reason.into(),
            estimated_monthly_amount: None,
            amount_text: None,
            documents: documents.iter().map(|doc| doc.to_string()).collect(),
        }
    }

    pub(crate) fn with_monthly_amount(mut self, amount: Amount) -> Self {
        self.estimated_monthly_amount = Some(amount);
        self
    }

    pub(crate) fn with_amount_text(mut self, text: impl Into<String>) -> Self {
        self.amount_text = Some(text.into());
        self
    }

    pub fn summary(&self) -> String {
        match (&self.title, self.eligible) {
            (Some(title), _) => format!("{title}: {}", self.reason),
            (None, true) => format!("eligible: {}", self.reason),
            (None, false) => format!("not eligible: {}", self.reason),
        }
    }
}
