//! Deterministic eligibility rules for the benefit simulators.
//!
//! Every evaluator is a pure function of its profile and the static benefit tables, so the
//! same snapshot always produces the same verdict. Ineligibility is reported as a verdict,
//! never as an error; the only error is an unrecognised program name at the boundary.

mod household;
mod minimum_income;
mod money;
mod over52;
mod profile;
mod rental;
mod tables;
mod verdict;

#[cfg(test)]
mod tests;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

pub use household::{classify, HouseholdKeys, OVERFLOW_MEMBERS};
pub use money::Amount;
pub use profile::{HouseholdProfile, RentalProfile, Subsidy52Profile};
pub use tables::{benefit_table, BenefitTable, HouseholdThresholds};
pub use verdict::EligibilityVerdict;

/// Program thresholds and checklists, exposed for frontends and tests.
pub mod thresholds {
    pub mod minimum_income {
        pub use crate::eligibility::minimum_income::{
            DOCUMENTS, MIN_AGE_WITHOUT_DEPENDANTS, MIN_ENTITLEMENT, MIN_RESIDENCE_YEARS,
        };
    }
    pub mod rental {
        pub use crate::eligibility::rental::{
            ANNUAL_INCOME_CEILING, DOCUMENTS, MAX_AGE, MIN_AGE, MONTHLY_RENT_CEILING,
        };
    }
    pub mod over52 {
        pub use crate::eligibility::over52::{
            DOCUMENTS, MIN_AGE, MIN_RETIREMENT_YEARS, MIN_UNEMPLOYMENT_YEARS,
            MONTHLY_ENTITLEMENT, MONTHLY_INCOME_CEILING,
        };
    }
}

/// Benefit programs offered by the simulators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProgramType {
    #[serde(rename = "imv")]
    MinimumIncome,
    #[serde(rename = "bono-alquiler-joven")]
    RentalSubsidy,
    #[serde(rename = "subsidio-52")]
    Over52Subsidy,
}

impl ProgramType {
    pub const ALL: [ProgramType; 3] = [
        ProgramType::MinimumIncome,
        ProgramType::RentalSubsidy,
        ProgramType::Over52Subsidy,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProgramType::MinimumIncome => "imv",
            ProgramType::RentalSubsidy => "bono-alquiler-joven",
            ProgramType::Over52Subsidy => "subsidio-52",
        }
    }

    /// Paid simulators sit behind the checkout gate; the rental bonus is free.
    pub fn requires_payment(&self) -> bool {
        match self {
            ProgramType::MinimumIncome | ProgramType::Over52Subsidy => true,
            ProgramType::RentalSubsidy => false,
        }
    }

    /// Product name shown on the checkout page.
    pub fn product_name(&self) -> &'static str {
        match self {
            ProgramType::MinimumIncome => "Diagnóstico Experto IMV",
            ProgramType::RentalSubsidy => "Diagnóstico Bono Alquiler Joven",
            ProgramType::Over52Subsidy => "Diagnóstico Experto Subsidio +52",
        }
    }
}

impl fmt::Display for ProgramType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProgramType {
    type Err = EligibilityError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_ascii_lowercase();
        ProgramType::ALL
            .into_iter()
            .find(|program| program.as_str() == normalized)
            .ok_or_else(|| EligibilityError::InvalidProgram(value.to_string()))
    }
}

/// A profile tagged with the program it is evaluated against.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "program", content = "profile")]
pub enum ProgramProfile {
    #[serde(rename = "imv")]
    MinimumIncome(HouseholdProfile),
    #[serde(rename = "bono-alquiler-joven")]
    RentalSubsidy(RentalProfile),
    #[serde(rename = "subsidio-52")]
    Over52Subsidy(Subsidy52Profile),
}

impl ProgramProfile {
    pub fn program(&self) -> ProgramType {
        match self {
            ProgramProfile::MinimumIncome(_) => ProgramType::MinimumIncome,
            ProgramProfile::RentalSubsidy(_) => ProgramType::RentalSubsidy,
            ProgramProfile::Over52Subsidy(_) => ProgramType::Over52Subsidy,
        }
    }
}

/// Errors raised by the rules engine itself.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EligibilityError {
    #[error("unknown benefit program '{0}'")]
    InvalidProgram(String),
}

/// Run the program's ordered checks and return exactly one verdict.
pub fn evaluate(profile: &ProgramProfile) -> EligibilityVerdict {
    let verdict = match profile {
        ProgramProfile::MinimumIncome(applicant) => {
            minimum_income::evaluate(applicant, benefit_table())
        }
        ProgramProfile::RentalSubsidy(applicant) => rental::evaluate(applicant),
        ProgramProfile::Over52Subsidy(applicant) => over52::evaluate(applicant),
    };

    debug!(
        program = %profile.program(),
        eligible = verdict.eligible,
        "evaluated eligibility"
    );
    verdict
}
