use serde::{Deserialize, Serialize};

/// Household snapshot evaluated by the minimum-income program.
///
/// Money fields are euros exactly as submitted; they are never rounded before a comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HouseholdProfile {
    pub age: u32,
    pub years_of_residence: u32,
    pub adults: u32,
    pub minors: u32,
    pub single_parent: bool,
    pub monthly_income: f64,
    pub net_worth: f64,
}

/// Applicant snapshot evaluated by the youth rental bonus.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RentalProfile {
    pub age: u32,
    pub annual_income: f64,
    pub monthly_rent: f64,
    pub owns_other_property: bool,
}

/// Applicant snapshot evaluated by the over-52 unemployment subsidy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subsidy52Profile {
    pub age: u32,
    pub monthly_income: f64,
    pub retirement_contribution_years: u32,
    pub unemployment_contribution_years: u32,
    pub unemployment_benefit_exhausted: bool,
}
