use crate::eligibility::{Amount, HouseholdProfile, RentalProfile, Subsidy52Profile};

pub(super) fn euros(value: f64) -> Amount {
    Amount::from_decimal(value)
}

/// Single adult, two years of residence, well inside every limit.
pub(super) fn household() -> HouseholdProfile {
    HouseholdProfile {
        age: 30,
        years_of_residence: 2,
        adults: 1,
        minors: 0,
        single_parent: false,
        monthly_income: 400.0,
        net_worth: 5000.0,
    }
}

pub(super) fn renter() -> RentalProfile {
    RentalProfile {
        age: 27,
        annual_income: 18_000.0,
        monthly_rent: 550.0,
        owns_other_property: false,
    }
}

pub(super) fn over52_applicant() -> Subsidy52Profile {
    Subsidy52Profile {
        age: 53,
        monthly_income: 800.0,
        retirement_contribution_years: 16,
        unemployment_contribution_years: 7,
        unemployment_benefit_exhausted: true,
    }
}
