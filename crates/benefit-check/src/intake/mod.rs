//! Request intake: turns simulator form payloads into typed profiles.
//!
//! Forms keep the field names the published simulators post. Numeric fields may arrive as
//! JSON numbers or as the raw text of an input box; anything that does not parse is an
//! [`IntakeError`], never a verdict.

mod lenient;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::eligibility::{
    evaluate, EligibilityError, EligibilityVerdict, HouseholdProfile, ProgramProfile,
    ProgramType, RentalProfile, Subsidy52Profile,
};

/// Form key selecting the program; absent means the minimum-income simulator.
pub const PROGRAM_FIELD: &str = "programa";

/// Minimum-income simulator form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MinimumIncomeForm {
    #[serde(rename = "edad", deserialize_with = "lenient::whole_number")]
    pub age: u32,
    #[serde(rename = "residencia", deserialize_with = "lenient::whole_number")]
    pub years_of_residence: u32,
    #[serde(rename = "adultos", deserialize_with = "lenient::whole_number")]
    pub adults: u32,
    #[serde(rename = "menores", deserialize_with = "lenient::whole_number")]
    pub minors: u32,
    #[serde(rename = "monoparental", default, deserialize_with = "lenient::flag")]
    pub single_parent: bool,
    #[serde(rename = "ingresosHogar", deserialize_with = "lenient::amount")]
    pub monthly_income: f64,
    #[serde(rename = "patrimonioHogar", deserialize_with = "lenient::amount")]
    pub net_worth: f64,
}

/// Youth rental bonus simulator form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RentalForm {
    #[serde(rename = "edad", deserialize_with = "lenient::whole_number")]
    pub age: u32,
    #[serde(rename = "ingresosAnuales", deserialize_with = "lenient::amount")]
    pub annual_income: f64,
    #[serde(rename = "alquilerMensual", deserialize_with = "lenient::amount")]
    pub monthly_rent: f64,
    #[serde(rename = "tienePropiedad", default, deserialize_with = "lenient::flag")]
    pub owns_other_property: bool,
}

/// Over-52 subsidy simulator form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subsidy52Form {
    #[serde(rename = "edad", deserialize_with = "lenient::whole_number")]
    pub age: u32,
    #[serde(rename = "ingresos", deserialize_with = "lenient::amount")]
    pub monthly_income: f64,
    #[serde(rename = "cotizacionJubilacion", deserialize_with = "lenient::whole_number")]
    pub retirement_contribution_years: u32,
    #[serde(rename = "cotizacionDesempleo", deserialize_with = "lenient::whole_number")]
    pub unemployment_contribution_years: u32,
    #[serde(rename = "paroAgotado", default, deserialize_with = "lenient::flag")]
    pub unemployment_benefit_exhausted: bool,
}

/// Validation failures for inbound form data.
#[derive(Debug, thiserror::Error)]
pub enum IntakeError {
    #[error(transparent)]
    Program(#[from] EligibilityError),
    #[error("form data must be a JSON object")]
    NotAnObject,
    #[error("invalid form data: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("invalid value for '{field}': {reason}")]
    InvalidField { field: &'static str, reason: String },
}

impl TryFrom<MinimumIncomeForm> for HouseholdProfile {
    type Error = IntakeError;

    fn try_from(form: MinimumIncomeForm) -> Result<Self, Self::Error> {
        if form.adults == 0 {
            return Err(IntakeError::InvalidField {
                field: "adultos",
                reason: "a household needs at least one adult".to_string(),
            });
        }

        Ok(HouseholdProfile {
            age: form.age,
            years_of_residence: form.years_of_residence,
            adults: form.adults,
            minors: form.minors,
            single_parent: form.single_parent,
            monthly_income: form.monthly_income,
            net_worth: form.net_worth,
        })
    }
}

impl From<RentalForm> for RentalProfile {
    fn from(form: RentalForm) -> Self {
        RentalProfile {
            age: form.age,
            annual_income: form.annual_income,
            monthly_rent: form.monthly_rent,
            owns_other_property: form.owns_other_property,
        }
    }
}

impl From<Subsidy52Form> for Subsidy52Profile {
    fn from(form: Subsidy52Form) -> Self {
        Subsidy52Profile {
            age: form.age,
            monthly_income: form.monthly_income,
            retirement_contribution_years: form.retirement_contribution_years,
            unemployment_contribution_years: form.unemployment_contribution_years,
            unemployment_benefit_exhausted: form.unemployment_benefit_exhausted,
        }
    }
}

/// Read the program selector from a form, defaulting to the minimum-income simulator.
pub fn program_from_form(form: &Value) -> Result<ProgramType, IntakeError> {
    let object = form.as_object().ok_or(IntakeError::NotAnObject)?;
    match object.get(PROGRAM_FIELD) {
        None | Some(Value::Null) => Ok(ProgramType::MinimumIncome),
        Some(Value::String(name)) => Ok(name.parse()?),
        Some(other) => Err(IntakeError::InvalidField {
            field: PROGRAM_FIELD,
            reason: format!("expected a program name, found {other}"),
        }),
    }
}

/// Parse a form into the profile the given program evaluates.
pub fn profile_from_form(program: ProgramType, form: &Value) -> Result<ProgramProfile, IntakeError> {
    if !form.is_object() {
        return Err(IntakeError::NotAnObject);
    }

    let profile = match program {
        ProgramType::MinimumIncome => {
            let form = MinimumIncomeForm::deserialize(form)?;
            ProgramProfile::MinimumIncome(form.try_into()?)
        }
        ProgramType::RentalSubsidy => {
            ProgramProfile::RentalSubsidy(RentalForm::deserialize(form)?.into())
        }
        ProgramType::Over52Subsidy => {
            ProgramProfile::Over52Subsidy(Subsidy52Form::deserialize(form)?.into())
        }
    };
    Ok(profile)
}

/// Boundary entry point: resolve the program by name, parse the form, evaluate.
pub fn evaluate_form(program: &str, form: &Value) -> Result<EligibilityVerdict, IntakeError> {
    let program: ProgramType = program.parse()?;
    let profile = profile_from_form(program, form)?;
    Ok(evaluate(&profile))
}
