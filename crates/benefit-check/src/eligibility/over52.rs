//! Subsidio para mayores de 52 años.

use super::money::Amount;
use super::profile::Subsidy52Profile;
use super::verdict::EligibilityVerdict;

pub const MIN_AGE: u32 = 52;
/// 75% of the minimum wage (SMI 1 134.00).
pub const MONTHLY_INCOME_CEILING: Amount = Amount::from_cents(85_050);
pub const MIN_RETIREMENT_YEARS: u32 = 15;
pub const MIN_UNEMPLOYMENT_YEARS: u32 = 6;
/// 80% of the monthly IPREM (600.00); not derived from the applicant.
pub const MONTHLY_ENTITLEMENT: Amount = Amount::from_cents(48_000);

const TITLE_ELIGIBLE: &str = "Cumples los requisitos del Subsidio para mayores de 52 años";
const TITLE_DENIED: &str = "No cumples los requisitos del Subsidio para mayores de 52 años";

pub const DOCUMENTS: &[&str] = &[
    "DNI o NIE en vigor.",
    "Certificado de empresa (si aplica).",
    "Declaración de rentas del SEPE.",
    "Justificante de ingresos del cónyuge u otros miembros (si aplica).",
    "Certificado de titularidad de la cuenta bancaria.",
];

pub(crate) fn evaluate(profile: &Subsidy52Profile) -> EligibilityVerdict {
    if profile.age < MIN_AGE {
        return EligibilityVerdict::denied(
            TITLE_DENIED,
            format!(
                "Tienes {} años; debes tener al menos {MIN_AGE} años.",
                profile.age
            ),
        );
    }

    if !profile.unemployment_benefit_exhausted {
        return EligibilityVerdict::denied(
            TITLE_DENIED,
            "Has indicado que no has agotado la prestación contributiva por desempleo; es requisito haberla agotado.",
        );
    }

    if profile.monthly_income > MONTHLY_INCOME_CEILING.as_f64() {
        return EligibilityVerdict::denied(
            TITLE_DENIED,
            format!(
                "Tus ingresos mensuales ({:.2} €) superan el límite de {MONTHLY_INCOME_CEILING} € (75% del SMI).",
                profile.monthly_income
            ),
        );
    }

    if profile.retirement_contribution_years < MIN_RETIREMENT_YEARS {
        return EligibilityVerdict::denied(
            TITLE_DENIED,
            format!(
                "Has cotizado {} años para la jubilación; se exigen al menos {MIN_RETIREMENT_YEARS}.",
                profile.retirement_contribution_years
            ),
        );
    }

    if profile.unemployment_contribution_years < MIN_UNEMPLOYMENT_YEARS {
        return EligibilityVerdict::denied(
            TITLE_DENIED,
            format!(
                "Has cotizado {} años por desempleo; se exigen al menos {MIN_UNEMPLOYMENT_YEARS}.",
                profile.unemployment_contribution_years
            ),
        );
    }

    EligibilityVerdict::granted(
        TITLE_ELIGIBLE,
        "Tienes la edad mínima, has agotado el paro, tus ingresos están por debajo del límite y cumples los periodos de cotización.",
        DOCUMENTS,
    )
    .with_amount_text(format!(
        "{MONTHLY_ENTITLEMENT} € al mes (80% del IPREM)"
    ))
}
