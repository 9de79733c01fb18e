//! Bono Alquiler Joven: a flat rental bonus with no computed amount.

use super::money::Amount;
use super::profile::RentalProfile;
use super::verdict::EligibilityVerdict;

pub const MIN_AGE: u32 = 18;
pub const MAX_AGE: u32 = 35;
/// Three times the annual IPREM (8 400.00).
pub const ANNUAL_INCOME_CEILING: Amount = Amount::from_cents(2_520_000);
pub const MONTHLY_RENT_CEILING: Amount = Amount::from_cents(60_000);

const TITLE_ELIGIBLE: &str = "Puedes solicitar el Bono Alquiler Joven";
const TITLE_DENIED: &str = "No cumples los requisitos del Bono Alquiler Joven";

pub const DOCUMENTS: &[&str] = &[
    "DNI o NIE en vigor.",
    "Contrato de alquiler en el que figures como arrendatario.",
    "Certificado de empadronamiento en la vivienda alquilada.",
    "Justificante de ingresos (nóminas, vida laboral o declaración de la renta).",
    "Nota simple negativa del Registro de la Propiedad.",
];

pub(crate) fn evaluate(profile: &RentalProfile) -> EligibilityVerdict {
    if !(MIN_AGE..=MAX_AGE).contains(&profile.age) {
        return EligibilityVerdict::denied(
            TITLE_DENIED,
            format!(
                "Tienes {} años; el bono está dirigido a personas de entre {MIN_AGE} y {MAX_AGE} años.",
                profile.age
            ),
        );
    }

    if profile.annual_income > ANNUAL_INCOME_CEILING.as_f64() {
        return EligibilityVerdict::denied(
            TITLE_DENIED,
            format!(
                "Tus ingresos anuales ({:.2} €) superan el límite de {ANNUAL_INCOME_CEILING} € (3 veces el IPREM).",
                profile.annual_income
            ),
        );
    }

    if profile.monthly_rent > MONTHLY_RENT_CEILING.as_f64() {
        return EligibilityVerdict::denied(
            TITLE_DENIED,
            format!(
                "El alquiler mensual ({:.2} €) supera el máximo permitido de {MONTHLY_RENT_CEILING} €.",
                profile.monthly_rent
            ),
        );
    }

    if profile.owns_other_property {
        return EligibilityVerdict::denied(
            TITLE_DENIED,
            "No puedes ser propietario de otra vivienda en España.",
        );
    }

    EligibilityVerdict::granted(
        TITLE_ELIGIBLE,
        "Cumples los requisitos de edad, ingresos y alquiler, y no eres propietario de otra vivienda.",
        DOCUMENTS,
    )
}
