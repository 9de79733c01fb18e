use super::household::classify;
use super::money::Amount;
use super::profile::HouseholdProfile;
use super::tables::BenefitTable;
use super::verdict::EligibilityVerdict;

pub const MIN_RESIDENCE_YEARS: u32 = 1;
pub const MIN_AGE_WITHOUT_DEPENDANTS: u32 = 23;
/// Smallest monthly payment the program will issue.
pub const MIN_ENTITLEMENT: Amount = Amount::from_cents(1000);

const TITLE_ELIGIBLE: &str = "Cumples los requisitos del Ingreso Mínimo Vital";
const TITLE_DENIED: &str = "No cumples los requisitos del Ingreso Mínimo Vital";

pub const DOCUMENTS: &[&str] = &[
    "DNI o NIE de todas las personas de la unidad de convivencia.",
    "Certificado de empadronamiento colectivo e histórico.",
    "Libro de familia o certificado de nacimiento.",
    "Declaración de la Renta (IRPF) del año anterior.",
    "Certificado de titularidad de la cuenta bancaria.",
    "Sentencia de divorcio o convenio regulador (si aplica).",
];

pub(crate) fn evaluate(profile: &HouseholdProfile, table: &BenefitTable) -> EligibilityVerdict {
    if profile.years_of_residence < MIN_RESIDENCE_YEARS {
        return EligibilityVerdict::denied(
            TITLE_DENIED,
            "No cumples el requisito de residencia (mínimo 1 año de residencia legal en España).",
        );
    }

    if profile.age < MIN_AGE_WITHOUT_DEPENDANTS && profile.minors == 0 {
        return EligibilityVerdict::denied(
            TITLE_DENIED,
            "Debes ser mayor de 23 años (o mayor de 18 con menores a tu cargo).",
        );
    }

    let keys = classify(profile.adults, profile.minors, profile.single_parent);
    let thresholds = table.resolve(&keys, profile.single_parent);
    let income = profile.monthly_income;
    let net_worth = profile.net_worth;
    let guaranteed = thresholds.guaranteed_income;

    if net_worth >= thresholds.net_worth_limit.as_f64() {
        return EligibilityVerdict::denied(
            TITLE_DENIED,
            format!(
                "El patrimonio de tu hogar ({net_worth:.2} €) supera el límite para tu tipo de hogar ({} €).",
                thresholds.net_worth_limit
            ),
        );
    }

    if income >= guaranteed.as_f64() {
        return EligibilityVerdict::denied(
            TITLE_DENIED,
            format!(
                "Los ingresos mensuales de tu hogar ({income:.2} €) superan la Renta Garantizada para tu tipo de hogar ({guaranteed} €)."
            ),
        );
    }

    // guaranteed - income < MIN_ENTITLEMENT, with the right-hand side exact in cents.
    let highest_qualifying_income = guaranteed - MIN_ENTITLEMENT;
    if income > highest_qualifying_income.as_f64() {
        return EligibilityVerdict::denied(
            TITLE_DENIED,
            format!(
                "La diferencia entre tus ingresos ({income:.2} €) y la Renta Garantizada ({guaranteed} €) es menor de 10€, que es el mínimo a percibir."
            ),
        );
    }

    let entitlement = Amount::from_decimal(guaranteed.as_f64() - income);
    EligibilityVerdict::granted(
        TITLE_ELIGIBLE,
        format!(
            "Tus ingresos ({income:.2} €) son inferiores a la Renta Garantizada ({guaranteed} €) y tu patrimonio está dentro del límite."
        ),
        DOCUMENTS,
    )
    .with_monthly_amount(entitlement)
    .with_amount_text(format!("{entitlement} € al mes (estimación)"))
}
