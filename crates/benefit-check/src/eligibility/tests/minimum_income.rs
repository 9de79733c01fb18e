use super::common::*;
use crate::eligibility::thresholds::minimum_income::DOCUMENTS;
use crate::eligibility::{evaluate, Amount, ProgramProfile};

fn run(profile: crate::eligibility::HouseholdProfile) -> crate::eligibility::EligibilityVerdict {
    evaluate(&ProgramProfile::MinimumIncome(profile))
}

#[test]
fn single_adult_below_guaranteed_income_is_eligible() {
    let verdict = run(household());

    assert!(verdict.eligible);
    assert_eq!(verdict.estimated_monthly_amount, Some(euros(204.21)));
    assert_eq!(verdict.documents.len(), DOCUMENTS.len());
    assert!(verdict.reason.contains("400.00 €"));
    assert!(verdict.reason.contains("604.21 €"));
    assert_eq!(
        verdict.amount_text.as_deref(),
        Some("204.21 € al mes (estimación)")
    );
}

#[test]
fn residency_is_checked_first() {
    let mut profile = household();
    profile.years_of_residence = 0;
    profile.age = 19;
    profile.net_worth = 1_000_000.0;

    let verdict = run(profile);

    assert!(!verdict.eligible);
    assert!(verdict.reason.contains("residencia"));
    assert!(verdict.documents.is_empty());
    assert!(verdict.estimated_monthly_amount.is_none());
}

#[test]
fn under_23_needs_dependants() {
    let mut profile = household();
    profile.age = 22;
    let verdict = run(profile.clone());
    assert!(!verdict.eligible);
    assert!(verdict.reason.contains("23"));

    profile.minors = 1;
    profile.adults = 1;
    assert!(run(profile).eligible);
}

#[test]
fn net_worth_at_limit_is_denied_with_both_values() {
    let mut profile = household();
    profile.net_worth = 20353.62;

    let verdict = run(profile);

    assert!(!verdict.eligible);
    assert_eq!(
        verdict.reason,
        "El patrimonio de tu hogar (20353.62 €) supera el límite para tu tipo de hogar (20353.62 €)."
    );
}

#[test]
fn income_at_guaranteed_amount_is_denied() {
    let mut profile = household();
    profile.monthly_income = 604.21;

    let verdict = run(profile);

    assert!(!verdict.eligible);
    assert_eq!(
        verdict.reason,
        "Los ingresos mensuales de tu hogar (604.21 €) superan la Renta Garantizada para tu tipo de hogar (604.21 €)."
    );
}

#[test]
fn entitlement_floor_is_ten_euros() {
    let mut profile = household();

    profile.monthly_income = 594.22;
    let below = run(profile.clone());
    assert!(!below.eligible);
    assert!(below.reason.contains("menor de 10€"));
    assert!(below.estimated_monthly_amount.is_none());

    profile.monthly_income = 594.21;
    let at_floor = run(profile);
    assert!(at_floor.eligible);
    assert_eq!(at_floor.estimated_monthly_amount, Some(Amount::from_cents(1000)));
}

#[test]
fn sub_cent_income_is_not_rounded_across_the_floor() {
    let mut profile = household();

    // 604.21 - 594.215 = 9.995
    profile.monthly_income = 594.215;
    let verdict = run(profile.clone());
    assert!(!verdict.eligible);
    assert!(verdict.reason.contains("menor de 10€"));

    // 604.21 - 594.205 = 10.005
    profile.monthly_income = 594.205;
    assert!(run(profile).eligible);
}

#[test]
fn sub_cent_net_worth_is_compared_unrounded() {
    let mut profile = household();

    profile.net_worth = 20353.616;
    assert!(run(profile.clone()).eligible);

    profile.net_worth = 20353.6201;
    let verdict = run(profile);
    assert!(!verdict.eligible);
    assert!(verdict.reason.contains("(20353.62 €)"));
}

#[test]
fn raising_income_never_raises_entitlement() {
    let mut previous: Option<Amount> = None;
    let mut crossed = false;

    for income in (0..=700).step_by(25) {
        let mut profile = household();
        profile.monthly_income = f64::from(income);
        let verdict = run(profile);

        match (verdict.estimated_monthly_amount, previous) {
            (Some(current), Some(before)) => assert!(current <= before),
            (Some(_), None) => assert!(!crossed, "eligibility came back after crossing"),
            (None, _) => crossed = true,
        }
        if verdict.estimated_monthly_amount.is_some() {
            previous = verdict.estimated_monthly_amount;
        }
    }

    assert!(crossed);
}

#[test]
fn single_parent_household_gets_supplement() {
    let mut profile = household();
    profile.minors = 2;
    profile.single_parent = true;
    profile.monthly_income = 1000.0;

    let verdict = run(profile);

    assert!(verdict.eligible);
    assert_eq!(verdict.estimated_monthly_amount, Some(euros(184.14)));
}

#[test]
fn large_household_uses_overflow_amounts() {
    let mut profile = household();
    profile.adults = 3;
    profile.minors = 3;
    profile.monthly_income = 1300.0;
    profile.net_worth = 69_000.0;

    let verdict = run(profile);

    assert!(verdict.eligible);
    assert_eq!(verdict.estimated_monthly_amount, Some(euros(29.25)));
}

#[test]
fn evaluation_is_idempotent() {
    let profile = ProgramProfile::MinimumIncome(household());
    let first = serde_json::to_string(&evaluate(&profile)).expect("serialize");
    let second = serde_json::to_string(&evaluate(&profile)).expect("serialize");
    assert_eq!(first, second);
}
