//! Scenario checks for the rules engine through the public API.

use benefit_check::eligibility::{
    classify, evaluate, Amount, EligibilityError, HouseholdKeys, HouseholdProfile, ProgramProfile,
    ProgramType, RentalProfile, Subsidy52Profile,
};
use benefit_check::intake::{evaluate_form, IntakeError};
use serde_json::json;

fn euros(value: f64) -> Amount {
    Amount::from_decimal(value)
}

fn keys(income: &str, wealth: &str) -> HouseholdKeys {
    HouseholdKeys {
        income_key: income.to_string(),
        wealth_key: wealth.to_string(),
    }
}

#[test]
fn classifier_examples() {
    assert_eq!(classify(2, 1, false), keys("2a1m", "2a1m"));
    assert_eq!(classify(1, 0, true), keys("1a0m", "1a0m"));
    assert_eq!(classify(3, 3, true), keys("mono_mas", "mas"));
}

#[test]
fn every_program_name_evaluates_and_others_are_rejected() {
    let forms = [
        (
            "imv",
            json!({"edad": 30, "residencia": 2, "adultos": 1, "menores": 0,
                   "ingresosHogar": 400, "patrimonioHogar": 5000}),
        ),
        (
            "bono-alquiler-joven",
            json!({"edad": 25, "ingresosAnuales": 15000, "alquilerMensual": 500}),
        ),
        (
            "subsidio-52",
            json!({"edad": 53, "ingresos": 800, "cotizacionJubilacion": 16,
                   "cotizacionDesempleo": 7, "paroAgotado": "si"}),
        ),
    ];

    for (program, form) in &forms {
        let verdict = evaluate_form(program, form).expect("known program evaluates");
        assert!(verdict.eligible, "{program} sample should be eligible");
    }

    for program in ["", "IMV-plus", "subsidio52"] {
        match evaluate_form(program, &forms[0].1) {
            Err(IntakeError::Program(EligibilityError::InvalidProgram(name))) => {
                assert_eq!(name, program)
            }
            other => panic!("expected invalid program for '{program}', got {other:?}"),
        }
    }

    for program in ProgramType::ALL {
        assert_eq!(program.as_str().parse::<ProgramType>(), Ok(program));
    }
}

#[test]
fn minimum_income_reference_scenario() {
    let verdict = evaluate(&ProgramProfile::MinimumIncome(HouseholdProfile {
        age: 30,
        years_of_residence: 2,
        adults: 1,
        minors: 0,
        single_parent: false,
        monthly_income: 400.0,
        net_worth: 5000.0,
    }));

    assert!(verdict.eligible);
    assert_eq!(verdict.estimated_monthly_amount, Some(euros(204.21)));
    assert!(verdict.reason.contains("604.21"));
    assert_eq!(verdict.documents.len(), 6);
}

#[test]
fn minimum_income_floor_boundary() {
    let profile = |income: f64| {
        ProgramProfile::MinimumIncome(HouseholdProfile {
            age: 40,
            years_of_residence: 5,
            adults: 2,
            minors: 1,
            single_parent: false,
            monthly_income: income,
            net_worth: 0.0,
        })
    };

    // 2a1m guarantees 966.73.
    assert!(!evaluate(&profile(956.74)).eligible);
    let at_floor = evaluate(&profile(956.73));
    assert!(at_floor.eligible);
    assert_eq!(at_floor.estimated_monthly_amount, Some(euros(10.0)));
}

#[test]
fn rental_age_ceiling_dominates() {
    let verdict = evaluate(&ProgramProfile::RentalSubsidy(RentalProfile {
        age: 40,
        annual_income: 0.0,
        monthly_rent: 100.0,
        owns_other_property: false,
    }));

    assert!(!verdict.eligible);
    assert!(verdict.documents.is_empty());
}

#[test]
fn over52_reference_scenario() {
    let verdict = evaluate(&ProgramProfile::Over52Subsidy(Subsidy52Profile {
        age: 53,
        monthly_income: 800.0,
        retirement_contribution_years: 16,
        unemployment_contribution_years: 7,
        unemployment_benefit_exhausted: true,
    }));

    assert!(verdict.eligible);
    assert!(verdict.amount_text.is_some());
    assert_eq!(verdict.documents.len(), 5);
}

#[test]
fn verdicts_serialize_identically_across_calls() {
    let profile = ProgramProfile::Over52Subsidy(Subsidy52Profile {
        age: 60,
        monthly_income: 900.0,
        retirement_contribution_years: 20,
        unemployment_contribution_years: 10,
        unemployment_benefit_exhausted: true,
    });

    let first = serde_json::to_vec(&evaluate(&profile)).expect("serialize");
    let second = serde_json::to_vec(&evaluate(&profile)).expect("serialize");
    assert_eq!(first, second);

    let payload: serde_json::Value = serde_json::from_slice(&first).expect("json");
    assert_eq!(payload["elegible"], json!(false));
    assert!(payload.get("cuantiaEstimada").is_none());
    assert!(payload["motivo"].as_str().unwrap_or_default().contains("900.00 €"));
}
