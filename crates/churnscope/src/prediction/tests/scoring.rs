use super::common::*;
use crate::prediction::domain::{ChurnLabel, Impact, InternetService, ServiceFlag, YesNo};
use crate::prediction::intake;
use crate::prediction::scoring::{ChurnScorer, FeatureRule, ScoringError};

fn scorer() -> ChurnScorer {
    ChurnScorer::standard()
}

#[test]
fn scoring_is_deterministic_for_identical_input() {
    let profile = high_risk_profile();
    let first = scorer().score(&profile).expect("scoring succeeds");
    let second = scorer().score(&profile).expect("scoring succeeds");
    assert_eq!(first, second);
}

#[test]
fn probability_stays_within_clamp_bounds() {
    let profiles = [base_profile(), high_risk_profile(), low_risk_profile()];
    for profile in profiles {
        let scored = scorer().score(&profile).expect("scoring succeeds");
        assert!(
            (0.05..=0.95).contains(&scored.probability),
            "probability {} outside bounds",
            scored.probability
        );
    }
}

#[test]
fn high_risk_customer_hits_upper_clamp() {
    let scored = scorer()
        .score(&high_risk_profile())
        .expect("scoring succeeds");

    assert_eq!(scored.probability, 0.95);
    assert_eq!(scored.label, ChurnLabel::Churn);
    assert_eq!(scored.attributions.len(), 6);
    assert!(scored
        .attributions
        .iter()
        .all(|attribution| attribution.impact == Impact::Positive));
}

#[test]
fn loyal_customer_hits_lower_clamp() {
    let scored = scorer()
        .score(&low_risk_profile())
        .expect("scoring succeeds");

    assert_eq!(scored.probability, 0.05);
    assert_eq!(scored.label, ChurnLabel::NoChurn);
    assert!(scored
        .attributions
        .iter()
        .all(|attribution| attribution.impact == Impact::Negative));
}

#[test]
fn half_probability_resolves_to_no_churn() {
    // The 0.5 boundary is deliberately non-inclusive.
    assert_eq!(ChurnLabel::from_probability(0.5), ChurnLabel::NoChurn);
    assert_eq!(
        ChurnLabel::from_probability(0.5 + f64::EPSILON),
        ChurnLabel::Churn
    );
    assert_eq!(ChurnLabel::from_probability(0.49), ChurnLabel::NoChurn);
}

#[test]
fn impact_matches_contribution_sign() {
    let mut profile = base_profile();
    profile.internet_service = Some(InternetService::FiberOptic);
    profile.online_backup = Some(ServiceFlag::No);
    profile.num_referrals = Some(3);

    let scored = scorer().score(&profile).expect("scoring succeeds");
    for attribution in &scored.attributions {
        assert_eq!(
            attribution.impact == Impact::Positive,
            attribution.value > 0.0,
            "impact/sign mismatch for {}",
            attribution.feature
        );
    }
}

#[test]
fn attributions_are_ranked_by_absolute_value() {
    let scored = scorer()
        .score(&high_risk_profile())
        .expect("scoring succeeds");

    for pair in scored.attributions.windows(2) {
        assert!(
            pair[0].value.abs() >= pair[1].value.abs(),
            "{} ranked below {}",
            pair[0].feature,
            pair[1].feature
        );
    }
}

#[test]
fn equal_magnitudes_keep_evaluation_order() {
    let scorer = ChurnScorer::with_rules(vec![
        FeatureRule {
            name: "First",
            applies: |_| true,
            contribution: |_| 0.05,
        },
        FeatureRule {
            name: "Second",
            applies: |_| true,
            contribution: |_| -0.05,
        },
        FeatureRule {
            name: "Largest",
            applies: |_| true,
            contribution: |_| 0.1,
        },
    ]);

    let scored = scorer.score(&base_profile()).expect("scoring succeeds");
    let order: Vec<&str> = scored
        .attributions
        .iter()
        .map(|attribution| attribution.feature.as_str())
        .collect();
    assert_eq!(order, vec!["Largest", "First", "Second"]);
}

#[test]
fn inapplicable_features_are_skipped() {
    let mut profile = base_profile();
    profile.online_security = ServiceFlag::NoInternetService;
    profile.tech_support = ServiceFlag::NoInternetService;

    let scored = scorer().score(&profile).expect("scoring succeeds");
    assert!(scored
        .attributions
        .iter()
        .all(|attribution| attribution.feature != "Online Security"
            && attribution.feature != "Tech Support"));
}

#[test]
fn optional_features_extend_the_attribution_set() {
    let minimal = scorer().score(&base_profile()).expect("scoring succeeds");
    assert_eq!(minimal.attributions.len(), 6);

    let mut extended = base_profile();
    extended.internet_service = Some(InternetService::FiberOptic);
    extended.online_backup = Some(ServiceFlag::Yes);
    extended.senior = Some(YesNo::No);
    extended.num_referrals = Some(0);

    let scored = scorer().score(&extended).expect("scoring succeeds");
    assert_eq!(scored.attributions.len(), 9);
    let fiber = scored
        .attributions
        .iter()
        .find(|attribution| attribution.feature == "Internet Service")
        .expect("internet rule fires");
    assert_eq!(fiber.value, 0.08);
}

#[test]
fn top_attributions_truncates_for_presentation_only() {
    let scored = scorer()
        .score(&high_risk_profile())
        .expect("scoring succeeds");

    let top = scored.top_attributions(3);
    assert_eq!(top.len(), 3);
    assert_eq!(top[0], scored.attributions[0]);
    // The scorer output itself keeps the full set.
    assert_eq!(scored.attributions.len(), 6);
}

#[test]
fn negative_monthly_charges_are_rejected() {
    let mut profile = base_profile();
    profile.monthly_charges = -5.0;

    let error = scorer().score(&profile).expect_err("invalid input");
    assert!(matches!(
        error,
        ScoringError::InvalidInput {
            field: "monthlyCharges",
            ..
        }
    ));
}

#[test]
fn non_finite_charges_are_rejected() {
    let mut profile = base_profile();
    profile.monthly_charges = f64::NAN;
    assert!(scorer().score(&profile).is_err());

    let mut profile = base_profile();
    profile.total_charges = Some(f64::INFINITY);
    assert!(matches!(
        scorer().score(&profile).expect_err("invalid input"),
        ScoringError::InvalidInput {
            field: "totalCharges",
            ..
        }
    ));
}

#[test]
fn intake_rejects_unknown_contract_category() {
    let mut form = high_risk_form();
    form.contract = "Quarterly".to_string();

    let error = intake::profile_from_form(form).expect_err("unsupported category");
    match error {
        ScoringError::UnsupportedCategory { field, value } => {
            assert_eq!(field, "contract");
            assert_eq!(value, "Quarterly");
        }
        other => panic!("expected unsupported category, got {other:?}"),
    }
}

#[test]
fn intake_rejects_negative_tenure() {
    let mut form = high_risk_form();
    form.tenure = -3;

    let error = intake::profile_from_form(form).expect_err("invalid input");
    assert!(matches!(
        error,
        ScoringError::InvalidInput { field: "tenure", .. }
    ));
}

#[test]
fn intake_parses_categories_case_insensitively() {
    let mut form = high_risk_form();
    form.contract = "month-to-month".to_string();
    form.payment_method = "ELECTRONIC CHECK".to_string();
    form.online_security = " no internet service ".to_string();

    let profile = intake::profile_from_form(form).expect("intake succeeds");
    assert_eq!(profile.online_security, ServiceFlag::NoInternetService);
}
