use super::super::domain::{ContractType, CustomerProfile, InternetService, PaymentMethod};

/// One entry in the scoring registry. The applicability predicate lets
/// deployment variants drop fields without touching aggregation logic.
pub(crate) struct FeatureRule {
    pub(crate) name: &'static str,
    pub(crate) applies: fn(&CustomerProfile) -> bool,
    pub(crate) contribution: fn(&CustomerProfile) -> f64,
}

fn always(_profile: &CustomerProfile) -> bool {
    true
}

/// Rules for the standard dashboard deployment, in evaluation order.
/// Weights mirror the mock explanation generator the dashboard ships with.
pub(crate) fn standard_rules() -> Vec<FeatureRule> {
    vec![
        FeatureRule {
            name: "Monthly Charges",
            applies: always,
            contribution: |profile| (profile.monthly_charges - 50.0) * 0.01,
        },
        FeatureRule {
            name: "Tenure",
            applies: always,
            contribution: |profile| (50.0 - f64::from(profile.tenure)) * 0.008,
        },
        FeatureRule {
            name: "Contract Type",
            applies: always,
            contribution: |profile| match profile.contract {
                ContractType::MonthToMonth => 0.15,
                ContractType::OneYear | ContractType::TwoYear => -0.12,
            },
        },
        FeatureRule {
            name: "Internet Service",
            applies: |profile| profile.internet_service.is_some(),
            contribution: |profile| match profile.internet_service {
                Some(InternetService::FiberOptic) => 0.08,
                _ => -0.05,
            },
        },
        FeatureRule {
            name: "Payment Method",
            applies: always,
            contribution: |profile| match profile.payment_method {
                PaymentMethod::ElectronicCheck => 0.12,
                _ => -0.08,
            },
        },
        FeatureRule {
            name: "Online Security",
            applies: |profile| profile.online_security.applicable(),
            contribution: |profile| {
                if profile.online_security.enabled() {
                    -0.04
                } else {
                    0.06
                }
            },
        },
        FeatureRule {
            name: "Tech Support",
            applies: |profile| profile.tech_support.applicable(),
            contribution: |profile| {
                if profile.tech_support.enabled() {
                    -0.03
                } else {
                    0.05
                }
            },
        },
        FeatureRule {
            name: "Online Backup",
            applies: |profile| profile.online_backup.is_some_and(|flag| flag.applicable()),
            contribution: |profile| {
                if profile.online_backup.is_some_and(|flag| flag.enabled()) {
                    -0.03
                } else {
                    0.04
                }
            },
        },
        FeatureRule {
            name: "Referrals",
            applies: |profile| profile.num_referrals.is_some(),
            contribution: |profile| {
                if profile.num_referrals == Some(0) {
                    0.04
                } else {
                    -0.03
                }
            },
        },
    ]
}
