use serde::{Deserialize, Serialize};

/// Billing commitment period attached to a customer account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContractType {
    #[serde(rename = "Month-to-month")]
    MonthToMonth,
    #[serde(rename = "One year")]
    OneYear,
    #[serde(rename = "Two year")]
    TwoYear,
}

impl ContractType {
    pub const fn label(self) -> &'static str {
        match self {
            ContractType::MonthToMonth => "Month-to-month",
            ContractType::OneYear => "One year",
            ContractType::TwoYear => "Two year",
        }
    }
}

/// How the customer settles their bill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentMethod {
    #[serde(rename = "Electronic check")]
    ElectronicCheck,
    #[serde(rename = "Mailed check")]
    MailedCheck,
    #[serde(rename = "Bank transfer")]
    BankTransfer,
    #[serde(rename = "Credit card")]
    CreditCard,
}

impl PaymentMethod {
    pub const fn label(self) -> &'static str {
        match self {
            PaymentMethod::ElectronicCheck => "Electronic check",
            PaymentMethod::MailedCheck => "Mailed check",
            PaymentMethod::BankTransfer => "Bank transfer",
            PaymentMethod::CreditCard => "Credit card",
        }
    }
}

/// Internet product on the account, when the deployment collects one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InternetService {
    #[serde(rename = "DSL")]
    Dsl,
    #[serde(rename = "Fiber optic")]
    FiberOptic,
    #[serde(rename = "No")]
    None,
}

/// Tri-state subscription flag used by the internet-dependent add-ons.
///
/// `NoInternetService` marks the feature as inapplicable for scoring rather
/// than disabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ServiceFlag {
    #[serde(rename = "Yes")]
    Yes,
    #[serde(rename = "No")]
    No,
    #[serde(rename = "No internet service")]
    NoInternetService,
}

impl ServiceFlag {
    pub const fn enabled(self) -> bool {
        matches!(self, ServiceFlag::Yes)
    }

    pub const fn applicable(self) -> bool {
        !matches!(self, ServiceFlag::NoInternetService)
    }
}

/// Plain yes/no answer for the optional demographic fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum YesNo {
    #[serde(rename = "Yes")]
    Yes,
    #[serde(rename = "No")]
    No,
}

impl YesNo {
    pub const fn is_yes(self) -> bool {
        matches!(self, YesNo::Yes)
    }
}

/// Wire-shaped customer submission as the dashboard form posts it.
///
/// Categorical fields arrive as loose strings; `intake` parses them into a
/// [`CustomerProfile`] and rejects values outside the enumerated domains.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerForm {
    pub tenure: i64,
    pub monthly_charges: f64,
    #[serde(default)]
    pub total_charges: Option<f64>,
    pub contract: String,
    pub payment_method: String,
    #[serde(default)]
    pub internet_service: Option<String>,
    pub online_security: String,
    pub tech_support: String,
    #[serde(default)]
    pub online_backup: Option<String>,
    #[serde(default)]
    pub senior: Option<String>,
    #[serde(default)]
    pub dependents: Option<String>,
    #[serde(default)]
    pub num_referrals: Option<i64>,
}

/// Validated customer attributes consumed by the scorer.
///
/// Deployment variants collect different subsets of the optional fields; the
/// scoring rules carry applicability predicates so absent fields are skipped
/// rather than treated as errors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerProfile {
    pub tenure: u32,
    pub monthly_charges: f64,
    #[serde(default)]
    pub total_charges: Option<f64>,
    pub contract: ContractType,
    pub payment_method: PaymentMethod,
    #[serde(default)]
    pub internet_service: Option<InternetService>,
    pub online_security: ServiceFlag,
    pub tech_support: ServiceFlag,
    #[serde(default)]
    pub online_backup: Option<ServiceFlag>,
    #[serde(default)]
    pub senior: Option<YesNo>,
    #[serde(default)]
    pub dependents: Option<YesNo>,
    #[serde(default)]
    pub num_referrals: Option<u32>,
}

/// Direction of a feature's contribution, redundantly encoded for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Impact {
    #[serde(rename = "positive")]
    Positive,
    #[serde(rename = "negative")]
    Negative,
}

/// Signed contribution of one input feature toward the predicted outcome.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureAttribution {
    pub feature: String,
    pub value: f64,
    pub impact: Impact,
}

/// Binary churn outcome derived from the aggregate probability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChurnLabel {
    #[serde(rename = "Churn")]
    Churn,
    #[serde(rename = "No Churn")]
    NoChurn,
}

impl ChurnLabel {
    /// Strict threshold: exactly 0.5 resolves to `NoChurn`.
    pub fn from_probability(probability: f64) -> Self {
        if probability > 0.5 {
            ChurnLabel::Churn
        } else {
            ChurnLabel::NoChurn
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            ChurnLabel::Churn => "Churn",
            ChurnLabel::NoChurn => "No Churn",
        }
    }
}

/// Scoring output: bounded probability, derived label, and the ranked
/// attribution list (descending absolute contribution, stable ties).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredPrediction {
    pub probability: f64,
    pub label: ChurnLabel,
    pub attributions: Vec<FeatureAttribution>,
}

impl ScoredPrediction {
    /// Presentation helper: the scorer itself always returns the full set.
    pub fn top_attributions(&self, limit: usize) -> Vec<FeatureAttribution> {
        self.attributions.iter().take(limit).cloned().collect()
    }
}
