use super::domain::{
    ContractType, CustomerForm, CustomerProfile, InternetService, PaymentMethod, ServiceFlag,
    YesNo,
};
use super::scoring::ScoringError;

/// Convert an inbound form into a validated customer profile.
///
/// Categorical values are matched case-insensitively against their
/// enumerated labels; anything outside the domain is rejected rather than
/// coerced. Numeric range checks for the float fields live in the scorer.
pub(crate) fn profile_from_form(form: CustomerForm) -> Result<CustomerProfile, ScoringError> {
    let tenure = non_negative_count("tenure", form.tenure)?;
    let num_referrals = form
        .num_referrals
        .map(|count| non_negative_count("numReferrals", count))
        .transpose()?;

    Ok(CustomerProfile {
        tenure,
        monthly_charges: form.monthly_charges,
        total_charges: form.total_charges,
        contract: parse_contract(&form.contract)?,
        payment_method: parse_payment_method(&form.payment_method)?,
        internet_service: form
            .internet_service
            .as_deref()
            .map(parse_internet_service)
            .transpose()?,
        online_security: parse_service_flag("onlineSecurity", &form.online_security)?,
        tech_support: parse_service_flag("techSupport", &form.tech_support)?,
        online_backup: form
            .online_backup
            .as_deref()
            .map(|raw| parse_service_flag("onlineBackup", raw))
            .transpose()?,
        senior: form
            .senior
            .as_deref()
            .map(|raw| parse_yes_no("senior", raw))
            .transpose()?,
        dependents: form
            .dependents
            .as_deref()
            .map(|raw| parse_yes_no("dependents", raw))
            .transpose()?,
        num_referrals,
    })
}

fn non_negative_count(field: &'static str, value: i64) -> Result<u32, ScoringError> {
    u32::try_from(value).map_err(|_| ScoringError::InvalidInput {
        field,
        value: value as f64,
    })
}

fn parse_contract(raw: &str) -> Result<ContractType, ScoringError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "month-to-month" => Ok(ContractType::MonthToMonth),
        "one year" => Ok(ContractType::OneYear),
        "two year" => Ok(ContractType::TwoYear),
        _ => Err(unsupported("contract", raw)),
    }
}

fn parse_payment_method(raw: &str) -> Result<PaymentMethod, ScoringError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "electronic check" => Ok(PaymentMethod::ElectronicCheck),
        "mailed check" => Ok(PaymentMethod::MailedCheck),
        "bank transfer" => Ok(PaymentMethod::BankTransfer),
        "credit card" => Ok(PaymentMethod::CreditCard),
        _ => Err(unsupported("paymentMethod", raw)),
    }
}

fn parse_internet_service(raw: &str) -> Result<InternetService, ScoringError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "dsl" => Ok(InternetService::Dsl),
        "fiber optic" => Ok(InternetService::FiberOptic),
        "no" => Ok(InternetService::None),
        _ => Err(unsupported("internetService", raw)),
    }
}

fn parse_service_flag(field: &'static str, raw: &str) -> Result<ServiceFlag, ScoringError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "yes" => Ok(ServiceFlag::Yes),
        "no" => Ok(ServiceFlag::No),
        "no internet service" => Ok(ServiceFlag::NoInternetService),
        _ => Err(unsupported(field, raw)),
    }
}

fn parse_yes_no(field: &'static str, raw: &str) -> Result<YesNo, ScoringError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "yes" => Ok(YesNo::Yes),
        "no" => Ok(YesNo::No),
        _ => Err(unsupported(field, raw)),
    }
}

fn unsupported(field: &'static str, raw: &str) -> ScoringError {
    ScoringError::UnsupportedCategory {
        field,
        value: raw.trim().to_string(),
    }
}
