use std::sync::{Arc, Mutex};

use axum::response::Response;
use chrono::{Duration, Utc};
use serde_json::Value;

use crate::prediction::domain::{
    ChurnLabel, ContractType, CustomerForm, CustomerProfile, PaymentMethod, ServiceFlag,
};
use crate::prediction::record::PredictionRecord;
use crate::prediction::repository::{
    AlertError, AlertPublisher, HighRiskAlert, PredictionRepository, RepositoryError,
};
use crate::prediction::router::prediction_router;
use crate::prediction::service::{NotificationSettings, PredictionService};

pub(super) fn high_risk_form() -> CustomerForm {
    CustomerForm {
        tenure: 1,
        monthly_charges: 95.0,
        total_charges: None,
        contract: "Month-to-month".to_string(),
        payment_method: "Electronic check".to_string(),
        internet_service: None,
        online_security: "No".to_string(),
        tech_support: "No".to_string(),
        online_backup: None,
        senior: None,
        dependents: None,
        num_referrals: None,
    }
}

pub(super) fn low_risk_form() -> CustomerForm {
    CustomerForm {
        tenure: 60,
        monthly_charges: 30.0,
        total_charges: None,
        contract: "Two year".to_string(),
        payment_method: "Credit card".to_string(),
        internet_service: None,
        online_security: "Yes".to_string(),
        tech_support: "Yes".to_string(),
        online_backup: None,
        senior: None,
        dependents: None,
        num_referrals: None,
    }
}

pub(super) fn base_profile() -> CustomerProfile {
    CustomerProfile {
        tenure: 30,
        monthly_charges: 50.0,
        total_charges: None,
        contract: ContractType::OneYear,
        payment_method: PaymentMethod::CreditCard,
        internet_service: None,
        online_security: ServiceFlag::Yes,
        tech_support: ServiceFlag::Yes,
        online_backup: None,
        senior: None,
        dependents: None,
        num_referrals: None,
    }
}

pub(super) fn high_risk_profile() -> CustomerProfile {
    CustomerProfile {
        tenure: 1,
        monthly_charges: 95.0,
        contract: ContractType::MonthToMonth,
        payment_method: PaymentMethod::ElectronicCheck,
        online_security: ServiceFlag::No,
        tech_support: ServiceFlag::No,
        ..base_profile()
    }
}

pub(super) fn low_risk_profile() -> CustomerProfile {
    CustomerProfile {
        tenure: 60,
        monthly_charges: 30.0,
        contract: ContractType::TwoYear,
        payment_method: PaymentMethod::CreditCard,
        online_security: ServiceFlag::Yes,
        tech_support: ServiceFlag::Yes,
        ..base_profile()
    }
}

pub(super) fn make_record(
    id: &str,
    days_ago: i64,
    label: ChurnLabel,
    probability: f64,
) -> PredictionRecord {
    PredictionRecord {
        id: id.to_string(),
        timestamp: Utc::now() - Duration::days(days_ago),
        customer: base_profile(),
        prediction: label,
        probability,
        attributions: Vec::new(),
    }
}

#[derive(Default, Clone)]
pub(super) struct MemoryRepository {
    pub(super) records: Arc<Mutex<Vec<PredictionRecord>>>,
}

impl PredictionRepository for MemoryRepository {
    fn insert(&self, record: PredictionRecord) -> Result<PredictionRecord, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        if guard.iter().any(|existing| existing.id == record.id) {
            return Err(RepositoryError::Conflict);
        }
        guard.push(record.clone());
        Ok(record)
    }

    fn list(&self) -> Result<Vec<PredictionRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.clone())
    }

    fn clear(&self) -> Result<usize, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        let deleted = guard.len();
        guard.clear();
        Ok(deleted)
    }
}

#[derive(Default, Clone)]
pub(super) struct MemoryAlerts {
    events: Arc<Mutex<Vec<HighRiskAlert>>>,
}

impl AlertPublisher for MemoryAlerts {
    fn publish(&self, alert: HighRiskAlert) -> Result<(), AlertError> {
        let mut guard = self.events.lock().expect("alert mutex poisoned");
        guard.push(alert);
        Ok(())
    }
}

impl MemoryAlerts {
    pub(super) fn events(&self) -> Vec<HighRiskAlert> {
        self.events.lock().expect("alert mutex poisoned").clone()
    }
}

pub(super) struct UnavailableRepository;

impl PredictionRepository for UnavailableRepository {
    fn insert(&self, _record: PredictionRecord) -> Result<PredictionRecord, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn list(&self) -> Result<Vec<PredictionRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn clear(&self) -> Result<usize, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }
}

pub(super) fn notification_settings() -> NotificationSettings {
    NotificationSettings {
        high_risk_threshold: 0.7,
        email_enabled: true,
        sms_enabled: false,
    }
}

pub(super) fn build_service() -> (
    PredictionService<MemoryRepository, MemoryAlerts>,
    Arc<MemoryRepository>,
    Arc<MemoryAlerts>,
) {
    let repository = Arc::new(MemoryRepository::default());
    let alerts = Arc::new(MemoryAlerts::default());
    let service =
        PredictionService::new(repository.clone(), alerts.clone(), notification_settings());
    (service, repository, alerts)
}

pub(super) fn router_with_service(
    service: PredictionService<MemoryRepository, MemoryAlerts>,
) -> axum::Router {
    prediction_router(Arc::new(service))
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

pub(super) async fn read_text_body(response: Response) -> String {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read body");
    String::from_utf8(body.to_vec()).expect("utf-8 payload")
}
