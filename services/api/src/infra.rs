use churnscope::config::AppConfig;
use churnscope::prediction::{
    AlertError, AlertPublisher, HighRiskAlert, NotificationSettings, PredictionRecord,
    PredictionRepository, RepositoryError,
};
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

#[derive(Default, Clone)]
pub(crate) struct InMemoryPredictionRepository {
    records: Arc<Mutex<Vec<PredictionRecord>>>,
}

impl PredictionRepository for InMemoryPredictionRepository {
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
pub(crate) struct InMemoryAlertPublisher {
    events: Arc<Mutex<Vec<HighRiskAlert>>>,
}

impl AlertPublisher for InMemoryAlertPublisher {
    fn publish(&self, alert: HighRiskAlert) -> Result<(), AlertError> {
        let mut guard = self.events.lock().expect("alert mutex poisoned");
        guard.push(alert);
        Ok(())
    }
}

impl InMemoryAlertPublisher {
    pub(crate) fn events(&self) -> Vec<HighRiskAlert> {
        self.events.lock().expect("alert mutex poisoned").clone()
    }
}

pub(crate) fn notification_settings(config: &AppConfig) -> NotificationSettings {
    NotificationSettings {
        high_risk_threshold: config.prediction.high_risk_threshold,
        email_enabled: config.prediction.email_alerts,
        sms_enabled: config.prediction.sms_alerts,
    }
}
