use std::collections::BTreeMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::info;

use super::domain::CustomerForm;
use super::history::{self, ExportError, HistoryFilters, HistoryPage};
use super::intake;
use super::record::{PredictionRecord, PredictionRecordFactory};
use super::repository::{
    AlertError, AlertPublisher, HighRiskAlert, PredictionRepository, RepositoryError,
};
use super::scoring::{ChurnScorer, ScoringError};
use super::stats::{self, DashboardStats};

/// Per-deployment alerting preferences for high-risk predictions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationSettings {
    pub high_risk_threshold: f64,
    pub email_enabled: bool,
    pub sms_enabled: bool,
}

impl Default for NotificationSettings {
    fn default() -> Self {
        Self {
            high_risk_threshold: 0.7,
            email_enabled: true,
            sms_enabled: false,
        }
    }
}

impl NotificationSettings {
    fn alerts_enabled(&self) -> bool {
        self.email_enabled || self.sms_enabled
    }
}

/// Service composing intake, the scorer, the record factory, and the
/// repository and alert seams.
pub struct PredictionService<R, A> {
    scorer: ChurnScorer,
    repository: Arc<R>,
    alerts: Arc<A>,
    settings: NotificationSettings,
}

impl<R, A> PredictionService<R, A>
where
    R: PredictionRepository + 'static,
    A: AlertPublisher + 'static,
{
    pub fn new(repository: Arc<R>, alerts: Arc<A>, settings: NotificationSettings) -> Self {
        Self {
            scorer: ChurnScorer::standard(),
            repository,
            alerts,
            settings,
        }
    }

    pub fn settings(&self) -> &NotificationSettings {
        &self.settings
    }

    /// Score a submitted form and persist the resulting record.
    ///
    /// Predictions above the configured high-risk threshold are fanned out
    /// through the alert publisher after the record is stored.
    pub fn predict(&self, form: CustomerForm) -> Result<PredictionRecord, PredictionServiceError> {
        let profile = intake::profile_from_form(form)?;
        let scored = self.scorer.score(&profile)?;
        let record = PredictionRecordFactory::build(profile, scored);
        let stored = self.repository.insert(record)?;

        if self.settings.alerts_enabled() && stored.probability > self.settings.high_risk_threshold
        {
            let mut details = BTreeMap::new();
            details.insert("tenure".to_string(), stored.customer.tenure.to_string());
            details.insert(
                "contract".to_string(),
                stored.customer.contract.label().to_string(),
            );
            self.alerts.publish(HighRiskAlert {
                prediction_id: stored.id.clone(),
                probability: stored.probability,
                details,
            })?;
            info!(id = %stored.id, probability = stored.probability, "high-risk prediction alert published");
        }

        Ok(stored)
    }

    /// Filtered, sorted, paginated history snapshot.
    pub fn history(&self, filters: &HistoryFilters) -> Result<HistoryPage, PredictionServiceError> {
        let records = self.repository.list()?;
        Ok(history::apply(records, filters))
    }

    /// CSV rendering of the filtered history (pagination is ignored so the
    /// download covers every match).
    pub fn export_history(
        &self,
        filters: &HistoryFilters,
    ) -> Result<String, PredictionServiceError> {
        let export_filters = HistoryFilters {
            page: 1,
            limit: usize::MAX,
            ..filters.clone()
        };
        let page = self.history(&export_filters)?;
        Ok(history::export_csv(&page.predictions)?)
    }

    pub fn stats(&self) -> Result<DashboardStats, PredictionServiceError> {
        let records = self.repository.list()?;
        Ok(stats::compute(&records, self.settings.high_risk_threshold))
    }

    /// Drop every stored prediction, returning the deleted count.
    pub fn clear_history(&self) -> Result<usize, PredictionServiceError> {
        Ok(self.repository.clear()?)
    }
}

/// Error raised by the prediction service.
#[derive(Debug, thiserror::Error)]
pub enum PredictionServiceError {
    #[error(transparent)]
    Scoring(#[from] ScoringError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    #[error(transparent)]
    Alert(#[from] AlertError),
    #[error(transparent)]
    Export(#[from] ExportError),
}
