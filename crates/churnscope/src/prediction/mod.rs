//! Churn-prediction scoring, record management, and the HTTP surface
//! consumed by the dashboard.
//!
//! The module is layered the same way requests flow through it: `intake`
//! parses loose wire-shaped forms into the typed domain model, `scoring`
//! turns a profile into signed feature attributions and a bounded
//! probability, `record` wraps the score into a persisted-shape prediction
//! record, and `service`/`router` compose those pieces with the repository
//! and alert seams.

pub mod domain;
pub mod history;
pub(crate) mod intake;
pub mod record;
pub mod repository;
pub mod router;
pub mod scoring;
pub mod service;
pub mod stats;

#[cfg(test)]
mod tests;

pub use domain::{
    ChurnLabel, ContractType, CustomerForm, CustomerProfile, FeatureAttribution, Impact,
    InternetService, PaymentMethod, ScoredPrediction, ServiceFlag, YesNo,
};
pub use history::{HistoryFilters, HistoryPage, LabelFilter, SortField, SortOrder};
pub use record::{PredictionRecord, PredictionRecordFactory};
pub use repository::{
    AlertError, AlertPublisher, HighRiskAlert, PredictionRepository, RepositoryError,
};
pub use router::prediction_router;
pub use scoring::{ChurnScorer, ScoringError};
pub use service::{NotificationSettings, PredictionService, PredictionServiceError};
pub use stats::DashboardStats;
