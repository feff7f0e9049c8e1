use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::record::PredictionRecord;

/// Storage abstraction so the service module can be exercised in isolation.
/// The in-memory implementation lives in the API crate; a real deployment
/// would back this with the history database.
pub trait PredictionRepository: Send + Sync {
    fn insert(&self, record: PredictionRecord) -> Result<PredictionRecord, RepositoryError>;
    fn list(&self) -> Result<Vec<PredictionRecord>, RepositoryError>;
    fn clear(&self) -> Result<usize, RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record already exists")]
    Conflict,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}

/// Trait describing outbound notification hooks (e.g., e-mail or SMS
/// adapters) fired for high-risk predictions.
pub trait AlertPublisher: Send + Sync {
    fn publish(&self, alert: HighRiskAlert) -> Result<(), AlertError>;
}

/// Alert payload so routes/tests can assert integration boundaries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HighRiskAlert {
    pub prediction_id: String,
    pub probability: f64,
    pub details: BTreeMap<String, String>,
}

/// Alert dispatch error.
#[derive(Debug, thiserror::Error)]
pub enum AlertError {
    #[error("alert transport unavailable: {0}")]
    Transport(String),
}
