use chrono::{DateTime, Utc};
use rand::distributions::Alphanumeric;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::domain::{ChurnLabel, CustomerProfile, FeatureAttribution, ScoredPrediction};

const ID_SUFFIX_LEN: usize = 9;

/// Persisted-shape prediction record, serialized with the field names the
/// dashboard expects (`customerData`, `shapValues`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionRecord {
    pub id: String,
    pub timestamp: DateTime<Utc>,
    #[serde(rename = "customerData")]
    pub customer: CustomerProfile,
    pub prediction: ChurnLabel,
    pub probability: f64,
    #[serde(rename = "shapValues")]
    pub attributions: Vec<FeatureAttribution>,
}

/// Wraps a scored prediction with record identity and timestamp metadata.
///
/// Label and probability are copied verbatim from the scorer's output; the
/// factory never re-derives them. The stored probability is rounded to three
/// decimals for display parity, after the label has been fixed.
pub struct PredictionRecordFactory;

impl PredictionRecordFactory {
    pub fn build(customer: CustomerProfile, scored: ScoredPrediction) -> PredictionRecord {
        PredictionRecord {
            id: next_prediction_id(),
            timestamp: Utc::now(),
            customer,
            prediction: scored.label,
            probability: (scored.probability * 1000.0).round() / 1000.0,
            attributions: scored.attributions,
        }
    }
}

/// `pred_<unix-millis>_<9 alphanumerics>`: unique within a process run with
/// overwhelming probability. Collisions are a repository concern, not ours.
fn next_prediction_id() -> String {
    let suffix: String = rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(ID_SUFFIX_LEN)
        .map(char::from)
        .collect();
    format!("pred_{}_{}", Utc::now().timestamp_millis(), suffix)
}
