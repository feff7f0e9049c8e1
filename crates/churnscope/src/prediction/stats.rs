use serde::{Deserialize, Serialize};

use super::record::PredictionRecord;

// Offline model-evaluation metrics. The model itself lives behind the
// inference backend, so these are reported as fixed constants.
const MODEL_ACCURACY: f64 = 83.89;
const MODEL_PRECISION: f64 = 68.7;
const MODEL_RECALL: f64 = 72.19;
const MODEL_F1_SCORE: f64 = 70.4;
const MODEL_AUC: f64 = 89.95;

/// Summary metrics rendered on the dashboard landing view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_predictions: usize,
    /// Share of predictions labeled Churn, as a percentage.
    pub churn_rate: f64,
    pub avg_probability: f64,
    pub high_risk_customers: usize,
    pub prediction_accuracy: f64,
    pub precision: f64,
    pub recall: f64,
    pub f1_score: f64,
    pub auc: f64,
}

/// Aggregate history into dashboard metrics. An empty history keeps the
/// model constants but zeroes the usage counters.
pub fn compute(records: &[PredictionRecord], high_risk_threshold: f64) -> DashboardStats {
    let total = records.len();
    if total == 0 {
        return DashboardStats {
            total_predictions: 0,
            churn_rate: 0.0,
            avg_probability: 0.0,
            high_risk_customers: 0,
            prediction_accuracy: MODEL_ACCURACY,
            precision: MODEL_PRECISION,
            recall: MODEL_RECALL,
            f1_score: MODEL_F1_SCORE,
            auc: MODEL_AUC,
        };
    }

    let churned = records
        .iter()
        .filter(|record| record.prediction == super::domain::ChurnLabel::Churn)
        .count();
    let probability_sum: f64 = records.iter().map(|record| record.probability).sum();
    let high_risk = records
        .iter()
        .filter(|record| record.probability > high_risk_threshold)
        .count();

    DashboardStats {
        total_predictions: total,
        churn_rate: round1(churned as f64 / total as f64 * 100.0),
        avg_probability: round3(probability_sum / total as f64),
        high_risk_customers: high_risk,
        prediction_accuracy: MODEL_ACCURACY,
        precision: MODEL_PRECISION,
        recall: MODEL_RECALL,
        f1_score: MODEL_F1_SCORE,
        auc: MODEL_AUC,
    }
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}
