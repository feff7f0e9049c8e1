use super::common::*;
use crate::prediction::domain::ChurnLabel;
use crate::prediction::stats;

#[test]
fn empty_history_reports_zeroed_usage_counters() {
    let stats = stats::compute(&[], 0.7);

    assert_eq!(stats.total_predictions, 0);
    assert_eq!(stats.churn_rate, 0.0);
    assert_eq!(stats.avg_probability, 0.0);
    assert_eq!(stats.high_risk_customers, 0);
    // Model-evaluation constants are reported even with no usage.
    assert_eq!(stats.prediction_accuracy, 83.89);
    assert_eq!(stats.auc, 89.95);
}

#[test]
fn aggregates_usage_metrics() {
    let records = vec![
        make_record("pred_a", 1, ChurnLabel::Churn, 0.9),
        make_record("pred_b", 2, ChurnLabel::Churn, 0.8),
        make_record("pred_c", 3, ChurnLabel::NoChurn, 0.3),
        make_record("pred_d", 4, ChurnLabel::NoChurn, 0.2),
    ];

    let stats = stats::compute(&records, 0.7);

    assert_eq!(stats.total_predictions, 4);
    assert_eq!(stats.churn_rate, 50.0);
    assert_eq!(stats.avg_probability, 0.55);
    assert_eq!(stats.high_risk_customers, 2);
}

#[test]
fn high_risk_count_honors_threshold() {
    let records = vec![
        make_record("pred_a", 1, ChurnLabel::Churn, 0.72),
        make_record("pred_b", 2, ChurnLabel::Churn, 0.68),
    ];

    assert_eq!(stats::compute(&records, 0.7).high_risk_customers, 1);
    assert_eq!(stats::compute(&records, 0.5).high_risk_customers, 2);
}

#[test]
fn stats_serialize_with_dashboard_field_names() {
    let stats = stats::compute(&[], 0.7);
    let value = serde_json::to_value(&stats).expect("serializes");

    assert!(value.get("totalPredictions").is_some());
    assert!(value.get("churnRate").is_some());
    assert!(value.get("highRiskCustomers").is_some());
    assert!(value.get("f1Score").is_some());
}
