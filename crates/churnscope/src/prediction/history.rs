use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::domain::ChurnLabel;
use super::record::PredictionRecord;

const DEFAULT_PAGE_LIMIT: usize = 10;

/// Query parameters accepted by the history endpoint, matching the
/// dashboard's `HistoryFilters` shape.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HistoryFilters {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub prediction: LabelFilter,
    pub min_probability: Option<f64>,
    pub max_probability: Option<f64>,
    pub sort_by: SortField,
    pub sort_order: SortOrder,
    pub page: usize,
    pub limit: usize,
}

impl Default for HistoryFilters {
    fn default() -> Self {
        Self {
            start_date: None,
            end_date: None,
            prediction: LabelFilter::All,
            min_probability: None,
            max_probability: None,
            sort_by: SortField::Timestamp,
            sort_order: SortOrder::Desc,
            page: 1,
            limit: DEFAULT_PAGE_LIMIT,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum LabelFilter {
    #[serde(rename = "All")]
    All,
    #[serde(rename = "Churn")]
    Churn,
    #[serde(rename = "No Churn")]
    NoChurn,
}

impl LabelFilter {
    fn matches(self, label: ChurnLabel) -> bool {
        match self {
            LabelFilter::All => true,
            LabelFilter::Churn => label == ChurnLabel::Churn,
            LabelFilter::NoChurn => label == ChurnLabel::NoChurn,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortField {
    Timestamp,
    Probability,
    Prediction,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortOrder {
    Asc,
    Desc,
}

/// One page of filtered history. `total` counts every match, not just the
/// returned page, so the dashboard can render pagination controls.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistoryPage {
    pub predictions: Vec<PredictionRecord>,
    pub total: usize,
}

/// Filter, sort, and paginate an owned history snapshot.
pub fn apply(records: Vec<PredictionRecord>, filters: &HistoryFilters) -> HistoryPage {
    let mut matches: Vec<PredictionRecord> = records
        .into_iter()
        .filter(|record| retain(record, filters))
        .collect();

    sort(&mut matches, filters.sort_by, filters.sort_order);

    let total = matches.len();
    let limit = filters.limit.max(1);
    let page = filters.page.max(1);
    // Both values are caller-controlled; saturate instead of overflowing.
    let offset = (page - 1).saturating_mul(limit);
    let predictions = matches.into_iter().skip(offset).take(limit).collect();

    HistoryPage { predictions, total }
}

fn retain(record: &PredictionRecord, filters: &HistoryFilters) -> bool {
    if !filters.prediction.matches(record.prediction) {
        return false;
    }

    let date = record.timestamp.date_naive();
    if filters.start_date.is_some_and(|start| date < start) {
        return false;
    }
    if filters.end_date.is_some_and(|end| date > end) {
        return false;
    }

    if filters
        .min_probability
        .is_some_and(|min| record.probability < min)
    {
        return false;
    }
    if filters
        .max_probability
        .is_some_and(|max| record.probability > max)
    {
        return false;
    }

    true
}

fn sort(records: &mut [PredictionRecord], field: SortField, order: SortOrder) {
    records.sort_by(|a, b| {
        let ordering = match field {
            SortField::Timestamp => a.timestamp.cmp(&b.timestamp),
            SortField::Probability => a.probability.total_cmp(&b.probability),
            SortField::Prediction => a.prediction.label().cmp(b.prediction.label()),
        };
        match order {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    });
}

/// CSV export failure.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("failed to encode history row: {0}")]
    Csv(#[from] csv::Error),
    #[error("failed to finalize export buffer")]
    Buffer,
}

/// Render records as the CSV download offered by the history view.
pub fn export_csv(records: &[PredictionRecord]) -> Result<String, ExportError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record([
        "id",
        "timestamp",
        "prediction",
        "probability",
        "tenure",
        "monthlyCharges",
        "contract",
        "paymentMethod",
    ])?;

    for record in records {
        writer.write_record([
            record.id.as_str(),
            &record.timestamp.to_rfc3339(),
            record.prediction.label(),
            &format!("{:.3}", record.probability),
            &record.customer.tenure.to_string(),
            &format!("{:.2}", record.customer.monthly_charges),
            record.customer.contract.label(),
            record.customer.payment_method.label(),
        ])?;
    }

    let buffer = writer.into_inner().map_err(|_| ExportError::Buffer)?;
    String::from_utf8(buffer).map_err(|_| ExportError::Buffer)
}
