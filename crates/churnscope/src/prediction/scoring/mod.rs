mod rules;

pub(crate) use rules::FeatureRule;

use super::domain::{ChurnLabel, CustomerProfile, FeatureAttribution, Impact, ScoredPrediction};

/// Baseline probability before any feature contribution is applied.
const BASELINE_PROBABILITY: f64 = 0.3;
/// Probabilities are clamped away from 0 and 1 to avoid display and
/// divide-by-zero artifacts downstream.
const PROBABILITY_FLOOR: f64 = 0.05;
const PROBABILITY_CEILING: f64 = 0.95;

/// Scoring failures. This is pure computation, so no other error exists.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ScoringError {
    #[error("invalid value for {field}: {value}")]
    InvalidInput { field: &'static str, value: f64 },
    #[error("unsupported {field} category: '{value}'")]
    UnsupportedCategory { field: &'static str, value: String },
}

/// Heuristic churn scorer: a registry of independent feature rules with
/// fixed weights, evaluated in declaration order.
///
/// This is a deterministic stand-in for the real model's SHAP explanation,
/// usable when the inference backend is unavailable or during testing. The
/// weights are fixed constants, not learned parameters.
pub struct ChurnScorer {
    rules: Vec<FeatureRule>,
}

impl ChurnScorer {
    /// Registry covering the standard dashboard deployment.
    pub fn standard() -> Self {
        Self::with_rules(rules::standard_rules())
    }

    pub(crate) fn with_rules(rules: Vec<FeatureRule>) -> Self {
        Self { rules }
    }

    /// Map one profile to an ordered attribution set and aggregate
    /// probability. Identical inputs yield identical outputs.
    pub fn score(&self, profile: &CustomerProfile) -> Result<ScoredPrediction, ScoringError> {
        validate_numeric("monthlyCharges", profile.monthly_charges)?;
        if let Some(total) = profile.total_charges {
            validate_numeric("totalCharges", total)?;
        }

        let mut attributions = Vec::with_capacity(self.rules.len());
        for rule in &self.rules {
            if !(rule.applies)(profile) {
                continue;
            }
            let value = (rule.contribution)(profile);
            let impact = if value > 0.0 {
                Impact::Positive
            } else {
                Impact::Negative
            };
            attributions.push(FeatureAttribution {
                feature: rule.name.to_string(),
                value,
                impact,
            });
        }

        let raw: f64 = BASELINE_PROBABILITY
            + attributions
                .iter()
                .map(|attribution| attribution.value)
                .sum::<f64>();
        let probability = raw.clamp(PROBABILITY_FLOOR, PROBABILITY_CEILING);

        // Stable sort keeps evaluation order for equal magnitudes.
        attributions.sort_by(|a, b| b.value.abs().total_cmp(&a.value.abs()));

        Ok(ScoredPrediction {
            probability,
            label: ChurnLabel::from_probability(probability),
            attributions,
        })
    }
}

fn validate_numeric(field: &'static str, value: f64) -> Result<(), ScoringError> {
    if !value.is_finite() || value < 0.0 {
        return Err(ScoringError::InvalidInput { field, value });
    }
    Ok(())
}
