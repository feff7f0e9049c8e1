use crate::infra::{notification_settings, InMemoryAlertPublisher, InMemoryPredictionRepository};
use churnscope::config::AppConfig;
use churnscope::error::AppError;
use churnscope::prediction::{CustomerForm, PredictionService};
use clap::Args;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Args, Debug, Default)]
pub(crate) struct PredictArgs {
    /// Path to a JSON customer form. Defaults to a built-in sample profile.
    #[arg(long)]
    pub(crate) input: Option<PathBuf>,
    /// Emit the stored prediction record as JSON instead of the rendered summary.
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) fn run_predict(args: PredictArgs) -> Result<(), AppError> {
    let PredictArgs { input, json } = args;

    let form = match input {
        Some(path) => {
            let raw = std::fs::read_to_string(path)?;
            serde_json::from_str::<CustomerForm>(&raw)?
        }
        None => sample_customer(),
    };

    let config = AppConfig::load()?;
    let repository = Arc::new(InMemoryPredictionRepository::default());
    let alerts = Arc::new(InMemoryAlertPublisher::default());
    let service = PredictionService::new(
        repository,
        alerts.clone(),
        notification_settings(&config),
    );

    let record = match service.predict(form) {
        Ok(record) => record,
        Err(err) => {
            println!("Prediction rejected: {}", err);
            return Ok(());
        }
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&record)?);
        return Ok(());
    }

    println!("Churn prediction {}", record.id);
    println!(
        "- Outcome: {} ({:.1}% churn probability)",
        record.prediction.label(),
        record.probability * 100.0
    );
    println!(
        "- Customer: tenure {} months | {} | {}",
        record.customer.tenure,
        record.customer.contract.label(),
        record.customer.payment_method.label()
    );

    println!("\nFeature attributions (strongest first)");
    for attribution in &record.attributions {
        let direction = if attribution.value > 0.0 {
            "raises"
        } else {
            "lowers"
        };
        println!(
            "- {}: {:+.3} ({} churn risk)",
            attribution.feature, attribution.value, direction
        );
    }

    let events = alerts.events();
    if events.is_empty() {
        println!("\nHigh-risk alerts: none dispatched");
    } else {
        println!("\nHigh-risk alerts");
        for alert in events {
            println!(
                "- {} flagged at {:.1}% churn probability",
                alert.prediction_id,
                alert.probability * 100.0
            );
        }
    }

    Ok(())
}

fn sample_customer() -> CustomerForm {
    CustomerForm {
        tenure: 3,
        monthly_charges: 79.85,
        total_charges: Some(239.55),
        contract: "Month-to-month".to_string(),
        payment_method: "Electronic check".to_string(),
        internet_service: Some("Fiber optic".to_string()),
        online_security: "No".to_string(),
        tech_support: "No".to_string(),
        online_backup: Some("No".to_string()),
        senior: None,
        dependents: Some("No".to_string()),
        num_referrals: Some(0),
    }
}
