use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    routing::post,
    Router,
};
use serde::Serialize;
use serde_json::json;

use super::domain::CustomerForm;
use super::history::HistoryFilters;
use super::repository::{AlertPublisher, PredictionRepository, RepositoryError};
use super::service::{PredictionService, PredictionServiceError};

/// Response envelope shared by every dashboard endpoint.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: None,
            error: None,
        }
    }

    pub fn ok_with_message(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: Some(message.into()),
            error: None,
        }
    }
}

/// Router builder exposing the prediction API consumed by the dashboard.
pub fn prediction_router<R, A>(service: Arc<PredictionService<R, A>>) -> Router
where
    R: PredictionRepository + 'static,
    A: AlertPublisher + 'static,
{
    Router::new()
        .route("/api/predict", post(predict_handler::<R, A>))
        .route(
            "/api/history",
            get(history_handler::<R, A>).delete(clear_history_handler::<R, A>),
        )
        .route("/api/history/export", get(export_history_handler::<R, A>))
        .route("/api/dashboard/stats", get(stats_handler::<R, A>))
        .with_state(service)
}

pub(crate) async fn predict_handler<R, A>(
    State(service): State<Arc<PredictionService<R, A>>>,
    axum::Json(form): axum::Json<CustomerForm>,
) -> Response
where
    R: PredictionRepository + 'static,
    A: AlertPublisher + 'static,
{
    match service.predict(form) {
        Ok(record) => (StatusCode::OK, axum::Json(ApiResponse::ok(record))).into_response(),
        Err(PredictionServiceError::Scoring(error)) => {
            failure(StatusCode::UNPROCESSABLE_ENTITY, error.to_string())
        }
        Err(PredictionServiceError::Repository(RepositoryError::Conflict)) => {
            failure(StatusCode::CONFLICT, "prediction already recorded")
        }
        Err(other) => failure(StatusCode::INTERNAL_SERVER_ERROR, other.to_string()),
    }
}

pub(crate) async fn history_handler<R, A>(
    State(service): State<Arc<PredictionService<R, A>>>,
    Query(filters): Query<HistoryFilters>,
) -> Response
where
    R: PredictionRepository + 'static,
    A: AlertPublisher + 'static,
{
    match service.history(&filters) {
        Ok(page) => (StatusCode::OK, axum::Json(ApiResponse::ok(page))).into_response(),
        Err(error) => failure(StatusCode::INTERNAL_SERVER_ERROR, error.to_string()),
    }
}

pub(crate) async fn export_history_handler<R, A>(
    State(service): State<Arc<PredictionService<R, A>>>,
    Query(filters): Query<HistoryFilters>,
) -> Response
where
    R: PredictionRepository + 'static,
    A: AlertPublisher + 'static,
{
    match service.export_history(&filters) {
        Ok(csv) => (
            StatusCode::OK,
            [
                (header::CONTENT_TYPE, mime::TEXT_CSV.essence_str()),
                (
                    header::CONTENT_DISPOSITION,
                    "attachment; filename=\"prediction-history.csv\"",
                ),
            ],
            csv,
        )
            .into_response(),
        Err(error) => failure(StatusCode::INTERNAL_SERVER_ERROR, error.to_string()),
    }
}

pub(crate) async fn clear_history_handler<R, A>(
    State(service): State<Arc<PredictionService<R, A>>>,
) -> Response
where
    R: PredictionRepository + 'static,
    A: AlertPublisher + 'static,
{
    match service.clear_history() {
        Ok(deleted) => (
            StatusCode::OK,
            axum::Json(ApiResponse::ok_with_message(
                json!({ "deletedCount": deleted }),
                "History cleared successfully",
            )),
        )
            .into_response(),
        Err(error) => failure(StatusCode::INTERNAL_SERVER_ERROR, error.to_string()),
    }
}

pub(crate) async fn stats_handler<R, A>(
    State(service): State<Arc<PredictionService<R, A>>>,
) -> Response
where
    R: PredictionRepository + 'static,
    A: AlertPublisher + 'static,
{
    match service.stats() {
        Ok(stats) => (StatusCode::OK, axum::Json(ApiResponse::ok(stats))).into_response(),
        Err(error) => failure(StatusCode::INTERNAL_SERVER_ERROR, error.to_string()),
    }
}

fn failure(status: StatusCode, error: impl Into<String>) -> Response {
    let payload = json!({
        "success": false,
        "error": error.into(),
    });
    (status, axum::Json(payload)).into_response()
}
