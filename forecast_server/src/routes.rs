//! API route handlers

use crate::AppState;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::{header, HeaderMap, StatusCode};
use axum::Json;
use sales_forecast::data::{records_from_csv, RawObservation};
use sales_forecast::service::{self, Forecast, TrainStatus, DEFAULT_HORIZON};
use sales_forecast::ForecastError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// JSON training body: a single product name plus its observation records.
/// Records may also carry their own product label, which takes precedence.
#[derive(Debug, Deserialize)]
pub struct TrainRequest {
    pub product: Option<String>,
    pub data: Vec<RawObservation>,
}

/// Prediction body: product, full history, and an optional horizon
#[derive(Debug, Deserialize)]
pub struct PredictRequest {
    pub product: Option<String>,
    #[serde(default)]
    pub history: Vec<RawObservation>,
    pub horizon: Option<u32>,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

type ApiError = (StatusCode, Json<ErrorResponse>);

fn into_api_error(err: ForecastError) -> ApiError {
    let status = match err {
        ForecastError::MalformedInput(_) | ForecastError::InsufficientData(_) => {
            StatusCode::BAD_REQUEST
        }
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    };
    if status.is_server_error() {
        tracing::error!(error = %err, "request failed");
    }
    (status, Json(ErrorResponse { error: err.to_string() }))
}

/// Liveness probe
pub async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "alive",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Train one model per product from a CSV or JSON batch.
///
/// A `text/csv` body is read as rows of `product,year_month,sales`; any
/// other body is parsed as a [`TrainRequest`].
pub async fn train(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<BTreeMap<String, TrainStatus>>, ApiError> {
    let is_csv = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.starts_with("text/csv"))
        .unwrap_or(false);

    let results = if is_csv {
        let records = records_from_csv(&body).map_err(into_api_error)?;
        service::train(state.store(), None, &records)
    } else {
        let request: TrainRequest = serde_json::from_slice(&body).map_err(|e| {
            into_api_error(ForecastError::MalformedInput(format!("invalid JSON body: {e}")))
        })?;
        service::train(state.store(), request.product.as_deref(), &request.data)
    }
    .map_err(into_api_error)?;

    tracing::info!(products = results.len(), "training complete");
    Ok(Json(results))
}

/// Forecast future months for one product from its submitted history
pub async fn predict(Json(request): Json<PredictRequest>) -> Result<Json<Forecast>, ApiError> {
    let product = request.product.ok_or_else(|| {
        into_api_error(ForecastError::MalformedInput("missing product".to_string()))
    })?;
    let horizon = request.horizon.unwrap_or(DEFAULT_HORIZON);

    let forecast =
        service::predict(&product, &request.history, horizon).map_err(into_api_error)?;

    tracing::info!(product = %forecast.product, months = forecast.predictions.len(), "forecast produced");
    Ok(Json(forecast))
}
