//! Train and predict operations
//!
//! These are the two exposed operations of the service. Training groups a
//! batch of observations by product, fits a trend per product and records it
//! in the [`ModelStore`]. Prediction is stateless with respect to the store:
//! it refits from the submitted history and projects forward.

use crate::data::{Observation, ProductSeries, RawObservation};
use crate::error::{ForecastError, Result};
use crate::model::{ForecastPoint, TrendModel, MIN_POINTS};
use crate::store::ModelStore;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Months forecast when a request does not name a horizon
pub const DEFAULT_HORIZON: u32 = 1;

/// Per-product outcome of a training batch
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status")]
pub enum TrainStatus {
    /// A trend was fitted and stored
    #[serde(rename = "trained")]
    Trained { n_points: usize },
    /// Fewer than 2 observations; nothing fitted, store untouched
    #[serde(rename = "insufficient data")]
    InsufficientData,
}

/// Forecast for one product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Forecast {
    pub product: String,
    pub predictions: Vec<ForecastPoint>,
}

/// Train one model per product found in the batch.
///
/// Records may carry their own product label (tabular form); records
/// without one fall back to `fallback_product`. All records are validated
/// before any fit is attempted; a single malformed record fails the whole
/// batch. Per-product outcomes are otherwise independent: a product with
/// fewer than 2 observations reports insufficient data without affecting
/// the others.
pub fn train(
    store: &ModelStore,
    fallback_product: Option<&str>,
    records: &[RawObservation],
) -> Result<BTreeMap<String, TrainStatus>> {
    let grouped = group_by_product(records, fallback_product)?;

    let mut results = BTreeMap::new();
    for (product, observations) in grouped {
        let series = ProductSeries::from_observations(&product, observations);
        if series.len() < MIN_POINTS {
            results.insert(product, TrainStatus::InsufficientData);
            continue;
        }

        let model = TrendModel::fit(&series)?;
        store.put(&product, model)?;
        results.insert(product, TrainStatus::Trained { n_points: series.len() });
    }

    Ok(results)
}

/// Fit a fresh trend over the submitted history and forecast `horizon`
/// months past its last observed month.
///
/// Anything previously trained for this product is ignored. The history
/// must be non-empty with both fields on every record, parse to at least 2
/// usable points, and the horizon must be positive.
pub fn predict(product: &str, history: &[RawObservation], horizon: u32) -> Result<Forecast> {
    if history.is_empty() {
        return Err(ForecastError::MalformedInput(
            "history must not be empty".to_string(),
        ));
    }
    if horizon == 0 {
        return Err(ForecastError::MalformedInput(
            "horizon must be a positive integer".to_string(),
        ));
    }

    let observations = validate_all(history)?;
    let series = ProductSeries::from_observations(product, observations);
    let model = TrendModel::fit(&series)?;
    let predictions = model.forecast(&series, horizon)?;

    Ok(Forecast {
        product: product.to_string(),
        predictions,
    })
}

/// Validate every record eagerly, then group by product preserving
/// submitted order within each group
fn group_by_product(
    records: &[RawObservation],
    fallback_product: Option<&str>,
) -> Result<BTreeMap<String, Vec<Observation>>> {
    let mut grouped: BTreeMap<String, Vec<Observation>> = BTreeMap::new();

    for (position, record) in records.iter().enumerate() {
        let product = record
            .product
            .as_deref()
            .or(fallback_product)
            .ok_or_else(|| {
                ForecastError::MalformedInput(format!("record {position}: missing product"))
            })?;
        let observation = record.validate(position)?;
        grouped.entry(product.to_string()).or_default().push(observation);
    }

    Ok(grouped)
}

fn validate_all(records: &[RawObservation]) -> Result<Vec<Observation>> {
    records
        .iter()
        .enumerate()
        .map(|(position, record)| record.validate(position))
        .collect()
}
