//! Observation records and per-product series handling
//!
//! The wire form of an observation is a loosely-typed record; validation
//! turns it into a typed [`Observation`] with a first-of-month date. A
//! [`ProductSeries`] is one product's observations sorted chronologically,
//! with a derived integer time index used as the regression feature.

use crate::error::{ForecastError, Result};
use chrono::{Months, NaiveDate};
use serde::{Deserialize, Serialize};

/// An observation as submitted by a client, before validation.
///
/// All fields are optional at this stage; [`RawObservation::validate`]
/// rejects records missing `year_month` or `sales`. The `product` field is
/// present on tabular (CSV) rows and absent when a request names a single
/// product for the whole batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawObservation {
    pub product: Option<String>,
    pub year_month: Option<String>,
    pub sales: Option<f64>,
}

impl RawObservation {
    /// Convenience constructor for an unlabeled observation
    pub fn new(year_month: &str, sales: f64) -> Self {
        Self {
            product: None,
            year_month: Some(year_month.to_string()),
            sales: Some(sales),
        }
    }

    /// Convenience constructor for a product-labeled observation
    pub fn with_product(product: &str, year_month: &str, sales: f64) -> Self {
        Self {
            product: Some(product.to_string()),
            year_month: Some(year_month.to_string()),
            sales: Some(sales),
        }
    }

    /// Validate the record into a typed observation.
    ///
    /// `position` is the record's index in the submitted batch, used only
    /// for the error message.
    pub fn validate(&self, position: usize) -> Result<Observation> {
        let year_month = self.year_month.as_deref().ok_or_else(|| {
            ForecastError::MalformedInput(format!("record {position}: missing year_month"))
        })?;
        let sales = self.sales.ok_or_else(|| {
            ForecastError::MalformedInput(format!("record {position}: missing sales"))
        })?;

        Ok(Observation {
            month: parse_year_month(year_month)?,
            sales,
        })
    }
}

/// A validated monthly sales observation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    /// First-of-month date for the observed calendar month
    pub month: NaiveDate,
    /// Observed sales quantity
    pub sales: f64,
}

/// One product's chronologically sorted observations
#[derive(Debug, Clone, PartialEq)]
pub struct ProductSeries {
    product: String,
    observations: Vec<Observation>,
}

impl ProductSeries {
    /// Build a series from unsorted observations.
    ///
    /// Sorting is a stable sort by month ascending, so duplicate months
    /// keep their submitted relative order and occupy distinct adjacent
    /// time steps.
    pub fn from_observations(product: &str, mut observations: Vec<Observation>) -> Self {
        observations.sort_by_key(|o| o.month);
        Self {
            product: product.to_string(),
            observations,
        }
    }

    /// Product identifier this series belongs to
    pub fn product(&self) -> &str {
        &self.product
    }

    /// The sorted observations
    pub fn observations(&self) -> &[Observation] {
        &self.observations
    }

    /// Number of observations in the series
    pub fn len(&self) -> usize {
        self.observations.len()
    }

    /// Check whether the series is empty
    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    /// The regression feature: integer time index 0..n-1 by sort position.
    ///
    /// A gap in calendar months does not produce a gap in the index.
    pub fn time_index(&self) -> Vec<f64> {
        (0..self.observations.len()).map(|t| t as f64).collect()
    }

    /// The regression target: sales in chronological order
    pub fn sales(&self) -> Vec<f64> {
        self.observations.iter().map(|o| o.sales).collect()
    }

    /// The last observed month, if any
    pub fn last_month(&self) -> Option<NaiveDate> {
        self.observations.last().map(|o| o.month)
    }
}

/// Parse a `"YYYY-MM"` string into the first-of-month date
pub fn parse_year_month(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(&format!("{s}-01"), "%Y-%m-%d").map_err(|_| {
        ForecastError::MalformedInput(format!("'{s}' is not a valid YYYY-MM month"))
    })
}

/// Format a date back to its `"YYYY-MM"` month label
pub fn format_year_month(date: NaiveDate) -> String {
    date.format("%Y-%m").to_string()
}

/// The first-of-month date `months` whole months after `date`
pub fn months_after(date: NaiveDate, months: u32) -> NaiveDate {
    date + Months::new(months)
}

/// Parse CSV bytes with columns `product,year_month,sales` into raw records.
///
/// Missing columns surface as `None` fields and are rejected later by
/// validation; unreadable rows are malformed input.
pub fn records_from_csv(bytes: &[u8]) -> Result<Vec<RawObservation>> {
    let mut reader = csv::Reader::from_reader(bytes);
    let mut records = Vec::new();

    for (position, row) in reader.deserialize::<RawObservation>().enumerate() {
        let record = row.map_err(|e| {
            ForecastError::MalformedInput(format!("csv row {position}: {e}"))
        })?;
        records.push(record);
    }

    Ok(records)
}
