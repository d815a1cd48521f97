//! Per-product trend model: a least-squares line over the time index

use crate::data::{format_year_month, months_after, ProductSeries};
use crate::error::{ForecastError, Result};
use serde::{Deserialize, Serialize};
use trend_math::regression::OlsLine;

/// Minimum observations required to fit a trend line
pub const MIN_POINTS: usize = 2;

/// A fitted linear trend: predicted_sales = slope * t + intercept
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrendModel {
    slope: f64,
    intercept: f64,
}

/// One forecast entry for a future calendar month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastPoint {
    pub year_month: String,
    pub predicted_sales: f64,
}

impl TrendModel {
    /// Fit a trend line to a product's series.
    ///
    /// Errors with [`ForecastError::InsufficientData`] when the series has
    /// fewer than [`MIN_POINTS`] observations.
    pub fn fit(series: &ProductSeries) -> Result<Self> {
        if series.len() < MIN_POINTS {
            return Err(ForecastError::InsufficientData(series.len()));
        }

        let line = OlsLine::fit(&series.time_index(), &series.sales())?;

        Ok(Self {
            slope: line.slope(),
            intercept: line.intercept(),
        })
    }

    /// Evaluate the trend at an arbitrary time index
    pub fn predict_at(&self, t: f64) -> f64 {
        self.slope * t + self.intercept
    }

    /// Forecast the `horizon` months immediately following the series.
    ///
    /// The h-th entry (h = 1..=horizon) projects time index `n-1+h` through
    /// the fitted line and labels it with the month h whole months after the
    /// last observed month. Values are rounded to 2 decimal places; negative
    /// projections are not clamped.
    pub fn forecast(&self, series: &ProductSeries, horizon: u32) -> Result<Vec<ForecastPoint>> {
        let last_month = series.last_month().ok_or_else(|| {
            ForecastError::MalformedInput("cannot forecast from an empty series".to_string())
        })?;
        let last_t = (series.len() - 1) as f64;

        let mut points = Vec::with_capacity(horizon as usize);
        for h in 1..=horizon {
            let raw = self.predict_at(last_t + h as f64);
            points.push(ForecastPoint {
                year_month: format_year_month(months_after(last_month, h)),
                predicted_sales: round2(raw),
            });
        }

        Ok(points)
    }

    /// Get the slope (monthly trend)
    pub fn slope(&self) -> f64 {
        self.slope
    }

    /// Get the intercept
    pub fn intercept(&self) -> f64 {
        self.intercept
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
