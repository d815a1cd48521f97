//! # Sales Forecast
//!
//! A Rust library for per-product monthly sales trend modelling and
//! forecasting.
//!
//! ## Features
//!
//! - Observation validation and chronological series building
//! - Closed-form linear trend fitting over a derived time index
//! - Month-labelled forecasts for an arbitrary horizon
//! - A keyed model store mirrored to flat JSON files
//! - CSV and record-based ingestion for training batches
//!
//! ## Quick Start
//!
//! ```no_run
//! use sales_forecast::data::RawObservation;
//! use sales_forecast::service::{self, TrainStatus};
//! use sales_forecast::store::ModelStore;
//!
//! # fn main() -> sales_forecast::error::Result<()> {
//! let store = ModelStore::new("models")?;
//!
//! // Train a model for one product
//! let records = vec![
//!     RawObservation::new("2024-01", 120.0),
//!     RawObservation::new("2024-02", 135.0),
//! ];
//! let statuses = service::train(&store, Some("Soap"), &records)?;
//! assert_eq!(statuses["Soap"], TrainStatus::Trained { n_points: 2 });
//!
//! // Forecast the next two months from supplied history
//! let forecast = service::predict("Soap", &records, 2)?;
//! assert_eq!(forecast.predictions.len(), 2);
//! # Ok(())
//! # }
//! ```

pub mod data;
pub mod error;
pub mod model;
pub mod service;
pub mod store;

// Re-export commonly used types
pub use crate::data::{Observation, ProductSeries, RawObservation};
pub use crate::error::ForecastError;
pub use crate::model::{ForecastPoint, TrendModel};
pub use crate::service::{Forecast, TrainStatus};
pub use crate::store::ModelStore;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
