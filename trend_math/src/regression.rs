//! Ordinary least squares fitting for trend estimation
//!
//! Single-feature, single-target closed-form fit: given paired (x, y)
//! samples, computes the line y = slope * x + intercept minimising the
//! squared residuals.

use crate::{MathError, Result};
use serde::{Deserialize, Serialize};

/// A fitted least-squares line
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OlsLine {
    slope: f64,
    intercept: f64,
}

impl OlsLine {
    /// Fit a line to paired samples via ordinary least squares
    pub fn fit(xs: &[f64], ys: &[f64]) -> Result<Self> {
        if xs.len() != ys.len() {
            return Err(MathError::InvalidInput(format!(
                "x and y lengths differ: {} vs {}",
                xs.len(),
                ys.len()
            )));
        }

        if xs.len() < 2 {
            return Err(MathError::InsufficientData(
                "Need at least 2 points for linear regression".to_string(),
            ));
        }

        let n = xs.len() as f64;
        let x_mean = xs.iter().sum::<f64>() / n;
        let y_mean = ys.iter().sum::<f64>() / n;

        let mut numerator = 0.0;
        let mut denominator = 0.0;

        for (&x, &y) in xs.iter().zip(ys.iter()) {
            numerator += (x - x_mean) * (y - y_mean);
            denominator += (x - x_mean) * (x - x_mean);
        }

        if denominator.abs() < 1e-10 {
            return Err(MathError::CalculationError(
                "Cannot calculate slope: x values are too similar".to_string(),
            ));
        }

        let slope = numerator / denominator;
        let intercept = y_mean - slope * x_mean;

        Ok(Self { slope, intercept })
    }

    /// Evaluate the fitted line at the given x
    pub fn value_at(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }

    /// Get the slope (trend direction and strength)
    pub fn slope(&self) -> f64 {
        self.slope
    }

    /// Get the intercept
    pub fn intercept(&self) -> f64 {
        self.intercept
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn fits_exact_line() {
        let xs: Vec<f64> = (0..6).map(|i| i as f64).collect();
        let ys: Vec<f64> = xs.iter().map(|x| 100.0 + 10.0 * x).collect();

        let line = OlsLine::fit(&xs, &ys).unwrap();

        assert_approx_eq!(line.slope(), 10.0);
        assert_approx_eq!(line.intercept(), 100.0);
        assert_approx_eq!(line.value_at(7.0), 170.0);
    }

    #[test]
    fn fits_noisy_points() {
        // Least squares over a symmetric spread lands on the midline
        let xs = vec![0.0, 1.0, 2.0, 3.0];
        let ys = vec![1.0, 3.0, 1.0, 3.0];

        let line = OlsLine::fit(&xs, &ys).unwrap();

        assert_approx_eq!(line.slope(), 0.4);
        assert_approx_eq!(line.intercept(), 1.4);
    }

    #[test]
    fn rejects_mismatched_lengths() {
        let result = OlsLine::fit(&[0.0, 1.0], &[1.0]);
        assert!(matches!(result, Err(MathError::InvalidInput(_))));
    }

    #[test]
    fn rejects_single_point() {
        let result = OlsLine::fit(&[0.0], &[1.0]);
        assert!(matches!(result, Err(MathError::InsufficientData(_))));
    }

    #[test]
    fn rejects_degenerate_x_values() {
        let result = OlsLine::fit(&[2.0, 2.0, 2.0], &[1.0, 2.0, 3.0]);
        assert!(matches!(result, Err(MathError::CalculationError(_))));
    }

    #[test]
    fn negative_slope() {
        let xs = vec![0.0, 1.0, 2.0];
        let ys = vec![30.0, 20.0, 10.0];

        let line = OlsLine::fit(&xs, &ys).unwrap();

        assert_approx_eq!(line.slope(), -10.0);
        assert_approx_eq!(line.value_at(3.0), 0.0);
    }
}
