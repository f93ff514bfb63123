//! Ordinary least-squares line fitting.

use crate::error::FitError;

/// Fitted line `y = slope * x + intercept`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LinearFit {
    /// Slope.
    pub slope: f64,
    /// Intercept.
    pub intercept: f64,
    /// Coefficient of determination; 1 when `y` has no spread.
    pub r_squared: f64,
    /// Points used.
    pub points: usize,
}

impl LinearFit {
    /// Evaluates the line at `x`.
    pub fn predict(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }
}

/// Least-squares line through `(x[i], y[i])`.
///
/// # Errors
/// - `FitError::LengthMismatch` when the slices differ in length
/// - `FitError::InsufficientData` for fewer than two points
/// - `FitError::Degenerate` when all `x` are equal
pub fn linear_regression(x: &[f64], y: &[f64]) -> Result<LinearFit, FitError> {
    if x.len() != y.len() {
        return Err(FitError::LengthMismatch {
            x: x.len(),
            y: y.len(),
        });
    }
    let n = x.len();
    if n < 2 {
        return Err(FitError::InsufficientData { needed: 2, got: n });
    }

    let x_mean = x.iter().sum::<f64>() / n as f64;
    let y_mean = y.iter().sum::<f64>() / n as f64;
    let (sxx, sxy, syy) = x.iter().zip(y).fold((0.0, 0.0, 0.0), |(sxx, sxy, syy), (&xi, &yi)| {
        let dx = xi - x_mean;
        let dy = yi - y_mean;
        (sxx + dx * dx, sxy + dx * dy, syy + dy * dy)
    });

    if sxx <= 0.0 || !sxx.is_finite() {
        return Err(FitError::Degenerate(format!(
            "x values have no spread (Sxx = {})",
            sxx
        )));
    }

    let slope = sxy / sxx;
    let r_squared = if syy > 0.0 { sxy * sxy / (sxx * syy) } else { 1.0 };
    Ok(LinearFit {
        slope,
        intercept: y_mean - slope * x_mean,
        r_squared,
        points: n,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_exact_line() {
        let x = [0.0, 1.0, 2.0, 3.0];
        let y: Vec<f64> = x.iter().map(|v| 3.0 * v - 1.5).collect();
        let fit = linear_regression(&x, &y).unwrap();
        assert_relative_eq!(fit.slope, 3.0, epsilon = 1e-12);
        assert_relative_eq!(fit.intercept, -1.5, epsilon = 1e-12);
        assert_relative_eq!(fit.r_squared, 1.0, epsilon = 1e-12);
        assert_relative_eq!(fit.predict(10.0), 28.5, epsilon = 1e-12);
    }

    #[test]
    fn test_noisy_line_r_squared_below_one() {
        let x = [0.0, 1.0, 2.0, 3.0, 4.0];
        let y = [0.1, 0.9, 2.2, 2.8, 4.1];
        let fit = linear_regression(&x, &y).unwrap();
        assert!(fit.r_squared < 1.0 && fit.r_squared > 0.95);
        assert_relative_eq!(fit.slope, 0.99, epsilon = 1e-12);
    }

    #[test]
    fn test_flat_y() {
        let fit = linear_regression(&[1.0, 2.0], &[4.0, 4.0]).unwrap();
        assert_eq!(fit.slope, 0.0);
        assert_eq!(fit.r_squared, 1.0);
    }

    #[test]
    fn test_errors() {
        assert_eq!(
            linear_regression(&[1.0, 2.0], &[1.0]),
            Err(FitError::LengthMismatch { x: 2, y: 1 })
        );
        assert_eq!(
            linear_regression(&[1.0], &[1.0]),
            Err(FitError::InsufficientData { needed: 2, got: 1 })
        );
        assert!(matches!(
            linear_regression(&[2.0, 2.0], &[1.0, 3.0]),
            Err(FitError::Degenerate(_))
        ));
    }
}
