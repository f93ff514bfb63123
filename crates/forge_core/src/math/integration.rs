//! Composite Simpson quadrature.

/// Integrates `f` over `[a, b]` with composite Simpson's rule.
///
/// `steps` is rounded up to the next even number (minimum 2).
///
/// # Examples
/// ```
/// use forge_core::math::integration::simpson;
///
/// let area = simpson(|x| x * x, 0.0, 3.0, 10);
/// assert!((area - 9.0).abs() < 1e-12);
/// ```
pub fn simpson<F>(f: F, a: f64, b: f64, steps: usize) -> f64
where
    F: Fn(f64) -> f64,
{
    let n = steps.max(2).next_multiple_of(2);
    let h = (b - a) / n as f64;

    let mut sum = f(a) + f(b);
    for i in 1..n {
        let weight = if i % 2 == 1 { 4.0 } else { 2.0 };
        sum += weight * f(a + i as f64 * h);
    }
    sum * h / 3.0
}

/// Running integral of `f` on an evenly spaced grid over `[a, b]`.
///
/// Returns `(grid, cumulative)`, both of length `steps + 1`, with
/// `cumulative[0] == 0` and each cell integrated by Simpson's rule on its
/// midpoint. Negative cell contributions are kept as-is; callers that need
/// a monotone result must supply a non-negative integrand.
pub fn cumulative_simpson<F>(f: F, a: f64, b: f64, steps: usize) -> (Vec<f64>, Vec<f64>)
where
    F: Fn(f64) -> f64,
{
    let n = steps.max(1);
    let h = (b - a) / n as f64;

    let mut grid = Vec::with_capacity(n + 1);
    let mut cumulative = Vec::with_capacity(n + 1);
    grid.push(a);
    cumulative.push(0.0);

    let mut left = f(a);
    let mut total = 0.0;
    for i in 1..=n {
        let x0 = a + (i - 1) as f64 * h;
        let x1 = if i == n { b } else { a + i as f64 * h };
        let right = f(x1);
        total += (x1 - x0) / 6.0 * (left + 4.0 * f(0.5 * (x0 + x1)) + right);
        grid.push(x1);
        cumulative.push(total);
        left = right;
    }
    (grid, cumulative)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_simpson_exact_for_cubics() {
        let v = simpson(|x| x * x * x - 2.0 * x, -1.0, 2.0, 4);
        // ∫ x³ - 2x = [x⁴/4 - x²] from -1 to 2 = 0 - (-0.75)
        assert_relative_eq!(v, 0.75, epsilon = 1e-12);
    }

    #[test]
    fn test_simpson_odd_steps_rounded() {
        let v = simpson(f64::sin, 0.0, std::f64::consts::PI, 101);
        assert_relative_eq!(v, 2.0, epsilon = 1e-8);
    }

    #[test]
    fn test_cumulative_simpson_endpoints() {
        let (grid, cdf) = cumulative_simpson(|x| (-x).exp(), 0.0, 5.0, 200);
        assert_eq!(grid.len(), 201);
        assert_eq!(cdf.len(), 201);
        assert_eq!(grid[200], 5.0);
        assert_eq!(cdf[0], 0.0);
        assert_relative_eq!(cdf[200], 1.0 - (-5.0_f64).exp(), epsilon = 1e-9);
        assert!(cdf.windows(2).all(|w| w[0] <= w[1]));
    }
}
