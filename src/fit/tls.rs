//! Total-least-squares line fitting.
//!
//! The best line under perpendicular (L2) distance passes through the centroid
//! of the points and runs along the principal eigenvector of their 2x2
//! covariance. The smaller eigenvalue is the mean squared perpendicular
//! residual. Unlike a `y = a x + b` regression this stays well conditioned
//! when the points line up vertically.

use crate::types::LineEquation;
use nalgebra::{Matrix2, Point2, SymmetricEigen, Vector2};

const EPS: f64 = 1e-12;

/// Direction + point representation of a fitted line.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LineFit {
    /// Unit direction along the line.
    pub direction: Vector2<f64>,
    /// Centroid of the fitted points; lies on the line.
    pub centroid: Point2<f64>,
    /// Root mean squared perpendicular distance of the points to the line.
    pub rms_residual: f64,
}

impl LineFit {
    /// `dy / dx` of the direction. Infinite for a vertical line.
    pub fn slope(&self) -> f64 {
        self.direction.y / self.direction.x
    }

    pub fn to_equation(&self) -> LineEquation {
        LineEquation::new(self.slope(), self.centroid)
    }
}

/// Fit a line minimizing the sum of squared perpendicular distances.
///
/// Returns `None` for fewer than two points or when every point coincides,
/// since the direction is then undetermined.
pub fn fit_line_tls(points: &[Point2<f64>]) -> Option<LineFit> {
    if points.len() < 2 {
        return None;
    }
    let n = points.len() as f64;
    let (sum_x, sum_y) = points
        .iter()
        .fold((0.0f64, 0.0f64), |(sx, sy), p| (sx + p.x, sy + p.y));
    let centroid = Point2::new(sum_x / n, sum_y / n);
    if !centroid.x.is_finite() || !centroid.y.is_finite() {
        return None;
    }

    let mut cxx = 0.0f64;
    let mut cxy = 0.0f64;
    let mut cyy = 0.0f64;
    for p in points {
        let dx = p.x - centroid.x;
        let dy = p.y - centroid.y;
        cxx += dx * dx;
        cxy += dx * dy;
        cyy += dy * dy;
    }
    let cov = Matrix2::new(cxx / n, cxy / n, cxy / n, cyy / n);
    let eig = SymmetricEigen::new(cov);
    let (major, lambda_max, lambda_min) = if eig.eigenvalues[0] >= eig.eigenvalues[1] {
        (eig.eigenvectors.column(0), eig.eigenvalues[0], eig.eigenvalues[1])
    } else {
        (eig.eigenvectors.column(1), eig.eigenvalues[1], eig.eigenvalues[0])
    };
    if !lambda_max.is_finite() || lambda_max <= EPS {
        return None;
    }

    let direction = Vector2::new(major[0], major[1]);
    let norm = direction.norm();
    if !norm.is_finite() || norm < 1e-9 {
        return None;
    }

    Some(LineFit {
        direction: direction / norm,
        centroid,
        rms_residual: lambda_min.max(0.0).sqrt(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn perp_distance(fit: &LineFit, p: &Point2<f64>) -> f64 {
        let d = *p - fit.centroid;
        (d.x * fit.direction.y - d.y * fit.direction.x).abs()
    }

    #[test]
    fn collinear_points_have_zero_residual() {
        let points = [
            Point2::new(300.0, 700.0),
            Point2::new(100.0, 500.0),
            Point2::new(200.0, 600.0),
            Point2::new(250.0, 650.0),
        ];
        let fit = fit_line_tls(&points).expect("fit");
        assert!((fit.slope() - 1.0).abs() < 1e-9, "slope={}", fit.slope());
        assert!(fit.rms_residual < 1e-6);
        for p in &points {
            assert!(perp_distance(&fit, p) < 1e-6, "p={p:?}");
        }
        let line = fit.to_equation();
        for p in &points {
            assert!((line.y_at(p.x) - p.y).abs() < 1e-6);
        }
    }

    #[test]
    fn vertical_points_are_fit_without_blowing_up() {
        let points = [
            Point2::new(50.0, 0.0),
            Point2::new(50.0, 100.0),
            Point2::new(50.0, 200.0),
        ];
        let fit = fit_line_tls(&points).expect("fit");
        assert!(fit.direction.x.abs() < 1e-9);
        assert!((fit.direction.y.abs() - 1.0).abs() < 1e-9);
        assert!((fit.centroid.x - 50.0).abs() < 1e-9);
        assert!(fit.slope().abs() > 1e6);
    }

    #[test]
    fn perpendicular_fit_differs_from_vertical_regression() {
        // Symmetric noise around y = x; TLS recovers the diagonal exactly.
        let points = [
            Point2::new(0.0, 1.0),
            Point2::new(1.0, 0.0),
            Point2::new(10.0, 11.0),
            Point2::new(11.0, 10.0),
        ];
        let fit = fit_line_tls(&points).expect("fit");
        assert!((fit.slope() - 1.0).abs() < 1e-9, "slope={}", fit.slope());
        assert!(fit.rms_residual > 0.0);
    }

    #[test]
    fn too_few_or_coincident_points_are_rejected() {
        assert!(fit_line_tls(&[]).is_none());
        assert!(fit_line_tls(&[Point2::new(1.0, 2.0)]).is_none());
        assert!(fit_line_tls(&[Point2::new(3.0, 3.0), Point2::new(3.0, 3.0)]).is_none());
    }
}
