//! Uniformly gridded depth field with bilinear sampling.

use swellray_core::{Bathymetry, DomainError, Extent, LoadError};

/// Relative tolerance for accepting an axis as uniformly spaced.
const SPACING_TOLERANCE: f64 = 0.005;

/// A depth field sampled on a regular cartesian grid.
///
/// Depth values are stored row-major with y as the outer dimension
/// (`depth[iy * nx + ix]`), matching the `depth(y, x)` layout of the
/// on-disk format. Depth between grid nodes is bilinear within each
/// cell, which makes the sampled surface continuous everywhere — a
/// requirement for the integrator, since depth jumps would masquerade
/// as phantom boundary contacts.
///
/// Queries up to one cell outside the axis range are clamped onto the
/// edge cell; queries further out return [`DomainError`]. Immutable
/// after construction and `Sync`.
#[derive(Clone, Debug)]
pub struct GridBathymetry {
    x0: f64,
    dx: f64,
    nx: usize,
    y0: f64,
    dy: f64,
    ny: usize,
    depth: Vec<f64>,
}

impl GridBathymetry {
    /// Build a grid from coordinate axes and a flat depth array.
    ///
    /// Axes must be strictly increasing and uniformly spaced within
    /// 0.5%; `depth` must hold `x_axis.len() * y_axis.len()` values in
    /// row-major order with y outer.
    ///
    /// # Errors
    ///
    /// [`LoadError::AxisTooShort`], [`LoadError::NonMonotonicAxis`],
    /// [`LoadError::IrregularAxis`], or [`LoadError::ShapeMismatch`]
    /// when the inputs do not describe a regular grid.
    pub fn from_parts(
        x_axis: &[f64],
        y_axis: &[f64],
        depth: Vec<f64>,
    ) -> Result<Self, LoadError> {
        let (x0, dx) = axis_spacing("x", x_axis)?;
        let (y0, dy) = axis_spacing("y", y_axis)?;
        let expected = x_axis.len() * y_axis.len();
        if depth.len() != expected {
            return Err(LoadError::ShapeMismatch {
                expected,
                actual: depth.len(),
            });
        }
        Ok(Self {
            x0,
            dx,
            nx: x_axis.len(),
            y0,
            dy,
            ny: y_axis.len(),
            depth,
        })
    }

    /// Grid dimensions as `(nx, ny)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.nx, self.ny)
    }

    fn node(&self, ix: usize, iy: usize) -> f64 {
        self.depth[iy * self.nx + ix]
    }

    fn grid_extent(&self) -> Extent {
        Extent {
            x_min: self.x0,
            x_max: self.x0 + (self.nx - 1) as f64 * self.dx,
            y_min: self.y0,
            y_max: self.y0 + (self.ny - 1) as f64 * self.dy,
            dx: self.dx,
            dy: self.dy,
        }
    }

    /// Locate the cell containing `v` along one axis and the fractional
    /// offset within it. Out-of-range values clamp onto the edge cell,
    /// with the fraction clamped to [0, 1].
    fn cell(v: f64, origin: f64, spacing: f64, n: usize) -> (usize, f64) {
        let pos = (v - origin) / spacing;
        let idx = (pos.floor() as isize).clamp(0, n as isize - 2) as usize;
        let frac = (pos - idx as f64).clamp(0.0, 1.0);
        (idx, frac)
    }

    /// Bilinear depth and analytic cell gradient at `(x, y)`.
    fn sample(&self, x: f64, y: f64) -> Result<(f64, (f64, f64)), DomainError> {
        let extent = self.grid_extent();
        if !(x.is_finite() && y.is_finite()) || !extent.contains_with_margin(x, y) {
            return Err(DomainError { x, y, extent });
        }

        let (ix, fx) = Self::cell(x, self.x0, self.dx, self.nx);
        let (iy, fy) = Self::cell(y, self.y0, self.dy, self.ny);

        let h00 = self.node(ix, iy);
        let h10 = self.node(ix + 1, iy);
        let h01 = self.node(ix, iy + 1);
        let h11 = self.node(ix + 1, iy + 1);

        let h = h00 * (1.0 - fx) * (1.0 - fy)
            + h10 * fx * (1.0 - fy)
            + h01 * (1.0 - fx) * fy
            + h11 * fx * fy;
        let dh_dx = ((h10 - h00) * (1.0 - fy) + (h11 - h01) * fy) / self.dx;
        let dh_dy = ((h01 - h00) * (1.0 - fx) + (h11 - h10) * fx) / self.dy;

        Ok((h, (dh_dx, dh_dy)))
    }
}

impl Bathymetry for GridBathymetry {
    fn depth(&self, x: f64, y: f64) -> Result<f64, DomainError> {
        self.sample(x, y).map(|(h, _)| h)
    }

    fn depth_and_gradient(&self, x: f64, y: f64) -> Result<(f64, (f64, f64)), DomainError> {
        self.sample(x, y)
    }

    fn extent(&self) -> Option<Extent> {
        Some(self.grid_extent())
    }
}

/// Validate one coordinate axis and return `(origin, spacing)`.
fn axis_spacing(name: &'static str, axis: &[f64]) -> Result<(f64, f64), LoadError> {
    if axis.len() < 2 {
        return Err(LoadError::AxisTooShort {
            axis: name,
            len: axis.len(),
        });
    }
    let spacing = axis[1] - axis[0];
    if !(spacing.is_finite() && spacing > 0.0) {
        return Err(LoadError::NonMonotonicAxis { axis: name });
    }
    for pair in axis.windows(2) {
        let step = pair[1] - pair[0];
        if step <= 0.0 {
            return Err(LoadError::NonMonotonicAxis { axis: name });
        }
        if ((step - spacing) / spacing).abs() > SPACING_TOLERANCE {
            return Err(LoadError::IrregularAxis { axis: name });
        }
    }
    Ok((axis[0], spacing))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ramp_grid() -> GridBathymetry {
        // 4x3 grid, depth = 2x + 10y at the nodes.
        let xs: Vec<f64> = (0..4).map(|i| i as f64).collect();
        let ys: Vec<f64> = (0..3).map(|j| j as f64 * 2.0).collect();
        let mut depth = Vec::new();
        for &y in &ys {
            for &x in &xs {
                depth.push(2.0 * x + 10.0 * y);
            }
        }
        GridBathymetry::from_parts(&xs, &ys, depth).unwrap()
    }

    // ---------------------------------------------------------------
    // Construction validation
    // ---------------------------------------------------------------

    #[test]
    fn rejects_short_axis() {
        let err = GridBathymetry::from_parts(&[0.0], &[0.0, 1.0], vec![0.0, 0.0]).unwrap_err();
        assert_eq!(err, LoadError::AxisTooShort { axis: "x", len: 1 });
    }

    #[test]
    fn rejects_non_monotonic_axis() {
        let err =
            GridBathymetry::from_parts(&[0.0, 2.0, 1.0], &[0.0, 1.0], vec![0.0; 6]).unwrap_err();
        assert_eq!(err, LoadError::NonMonotonicAxis { axis: "x" });
    }

    #[test]
    fn rejects_irregular_axis() {
        let err =
            GridBathymetry::from_parts(&[0.0, 1.0, 3.0], &[0.0, 1.0], vec![0.0; 6]).unwrap_err();
        assert_eq!(err, LoadError::IrregularAxis { axis: "x" });
    }

    #[test]
    fn rejects_shape_mismatch() {
        let err =
            GridBathymetry::from_parts(&[0.0, 1.0], &[0.0, 1.0], vec![0.0; 5]).unwrap_err();
        assert_eq!(
            err,
            LoadError::ShapeMismatch {
                expected: 4,
                actual: 5
            }
        );
    }

    // ---------------------------------------------------------------
    // Sampling
    // ---------------------------------------------------------------

    #[test]
    fn bilinear_reproduces_linear_surface_exactly() {
        let grid = ramp_grid();
        // A bilinear interpolant is exact on a linear surface,
        // including between nodes.
        for &(x, y) in &[(0.5, 0.0), (1.25, 1.5), (2.9, 3.999), (0.0, 4.0)] {
            let (h, (gx, gy)) = grid.depth_and_gradient(x, y).unwrap();
            assert!(
                (h - (2.0 * x + 10.0 * y)).abs() < 1e-12,
                "depth at ({x}, {y}) should be {}, got {h}",
                2.0 * x + 10.0 * y
            );
            assert!((gx - 2.0).abs() < 1e-12, "dh/dx should be 2, got {gx}");
            assert!((gy - 10.0).abs() < 1e-12, "dh/dy should be 10, got {gy}");
        }
    }

    #[test]
    fn repeated_queries_are_identical() {
        let grid = ramp_grid();
        let a = grid.depth_and_gradient(1.3, 2.7).unwrap();
        let b = grid.depth_and_gradient(1.3, 2.7).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn depth_is_continuous_across_cell_boundaries() {
        let grid = ramp_grid();
        let eps = 1e-9;
        // Node x = 1 is a cell boundary; approach from both sides.
        let below = grid.depth(1.0 - eps, 1.0).unwrap();
        let above = grid.depth(1.0 + eps, 1.0).unwrap();
        assert!(
            (below - above).abs() < 1e-6,
            "depth jump across cell edge: {below} vs {above}"
        );
    }

    #[test]
    fn margin_queries_clamp_onto_edge_cell() {
        let grid = ramp_grid();
        // x range is [0, 3] with dx = 1; x = -0.5 is inside the margin.
        let h = grid.depth(-0.5, 0.0).unwrap();
        assert!(
            (h - 0.0).abs() < 1e-12,
            "clamped edge value should be the x=0 node, got {h}"
        );
        let h = grid.depth(3.8, 0.0).unwrap();
        assert!((h - 6.0).abs() < 1e-12, "clamped to x=3 node, got {h}");
    }

    #[test]
    fn beyond_margin_is_out_of_domain() {
        let grid = ramp_grid();
        assert!(grid.depth(-1.5, 0.0).is_err());
        assert!(grid.depth(0.0, 4.0 + 2.5).is_err());
        assert!(grid.depth(f64::NAN, 0.0).is_err());
    }

    #[test]
    fn extent_reports_grid_coverage() {
        let grid = ramp_grid();
        let e = grid.extent().unwrap();
        assert_eq!(e.x_min, 0.0);
        assert_eq!(e.x_max, 3.0);
        assert_eq!(e.y_max, 4.0);
        assert_eq!(e.dy, 2.0);
    }
}
