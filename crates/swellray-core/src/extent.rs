//! Horizontal coverage of a bathymetry field.

use std::fmt;

/// The rectangular horizontal domain covered by a bathymetry field,
/// plus the cell size that defines its extrapolation margin.
///
/// Queries up to one cell outside `[x_min, x_max] x [y_min, y_max]` are
/// answered with clamped extrapolation; anything further is out of
/// domain.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Extent {
    /// Smallest covered x coordinate.
    pub x_min: f64,
    /// Largest covered x coordinate.
    pub x_max: f64,
    /// Smallest covered y coordinate.
    pub y_min: f64,
    /// Largest covered y coordinate.
    pub y_max: f64,
    /// Grid spacing along x; also the x extrapolation margin.
    pub dx: f64,
    /// Grid spacing along y; also the y extrapolation margin.
    pub dy: f64,
}

impl Extent {
    /// Whether `(x, y)` lies inside the covered domain proper.
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.x_min && x <= self.x_max && y >= self.y_min && y <= self.y_max
    }

    /// Whether `(x, y)` lies inside the domain extended by the one-cell
    /// extrapolation margin.
    pub fn contains_with_margin(&self, x: f64, y: f64) -> bool {
        x >= self.x_min - self.dx
            && x <= self.x_max + self.dx
            && y >= self.y_min - self.dy
            && y <= self.y_max + self.dy
    }
}

impl fmt::Display for Extent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}, {}] x [{}, {}]",
            self.x_min, self.x_max, self.y_min, self.y_max
        )
    }
}
