//! Classic NetCDF-3 depth-grid loader.
//!
//! The expected layout is two 1-D coordinate variables `x` and `y`
//! plus a 2-D `depth` variable with y as the outer dimension. Any
//! numeric dtype is accepted and widened to `f64`.

use std::path::Path;

use netcdf3::{DataVector, FileReader};
use swellray_core::LoadError;

use crate::grid::GridBathymetry;

/// Default coordinate and depth variable names.
const X_VAR: &str = "x";
const Y_VAR: &str = "y";
const DEPTH_VAR: &str = "depth";

impl GridBathymetry {
    /// Load a depth grid from a classic NetCDF-3 file using the
    /// default variable names (`x`, `y`, `depth`).
    ///
    /// # Errors
    ///
    /// Returns a [`LoadError`] when the path is unreadable, a variable
    /// is missing, or the contents do not describe a regular grid.
    pub fn load(path: &Path) -> Result<Self, LoadError> {
        Self::load_named(path, X_VAR, Y_VAR, DEPTH_VAR)
    }

    /// Load a depth grid with caller-chosen variable names.
    ///
    /// # Errors
    ///
    /// Same as [`load`](Self::load).
    pub fn load_named(
        path: &Path,
        x_name: &str,
        y_name: &str,
        depth_name: &str,
    ) -> Result<Self, LoadError> {
        let mut reader = FileReader::open(path).map_err(|e| LoadError::Io {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        let x_axis = read_variable(&mut reader, path, x_name)?;
        let y_axis = read_variable(&mut reader, path, y_name)?;
        let depth = read_variable(&mut reader, path, depth_name)?;

        Self::from_parts(&x_axis, &y_axis, depth)
    }
}

/// Read one variable and widen it to `f64` regardless of stored dtype.
///
/// A variable absent from the file header is [`LoadError::MissingVariable`];
/// a variable that is declared but cannot be read back is [`LoadError::Io`].
fn read_variable(reader: &mut FileReader, path: &Path, name: &str) -> Result<Vec<f64>, LoadError> {
    if !reader.data_set().has_var(name) {
        return Err(LoadError::MissingVariable {
            name: name.to_string(),
        });
    }
    let var = reader.read_var(name).map_err(|e| LoadError::Io {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    Ok(widen(var))
}

fn widen(var: DataVector) -> Vec<f64> {
    match var {
        DataVector::I8(v) => v.into_iter().map(f64::from).collect(),
        DataVector::U8(v) => v.into_iter().map(f64::from).collect(),
        DataVector::I16(v) => v.into_iter().map(f64::from).collect(),
        DataVector::I32(v) => v.into_iter().map(f64::from).collect(),
        DataVector::F32(v) => v.into_iter().map(f64::from).collect(),
        DataVector::F64(v) => v,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_is_an_io_error() {
        let err = GridBathymetry::load(Path::new("/nonexistent/bathy.nc")).unwrap_err();
        assert!(
            matches!(err, LoadError::Io { .. }),
            "expected Io error, got {err:?}"
        );
    }
}
