//! Dispersion models for the traced medium.
//!
//! Each model fixes how wavenumber magnitude and local depth map to
//! group speed (ray advance) and to the depth sensitivity that drives
//! refraction. Models are pure and stateless; the integrator never
//! needs to know which one it is driving.

use swellray_core::Dispersion;

/// Standard gravity used by the default model, m/s².
pub const GRAVITY: f64 = 9.8;

/// Surface gravity waves over finite depth.
///
/// Intrinsic frequency `ω² = g·k·tanh(k·h)`. Group speed follows from
/// `dω/dk`; the refraction term from `dω/dh`. In deep water
/// (`k·h ≫ 1`) the depth sensitivity vanishes and rays run straight;
/// in shallow water the group speed collapses toward `√(g·h)` and rays
/// bend up-slope.
#[derive(Clone, Copy, Debug)]
pub struct SurfaceGravity {
    gravity: f64,
}

impl SurfaceGravity {
    /// A model with the given gravitational acceleration.
    pub fn new(gravity: f64) -> Self {
        Self { gravity }
    }
}

impl Default for SurfaceGravity {
    fn default() -> Self {
        Self::new(GRAVITY)
    }
}

impl Dispersion for SurfaceGravity {
    fn group_speed(&self, k: f64, h: f64) -> f64 {
        let g = self.gravity;
        let kh = k * h;
        (g / 2.0) * ((kh.tanh() + kh / kh.cosh().powi(2)) / (g * k * kh.tanh()).sqrt())
    }

    fn depth_rate(&self, k: f64, h: f64) -> f64 {
        let g = self.gravity;
        let kh = k * h;
        // dω/dh = g·k² / (2·ω·cosh²(kh)); overflow of sinh/cosh in deep
        // water drives this to zero, which is the correct limit.
        0.5 * k * (g * k * kh.tanh()).sqrt() / (kh.sinh() * kh.cosh())
    }

    fn name(&self) -> &'static str {
        "surface-gravity"
    }
}

/// A non-dispersive medium with a fixed phase and group speed.
///
/// `ω = c·k`: the group speed is `c` at every depth, the depth
/// sensitivity is zero, and rays travel in straight lines. Useful as a
/// control model and as the simplest acoustic approximation.
#[derive(Clone, Copy, Debug)]
pub struct ConstantSpeed {
    speed: f64,
}

impl ConstantSpeed {
    /// A medium with group speed `speed` m/s everywhere.
    pub fn new(speed: f64) -> Self {
        Self { speed }
    }
}

impl Dispersion for ConstantSpeed {
    fn group_speed(&self, _k: f64, _h: f64) -> f64 {
        self.speed
    }

    fn depth_rate(&self, _k: f64, _h: f64) -> f64 {
        0.0
    }

    fn name(&self) -> &'static str {
        "constant-speed"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Reference group speeds at h = 1000 m, computed independently.
    const DEEP_REFERENCE: [(f64, f64); 4] = [
        (1.0, 1.565247584249853),
        (3.0, 0.9036961141150639),
        (5.0, 0.7),
        (10.0, 0.4949747468305833),
    ];

    #[test]
    fn group_speed_matches_reference_values() {
        let model = SurfaceGravity::default();
        for (k, expected) in DEEP_REFERENCE {
            let cg = model.group_speed(k, 1000.0);
            assert!(
                (cg - expected).abs() < 1e-4,
                "cg(k = {k}, h = 1000) should be {expected}, got {cg}"
            );
        }
    }

    #[test]
    fn shallow_group_speed_approaches_sqrt_gh() {
        let model = SurfaceGravity::default();
        // kh = 0.1: cg is within 2% of the shallow-water limit.
        let cg = model.group_speed(1.0, 0.1);
        let limit = (GRAVITY * 0.1).sqrt();
        assert!(
            (cg - limit).abs() / limit < 0.02,
            "cg = {cg} should approach sqrt(gh) = {limit}"
        );
    }

    #[test]
    fn deep_water_depth_rate_vanishes() {
        let model = SurfaceGravity::default();
        let rate = model.depth_rate(1000.0, 1000.0);
        assert!(
            rate.abs() < f64::EPSILON,
            "deep-water depth rate should be 0, got {rate}"
        );
    }

    #[test]
    fn depth_rate_is_positive_in_shallow_water() {
        let model = SurfaceGravity::default();
        // Frequency rises with depth at fixed k, so dω/dh > 0.
        let rate = model.depth_rate(1.0, 2.0);
        assert!(rate > 0.0, "shallow depth rate should be positive, got {rate}");
        assert!(rate.is_finite());
    }

    #[test]
    fn constant_speed_is_depth_independent() {
        let model = ConstantSpeed::new(1500.0);
        assert_eq!(model.group_speed(0.5, 10.0), 1500.0);
        assert_eq!(model.group_speed(7.0, 4000.0), 1500.0);
        assert_eq!(model.depth_rate(0.5, 10.0), 0.0);
    }
}
