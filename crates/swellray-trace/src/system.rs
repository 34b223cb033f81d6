//! The coupled ray ODE system.
//!
//! Pure evaluation of `(dx/dt, dy/dt, dkx/dt, dky/dt)` from the current
//! state, the bathymetry, and the dispersion model. The system holds no
//! mutable state and never advances time; that is the integrator's job.

use swellray_core::{
    Bathymetry, Current, Derivative, Dispersion, DomainError, NumericalError, RayState,
};

use crate::policy::GROUNDING_DEPTH;

/// A failed derivative evaluation, classified by what the trace should
/// do about it.
#[derive(Clone, Debug, PartialEq)]
pub enum StepFault {
    /// A sample fell outside the field's coverage; the ray has left
    /// the domain (normal termination).
    OutOfDomain(DomainError),
    /// A sample found the bottom at or above the surface; the ray has
    /// made boundary contact and the policy should reflect it.
    Grounded,
    /// A numerical failure; the trace must stop with an error status.
    Numerical(NumericalError),
}

/// The ray equations for one bathymetry field and one dispersion model,
/// with an optional background current.
///
/// The right-hand side is
///
/// ```text
/// dx/dt  =  cg(k, h) · kx / k + U
/// dy/dt  =  cg(k, h) · ky / k + V
/// dkx/dt = −(dω/dh)(k, h) · dh/dx − kx·dU/dx − ky·dV/dx
/// dky/dt = −(dω/dh)(k, h) · dh/dy − kx·dU/dy − ky·dV/dy
/// ```
///
/// with `k = |(kx, ky)|`, `h` the interpolated depth at `(x, y)`, and
/// `(U, V)` the current there (zero when no current is attached).
pub struct RaySystem<'a> {
    bathymetry: &'a dyn Bathymetry,
    dispersion: &'a dyn Dispersion,
    current: Option<&'a dyn Current>,
}

impl<'a> RaySystem<'a> {
    /// Couple a bathymetry field with a dispersion model, in still
    /// water.
    pub fn new(bathymetry: &'a dyn Bathymetry, dispersion: &'a dyn Dispersion) -> Self {
        Self {
            bathymetry,
            dispersion,
            current: None,
        }
    }

    /// Attach a background current.
    pub fn with_current(mut self, current: &'a dyn Current) -> Self {
        self.current = Some(current);
        self
    }

    /// The depth field this system samples.
    pub fn bathymetry(&self) -> &'a dyn Bathymetry {
        self.bathymetry
    }

    /// Evaluate the time derivative at `state`.
    ///
    /// # Errors
    ///
    /// [`StepFault::Numerical`] for a non-finite state, a non-positive
    /// or non-finite wavenumber magnitude, or a non-finite result;
    /// [`StepFault::OutOfDomain`] when the position is outside the
    /// depth field or an attached current field;
    /// [`StepFault::Grounded`] when the sampled depth is at or below
    /// the grounding threshold.
    pub fn derivative(&self, state: &RayState) -> Result<Derivative, StepFault> {
        if !state.is_finite() {
            return Err(StepFault::Numerical(NumericalError::NonFiniteState {
                t: state.t,
            }));
        }
        let k = state.wavenumber();
        if !k.is_finite() || k <= 0.0 {
            return Err(StepFault::Numerical(NumericalError::InvalidWavenumber {
                k,
            }));
        }

        let (h, (dh_dx, dh_dy)) = self
            .bathymetry
            .depth_and_gradient(state.x, state.y)
            .map_err(StepFault::OutOfDomain)?;
        if h <= GROUNDING_DEPTH {
            return Err(StepFault::Grounded);
        }
        let ((u, v), (du_dx, du_dy, dv_dx, dv_dy)) = match self.current {
            Some(current) => current
                .velocity_and_gradient(state.x, state.y)
                .map_err(StepFault::OutOfDomain)?,
            None => ((0.0, 0.0), (0.0, 0.0, 0.0, 0.0)),
        };

        let cg = self.dispersion.group_speed(k, h);
        let rate = self.dispersion.depth_rate(k, h);
        let d = Derivative {
            dx_dt: cg * state.kx / k + u,
            dy_dt: cg * state.ky / k + v,
            dkx_dt: -rate * dh_dx - state.kx * du_dx - state.ky * dv_dx,
            dky_dt: -rate * dh_dy - state.kx * du_dy - state.ky * dv_dy,
        };
        if !d.is_finite() {
            return Err(StepFault::Numerical(NumericalError::NonFiniteDerivative {
                t: state.t,
            }));
        }
        Ok(d)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispersion::{ConstantSpeed, SurfaceGravity};

    /// 1000 m flat bottom for axis checks.
    struct DeepFlat;

    impl Bathymetry for DeepFlat {
        fn depth(&self, _x: f64, _y: f64) -> Result<f64, DomainError> {
            Ok(1000.0)
        }
        fn depth_and_gradient(&self, _x: f64, _y: f64) -> Result<(f64, (f64, f64)), DomainError> {
            Ok((1000.0, (0.0, 0.0)))
        }
    }

    /// Dry everywhere; every sample is a grounding contact.
    struct DryLand;

    impl Bathymetry for DryLand {
        fn depth(&self, _x: f64, _y: f64) -> Result<f64, DomainError> {
            Ok(0.0)
        }
        fn depth_and_gradient(&self, _x: f64, _y: f64) -> Result<(f64, (f64, f64)), DomainError> {
            Ok((0.0, (0.0, 1.0)))
        }
    }

    const CG_K1_H1000: f64 = 1.565247584249853;

    #[test]
    fn derivative_points_along_the_wavenumber() {
        let field = DeepFlat;
        let model = SurfaceGravity::default();
        let system = RaySystem::new(&field, &model);

        let cases = [
            (1.0, 0.0, CG_K1_H1000, 0.0),
            (0.0, 1.0, 0.0, CG_K1_H1000),
            (-1.0, 0.0, -CG_K1_H1000, 0.0),
            (0.0, -1.0, 0.0, -CG_K1_H1000),
        ];
        for (kx, ky, dx, dy) in cases {
            let d = system
                .derivative(&RayState::initial(0.0, 0.0, kx, ky))
                .unwrap();
            assert!(
                (d.dx_dt - dx).abs() < 1e-9 && (d.dy_dt - dy).abs() < 1e-9,
                "k = ({kx}, {ky}): expected velocity ({dx}, {dy}), got ({}, {})",
                d.dx_dt,
                d.dy_dt
            );
            assert_eq!(d.dkx_dt, 0.0, "flat bottom must not refract");
            assert_eq!(d.dky_dt, 0.0, "flat bottom must not refract");
        }
    }

    #[test]
    fn constant_speed_velocity_is_normalized_direction_times_c() {
        let field = DeepFlat;
        let model = ConstantSpeed::new(2.0);
        let system = RaySystem::new(&field, &model);
        let d = system
            .derivative(&RayState::initial(0.0, 0.0, 3.0, 4.0))
            .unwrap();
        assert!((d.dx_dt - 2.0 * 0.6).abs() < 1e-12);
        assert!((d.dy_dt - 2.0 * 0.8).abs() < 1e-12);
    }

    /// Uniform drift for advection checks.
    struct Drift(f64, f64);

    impl Current for Drift {
        fn velocity(&self, _x: f64, _y: f64) -> Result<(f64, f64), DomainError> {
            Ok((self.0, self.1))
        }
        fn velocity_and_gradient(
            &self,
            _x: f64,
            _y: f64,
        ) -> Result<((f64, f64), (f64, f64, f64, f64)), DomainError> {
            Ok(((self.0, self.1), (0.0, 0.0, 0.0, 0.0)))
        }
    }

    /// `u = rate * y`, `v = 0`: pure cross-flow shear.
    struct Shear(f64);

    impl Current for Shear {
        fn velocity(&self, _x: f64, y: f64) -> Result<(f64, f64), DomainError> {
            Ok((self.0 * y, 0.0))
        }
        fn velocity_and_gradient(
            &self,
            _x: f64,
            y: f64,
        ) -> Result<((f64, f64), (f64, f64, f64, f64)), DomainError> {
            Ok(((self.0 * y, 0.0), (0.0, self.0, 0.0, 0.0)))
        }
    }

    #[test]
    fn uniform_current_adds_to_the_group_velocity() {
        let field = DeepFlat;
        let model = ConstantSpeed::new(2.0);
        let drift = Drift(0.5, -0.25);
        let system = RaySystem::new(&field, &model).with_current(&drift);

        let d = system
            .derivative(&RayState::initial(0.0, 0.0, 1.0, 0.0))
            .unwrap();
        assert!((d.dx_dt - 2.5).abs() < 1e-12, "advected dx/dt, got {}", d.dx_dt);
        assert!((d.dy_dt + 0.25).abs() < 1e-12, "advected dy/dt, got {}", d.dy_dt);
        assert_eq!(
            (d.dkx_dt, d.dky_dt),
            (0.0, 0.0),
            "a uniform current must not shear the wavenumber"
        );
    }

    #[test]
    fn current_shear_refracts_the_wavenumber() {
        let field = DeepFlat;
        let model = ConstantSpeed::new(1.0);
        let shear = Shear(0.1);
        let system = RaySystem::new(&field, &model).with_current(&shear);

        // du/dy = 0.1 with k = (1, 0): dky/dt = -kx * du/dy.
        let d = system
            .derivative(&RayState::initial(0.0, 2.0, 1.0, 0.0))
            .unwrap();
        assert!((d.dx_dt - (1.0 + 0.2)).abs() < 1e-12);
        assert_eq!(d.dkx_dt, 0.0);
        assert!(
            (d.dky_dt + 0.1).abs() < 1e-12,
            "dky/dt should be -0.1, got {}",
            d.dky_dt
        );
    }

    #[test]
    fn zero_wavenumber_is_a_numerical_fault() {
        let field = DeepFlat;
        let model = SurfaceGravity::default();
        let system = RaySystem::new(&field, &model);
        let fault = system
            .derivative(&RayState::initial(0.0, 0.0, 0.0, 0.0))
            .unwrap_err();
        assert!(matches!(
            fault,
            StepFault::Numerical(NumericalError::InvalidWavenumber { .. })
        ));
    }

    #[test]
    fn non_finite_state_is_a_numerical_fault() {
        let field = DeepFlat;
        let model = SurfaceGravity::default();
        let system = RaySystem::new(&field, &model);
        let mut state = RayState::initial(0.0, 0.0, 1.0, 0.0);
        state.x = f64::NAN;
        let fault = system.derivative(&state).unwrap_err();
        assert!(matches!(
            fault,
            StepFault::Numerical(NumericalError::NonFiniteState { .. })
        ));
    }

    #[test]
    fn dry_sample_is_a_grounding_contact() {
        let field = DryLand;
        let model = SurfaceGravity::default();
        let system = RaySystem::new(&field, &model);
        let fault = system
            .derivative(&RayState::initial(0.0, 0.0, 1.0, 0.0))
            .unwrap_err();
        assert_eq!(fault, StepFault::Grounded);
    }
}
