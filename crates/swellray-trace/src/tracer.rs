//! The trace loop.
//!
//! [`RayTracer`] owns nothing but references: it drives the
//! system/integrator/policy trio from a start state until the clock
//! runs out, the ray leaves the domain, or integration fails. Every
//! committed state lands in the returned [`Trace`] in order.

use smallvec::SmallVec;
use swellray_core::{NumericalError, RayState, StepContext};

use crate::integrator::Rk4;
use crate::policy::{BoundaryPolicy, Reflection, Termination, Verdict};
use crate::system::RaySystem;

/// Consecutive reflections from the same position before the trace is
/// declared stuck. A legitimate corner reflection resolves in two.
const MAX_STALLED_REFLECTIONS: usize = 4;

/// Cap on the committed-state buffer preallocation. Traces with more
/// steps than this grow the buffer as they go instead of reserving the
/// whole horizon up front.
const PREALLOC_STATES: usize = 1 << 16;

/// A completed trace: every committed state, every reflection, and how
/// it ended.
#[derive(Clone, Debug)]
pub struct Trace {
    /// Committed states in time order, starting with the initial state.
    pub states: Vec<RayState>,
    /// Bottom contacts in time order.
    pub reflections: SmallVec<[Reflection; 4]>,
    /// Why the trace stopped.
    pub termination: Termination,
}

impl Trace {
    /// The last committed state.
    ///
    /// `states` always holds at least the initial state, so this never
    /// fails.
    pub fn last(&self) -> &RayState {
        match self.states.last() {
            Some(s) => s,
            // The constructor paths all seed `states` with the start.
            None => unreachable!("trace holds at least the initial state"),
        }
    }

    /// Whether the trace ran to its end time.
    pub fn completed(&self) -> bool {
        matches!(self.termination, Termination::Completed { .. })
    }
}

/// Drives one ray from its initial state to termination.
pub struct RayTracer<'a> {
    system: RaySystem<'a>,
    policy: BoundaryPolicy,
}

impl<'a> RayTracer<'a> {
    /// A tracer over the given system with the default boundary policy.
    pub fn new(system: RaySystem<'a>) -> Self {
        Self {
            system,
            policy: BoundaryPolicy,
        }
    }

    /// Trace from `start` until `ctx` expires or the ray terminates.
    pub fn trace(&self, start: RayState, ctx: &StepContext) -> Trace {
        self.trace_with(start, ctx, |_| {})
    }

    /// Like [`trace`](Self::trace), invoking `observer` for every
    /// committed state, the initial one included.
    pub fn trace_with<F>(&self, start: RayState, ctx: &StepContext, mut observer: F) -> Trace
    where
        F: FnMut(&RayState),
    {
        let mut states =
            Vec::with_capacity(ctx.expected_steps().saturating_add(1).min(PREALLOC_STATES));
        let mut reflections: SmallVec<[Reflection; 4]> = SmallVec::new();
        observer(&start);
        states.push(start);

        let mut state = start;
        let mut stalled = 0usize;
        let termination = loop {
            let dt = ctx.dt_from(state.t);
            if dt <= 0.0 {
                break Termination::Completed {
                    reflections: reflections.len(),
                };
            }
            let attempt = Rk4::step(&self.system, &state, dt);
            match self.policy.review(self.system.bathymetry(), &state, attempt) {
                Verdict::Advance(next) => {
                    stalled = 0;
                    observer(&next);
                    states.push(next);
                    state = next;
                }
                Verdict::Reflect(contact, reflected) => {
                    stalled += 1;
                    if stalled > MAX_STALLED_REFLECTIONS {
                        break Termination::Failed(NumericalError::ReflectionLoop {
                            t: state.t,
                        });
                    }
                    reflections.push(contact);
                    state = reflected;
                }
                Verdict::Exit { x, y } => break Termination::ExitedDomain { x, y },
                Verdict::Fail(e) => break Termination::Failed(e),
            }
        };

        Trace {
            states,
            reflections,
            termination,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispersion::ConstantSpeed;
    use swellray_core::{Bathymetry, DomainError};

    struct Flat(f64);

    impl Bathymetry for Flat {
        fn depth(&self, _x: f64, _y: f64) -> Result<f64, DomainError> {
            Ok(self.0)
        }
        fn depth_and_gradient(&self, _x: f64, _y: f64) -> Result<(f64, (f64, f64)), DomainError> {
            Ok((self.0, (0.0, 0.0)))
        }
    }

    #[test]
    fn zero_end_time_completes_with_only_the_start_state() {
        let field = Flat(100.0);
        let model = ConstantSpeed::new(1.0);
        let tracer = RayTracer::new(RaySystem::new(&field, &model));
        let ctx = StepContext::new(0.1, 0.0).unwrap();

        let trace = tracer.trace(RayState::initial(1.0, 2.0, 1.0, 0.0), &ctx);
        assert_eq!(trace.states.len(), 1);
        assert_eq!(trace.termination, Termination::Completed { reflections: 0 });
    }

    #[test]
    fn final_partial_step_lands_exactly_on_end_time() {
        let field = Flat(100.0);
        let model = ConstantSpeed::new(2.0);
        let tracer = RayTracer::new(RaySystem::new(&field, &model));
        // 1.0 is not a multiple of 0.3; the last step must shrink.
        let ctx = StepContext::new(0.3, 1.0).unwrap();

        let trace = tracer.trace(RayState::initial(0.0, 0.0, 1.0, 0.0), &ctx);
        assert!(trace.completed());
        let last = trace.last();
        assert!(
            (last.t - 1.0).abs() < 1e-12,
            "trace should end at t = 1, got {}",
            last.t
        );
        assert!((last.x - 2.0).abs() < 1e-9);
    }

    #[test]
    fn observer_sees_every_committed_state() {
        let field = Flat(100.0);
        let model = ConstantSpeed::new(1.0);
        let tracer = RayTracer::new(RaySystem::new(&field, &model));
        let ctx = StepContext::new(0.25, 1.0).unwrap();

        let mut seen = Vec::new();
        let trace = tracer.trace_with(RayState::initial(0.0, 0.0, 1.0, 0.0), &ctx, |s| {
            seen.push(s.t)
        });
        assert_eq!(seen.len(), trace.states.len());
        assert_eq!(seen[0], 0.0);
    }

    #[test]
    fn nan_start_fails_without_advancing() {
        let field = Flat(100.0);
        let model = ConstantSpeed::new(1.0);
        let tracer = RayTracer::new(RaySystem::new(&field, &model));
        let ctx = StepContext::new(0.1, 1.0).unwrap();

        let mut start = RayState::initial(0.0, 0.0, 1.0, 0.0);
        start.y = f64::NAN;
        let trace = tracer.trace(start, &ctx);
        assert_eq!(trace.states.len(), 1);
        assert!(matches!(
            trace.termination,
            Termination::Failed(NumericalError::NonFiniteState { .. })
        ));
    }

    #[test]
    fn grounded_flat_start_is_a_reflection_loop() {
        // Depth 0 with zero gradient: the policy cannot build a normal.
        let field = Flat(0.0);
        let model = ConstantSpeed::new(1.0);
        let tracer = RayTracer::new(RaySystem::new(&field, &model));
        let ctx = StepContext::new(0.1, 1.0).unwrap();

        let trace = tracer.trace(RayState::initial(0.0, 0.0, 1.0, 0.0), &ctx);
        assert!(matches!(
            trace.termination,
            Termination::Failed(NumericalError::FlatGrounding { .. })
        ));
    }
}
