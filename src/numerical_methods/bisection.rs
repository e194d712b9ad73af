//! Square root by bisection.
//!
//! The root is kept inside a bracketing interval `[low, high]` with
//! `low² ≤ x ≤ high²`. Each iteration halves the interval, so the number of
//! iterations is known up front and convergence does not depend on a good
//! initial guess.

use num_traits::Float;

use super::{
    common::{is_trivial_radicand, validate_radicand, SolverError, SolverParams},
    monitor::{ConvergenceMonitor, NoOperationMonitor},
};

/// Interval `[low, high]` known to contain the square root of the radicand.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct BracketingInterval<T> {
    pub low: T,
    pub high: T,
}

impl<T: Float> BracketingInterval<T> {
    /// `[0, max(1, x)]`: for `x ≤ 1` the root is at most one, otherwise it is
    /// below `x` itself.
    pub fn initial(x: T) -> BracketingInterval<T> {
        BracketingInterval {
            low: T::zero(),
            high: T::one().max(x),
        }
    }

    pub fn width(&self) -> T {
        self.high - self.low
    }

    pub fn midpoint(&self) -> T {
        (self.low + self.high) / (T::one() + T::one())
    }

    pub fn contains_root_of(&self, x: T) -> bool {
        self.low * self.low <= x && x <= self.high * self.high
    }

    /// Keeps whichever half still brackets the root of `x`.
    pub fn bisect(&self, x: T) -> BracketingInterval<T> {
        let mid = self.midpoint();
        if mid * mid < x {
            BracketingInterval {
                low: mid,
                high: self.high,
            }
        } else {
            BracketingInterval {
                low: self.low,
                high: mid,
            }
        }
    }
}

/// Number of halvings needed before the initial interval for `x` is no wider
/// than `tolerance`, i.e. `⌈log2((high₀ − low₀) / tolerance)⌉`.
///
/// Counted by repeated halving rather than through `log2`, so the result
/// matches the solver exactly.
pub fn iterations_required<T: Float>(x: T, tolerance: T) -> u32 {
    let two = T::one() + T::one();
    let mut width = BracketingInterval::initial(x).width();
    let mut count = 0;
    while width > tolerance && width > T::zero() {
        width = width / two;
        count += 1;
    }
    count
}

/// Approximates `√x` to within `params.tolerance`.
///
/// The tolerance is absolute. Once it drops below one ulp of `√x` the
/// interval stops shrinking and the call fails with `ConvergenceFailure`,
/// e.g. for `x = 1e300` with the default tolerance of 0.01.
///
/// ```
/// use square_root_solver::numerical_methods::{bisection::sqrt_bisection, common::SolverParams};
///
/// let root = sqrt_bisection(2.0, &SolverParams::new(1e-7, 50)).unwrap();
/// assert!((root - 2.0_f64.sqrt()).abs() <= 1e-7);
/// ```
pub fn sqrt_bisection<T: Float>(x: T, params: &SolverParams) -> Result<T, SolverError> {
    sqrt_bisection_with_monitor(x, params, &mut NoOperationMonitor)
}

pub fn sqrt_bisection_with_monitor<T, M>(
    x: T,
    params: &SolverParams,
    monitor: &mut M,
) -> Result<T, SolverError>
where
    T: Float,
    M: ConvergenceMonitor<T>,
{
    let result = bisection_search(x, params, monitor);
    if let Err(err) = &result {
        monitor.on_failure(err);
    }
    result
}

fn bisection_search<T, M>(x: T, params: &SolverParams, monitor: &mut M) -> Result<T, SolverError>
where
    T: Float,
    M: ConvergenceMonitor<T>,
{
    validate_radicand(x)?;
    let tolerance = params.tolerance_as::<T>()?;

    monitor.on_start(x);
    if is_trivial_radicand(x) {
        monitor.on_converged(x, x, 0);
        return Ok(x);
    }

    let mut interval = BracketingInterval::initial(x);
    for iteration in 0..params.max_iterations {
        let mid = interval.midpoint();
        let width = interval.width();
        monitor.on_iteration(iteration, mid, width);
        if width <= tolerance {
            monitor.on_converged(x, mid, iteration);
            return Ok(mid);
        }
        interval = interval.bisect(x);
    }

    Err(SolverError::ConvergenceFailure {
        max_iterations: params.max_iterations,
    })
}
