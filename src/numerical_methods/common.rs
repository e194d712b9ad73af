// Shared types for the square root solvers: parameters, errors, and the
// method selector used by the CLI and the batch driver.

use num_traits::Float;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{
    bisection::sqrt_bisection_with_monitor,
    monitor::{ConvergenceMonitor, NoOperationMonitor},
    newton::sqrt_newton_with_monitor,
};

pub const DEFAULT_TOLERANCE: f64 = 0.01;
pub const DEFAULT_MAX_ITERATIONS: u32 = 1000;

pub const NEGATIVE_RADICAND: &str = "square root of a negative number is undefined over the reals";
pub const NON_FINITE_RADICAND: &str = "square root is only defined for finite real numbers";

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SolverError {
    /// The radicand is negative, NaN, or infinite. Checked before any iteration.
    #[error("invalid argument {value}: {reason}")]
    InvalidArgument { value: f64, reason: &'static str },

    /// The iteration budget ran out before the convergence test passed.
    #[error("failed to converge within {max_iterations} iterations")]
    ConvergenceFailure { max_iterations: u32 },

    #[error("invalid solver parameters: {0}")]
    InvalidParameters(String),
}

/// Termination settings shared by the iterative methods.
///
/// `tolerance` bounds the width of the bracketing interval (bisection) or the
/// size of the last step (Newton-Raphson) at termination.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct SolverParams {
    pub tolerance: f64,
    pub max_iterations: u32,
}

impl Default for SolverParams {
    fn default() -> Self {
        SolverParams {
            tolerance: DEFAULT_TOLERANCE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

impl SolverParams {
    pub fn new(tolerance: f64, max_iterations: u32) -> SolverParams {
        SolverParams {
            tolerance,
            max_iterations,
        }
    }

    pub fn validate(&self) -> Result<(), SolverError> {
        if !(self.tolerance.is_finite() && self.tolerance > 0.0) {
            return Err(SolverError::InvalidParameters(format!(
                "tolerance must be positive and finite, got {}",
                self.tolerance
            )));
        }
        if self.max_iterations == 0 {
            return Err(SolverError::InvalidParameters(
                "max_iterations must be at least one".to_owned(),
            ));
        }
        Ok(())
    }

    /// Validates the parameters and converts the tolerance into the working
    /// precision of the solver.
    ///
    /// A tolerance below the smallest positive normal `T` is clamped to it,
    /// so a too-tight tolerance surfaces as `ConvergenceFailure` in every
    /// precision. One above the largest `T` is clamped to that.
    pub fn tolerance_as<T: Float>(&self) -> Result<T, SolverError> {
        self.validate()?;
        let tolerance = T::from(self.tolerance).unwrap_or_else(T::max_value);
        Ok(tolerance
            .min(T::max_value())
            .max(T::min_positive_value()))
    }
}

pub fn validate_radicand<T: Float>(x: T) -> Result<(), SolverError> {
    let value = x.to_f64().unwrap_or(f64::NAN);
    if !x.is_finite() {
        return Err(SolverError::InvalidArgument {
            value,
            reason: NON_FINITE_RADICAND,
        });
    }
    if x < T::zero() {
        return Err(SolverError::InvalidArgument {
            value,
            reason: NEGATIVE_RADICAND,
        });
    }
    Ok(())
}

/// Both zero and one are fixed points of the square root.
#[inline]
pub fn is_trivial_radicand<T: Float>(x: T) -> bool {
    x == T::zero() || x == T::one()
}

/// Square root from the floating point unit, with the same input validation
/// as the iterative methods.
pub fn sqrt_builtin<T: Float>(x: T) -> Result<T, SolverError> {
    validate_radicand(x)?;
    Ok(x.sqrt())
}

#[derive(
    Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum,
)]
#[serde(rename_all = "snake_case")]
pub enum SquareRootMethod {
    Bisection,
    Newton,
    Builtin,
}

impl SquareRootMethod {
    pub const ALL: [SquareRootMethod; 3] = [
        SquareRootMethod::Bisection,
        SquareRootMethod::Newton,
        SquareRootMethod::Builtin,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            SquareRootMethod::Bisection => "bisection",
            SquareRootMethod::Newton => "newton",
            SquareRootMethod::Builtin => "builtin",
        }
    }
}

impl std::fmt::Display for SquareRootMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

pub fn solve<T: Float>(
    method: SquareRootMethod,
    x: T,
    params: &SolverParams,
) -> Result<T, SolverError> {
    solve_with_monitor(method, x, params, &mut NoOperationMonitor)
}

pub fn solve_with_monitor<T, M>(
    method: SquareRootMethod,
    x: T,
    params: &SolverParams,
    monitor: &mut M,
) -> Result<T, SolverError>
where
    T: Float,
    M: ConvergenceMonitor<T>,
{
    match method {
        SquareRootMethod::Bisection => sqrt_bisection_with_monitor(x, params, monitor),
        SquareRootMethod::Newton => sqrt_newton_with_monitor(x, params, monitor),
        SquareRootMethod::Builtin => match sqrt_builtin(x) {
            Ok(root) => {
                monitor.on_start(x);
                monitor.on_converged(x, root, 0);
                Ok(root)
            }
            Err(err) => {
                monitor.on_failure(&err);
                Err(err)
            }
        },
    }
}
