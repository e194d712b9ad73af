use num_traits::Float;

use super::{
    common::{is_trivial_radicand, validate_radicand, SolverError, SolverParams},
    monitor::{ConvergenceMonitor, NoOperationMonitor},
};

pub fn newton_step<T: Float>(guess: T, x: T) -> T {
    // guess = current estimate of the root
    // x = number to compute the square root of
    //
    // want to find the solution to g^2 - x = f(g) --> 0
    // f' = 2*g
    // Newton step is:  g - f(g) / f'(g)
    let half = T::one() / (T::one() + T::one());
    half * (x / guess + guess)
}

/// Initial guess `(x + 1) / 2`. It is never below `√x`, so the iterates
/// decrease monotonically towards the root and never hit zero.
pub fn initial_guess<T: Float>(x: T) -> T {
    (x + T::one()) / (T::one() + T::one())
}

/// Newton-Raphson square root. Converges when two consecutive estimates are
/// within `params.tolerance` of each other.
pub fn sqrt_newton<T: Float>(x: T, params: &SolverParams) -> Result<T, SolverError> {
    sqrt_newton_with_monitor(x, params, &mut NoOperationMonitor)
}

pub fn sqrt_newton_with_monitor<T, M>(
    x: T,
    params: &SolverParams,
    monitor: &mut M,
) -> Result<T, SolverError>
where
    T: Float,
    M: ConvergenceMonitor<T>,
{
    let result = newton_iteration(x, params, monitor);
    if let Err(err) = &result {
        monitor.on_failure(err);
    }
    result
}

fn newton_iteration<T, M>(x: T, params: &SolverParams, monitor: &mut M) -> Result<T, SolverError>
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

    let mut guess = initial_guess(x);
    for iteration in 0..params.max_iterations {
        let next = newton_step(guess, x);
        let step = (next - guess).abs();
        monitor.on_iteration(iteration, next, step);
        if step <= tolerance {
            monitor.on_converged(x, next, iteration + 1);
            return Ok(next);
        }
        guess = next;
    }

    Err(SolverError::ConvergenceFailure {
        max_iterations: params.max_iterations,
    })
}
