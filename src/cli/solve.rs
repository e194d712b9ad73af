use std::io::Write;

use crate::cli::args::SolveArgs;
use crate::numerical_methods::{
    common::{solve, solve_with_monitor, SolverParams, SquareRootMethod},
    monitor::LogMonitor,
};

/// Solves a single square root and reports it to `writer`. With `verbose`
/// every iteration is written as well.
pub fn solve_and_report<W: Write>(
    value: f64,
    method: SquareRootMethod,
    params: &SolverParams,
    verbose: bool,
    writer: &mut W,
) -> Result<f64, Box<dyn std::error::Error>> {
    if verbose {
        let mut monitor = LogMonitor::new(&mut *writer, method.name());
        let result = solve_with_monitor(method, value, params, &mut monitor);
        monitor.finish()?;
        Ok(result?)
    } else {
        let root = solve(method, value, params)?;
        writeln!(writer, "{}", root)?;
        Ok(root)
    }
}

pub fn run_solve(args: &SolveArgs) -> Result<f64, Box<dyn std::error::Error>> {
    solve_and_report(
        args.value,
        args.method,
        &args.solver.solver_params(),
        args.verbose,
        &mut std::io::stdout(),
    )
}
