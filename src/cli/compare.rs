use std::io::{self, Write};
use std::time::Duration;

use crate::cli::args::CompareArgs;
use crate::core::stopwatch::Stopwatch;
use crate::numerical_methods::{
    common::{solve_with_monitor, SolverError, SolverParams, SquareRootMethod},
    monitor::TraceMonitor,
};

/// Outcome of one method in a side-by-side comparison.
#[derive(Debug, Clone)]
pub struct MethodComparison {
    pub method: SquareRootMethod,
    pub result: Result<f64, SolverError>,
    pub iterations: Option<u32>,
    pub duration: Duration,
}

impl MethodComparison {
    /// Distance from the hardware square root, when the method succeeded.
    pub fn absolute_error(&self, value: f64) -> Option<f64> {
        self.result
            .as_ref()
            .ok()
            .map(|root| (root - value.sqrt()).abs())
    }
}

/// Runs every method on `value`, timing each one as a split of `stopwatch`.
pub fn compare_methods(
    value: f64,
    params: &SolverParams,
    stopwatch: &mut Stopwatch,
) -> Vec<MethodComparison> {
    SquareRootMethod::ALL
        .iter()
        .map(|&method| {
            let mut monitor = TraceMonitor::new();
            stopwatch.reset_split();
            let result = solve_with_monitor(method, value, params, &mut monitor);
            let duration = stopwatch.record_split(method.name().to_owned());
            MethodComparison {
                method,
                result,
                iterations: monitor.iterations,
                duration,
            }
        })
        .collect()
}

pub fn display_comparison<W: Write>(
    value: f64,
    rows: &[MethodComparison],
    writer: &mut W,
) -> io::Result<()> {
    writeln!(writer, "Square root of {}:", value)?;
    writeln!(
        writer,
        "{:<10} | {:>22} | {:>10} | {:>12} | {:>12}",
        "Method", "Root", "Iterations", "Abs. error", "Elapsed"
    )?;
    writeln!(writer, "{}", "-".repeat(78))?;
    for row in rows {
        match &row.result {
            Ok(root) => writeln!(
                writer,
                "{:<10} | {:>22} | {:>10} | {:>12.3e} | {:>12}",
                row.method.name(),
                root,
                row.iterations.unwrap_or(0),
                row.absolute_error(value).unwrap_or(f64::NAN),
                format!("{:?}", row.duration)
            )?,
            Err(err) => writeln!(writer, "{:<10} | ERROR: {}", row.method.name(), err)?,
        }
    }
    Ok(())
}

/// Compares the methods and writes the result table followed by the timing
/// summary.
pub fn report_comparison<W: Write>(
    value: f64,
    params: &SolverParams,
    writer: &mut W,
) -> io::Result<Vec<MethodComparison>> {
    let mut stopwatch = Stopwatch::new(format!("square root of {}", value));
    let rows = compare_methods(value, params, &mut stopwatch);
    display_comparison(value, &rows, writer)?;
    writeln!(writer)?;
    stopwatch.display(writer)?;
    Ok(rows)
}

pub fn run_compare(args: &CompareArgs) -> io::Result<Vec<MethodComparison>> {
    report_comparison(args.value, &args.solver.solver_params(), &mut io::stdout())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn compares_all_methods_on_twenty_five() {
        let mut stopwatch = Stopwatch::new("twenty five".to_owned());
        let rows = compare_methods(25.0, &SolverParams::new(1e-6, 1000), &mut stopwatch);
        assert_eq!(stopwatch.splits.len(), 3);
        assert_eq!(stopwatch.splits[1].name, "newton");
        assert_eq!(rows.len(), 3);
        for row in rows.iter() {
            assert_relative_eq!(*row.result.as_ref().unwrap(), 5.0, epsilon = 1e-6);
            more_asserts::assert_le!(row.absolute_error(25.0).unwrap(), 1e-6);
        }
        assert_eq!(rows[2].method, SquareRootMethod::Builtin);
        assert_eq!(rows[2].iterations, Some(0));
        // Newton needs far fewer iterations than bisection.
        more_asserts::assert_lt!(rows[1].iterations.unwrap(), rows[0].iterations.unwrap());
    }

    #[test]
    fn failures_show_up_in_the_table() {
        let mut buffer = Vec::new();
        let rows = report_comparison(-4.0, &SolverParams::default(), &mut buffer).unwrap();
        assert!(rows.iter().all(|row| row.result.is_err()));

        let text = String::from_utf8(buffer).unwrap();
        assert_eq!(text.matches("ERROR:").count(), 3);
    }

    #[test]
    fn report_ends_with_timing_summary() {
        let mut buffer = Vec::new();
        report_comparison(2.0, &SolverParams::new(1e-9, 1000), &mut buffer).unwrap();
        let text = String::from_utf8(buffer).unwrap();

        let summary: Vec<&str> = text
            .lines()
            .skip_while(|line| !line.starts_with("Stopwatch: square root of 2;"))
            .collect();
        assert_eq!(summary.len(), 4);
        for (line, method) in summary[1..].iter().zip(SquareRootMethod::ALL.iter()) {
            assert!(line.starts_with(&format!("  {}: ", method)), "{}", line);
        }
    }
}
