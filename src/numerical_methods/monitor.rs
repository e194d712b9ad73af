//! Convergence monitors
//!
//! The solvers never print. Progress is reported through the
//! `ConvergenceMonitor` trait instead, so the caller decides whether the
//! iterations are logged, recorded, or ignored.
//!
//! Lifecycle: start → iteration* → {converged | failure}. Validation errors
//! skip straight to `on_failure`.

use std::io::{self, Write};

use num_traits::Float;

use super::common::SolverError;

pub trait ConvergenceMonitor<T> {
    /// Called once the inputs have been validated, before the first iteration.
    fn on_start(&mut self, _radicand: T) {}

    /// Called for every estimate the solver produces. `error_bound` is the
    /// quantity compared against the tolerance (interval width or step size).
    fn on_iteration(&mut self, _iteration: u32, _estimate: T, _error_bound: T) {}

    fn on_converged(&mut self, _radicand: T, _root: T, _iterations: u32) {}

    fn on_failure(&mut self, _error: &SolverError) {}
}

/// Ignores every event.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct NoOperationMonitor;

impl<T> ConvergenceMonitor<T> for NoOperationMonitor {}

/// Writes a small table of the iterations, followed by the result, to any
/// writer. The first write error is kept and reported by `finish`.
pub struct LogMonitor<W: Write> {
    writer: W,
    method_name: String,
    io_error: Option<io::Error>,
}

impl<W: Write> LogMonitor<W> {
    pub fn new(writer: W, method_name: &str) -> LogMonitor<W> {
        LogMonitor {
            writer,
            method_name: method_name.to_owned(),
            io_error: None,
        }
    }

    /// Returns the writer, or the first error hit while writing to it.
    pub fn finish(self) -> io::Result<W> {
        match self.io_error {
            Some(err) => Err(err),
            None => Ok(self.writer),
        }
    }

    fn emit(&mut self, line: std::fmt::Arguments) {
        if self.io_error.is_some() {
            return;
        }
        if let Err(err) = self.writer.write_fmt(line) {
            self.io_error = Some(err);
        }
    }
}

impl<T, W> ConvergenceMonitor<T> for LogMonitor<W>
where
    T: Float + std::fmt::Display + std::fmt::LowerExp,
    W: Write,
{
    fn on_start(&mut self, radicand: T) {
        let method_name = self.method_name.clone();
        self.emit(format_args!(
            "Square root of {} via {}:\n",
            radicand, method_name
        ));
        self.emit(format_args!(
            "{:>9} | {:>24} | {:>12}\n",
            "Iteration", "Estimate", "Error bound"
        ));
        self.emit(format_args!("{}\n", "-".repeat(51)));
    }

    fn on_iteration(&mut self, iteration: u32, estimate: T, error_bound: T) {
        self.emit(format_args!(
            "{:>9} | {:>24} | {:>12.3e}\n",
            iteration, estimate, error_bound
        ));
    }

    fn on_converged(&mut self, radicand: T, root: T, iterations: u32) {
        if iterations == 0 && root == radicand {
            // 0 and 1 are returned as-is, so the result is exact.
            self.emit(format_args!(
                "INFO:  The square root of {} is {}\n",
                radicand, root
            ));
            return;
        }
        self.emit(format_args!(
            "INFO:  The square root of {} is approximately {} ({} iterations)\n",
            radicand, root, iterations
        ));
    }

    fn on_failure(&mut self, error: &SolverError) {
        self.emit(format_args!("ERROR:  {}\n", error));
    }
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct TraceEntry<T> {
    pub iteration: u32,
    pub estimate: T,
    pub error_bound: T,
}

/// Keeps every event in memory.
#[derive(Clone, PartialEq, Debug)]
pub struct TraceMonitor<T> {
    pub radicand: Option<T>,
    pub entries: Vec<TraceEntry<T>>,
    pub root: Option<T>,
    pub iterations: Option<u32>,
    pub failure: Option<SolverError>,
}

impl<T> Default for TraceMonitor<T> {
    fn default() -> Self {
        TraceMonitor {
            radicand: None,
            entries: Vec::default(),
            root: None,
            iterations: None,
            failure: None,
        }
    }
}

impl<T> TraceMonitor<T> {
    pub fn new() -> TraceMonitor<T> {
        TraceMonitor::default()
    }
}

impl<T: Copy> ConvergenceMonitor<T> for TraceMonitor<T> {
    fn on_start(&mut self, radicand: T) {
        self.radicand = Some(radicand);
    }

    fn on_iteration(&mut self, iteration: u32, estimate: T, error_bound: T) {
        self.entries.push(TraceEntry {
            iteration,
            estimate,
            error_bound,
        });
    }

    fn on_converged(&mut self, _radicand: T, root: T, iterations: u32) {
        self.root = Some(root);
        self.iterations = Some(iterations);
    }

    fn on_failure(&mut self, error: &SolverError) {
        self.failure = Some(error.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numerical_methods::common::{solve_with_monitor, SolverParams, SquareRootMethod};

    #[test]
    fn log_monitor_writes_table_and_result() {
        let mut monitor = LogMonitor::new(Vec::new(), "bisection");
        ConvergenceMonitor::<f64>::on_start(&mut monitor, 2.0);
        monitor.on_iteration(0, 1.0_f64, 2.0);
        monitor.on_converged(2.0_f64, 1.5, 1);
        let text = String::from_utf8(monitor.finish().unwrap()).unwrap();

        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Square root of 2 via bisection:");
        assert!(lines[1].contains("Estimate"));
        assert!(lines[3].trim_start().starts_with('0'));
        assert_eq!(
            lines[4],
            "INFO:  The square root of 2 is approximately 1.5 (1 iterations)"
        );
    }

    #[test]
    fn log_monitor_reports_fixed_points_as_exact() {
        for &radicand in &[0.0_f64, 1.0] {
            let mut buffer = Vec::new();
            let root = solve_with_monitor(
                SquareRootMethod::Bisection,
                radicand,
                &SolverParams::default(),
                &mut LogMonitor::new(&mut buffer, "bisection"),
            )
            .unwrap();
            assert_eq!(root, radicand);

            let text = String::from_utf8(buffer).unwrap();
            assert_eq!(
                text.lines().last().unwrap(),
                format!("INFO:  The square root of {} is {}", radicand, radicand)
            );
            assert!(!text.contains("approximately"));
        }
    }

    #[test]
    fn log_monitor_reports_failures() {
        let mut monitor = LogMonitor::new(Vec::new(), "newton");
        ConvergenceMonitor::<f64>::on_failure(
            &mut monitor,
            &SolverError::ConvergenceFailure { max_iterations: 3 },
        );
        let text = String::from_utf8(monitor.finish().unwrap()).unwrap();
        assert_eq!(text, "ERROR:  failed to converge within 3 iterations\n");
    }

    struct BrokenWriter;

    impl Write for BrokenWriter {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::Other, "broken"))
        }
        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn log_monitor_keeps_first_write_error() {
        let mut monitor = LogMonitor::new(BrokenWriter, "bisection");
        ConvergenceMonitor::<f64>::on_start(&mut monitor, 2.0);
        monitor.on_converged(2.0_f64, 1.5, 1);
        assert!(monitor.finish().is_err());
    }

    #[test]
    fn trace_monitor_records_events() {
        let mut monitor = TraceMonitor::<f32>::new();
        monitor.on_start(4.0);
        monitor.on_iteration(0, 2.5, 4.0);
        monitor.on_iteration(1, 1.25, 2.0);
        monitor.on_converged(4.0, 2.0, 2);

        assert_eq!(monitor.radicand, Some(4.0));
        assert_eq!(monitor.entries.len(), 2);
        assert_eq!(monitor.entries[1].iteration, 1);
        assert_eq!(monitor.root, Some(2.0));
        assert_eq!(monitor.iterations, Some(2));
        assert!(monitor.failure.is_none());
    }
}
