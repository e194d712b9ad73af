use clap::{Args, Parser, Subcommand};

use crate::numerical_methods::common::{
    SolverParams, SquareRootMethod, DEFAULT_MAX_ITERATIONS, DEFAULT_TOLERANCE,
};

/// Radicand used when no command is given, and the default for `compare`.
pub const DEFAULT_RADICAND: f64 = 25.0;

#[derive(Debug, Parser)]
#[clap(author, version, about)]
pub struct SquareRootSolverArgs {
    #[command(subcommand)]
    pub command: Option<CommandsEnum>,
}

#[derive(Debug, Subcommand)]
pub enum CommandsEnum {
    /// Approximate a single square root.
    Solve(SolveArgs),
    /// Run every method on the same radicand and tabulate the results.
    Compare(CompareArgs),
    /// Solve every radicand listed in a JSON parameter file.
    Batch(ParameterFilePath),
}

#[derive(Debug, Args)]
pub struct SolverOptions {
    #[clap(long, short, default_value_t = DEFAULT_TOLERANCE)]
    pub tolerance: f64,

    #[clap(long, short, default_value_t = DEFAULT_MAX_ITERATIONS)]
    pub max_iterations: u32,
}

impl SolverOptions {
    pub fn solver_params(&self) -> SolverParams {
        SolverParams::new(self.tolerance, self.max_iterations)
    }
}

#[derive(Debug, Args)]
pub struct SolveArgs {
    #[clap(allow_negative_numbers = true)]
    pub value: f64,

    #[command(flatten)]
    pub solver: SolverOptions,

    #[clap(long, value_enum, default_value_t = SquareRootMethod::Bisection)]
    pub method: SquareRootMethod,

    /// Print every iteration.
    #[clap(long, short)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct CompareArgs {
    #[clap(allow_negative_numbers = true, default_value_t = DEFAULT_RADICAND)]
    pub value: f64,

    #[command(flatten)]
    pub solver: SolverOptions,
}

#[derive(Debug, Args)]
pub struct ParameterFilePath {
    pub params_path: String,

    #[clap(long, short)]
    pub date_time_out: bool,
}
