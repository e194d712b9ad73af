use clap::Parser;
use square_root_solver::cli::{
    args::{CommandsEnum, CompareArgs, SolverOptions, SquareRootSolverArgs, DEFAULT_RADICAND},
    batch::run_batch_from_file,
    compare::run_compare,
    solve::run_solve,
};
use square_root_solver::numerical_methods::common::{DEFAULT_MAX_ITERATIONS, DEFAULT_TOLERANCE};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: SquareRootSolverArgs = SquareRootSolverArgs::parse();

    match &args.command {
        Some(CommandsEnum::Solve(params)) => {
            run_solve(params)?;
        }

        Some(CommandsEnum::Compare(params)) => {
            run_compare(params)?;
        }

        Some(CommandsEnum::Batch(params)) => {
            run_batch_from_file(params)?;
        }

        None => {
            println!("Default command (nothing specified!): comparing methods");
            run_compare(&CompareArgs {
                value: DEFAULT_RADICAND,
                solver: SolverOptions {
                    tolerance: DEFAULT_TOLERANCE,
                    max_iterations: DEFAULT_MAX_ITERATIONS,
                },
            })?;
        }
    }
    Ok(())
}
