use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::cli::args::ParameterFilePath;
use crate::core::file_io::{
    build_output_path_with_date_time, extract_base_name, maybe_date_time_string,
    read_params_from_json, serialize_to_json, FilePrefix,
};
use crate::numerical_methods::common::{solve, SolverParams, SquareRootMethod};

/// Contents of a batch parameter file.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct BatchParams {
    pub method: SquareRootMethod,
    #[serde(default)]
    pub solver: SolverParams,
    pub radicands: Vec<f64>,
}

/// One line of the batch report. Exactly one of `root` and `error` is set.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct BatchEntry {
    pub radicand: f64,
    pub root: Option<f64>,
    pub error: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct BatchReport {
    pub params: BatchParams,
    pub results: Vec<BatchEntry>,
}

impl BatchReport {
    pub fn failure_count(&self) -> usize {
        self.results
            .iter()
            .filter(|entry| entry.error.is_some())
            .count()
    }
}

/// Solves every radicand independently, in parallel. A failing radicand is
/// recorded in its entry and does not stop the others.
pub fn solve_batch(params: &BatchParams) -> BatchReport {
    let results = params
        .radicands
        .par_iter()
        .map(|&radicand| match solve(params.method, radicand, &params.solver) {
            Ok(root) => BatchEntry {
                radicand,
                root: Some(root),
                error: None,
            },
            Err(err) => BatchEntry {
                radicand,
                root: None,
                error: Some(err.to_string()),
            },
        })
        .collect();

    BatchReport {
        params: params.clone(),
        results,
    }
}

/// Solves the batch and writes the report to `<prefix>.json`.
pub fn run_batch(
    params: &BatchParams,
    file_prefix: &FilePrefix,
) -> Result<BatchReport, Box<dyn std::error::Error>> {
    let report = solve_batch(params);
    serialize_to_json(&file_prefix.with_suffix(".json"), &report)?;
    println!(
        "INFO:  Solved {} radicands with the {} method ({} failed)",
        report.results.len(),
        params.method,
        report.failure_count()
    );
    Ok(report)
}

pub fn run_batch_from_file(
    args: &ParameterFilePath,
) -> Result<BatchReport, Box<dyn std::error::Error>> {
    let params: BatchParams = read_params_from_json(&args.params_path)?;
    let file_prefix = FilePrefix {
        directory_path: build_output_path_with_date_time(
            &args.params_path,
            "batch",
            &maybe_date_time_string(args.date_time_out),
        )?,
        file_base: extract_base_name(&args.params_path)?.to_owned(),
    };
    run_batch(&params, &file_prefix)
}
