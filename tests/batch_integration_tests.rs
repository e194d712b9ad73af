#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use approx::assert_relative_eq;
    use square_root_solver::{
        cli::{
            args::ParameterFilePath,
            batch::{run_batch, run_batch_from_file, BatchParams, BatchReport},
        },
        core::file_io::{read_params_from_json, FilePrefix},
        numerical_methods::common::{SolverParams, SquareRootMethod},
    };

    fn build_output_path(project: &str) -> PathBuf {
        let directory_path: PathBuf = ["out", "test", project].iter().collect();
        std::fs::create_dir_all(&directory_path).unwrap();
        directory_path
    }

    #[test]
    fn test_batch_report_is_written_and_readable() {
        let params = BatchParams {
            method: SquareRootMethod::Bisection,
            solver: SolverParams::new(1e-7, 50),
            radicands: vec![2.0, 0.001, -3.0],
        };
        let file_prefix = FilePrefix {
            directory_path: build_output_path("batch_report"),
            file_base: String::from("result"),
        };
        let report = run_batch(&params, &file_prefix).unwrap();

        let path = file_prefix.with_suffix(".json");
        let from_disk: BatchReport = read_params_from_json(path.to_str().unwrap()).unwrap();
        assert_eq!(from_disk.params.method, report.params.method);
        assert_eq!(from_disk.results.len(), report.results.len());
        for (read, written) in from_disk.results.iter().zip(report.results.iter()) {
            assert_eq!(read.error, written.error);
            if let (Some(read_root), Some(written_root)) = (read.root, written.root) {
                assert_relative_eq!(read_root, written_root, max_relative = 1e-15);
            }
        }
        assert_eq!(from_disk.failure_count(), 1);
        assert_relative_eq!(
            from_disk.results[0].root.unwrap(),
            1.4142135623,
            epsilon = 1e-7
        );
    }

    #[test]
    fn test_batch_from_parameter_file() {
        let report = run_batch_from_file(&ParameterFilePath {
            params_path: String::from("params/batch/newton.json"),
            date_time_out: false,
        })
        .unwrap();
        assert_eq!(report.params.method, SquareRootMethod::Newton);
        assert_eq!(report.failure_count(), 1);
        assert_relative_eq!(
            report.results[2].root.unwrap(),
            101.16323442832382,
            epsilon = 1e-9
        );
        assert!(PathBuf::from("out/batch/newton/newton.json").exists());
    }

    #[test]
    fn test_missing_parameter_file_is_an_error() {
        let result = run_batch_from_file(&ParameterFilePath {
            params_path: String::from("params/batch/does_not_exist.json"),
            date_time_out: false,
        });
        assert!(result.is_err());
    }
}
