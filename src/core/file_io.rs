use std::io;
use std::path::{Path, PathBuf};

use serde::{de::DeserializeOwned, Serialize};

pub fn extract_base_name(path: &str) -> io::Result<&str> {
    Path::new(path)
        .file_stem() // Get the base name component of the path
        .and_then(|name| name.to_str())
        .ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("Unable to extract base name from: {}", path),
            )
        })
}

/// Builds (and creates) `out/<project>/<params base name>[/<datetime>]`.
pub fn build_output_path_with_date_time(
    params_path: &str,
    project: &str,
    datetime: &Option<String>,
) -> io::Result<PathBuf> {
    let mut dirs = vec!["out", project, extract_base_name(params_path)?];
    if let Some(inner_datetime_str) = datetime {
        dirs.push(inner_datetime_str);
    }

    let directory_path: PathBuf = dirs.iter().collect();
    std::fs::create_dir_all(&directory_path)?;
    Ok(directory_path)
}

pub fn date_time_string() -> String {
    use chrono::{Datelike, Local, Timelike};
    let local_time = Local::now();
    format!(
        "{:04}{:02}{:02}_{:02}{:02}{:02}",
        local_time.year(),
        local_time.month(),
        local_time.day(),
        local_time.hour(),
        local_time.minute(),
        local_time.second()
    )
}

pub fn maybe_date_time_string(enable: bool) -> Option<String> {
    if enable {
        Option::Some(date_time_string())
    } else {
        Option::None
    }
}

/**
 * Store a path and prefix together, making it easily to quickly generate
 * a collection of files with the same prefix, but separate suffixes.
 */
pub struct FilePrefix {
    pub directory_path: PathBuf,
    pub file_base: String,
}

impl FilePrefix {
    pub fn with_suffix(&self, suffix: &str) -> PathBuf {
        self.directory_path.join(self.file_base.clone() + suffix)
    }
}

pub fn read_params_from_json<T: DeserializeOwned>(
    params_path: &str,
) -> Result<T, Box<dyn std::error::Error>> {
    let contents = std::fs::read_to_string(params_path)
        .map_err(|err| format!("Unable to read param file {}: {}", params_path, err))?;
    Ok(serde_json::from_str(&contents)?)
}

pub fn serialize_to_json<T: Serialize>(
    path: &Path,
    value: &T,
) -> Result<(), Box<dyn std::error::Error>> {
    std::fs::write(path, serde_json::to_string_pretty(value)?)?;
    println!("INFO:  Wrote json file to: {}", path.display());
    Ok(())
}
