use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use anyhow::{Context, Result};
use log::info;
use serde::de::DeserializeOwned;

use crate::domain::{Business, Review};

/// Load the business dataset from a line-delimited JSON file
pub fn load_businesses<P: AsRef<Path>>(path: P) -> Result<Vec<Business>> {
    let records = read_ndjson(path.as_ref())?;
    info!(
        "Loaded {} business records from {}",
        records.len(),
        path.as_ref().display()
    );
    Ok(records)
}

/// Load the review dataset from a line-delimited JSON file
pub fn load_reviews<P: AsRef<Path>>(path: P) -> Result<Vec<Review>> {
    let records = read_ndjson(path.as_ref())?;
    info!(
        "Loaded {} review records from {}",
        records.len(),
        path.as_ref().display()
    );
    Ok(records)
}

/// Parse one JSON record per line. A malformed line aborts the load; the
/// error carries the path and line number.
fn read_ndjson<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open dataset: {}", path.display()))?;
    let reader = BufReader::new(file);

    let mut records = Vec::new();
    for (line_no, line) in reader.lines().enumerate() {
        let line = line
            .with_context(|| format!("Failed to read line {} of {}", line_no + 1, path.display()))?;
        if line.trim().is_empty() {
            continue;
        }

        let record = serde_json::from_str(&line).with_context(|| {
            format!("Failed to parse line {} of {}", line_no + 1, path.display())
        })?;
        records.push(record);
    }

    Ok(records)
}
