//! Batch layout of many prints from a CSV file
//!
//! Input rows are `name,size`; every other setting comes from a shared
//! [`MatOptions`]. A row that fails to parse or solve is reported in its
//! outcome and does not stop the batch.

use std::path::Path;

use crate::layout::{MatLayout, compute_layout};
use crate::options::MatOptions;
use crate::types::*;
use crate::units::{Unit, parse_dim_pair};

/// Header written by [`write_batch`]
pub const BATCH_OUTPUT_HEADER: [&str; 10] = [
    "name",
    "side_mm",
    "bottom_mm",
    "window_width_mm",
    "window_height_mm",
    "mat_width_mm",
    "mat_height_mm",
    "print_width_mm",
    "print_height_mm",
    "error",
];

#[derive(Debug, Clone, PartialEq)]
pub struct BatchJob {
    pub name: String,
    /// Dimension pair as written in the file, e.g. `9x6in`
    pub size: String,
}

#[derive(Debug)]
pub struct BatchOutcome {
    pub name: String,
    pub result: Result<MatLayout>,
}

pub async fn load_batch(path: impl AsRef<Path>) -> Result<Vec<BatchJob>> {
    let path = path.as_ref().to_owned();

    let contents = tokio::fs::read_to_string(&path).await?;

    let jobs = tokio::task::spawn_blocking(move || {
        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .from_reader(contents.as_bytes());
        let mut jobs = Vec::new();

        for result in reader.records() {
            let record = result?;
            if record.len() >= 2 {
                jobs.push(BatchJob {
                    name: record[0].trim().to_string(),
                    size: record[1].trim().to_string(),
                });
            }
        }
        Ok::<_, BorderError>(jobs)
    })
    .await??;

    Ok(jobs)
}

/// Lay out every job with `base` options, reading sizes in `default_unit`.
pub fn run_batch(jobs: &[BatchJob], base: &MatOptions, default_unit: Unit) -> Vec<BatchOutcome> {
    jobs.iter()
        .map(|job| {
            let result = parse_dim_pair(&job.size, default_unit).and_then(|size| {
                let options = MatOptions {
                    size,
                    ..base.clone()
                };
                compute_layout(&options)
            });

            if let Err(err) = &result {
                log::debug!("Batch row {:?} failed: {}", job.name, err);
            }

            BatchOutcome {
                name: job.name.clone(),
                result,
            }
        })
        .collect()
}

/// Write outcomes as CSV (millimeters). Returns the number of rows written.
pub async fn write_batch(outcomes: &[BatchOutcome], path: impl AsRef<Path>) -> Result<usize> {
    let rows: Vec<Vec<String>> = outcomes.iter().map(outcome_row).collect();
    let path = path.as_ref().to_owned();
    let count = rows.len();

    // CSV encoding is CPU-bound, spawn blocking
    let bytes = tokio::task::spawn_blocking(move || {
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer.write_record(BATCH_OUTPUT_HEADER)?;
        for row in &rows {
            writer.write_record(row)?;
        }
        let bytes = writer.into_inner().map_err(|e| e.into_error())?;
        Ok::<_, BorderError>(bytes)
    })
    .await??;

    tokio::fs::write(&path, bytes).await?;

    Ok(count)
}

fn outcome_row(outcome: &BatchOutcome) -> Vec<String> {
    let mm = |value: f64| format!("{:.3}", value);

    match &outcome.result {
        Ok(layout) => vec![
            outcome.name.clone(),
            mm(layout.borders.side),
            mm(layout.borders.bottom),
            mm(layout.window.width),
            mm(layout.window.height),
            mm(layout.mat.width),
            mm(layout.mat.height),
            mm(layout.print.width),
            mm(layout.print.height),
            String::new(),
        ],
        Err(err) => {
            let mut row = vec![outcome.name.clone()];
            row.extend(std::iter::repeat_n(String::new(), 8));
            row.push(err.to_string());
            row
        }
    }
}
