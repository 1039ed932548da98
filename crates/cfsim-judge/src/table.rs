use std::{io, path::Path};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::{EmpiricalMean, GridRow, JudgeError, Prediction};

/// Row of the empirical means file; ratings are percentages. Other columns are ignored.
#[derive(Deserialize)]
struct HumanRow {
    human_hp: f64,
    human_cf: f64,
}

pub fn read_empirical_from<R: io::Read>(rdr: R) -> Result<Vec<EmpiricalMean>, JudgeError> {
    let mut reader = csv::ReaderBuilder::new().has_headers(true).from_reader(rdr);
    let mut out = Vec::new();
    for row in reader.deserialize() {
        let row: HumanRow = row?;
        out.push(EmpiricalMean { hypothetical: row.human_hp / 100.0, counterfactual: row.human_cf / 100.0 });
    }
    Ok(out)
}

pub fn read_empirical(path: &Path) -> Result<Vec<EmpiricalMean>> {
    let f = std::fs::File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
    read_empirical_from(f).with_context(|| format!("failed to read empirical means from {}", path.display()))
}

fn write_rows<T: Serialize>(path: &Path, rows: &[T]) -> Result<()> {
    let mut w = csv::Writer::from_path(path).with_context(|| format!("failed to create {}", path.display()))?;
    for r in rows { w.serialize(r)?; }
    w.flush()?;
    Ok(())
}

/// Columns `trial,hypothetical,counterfactual`.
pub fn write_predictions(path: &Path, rows: &[Prediction]) -> Result<()> { write_rows(path, rows) }

/// Columns `ball_noise,actuator_noise,loss`, in search order.
pub fn write_grid(path: &Path, rows: &[GridRow]) -> Result<()> { write_rows(path, rows) }
