use std::io::Write;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::sensitivity::SensitivityResult;

/// One CSV row per sample
#[derive(Debug, Serialize)]
struct CsvRow {
    parameter: &'static str,
    value: f64,
    price: f64,
}

const HEADER: [&str; 3] = ["parameter", "value", "price"];

/// Writes the sweep samples as CSV with header `parameter,value,price`.
///
/// The header is written even when the sweep has no samples.
pub fn write_csv<W: Write>(result: &SensitivityResult, writer: W) -> Result<()> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);
    wtr.write_record(HEADER)?;
    for sample in &result.samples {
        wtr.serialize(CsvRow {
            parameter: result.varied.key(),
            value: sample.value,
            price: sample.price,
        })?;
    }
    wtr.flush().context("failed to flush CSV output")?;
    Ok(())
}

/// Sweep samples as a CSV string.
pub fn to_csv_string(result: &SensitivityResult) -> Result<String> {
    let mut buf = Vec::new();
    write_csv(result, &mut buf)?;
    String::from_utf8(buf).context("CSV output was not valid UTF-8")
}
