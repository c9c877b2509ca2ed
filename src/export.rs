use anyhow::{Context, Result};
use serde_json::Value;
use std::io::Write;

use crate::data::Dataset;

/// Write the raw dataset as CSV: one column per field of the first record,
/// values stringified, null or missing values as empty cells. Quoting and
/// escaping are the csv writer's concern.
pub fn write_csv<W: Write>(dataset: &Dataset, writer: W) -> Result<()> {
    if dataset.fields.is_empty() {
        return Ok(());
    }
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer
        .write_record(&dataset.fields)
        .context("Failed to write CSV header")?;

    for record in &dataset.records {
        let row: Vec<String> = dataset
            .fields
            .iter()
            .map(|field| cell(record.get(field)))
            .collect();
        csv_writer.write_record(&row).context("Failed to write CSV row")?;
    }

    csv_writer.flush().context("Failed to flush CSV output")?;
    Ok(())
}

/// Convenience wrapper returning the CSV as a string.
pub fn to_csv_string(dataset: &Dataset) -> Result<String> {
    let mut out = Vec::new();
    write_csv(dataset, &mut out)?;
    String::from_utf8(out).context("CSV output was not valid UTF-8")
}

fn cell(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        Some(Value::Null) | None => String::new(),
        Some(other) => other.to_string(),
    }
}
