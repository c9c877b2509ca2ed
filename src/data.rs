use anyhow::{anyhow, Result};
use serde_json::{Map, Value};

/// One source row: an ordered mapping from field name to raw JSON value.
/// Field order is preserved by serde_json's `preserve_order` feature.
pub type Record = Map<String, Value>;

/// An in-memory dataset of ad-hoc records.
///
/// The field set is derived from the first record only; later records are
/// not validated against it (missing fields simply normalize to nothing).
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    pub fields: Vec<String>,
    pub records: Vec<Record>,
}

impl Dataset {
    pub fn new(fields: Vec<String>, records: Vec<Record>) -> Self {
        Self { fields, records }
    }

    /// Build a Dataset from a JSON array of objects.
    ///
    /// An empty array yields an empty dataset (the pipeline reports it as a
    /// recoverable empty state); a non-array value or a non-object row is a
    /// structural error.
    pub fn from_json(value: &Value) -> Result<Self> {
        let array = value
            .as_array()
            .ok_or_else(|| anyhow!("Input data must be a JSON array of objects"))?;

        let mut records = Vec::with_capacity(array.len());
        for item in array {
            let obj = item
                .as_object()
                .ok_or_else(|| anyhow!("Items in array must be objects"))?;
            records.push(obj.clone());
        }

        let fields: Vec<String> = records
            .first()
            .map(|first| first.keys().cloned().collect())
            .unwrap_or_default();

        Ok(Self { fields, records })
    }

    /// The sample record used for column inference (the first row).
    pub fn sample(&self) -> Option<&Record> {
        self.records.first()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
