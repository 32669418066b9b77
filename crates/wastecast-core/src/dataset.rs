//! Historical dataset loading.
//!
//! A [`Dataset`] is loaded once at startup and never mutated afterwards.
//! It is `Clone` + `Send` + `Sync` (backed by `Arc<[HistoricalRecord]>`) and
//! can be shared across request handlers without locking.

use std::io::Read;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::info;

use crate::error::{CoreError, CoreResult};
use crate::quantity;
use crate::types::{HistoricalRecord, Prediction, Query, WasteLevel};

/// Where the historical records come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatasetSource {
    /// The reference table compiled into the binary.
    Builtin,
    /// CSV with a `menu_type,attendance,waste_level` header.
    Csv(PathBuf),
    /// JSON array of record objects.
    Json(PathBuf),
}

impl DatasetSource {
    /// Pick a source for a file by its extension.
    pub fn from_path(path: &Path) -> CoreResult<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        match ext.as_deref() {
            Some("csv") => Ok(DatasetSource::Csv(path.to_path_buf())),
            Some("json") => Ok(DatasetSource::Json(path.to_path_buf())),
            _ => Err(CoreError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

/// Immutable, ordered set of historical records.
#[derive(Debug, Clone)]
pub struct Dataset {
    records: Arc<[HistoricalRecord]>,
}

impl Dataset {
    pub fn from_records(records: Vec<HistoricalRecord>) -> Self {
        Self {
            records: records.into(),
        }
    }

    /// Load the dataset described by `source`.
    pub fn load(source: &DatasetSource) -> CoreResult<Self> {
        let dataset = match source {
            DatasetSource::Builtin => Self::builtin(),
            DatasetSource::Csv(path) => Self::from_csv_reader(std::fs::File::open(path)?)?,
            DatasetSource::Json(path) => Self::from_json_str(&std::fs::read_to_string(path)?)?,
        };
        info!(
            ?source,
            records = dataset.len(),
            menu_types = ?dataset.menu_types(),
            "historical dataset loaded"
        );
        Ok(dataset)
    }

    /// Parse CSV data. Columns are matched by header name, in any order.
    pub fn from_csv_reader<R: Read>(reader: R) -> CoreResult<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut records = Vec::new();
        for (i, row) in reader.deserialize::<HistoricalRecord>().enumerate() {
            let record = row.map_err(|e| CoreError::Dataset {
                row: i + 1,
                reason: e.to_string(),
            })?;
            records.push(record);
        }
        Ok(Self::from_records(records))
    }

    /// Parse a JSON array of `{menu_type, attendance, waste_level}` objects.
    pub fn from_json_str(content: &str) -> CoreResult<Self> {
        let rows: Vec<serde_json::Value> =
            serde_json::from_str(content).map_err(|e| CoreError::Dataset {
                row: 0,
                reason: e.to_string(),
            })?;

        let records = rows
            .into_iter()
            .enumerate()
            .map(|(i, row)| {
                serde_json::from_value::<HistoricalRecord>(row).map_err(|e| CoreError::Dataset {
                    row: i + 1,
                    reason: e.to_string(),
                })
            })
            .collect::<CoreResult<Vec<_>>>()?;
        Ok(Self::from_records(records))
    }

    /// Reference history: five attendance points for each of three menus.
    pub fn builtin() -> Self {
        use WasteLevel::*;
        const TABLE: [(&str, u32, WasteLevel); 15] = [
            ("veg", 50, Low),
            ("veg", 80, Low),
            ("veg", 120, Medium),
            ("veg", 150, Medium),
            ("veg", 200, High),
            ("nonveg", 50, Low),
            ("nonveg", 80, Medium),
            ("nonveg", 120, Medium),
            ("nonveg", 150, High),
            ("nonveg", 200, High),
            ("special", 50, Medium),
            ("special", 80, Medium),
            ("special", 120, High),
            ("special", 150, High),
            ("special", 200, High),
        ];
        Self::from_records(
            TABLE
                .iter()
                .map(|&(menu, attendance, level)| HistoricalRecord::new(menu, attendance, level))
                .collect(),
        )
    }

    pub fn records(&self) -> &[HistoricalRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct menu types in first-seen order.
    pub fn menu_types(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for record in self.records.iter() {
            if !seen.contains(&record.menu_type.as_str()) {
                seen.push(&record.menu_type);
            }
        }
        seen
    }

    pub fn predict(&self, query: &Query) -> Prediction {
        quantity::predict(&self.records, query)
    }
}
