use std::collections::BTreeMap;
use std::fs::{self, OpenOptions};
use std::io::{BufWriter, Write};

use anyhow::Result;
use serde_json::Value;
use shared::MonthRecord;
use tracing::warn;

use super::connection::JsonConnection;
use crate::storage::traits::MonthStorage;

/// JSON-file month repository.
///
/// The whole mapping lives in one document; every store is a synchronous
/// read-modify-rewrite of that document.
#[derive(Clone)]
pub struct MonthRepository {
    connection: JsonConnection,
}

impl MonthRepository {
    /// Create a new JSON month repository
    pub fn new(connection: JsonConnection) -> Self {
        Self { connection }
    }

    /// Read the full month mapping from the document. A missing or
    /// unreadable document yields an empty mapping, never an error.
    fn read_months(&self) -> BTreeMap<String, Value> {
        let file_path = self.connection.months_file_path();
        let raw = match fs::read_to_string(&file_path) {
            Ok(raw) => raw,
            Err(_) => return BTreeMap::new(),
        };

        match serde_json::from_str(&raw) {
            Ok(months) => months,
            Err(e) => {
                warn!(
                    "Corrupt month data in {}: {}. Starting from an empty mapping.",
                    file_path.display(),
                    e
                );
                BTreeMap::new()
            }
        }
    }

    /// Write the full month mapping with an atomic temp-file swap.
    fn write_months(&self, months: &BTreeMap<String, Value>) -> Result<()> {
        self.connection.ensure_months_file_exists()?;
        let file_path = self.connection.months_file_path();
        let temp_path = file_path.with_extension("tmp");

        {
            let file = OpenOptions::new()
                .write(true)
                .create(true)
                .truncate(true)
                .open(&temp_path)?;
            let mut writer = BufWriter::new(file);
            serde_json::to_writer_pretty(&mut writer, months)?;
            writer.flush()?;
        }

        // Atomic move from temp to final file
        fs::rename(&temp_path, &file_path)?;

        Ok(())
    }
}

impl MonthStorage for MonthRepository {
    fn load_month(&self, month_key: &str) -> Result<Option<Value>> {
        let mut months = self.read_months();
        Ok(months.remove(month_key))
    }

    fn store_month(&self, month_key: &str, record: &MonthRecord) -> Result<()> {
        let mut months = self.read_months();
        months.insert(month_key.to_string(), serde_json::to_value(record)?);
        self.write_months(&months)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::json::test_utils::temp_connection;
    use crate::storage::Connection;

    #[test]
    fn test_load_missing_month_is_none() {
        let (connection, _dir) = temp_connection();
        let repository = connection.create_month_repository();

        assert!(repository.load_month("2024-05").unwrap().is_none());
    }

    #[test]
    fn test_store_then_load_round_trips() {
        let (connection, _dir) = temp_connection();
        let repository = connection.create_month_repository();

        let record = MonthRecord {
            income_cents: 300000,
            ..MonthRecord::default()
        };
        repository.store_month("2024-05", &record).unwrap();

        let value = repository.load_month("2024-05").unwrap().unwrap();
        assert_eq!(value, serde_json::to_value(&record).unwrap());
    }

    #[test]
    fn test_store_keeps_other_months() {
        let (connection, _dir) = temp_connection();
        let repository = connection.create_month_repository();

        let january = MonthRecord {
            income_cents: 100,
            ..MonthRecord::default()
        };
        let february = MonthRecord {
            income_cents: 200,
            ..MonthRecord::default()
        };
        repository.store_month("2024-01", &january).unwrap();
        repository.store_month("2024-02", &february).unwrap();

        let value = repository.load_month("2024-01").unwrap().unwrap();
        assert_eq!(value["incomeCents"], 100);
    }

    #[test]
    fn test_store_replaces_prior_value_for_key() {
        let (connection, _dir) = temp_connection();
        let repository = connection.create_month_repository();

        let first = MonthRecord {
            income_cents: 100,
            ..MonthRecord::default()
        };
        let second = MonthRecord {
            income_cents: 999,
            ..MonthRecord::default()
        };
        repository.store_month("2024-01", &first).unwrap();
        repository.store_month("2024-01", &second).unwrap();

        let value = repository.load_month("2024-01").unwrap().unwrap();
        assert_eq!(value["incomeCents"], 999);
    }

    #[test]
    fn test_corrupt_document_reads_as_empty_mapping() {
        let (connection, _dir) = temp_connection();
        fs::write(connection.months_file_path(), "{not json").unwrap();
        let repository = connection.create_month_repository();

        assert!(repository.load_month("2024-05").unwrap().is_none());

        // Storing over a corrupt document still works.
        let record = MonthRecord::default();
        repository.store_month("2024-05", &record).unwrap();
        assert!(repository.load_month("2024-05").unwrap().is_some());
    }
}
