//! Cumulative tracker operations: uncapped running totals and their spend
//! entries.

use std::sync::Arc;

use anyhow::{anyhow, Result};
use chrono::Utc;

use shared::{Cumulative, Entry, MonthKey};

use crate::domain::commands::cumulatives::{
    AddCumulativeCommand, AddCumulativeResult, AddEntryResult, DeleteCumulativeResult,
    DeleteEntryResult, RenameCumulativeResult,
};
use crate::domain::ids::IdGenerator;
use crate::domain::money;
use crate::domain::month_service::MonthService;
use crate::storage::Connection;

#[derive(Clone)]
pub struct CumulativeService<C: Connection> {
    months: MonthService<C>,
    ids: Arc<dyn IdGenerator>,
}

impl<C: Connection> CumulativeService<C> {
    pub fn new(months: MonthService<C>, ids: Arc<dyn IdGenerator>) -> Self {
        Self { months, ids }
    }

    /// Add a new tracker with nothing spent yet.
    pub fn add_cumulative(
        &self,
        key: &MonthKey,
        command: AddCumulativeCommand,
    ) -> Result<AddCumulativeResult> {
        let name = command.name.trim();
        if name.is_empty() {
            return Err(anyhow!("Tracker name must not be empty"));
        }

        let mut record = self.months.load(key);
        let cumulative_id = self.ids.generate();
        record.cumulatives.push(Cumulative {
            id: cumulative_id.clone(),
            name: name.to_string(),
            spent_cents: 0,
            entries: Vec::new(),
        });
        self.months.save(key, &record)?;

        Ok(AddCumulativeResult {
            cumulative_id,
            record,
        })
    }

    /// Rename a tracker. An unknown id is a no-op.
    pub fn rename_cumulative(
        &self,
        key: &MonthKey,
        cumulative_id: &str,
        new_name: &str,
    ) -> Result<RenameCumulativeResult> {
        let name = new_name.trim();
        if name.is_empty() {
            return Err(anyhow!("Tracker name must not be empty"));
        }

        let mut record = self.months.load(key);
        let renamed = match record.cumulatives.iter_mut().find(|c| c.id == cumulative_id) {
            Some(cumulative) => {
                cumulative.name = name.to_string();
                true
            }
            None => false,
        };

        if renamed {
            self.months.save(key, &record)?;
        }
        Ok(RenameCumulativeResult { renamed, record })
    }

    /// Record a spend entry against a tracker and refresh its running
    /// total. A stale tracker id is a no-op.
    pub fn add_entry(
        &self,
        key: &MonthKey,
        cumulative_id: &str,
        raw_amount: &str,
    ) -> Result<AddEntryResult> {
        let amount_cents = money::parse_positive_cents(raw_amount)?;

        let mut record = self.months.load(key);
        let entry_id = match record.cumulatives.iter_mut().find(|c| c.id == cumulative_id) {
            Some(cumulative) => {
                let entry_id = self.ids.generate();
                cumulative.entries.push(Entry {
                    id: entry_id.clone(),
                    ts: Utc::now().timestamp_millis(),
                    amount_cents,
                });
                cumulative.recompute_spent();
                Some(entry_id)
            }
            None => None,
        };

        if entry_id.is_some() {
            self.months.save(key, &record)?;
        }
        Ok(AddEntryResult { entry_id, record })
    }

    /// Delete a spend entry by id and refresh the running total. Stale ids
    /// are no-ops.
    pub fn delete_entry(
        &self,
        key: &MonthKey,
        cumulative_id: &str,
        entry_id: &str,
    ) -> Result<DeleteEntryResult> {
        let mut record = self.months.load(key);

        let deleted = match record.cumulatives.iter_mut().find(|c| c.id == cumulative_id) {
            Some(cumulative) => {
                let before = cumulative.entries.len();
                cumulative.entries.retain(|e| e.id != entry_id);
                let deleted = cumulative.entries.len() != before;
                if deleted {
                    cumulative.recompute_spent();
                }
                deleted
            }
            None => false,
        };

        if deleted {
            self.months.save(key, &record)?;
        }
        Ok(DeleteEntryResult { deleted, record })
    }

    /// Remove a tracker and its entries. An unknown id is a no-op.
    pub fn delete_cumulative(
        &self,
        key: &MonthKey,
        cumulative_id: &str,
    ) -> Result<DeleteCumulativeResult> {
        let mut record = self.months.load(key);

        let before = record.cumulatives.len();
        record.cumulatives.retain(|c| c.id != cumulative_id);
        let deleted = record.cumulatives.len() != before;

        if deleted {
            self.months.save(key, &record)?;
        }
        Ok(DeleteCumulativeResult { deleted, record })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ids::SequentialIds;
    use crate::storage::json::test_utils::temp_connection;
    use crate::storage::json::JsonConnection;
    use tempfile::TempDir;

    fn test_service() -> (CumulativeService<JsonConnection>, MonthService<JsonConnection>, TempDir)
    {
        let (connection, dir) = temp_connection();
        let ids: Arc<dyn IdGenerator> = Arc::new(SequentialIds::new());
        let months = MonthService::new(Arc::new(connection), ids.clone());
        (CumulativeService::new(months.clone(), ids), months, dir)
    }

    fn month() -> MonthKey {
        MonthKey::new(2024, 5).unwrap()
    }

    fn fuel(service: &CumulativeService<JsonConnection>) -> String {
        service
            .add_cumulative(
                &month(),
                AddCumulativeCommand {
                    name: "Fuel".to_string(),
                },
            )
            .unwrap()
            .cumulative_id
    }

    #[test]
    fn test_add_cumulative() {
        let (service, months, _dir) = test_service();
        let cumulative_id = fuel(&service);

        let record = months.load(&month());
        let cumulative = &record.cumulatives[0];
        assert_eq!(cumulative.id, cumulative_id);
        assert_eq!(cumulative.name, "Fuel");
        assert_eq!(cumulative.spent_cents, 0);
        assert!(cumulative.entries.is_empty());

        assert!(service
            .add_cumulative(&month(), AddCumulativeCommand { name: "  ".to_string() })
            .is_err());
    }

    #[test]
    fn test_running_total_tracks_entries() {
        let (service, months, _dir) = test_service();
        let cumulative_id = fuel(&service);

        let first = service.add_entry(&month(), &cumulative_id, "50,00").unwrap();
        service.add_entry(&month(), &cumulative_id, "10,00").unwrap();
        assert_eq!(months.load(&month()).cumulatives[0].spent_cents, 6000);

        service
            .delete_entry(&month(), &cumulative_id, &first.entry_id.unwrap())
            .unwrap();
        assert_eq!(months.load(&month()).cumulatives[0].spent_cents, 1000);
    }

    #[test]
    fn test_stale_ids_are_noops() {
        let (service, months, _dir) = test_service();
        let cumulative_id = fuel(&service);
        service.add_entry(&month(), &cumulative_id, "50,00").unwrap();
        let before = months.load(&month());

        assert_eq!(
            service.add_entry(&month(), "missing", "5,00").unwrap().entry_id,
            None
        );
        assert!(!service
            .delete_entry(&month(), &cumulative_id, "missing")
            .unwrap()
            .deleted);
        assert!(!service.delete_cumulative(&month(), "missing").unwrap().deleted);
        assert!(!service
            .rename_cumulative(&month(), "missing", "Gas")
            .unwrap()
            .renamed);

        assert_eq!(months.load(&month()), before);
    }

    #[test]
    fn test_rename_and_delete_cumulative() {
        let (service, months, _dir) = test_service();
        let cumulative_id = fuel(&service);

        assert!(service
            .rename_cumulative(&month(), &cumulative_id, "Gas")
            .unwrap()
            .renamed);
        assert_eq!(months.load(&month()).cumulatives[0].name, "Gas");

        assert!(service
            .delete_cumulative(&month(), &cumulative_id)
            .unwrap()
            .deleted);
        assert!(months.load(&month()).cumulatives.is_empty());
    }
}
