//! Month record lifecycle: load, persist, reset.

use std::sync::Arc;

use anyhow::Result;
use tracing::{info, warn};

use shared::{MonthKey, MonthRecord};

use crate::domain::ids::IdGenerator;
use crate::domain::{money, normalize};
use crate::storage::{Connection, MonthStorage};

/// Loads and persists month records through a storage connection.
///
/// Loading never fails: a month that was never saved, or whose persisted
/// form is unreadable, comes back as the default record.
#[derive(Clone)]
pub struct MonthService<C: Connection> {
    month_repository: C::MonthRepository,
    ids: Arc<dyn IdGenerator>,
}

impl<C: Connection> MonthService<C> {
    pub fn new(connection: Arc<C>, ids: Arc<dyn IdGenerator>) -> Self {
        let month_repository = connection.create_month_repository();
        Self {
            month_repository,
            ids,
        }
    }

    /// Fetch the record for a month, normalized to the canonical shape.
    pub fn load(&self, key: &MonthKey) -> MonthRecord {
        match self.month_repository.load_month(&key.to_string()) {
            Ok(Some(value)) => normalize::normalize_month(&value, self.ids.as_ref()),
            Ok(None) => MonthRecord::default(),
            Err(e) => {
                warn!(
                    "Failed to read month {}: {:#}. Starting from defaults.",
                    key, e
                );
                MonthRecord::default()
            }
        }
    }

    /// Write the record back, replacing any prior entry for the month.
    pub fn save(&self, key: &MonthKey, record: &MonthRecord) -> Result<()> {
        self.month_repository.store_month(&key.to_string(), record)
    }

    /// Set the month's income from a raw decimal string. Empty or
    /// unparseable input counts as zero.
    pub fn set_income(&self, key: &MonthKey, raw_income: &str) -> Result<MonthRecord> {
        let mut record = self.load(key);
        record.income_cents = money::parse_cents_lenient(raw_income);
        self.save(key, &record)?;
        Ok(record)
    }

    /// Start the month over: un-pay every fixed charge and clear every
    /// envelope and cumulative tracker, keeping the definitions themselves
    /// (names, caps, ids) in place.
    pub fn reset(&self, key: &MonthKey) -> Result<MonthRecord> {
        let mut record = self.load(key);

        for charge in &mut record.fixed_charges {
            charge.paid = false;
        }
        for envelope in &mut record.envelopes {
            envelope.entries.clear();
            envelope.spent_cents = 0;
        }
        for cumulative in &mut record.cumulatives {
            cumulative.entries.clear();
            cumulative.spent_cents = 0;
        }

        self.save(key, &record)?;
        info!("Reset month {}", key);
        Ok(record)
    }
}
