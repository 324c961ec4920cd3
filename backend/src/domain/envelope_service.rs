//! Envelope operations: capped monthly spending categories and their spend
//! entries.

use std::sync::Arc;

use anyhow::{anyhow, Result};
use chrono::Utc;

use shared::{Entry, Envelope, MonthKey};

use crate::domain::commands::envelopes::{
    AddEnvelopeCommand, AddEnvelopeResult, AddEntryResult, DeleteEnvelopeResult, DeleteEntryResult,
    RenameEnvelopeResult, SetLimitResult,
};
use crate::domain::ids::IdGenerator;
use crate::domain::money;
use crate::domain::month_service::MonthService;
use crate::storage::Connection;

#[derive(Clone)]
pub struct EnvelopeService<C: Connection> {
    months: MonthService<C>,
    ids: Arc<dyn IdGenerator>,
}

impl<C: Connection> EnvelopeService<C> {
    pub fn new(months: MonthService<C>, ids: Arc<dyn IdGenerator>) -> Self {
        Self { months, ids }
    }

    /// Add a new envelope with the given cap. The cap may be zero; the
    /// envelope starts with no entries and nothing spent.
    pub fn add_envelope(
        &self,
        key: &MonthKey,
        command: AddEnvelopeCommand,
    ) -> Result<AddEnvelopeResult> {
        let name = command.name.trim();
        if name.is_empty() {
            return Err(anyhow!("Envelope name must not be empty"));
        }
        let limit_cents = money::parse_non_negative_cents(&command.limit)?;

        let mut record = self.months.load(key);
        let envelope_id = self.ids.generate();
        record.envelopes.push(Envelope {
            id: envelope_id.clone(),
            name: name.to_string(),
            limit_cents,
            spent_cents: 0,
            entries: Vec::new(),
        });
        self.months.save(key, &record)?;

        Ok(AddEnvelopeResult {
            envelope_id,
            record,
        })
    }

    /// Rename an envelope. An unknown id is a no-op.
    pub fn rename_envelope(
        &self,
        key: &MonthKey,
        envelope_id: &str,
        new_name: &str,
    ) -> Result<RenameEnvelopeResult> {
        let name = new_name.trim();
        if name.is_empty() {
            return Err(anyhow!("Envelope name must not be empty"));
        }

        let mut record = self.months.load(key);
        let renamed = match record.envelopes.iter_mut().find(|e| e.id == envelope_id) {
            Some(envelope) => {
                envelope.name = name.to_string();
                true
            }
            None => false,
        };

        if renamed {
            self.months.save(key, &record)?;
        }
        Ok(RenameEnvelopeResult { renamed, record })
    }

    /// Change an envelope's cap. An unknown id is a no-op.
    pub fn set_limit(
        &self,
        key: &MonthKey,
        envelope_id: &str,
        raw_limit: &str,
    ) -> Result<SetLimitResult> {
        let limit_cents = money::parse_non_negative_cents(raw_limit)?;

        let mut record = self.months.load(key);
        let updated = match record.envelopes.iter_mut().find(|e| e.id == envelope_id) {
            Some(envelope) => {
                envelope.limit_cents = limit_cents;
                true
            }
            None => false,
        };

        if updated {
            self.months.save(key, &record)?;
        }
        Ok(SetLimitResult { updated, record })
    }

    /// Record a spend entry against an envelope and refresh its cached
    /// spend. A stale envelope id is a no-op.
    pub fn add_entry(
        &self,
        key: &MonthKey,
        envelope_id: &str,
        raw_amount: &str,
    ) -> Result<AddEntryResult> {
        let amount_cents = money::parse_positive_cents(raw_amount)?;

        let mut record = self.months.load(key);
        let entry_id = match record.envelopes.iter_mut().find(|e| e.id == envelope_id) {
            Some(envelope) => {
                let entry_id = self.ids.generate();
                envelope.entries.push(Entry {
                    id: entry_id.clone(),
                    ts: Utc::now().timestamp_millis(),
                    amount_cents,
                });
                envelope.recompute_spent();
                Some(entry_id)
            }
            None => None,
        };

        if entry_id.is_some() {
            self.months.save(key, &record)?;
        }
        Ok(AddEntryResult { entry_id, record })
    }

    /// Delete a spend entry by id and refresh the cached spend. Stale ids
    /// are no-ops.
    pub fn delete_entry(
        &self,
        key: &MonthKey,
        envelope_id: &str,
        entry_id: &str,
    ) -> Result<DeleteEntryResult> {
        let mut record = self.months.load(key);

        let deleted = match record.envelopes.iter_mut().find(|e| e.id == envelope_id) {
            Some(envelope) => {
                let before = envelope.entries.len();
                envelope.entries.retain(|e| e.id != entry_id);
                let deleted = envelope.entries.len() != before;
                if deleted {
                    envelope.recompute_spent();
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

    /// Remove an envelope and its entries. An unknown id is a no-op.
    pub fn delete_envelope(
        &self,
        key: &MonthKey,
        envelope_id: &str,
    ) -> Result<DeleteEnvelopeResult> {
        let mut record = self.months.load(key);

        let before = record.envelopes.len();
        record.envelopes.retain(|e| e.id != envelope_id);
        let deleted = record.envelopes.len() != before;

        if deleted {
            self.months.save(key, &record)?;
        }
        Ok(DeleteEnvelopeResult { deleted, record })
    }
}
