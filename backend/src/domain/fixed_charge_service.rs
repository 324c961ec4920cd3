//! Fixed-charge operations: recurring obligations with a paid flag.

use std::sync::Arc;

use anyhow::{anyhow, Result};

use shared::{FixedCharge, MonthKey};

use crate::domain::commands::fixed_charges::{
    AddFixedChargeCommand, AddFixedChargeResult, DeleteFixedChargeResult, TogglePaidResult,
};
use crate::domain::ids::IdGenerator;
use crate::domain::money;
use crate::domain::month_service::MonthService;
use crate::storage::Connection;

#[derive(Clone)]
pub struct FixedChargeService<C: Connection> {
    months: MonthService<C>,
    ids: Arc<dyn IdGenerator>,
}

impl<C: Connection> FixedChargeService<C> {
    pub fn new(months: MonthService<C>, ids: Arc<dyn IdGenerator>) -> Self {
        Self { months, ids }
    }

    /// Add a new charge to the month. The amount must parse to a positive
    /// number of cents; the charge starts unpaid.
    pub fn add_fixed_charge(
        &self,
        key: &MonthKey,
        command: AddFixedChargeCommand,
    ) -> Result<AddFixedChargeResult> {
        let name = command.name.trim();
        if name.is_empty() {
            return Err(anyhow!("Charge name must not be empty"));
        }
        let amount_cents = money::parse_positive_cents(&command.amount)?;

        let mut record = self.months.load(key);
        let charge_id = self.ids.generate();
        record.fixed_charges.push(FixedCharge {
            id: charge_id.clone(),
            group: command.group.trim().to_string(),
            name: name.to_string(),
            amount_cents,
            paid: false,
        });
        self.months.save(key, &record)?;

        Ok(AddFixedChargeResult { charge_id, record })
    }

    /// Flip the paid flag of a charge. An unknown id is a no-op.
    pub fn toggle_paid(&self, key: &MonthKey, charge_id: &str) -> Result<TogglePaidResult> {
        let mut record = self.months.load(key);

        let paid = match record.fixed_charges.iter_mut().find(|c| c.id == charge_id) {
            Some(charge) => {
                charge.paid = !charge.paid;
                Some(charge.paid)
            }
            None => None,
        };

        if paid.is_some() {
            self.months.save(key, &record)?;
        }
        Ok(TogglePaidResult { paid, record })
    }

    /// Remove a charge by id. An unknown id is a no-op.
    pub fn delete_fixed_charge(
        &self,
        key: &MonthKey,
        charge_id: &str,
    ) -> Result<DeleteFixedChargeResult> {
        let mut record = self.months.load(key);

        let before = record.fixed_charges.len();
        record.fixed_charges.retain(|c| c.id != charge_id);
        let deleted = record.fixed_charges.len() != before;

        if deleted {
            self.months.save(key, &record)?;
        }
        Ok(DeleteFixedChargeResult { deleted, record })
    }
}
