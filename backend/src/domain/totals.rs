//! Derived aggregate figures for a month record.

use shared::{MonthRecord, Totals};

/// Compute the aggregate remaining/left-over figures for a month.
///
/// Envelopes count as a hybrid of fixed obligation and variable spend: the
/// cap goes into the total (committed money, spent or not) while only the
/// actual spend goes into the paid figure. `current_left` therefore tracks
/// real spending to date, and `net_left` the floor once every obligation is
/// fully consumed.
pub fn compute_totals(record: &MonthRecord) -> Totals {
    let fixed_total_only: i64 = record.fixed_charges.iter().map(|c| c.amount_cents).sum();
    let fixed_paid_only: i64 = record
        .fixed_charges
        .iter()
        .filter(|c| c.paid)
        .map(|c| c.amount_cents)
        .sum();
    let unpaid_fixed = fixed_total_only - fixed_paid_only;

    let envelopes_total: i64 = record.envelopes.iter().map(|e| e.limit_cents).sum();
    let envelopes_spent: i64 = record.envelopes.iter().map(|e| e.spent_cents).sum();
    let envelopes_remaining: i64 = record.envelopes.iter().map(|e| e.remaining_cents()).sum();

    let cumulatives_spent: i64 = record.cumulatives.iter().map(|c| c.spent_cents).sum();

    Totals {
        fixed_charges_total: fixed_total_only + envelopes_total,
        fixed_charges_paid: fixed_paid_only + envelopes_spent,
        fixed_charges_remaining: unpaid_fixed + envelopes_remaining,
        net_left: record.income_cents - (fixed_total_only + envelopes_total) - cumulatives_spent,
        current_left: record.income_cents - fixed_paid_only - envelopes_spent - cumulatives_spent,
    }
}
