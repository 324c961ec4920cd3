//! Presentation-ready month summaries.
//!
//! Transforms a month record into formatted, UI-agnostic display data:
//! fixed charges grouped by category, per-envelope budget lines, cumulative
//! running totals, and the most recently recorded entries. The UI renders
//! these structures as-is; no formatting decisions are left to it.

use std::collections::BTreeMap;

use chrono::{Local, TimeZone};

use shared::{
    BudgetConfig, ChargeGroup, Cumulative, CumulativeSummary, Entry, Envelope, EnvelopeSummary,
    FixedCharge, FormattedCharge, FormattedEntry, MonthKey, MonthRecord, MonthSummary,
};

use crate::domain::{calendar, money, totals};

/// Group label used for charges without a category.
const DEFAULT_GROUP_LABEL: &str = "Other";

/// Build a presentation-ready summary of a month record.
pub fn summarize_month(
    key: &MonthKey,
    record: &MonthRecord,
    config: &BudgetConfig,
) -> MonthSummary {
    MonthSummary {
        month_key: key.to_string(),
        month_label: calendar::month_label(*key),
        paid_charge_count: record.fixed_charges.iter().filter(|c| c.paid).count(),
        charge_count: record.fixed_charges.len(),
        charge_groups: group_charges(&record.fixed_charges, config),
        envelopes: record
            .envelopes
            .iter()
            .map(|e| summarize_envelope(e, config))
            .collect(),
        cumulatives: record
            .cumulatives
            .iter()
            .map(|c| summarize_cumulative(c, config))
            .collect(),
        totals: totals::compute_totals(record),
    }
}

/// Bucket charges by trimmed category label, sorted alphabetically, with
/// uncategorized charges under a fallback label.
fn group_charges(charges: &[FixedCharge], config: &BudgetConfig) -> Vec<ChargeGroup> {
    let mut by_group: BTreeMap<String, Vec<FormattedCharge>> = BTreeMap::new();

    for charge in charges {
        let label = match charge.group.trim() {
            "" => DEFAULT_GROUP_LABEL.to_string(),
            group => group.to_string(),
        };
        by_group.entry(label).or_default().push(FormattedCharge {
            id: charge.id.clone(),
            name: charge.name.clone(),
            amount_cents: charge.amount_cents,
            formatted_amount: format_amount(charge.amount_cents, config),
            paid: charge.paid,
        });
    }

    by_group
        .into_iter()
        .map(|(label, charges)| ChargeGroup { label, charges })
        .collect()
}

fn summarize_envelope(envelope: &Envelope, config: &BudgetConfig) -> EnvelopeSummary {
    EnvelopeSummary {
        id: envelope.id.clone(),
        name: envelope.name.clone(),
        limit_cents: envelope.limit_cents,
        spent_cents: envelope.spent_cents,
        remaining_cents: envelope.remaining_cents(),
        formatted_limit: format_amount(envelope.limit_cents, config),
        formatted_spent: format_amount(envelope.spent_cents, config),
        formatted_remaining: format_amount(envelope.remaining_cents(), config),
        recent_entries: recent_entries(&envelope.entries, config),
    }
}

fn summarize_cumulative(cumulative: &Cumulative, config: &BudgetConfig) -> CumulativeSummary {
    CumulativeSummary {
        id: cumulative.id.clone(),
        name: cumulative.name.clone(),
        spent_cents: cumulative.spent_cents,
        formatted_spent: format_amount(cumulative.spent_cents, config),
        recent_entries: recent_entries(&cumulative.entries, config),
    }
}

/// The most recently recorded entries, newest first.
fn recent_entries(entries: &[Entry], config: &BudgetConfig) -> Vec<FormattedEntry> {
    entries
        .iter()
        .rev()
        .take(config.recent_entry_limit)
        .map(|entry| FormattedEntry {
            id: entry.id.clone(),
            ts: entry.ts,
            amount_cents: entry.amount_cents,
            formatted_date: format_entry_date(entry.ts),
            formatted_amount: format_amount(entry.amount_cents, config),
        })
        .collect()
}

/// Render an entry timestamp as "dd/mm HH:MM" local time.
fn format_entry_date(ts: i64) -> String {
    match Local.timestamp_millis_opt(ts).single() {
        Some(date) => date.format("%d/%m %H:%M").to_string(),
        None => String::new(),
    }
}

fn format_amount(cents: i64, config: &BudgetConfig) -> String {
    format!("{} {}", money::format_cents(cents), config.currency_symbol)
}
