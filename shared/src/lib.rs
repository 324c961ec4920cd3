use chrono::Datelike;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One calendar month of budget data, keyed by "YYYY-MM" in storage.
///
/// All monetary fields are integer minor units (cents); no floating-point
/// money anywhere.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthRecord {
    /// Income for the month in cents
    pub income_cents: i64,
    pub fixed_charges: Vec<FixedCharge>,
    pub envelopes: Vec<Envelope>,
    pub cumulatives: Vec<Cumulative>,
}

/// A recurring obligation with a paid/unpaid flag and no entry history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FixedCharge {
    pub id: String,
    /// Free-text category label, possibly empty
    pub group: String,
    pub name: String,
    pub amount_cents: i64,
    pub paid: bool,
}

/// A capped monthly spending category (e.g. groceries).
///
/// `spent_cents` is a cached derivation of `entries`; every entry mutation
/// must call [`Envelope::recompute_spent`] immediately.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Envelope {
    pub id: String,
    pub name: String,
    /// Monthly cap in cents
    pub limit_cents: i64,
    /// Sum of all entry amounts, kept in step with `entries`
    pub spent_cents: i64,
    pub entries: Vec<Entry>,
}

impl Envelope {
    /// Re-derive `spent_cents` from the entry sequence.
    pub fn recompute_spent(&mut self) {
        self.spent_cents = sum_entries(&self.entries);
    }

    /// Cents left under the cap; negative when over budget.
    pub fn remaining_cents(&self) -> i64 {
        self.limit_cents - self.spent_cents
    }
}

/// An uncapped running-total spending category (e.g. fuel).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cumulative {
    pub id: String,
    pub name: String,
    /// Sum of all entry amounts, kept in step with `entries`
    pub spent_cents: i64,
    pub entries: Vec<Entry>,
}

impl Cumulative {
    /// Re-derive `spent_cents` from the entry sequence.
    pub fn recompute_spent(&mut self) {
        self.spent_cents = sum_entries(&self.entries);
    }
}

/// A single spend event recorded against an envelope or cumulative tracker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    pub id: String,
    /// Creation timestamp, milliseconds since the Unix epoch
    pub ts: i64,
    /// Positive by construction
    pub amount_cents: i64,
}

/// Sum of entry amounts in cents.
pub fn sum_entries(entries: &[Entry]) -> i64 {
    entries.iter().map(|e| e.amount_cents).sum()
}

/// Aggregate remaining/left-over figures derived from a month record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Totals {
    /// All fixed-charge amounts plus all envelope caps
    pub fixed_charges_total: i64,
    /// Paid fixed-charge amounts plus actual envelope spend
    pub fixed_charges_paid: i64,
    /// Unpaid fixed-charge amounts plus unspent envelope headroom
    pub fixed_charges_remaining: i64,
    /// Income minus total obligations minus cumulative spend, i.e. leftover
    /// if every charge and every envelope cap is fully consumed
    pub net_left: i64,
    /// Income minus what has actually been paid or spent so far
    pub current_left: i64,
}

/// A calendar month identifier, rendered as "YYYY-MM".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MonthKey {
    pub year: i32,
    pub month: u32,
}

impl MonthKey {
    /// Build a key, rejecting out-of-range month numbers.
    pub fn new(year: i32, month: u32) -> Option<Self> {
        if (1..=12).contains(&month) {
            Some(Self { year, month })
        } else {
            None
        }
    }
}

impl Default for MonthKey {
    fn default() -> Self {
        let now = chrono::Local::now();
        Self {
            year: now.year(),
            month: now.month(),
        }
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for MonthKey {
    type Err = MonthKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (year, month) = s.split_once('-').ok_or(MonthKeyError::InvalidFormat)?;
        let year = year.parse::<i32>().map_err(|_| MonthKeyError::InvalidFormat)?;
        let month = month.parse::<u32>().map_err(|_| MonthKeyError::InvalidFormat)?;
        MonthKey::new(year, month).ok_or(MonthKeyError::InvalidMonth)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum MonthKeyError {
    InvalidFormat,
    InvalidMonth,
}

impl fmt::Display for MonthKeyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MonthKeyError::InvalidFormat => write!(f, "Invalid month key format, expected YYYY-MM"),
            MonthKeyError::InvalidMonth => write!(f, "Month number must be between 01 and 12"),
        }
    }
}

impl std::error::Error for MonthKeyError {}

/// Display configuration for summaries and formatted amounts.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BudgetConfig {
    pub currency_symbol: String,
    /// How many of the latest entries a summary shows per category
    pub recent_entry_limit: usize,
}

impl Default for BudgetConfig {
    fn default() -> Self {
        Self {
            currency_symbol: "€".to_string(),
            recent_entry_limit: 8,
        }
    }
}

/// Presentation-ready view of one month: grouped charges, budget lines,
/// running totals, and the derived aggregate figures.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MonthSummary {
    /// "YYYY-MM"
    pub month_key: String,
    /// e.g. "August 2026"
    pub month_label: String,
    pub paid_charge_count: usize,
    pub charge_count: usize,
    pub charge_groups: Vec<ChargeGroup>,
    pub envelopes: Vec<EnvelopeSummary>,
    pub cumulatives: Vec<CumulativeSummary>,
    pub totals: Totals,
}

/// Fixed charges sharing one category label, sorted for display.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ChargeGroup {
    pub label: String,
    pub charges: Vec<FormattedCharge>,
}

/// A fixed charge formatted for display.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FormattedCharge {
    pub id: String,
    pub name: String,
    pub amount_cents: i64,
    pub formatted_amount: String,
    pub paid: bool,
}

/// An envelope's budget line: cap, spend, and headroom.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EnvelopeSummary {
    pub id: String,
    pub name: String,
    pub limit_cents: i64,
    pub spent_cents: i64,
    pub remaining_cents: i64,
    pub formatted_limit: String,
    pub formatted_spent: String,
    pub formatted_remaining: String,
    pub recent_entries: Vec<FormattedEntry>,
}

/// A cumulative tracker's running total line.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CumulativeSummary {
    pub id: String,
    pub name: String,
    pub spent_cents: i64,
    pub formatted_spent: String,
    pub recent_entries: Vec<FormattedEntry>,
}

/// A spend entry formatted for display, newest first in summaries.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FormattedEntry {
    pub id: String,
    pub ts: i64,
    pub amount_cents: i64,
    /// "dd/mm HH:MM" local time
    pub formatted_date: String,
    pub formatted_amount: String,
}
