//! Shape normalization for persisted month records.
//!
//! Persisted data is read back as raw JSON so that a malformed record
//! degrades field-by-field to defaults instead of failing the load: missing
//! or non-array sequences become empty, non-numeric cents become zero,
//! non-string names get a fallback label, and records without an id get a
//! freshly generated one. A cached `spentCents` value is preserved as
//! stored, not recomputed.

use serde_json::Value;
use shared::{Cumulative, Entry, Envelope, FixedCharge, MonthRecord};

use crate::domain::ids::IdGenerator;

const FALLBACK_CHARGE_NAME: &str = "Charge";
const FALLBACK_ENVELOPE_NAME: &str = "Budget";
const FALLBACK_CUMULATIVE_NAME: &str = "Tracker";

/// Coerce a persisted month value into the canonical record shape.
/// Normalizing an already-normalized record changes nothing.
pub fn normalize_month(value: &Value, ids: &dyn IdGenerator) -> MonthRecord {
    if !value.is_object() {
        return MonthRecord::default();
    }
    MonthRecord {
        income_cents: int_or_zero(value.get("incomeCents")),
        fixed_charges: seq(value.get("fixedCharges"))
            .iter()
            .map(|v| normalize_fixed_charge(v, ids))
            .collect(),
        envelopes: seq(value.get("envelopes"))
            .iter()
            .map(|v| normalize_envelope(v, ids))
            .collect(),
        cumulatives: seq(value.get("cumulatives"))
            .iter()
            .map(|v| normalize_cumulative(v, ids))
            .collect(),
    }
}

fn normalize_fixed_charge(value: &Value, ids: &dyn IdGenerator) -> FixedCharge {
    FixedCharge {
        id: id_or_generated(value.get("id"), ids),
        group: string_or(value.get("group"), ""),
        name: string_or(value.get("name"), FALLBACK_CHARGE_NAME),
        amount_cents: int_or_zero(value.get("amountCents")),
        paid: value.get("paid").and_then(Value::as_bool).unwrap_or(false),
    }
}

fn normalize_envelope(value: &Value, ids: &dyn IdGenerator) -> Envelope {
    Envelope {
        id: id_or_generated(value.get("id"), ids),
        name: string_or(value.get("name"), FALLBACK_ENVELOPE_NAME),
        limit_cents: int_or_zero(value.get("limitCents")),
        spent_cents: int_or_zero(value.get("spentCents")),
        entries: normalize_entries(value.get("entries"), ids),
    }
}

fn normalize_cumulative(value: &Value, ids: &dyn IdGenerator) -> Cumulative {
    Cumulative {
        id: id_or_generated(value.get("id"), ids),
        name: string_or(value.get("name"), FALLBACK_CUMULATIVE_NAME),
        spent_cents: int_or_zero(value.get("spentCents")),
        entries: normalize_entries(value.get("entries"), ids),
    }
}

fn normalize_entries(value: Option<&Value>, ids: &dyn IdGenerator) -> Vec<Entry> {
    seq(value)
        .iter()
        .map(|v| Entry {
            id: id_or_generated(v.get("id"), ids),
            ts: int_or_zero(v.get("ts")),
            amount_cents: int_or_zero(v.get("amountCents")),
        })
        .collect()
}

fn seq(value: Option<&Value>) -> &[Value] {
    value.and_then(Value::as_array).map(Vec::as_slice).unwrap_or(&[])
}

/// Integer from a JSON number, rounding floats; anything else is zero.
fn int_or_zero(value: Option<&Value>) -> i64 {
    match value {
        Some(Value::Number(n)) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f.round() as i64))
            .unwrap_or(0),
        _ => 0,
    }
}

fn string_or(value: Option<&Value>, fallback: &str) -> String {
    match value.and_then(Value::as_str) {
        Some(s) => s.to_string(),
        None => fallback.to_string(),
    }
}

fn id_or_generated(value: Option<&Value>, ids: &dyn IdGenerator) -> String {
    match value.and_then(Value::as_str) {
        Some(id) if !id.is_empty() => id.to_string(),
        _ => ids.generate(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ids::SequentialIds;
    use serde_json::json;

    #[test]
    fn test_non_object_becomes_default_record() {
        let ids = SequentialIds::new();
        assert_eq!(normalize_month(&json!(null), &ids), MonthRecord::default());
        assert_eq!(normalize_month(&json!([1, 2]), &ids), MonthRecord::default());
        assert_eq!(normalize_month(&json!("nope"), &ids), MonthRecord::default());
    }

    #[test]
    fn test_missing_fields_default() {
        let ids = SequentialIds::new();
        let record = normalize_month(&json!({}), &ids);
        assert_eq!(record, MonthRecord::default());
    }

    #[test]
    fn test_malformed_fields_degrade_individually() {
        let ids = SequentialIds::new();
        let record = normalize_month(
            &json!({
                "incomeCents": "not a number",
                "fixedCharges": [{"name": 42, "amountCents": "x", "paid": "yes"}],
                "envelopes": "nope",
                "cumulatives": [{"id": "cum", "name": "Fuel", "spentCents": 5000, "entries": null}],
            }),
            &ids,
        );

        assert_eq!(record.income_cents, 0);
        assert_eq!(record.fixed_charges.len(), 1);
        let charge = &record.fixed_charges[0];
        assert_eq!(charge.id, "id-0");
        assert_eq!(charge.name, "Charge");
        assert_eq!(charge.group, "");
        assert_eq!(charge.amount_cents, 0);
        assert!(!charge.paid);
        assert!(record.envelopes.is_empty());
        assert_eq!(record.cumulatives[0].id, "cum");
        assert_eq!(record.cumulatives[0].spent_cents, 5000);
        assert!(record.cumulatives[0].entries.is_empty());
    }

    #[test]
    fn test_float_cents_round_to_integers() {
        let ids = SequentialIds::new();
        let record = normalize_month(&json!({"incomeCents": 1050.4}), &ids);
        assert_eq!(record.income_cents, 1050);
    }

    #[test]
    fn test_stored_spent_cents_is_preserved() {
        // The cached derivation is trusted as stored; mutations, not loads,
        // keep it in step with the entries.
        let ids = SequentialIds::new();
        let record = normalize_month(
            &json!({
                "envelopes": [{
                    "id": "env",
                    "name": "Groceries",
                    "limitCents": 20000,
                    "spentCents": 999,
                    "entries": [],
                }],
            }),
            &ids,
        );
        assert_eq!(record.envelopes[0].spent_cents, 999);
    }

    #[test]
    fn test_normalization_is_idempotent() {
        let ids = SequentialIds::new();
        let record = normalize_month(
            &json!({
                "incomeCents": 300000,
                "fixedCharges": [{"id": "c1", "group": "Housing", "name": "Rent", "amountCents": 65000, "paid": true}],
                "envelopes": [{"id": "e1", "name": "Groceries", "limitCents": 20000, "spentCents": 450,
                               "entries": [{"id": "en1", "ts": 1000, "amountCents": 450}]}],
                "cumulatives": [{"id": "m1", "name": "Fuel", "spentCents": 0, "entries": []}],
            }),
            &ids,
        );

        let round_tripped = serde_json::to_value(&record).unwrap();
        assert_eq!(normalize_month(&round_tripped, &ids), record);
    }

    #[test]
    fn test_missing_ids_are_generated() {
        let ids = SequentialIds::new();
        let record = normalize_month(
            &json!({
                "fixedCharges": [{"name": "Rent", "amountCents": 65000}],
                "envelopes": [{"id": "", "name": "Groceries", "entries": [{"amountCents": 450}]}],
            }),
            &ids,
        );

        assert_eq!(record.fixed_charges[0].id, "id-0");
        assert_eq!(record.envelopes[0].id, "id-1");
        assert_eq!(record.envelopes[0].entries[0].id, "id-2");
    }
}
