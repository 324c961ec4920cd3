//! Domain-level command and result types
//!
//! These structs are used by the services inside the domain layer and are
//! **not** wire DTOs: the presentation layer builds commands from collected
//! user input (raw decimal strings included) and reads the mutated record
//! back from the results. A `deleted`/`renamed` flag of `false`, or a `None`
//! id, means the referenced record no longer existed and the operation was
//! a no-op.

pub mod fixed_charges {
    use shared::MonthRecord;

    /// Input for creating a new fixed charge.
    #[derive(Debug, Clone)]
    pub struct AddFixedChargeCommand {
        pub name: String,
        /// Free-text category label, possibly empty
        pub group: String,
        /// Raw decimal amount string as typed by the user
        pub amount: String,
    }

    /// Result of creating a fixed charge.
    #[derive(Debug, Clone)]
    pub struct AddFixedChargeResult {
        pub charge_id: String,
        pub record: MonthRecord,
    }

    /// Result of toggling a charge's paid flag.
    #[derive(Debug, Clone)]
    pub struct TogglePaidResult {
        /// The new paid state, or `None` when the id matched no charge.
        pub paid: Option<bool>,
        pub record: MonthRecord,
    }

    /// Result of deleting a fixed charge.
    #[derive(Debug, Clone)]
    pub struct DeleteFixedChargeResult {
        pub deleted: bool,
        pub record: MonthRecord,
    }
}

pub mod envelopes {
    use shared::MonthRecord;

    /// Input for creating a new envelope.
    #[derive(Debug, Clone)]
    pub struct AddEnvelopeCommand {
        pub name: String,
        /// Raw decimal cap string; empty means a zero cap
        pub limit: String,
    }

    /// Result of creating an envelope.
    #[derive(Debug, Clone)]
    pub struct AddEnvelopeResult {
        pub envelope_id: String,
        pub record: MonthRecord,
    }

    /// Result of renaming an envelope.
    #[derive(Debug, Clone)]
    pub struct RenameEnvelopeResult {
        pub renamed: bool,
        pub record: MonthRecord,
    }

    /// Result of changing an envelope's cap.
    #[derive(Debug, Clone)]
    pub struct SetLimitResult {
        pub updated: bool,
        pub record: MonthRecord,
    }

    /// Result of recording a spend entry against an envelope.
    #[derive(Debug, Clone)]
    pub struct AddEntryResult {
        /// Id of the new entry, or `None` when the envelope id was stale.
        pub entry_id: Option<String>,
        pub record: MonthRecord,
    }

    /// Result of deleting a spend entry.
    #[derive(Debug, Clone)]
    pub struct DeleteEntryResult {
        pub deleted: bool,
        pub record: MonthRecord,
    }

    /// Result of deleting an envelope.
    #[derive(Debug, Clone)]
    pub struct DeleteEnvelopeResult {
        pub deleted: bool,
        pub record: MonthRecord,
    }
}

pub mod cumulatives {
    use shared::MonthRecord;

    /// Input for creating a new cumulative tracker.
    #[derive(Debug, Clone)]
    pub struct AddCumulativeCommand {
        pub name: String,
    }

    /// Result of creating a cumulative tracker.
    #[derive(Debug, Clone)]
    pub struct AddCumulativeResult {
        pub cumulative_id: String,
        pub record: MonthRecord,
    }

    /// Result of renaming a cumulative tracker.
    #[derive(Debug, Clone)]
    pub struct RenameCumulativeResult {
        pub renamed: bool,
        pub record: MonthRecord,
    }

    /// Result of recording a spend entry against a tracker.
    #[derive(Debug, Clone)]
    pub struct AddEntryResult {
        /// Id of the new entry, or `None` when the tracker id was stale.
        pub entry_id: Option<String>,
        pub record: MonthRecord,
    }

    /// Result of deleting a spend entry.
    #[derive(Debug, Clone)]
    pub struct DeleteEntryResult {
        pub deleted: bool,
        pub record: MonthRecord,
    }

    /// Result of deleting a cumulative tracker.
    #[derive(Debug, Clone)]
    pub struct DeleteCumulativeResult {
        pub deleted: bool,
        pub record: MonthRecord,
    }
}
