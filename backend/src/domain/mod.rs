//! # Domain Module
//!
//! Contains all business logic for the monthly budget tracker.
//!
//! This module encapsulates the core business rules, entities, and services
//! that define how month records are modeled, mutated, and aggregated. It
//! operates independently of any specific UI framework or storage mechanism.
//!
//! ## Module Organization
//!
//! - **month_service**: Month record lifecycle (load, save, reset, income)
//! - **fixed_charge_service**: Recurring charges and their paid flags
//! - **envelope_service**: Capped spending envelopes and their entries
//! - **cumulative_service**: Uncapped running-total trackers
//! - **totals**: Pure derivation of aggregate remaining/left-over figures
//! - **summary**: Presentation-ready month summaries
//! - **money**: Decimal-string parsing and cent formatting
//! - **calendar**: Month-key navigation and labels
//! - **normalize**: Shape normalization of persisted records
//! - **ids**: Identifier generation for newly created records
//! - **commands**: Internal command and result types used by the services
//!
//! ## Business Rules
//!
//! - Monetary amounts are integer cents; user input is a decimal string with
//!   a comma or a dot separator
//! - An envelope's or tracker's `spentCents` always equals the sum of its
//!   entries, recomputed immediately after every entry mutation
//! - Mutations referring to an id that no longer exists are silent no-ops
//! - Invalid monetary input rejects the whole mutation and leaves the
//!   persisted record untouched

pub mod calendar;
pub mod commands;
pub mod cumulative_service;
pub mod envelope_service;
pub mod fixed_charge_service;
pub mod ids;
pub mod money;
pub mod month_service;
pub mod normalize;
pub mod summary;
pub mod totals;

pub use cumulative_service::CumulativeService;
pub use envelope_service::EnvelopeService;
pub use fixed_charge_service::FixedChargeService;
pub use ids::{IdGenerator, UuidGenerator};
pub use month_service::MonthService;
pub use summary::summarize_month;
pub use totals::compute_totals;
