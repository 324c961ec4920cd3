//! # Storage Traits
//!
//! This module defines the storage abstraction traits that allow different
//! storage backends to be used interchangeably in the domain layer.

use anyhow::Result;
use serde_json::Value;
use shared::MonthRecord;

/// Trait defining the interface for month-record storage operations.
///
/// Records are keyed by month ("YYYY-MM"). Reads hand back raw JSON so the
/// domain layer can normalize malformed data field-by-field instead of
/// failing the whole load.
pub trait MonthStorage {
    /// Fetch the persisted value for a month key, if any.
    fn load_month(&self, month_key: &str) -> Result<Option<Value>>;

    /// Write the record for a month key, replacing any prior value for that
    /// key. The full mapping is rewritten synchronously.
    fn store_month(&self, month_key: &str, record: &MonthRecord) -> Result<()>;
}

/// Trait defining the interface for storage connections.
///
/// This trait abstracts away the specific connection type and provides
/// factory methods for creating repositories, so the domain layer can work
/// with any storage backend without knowing the implementation details.
pub trait Connection: Send + Sync + Clone {
    /// The type of MonthStorage this connection creates
    type MonthRepository: MonthStorage + Clone;

    /// Create a new month repository for this connection
    fn create_month_repository(&self) -> Self::MonthRepository;
}
