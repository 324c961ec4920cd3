//! Backend for the monthly budget tracker.
//!
//! The domain layer owns month records, their derived totals, and monetary
//! input parsing; the storage layer persists the mapping of month keys to
//! records as a single JSON document. Presentation concerns (rendering, input
//! collection, confirmation prompts) live outside this crate and drive it
//! through the services in [`AppState`].

pub mod domain;
pub mod storage;

use std::sync::Arc;

use anyhow::Result;
use tracing::info;

use crate::domain::cumulative_service::CumulativeService;
use crate::domain::envelope_service::EnvelopeService;
use crate::domain::fixed_charge_service::FixedChargeService;
use crate::domain::ids::{IdGenerator, UuidGenerator};
use crate::domain::month_service::MonthService;
use crate::storage::json::JsonConnection;
use crate::storage::Connection;

/// All domain services wired to one storage connection.
pub struct AppState<C: Connection> {
    pub month_service: MonthService<C>,
    pub fixed_charge_service: FixedChargeService<C>,
    pub envelope_service: EnvelopeService<C>,
    pub cumulative_service: CumulativeService<C>,
}

/// Initialize the backend with all required services in the default data
/// directory.
pub fn initialize_backend() -> Result<AppState<JsonConnection>> {
    let connection = Arc::new(JsonConnection::new_default()?);
    Ok(initialize_with(connection, Arc::new(UuidGenerator)))
}

/// Wire all services against an explicit connection and id generator.
pub fn initialize_with<C: Connection>(
    connection: Arc<C>,
    ids: Arc<dyn IdGenerator>,
) -> AppState<C> {
    info!("Setting up domain model");
    let month_service = MonthService::new(connection, ids.clone());
    let fixed_charge_service = FixedChargeService::new(month_service.clone(), ids.clone());
    let envelope_service = EnvelopeService::new(month_service.clone(), ids.clone());
    let cumulative_service = CumulativeService::new(month_service.clone(), ids);

    AppState {
        month_service,
        fixed_charge_service,
        envelope_service,
        cumulative_service,
    }
}
