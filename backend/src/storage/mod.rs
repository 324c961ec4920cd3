//! # Storage Module
//!
//! Handles persistence of the mapping of month keys to records.
//!
//! The domain layer works against the abstractions in [`traits`]; the
//! backing medium can be swapped without touching domain logic. The current
//! implementation keeps the whole mapping in a single JSON document on
//! disk, rewritten synchronously after every mutation.
//!
//! ## Design Principles
//!
//! - **Repository Pattern**: Clean separation between domain and data access
//! - **Dependency Inversion**: Domain depends on storage abstractions, not
//!   implementations
//! - **Graceful Degradation**: A missing or corrupt document reads as an
//!   empty mapping; it never fails the caller

pub mod json;
pub mod traits;

pub use traits::{Connection, MonthStorage};
