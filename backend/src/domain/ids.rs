//! Identifier generation for records created by the domain layer.

use uuid::Uuid;

/// Source of unique ids for newly created charges, envelopes, trackers, and
/// entries. Injected into the services so tests can supply deterministic
/// ids.
pub trait IdGenerator: Send + Sync {
    fn generate(&self) -> String;
}

/// Random v4 UUID ids, the production generator.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn generate(&self) -> String {
        Uuid::new_v4().to_string()
    }
}

#[cfg(test)]
pub(crate) struct SequentialIds(std::sync::atomic::AtomicU64);

#[cfg(test)]
impl SequentialIds {
    pub(crate) fn new() -> Self {
        Self(std::sync::atomic::AtomicU64::new(0))
    }
}

#[cfg(test)]
impl IdGenerator for SequentialIds {
    fn generate(&self) -> String {
        let n = self.0.fetch_add(1, std::sync::atomic::Ordering::Relaxed);
        format!("id-{}", n)
    }
}
