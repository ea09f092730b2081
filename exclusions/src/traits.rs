//! Storage abstraction with mockall annotations for testing
//!
//! The registry talks to durable storage only through [`RecordStore`], so the
//! persistence contract (write after every accepted change, never on a no-op)
//! can be verified with `MockRecordStore`.

use crate::error::ExclusionResult;
use crate::types::ExclusionRecord;

/// Durable storage for the exclusion record
#[mockall::automock]
pub trait RecordStore {
    /// Load the stored record; an absent store yields an empty record
    fn load(&self) -> ExclusionResult<ExclusionRecord>;

    /// Replace the stored record with `record`
    fn save(&self, record: &ExclusionRecord) -> ExclusionResult<()>;

    /// Human-readable location used in log events
    fn location(&self) -> String;
}
