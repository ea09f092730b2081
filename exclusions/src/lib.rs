//! Persisted exclusion list for stable and problematic coins
//!
//! The registry keeps two ordered lists of base tickers in a JSON file and
//! filters `USDT` trading-pair symbols against them.

pub mod config;
pub mod error;
pub mod registry;
pub mod services;
pub mod traits;
pub mod types;

// Re-export commonly used types
pub use config::{RegistryConfig, DEFAULT_EXCLUSION_PATH};
pub use error::{ExclusionError, ExclusionResult};
pub use registry::ExclusionRegistry;
pub use services::JsonRecordStore;
pub use traits::{MockRecordStore, RecordStore};
pub use types::ExclusionRecord;
pub use shared::ExclusionKind;
