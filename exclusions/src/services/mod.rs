//! Service implementations
//!
//! Real implementations of the storage trait that perform actual I/O.

pub mod json_store;

#[cfg(test)]
mod tests;

pub use json_store::JsonRecordStore;
