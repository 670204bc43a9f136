//! Persistence substrate implementations for the Truth or Dare data engine.
//!
//! Provides the file-backed substrate used on devices and an in-memory
//! substrate for tests and previews, both behind the
//! `truthdare_core::storage::GameStorage` contract.

pub mod json_file_storage;
pub mod memory_storage;
pub mod paths;

pub use crate::json_file_storage::JsonFileStorage;
pub use crate::memory_storage::MemoryStorage;
