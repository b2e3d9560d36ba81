//! Common types shared between the prefetch unit and its driver.
//!
//! This module provides the building blocks the engine exchanges with the
//! external memory-hierarchy simulator. It includes:
//! 1. **Access Events:** The demand-access record observed on every CPU
//!    memory reference.
//! 2. **Prefetch Requests:** The staged prediction handed back for issuance.
//! 3. **Error Handling:** Configuration validation errors.

/// Demand-access event and staged prefetch request types.
pub mod access;

/// Error types for configuration validation.
pub mod error;

pub use access::{MemoryAccess, PrefetchRequest};
pub use error::ConfigError;
