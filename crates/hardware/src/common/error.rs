//! Configuration validation errors.
//!
//! The engine's driver-facing operations are total functions (every address
//! and program counter reduces modulo a fixed table size), so there is no
//! runtime error taxonomy. The only thing that can be rejected is a
//! degenerate configuration, checked up front by
//! [`PrefetchConfig::validate`](crate::config::PrefetchConfig::validate).

use thiserror::Error;

/// Reasons a [`PrefetchConfig`](crate::config::PrefetchConfig) is unusable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The tagged block set must hold at least one bit.
    #[error("tag bit capacity must be non-zero")]
    ZeroTagCapacity,

    /// The reference prediction table must hold at least one entry.
    #[error("RPT entry count must be non-zero")]
    ZeroRptEntries,

    /// Sequential prediction advances by one block; a zero block size would
    /// pin every fallback prediction to the triggering address.
    #[error("block size must be non-zero")]
    ZeroBlockSize,

    /// Each triggering event must be allowed at least one issuance.
    #[error("requests per miss must be non-zero")]
    ZeroReqsPerMiss,
}
