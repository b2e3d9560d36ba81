//! Hardware prefetch unit model.
//!
//! This crate implements the prediction-and-issuance engine of a hardware
//! memory-access prefetcher, driven one event at a time by an external
//! memory-hierarchy simulator. It provides the following:
//! 1. **Engine:** The [`PrefetchEngine`] state machine that turns demand
//!    accesses into staged prefetch requests (at most a fixed quota per
//!    triggering event).
//! 2. **Tag tracking:** A fixed-capacity bit set recording blocks believed to
//!    be sitting in the prefetch buffer awaiting consumption.
//! 3. **Stride prediction:** A reference prediction table (RPT) keyed by
//!    instruction pointer, tracking last address, last stride, and confidence.
//! 4. **Configuration:** Serde-deserializable [`PrefetchConfig`] with
//!    hardware-reference defaults.
//! 5. **Statistics:** [`PrefetchStats`] counters and reporting.
//!
//! The driving simulator (cycle loop, cache placement, bus arbitration, trace
//! replay) is an external collaborator; it calls `cpu_request` once per demand
//! access and polls `has_request`/`request`/`complete_request` once per cycle.

/// Common types shared with the driver (access events, prefetch requests, errors).
pub mod common;
/// Prefetch unit configuration (defaults and serde structures).
pub mod config;
/// The prefetch engine and its two prediction tables.
pub mod engine;
/// Prefetch statistics collection and reporting.
pub mod stats;

/// Demand-access event shape supplied by the driver.
pub use crate::common::MemoryAccess;
/// Staged prefetch request handed back to the driver.
pub use crate::common::PrefetchRequest;
/// Configuration validation error.
pub use crate::common::error::ConfigError;
/// Root configuration type; use `PrefetchConfig::default()` or deserialize from JSON.
pub use crate::config::PrefetchConfig;
/// The orchestrating prefetch state machine.
pub use crate::engine::PrefetchEngine;
/// Prefetch statistics counters.
pub use crate::stats::PrefetchStats;
