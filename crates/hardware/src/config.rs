//! Configuration system for the prefetch unit.
//!
//! This module defines the configuration structure used to parameterize the
//! engine. It provides:
//! 1. **Defaults:** Baseline hardware constants matching the reference unit
//!    (2 KiB of tag state, 128 RPT entries, 32-byte blocks).
//! 2. **Structure:** A flat, serde-deserializable [`PrefetchConfig`].
//! 3. **Validation:** A strict [`PrefetchConfig::validate`] for drivers that
//!    prefer failing fast over the engine's constructor clamping.
//!
//! Configuration is supplied as JSON by the driving simulator, or use
//! `PrefetchConfig::default()` for the reference geometry.

use serde::Deserialize;

use crate::common::ConfigError;

/// Default configuration constants for the prefetch unit.
///
/// These values reproduce the reference hardware geometry when not
/// explicitly overridden by the driver.
mod defaults {
    /// Bit capacity of the tagged block set (2048 bytes of tag state).
    ///
    /// Addresses are reduced modulo this capacity, so two addresses congruent
    /// modulo `TAG_BITS` share a bit. That aliasing is the unit's
    /// space/precision trade-off, not an accident.
    pub const TAG_BITS: u32 = 16384;

    /// Number of reference prediction table entries.
    ///
    /// Program counters are reduced modulo this count; PCs congruent modulo
    /// `RPT_ENTRIES` share a slot and overwrite each other's history.
    pub const RPT_ENTRIES: u32 = 128;

    /// L2 block size in bytes.
    ///
    /// Sequential (non-stride) predictions advance by one block.
    pub const BLOCK_SIZE: u32 = 32;

    /// Number of prefetch requests issued per triggering event.
    ///
    /// One request is staged immediately; the remaining quota is drained one
    /// chained request per completion.
    pub const REQS_PER_MISS: u32 = 3;

    /// Minimum stride magnitude considered worth predicting with.
    ///
    /// Strides at or below this threshold never earn confidence; they are
    /// treated as noise and the unit falls back to sequential prediction.
    pub const WORTHWHILE_STRIDE: i32 = 128;
}

/// Prefetch unit configuration.
///
/// # Examples
///
/// Creating the reference configuration:
///
/// ```
/// use pfsim_core::config::PrefetchConfig;
///
/// let config = PrefetchConfig::default();
/// assert_eq!(config.tag_bits, 16384);
/// assert_eq!(config.rpt_entries, 128);
/// ```
///
/// Deserializing from JSON (typical driver usage; omitted fields take the
/// reference defaults):
///
/// ```
/// use pfsim_core::config::PrefetchConfig;
///
/// let json = r#"{
///     "tag_bits": 32768,
///     "rpt_entries": 256,
///     "reqs_per_miss": 2
/// }"#;
///
/// let config: PrefetchConfig = serde_json::from_str(json).unwrap();
/// assert_eq!(config.tag_bits, 32768);
/// assert_eq!(config.block_size, 32);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct PrefetchConfig {
    /// Bit capacity of the tagged block set
    #[serde(default = "PrefetchConfig::default_tag_bits")]
    pub tag_bits: u32,

    /// Number of reference prediction table entries
    #[serde(default = "PrefetchConfig::default_rpt_entries")]
    pub rpt_entries: u32,

    /// Block size in bytes for sequential prediction
    #[serde(default = "PrefetchConfig::default_block_size")]
    pub block_size: u32,

    /// Prefetch requests issued per triggering event
    #[serde(default = "PrefetchConfig::default_reqs_per_miss")]
    pub reqs_per_miss: u32,

    /// Minimum stride (exclusive) for an RPT entry to earn confidence
    #[serde(default = "PrefetchConfig::default_worthwhile_stride")]
    pub worthwhile_stride: i32,
}

impl PrefetchConfig {
    /// Returns the default tag bit capacity.
    fn default_tag_bits() -> u32 {
        defaults::TAG_BITS
    }

    /// Returns the default RPT entry count.
    fn default_rpt_entries() -> u32 {
        defaults::RPT_ENTRIES
    }

    /// Returns the default block size.
    fn default_block_size() -> u32 {
        defaults::BLOCK_SIZE
    }

    /// Returns the default per-event issuance quota.
    fn default_reqs_per_miss() -> u32 {
        defaults::REQS_PER_MISS
    }

    /// Returns the default worthwhile-stride threshold.
    fn default_worthwhile_stride() -> i32 {
        defaults::WORTHWHILE_STRIDE
    }

    /// Checks the configuration for degenerate geometry.
    ///
    /// [`PrefetchEngine::new`](crate::engine::PrefetchEngine::new) clamps bad
    /// values to the reference defaults instead; this is the strict path.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] naming the first zero-valued field.
    pub const fn validate(&self) -> Result<(), ConfigError> {
        if self.tag_bits == 0 {
            return Err(ConfigError::ZeroTagCapacity);
        }
        if self.rpt_entries == 0 {
            return Err(ConfigError::ZeroRptEntries);
        }
        if self.block_size == 0 {
            return Err(ConfigError::ZeroBlockSize);
        }
        if self.reqs_per_miss == 0 {
            return Err(ConfigError::ZeroReqsPerMiss);
        }
        Ok(())
    }
}

impl Default for PrefetchConfig {
    fn default() -> Self {
        Self {
            tag_bits: defaults::TAG_BITS,
            rpt_entries: defaults::RPT_ENTRIES,
            block_size: defaults::BLOCK_SIZE,
            reqs_per_miss: defaults::REQS_PER_MISS,
            worthwhile_stride: defaults::WORTHWHILE_STRIDE,
        }
    }
}
