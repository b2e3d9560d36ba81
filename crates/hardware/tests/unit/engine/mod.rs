//! Unit tests for the prefetch engine.
//!
//! This module aggregates tests for:
//! - The tagged block set (bit membership and intentional aliasing).
//! - The reference prediction table (stride detection and confidence).
//! - The Idle/Armed state machine (staging, quota, consumption).
//! - Randomized totality and aliasing properties.

/// Tagged block set tests.
pub mod tags;



/// Property-based tests (proptest).
pub mod properties;
