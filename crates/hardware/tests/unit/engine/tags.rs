//! Tagged Block Set Tests.
//!
//! Verifies that the tag bit vector:
//! - Starts cleared and supports O(1) mark/unmark/test by address.
//! - Reduces addresses modulo its bit capacity, so congruent addresses are
//!   indistinguishable (intended aliasing, not a bug).
//! - Tolerates duplicate marks (idempotent bits).

use pfsim_core::engine::TaggedBlockSet;

// ══════════════════════════════════════════════════════════
// 1. Construction
// ══════════════════════════════════════════════════════════

/// A fresh set has every bit clear.
#[test]
fn starts_clear() {
    let tags = TaggedBlockSet::new(16384);
    assert!(tags.is_clear());
    assert_eq!(tags.capacity(), 16384);
    assert!(!tags.test(0));
    assert!(!tags.test(0x1000));
}

// ══════════════════════════════════════════════════════════
// 2. Mark / unmark / test
// ══════════════════════════════════════════════════════════

/// Marked addresses test as tagged until unmarked.
#[test]
fn mark_then_unmark_roundtrip() {
    let mut tags = TaggedBlockSet::new(16384);
    tags.mark(0x1234);
    assert!(tags.test(0x1234));
    assert!(!tags.test(0x1235));
    tags.unmark(0x1234);
    assert!(!tags.test(0x1234));
    assert!(tags.is_clear());
}

/// Marking the same address twice is idempotent; one unmark clears it.
#[test]
fn duplicate_marks_are_idempotent() {
    let mut tags = TaggedBlockSet::new(16384);
    tags.mark(2048);
    tags.mark(2048);
    assert!(tags.test(2048));
    tags.unmark(2048);
    assert!(!tags.test(2048));
}

/// Unmarking an address that was never marked is a harmless no-op.
#[test]
fn unmark_untagged_is_noop() {
    let mut tags = TaggedBlockSet::new(16384);
    tags.unmark(0xDEAD_BEEF);
    assert!(tags.is_clear());
}

// ══════════════════════════════════════════════════════════
// 3. Aliasing (intentional)
// ══════════════════════════════════════════════════════════

/// Two addresses congruent modulo the bit capacity share a bit: marking one
/// makes the other test as tagged. This is the accepted space/precision
/// trade-off of the design, asserted here as intended behavior.
#[test]
fn congruent_addresses_share_a_bit() {
    let mut tags = TaggedBlockSet::new(16384);
    tags.mark(100);
    assert!(tags.test(100 + 16384));
    assert!(tags.test(100 + 5 * 16384));

    // Unmarking through the alias clears the shared bit too.
    tags.unmark(100 + 16384);
    assert!(!tags.test(100));
}

/// Addresses in distinct congruence classes never interfere.
#[test]
fn distinct_classes_are_independent() {
    let mut tags = TaggedBlockSet::new(16384);
    tags.mark(7);
    assert!(!tags.test(8));
    assert!(!tags.test(7 + 16383));
}

// ══════════════════════════════════════════════════════════
// 4. Non-power-of-two capacities
// ══════════════════════════════════════════════════════════

/// Indexing is plain modulo, not a mask, so odd capacities work.
#[test]
fn modulo_indexing_with_odd_capacity() {
    let mut tags = TaggedBlockSet::new(10);
    tags.mark(13); // bit 3
    assert!(tags.test(3));
    assert!(tags.test(23));
    assert!(!tags.test(4));
}
