//! Property Tests.
//!
//! Randomized checks of the unit's total-function contract: every 32-bit
//! address and program counter reduces to a valid slot, so no input sequence
//! can fault, and the modulo reductions preserve congruence-class aliasing.

use proptest::prelude::*;

use pfsim_core::engine::{ReferencePredictionTable, TaggedBlockSet};
use pfsim_core::{MemoryAccess, PrefetchConfig, PrefetchEngine};

proptest! {
    /// Marking any address makes it (and only its congruence class) test
    /// as tagged; unmarking clears it again.
    #[test]
    fn tag_roundtrip_is_total(addr in any::<u32>()) {
        let mut tags = TaggedBlockSet::new(16384);
        tags.mark(addr);
        prop_assert!(tags.test(addr));
        tags.unmark(addr);
        prop_assert!(!tags.test(addr));
        prop_assert!(tags.is_clear());
    }

    /// Addresses congruent modulo the bit capacity are indistinguishable.
    /// (16384 divides 2^32, so u32 wraparound preserves the congruence.)
    #[test]
    fn tag_aliasing_respects_congruence(addr in any::<u32>(), k in any::<u16>()) {
        let mut tags = TaggedBlockSet::new(16384);
        let alias = addr.wrapping_add(16384u32.wrapping_mul(u32::from(k)));
        tags.mark(addr);
        prop_assert!(tags.test(alias));
        tags.unmark(alias);
        prop_assert!(!tags.test(addr));
    }

    /// A miss update always leaves the slot owned by the updating PC with
    /// the accessed address recorded, for any PC and address.
    #[test]
    fn rpt_update_claims_slot(pc in any::<u32>(), addr in any::<u32>()) {
        let mut table = ReferencePredictionTable::new(128, 32, 128);
        let _ = table.update(pc, addr);
        let entry = table.lookup(pc);
        prop_assert_eq!(entry.owner_pc, pc);
        prop_assert_eq!(entry.last_addr, addr);
    }

    /// Any event stream leaves the engine consistent: a request is staged
    /// iff the engine reports one, and a staged request always carries the
    /// PC of some earlier event.
    #[test]
    fn engine_is_total_over_event_streams(
        events in prop::collection::vec((any::<u32>(), any::<u32>(), any::<bool>(), any::<bool>()), 0..64)
    ) {
        let mut engine = PrefetchEngine::new(&PrefetchConfig::default());
        let mut seen_pcs = Vec::new();
        for (addr, pc, hit_l1, complete) in events {
            engine.cpu_request(MemoryAccess::new(addr, pc, true, 0, hit_l1));
            seen_pcs.push(pc);
            if complete {
                engine.complete_request(0);
            }
            prop_assert_eq!(engine.has_request(0), engine.request(0).is_some());
            if let Some(req) = engine.request(0) {
                prop_assert!(seen_pcs.contains(&req.pc));
            }
        }
    }
}
