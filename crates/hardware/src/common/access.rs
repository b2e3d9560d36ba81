//! Demand-access events and staged prefetch requests.
//!
//! These two records form the entire wire contract between the prefetch unit
//! and the driving simulator:
//! 1. **[`MemoryAccess`]:** One record per CPU memory reference, pushed into
//!    the engine via `cpu_request`.
//! 2. **[`PrefetchRequest`]:** The engine's staged prediction, polled by the
//!    driver and forwarded to the next cache level.
//!
//! A request deliberately mirrors the event shape (address plus program
//! counter) so chained predictions can be fed back through the same RPT
//! lookup path that demand accesses use.

/// A single CPU memory reference observed by the prefetch unit.
///
/// Only the five fields below are contractually valid; anything else the
/// driver knows about the access (destination register, privilege mode, ...)
/// is not part of this interface.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MemoryAccess {
    /// Referenced memory address.
    pub addr: u32,
    /// Program counter of the originating instruction.
    pub pc: u32,
    /// True for loads, false for stores.
    pub is_load: bool,
    /// Simulator cycle at which the access was issued.
    pub issued_at: u32,
    /// Whether the access hit in the L1 cache.
    pub hit_l1: bool,
}

impl MemoryAccess {
    /// Creates a new access event.
    pub const fn new(addr: u32, pc: u32, is_load: bool, issued_at: u32, hit_l1: bool) -> Self {
        Self {
            addr,
            pc,
            is_load,
            issued_at,
            hit_l1,
        }
    }
}

/// A staged prefetch request awaiting issuance to the next cache level.
///
/// The program counter is the one that triggered the prediction; chained
/// requests derived while draining the quota keep it, so the RPT slot that
/// produced the stride keeps steering the stream.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PrefetchRequest {
    /// Predicted block address to bring in.
    pub addr: u32,
    /// Program counter of the triggering instruction.
    pub pc: u32,
}

impl PrefetchRequest {
    /// Creates a new prefetch request.
    pub const fn new(addr: u32, pc: u32) -> Self {
        Self { addr, pc }
    }
}
