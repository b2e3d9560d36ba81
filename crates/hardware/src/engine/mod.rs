//! Prefetch engine.
//!
//! This module contains the orchestrating state machine and the two tables it
//! owns. The engine consumes one demand-access event at a time, updates its
//! tag and stride state, and exposes a poll/complete protocol for staging one
//! prefetch request per cycle.

/// Reference prediction table (per-PC stride history).
pub mod rpt;

/// Tagged block set (pending-prefetch membership bits).
pub mod tags;

pub use self::rpt::{ReferencePredictionTable, RptEntry};
pub use self::tags::TaggedBlockSet;

use tracing::trace;

use crate::common::{MemoryAccess, PrefetchRequest};
use crate::config::PrefetchConfig;
use crate::stats::PrefetchStats;

/// Issuance state of the engine.
///
/// The engine cycles between these two states for the life of the run; there
/// is no terminal state.
#[derive(Clone, Copy, Debug)]
enum EngineState {
    /// No staged request.
    Idle,
    /// One staged request, plus `remaining` chained issuances before the
    /// engine returns to idle.
    Armed {
        staged: PrefetchRequest,
        remaining: u32,
    },
}

/// The prediction-and-issuance engine.
///
/// Owns its tables exclusively; a multi-core driver must construct one engine
/// per simulated core. Sharing tables across cores would corrupt predictions
/// across unrelated instruction streams.
///
/// The driver calls [`cpu_request`](Self::cpu_request) for every demand
/// access, then polls [`has_request`](Self::has_request) /
/// [`request`](Self::request) once per cycle and acknowledges acceptance with
/// [`complete_request`](Self::complete_request).
#[derive(Debug)]
pub struct PrefetchEngine {
    state: EngineState,
    tags: TaggedBlockSet,
    rpt: ReferencePredictionTable,
    block_size: u32,
    reqs_per_miss: u32,
    stats: PrefetchStats,
}

impl PrefetchEngine {
    /// Creates an engine with cleared tables in the idle state.
    ///
    /// Zero-valued config fields are clamped to the reference defaults;
    /// drivers that prefer failing fast should call
    /// [`PrefetchConfig::validate`] first.
    pub fn new(config: &PrefetchConfig) -> Self {
        let reference = PrefetchConfig::default();
        let tag_bits = if config.tag_bits == 0 {
            reference.tag_bits
        } else {
            config.tag_bits
        };
        let rpt_entries = if config.rpt_entries == 0 {
            reference.rpt_entries
        } else {
            config.rpt_entries
        };
        let block_size = if config.block_size == 0 {
            reference.block_size
        } else {
            config.block_size
        };
        let reqs_per_miss = if config.reqs_per_miss == 0 {
            reference.reqs_per_miss
        } else {
            config.reqs_per_miss
        };

        Self {
            state: EngineState::Idle,
            tags: TaggedBlockSet::new(tag_bits),
            rpt: ReferencePredictionTable::new(rpt_entries, block_size, config.worthwhile_stride),
            block_size,
            reqs_per_miss,
            stats: PrefetchStats::default(),
        }
    }

    /// Notifies the engine of a demand access.
    ///
    /// Three cases, checked in order:
    /// - **Consumption:** an L1 hit on a tagged block while idle means a
    ///   prior prefetch was used; the stream is extended with one lookup-only
    ///   prediction (no RPT slot mutation).
    /// - **Demand miss:** the RPT is updated with the full stride policy and
    ///   its prediction is staged. This overrides any prior armed state.
    /// - Anything else changes no table state.
    ///
    /// In every case the accessed address is unmarked afterwards: it has now
    /// been consumed or freshly referenced by the CPU and must stop being
    /// considered pending prefetch.
    pub fn cpu_request(&mut self, access: MemoryAccess) {
        self.stats.accesses += 1;

        let idle = matches!(self.state, EngineState::Idle);
        if access.hit_l1 && idle && self.tags.test(access.addr) {
            self.stats.prefetch_hits += 1;
            let predicted = self.next_in_stream(access.pc, access.addr);
            self.arm(PrefetchRequest::new(predicted, access.pc));
        } else if !access.hit_l1 {
            self.stats.demand_misses += 1;
            let predicted = self.rpt.update(access.pc, access.addr);
            if self.rpt.lookup(access.pc).confident {
                self.stats.stride_predictions += 1;
            } else {
                self.stats.sequential_predictions += 1;
            }
            self.arm(PrefetchRequest::new(predicted, access.pc));
        }

        // Ordered after any mark of the new prediction: if the prediction
        // aliases the accessed address, consumed-by-CPU wins.
        self.tags.unmark(access.addr);
    }

    /// True iff a staged request is ready for this cycle.
    pub const fn has_request(&self, _cycle: u32) -> bool {
        matches!(self.state, EngineState::Armed { .. })
    }

    /// Returns the currently staged request, or `None` when idle.
    pub const fn request(&self, _cycle: u32) -> Option<PrefetchRequest> {
        match self.state {
            EngineState::Armed { staged, .. } => Some(staged),
            EngineState::Idle => None,
        }
    }

    /// Acknowledges that the driver accepted the staged request.
    ///
    /// While quota remains, the next chained address is derived from the
    /// staged request's PC with the same stride-or-sequential policy used on
    /// the consumption path and staged in its place; otherwise the engine
    /// returns to idle. Calling this while idle is a no-op.
    pub fn complete_request(&mut self, _cycle: u32) {
        match self.state {
            EngineState::Idle => {}
            EngineState::Armed { staged, remaining } => {
                self.stats.requests_issued += 1;
                if remaining == 0 {
                    trace!(pc = staged.pc, "prefetch quota drained");
                    self.state = EngineState::Idle;
                } else {
                    let predicted = self.next_in_stream(staged.pc, staged.addr);
                    let next = PrefetchRequest::new(predicted, staged.pc);
                    self.tags.mark(next.addr);
                    self.stats.requests_staged += 1;
                    self.stats.chained_requests += 1;
                    trace!(addr = next.addr, pc = next.pc, remaining = remaining - 1, "prefetch chained");
                    self.state = EngineState::Armed {
                        staged: next,
                        remaining: remaining - 1,
                    };
                }
            }
        }
    }

    /// Returns the statistics counters.
    pub const fn stats(&self) -> &PrefetchStats {
        &self.stats
    }

    /// Returns the tagged block set.
    pub const fn tags(&self) -> &TaggedBlockSet {
        &self.tags
    }

    /// Returns the reference prediction table.
    pub const fn rpt(&self) -> &ReferencePredictionTable {
        &self.rpt
    }

    /// Lookup-only prediction used on the consumption and chained paths.
    ///
    /// Reads the stored confidence flag as-is; confidence is re-validated
    /// only by the demand-miss update path.
    fn next_in_stream(&mut self, pc: u32, addr: u32) -> u32 {
        let entry = *self.rpt.lookup(pc);
        if entry.owner_pc == pc && entry.confident {
            self.stats.stride_predictions += 1;
            addr.wrapping_add_signed(entry.last_stride)
        } else {
            self.stats.sequential_predictions += 1;
            addr.wrapping_add(self.block_size)
        }
    }

    /// Stages a request, tags its address, and (re-)arms with a full quota.
    fn arm(&mut self, request: PrefetchRequest) {
        self.tags.mark(request.addr);
        self.stats.requests_staged += 1;
        let remaining = self.reqs_per_miss - 1;
        trace!(addr = request.addr, pc = request.pc, remaining, "prefetch staged");
        self.state = EngineState::Armed {
            staged: request,
            remaining,
        };
    }
}
