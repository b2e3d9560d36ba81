//! Reference prediction table (RPT).
//!
//! A fixed-capacity, direct-mapped table keyed by instruction pointer. Each
//! slot remembers the last address referenced by its owning PC, the last
//! observed stride between consecutive references, and whether the slot is
//! confident enough to drive stride-based prediction.
//!
//! Confidence is earned only on the demand-miss update path, and only when
//! two consecutive strides are equal and strictly larger than the
//! worthwhile-stride threshold (small strides are noise; sequential
//! next-block prediction already covers them). Once earned, confidence is
//! sticky: the hit/consumption path consumes the stored flag without
//! re-validating it. That asymmetry is a deliberate conservative bias toward
//! stable strides.
//!
//! Slots are selected by `pc mod N`, so two PCs congruent modulo the table
//! size share a slot and overwrite each other's history.

use tracing::trace;

/// One direct-mapped RPT slot.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RptEntry {
    /// PC that last claimed this slot.
    pub owner_pc: u32,
    /// Last address referenced by the owning PC.
    pub last_addr: u32,
    /// Stride between the owner's last two references.
    pub last_stride: i32,
    /// Whether `last_stride` repeated and cleared the worthwhile threshold.
    pub confident: bool,
}

/// Per-instruction stride history table.
#[derive(Clone, Debug)]
pub struct ReferencePredictionTable {
    entries: Vec<RptEntry>,
    block_size: u32,
    worthwhile_stride: i32,
}

impl ReferencePredictionTable {
    /// Creates a cleared table.
    ///
    /// # Arguments
    ///
    /// * `num_entries` - Slot count N (non-zero; callers clamp degenerate
    ///   configs).
    /// * `block_size` - Sequential-fallback increment in bytes.
    /// * `worthwhile_stride` - Strides must exceed this to earn confidence.
    pub fn new(num_entries: u32, block_size: u32, worthwhile_stride: i32) -> Self {
        Self {
            entries: vec![RptEntry::default(); num_entries as usize],
            block_size,
            worthwhile_stride,
        }
    }

    /// Returns the slot count.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True iff the table has no slots (never the case after clamping).
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// True iff no slot holds a confident stride.
    pub fn is_clear(&self) -> bool {
        self.entries.iter().all(|e| !e.confident)
    }

    /// Maps a PC to its slot index.
    fn index(&self, pc: u32) -> usize {
        (pc as usize) % self.entries.len()
    }

    /// Returns the slot at `pc mod N`, whether or not `pc` owns it.
    ///
    /// Callers must compare `entry.owner_pc == pc` to distinguish a real hit
    /// from slot aliasing.
    pub fn lookup(&self, pc: u32) -> &RptEntry {
        &self.entries[self.index(pc)]
    }

    /// Processes a demand miss for `pc` at `addr` and returns the predicted
    /// next address.
    ///
    /// This is the only writer of slot state:
    /// - Owner match, stride repeated above threshold: the slot becomes
    ///   confident and the prediction is `addr + stride`.
    /// - Owner match, stride changed or too small: the slot loses confidence,
    ///   records the new stride, and the prediction falls back to
    ///   `addr + block_size`.
    /// - Owner mismatch (empty or aliased slot): the slot is claimed for
    ///   `pc` with stride 0, no confidence, sequential prediction.
    ///
    /// The owner PC and last address are written unconditionally.
    pub fn update(&mut self, pc: u32, addr: u32) -> u32 {
        let block_size = self.block_size;
        let worthwhile = self.worthwhile_stride;
        let index = self.index(pc);
        let entry = &mut self.entries[index];

        let predicted = if entry.owner_pc == pc {
            let stride = addr.wrapping_sub(entry.last_addr) as i32;
            if stride == entry.last_stride && stride > worthwhile {
                if !entry.confident {
                    trace!(pc, stride, "rpt slot promoted to confident");
                }
                entry.confident = true;
                addr.wrapping_add_signed(stride)
            } else {
                if entry.confident {
                    trace!(pc, stride, last = entry.last_stride, "rpt slot demoted");
                }
                entry.confident = false;
                entry.last_stride = stride;
                addr.wrapping_add(block_size)
            }
        } else {
            // Slot claimed by a new PC; zero the stride so the next miss
            // cannot confuse the previous owner's history with its own.
            entry.confident = false;
            entry.last_stride = 0;
            addr.wrapping_add(block_size)
        };

        entry.owner_pc = pc;
        entry.last_addr = addr;
        predicted
    }
}
