//! Tagged block set.
//!
//! A fixed-capacity membership set over block addresses, backed by a bit
//! vector. The engine marks every address it prefetches; a later demand hit
//! on a marked address is the signal that a prefetch was consumed and the
//! stream should be extended.
//!
//! Addresses index the set via `addr mod capacity`, so two addresses
//! congruent modulo the bit capacity are indistinguishable. This aliasing is
//! the intended space/precision trade-off of keeping only one bit per
//! tracked block; false positives and negatives under aliasing are accepted
//! behavior, not a defect.

const BITS_PER_WORD: u32 = u64::BITS;

/// Fixed-capacity bit set recording addresses believed to be pending
/// prefetch consumption.
#[derive(Clone, Debug)]
pub struct TaggedBlockSet {
    /// Backing words, `capacity.div_ceil(64)` of them.
    words: Vec<u64>,
    /// Logical bit capacity; never resized after construction.
    capacity: u32,
}

impl TaggedBlockSet {
    /// Creates a cleared set with the given bit capacity.
    ///
    /// # Arguments
    ///
    /// * `capacity` - Number of addressable bits (must be non-zero; callers
    ///   clamp degenerate configs before reaching here).
    pub fn new(capacity: u32) -> Self {
        let words = capacity.div_ceil(BITS_PER_WORD) as usize;
        Self {
            words: vec![0; words],
            capacity,
        }
    }

    /// Returns the logical bit capacity.
    pub const fn capacity(&self) -> u32 {
        self.capacity
    }

    /// Maps an address to its (word, mask) position.
    const fn position(&self, addr: u32) -> (usize, u64) {
        let bit = addr % self.capacity;
        ((bit / BITS_PER_WORD) as usize, 1u64 << (bit % BITS_PER_WORD))
    }

    /// Sets the bit for `addr`. Idempotent; duplicate marks are harmless.
    pub fn mark(&mut self, addr: u32) {
        let (word, mask) = self.position(addr);
        self.words[word] |= mask;
    }

    /// Clears the bit for `addr`.
    pub fn unmark(&mut self, addr: u32) {
        let (word, mask) = self.position(addr);
        self.words[word] &= !mask;
    }

    /// Tests the bit for `addr`.
    pub fn test(&self, addr: u32) -> bool {
        let (word, mask) = self.position(addr);
        self.words[word] & mask != 0
    }

    /// True iff no bit is set.
    pub fn is_clear(&self) -> bool {
        self.words.iter().all(|&w| w == 0)
    }
}
