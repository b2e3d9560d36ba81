//! Prefetch statistics collection and reporting.
//!
//! This module tracks functional accuracy metrics for the prefetch unit:
//! 1. **Event mix:** Accesses observed, demand misses, prefetch-hit
//!    consumptions.
//! 2. **Prediction mix:** Stride-driven vs sequential-fallback predictions.
//! 3. **Issuance:** Requests staged, chained, and accepted downstream.
//!
//! Reduced prediction accuracy (from address/PC aliasing or strides that
//! never repeat) shows up here as a measured property; it is never surfaced
//! as an error.

/// Statistics counters mutated by the engine as it processes events.
#[derive(Clone, Debug, Default)]
pub struct PrefetchStats {
    /// Demand accesses observed via `cpu_request`.
    pub accesses: u64,
    /// Accesses that missed in L1 (triggering a full RPT update).
    pub demand_misses: u64,
    /// L1 hits that landed on a block this engine had tagged (consumed
    /// prefetches, observed while idle).
    pub prefetch_hits: u64,

    /// Predictions driven by a confident RPT stride.
    pub stride_predictions: u64,
    /// Predictions that fell back to the next sequential block.
    pub sequential_predictions: u64,

    /// Requests staged (initial and chained).
    pub requests_staged: u64,
    /// Staged requests derived while draining a quota.
    pub chained_requests: u64,
    /// Staged requests accepted by the driver via `complete_request`.
    pub requests_issued: u64,
}

/// Section names for selective stats output.
///
/// Valid section identifiers: `"summary"`, `"prediction"`, `"issue"`. Pass an
/// empty slice to `print_sections` to print all sections.
pub const STATS_SECTIONS: &[&str] = &["summary", "prediction", "issue"];

impl PrefetchStats {
    /// Fraction of issued requests later consumed by a demand hit.
    ///
    /// Returns 0.0 before anything has been issued.
    pub fn usefulness(&self) -> f64 {
        if self.requests_issued == 0 {
            0.0
        } else {
            self.prefetch_hits as f64 / self.requests_issued as f64
        }
    }

    /// Prints only the requested statistics sections to stdout.
    ///
    /// Each element of `sections` should be one of `"summary"`,
    /// `"prediction"`, or `"issue"`. Pass an empty slice to print all
    /// sections (same as `print()`).
    pub fn print_sections(&self, sections: &[String]) {
        let want = |s: &str| sections.is_empty() || sections.iter().any(|x| x == s);
        let acc = if self.accesses == 0 { 1 } else { self.accesses };

        if want("summary") {
            println!("\n==========================================================");
            println!("PREFETCH UNIT STATISTICS");
            println!("==========================================================");
            println!("accesses                 {}", self.accesses);
            println!(
                "demand_misses            {} ({:.2}%)",
                self.demand_misses,
                (self.demand_misses as f64 / acc as f64) * 100.0
            );
            println!(
                "prefetch_hits            {} ({:.2}%)",
                self.prefetch_hits,
                (self.prefetch_hits as f64 / acc as f64) * 100.0
            );
            println!("----------------------------------------------------------");
        }
        if want("prediction") {
            let total = self.stride_predictions + self.sequential_predictions;
            let preds = if total == 0 { 1 } else { total };
            println!("PREDICTION MIX");
            println!(
                "  pred.stride            {} ({:.2}%)",
                self.stride_predictions,
                (self.stride_predictions as f64 / preds as f64) * 100.0
            );
            println!(
                "  pred.sequential        {} ({:.2}%)",
                self.sequential_predictions,
                (self.sequential_predictions as f64 / preds as f64) * 100.0
            );
            println!("----------------------------------------------------------");
        }
        if want("issue") {
            println!("ISSUE");
            println!("  req.staged             {}", self.requests_staged);
            println!("  req.chained            {}", self.chained_requests);
            println!("  req.issued             {}", self.requests_issued);
            println!("  req.usefulness         {:.2}%", self.usefulness() * 100.0);
        }
        println!("==========================================================");
    }

    /// Prints all statistics sections to stdout.
    ///
    /// Equivalent to `print_sections(&[])`.
    pub fn print(&self) {
        self.print_sections(&[]);
    }
}
