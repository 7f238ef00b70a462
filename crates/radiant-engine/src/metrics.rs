//! Per-pass and per-run counters.

/// Counters collected during a single pass.
///
/// Durations are in microseconds.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PassMetrics {
    /// Zero-based pass index.
    pub pass: u64,
    /// Candidates processed this pass.
    pub active: usize,
    /// Secondaries merged into the active set at the end of the pass.
    pub spawned: usize,
    /// Candidates retired at the end of the pass.
    pub retired: usize,
    /// Wall-clock time of the pass, including the merge.
    pub elapsed_us: u64,
}

/// Totals over a whole run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RunMetrics {
    /// Passes executed.
    pub passes: u64,
    /// Candidate-passes processed (sum of [`PassMetrics::active`]).
    pub processed: u64,
    /// Secondaries spawned.
    pub spawned: u64,
    /// Candidates retired.
    pub retired: u64,
    /// Total wall-clock time of all passes, in microseconds.
    pub elapsed_us: u64,
}

impl RunMetrics {
    /// Fold one pass into the totals.
    pub fn record(&mut self, pass: &PassMetrics) {
        self.passes += 1;
        self.processed += pass.active as u64;
        self.spawned += pass.spawned as u64;
        self.retired += pass.retired as u64;
        self.elapsed_us += pass.elapsed_us;
    }
}
