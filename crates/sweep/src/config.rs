use crate::grid::Range;

pub const DEFAULT_CHAIN_LENGTH: usize = 8;
pub const DEFAULT_WORKERS: usize = 4;

/// Sweep configuration: chain length, worker-pool size and the per-family
/// grid bounds. The bounds are explicit configuration, not hard-coded in
/// the pipeline; in particular the H1 upper bound can be set to 4.0 or to
/// the near-inclusive 4.1 variant.
#[derive(Debug, Clone)]
pub struct SweepConfig {
    pub chain_length: usize,
    pub workers: usize,
    pub h1_jz: Range,
    pub h1_d: Range,
    /// Δ, the H2 outer parameter.
    pub h2_anisotropy: Range,
    /// δ, the H2 inner parameter.
    pub h2_alternation: Range,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            chain_length: DEFAULT_CHAIN_LENGTH,
            workers: DEFAULT_WORKERS,
            h1_jz: Range::new(-4.0, 4.0, 0.1),
            h1_d: Range::new(-4.0, 4.0, 0.1),
            h2_anisotropy: Range::new(-1.5, 2.5, 0.05),
            h2_alternation: Range::new(0.0, 1.0, 0.0125),
        }
    }
}
