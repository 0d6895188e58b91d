use thiserror::Error;

/// Per-point diagonalization failure. The sweep drops the point and keeps
/// going; nothing here ever aborts a run.
#[derive(Debug, Error)]
pub enum SolverError {
    #[error("ground state did not converge: residual {residual:.3e} after {iterations} Lanczos iterations")]
    NotConverged { residual: f64, iterations: usize },

    #[error("non-finite value encountered during diagonalization")]
    NonFinite,
}
