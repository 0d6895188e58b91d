use thiserror::Error;

/// Failures that abort one family's sweep. Per-point solver errors never
/// reach this type; they only show up as missing rows.
#[derive(Debug, Error)]
pub enum SweepError {
    #[error("i/o failure: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid theta value '{value}' at line {line} of {path}")]
    ThetaParse {
        path: String,
        line: usize,
        value: String,
    },

    #[error("failed to build worker pool: {0}")]
    Pool(String),
}
