use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("unsupported spin magnitude '{0}': no closed-form operators configured")]
    UnsupportedSpin(String),

    #[error("chain length must be at least 1, got {0}")]
    ChainLength(usize),
}
