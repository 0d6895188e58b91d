pub mod config;
pub mod error;
pub mod grid;
pub mod output;
pub mod pipeline;
pub mod runtime;

pub use config::SweepConfig;
pub use error::SweepError;
pub use grid::{read_thetas, ParameterPoint, Range};
pub use pipeline::{effective_workers, run_family};
