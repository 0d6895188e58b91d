pub mod correlators;
pub mod error;
pub mod operators;

pub use correlators::{midpoint_sites, Component, Correlators};
pub use error::ConfigError;
pub use operators::{Spin, SpinOperators};
