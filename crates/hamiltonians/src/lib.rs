pub mod error;
pub mod families;
pub mod lanczos;
mod tridiag;

pub use error::SolverError;
pub use families::Family;
pub use lanczos::{ground_state, GroundState};
