pub mod csr;

pub use csr::{C64, CsrMatrix};
