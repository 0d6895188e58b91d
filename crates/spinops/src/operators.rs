//! Single-site spin matrices from the standard angular-momentum formulas.

use crate::correlators::Component;
use crate::error::ConfigError;
use sparse::{C64, CsrMatrix};

/// Spin magnitude with a configured closed-form operator set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Spin {
    Half,
    One,
}

impl Spin {
    /// Parse the configuration label ("1/2" or "1").
    pub fn parse(label: &str) -> Result<Self, ConfigError> {
        match label.trim() {
            "1/2" | "0.5" => Ok(Spin::Half),
            "1" => Ok(Spin::One),
            other => Err(ConfigError::UnsupportedSpin(other.to_string())),
        }
    }

    /// Spin quantum number s.
    pub fn magnitude(self) -> f64 {
        match self {
            Spin::Half => 0.5,
            Spin::One => 1.0,
        }
    }

    /// Local Hilbert-space dimension d = 2s + 1.
    pub fn states(self) -> usize {
        match self {
            Spin::Half => 2,
            Spin::One => 3,
        }
    }
}

/// Immutable bundle of single-site operators for one spin magnitude.
///
/// Built once at startup and passed explicitly to the correlator builder
/// and to Hamiltonian assembly; the squares are matrix products of the
/// operator with itself.
#[derive(Debug, Clone)]
pub struct SpinOperators {
    pub spin: Spin,
    pub sx: CsrMatrix,
    pub sy: CsrMatrix,
    pub sz: CsrMatrix,
    pub sx2: CsrMatrix,
    pub sy2: CsrMatrix,
    pub sz2: CsrMatrix,
}

impl SpinOperators {
    /// Sz diagonal with eigenvalues s..−s; Sx, Sy from the raising and
    /// lowering operators divided by 2 and 2i.
    pub fn new(spin: Spin) -> Self {
        let s = spin.magnitude();
        let d = spin.states();
        let zero = C64::new(0.0, 0.0);

        let mut sz = vec![zero; d * d];
        let mut sx = vec![zero; d * d];
        let mut sy = vec![zero; d * d];

        for k in 0..d {
            sz[k * d + k] = C64::new(s - k as f64, 0.0);
        }
        for k in 0..d - 1 {
            // ⟨m+1| S+ |m⟩ with m = s - k - 1
            let m = s - (k + 1) as f64;
            let amp = (s * (s + 1.0) - m * (m + 1.0)).sqrt();
            sx[k * d + k + 1] = C64::new(amp / 2.0, 0.0);
            sx[(k + 1) * d + k] = C64::new(amp / 2.0, 0.0);
            sy[k * d + k + 1] = C64::new(0.0, -amp / 2.0);
            sy[(k + 1) * d + k] = C64::new(0.0, amp / 2.0);
        }

        let sx = CsrMatrix::from_dense(d, d, &sx);
        let sy = CsrMatrix::from_dense(d, d, &sy);
        let sz = CsrMatrix::from_dense(d, d, &sz);
        let sx2 = sx.matmul(&sx);
        let sy2 = sy.matmul(&sy);
        let sz2 = sz.matmul(&sz);

        Self {
            spin,
            sx,
            sy,
            sz,
            sx2,
            sy2,
            sz2,
        }
    }

    pub fn component(&self, c: Component) -> &CsrMatrix {
        match c {
            Component::X => &self.sx,
            Component::Y => &self.sy,
            Component::Z => &self.sz,
        }
    }

    pub fn component_squared(&self, c: Component) -> &CsrMatrix {
        match c {
            Component::X => &self.sx2,
            Component::Y => &self.sy2,
            Component::Z => &self.sz2,
        }
    }
}
