//! The three Hamiltonian families, assembled as sparse chain operators.
//!
//! All chains are open-boundary; bond operators are d²×d² matrices embedded
//! between flanking identities by Kronecker product.

use sparse::{C64, CsrMatrix};
use spinops::SpinOperators;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Family {
    /// XXZ chain with uniaxial single-ion anisotropy, parameters (Jz, D).
    H1,
    /// Bond-alternating XXZ chain, parameters (Δ, δ).
    H2,
    /// Bilinear-biquadratic chain, parameter θ.
    H3,
}

impl Family {
    pub const ALL: [Family; 3] = [Family::H1, Family::H2, Family::H3];

    pub fn label(self) -> &'static str {
        match self {
            Family::H1 => "H1",
            Family::H2 => "H2",
            Family::H3 => "H3",
        }
    }

    /// Names of the two parameter columns in the output table. H3 has a
    /// single physical parameter; its second column is the -1 sentinel that
    /// keeps the schema uniform across families.
    pub fn param_names(self) -> (&'static str, &'static str) {
        match self {
            Family::H1 => ("Jz", "D"),
            Family::H2 => ("Delta", "delta"),
            Family::H3 => ("theta", "-1"),
        }
    }

    pub fn parse(label: &str) -> Option<Self> {
        match label.trim() {
            "H1" => Some(Family::H1),
            "H2" => Some(Family::H2),
            "H3" => Some(Family::H3),
            _ => None,
        }
    }

    /// Assemble the chain Hamiltonian for one parameter tuple.
    pub fn hamiltonian(self, n: usize, ops: &SpinOperators, outer: f64, inner: f64) -> CsrMatrix {
        match self {
            Family::H1 => xxz_single_ion(n, ops, outer, inner),
            Family::H2 => bond_alternating_xxz(n, ops, outer, inner),
            Family::H3 => bilinear_biquadratic(n, ops, outer),
        }
    }
}

/// H1 = Σ_i (SxSx + SySy + Jz SzSz)_{i,i+1} + D Σ_i (Sz_i)².
pub fn xxz_single_ion(n: usize, ops: &SpinOperators, jz: f64, d_aniso: f64) -> CsrMatrix {
    let d = ops.spin.states();
    let bond = exchange_bond(ops, jz);
    let mut h = chain_sum(&bond, n, d);
    for site in 0..n {
        h = h.add(&embed_site(&ops.sz2, site, n, d).scale(real(d_aniso)));
    }
    h
}

/// H2 = Σ_i (1 + δ(−1)^i) (SxSx + SySy + Δ SzSz)_{i,i+1}.
pub fn bond_alternating_xxz(n: usize, ops: &SpinOperators, delta_big: f64, delta_small: f64) -> CsrMatrix {
    let d = ops.spin.states();
    let bond = exchange_bond(ops, delta_big);
    let mut h = CsrMatrix::zeros(d.pow(n as u32), d.pow(n as u32));
    for site in 0..n.saturating_sub(1) {
        let sign = if site % 2 == 0 { 1.0 } else { -1.0 };
        let j = 1.0 + delta_small * sign;
        h = h.add(&embed_bond(&bond, site, n, d).scale(real(j)));
    }
    h
}

/// H3 = Σ_i [cos θ (S_i·S_{i+1}) + sin θ (S_i·S_{i+1})²].
pub fn bilinear_biquadratic(n: usize, ops: &SpinOperators, theta: f64) -> CsrMatrix {
    let d = ops.spin.states();
    let bilinear = exchange_bond(ops, 1.0);
    let biquadratic = bilinear.matmul(&bilinear);
    let bond = bilinear
        .scale(real(theta.cos()))
        .add(&biquadratic.scale(real(theta.sin())));
    chain_sum(&bond, n, d)
}

/// Two-site exchange SxSx + SySy + anisotropy·SzSz as a d²×d² matrix.
fn exchange_bond(ops: &SpinOperators, anisotropy: f64) -> CsrMatrix {
    let xx = ops.sx.kron(&ops.sx);
    let yy = ops.sy.kron(&ops.sy);
    let zz = ops.sz.kron(&ops.sz);
    xx.add(&yy).add(&zz.scale(real(anisotropy)))
}

/// Sum of the same bond operator over every nearest-neighbor pair.
fn chain_sum(bond: &CsrMatrix, n: usize, d: usize) -> CsrMatrix {
    let dim = d.pow(n as u32);
    let mut h = CsrMatrix::zeros(dim, dim);
    for site in 0..n.saturating_sub(1) {
        h = h.add(&embed_bond(bond, site, n, d));
    }
    h
}

fn embed_bond(bond: &CsrMatrix, site: usize, n: usize, d: usize) -> CsrMatrix {
    let left = CsrMatrix::identity(d.pow(site as u32));
    let right = CsrMatrix::identity(d.pow((n - site - 2) as u32));
    left.kron(bond).kron(&right)
}

fn embed_site(op: &CsrMatrix, site: usize, n: usize, d: usize) -> CsrMatrix {
    let left = CsrMatrix::identity(d.pow(site as u32));
    let right = CsrMatrix::identity(d.pow((n - site - 1) as u32));
    left.kron(op).kron(&right)
}

fn real(x: f64) -> C64 {
    C64::new(x, 0.0)
}
