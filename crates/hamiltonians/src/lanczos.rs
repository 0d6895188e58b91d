//! Hermitian Lanczos ground-state extraction with full reorthogonalization.
//!
//! Builds a Krylov subspace of the sparse Hamiltonian, takes the lowest
//! eigenpair of the resulting tridiagonal matrix, and assembles the Ritz
//! vector from the stored Lanczos basis. Deterministic for a fixed seed.

use crate::error::SolverError;
use crate::tridiag;
use sparse::{C64, CsrMatrix};

pub const DEFAULT_MAX_ITER: usize = 300;
pub const DEFAULT_TOL: f64 = 1e-9;
pub const DEFAULT_SEED: u64 = 42;

/// Normalized ground-state vector and its energy.
#[derive(Debug)]
pub struct GroundState {
    pub energy: f64,
    pub vector: Vec<C64>,
}

/// Lowest eigenpair of a Hermitian sparse matrix.
///
/// The residual ‖Hψ − Eψ‖ is checked against `tol` (relative to the energy
/// scale); a miss is a per-point `SolverError`, never a panic.
pub fn ground_state_with(
    h: &CsrMatrix,
    max_iter: usize,
    tol: f64,
    seed: u64,
) -> Result<GroundState, SolverError> {
    let n = h.rows;
    let m = max_iter.min(n).max(1);

    let mut rng = LcgRng::new(seed);
    let mut v: Vec<C64> = (0..n).map(|_| C64::new(rng.uniform() - 0.5, 0.0)).collect();
    normalize(&mut v);

    let mut alpha: Vec<f64> = Vec::with_capacity(m);
    let mut beta: Vec<f64> = Vec::with_capacity(m);
    let mut basis: Vec<Vec<C64>> = Vec::with_capacity(m);
    basis.push(v.clone());

    let mut v_prev = vec![C64::new(0.0, 0.0); n];
    let mut beta_prev = 0.0;
    let mut w = vec![C64::new(0.0, 0.0); n];

    for j in 0..m {
        h.spmv(&v, &mut w);

        if j > 0 {
            for i in 0..n {
                w[i] -= C64::new(beta_prev, 0.0) * v_prev[i];
            }
        }

        // α_j = ⟨v_j, H v_j⟩, real for Hermitian H
        let a_j = dot(&v, &w).re;
        if !a_j.is_finite() {
            return Err(SolverError::NonFinite);
        }
        alpha.push(a_j);

        for i in 0..n {
            w[i] -= C64::new(a_j, 0.0) * v[i];
        }

        // Full reorthogonalization against the stored basis
        for prev in &basis {
            let proj = dot(prev, &w);
            for i in 0..n {
                w[i] -= proj * prev[i];
            }
        }

        let b_next = dot(&w, &w).re.sqrt();
        if !b_next.is_finite() {
            return Err(SolverError::NonFinite);
        }

        if b_next < 1e-14 {
            // Invariant subspace found, the Krylov space is exhausted
            break;
        }
        if j + 1 == m {
            break;
        }

        beta.push(b_next);
        v_prev.copy_from_slice(&v);
        beta_prev = b_next;
        for i in 0..n {
            v[i] = w[i] / b_next;
        }
        basis.push(v.clone());
    }

    let steps = alpha.len();
    let off = &beta[..steps - 1];
    let energy = tridiag::smallest_eigenvalue(&alpha, off);
    let coeffs = tridiag::eigenvector(&alpha, off, energy);

    let mut psi = vec![C64::new(0.0, 0.0); n];
    for (c, vec_j) in coeffs.iter().zip(basis.iter()) {
        for i in 0..n {
            psi[i] += C64::new(*c, 0.0) * vec_j[i];
        }
    }
    normalize(&mut psi);

    let residual = residual_norm(h, &psi, energy);
    if !residual.is_finite() {
        return Err(SolverError::NonFinite);
    }
    if residual > tol * energy.abs().max(1.0) {
        return Err(SolverError::NotConverged {
            residual,
            iterations: steps,
        });
    }

    Ok(GroundState {
        energy,
        vector: psi,
    })
}

/// `ground_state_with` under the default iteration cap, tolerance and seed.
pub fn ground_state(h: &CsrMatrix) -> Result<GroundState, SolverError> {
    ground_state_with(h, DEFAULT_MAX_ITER, DEFAULT_TOL, DEFAULT_SEED)
}

fn residual_norm(h: &CsrMatrix, psi: &[C64], energy: f64) -> f64 {
    let mut y = vec![C64::new(0.0, 0.0); psi.len()];
    h.spmv(psi, &mut y);
    let mut sum = 0.0;
    for i in 0..psi.len() {
        let r = y[i] - C64::new(energy, 0.0) * psi[i];
        sum += r.norm_sqr();
    }
    sum.sqrt()
}

fn dot(a: &[C64], b: &[C64]) -> C64 {
    a.iter().zip(b.iter()).map(|(x, y)| x.conj() * y).sum()
}

fn normalize(v: &mut [C64]) {
    let nrm = dot(v, v).re.sqrt();
    for x in v.iter_mut() {
        *x /= nrm;
    }
}

struct LcgRng(u64);

impl LcgRng {
    fn new(seed: u64) -> Self {
        Self(seed.wrapping_add(1))
    }

    fn uniform(&mut self) -> f64 {
        self.0 = self
            .0
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);
        (self.0 >> 11) as f64 / (1u64 << 53) as f64
    }
}
