//! Ground eigenpair of a symmetric tridiagonal matrix: Sturm bisection for
//! the lowest eigenvalue, shifted inverse iteration for its eigenvector.

const PIVOT_GUARD: f64 = 1e-30;

/// Count eigenvalues strictly less than λ via the Sturm sequence (number of
/// negative pivots in the LDLT factorization).
fn sturm_count(diag: &[f64], off: &[f64], lambda: f64) -> usize {
    let n = diag.len();
    if n == 0 {
        return 0;
    }

    let mut count = 0;
    let mut q = diag[0] - lambda;
    if q < 0.0 {
        count += 1;
    }
    for i in 1..n {
        let q_safe = if q.abs() < PIVOT_GUARD {
            if q >= 0.0 {
                PIVOT_GUARD
            } else {
                -PIVOT_GUARD
            }
        } else {
            q
        };
        q = (diag[i] - lambda) - off[i - 1] * off[i - 1] / q_safe;
        if q < 0.0 {
            count += 1;
        }
    }
    count
}

/// Lowest eigenvalue via bisection inside the Gershgorin interval.
pub fn smallest_eigenvalue(diag: &[f64], off: &[f64]) -> f64 {
    let n = diag.len();
    if n == 1 {
        return diag[0];
    }

    let mut lo = f64::MAX;
    let mut hi = f64::MIN;
    for i in 0..n {
        let e_left = if i > 0 { off[i - 1].abs() } else { 0.0 };
        let e_right = if i < n - 1 { off[i].abs() } else { 0.0 };
        lo = lo.min(diag[i] - e_left - e_right);
        hi = hi.max(diag[i] + e_left + e_right);
    }
    lo -= 1.0;
    hi += 1.0;

    let mut a = lo;
    let mut b = hi;
    for _ in 0..200 {
        let mid = 0.5 * (a + b);
        if (b - a) < 2.0 * f64::EPSILON * mid.abs().max(1.0) {
            break;
        }
        if sturm_count(diag, off, mid) < 1 {
            a = mid;
        } else {
            b = mid;
        }
    }
    0.5 * (a + b)
}

/// Normalized eigenvector for the given eigenvalue, by inverse iteration on
/// the shifted tridiagonal system.
pub fn eigenvector(diag: &[f64], off: &[f64], lambda: f64) -> Vec<f64> {
    let n = diag.len();
    if n == 1 {
        return vec![1.0];
    }

    let scale = diag
        .iter()
        .chain(off.iter())
        .fold(1.0f64, |m, &v| m.max(v.abs()));
    // Shift slightly off the eigenvalue so the factorization stays regular.
    let shift = lambda - 1e-12 * scale;

    let norm = (n as f64).sqrt();
    let mut x: Vec<f64> = vec![1.0 / norm; n];
    for _ in 0..4 {
        let mut y = solve_shifted(diag, off, shift, &x);
        let nrm = y.iter().map(|v| v * v).sum::<f64>().sqrt();
        for v in &mut y {
            *v /= nrm;
        }
        x = y;
    }
    x
}

/// Thomas solve of (T - shift·I) y = b with a zero-pivot guard.
fn solve_shifted(diag: &[f64], off: &[f64], shift: f64, b: &[f64]) -> Vec<f64> {
    let n = diag.len();
    let mut c = vec![0.0; n - 1];
    let mut d = vec![0.0; n];
    let mut y = vec![0.0; n];

    let mut pivot = diag[0] - shift;
    if pivot.abs() < PIVOT_GUARD {
        pivot = PIVOT_GUARD;
    }
    c[0] = off[0] / pivot;
    d[0] = b[0] / pivot;

    for i in 1..n {
        let mut p = (diag[i] - shift) - off[i - 1] * c[i - 1];
        if p.abs() < PIVOT_GUARD {
            p = PIVOT_GUARD;
        }
        if i < n - 1 {
            c[i] = off[i] / p;
        }
        d[i] = (b[i] - off[i - 1] * d[i - 1]) / p;
    }

    y[n - 1] = d[n - 1];
    for i in (0..n - 1).rev() {
        y[i] = d[i] - c[i] * y[i + 1];
    }
    y
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_by_two_ground_pair() {
        // [[1, -1], [-1, 3]] → λ_min = 2 - √2
        let diag = [1.0, 3.0];
        let off = [-1.0];
        let lambda = smallest_eigenvalue(&diag, &off);
        assert!((lambda - (2.0 - 2.0_f64.sqrt())).abs() < 1e-12, "λ = {}", lambda);

        let v = eigenvector(&diag, &off, lambda);
        // Residual check: (T - λ)v ≈ 0
        let r0 = (diag[0] - lambda) * v[0] + off[0] * v[1];
        let r1 = off[0] * v[0] + (diag[1] - lambda) * v[1];
        assert!(r0.abs() < 1e-8 && r1.abs() < 1e-8, "r = ({}, {})", r0, r1);
    }

    #[test]
    fn diagonal_matrix_smallest() {
        let diag = [4.0, -1.5, 2.0, 0.25];
        let off = [0.0, 0.0, 0.0];
        let lambda = smallest_eigenvalue(&diag, &off);
        assert!((lambda + 1.5).abs() < 1e-12, "λ = {}", lambda);
    }
}
