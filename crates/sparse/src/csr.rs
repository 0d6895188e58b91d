//! Compressed Sparse Row matrices over complex entries.
//!
//! Chain operators live on a d^N-dimensional Hilbert space and are built by
//! repeated Kronecker products, so the CSR layout is what keeps both the
//! build and the later matrix-vector products affordable.

use num_complex::Complex64;

pub type C64 = Complex64;

/// Sparse matrix in Compressed Sparse Row format, column indices sorted
/// within each row. Sorted form makes two builds of the same operator
/// compare exactly equal.
#[derive(Debug, Clone, PartialEq)]
pub struct CsrMatrix {
    pub rows: usize,
    pub cols: usize,
    pub row_ptr: Vec<usize>,
    pub col_idx: Vec<usize>,
    pub values: Vec<C64>,
}

impl CsrMatrix {
    /// n×n identity.
    pub fn identity(n: usize) -> Self {
        Self {
            rows: n,
            cols: n,
            row_ptr: (0..=n).collect(),
            col_idx: (0..n).collect(),
            values: vec![C64::new(1.0, 0.0); n],
        }
    }

    /// All-zero matrix, the starting point for sum accumulation.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            row_ptr: vec![0; rows + 1],
            col_idx: Vec::new(),
            values: Vec::new(),
        }
    }

    /// Build from a dense row-major slice, dropping exact zeros.
    pub fn from_dense(rows: usize, cols: usize, data: &[C64]) -> Self {
        assert_eq!(data.len(), rows * cols, "dense data length mismatch");
        let mut row_ptr = Vec::with_capacity(rows + 1);
        let mut col_idx = Vec::new();
        let mut values = Vec::new();
        row_ptr.push(0);
        for r in 0..rows {
            for c in 0..cols {
                let v = data[r * cols + c];
                if v != C64::new(0.0, 0.0) {
                    col_idx.push(c);
                    values.push(v);
                }
            }
            row_ptr.push(col_idx.len());
        }
        Self {
            rows,
            cols,
            row_ptr,
            col_idx,
            values,
        }
    }

    /// Number of non-zero entries.
    pub fn nnz(&self) -> usize {
        self.values.len()
    }

    /// Kronecker product self ⊗ other. Sorted CSR in, sorted CSR out.
    pub fn kron(&self, other: &CsrMatrix) -> CsrMatrix {
        let rows = self.rows * other.rows;
        let cols = self.cols * other.cols;
        let mut row_ptr = Vec::with_capacity(rows + 1);
        let mut col_idx = Vec::with_capacity(self.nnz() * other.nnz());
        let mut values = Vec::with_capacity(self.nnz() * other.nnz());
        row_ptr.push(0);

        for ra in 0..self.rows {
            for rb in 0..other.rows {
                for ja in self.row_ptr[ra]..self.row_ptr[ra + 1] {
                    let ca = self.col_idx[ja];
                    let va = self.values[ja];
                    for jb in other.row_ptr[rb]..other.row_ptr[rb + 1] {
                        col_idx.push(ca * other.cols + other.col_idx[jb]);
                        values.push(va * other.values[jb]);
                    }
                }
                row_ptr.push(col_idx.len());
            }
        }

        CsrMatrix {
            rows,
            cols,
            row_ptr,
            col_idx,
            values,
        }
    }

    /// Entrywise sum. Dimensions must match; exact-zero sums are dropped.
    pub fn add(&self, other: &CsrMatrix) -> CsrMatrix {
        assert_eq!(self.rows, other.rows, "row count mismatch in add");
        assert_eq!(self.cols, other.cols, "col count mismatch in add");

        let mut row_ptr = Vec::with_capacity(self.rows + 1);
        let mut col_idx = Vec::new();
        let mut values = Vec::new();
        row_ptr.push(0);

        for r in 0..self.rows {
            let mut ia = self.row_ptr[r];
            let mut ib = other.row_ptr[r];
            let ea = self.row_ptr[r + 1];
            let eb = other.row_ptr[r + 1];
            while ia < ea || ib < eb {
                let (c, v) = if ib >= eb || (ia < ea && self.col_idx[ia] < other.col_idx[ib]) {
                    let out = (self.col_idx[ia], self.values[ia]);
                    ia += 1;
                    out
                } else if ia >= ea || other.col_idx[ib] < self.col_idx[ia] {
                    let out = (other.col_idx[ib], other.values[ib]);
                    ib += 1;
                    out
                } else {
                    let out = (self.col_idx[ia], self.values[ia] + other.values[ib]);
                    ia += 1;
                    ib += 1;
                    out
                };
                if v != C64::new(0.0, 0.0) {
                    col_idx.push(c);
                    values.push(v);
                }
            }
            row_ptr.push(col_idx.len());
        }

        CsrMatrix {
            rows: self.rows,
            cols: self.cols,
            row_ptr,
            col_idx,
            values,
        }
    }

    /// Scalar multiple.
    pub fn scale(&self, factor: C64) -> CsrMatrix {
        let mut out = self.clone();
        for v in &mut out.values {
            *v *= factor;
        }
        out
    }

    /// Matrix product self · other, via a per-row dense accumulator.
    ///
    /// Used for operator squares and bond-operator squares, which are the
    /// matrix product of the operator with itself, never the elementwise
    /// square.
    pub fn matmul(&self, other: &CsrMatrix) -> CsrMatrix {
        assert_eq!(self.cols, other.rows, "inner dimension mismatch in matmul");

        let mut row_ptr = Vec::with_capacity(self.rows + 1);
        let mut col_idx = Vec::new();
        let mut values = Vec::new();
        row_ptr.push(0);

        let mut acc = vec![C64::new(0.0, 0.0); other.cols];
        let mut touched: Vec<usize> = Vec::new();

        for r in 0..self.rows {
            for ja in self.row_ptr[r]..self.row_ptr[r + 1] {
                let ca = self.col_idx[ja];
                let va = self.values[ja];
                for jb in other.row_ptr[ca]..other.row_ptr[ca + 1] {
                    let cb = other.col_idx[jb];
                    if acc[cb] == C64::new(0.0, 0.0) {
                        touched.push(cb);
                    }
                    acc[cb] += va * other.values[jb];
                }
            }
            touched.sort_unstable();
            for &c in &touched {
                let v = acc[c];
                if v != C64::new(0.0, 0.0) {
                    col_idx.push(c);
                    values.push(v);
                }
                acc[c] = C64::new(0.0, 0.0);
            }
            touched.clear();
            row_ptr.push(col_idx.len());
        }

        CsrMatrix {
            rows: self.rows,
            cols: other.cols,
            row_ptr,
            col_idx,
            values,
        }
    }

    /// Sparse matrix-vector product: y = A * x.
    pub fn spmv(&self, x: &[C64], y: &mut [C64]) {
        for (r, yr) in y.iter_mut().enumerate().take(self.rows) {
            let mut sum = C64::new(0.0, 0.0);
            for j in self.row_ptr[r]..self.row_ptr[r + 1] {
                sum += self.values[j] * x[self.col_idx[j]];
            }
            *yr = sum;
        }
    }

    /// Expectation value ⟨psi| A |psi⟩ for a state vector psi.
    pub fn expectation(&self, psi: &[C64]) -> C64 {
        let mut y = vec![C64::new(0.0, 0.0); self.rows];
        self.spmv(psi, &mut y);
        psi.iter().zip(y.iter()).map(|(p, v)| p.conj() * v).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(re: f64) -> C64 {
        C64::new(re, 0.0)
    }

    #[test]
    fn identity_spmv() {
        let id = CsrMatrix::identity(3);
        let x = vec![c(3.0), c(5.0), c(7.0)];
        let mut y = vec![c(0.0); 3];
        id.spmv(&x, &mut y);
        assert_eq!(y, x);
    }

    #[test]
    fn kron_with_identity() {
        // diag(1, 2) ⊗ I2 = diag(1, 1, 2, 2)
        let d = CsrMatrix::from_dense(2, 2, &[c(1.0), c(0.0), c(0.0), c(2.0)]);
        let k = d.kron(&CsrMatrix::identity(2));
        let expected = CsrMatrix::from_dense(
            4,
            4,
            &[
                c(1.0), c(0.0), c(0.0), c(0.0),
                c(0.0), c(1.0), c(0.0), c(0.0),
                c(0.0), c(0.0), c(2.0), c(0.0),
                c(0.0), c(0.0), c(0.0), c(2.0),
            ],
        );
        assert_eq!(k, expected);
    }

    #[test]
    fn matmul_is_matrix_square() {
        // A = [[0, 1], [1, 0]] → A·A = I
        let a = CsrMatrix::from_dense(2, 2, &[c(0.0), c(1.0), c(1.0), c(0.0)]);
        let sq = a.matmul(&a);
        assert_eq!(sq, CsrMatrix::identity(2));
    }

    #[test]
    fn add_merges_and_cancels() {
        let a = CsrMatrix::from_dense(2, 2, &[c(1.0), c(2.0), c(0.0), c(0.0)]);
        let b = CsrMatrix::from_dense(2, 2, &[c(-1.0), c(0.0), c(3.0), c(0.0)]);
        let s = a.add(&b);
        let expected = CsrMatrix::from_dense(2, 2, &[c(0.0), c(2.0), c(3.0), c(0.0)]);
        assert_eq!(s, expected);
        assert_eq!(s.nnz(), 2);
    }

    #[test]
    fn expectation_on_basis_state() {
        let a = CsrMatrix::from_dense(2, 2, &[c(0.5), c(0.0), c(0.0), c(-0.5)]);
        let up = vec![c(1.0), c(0.0)];
        let down = vec![c(0.0), c(1.0)];
        assert!((a.expectation(&up).re - 0.5).abs() < 1e-15);
        assert!((a.expectation(&down).re + 0.5).abs() < 1e-15);
    }

    #[test]
    fn complex_expectation_is_real_for_hermitian() {
        let i = C64::new(0.0, 1.0);
        // sigma_y
        let a = CsrMatrix::from_dense(2, 2, &[c(0.0), -i, i, c(0.0)]);
        let psi = vec![C64::new(0.5f64.sqrt(), 0.0), C64::new(0.0, 0.5f64.sqrt())];
        let e = a.expectation(&psi);
        assert!(e.im.abs() < 1e-15, "im = {}", e.im);
        assert!((e.re - 1.0).abs() < 1e-15, "re = {}", e.re);
    }
}
