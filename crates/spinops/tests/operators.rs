use sparse::{C64, CsrMatrix};
use spinops::{Spin, SpinOperators};

fn entry(m: &CsrMatrix, r: usize, c: usize) -> C64 {
    for j in m.row_ptr[r]..m.row_ptr[r + 1] {
        if m.col_idx[j] == c {
            return m.values[j];
        }
    }
    C64::new(0.0, 0.0)
}

#[test]
fn spin_one_sz_diagonal() {
    let ops = SpinOperators::new(Spin::One);
    assert!((entry(&ops.sz, 0, 0).re - 1.0).abs() < 1e-15);
    assert!(entry(&ops.sz, 1, 1).re.abs() < 1e-15);
    assert!((entry(&ops.sz, 2, 2).re + 1.0).abs() < 1e-15);
}

#[test]
fn spin_one_sx_offdiagonal() {
    let ops = SpinOperators::new(Spin::One);
    let a = 1.0 / 2.0_f64.sqrt();
    assert!((entry(&ops.sx, 0, 1).re - a).abs() < 1e-15);
    assert!((entry(&ops.sx, 1, 2).re - a).abs() < 1e-15);
    assert!(entry(&ops.sx, 0, 2).re.abs() < 1e-15);
}

#[test]
fn squares_are_matrix_products_not_elementwise() {
    let ops = SpinOperators::new(Spin::One);
    // Sx has a zero at (0,0); the matrix square puts 1/2 there. An
    // elementwise square would leave it zero.
    assert!((entry(&ops.sx2, 0, 0).re - 0.5).abs() < 1e-15);
    assert!((entry(&ops.sx2, 0, 2).re - 0.5).abs() < 1e-15);
    assert!((entry(&ops.sx2, 1, 1).re - 1.0).abs() < 1e-15);
    // Sy² picks up a sign on the corner from the i factors.
    assert!((entry(&ops.sy2, 0, 2).re + 0.5).abs() < 1e-15);
    assert!(entry(&ops.sy2, 0, 2).im.abs() < 1e-15);
}

#[test]
fn casimir_sums_to_s_s_plus_one() {
    for (spin, s) in [(Spin::Half, 0.5), (Spin::One, 1.0)] {
        let ops = SpinOperators::new(spin);
        let total = ops.sx2.add(&ops.sy2).add(&ops.sz2);
        let expected = CsrMatrix::identity(spin.states()).scale(C64::new(s * (s + 1.0), 0.0));
        let d = spin.states();
        for r in 0..d {
            for c in 0..d {
                let got = entry(&total, r, c);
                let want = entry(&expected, r, c);
                assert!(
                    (got - want).norm() < 1e-14,
                    "spin {:?} entry ({}, {}): {} vs {}",
                    spin,
                    r,
                    c,
                    got,
                    want
                );
            }
        }
    }
}

#[test]
fn spin_half_matches_pauli_over_two() {
    let ops = SpinOperators::new(Spin::Half);
    assert!((entry(&ops.sx, 0, 1).re - 0.5).abs() < 1e-15);
    assert!((entry(&ops.sy, 1, 0).im - 0.5).abs() < 1e-15);
    assert!((entry(&ops.sz, 0, 0).re - 0.5).abs() < 1e-15);
    // (σx/2)² = I/4
    assert!((entry(&ops.sx2, 0, 0).re - 0.25).abs() < 1e-15);
    assert!(entry(&ops.sx2, 0, 1).norm() < 1e-15);
}

#[test]
fn parse_rejects_unsupported_magnitudes() {
    assert_eq!(Spin::parse("1").unwrap(), Spin::One);
    assert_eq!(Spin::parse("1/2").unwrap(), Spin::Half);
    assert!(Spin::parse("3/2").is_err());
    assert!(Spin::parse("").is_err());
}
