use std::io::Write;
use sweep::{read_thetas, Range, SweepConfig};

#[test]
fn arange_quarter_steps() {
    let vals = Range::new(0.0, 1.0, 0.25).values();
    assert_eq!(vals, vec![0.0, 0.25, 0.5, 0.75]);
}

#[test]
fn arange_excludes_stop() {
    let vals = Range::new(-4.0, 4.0, 0.1).values();
    assert_eq!(vals.len(), 80);
    assert_eq!(vals[0], -4.0);
    assert!(*vals.last().unwrap() < 4.0);
}

#[test]
fn default_grids_have_eighty_values_per_axis() {
    let cfg = SweepConfig::default();
    assert_eq!(cfg.h1_jz.len(), 80);
    assert_eq!(cfg.h1_d.len(), 80);
    assert_eq!(cfg.h2_anisotropy.len(), 80);
    assert_eq!(cfg.h2_alternation.len(), 80);
}

#[test]
fn near_inclusive_upper_bound_adds_one_value() {
    // The [−4, 4.1) configuration variant picks up the 4.0 endpoint.
    let vals = Range::new(-4.0, 4.1, 0.1).values();
    assert_eq!(vals.len(), 81);
    assert!((vals[80] - 4.0).abs() < 1e-9);
}

#[test]
fn empty_and_inverted_ranges() {
    assert!(Range::new(1.0, 1.0, 0.1).is_empty());
    assert!(Range::new(2.0, 1.0, 0.1).is_empty());
}

#[test]
fn cartesian_is_outer_major() {
    let pts = sweep::grid::cartesian(&[1.0, 2.0], &[10.0, 20.0]);
    let pairs: Vec<(f64, f64)> = pts.iter().map(|p| (p.outer, p.inner)).collect();
    assert_eq!(
        pairs,
        vec![(1.0, 10.0), (1.0, 20.0), (2.0, 10.0), (2.0, 20.0)]
    );
}

#[test]
fn theta_list_reads_in_order() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("thetas.dat");
    let mut f = std::fs::File::create(&path).unwrap();
    writeln!(f, "0.0\n0.5\n\n1.25").unwrap();
    drop(f);

    let thetas = read_thetas(&path).unwrap();
    assert_eq!(thetas, vec![0.0, 0.5, 1.25]);
}

#[test]
fn theta_list_rejects_garbage_with_line_number() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("thetas.dat");
    std::fs::write(&path, "0.1\nnot-a-float\n0.3\n").unwrap();

    let err = read_thetas(&path).unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("line 2"), "msg = {}", msg);
    assert!(msg.contains("not-a-float"), "msg = {}", msg);
}

#[test]
fn missing_theta_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    assert!(read_thetas(&dir.path().join("absent.dat")).is_err());
}
