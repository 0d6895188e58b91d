//! Per-family sweep: ordered parallel map over the parameter grid.
//!
//! Work is dispatched to a family-scoped rayon pool; completion order is
//! irrelevant because the parallel map preserves submission order. Rows are
//! buffered and the table written only after the whole grid is exhausted.

use crate::error::SweepError;
use crate::grid::ParameterPoint;
use crate::output;
use hamiltonians::{Family, SolverError};
use rayon::prelude::*;
use sparse::C64;
use spinops::{Component, Correlators};
use std::path::Path;
use std::time::Instant;

/// Pool size actually used for a requested worker count: at least one, and
/// capped at half the hardware parallelism when the request exceeds what
/// the machine has.
pub fn effective_workers(requested: usize) -> usize {
    let hardware = std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1);
    if requested > hardware {
        (hardware / 2).max(1)
    } else {
        requested.max(1)
    }
}

/// Evaluate one parameter point: solve for the ground state and take the
/// real part of every correlator and product expectation, in fixed column
/// order. A solver failure drops the point, nothing else.
pub fn evaluate_point<S>(
    point: &ParameterPoint,
    corr: &Correlators,
    solve: &S,
) -> Option<Vec<f64>>
where
    S: Fn(&ParameterPoint) -> Result<Vec<C64>, SolverError>,
{
    let psi = solve(point).ok()?;
    let mut row = Vec::with_capacity(2 + 3 * corr.sites() + 3);
    row.push(point.outer);
    row.push(point.inner);
    for i in 0..corr.sites() {
        for c in Component::ALL {
            row.push(corr.correlator(c, i).expectation(&psi).re);
        }
    }
    for c in Component::ALL {
        row.push(corr.product(c).expectation(&psi).re);
    }
    Some(row)
}

/// Run one family over its grid and write its table; returns the family's
/// wall-clock seconds. Failed points leave no row; the output preserves
/// grid-enumeration order regardless of the pool size.
pub fn run_family<S, P>(
    family: Family,
    points: &[ParameterPoint],
    corr: &Correlators,
    workers: usize,
    solve: S,
    out_path: &Path,
    progress: P,
) -> Result<f64, SweepError>
where
    S: Fn(&ParameterPoint) -> Result<Vec<C64>, SolverError> + Sync,
    P: Fn() + Sync,
{
    let start = Instant::now();

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(effective_workers(workers))
        .build()
        .map_err(|e| SweepError::Pool(e.to_string()))?;

    let rows: Vec<Option<Vec<f64>>> = pool.install(|| {
        points
            .par_iter()
            .map(|p| {
                let row = evaluate_point(p, corr, &solve);
                progress();
                row
            })
            .collect()
    });

    let rows: Vec<Vec<f64>> = rows.into_iter().flatten().collect();
    output::write_table(out_path, family, corr.sites(), &rows)?;

    Ok(start.elapsed().as_secs_f64())
}
