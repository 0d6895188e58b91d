//! Parameter grids: fixed-step ranges, Cartesian enumeration, and the
//! externally supplied θ list.

use crate::error::SweepError;
use std::fs;
use std::path::Path;

/// Closed-open fixed-step range using the NumPy `arange` convention: the
/// value count is ceil((stop − start)/step) and value k is start + k·step,
/// so grids from earlier datasets reproduce bit-for-bit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Range {
    pub start: f64,
    pub stop: f64,
    pub step: f64,
}

impl Range {
    pub fn new(start: f64, stop: f64, step: f64) -> Self {
        Self { start, stop, step }
    }

    pub fn values(&self) -> Vec<f64> {
        let span = (self.stop - self.start) / self.step;
        if !span.is_finite() || span <= 0.0 {
            return Vec::new();
        }
        let count = span.ceil() as usize;
        (0..count).map(|k| self.start + k as f64 * self.step).collect()
    }

    pub fn len(&self) -> usize {
        self.values().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// One Hamiltonian instance within a family's grid. Families with a single
/// physical parameter carry a sentinel in the inner slot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParameterPoint {
    pub outer: f64,
    pub inner: f64,
}

/// Cartesian product in outer-major order, matching enumeration order in
/// the output tables.
pub fn cartesian(outer: &[f64], inner: &[f64]) -> Vec<ParameterPoint> {
    let mut points = Vec::with_capacity(outer.len() * inner.len());
    for &o in outer {
        for &i in inner {
            points.push(ParameterPoint { outer: o, inner: i });
        }
    }
    points
}

/// Single-parameter grid with a fixed sentinel inner column.
pub fn singles(values: &[f64], sentinel: f64) -> Vec<ParameterPoint> {
    values
        .iter()
        .map(|&v| ParameterPoint {
            outer: v,
            inner: sentinel,
        })
        .collect()
}

/// Read the ordered θ list, one float per line, blank lines skipped.
pub fn read_thetas(path: &Path) -> Result<Vec<f64>, SweepError> {
    let text = fs::read_to_string(path)?;
    let mut thetas = Vec::new();
    for (k, line) in text.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        let value = trimmed
            .parse::<f64>()
            .map_err(|_| SweepError::ThetaParse {
                path: path.display().to_string(),
                line: k + 1,
                value: trimmed.to_string(),
            })?;
        thetas.push(value);
    }
    Ok(thetas)
}
