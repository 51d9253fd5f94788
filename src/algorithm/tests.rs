//! Tests for the elimination kernels

use super::back_substitution::back_substitute_impl;
use super::elimination::{eliminate_column_impl, triangularize_impl};
use super::pivot::{PivotCandidate, find_pivot_impl};
use super::verify::{residual_ratio, within_tolerance};
use crate::error::Error;
use crate::runtime::{ParallelismConfig, SolverClient};
use crate::storage::{Matrix, Vector};

fn create_clients() -> Vec<SolverClient> {
    vec![
        SolverClient::new(),
        SolverClient::new().with_parallelism(ParallelismConfig::new(Some(3), Some(1))),
    ]
}

#[test]
fn test_max_by_magnitude_prefers_larger() {
    let a = PivotCandidate::new(4, 2.0);
    let b = PivotCandidate::new(1, 3.0);
    assert_eq!(a.max_by_magnitude(b), b);
    assert_eq!(b.max_by_magnitude(a), b);
}

#[test]
fn test_max_by_magnitude_tie_keeps_lower_row() {
    let a = PivotCandidate::new(7, 5.0);
    let b = PivotCandidate::new(2, 5.0);
    assert_eq!(a.max_by_magnitude(b).row, 2);
    assert_eq!(b.max_by_magnitude(a).row, 2);
}

#[test]
fn test_find_pivot_ignores_rows_above_column() {
    // Row 0 has the largest entry in column 1 but is already eliminated
    let a = Matrix::from_rows(&[[1.0, 100.0, 0.0], [0.0, 2.0, 0.0], [0.0, -3.0, 1.0]]).unwrap();
    for client in create_clients() {
        let pivot = find_pivot_impl(&client, &a, 1);
        assert_eq!(pivot, PivotCandidate::new(2, 3.0));
    }
}

#[test]
fn test_find_pivot_seeds_each_chunk_with_its_own_row() {
    // Row 0 is outside the search range and must never leak in as a baseline
    let mut a = Matrix::zeros(16);
    a.set(0, 4, 1000.0);
    a.set(9, 4, -8.0);
    a.set(13, 4, 8.0);
    for client in create_clients() {
        let pivot = find_pivot_impl(&client, &a, 4);
        assert_eq!(pivot.row, 9);
        assert_eq!(pivot.magnitude, 8.0);
    }
}

#[test]
fn test_eliminate_column_zeroes_below_pivot() {
    let mut a = Matrix::from_rows(&[[2.0, 1.0], [4.0, 3.0]]).unwrap();
    let mut b = Vector::from_slice(&[1.0, 4.0]);
    eliminate_column_impl(&SolverClient::new(), &mut a, &mut b, 0);

    assert_eq!(a.row(0), &[2.0, 1.0]);
    assert_eq!(a.row(1), &[0.0, 1.0]);
    assert_eq!(b.as_slice(), &[1.0, 2.0]);
}

#[test]
fn test_triangularize_reports_first_singular_column() {
    // Column 0 pivots on row 1, after which column 1 is all zero
    let mut a = Matrix::from_rows(&[[1.0, 2.0, 3.0], [2.0, 4.0, 6.0], [0.0, 0.0, 1.0]]).unwrap();
    let mut b = Vector::from_slice(&[1.0, 2.0, 3.0]);
    let err = triangularize_impl(&SolverClient::new(), &mut a, &mut b).unwrap_err();
    assert!(matches!(err, Error::SingularMatrix { column: 1 }));
}

#[test]
fn test_back_substitute_upper_triangular() {
    // [[2, 1], [0, 4]] x = [5, 8] -> x = [1.5, 2]
    let a = Matrix::from_rows(&[[2.0, 1.0], [0.0, 4.0]]).unwrap();
    let mut b = Vector::from_slice(&[5.0, 8.0]);
    let x = back_substitute_impl(&a, &mut b).unwrap();
    assert_eq!(x.as_slice(), &[1.5, 2.0]);
}

#[test]
fn test_back_substitute_zero_diagonal() {
    let a = Matrix::from_rows(&[[1.0, 1.0], [0.0, 0.0]]).unwrap();
    let mut b = Vector::from_slice(&[1.0, 1.0]);
    let err = back_substitute_impl(&a, &mut b).unwrap_err();
    assert_eq!(err.singular_column(), Some(1));
}

#[test]
fn test_residual_ratio_is_symmetric() {
    assert_eq!(residual_ratio(2.0, 4.0), 2.0);
    assert_eq!(residual_ratio(4.0, 2.0), 2.0);
    assert_eq!(residual_ratio(-3.0, -3.0), 1.0);
}

#[test]
fn test_within_tolerance() {
    assert!(within_tolerance(0.0, 0.0));
    assert!(within_tolerance(1.0, 1.0 + 1e-9));
    assert!(!within_tolerance(1.0, 1.001));
    assert!(!within_tolerance(0.0, 1e-12));
    assert!(!within_tolerance(f64::NAN, 1.0));
}
