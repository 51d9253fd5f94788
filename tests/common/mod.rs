//! Common test utilities
#![allow(dead_code)]

#[cfg(feature = "rayon")]
use gauss::runtime::ParallelismConfig;
use gauss::runtime::SolverClient;

/// Sequential client plus parallel clients with several pool/chunk shapes
pub fn create_clients() -> Vec<SolverClient> {
    let mut clients = vec![SolverClient::new()];
    #[cfg(feature = "rayon")]
    {
        clients.push(SolverClient::parallel());
        clients.push(
            SolverClient::new()
                .try_with_parallelism(ParallelismConfig::new(Some(4), Some(1)))
                .expect("build 4-thread pool"),
        );
        clients.push(
            SolverClient::new()
                .try_with_parallelism(ParallelismConfig::new(Some(3), Some(7)))
                .expect("build 3-thread pool"),
        );
    }
    clients
}

/// Assert two f64 slices are close within tolerance
///
/// Uses the formula: |a - b| <= atol + rtol * |b|
pub fn assert_allclose_f64(a: &[f64], b: &[f64], rtol: f64, atol: f64, msg: &str) {
    assert_eq!(a.len(), b.len(), "{}: length mismatch", msg);
    for (i, (x, y)) in a.iter().zip(b.iter()).enumerate() {
        let diff = (x - y).abs();
        let tol = atol + rtol * y.abs();
        assert!(
            diff <= tol,
            "{}: element {} differs: {} vs {} (diff={}, tol={})",
            msg,
            i,
            x,
            y,
            diff,
            tol
        );
    }
}
