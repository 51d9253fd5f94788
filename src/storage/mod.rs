//! In-memory storage for the linear system `A·x = b`
//!
//! - [`Matrix`]: square, row-indirected, O(1) row swap
//! - [`Vector`]: plain indexable array of doubles

mod matrix;
mod vector;

pub use matrix::{Matrix, Row};
pub use vector::Vector;
