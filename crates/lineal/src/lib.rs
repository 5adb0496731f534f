//! # Lineal 🦀
//!
//! A first-course linear algebra toolkit written in pure Rust.
//!
//! ## Modules
//!
//! - **core** — Containers: growable `Matrix` and `Vector`, the `Scalar` trait, error types
//! - **ops** — Operations: arithmetic, dot/cross/projection, transpose, determinant, inverse
//! - **gauss** — Gaussian elimination: RREF, rank, span/basis queries, change of basis
//! - **eigen** — Eigen analysis: closed-form cubic solver, 2x2/3x3 eigenvalues,
//!   eigenvectors, diagonalization

/// Containers and scalar abstraction.
pub use lineal_core as core;

/// Vector and matrix operations.
pub use lineal_ops as ops;

/// Gaussian elimination and vector-space queries.
pub use lineal_gauss as gauss;

/// Eigenvalues, eigenvectors and diagonalization.
pub use lineal_eigen as eigen;
