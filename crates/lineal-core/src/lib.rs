pub mod error;
pub mod matrix;
pub mod scalar;
pub mod vector;

pub use error::{LinalgError, LinalgResult};
pub use matrix::Matrix;
pub use scalar::Scalar;
pub use vector::Vector;
