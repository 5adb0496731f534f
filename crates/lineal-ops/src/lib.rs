pub mod inverse;
pub mod matrix_ops;
pub mod vector_ops;

pub use inverse::*;
