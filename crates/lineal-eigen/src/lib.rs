pub mod cubic;
pub mod diagonalize;
pub mod eigenvalues;
pub mod eigenvectors;

pub use cubic::*;
pub use diagonalize::*;
pub use eigenvalues::*;
pub use eigenvectors::*;
