pub mod rref;
pub mod space;

pub use rref::*;
pub use space::*;
