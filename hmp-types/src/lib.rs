pub mod dims;
pub mod error;

pub use dims::*;
pub use error::*;
