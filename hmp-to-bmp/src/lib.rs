pub mod config;
pub mod converter;
pub mod error;

pub use config::*;
pub use converter::*;
pub use error::*;
