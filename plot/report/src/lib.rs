pub mod error;
pub mod loader;
pub mod parser;
pub mod plotting;
mod prints;
mod types;

pub use types::*;
