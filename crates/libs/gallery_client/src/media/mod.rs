mod client;
mod error;
mod file;

pub use client::*;
pub use error::*;
pub use file::*;
