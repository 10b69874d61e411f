mod error;
mod gallery_store;

pub use error::*;
pub use gallery_store::*;
