#![deny(clippy::unwrap_used)]
#![allow(clippy::missing_errors_doc, clippy::missing_panics_doc)]

mod constants;
mod gallery;
mod media;

pub use constants::*;
pub use gallery::*;
pub use media::*;
