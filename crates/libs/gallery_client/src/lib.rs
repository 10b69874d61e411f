#![deny(clippy::unwrap_used)]

mod controller;
mod error;
mod ids;
pub mod media;
pub mod remote;
mod state;
mod validation;
mod viewer;

pub use controller::*;
pub use error::*;
pub use ids::*;
pub use state::*;
pub use validation::*;
pub use viewer::*;
