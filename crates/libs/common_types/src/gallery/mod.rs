mod document;
mod image_record;
mod sample;

pub use document::*;
pub use image_record::*;
pub use sample::*;
