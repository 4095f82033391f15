// Module exports for models

pub mod color_scale;
pub mod grid;
pub mod observation;
pub mod range;
pub mod settings;
