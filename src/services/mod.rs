// Service module exports

pub mod color;
pub mod events;
pub mod grid;
pub mod heatmap;
pub mod labels;
pub mod observations;
pub mod settings;
