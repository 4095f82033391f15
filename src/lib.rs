// Heatmap Calendar Library
// GitHub-style calendar heatmap grids: dense week/day matrices, color buckets and month labels

pub mod error;
pub mod models;
pub mod services;
pub mod utils;

pub use error::{HeatmapError, HeatmapResult};
pub use models::color_scale::ColorScale;
pub use models::grid::{Cell, GridMatrix, MonthLabel};
pub use models::observation::Observation;
pub use models::range::{DateRange, HeatmapView, RangeSpec};
pub use models::settings::HeatmapSettings;
pub use services::color::color_for;
pub use services::events::{CellClick, CellClickEmitter, CellClickListener};
pub use services::grid::{build_grid, GridBuilder};
pub use services::heatmap::{Heatmap, HeatmapCalendar, RangeSelection};
pub use services::labels::{build_labels, month_labels};
