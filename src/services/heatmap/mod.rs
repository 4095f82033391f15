// Heatmap service
// Bundles grid, month labels and day labels into one render payload

use serde::Serialize;

use crate::error::{HeatmapError, HeatmapResult};
use crate::models::color_scale::ColorScale;
use crate::models::grid::{GridMatrix, MonthLabel};
use crate::models::observation::Observation;
use crate::models::range::{DateRange, HeatmapView, RangeSpec};
use crate::models::settings::HeatmapSettings;
use crate::services::grid::GridBuilder;
use crate::services::labels::build_labels;
use crate::utils::date::DAY_LABELS;

/// Which dates the caller wants to see
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeSelection {
    /// Month or year around the first observation
    View(HeatmapView),
    Explicit(DateRange),
}

impl RangeSelection {
    /// Explicit range when both bounds are given, `view` when neither is.
    ///
    /// A single bound is rejected with `MissingRangeBound`.
    pub fn parse(view: HeatmapView, start: Option<&str>, end: Option<&str>) -> HeatmapResult<Self> {
        match (start, end) {
            (Some(start), Some(end)) => Ok(RangeSelection::Explicit(DateRange::parse(start, end)?)),
            (None, None) => Ok(RangeSelection::View(view)),
            (Some(_), None) => Err(HeatmapError::MissingRangeBound {
                given: "start",
                missing: "end",
            }),
            (None, Some(_)) => Err(HeatmapError::MissingRangeBound {
                given: "end",
                missing: "start",
            }),
        }
    }

    pub fn to_spec(self, observations: &[Observation]) -> RangeSpec {
        match self {
            RangeSelection::View(view) => RangeSpec::for_view(view, observations),
            RangeSelection::Explicit(range) => RangeSpec::explicit(range),
        }
    }
}

/// Everything a rendering layer needs for one frame
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Heatmap {
    pub grid: GridMatrix,
    pub month_labels: Vec<MonthLabel>,
    pub day_labels: [&'static str; 7],
}

impl Heatmap {
    pub fn is_empty(&self) -> bool {
        self.grid.is_empty()
    }
}

#[derive(Debug, Clone)]
pub struct HeatmapCalendar {
    builder: GridBuilder,
    color_scheme: ColorScale,
    default_view: HeatmapView,
}

impl Default for HeatmapCalendar {
    fn default() -> Self {
        Self::from_settings(&HeatmapSettings::default())
    }
}

impl HeatmapCalendar {
    pub fn from_settings(settings: &HeatmapSettings) -> Self {
        Self {
            builder: GridBuilder::from_settings(settings),
            color_scheme: settings.color_scheme.clone(),
            default_view: settings.view,
        }
    }

    pub fn with_color_scheme(mut self, scheme: ColorScale) -> Self {
        self.color_scheme = scheme;
        self
    }

    pub fn color_scheme(&self) -> &ColorScale {
        &self.color_scheme
    }

    pub fn default_view(&self) -> HeatmapView {
        self.default_view
    }

    /// Render using the configured default view.
    pub fn render_default(&self, observations: &[Observation]) -> Heatmap {
        self.render(observations, RangeSelection::View(self.default_view))
    }

    pub fn render(&self, observations: &[Observation], selection: RangeSelection) -> Heatmap {
        let spec = selection.to_spec(observations);
        self.render_spec(observations, &spec)
    }

    pub fn render_spec(&self, observations: &[Observation], spec: &RangeSpec) -> Heatmap {
        let grid = self.builder.build(observations, spec, &self.color_scheme);
        // Labels follow the grid: no grid, no axis
        let month_labels = if grid.is_empty() {
            Vec::new()
        } else {
            build_labels(spec)
        };

        Heatmap {
            grid,
            month_labels,
            day_labels: DAY_LABELS,
        }
    }
}
