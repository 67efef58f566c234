//! Chart-facing projection of a [`ViewState`]: named series plus layout.
//!
//! Everything here is plain data. The chart surface decides how to draw it.

use serde::{Deserialize, Serialize};

use crate::data::curve::{self, ThetaGrid};
use crate::data::series_look::{SeriesLook, SeriesLooks};
use crate::data::state::ViewState;

/// Fixed y-axis range used while only the probability curve is shown.
pub const PROBABILITY_Y_RANGE: [f64; 2] = [-0.05, 1.05];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SeriesRole {
    Probability,
    Information,
    Guessing,
    Inattention,
}

impl SeriesRole {
    pub fn label(self) -> &'static str {
        match self {
            SeriesRole::Probability => "Probability",
            SeriesRole::Information => "Information",
            SeriesRole::Guessing => "Guessing (c)",
            SeriesRole::Inattention => "Inattention (d)",
        }
    }

    /// Asymptote guides never appear in the legend.
    pub fn in_legend(self) -> bool {
        matches!(self, SeriesRole::Probability | SeriesRole::Information)
    }

    pub fn hover(self) -> HoverInfo {
        if self.in_legend() {
            HoverInfo::XY
        } else {
            HoverInfo::None
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HoverInfo {
    XY,
    None,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Series {
    pub role: SeriesRole,
    pub name: String,
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub look: SeriesLook,
    pub show_in_legend: bool,
    pub hover: HoverInfo,
}

impl Series {
    fn new(role: SeriesRole, x: Vec<f64>, y: Vec<f64>, look: SeriesLook) -> Self {
        Self {
            role,
            name: role.label().to_string(),
            x,
            y,
            look,
            show_in_legend: role.in_legend(),
            hover: role.hover(),
        }
    }

    /// Horizontal guide at `y` spanning the whole grid.
    fn horizontal(role: SeriesRole, grid: &ThetaGrid, y: f64, look: SeriesLook) -> Self {
        Self::new(role, vec![grid.min, grid.max], vec![y, y], look)
    }

    pub fn points(&self) -> impl Iterator<Item = [f64; 2]> + '_ {
        self.x.iter().zip(&self.y).map(|(&x, &y)| [x, y])
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LegendPosition {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisLayout {
    pub title: String,
    /// Fixed range; ignored while `auto_range` is set.
    pub range: Option<[f64; 2]>,
    pub auto_range: bool,
    pub show_grid: bool,
    pub grid_color_rgba: [u8; 4],
    pub tick_spacing: Option<f64>,
    pub zero_line: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Margins {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    pub font_family: String,
    pub margins: Margins,
    pub x_axis: AxisLayout,
    pub y_axis: AxisLayout,
    pub show_legend: bool,
    pub legend_position: LegendPosition,
    pub hover_closest: bool,
    pub transparent_background: bool,
}

const GRID_COLOR: [u8; 4] = [0xf1, 0xf5, 0xf9, 0xff];

impl Layout {
    /// Full layout for a freshly created plot surface.
    pub fn initial(state: &ViewState, grid: &ThetaGrid) -> Self {
        Self {
            font_family: "Inter, sans-serif".to_string(),
            margins: Margins {
                top: 40.0,
                right: 40.0,
                bottom: 50.0,
                left: 60.0,
            },
            x_axis: AxisLayout {
                title: "Ability (θ)".to_string(),
                range: Some([grid.min, grid.max]),
                auto_range: false,
                show_grid: true,
                grid_color_rgba: GRID_COLOR,
                tick_spacing: Some(1.0),
                zero_line: true,
            },
            y_axis: y_axis(state.show_information),
            show_legend: true,
            legend_position: LegendPosition::TopLeft,
            hover_closest: true,
            transparent_background: true,
        }
    }

    /// Switch the y-axis between the fixed probability range and auto-ranging.
    ///
    /// Does nothing when the axis already matches, so a range chosen by the
    /// viewer survives ordinary updates.
    pub fn apply_information_display(&mut self, show_information: bool) {
        if self.y_axis.auto_range != show_information {
            self.y_axis = y_axis(show_information);
        }
    }
}

fn y_axis(show_information: bool) -> AxisLayout {
    if show_information {
        AxisLayout {
            title: "P(θ) / I(θ)".to_string(),
            range: None,
            auto_range: true,
            show_grid: true,
            grid_color_rgba: GRID_COLOR,
            tick_spacing: None,
            zero_line: false,
        }
    } else {
        AxisLayout {
            title: "Probability P(θ)".to_string(),
            range: Some(PROBABILITY_Y_RANGE),
            auto_range: false,
            show_grid: true,
            grid_color_rgba: GRID_COLOR,
            tick_spacing: Some(0.1),
            zero_line: false,
        }
    }
}

/// Interaction options handed to the chart surface alongside the layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderConfig {
    pub responsive: bool,
    pub show_toolbar: bool,
    pub scroll_zoom: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            responsive: true,
            show_toolbar: false,
            scroll_zoom: false,
        }
    }
}

/// Series in draw order: probability, information (optional), guessing, inattention.
pub fn build_series(state: &ViewState, grid: &ThetaGrid, looks: &SeriesLooks) -> Vec<Series> {
    let sampled = curve::sample_on(grid, &state.params, state.show_information);
    let mut series = Vec::with_capacity(4);
    series.push(Series::new(
        SeriesRole::Probability,
        sampled.theta.clone(),
        sampled.probability,
        looks.probability,
    ));
    if let Some(information) = sampled.information {
        series.push(Series::new(
            SeriesRole::Information,
            sampled.theta,
            information,
            looks.information,
        ));
    }
    series.push(Series::horizontal(
        SeriesRole::Guessing,
        grid,
        state.params.c,
        looks.guessing,
    ));
    series.push(Series::horizontal(
        SeriesRole::Inattention,
        grid,
        state.params.d,
        looks.inattention,
    ));
    series
}

/// Complete payload for creating a plot surface.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderPayload {
    pub series: Vec<Series>,
    pub layout: Layout,
    pub config: RenderConfig,
}

impl RenderPayload {
    pub fn build(state: &ViewState, grid: &ThetaGrid, looks: &SeriesLooks) -> Self {
        Self {
            series: build_series(state, grid, looks),
            layout: Layout::initial(state, grid),
            config: RenderConfig::default(),
        }
    }

    pub fn series(&self, role: SeriesRole) -> Option<&Series> {
        self.series.iter().find(|s| s.role == role)
    }

    pub fn roles(&self) -> Vec<SeriesRole> {
        self.series.iter().map(|s| s.role).collect()
    }
}
