//! Configuration for the explorer: surface ids, θ grid, slider ranges, looks.
//!
//! Every field has a default, so a JSON file only needs the keys it changes:
//!
//! ```json
//! { "title": "Item 12", "sliders": { "a": { "min": 0.2, "max": 4.0, "step": 0.1 } } }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::data::curve::{ThetaGrid, MAX_GRID_POINTS};
use crate::data::series_look::SeriesLooks;
use crate::data::state::ParamKey;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Bounds and granularity of one parameter slider.
///
/// Only the widget layer applies these; the parameter store accepts any value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SliderRange {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl SliderRange {
    pub const fn new(min: f64, max: f64, step: f64) -> Self {
        Self { min, max, step }
    }

    pub fn contains(&self, value: f64) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SliderRanges {
    pub a: SliderRange,
    pub b: SliderRange,
    pub c: SliderRange,
    pub d: SliderRange,
}

impl Default for SliderRanges {
    fn default() -> Self {
        Self {
            a: SliderRange::new(0.1, 3.0, 0.1),
            b: SliderRange::new(-3.0, 3.0, 0.1),
            c: SliderRange::new(0.0, 0.5, 0.01),
            d: SliderRange::new(0.5, 1.0, 0.01),
        }
    }
}

impl SliderRanges {
    pub fn get(&self, key: ParamKey) -> SliderRange {
        match key {
            ParamKey::A => self.a,
            ParamKey::B => self.b,
            ParamKey::C => self.c,
            ParamKey::D => self.d,
        }
    }
}

/// Visual theme of the viewer window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

/// Top-level configuration.
///
/// | Field            | Purpose |
/// |------------------|---------|
/// | `title`          | Native window title |
/// | `container_id`   | Id of the chart surface |
/// | `formula_target` | Id of the formula element |
/// | `grid`           | θ domain and step of the sampled curves |
/// | `sliders`        | Slider bounds per parameter |
/// | `looks`          | Colour, width and dash per series |
/// | `window_size`    | Initial window size in logical pixels |
/// | `theme`          | Light or dark window visuals |
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExplorerConfig {
    pub title: String,
    pub container_id: String,
    pub formula_target: String,
    pub grid: ThetaGrid,
    pub sliders: SliderRanges,
    pub looks: SeriesLooks,
    pub window_size: [f32; 2],
    pub theme: Theme,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            title: "4PL Item Response Explorer".to_string(),
            container_id: "plot-container".to_string(),
            formula_target: "formula-display".to_string(),
            grid: ThetaGrid::default(),
            sliders: SliderRanges::default(),
            looks: SeriesLooks::default(),
            window_size: [1100.0, 760.0],
            theme: Theme::Light,
        }
    }
}

impl ExplorerConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let cfg: Self = serde_json::from_str(json)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let g = &self.grid;
        if ![g.min, g.max, g.step].iter().all(|v| v.is_finite()) {
            return Err(ConfigError::Invalid(format!(
                "theta grid [{}, {}] step {} is not finite",
                g.min, g.max, g.step
            )));
        }
        if !(g.step > 0.0) || !(g.max > g.min) {
            return Err(ConfigError::Invalid(format!(
                "theta grid [{}, {}] step {} is empty",
                g.min, g.max, g.step
            )));
        }
        if !(g.max - g.min).is_finite() || g.len() > MAX_GRID_POINTS {
            return Err(ConfigError::Invalid(format!(
                "theta grid [{}, {}] step {} exceeds {MAX_GRID_POINTS} points",
                g.min, g.max, g.step
            )));
        }
        for key in ParamKey::ALL {
            let r = self.sliders.get(key);
            if !(r.step > 0.0) || !(r.max > r.min) {
                return Err(ConfigError::Invalid(format!(
                    "slider {key}: range [{}, {}] step {}",
                    r.min, r.max, r.step
                )));
            }
        }
        if self.window_size.iter().any(|v| !(*v > 0.0)) {
            return Err(ConfigError::Invalid("window size must be positive".into()));
        }
        Ok(())
    }
}
