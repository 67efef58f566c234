//! irtplot crate root: re-exports and module wiring.
//!
//! An interactive explorer for the four-parameter logistic (4PL) item
//! response model. The crate is split into a toolkit-free core and an egui
//! viewer:
//! - `model`: item characteristic and information functions
//! - `data`: θ sampling, view state, series styling, chart payloads
//! - `formula`: display formatting and the live formula text
//! - `render`: surface traits and the render pipeline
//! - `coalesce`: once-per-frame scheduling of slider updates
//! - `controllers`: the interaction controller and its widget seam
//! - `config`: explorer configuration loaded from JSON
//! - `app`: the native eframe/egui viewer

pub mod app;
pub mod coalesce;
pub mod config;
pub mod controllers;
pub mod data;
pub mod formula;
pub mod model;
pub mod render;

// Public re-exports for a compact external API
pub use app::{run_explorer, EguiChart, EguiControls, FormulaView, IrtApp};
pub use config::{ConfigError, ExplorerConfig, SliderRange, SliderRanges, Theme};
pub use controllers::{Control, ControlWidgets, ControllerState, InputEvent, InteractionController};
pub use data::curve::{sample, SampledCurve, ThetaGrid};
pub use data::payload::{Layout, RenderConfig, RenderPayload, Series, SeriesRole};
pub use data::state::{ParamKey, ParameterStore, ViewState};
pub use formula::{format_formula, MathOptions, MathRenderError};
pub use model::{information, probability, ModelParameters};
pub use render::{ChartSurface, MathSurface, RenderPipeline};
