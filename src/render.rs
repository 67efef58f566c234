//! Render pipeline: turns a [`ViewState`] into chart series, layout and
//! formula text, and pushes them to the external surfaces.
//!
//! The surfaces are traits so the pipeline stays independent of any widget
//! toolkit. The egui implementations live in [`crate::app`].

use crate::config::ExplorerConfig;
use crate::data::curve::ThetaGrid;
use crate::data::payload::{build_series, Layout, RenderConfig, RenderPayload, Series};
use crate::data::series_look::SeriesLooks;
use crate::data::state::ViewState;
use crate::formula::{format_formula, MathOptions, MathRenderError};

/// Plot surface that receives series and layout.
pub trait ChartSurface {
    /// Create (or recreate) the plot identified by `container_id`.
    fn create_plot(
        &mut self,
        container_id: &str,
        series: &[Series],
        layout: &Layout,
        config: &RenderConfig,
    );

    /// Replace the data of an existing plot in place.
    fn update_plot(
        &mut self,
        container_id: &str,
        series: &[Series],
        layout: &Layout,
        config: &RenderConfig,
    );

    /// Layout currently held by the surface, including viewer adjustments.
    fn current_layout(&self, container_id: &str) -> Option<Layout>;

    fn resize(&mut self, container_id: &str);
}

/// Typesetting surface that displays the formula text.
pub trait MathSurface {
    fn render(
        &mut self,
        target: &str,
        expression: &str,
        options: &MathOptions,
    ) -> Result<(), MathRenderError>;
}

/// No chart at all, for headless use such as payload dumps.
impl ChartSurface for () {
    fn create_plot(&mut self, _: &str, _: &[Series], _: &Layout, _: &RenderConfig) {}
    fn update_plot(&mut self, _: &str, _: &[Series], _: &Layout, _: &RenderConfig) {}
    fn current_layout(&self, _: &str) -> Option<Layout> {
        None
    }
    fn resize(&mut self, _: &str) {}
}

impl MathSurface for () {
    fn render(&mut self, _: &str, _: &str, _: &MathOptions) -> Result<(), MathRenderError> {
        Ok(())
    }
}

/// Builds render payloads and pushes them to the chart and math surfaces.
pub struct RenderPipeline<C, M> {
    chart: C,
    math: M,
    container_id: String,
    formula_target: String,
    grid: ThetaGrid,
    looks: SeriesLooks,
    render_config: RenderConfig,
}

impl<C: ChartSurface, M: MathSurface> RenderPipeline<C, M> {
    pub fn new(chart: C, math: M) -> Self {
        Self::with_config(chart, math, &ExplorerConfig::default())
    }

    pub fn with_config(chart: C, math: M, cfg: &ExplorerConfig) -> Self {
        Self {
            chart,
            math,
            container_id: cfg.container_id.clone(),
            formula_target: cfg.formula_target.clone(),
            grid: cfg.grid,
            looks: cfg.looks.clone(),
            render_config: RenderConfig::default(),
        }
    }

    /// Payload for a fresh plot surface.
    pub fn payload(&self, state: &ViewState) -> RenderPayload {
        RenderPayload {
            config: self.render_config,
            ..RenderPayload::build(state, &self.grid, &self.looks)
        }
    }

    /// Create the plot surface with the full layout and push the formula.
    pub fn render_initial(&mut self, state: &ViewState) {
        let payload = self.payload(state);
        self.chart.create_plot(
            &self.container_id,
            &payload.series,
            &payload.layout,
            &payload.config,
        );
        self.push_formula(state);
    }

    /// Rebuild the series and update the existing surface, keeping its layout.
    ///
    /// Only the y-axis mode follows `show_information`; ranges the viewer chose
    /// stay as they are otherwise.
    pub fn render_update(&mut self, state: &ViewState) {
        let series = build_series(state, &self.grid, &self.looks);
        let mut layout = self
            .chart
            .current_layout(&self.container_id)
            .unwrap_or_else(|| Layout::initial(state, &self.grid));
        layout.apply_information_display(state.show_information);
        self.chart
            .update_plot(&self.container_id, &series, &layout, &self.render_config);
        self.push_formula(state);
    }

    pub fn resize(&mut self) {
        self.chart.resize(&self.container_id);
    }

    fn push_formula(&mut self, state: &ViewState) {
        let tex = format_formula(&state.params);
        let options = MathOptions::default();
        if let Err(err) = self.math.render(&self.formula_target, &tex, &options) {
            // fail-silent: the previous formula stays on screen
            log::debug!("formula not rendered: {err}");
        }
    }

    pub fn chart(&self) -> &C {
        &self.chart
    }

    pub fn chart_mut(&mut self) -> &mut C {
        &mut self.chart
    }

    pub fn math(&self) -> &M {
        &self.math
    }

    pub fn math_mut(&mut self) -> &mut M {
        &mut self.math
    }

    pub fn grid(&self) -> &ThetaGrid {
        &self.grid
    }
}
