//! egui_plot implementation of [`ChartSurface`].
//!
//! Each container id owns one plot surface holding the last pushed series,
//! layout and render options. [`EguiChart::show`] draws it every frame.

use std::collections::HashMap;

use egui::Color32;
use egui_plot::{Corner, Legend, Line, LineStyle, Plot};

use crate::data::payload::{
    HoverInfo, Layout, LegendPosition, RenderConfig, Series, PROBABILITY_Y_RANGE,
};
use crate::data::series_look::LineDash;
use crate::render::ChartSurface;

#[derive(Debug, Clone)]
struct PlotSurface {
    series: Vec<Series>,
    layout: Layout,
    home: Layout,
    config: RenderConfig,
    updates: u64,
    resize_pending: bool,
}

#[derive(Debug, Default)]
pub struct EguiChart {
    surfaces: HashMap<String, PlotSurface>,
    creates: u64,
    resizes: u64,
}

impl EguiChart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn series(&self, container_id: &str) -> Option<&[Series]> {
        self.surfaces.get(container_id).map(|s| s.series.as_slice())
    }

    /// Number of plots created so far, across all containers.
    pub fn creates(&self) -> u64 {
        self.creates
    }

    /// Number of in-place updates of `container_id`.
    pub fn updates(&self, container_id: &str) -> u64 {
        self.surfaces.get(container_id).map_or(0, |s| s.updates)
    }

    pub fn resizes(&self) -> u64 {
        self.resizes
    }

    /// Draw the plot of `container_id` into `ui`.
    pub fn show(&mut self, ui: &mut egui::Ui, container_id: &str) {
        let Some(surface) = self.surfaces.get_mut(container_id) else {
            ui.centered_and_justified(|ui| ui.weak("No plot yet"));
            return;
        };
        if std::mem::take(&mut surface.resize_pending) {
            ui.ctx().request_repaint();
        }

        let m = &surface.layout.margins;
        let frame = egui::Frame::new().inner_margin(egui::Margin {
            left: margin_px(m.left),
            right: margin_px(m.right),
            top: margin_px(m.top),
            bottom: margin_px(m.bottom),
        });
        frame.show(ui, |ui| draw_surface(ui, container_id, surface));
    }
}

fn draw_surface(ui: &mut egui::Ui, container_id: &str, surface: &mut PlotSurface) {
    let layout = &surface.layout;
    let mut plot = Plot::new(container_id)
        .allow_scroll(false)
        .allow_zoom(surface.config.scroll_zoom)
        .allow_boxed_zoom(true)
        .show_background(!layout.transparent_background)
        .show_grid([layout.x_axis.show_grid, layout.y_axis.show_grid])
        .x_axis_label(layout.x_axis.title.clone())
        .y_axis_label(layout.y_axis.title.clone())
        .show_x(layout.hover_closest)
        .show_y(layout.hover_closest);
    if layout.show_legend {
        plot = plot.legend(Legend::default().position(corner(layout.legend_position)));
    }
    if let Some(step) = layout.x_axis.tick_spacing {
        plot = plot.x_grid_spacer(egui_plot::uniform_grid_spacer(move |_| {
            [step / 5.0, step, step * 5.0]
        }));
    }
    if let Some(step) = layout.y_axis.tick_spacing {
        plot = plot.y_grid_spacer(egui_plot::uniform_grid_spacer(move |_| {
            [step / 5.0, step, step * 5.0]
        }));
    }

    let x_range = layout.x_axis.range;
    let y_range = if layout.y_axis.auto_range {
        Some(auto_range(&surface.series))
    } else {
        layout.y_axis.range
    };
    let series = &surface.series;

    let plot_resp = plot.show(ui, |plot_ui| {
        let resp = plot_ui.response();
        let is_zooming_rect = resp.drag_stopped_by(egui::PointerButton::Secondary);
        let is_panning =
            resp.dragged_by(egui::PointerButton::Primary) && resp.is_pointer_button_down_on();
        let home_requested = resp.double_clicked();
        let bounds_changed = is_zooming_rect || is_panning;

        if !bounds_changed {
            if let Some([lo, hi]) = x_range {
                plot_ui.set_plot_bounds_x(lo..=hi);
            }
            if let Some([lo, hi]) = y_range {
                plot_ui.set_plot_bounds_y(lo..=hi);
            }
        }

        for s in series {
            let look = s.look;
            let [r, g, b, a] = look.color_rgba;
            // unnamed items stay out of the legend
            let name = if s.show_in_legend { s.name.as_str() } else { "" };
            let line = Line::new(name, s.points().collect::<Vec<[f64; 2]>>())
                .color(Color32::from_rgba_unmultiplied(r, g, b, a))
                .width(look.width)
                .style(line_style(look.dash))
                .allow_hover(s.hover == HoverInfo::XY);
            plot_ui.line(line);
        }

        (bounds_changed, home_requested)
    });

    let (bounds_changed, home_requested) = plot_resp.inner;
    if home_requested {
        surface.layout.x_axis.range = surface.home.x_axis.range;
        if !surface.layout.y_axis.auto_range {
            surface.layout.y_axis.range = Some(PROBABILITY_Y_RANGE);
        }
    } else if bounds_changed {
        let b = plot_resp.transform.bounds();
        let xr = b.range_x();
        let (x_min, x_max) = (*xr.start(), *xr.end());
        if x_min.is_finite() && x_max.is_finite() && x_max > x_min {
            surface.layout.x_axis.range = Some([x_min, x_max]);
        }
        if !surface.layout.y_axis.auto_range {
            let yr = b.range_y();
            let (y_min, y_max) = (*yr.start(), *yr.end());
            if y_min.is_finite() && y_max.is_finite() && y_max > y_min {
                surface.layout.y_axis.range = Some([y_min, y_max]);
            }
        }
    }
}

impl ChartSurface for EguiChart {
    fn create_plot(
        &mut self,
        container_id: &str,
        series: &[Series],
        layout: &Layout,
        config: &RenderConfig,
    ) {
        self.creates += 1;
        log::debug!("creating plot surface '{container_id}'");
        self.surfaces.insert(
            container_id.to_string(),
            PlotSurface {
                series: series.to_vec(),
                layout: layout.clone(),
                home: layout.clone(),
                config: *config,
                updates: 0,
                resize_pending: false,
            },
        );
    }

    fn update_plot(
        &mut self,
        container_id: &str,
        series: &[Series],
        layout: &Layout,
        config: &RenderConfig,
    ) {
        match self.surfaces.get_mut(container_id) {
            Some(surface) => {
                surface.series = series.to_vec();
                surface.layout = layout.clone();
                surface.config = *config;
                surface.updates += 1;
            }
            None => {
                log::warn!("update of unknown plot '{container_id}', creating it");
                self.create_plot(container_id, series, layout, config);
            }
        }
    }

    fn current_layout(&self, container_id: &str) -> Option<Layout> {
        self.surfaces.get(container_id).map(|s| s.layout.clone())
    }

    fn resize(&mut self, container_id: &str) {
        self.resizes += 1;
        if let Some(surface) = self.surfaces.get_mut(container_id) {
            surface.resize_pending = true;
        }
    }
}

fn margin_px(v: f32) -> i8 {
    v.clamp(0.0, i8::MAX as f32) as i8
}

fn corner(position: LegendPosition) -> Corner {
    match position {
        LegendPosition::TopLeft => Corner::LeftTop,
        LegendPosition::TopRight => Corner::RightTop,
        LegendPosition::BottomLeft => Corner::LeftBottom,
        LegendPosition::BottomRight => Corner::RightBottom,
    }
}

fn line_style(dash: LineDash) -> LineStyle {
    match dash {
        LineDash::Solid => LineStyle::Solid,
        LineDash::Dashed { length } => LineStyle::Dashed { length },
        LineDash::Dotted { spacing } => LineStyle::Dotted { spacing },
    }
}

/// Y bounds covering every finite sample plus 5% headroom on each side.
pub(crate) fn auto_range(series: &[Series]) -> [f64; 2] {
    let mut lo = f64::INFINITY;
    let mut hi = f64::NEG_INFINITY;
    for y in series.iter().flat_map(|s| s.y.iter().copied()) {
        if y.is_finite() {
            lo = lo.min(y);
            hi = hi.max(y);
        }
    }
    if !lo.is_finite() || !hi.is_finite() {
        return PROBABILITY_Y_RANGE;
    }
    if hi - lo < f64::EPSILON {
        return [lo - 0.5, hi + 0.5];
    }
    let pad = (hi - lo) * 0.05;
    [lo - pad, hi + pad]
}
