//! The explorer window: controls on the left, formula on top, plot below.

use eframe::egui;

use crate::config::{ExplorerConfig, SliderRanges, Theme};
use crate::controllers::{InputEvent, InteractionController};
use crate::data::state::ViewState;
use crate::render::RenderPipeline;

use super::chart::EguiChart;
use super::controls::EguiControls;
use super::formula_view::FormulaView;

pub type EguiController = InteractionController<EguiChart, FormulaView, EguiControls>;

pub struct IrtApp {
    controller: EguiController,
    sliders: SliderRanges,
    theme: Theme,
    container_id: String,
    formula_target: String,
    last_size: Option<egui::Vec2>,
    started: bool,
}

impl IrtApp {
    pub fn new(config: &ExplorerConfig, initial: ViewState) -> Self {
        let pipeline = RenderPipeline::with_config(EguiChart::new(), FormulaView::new(), config);
        Self {
            controller: InteractionController::with_state(pipeline, EguiControls::new(), initial),
            sliders: config.sliders,
            theme: config.theme,
            container_id: config.container_id.clone(),
            formula_target: config.formula_target.clone(),
            last_size: None,
            started: false,
        }
    }

    pub fn controller(&self) -> &EguiController {
        &self.controller
    }

    fn track_size(&mut self, ctx: &egui::Context) {
        let size = ctx.input(|i| i.content_rect()).size();
        if let Some(prev) = self.last_size {
            if prev != size {
                self.controller.handle(InputEvent::Resize);
            }
        }
        self.last_size = Some(size);
    }
}

fn apply_theme(ctx: &egui::Context, theme: Theme) {
    match theme {
        Theme::Light => ctx.set_visuals(egui::Visuals::light()),
        Theme::Dark => ctx.set_visuals(egui::Visuals::dark()),
    }
}

impl eframe::App for IrtApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if !self.started {
            apply_theme(ctx, self.theme);
            self.controller.start();
            self.started = true;
        }
        self.track_size(ctx);

        let sliders = self.sliders;
        let inputs = egui::SidePanel::left("parameter_controls")
            .resizable(false)
            .default_width(280.0)
            .show(ctx, |ui| {
                ui.heading("Item parameters");
                ui.add_space(8.0);
                self.controller.widgets_mut().show(ui, &sliders)
            })
            .inner;
        for input in inputs {
            self.controller.handle(input);
        }

        // one coalesced render per frame
        self.controller.on_frame();

        egui::TopBottomPanel::top("formula_panel").show(ctx, |ui| {
            ui.add_space(6.0);
            self.controller
                .pipeline()
                .math()
                .show(ui, &self.formula_target);
            ui.add_space(6.0);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.controller
                .pipeline_mut()
                .chart_mut()
                .show(ui, &self.container_id);
        });
    }
}
