//! Side-panel widgets: parameter sliders, value labels, information checkbox
//! and reset button.

use eframe::egui;
use egui_phosphor::regular::ARROW_COUNTER_CLOCKWISE;

use crate::config::SliderRanges;
use crate::controllers::{Control, ControlWidgets, InputEvent};
use crate::data::state::{ParamKey, ViewState};
use crate::formula::format_param;

/// Widget state written by the controller and read back from user input.
#[derive(Debug, Clone)]
pub struct EguiControls {
    values: [f64; 4],
    labels: [String; 4],
    show_information: bool,
    missing: Vec<Control>,
}

impl Default for EguiControls {
    fn default() -> Self {
        let state = ViewState::default();
        Self {
            values: ParamKey::ALL.map(|k| state.value(k)),
            labels: ParamKey::ALL.map(|k| format_param(k, state.value(k))),
            show_information: state.show_information,
            missing: Vec::new(),
        }
    }
}

impl EguiControls {
    pub fn new() -> Self {
        Self::default()
    }

    /// Leave `control` out of the panel.
    pub fn without(mut self, control: Control) -> Self {
        if !self.missing.contains(&control) {
            self.missing.push(control);
        }
        self
    }

    pub fn value(&self, key: ParamKey) -> f64 {
        self.values[key.index()]
    }

    pub fn label(&self, key: ParamKey) -> &str {
        &self.labels[key.index()]
    }

    pub fn information_checked(&self) -> bool {
        self.show_information
    }

    /// Draw the controls and collect the inputs of this frame.
    pub fn show(&mut self, ui: &mut egui::Ui, ranges: &SliderRanges) -> Vec<InputEvent> {
        let mut events = Vec::new();

        for key in ParamKey::ALL {
            let has_slider = self.has(Control::Slider(key));
            let has_label = self.has(Control::Label(key));
            if !has_slider && !has_label {
                continue;
            }
            ui.horizontal(|ui| {
                ui.label(format!("{} ({})", key.description(), key.symbol()));
                if has_label {
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.monospace(&self.labels[key.index()]);
                    });
                }
            });
            if has_slider {
                let range = ranges.get(key);
                let value = &mut self.values[key.index()];
                let resp = ui.add(
                    egui::Slider::new(value, range.min..=range.max)
                        .step_by(range.step)
                        .show_value(false),
                );
                if resp.changed() {
                    events.push(InputEvent::Slider { key, value: *value });
                }
            }
            ui.add_space(6.0);
        }

        ui.separator();
        if self.has(Control::InformationToggle)
            && ui
                .checkbox(&mut self.show_information, "Show information curve")
                .changed()
        {
            events.push(InputEvent::InformationToggled(self.show_information));
        }
        if self.has(Control::Reset)
            && ui
                .button(format!("{ARROW_COUNTER_CLOCKWISE} Reset"))
                .on_hover_text("Restore a = 1, b = 0, c = 0, d = 1")
                .clicked()
        {
            events.push(InputEvent::Reset);
        }

        events
    }
}

impl ControlWidgets for EguiControls {
    fn has(&self, control: Control) -> bool {
        !self.missing.contains(&control)
    }

    fn set_slider(&mut self, key: ParamKey, value: f64) {
        self.values[key.index()] = value;
    }

    fn set_label(&mut self, key: ParamKey, text: &str) {
        self.labels[key.index()] = text.to_string();
    }

    fn set_information_checked(&mut self, checked: bool) {
        self.show_information = checked;
    }
}
