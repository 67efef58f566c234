//! [`MathSurface`] that typesets the formula as Unicode text.

use std::collections::HashMap;

use eframe::egui;

use crate::formula::{tex_to_unicode, MathOptions, MathRenderError};
use crate::render::MathSurface;

#[derive(Debug, Clone)]
struct Rendered {
    text: String,
    display_mode: bool,
}

#[derive(Debug, Default)]
pub struct FormulaView {
    targets: HashMap<String, Rendered>,
    failures: u64,
}

impl FormulaView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Text currently shown in `target`.
    pub fn text(&self, target: &str) -> Option<&str> {
        self.targets.get(target).map(|r| r.text.as_str())
    }

    /// Expressions that could not be typeset.
    pub fn failures(&self) -> u64 {
        self.failures
    }

    pub fn show(&self, ui: &mut egui::Ui, target: &str) {
        let Some(rendered) = self.targets.get(target) else {
            return;
        };
        let size = if rendered.display_mode { 22.0 } else { 15.0 };
        ui.vertical_centered(|ui| {
            ui.label(egui::RichText::new(&rendered.text).size(size).strong());
        });
    }
}

impl MathSurface for FormulaView {
    fn render(
        &mut self,
        target: &str,
        expression: &str,
        options: &MathOptions,
    ) -> Result<(), MathRenderError> {
        match tex_to_unicode(expression) {
            Ok(text) => {
                self.targets.insert(
                    target.to_string(),
                    Rendered {
                        text,
                        display_mode: options.display_mode,
                    },
                );
                Ok(())
            }
            Err(err) => {
                self.failures += 1;
                if options.fail_silently {
                    log::trace!("keeping previous formula in '{target}': {err}");
                    Ok(())
                } else {
                    Err(err)
                }
            }
        }
    }
}
