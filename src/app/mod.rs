//! Native viewer built on eframe/egui.
//!
//! - [`EguiChart`] draws pushed series with egui_plot.
//! - [`FormulaView`] shows the live formula as Unicode text.
//! - [`EguiControls`] holds the sliders, labels, checkbox and reset button.
//! - [`IrtApp`] wires them to an [`InteractionController`](crate::controllers::InteractionController),
//!   treating every frame as one scheduling quantum.

pub mod chart;
pub mod controls;
pub mod explorer_app;
pub mod formula_view;
pub mod run;

pub use chart::EguiChart;
pub use controls::EguiControls;
pub use explorer_app::{EguiController, IrtApp};
pub use formula_view::FormulaView;
pub use run::run_explorer;
