//! Entry point for running the explorer as a native window.

use eframe::egui;

use crate::config::ExplorerConfig;
use crate::data::state::ViewState;

use super::explorer_app::IrtApp;

/// Open the explorer window and block until it is closed.
///
/// `show_information` sets the initial state of the information curve; all
/// parameters start at their defaults.
pub fn run_explorer(config: ExplorerConfig, show_information: bool) -> eframe::Result<()> {
    let initial = ViewState {
        show_information,
        ..ViewState::default()
    };
    let app = IrtApp::new(&config, initial);

    let [w, h] = config.window_size;
    let mut viewport = egui::ViewportBuilder::default()
        .with_title(config.title.clone())
        .with_inner_size(egui::vec2(w, h));
    if let Some(icon) = load_app_icon_svg() {
        viewport = viewport.with_icon(icon);
    }
    let opts = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    log::info!("opening '{}' ({w}x{h})", config.title);
    eframe::run_native(
        &config.title,
        opts,
        Box::new(|cc| {
            let mut fonts = egui::FontDefinitions::default();
            egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
            cc.egui_ctx.set_fonts(fonts);
            Ok(Box::new(app))
        }),
    )
}

/// Rasterise the crate's `icon.svg` for the window icon.
fn load_app_icon_svg() -> Option<egui::IconData> {
    let svg_path = concat!(env!("CARGO_MANIFEST_DIR"), "/icon.svg");
    let data = match std::fs::read(svg_path) {
        Ok(data) => data,
        Err(err) => {
            log::debug!("no window icon: {err}");
            return None;
        }
    };

    let opt = usvg::Options::default();
    let tree = usvg::Tree::from_data(&data, &opt).ok()?;
    let size = tree.size().to_int_size();
    if size.width() == 0 || size.height() == 0 {
        return None;
    }
    let mut pixmap = tiny_skia::Pixmap::new(size.width(), size.height())?;
    resvg::render(&tree, tiny_skia::Transform::default(), &mut pixmap.as_mut());
    Some(egui::IconData {
        rgba: pixmap.take(),
        width: size.width(),
        height: size.height(),
    })
}
