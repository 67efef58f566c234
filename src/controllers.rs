//! Interaction controller: turns input events into store mutations and renders.
//!
//! ```text
//!            slider input (coalesced)
//!   Idle ──────────────────────────────▶ Rendering
//!    ▲                                      │
//!    └──────────── on_frame() flush ◀───────┘
//!
//!   toggle / reset  → store mutation + immediate render, stays Idle
//!   resize          → forwarded to the chart surface, no state change
//! ```
//!
//! The controller is the only writer of the [`ParameterStore`]. Widgets are
//! reached through [`ControlWidgets`]; absent controls are skipped.

use crate::coalesce::Coalescer;
use crate::data::state::{ParamKey, ParameterStore, ViewState};
use crate::formula::format_param;
use crate::render::{ChartSurface, MathSurface, RenderPipeline};

/// Raw input delivered by the widget layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    Slider { key: ParamKey, value: f64 },
    InformationToggled(bool),
    Reset,
    Resize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControllerState {
    /// Nothing scheduled.
    Idle,
    /// A coalesced render is waiting for the next quantum.
    Rendering,
}

/// Widgets the controller may write to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Control {
    Slider(ParamKey),
    Label(ParamKey),
    InformationToggle,
    Reset,
}

/// Writable side of the input widgets.
pub trait ControlWidgets {
    /// Whether the page variant provides `control`.
    fn has(&self, control: Control) -> bool;
    fn set_slider(&mut self, key: ParamKey, value: f64);
    fn set_label(&mut self, key: ParamKey, text: &str);
    fn set_information_checked(&mut self, checked: bool);
}

/// No widgets at all, for headless use.
impl ControlWidgets for () {
    fn has(&self, _control: Control) -> bool {
        false
    }
    fn set_slider(&mut self, _key: ParamKey, _value: f64) {}
    fn set_label(&mut self, _key: ParamKey, _text: &str) {}
    fn set_information_checked(&mut self, _checked: bool) {}
}

pub struct InteractionController<C, M, W> {
    store: ParameterStore,
    pipeline: RenderPipeline<C, M>,
    widgets: W,
    pending: Coalescer<ParamKey>,
}

impl<C, M, W> InteractionController<C, M, W>
where
    C: ChartSurface,
    M: MathSurface,
    W: ControlWidgets,
{
    pub fn new(pipeline: RenderPipeline<C, M>, widgets: W) -> Self {
        Self::with_state(pipeline, widgets, ViewState::default())
    }

    pub fn with_state(pipeline: RenderPipeline<C, M>, widgets: W, initial: ViewState) -> Self {
        Self {
            store: ParameterStore::new(initial),
            pipeline,
            widgets,
            pending: Coalescer::new(),
        }
    }

    /// Initial load: sync widgets to the store and create the plot surface.
    pub fn start(&mut self) {
        let snapshot = self.store.get();
        self.sync_widgets(&snapshot);
        self.pipeline.render_initial(&snapshot);
        log::info!(
            "plot created (a={}, b={}, c={}, d={}, information={})",
            snapshot.params.a,
            snapshot.params.b,
            snapshot.params.c,
            snapshot.params.d,
            snapshot.show_information
        );
    }

    pub fn state(&self) -> ControllerState {
        if self.pending.is_pending() {
            ControllerState::Rendering
        } else {
            ControllerState::Idle
        }
    }

    pub fn view_state(&self) -> ViewState {
        self.store.get()
    }

    pub fn handle(&mut self, event: InputEvent) {
        match event {
            InputEvent::Slider { key, value } => {
                self.store.set(key, value);
                if self.pending.schedule(key) {
                    log::trace!("render scheduled by slider {key}");
                }
            }
            InputEvent::InformationToggled(show) => {
                self.store.toggle_information(show);
                log::debug!("information curve {}", if show { "shown" } else { "hidden" });
                self.render_now();
            }
            InputEvent::Reset => self.reset(),
            InputEvent::Resize => {
                log::debug!("forwarding resize to chart surface");
                self.pipeline.resize();
            }
        }
    }

    /// Flush the coalesced slider updates of this quantum. Returns `true` if a
    /// render happened.
    pub fn on_frame(&mut self) -> bool {
        let coalesced = self.pending.pending_requests();
        let Some(dirty) = self.pending.take() else {
            return false;
        };
        let snapshot = self.store.get();
        for &key in &dirty {
            self.write_label(key, &snapshot);
        }
        self.pipeline.render_update(&snapshot);
        log::debug!(
            "flush #{}: coalesced {coalesced} slider input(s) into one render",
            self.pending.flushes()
        );
        true
    }

    fn render_now(&mut self) {
        // fold any pending slider flush into this render
        let dirty = self.pending.take().unwrap_or_default();
        let snapshot = self.store.get();
        for &key in &dirty {
            self.write_label(key, &snapshot);
        }
        self.pipeline.render_update(&snapshot);
    }

    fn reset(&mut self) {
        self.store.reset();
        // pending slider values are superseded by the defaults
        self.pending.take();
        let snapshot = self.store.get();
        self.sync_widgets(&snapshot);
        self.pipeline.render_update(&snapshot);
        log::info!("parameters reset to defaults");
    }

    fn sync_widgets(&mut self, snapshot: &ViewState) {
        for key in ParamKey::ALL {
            if self.widgets.has(Control::Slider(key)) {
                self.widgets.set_slider(key, snapshot.value(key));
            }
            self.write_label(key, snapshot);
        }
        if self.widgets.has(Control::InformationToggle) {
            self.widgets
                .set_information_checked(snapshot.show_information);
        }
    }

    fn write_label(&mut self, key: ParamKey, snapshot: &ViewState) {
        if self.widgets.has(Control::Label(key)) {
            self.widgets
                .set_label(key, &format_param(key, snapshot.value(key)));
        }
    }

    pub fn pipeline(&self) -> &RenderPipeline<C, M> {
        &self.pipeline
    }

    pub fn pipeline_mut(&mut self) -> &mut RenderPipeline<C, M> {
        &mut self.pipeline
    }

    pub fn widgets(&self) -> &W {
        &self.widgets
    }

    pub fn widgets_mut(&mut self) -> &mut W {
        &mut self.widgets
    }
}
