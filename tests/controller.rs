use std::collections::HashMap;

use irtplot::controllers::{Control, ControlWidgets, ControllerState, InputEvent, InteractionController};
use irtplot::data::payload::{Layout, RenderConfig, Series, SeriesRole};
use irtplot::data::state::{ParamKey, ViewState};
use irtplot::formula::{MathOptions, MathRenderError};
use irtplot::render::{ChartSurface, MathSurface, RenderPipeline};

#[derive(Debug, Clone, PartialEq)]
enum Call {
    Create(Vec<SeriesRole>),
    Update(Vec<SeriesRole>),
    Resize,
}

#[derive(Default)]
struct RecordingChart {
    calls: Vec<Call>,
    layout: Option<Layout>,
    last_series: Vec<Series>,
}

impl RecordingChart {
    fn updates(&self) -> usize {
        self.calls.iter().filter(|c| matches!(c, Call::Update(_))).count()
    }
}

impl ChartSurface for RecordingChart {
    fn create_plot(&mut self, _: &str, series: &[Series], layout: &Layout, _: &RenderConfig) {
        self.calls.push(Call::Create(series.iter().map(|s| s.role).collect()));
        self.layout = Some(layout.clone());
        self.last_series = series.to_vec();
    }

    fn update_plot(&mut self, _: &str, series: &[Series], layout: &Layout, _: &RenderConfig) {
        self.calls.push(Call::Update(series.iter().map(|s| s.role).collect()));
        self.layout = Some(layout.clone());
        self.last_series = series.to_vec();
    }

    fn current_layout(&self, _: &str) -> Option<Layout> {
        self.layout.clone()
    }

    fn resize(&mut self, _: &str) {
        self.calls.push(Call::Resize);
    }
}

#[derive(Default)]
struct RecordingMath {
    rendered: Vec<String>,
}

impl MathSurface for RecordingMath {
    fn render(&mut self, _: &str, expression: &str, _: &MathOptions) -> Result<(), MathRenderError> {
        self.rendered.push(expression.to_string());
        Ok(())
    }
}

#[derive(Default)]
struct RecordingWidgets {
    missing: Vec<Control>,
    sliders: HashMap<ParamKey, f64>,
    labels: HashMap<ParamKey, String>,
    label_writes: usize,
    checked: Option<bool>,
}

impl ControlWidgets for RecordingWidgets {
    fn has(&self, control: Control) -> bool {
        !self.missing.contains(&control)
    }
    fn set_slider(&mut self, key: ParamKey, value: f64) {
        self.sliders.insert(key, value);
    }
    fn set_label(&mut self, key: ParamKey, text: &str) {
        self.label_writes += 1;
        self.labels.insert(key, text.to_string());
    }
    fn set_information_checked(&mut self, checked: bool) {
        self.checked = Some(checked);
    }
}

type Controller = InteractionController<RecordingChart, RecordingMath, RecordingWidgets>;

fn started(widgets: RecordingWidgets) -> Controller {
    let pipeline = RenderPipeline::new(RecordingChart::default(), RecordingMath::default());
    let mut ctrl = InteractionController::new(pipeline, widgets);
    ctrl.start();
    ctrl
}

const DEFAULT_FORMULA: &str = r"P(\theta) = 0.00 + \frac{1.00 - 0.00}{1 + e^{-1.0(\theta - 0.0)}}";

#[test]
fn start_creates_plot_and_syncs_widgets() {
    let ctrl = started(RecordingWidgets::default());
    let chart = ctrl.pipeline().chart();
    assert_eq!(chart.calls.len(), 1);
    assert!(matches!(&chart.calls[0], Call::Create(roles) if roles.len() == 4));
    assert_eq!(ctrl.pipeline().math().rendered, vec![DEFAULT_FORMULA.to_string()]);
    assert_eq!(ctrl.widgets().labels.get(&ParamKey::C).map(String::as_str), Some("0.00"));
    assert_eq!(ctrl.widgets().sliders.get(&ParamKey::A), Some(&1.0));
    assert_eq!(ctrl.widgets().checked, Some(true));
    assert_eq!(ctrl.state(), ControllerState::Idle);
}

#[test]
fn toggling_information_off_removes_only_that_series() {
    let mut ctrl = started(RecordingWidgets::default());
    let before: Vec<Series> = ctrl
        .pipeline()
        .chart()
        .last_series
        .iter()
        .filter(|s| s.role != SeriesRole::Information)
        .cloned()
        .collect();
    assert_eq!(before.len(), 3);

    ctrl.handle(InputEvent::InformationToggled(false));

    let chart = ctrl.pipeline().chart();
    assert_eq!(chart.updates(), 1);
    assert_eq!(
        chart.calls.last(),
        Some(&Call::Update(vec![
            SeriesRole::Probability,
            SeriesRole::Guessing,
            SeriesRole::Inattention,
        ]))
    );
    assert_eq!(chart.last_series, before);

    let layout = chart.layout.clone().unwrap();
    assert_eq!(layout.y_axis.range, Some([-0.05, 1.05]));
    assert!(!layout.y_axis.auto_range);
    assert_eq!(layout.x_axis.range, Some([-4.0, 4.0]));
}

#[test]
fn slider_burst_is_coalesced_into_one_update() {
    let mut ctrl = started(RecordingWidgets::default());
    for value in [0.2, 0.4, 0.6, 0.8, 1.0] {
        ctrl.handle(InputEvent::Slider {
            key: ParamKey::B,
            value,
        });
    }
    assert_eq!(ctrl.state(), ControllerState::Rendering);
    assert_eq!(ctrl.pipeline().chart().updates(), 0);

    assert!(ctrl.on_frame());
    assert!(!ctrl.on_frame());
    assert_eq!(ctrl.state(), ControllerState::Idle);

    let chart = ctrl.pipeline().chart();
    assert_eq!(chart.updates(), 1);
    assert_eq!(ctrl.view_state().params.b, 1.0);
    let p = chart
        .last_series
        .iter()
        .find(|s| s.role == SeriesRole::Probability)
        .unwrap();
    // θ = 1.0 is grid index 50
    assert!((p.x[50] - 1.0).abs() < 1e-9);
    assert!((p.y[50] - 0.5).abs() < 1e-9);

    let formula = ctrl.pipeline().math().rendered.last().cloned().unwrap();
    assert!(formula.contains(r"(\theta - 1.0)"), "{formula}");
    assert_eq!(ctrl.widgets().labels.get(&ParamKey::B).map(String::as_str), Some("1.0"));
}

#[test]
fn reset_restores_defaults_everywhere() {
    let mut ctrl = started(RecordingWidgets::default());
    ctrl.handle(InputEvent::Slider { key: ParamKey::A, value: 2.5 });
    ctrl.handle(InputEvent::Slider { key: ParamKey::C, value: 0.3 });
    ctrl.on_frame();
    ctrl.handle(InputEvent::InformationToggled(false));
    ctrl.handle(InputEvent::Reset);

    assert_eq!(ctrl.view_state(), ViewState::default());
    let widgets = ctrl.widgets();
    assert_eq!(widgets.sliders.get(&ParamKey::A), Some(&1.0));
    assert_eq!(widgets.sliders.get(&ParamKey::C), Some(&0.0));
    assert_eq!(widgets.labels.get(&ParamKey::A).map(String::as_str), Some("1.0"));
    assert_eq!(widgets.labels.get(&ParamKey::B).map(String::as_str), Some("0.0"));
    assert_eq!(widgets.labels.get(&ParamKey::C).map(String::as_str), Some("0.00"));
    assert_eq!(widgets.labels.get(&ParamKey::D).map(String::as_str), Some("1.00"));
    assert_eq!(widgets.checked, Some(true));
    assert_eq!(
        ctrl.pipeline().math().rendered.last().map(String::as_str),
        Some(DEFAULT_FORMULA)
    );
    let chart = ctrl.pipeline().chart();
    assert!(matches!(chart.calls.last(), Some(Call::Update(roles)) if roles.len() == 4));
}

#[test]
fn reset_drops_pending_slider_updates() {
    let mut ctrl = started(RecordingWidgets::default());
    ctrl.handle(InputEvent::Slider { key: ParamKey::D, value: 0.7 });
    ctrl.handle(InputEvent::Reset);
    assert_eq!(ctrl.state(), ControllerState::Idle);
    assert!(!ctrl.on_frame());
    assert_eq!(ctrl.view_state().params.d, 1.0);
}

#[test]
fn toggle_folds_pending_slider_update() {
    let mut ctrl = started(RecordingWidgets::default());
    ctrl.handle(InputEvent::Slider { key: ParamKey::A, value: 2.0 });
    ctrl.handle(InputEvent::InformationToggled(false));
    assert!(!ctrl.on_frame());
    assert_eq!(ctrl.pipeline().chart().updates(), 1);
    assert_eq!(ctrl.widgets().labels.get(&ParamKey::A).map(String::as_str), Some("2.0"));
}

#[test]
fn missing_widgets_are_skipped() {
    let widgets = RecordingWidgets {
        missing: vec![
            Control::Label(ParamKey::B),
            Control::Slider(ParamKey::B),
            Control::InformationToggle,
        ],
        ..Default::default()
    };
    let mut ctrl = started(widgets);
    ctrl.handle(InputEvent::Slider { key: ParamKey::B, value: -1.0 });
    ctrl.on_frame();
    ctrl.handle(InputEvent::Reset);

    let widgets = ctrl.widgets();
    assert!(!widgets.labels.contains_key(&ParamKey::B));
    assert!(!widgets.sliders.contains_key(&ParamKey::B));
    assert_eq!(widgets.checked, None);
    assert!(widgets.labels.contains_key(&ParamKey::A));
    // the plot still follows the store
    assert_eq!(ctrl.pipeline().chart().updates(), 2);
}

#[test]
fn labels_are_written_once_per_flush() {
    let mut ctrl = started(RecordingWidgets::default());
    let before = ctrl.widgets().label_writes;
    for i in 0..10 {
        ctrl.handle(InputEvent::Slider {
            key: ParamKey::C,
            value: f64::from(i) * 0.01,
        });
    }
    ctrl.on_frame();
    assert_eq!(ctrl.widgets().label_writes - before, 1);
    assert_eq!(ctrl.widgets().labels.get(&ParamKey::C).map(String::as_str), Some("0.09"));
}

#[test]
fn resize_is_forwarded_without_state_change() {
    let mut ctrl = started(RecordingWidgets::default());
    ctrl.handle(InputEvent::Resize);
    assert_eq!(ctrl.pipeline().chart().calls.last(), Some(&Call::Resize));
    assert_eq!(ctrl.view_state(), ViewState::default());
    assert_eq!(ctrl.state(), ControllerState::Idle);
}

#[test]
fn headless_widgets_are_accepted() {
    let pipeline = RenderPipeline::new(RecordingChart::default(), RecordingMath::default());
    let mut ctrl = InteractionController::new(pipeline, ());
    ctrl.start();
    ctrl.handle(InputEvent::Slider { key: ParamKey::A, value: 0.5 });
    assert!(ctrl.on_frame());
    assert_eq!(ctrl.view_state().params.a, 0.5);
}
