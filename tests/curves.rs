use irtplot::data::curve::{sample, sample_on, ThetaGrid};
use irtplot::data::payload::{RenderPayload, SeriesRole, PROBABILITY_Y_RANGE};
use irtplot::data::series_look::SeriesLooks;
use irtplot::data::state::ViewState;
use irtplot::model::{information, probability, ModelParameters};
use irtplot::ExplorerConfig;

#[test]
fn default_grid_spans_ability_range() {
    let curve = sample(&ModelParameters::default(), true);
    assert_eq!(curve.theta.len(), 81);
    assert_eq!(curve.theta.first(), Some(&-4.0));
    assert!((curve.theta[80] - 4.0).abs() < 1e-9);
    assert_eq!(curve.information.as_ref().map(Vec::len), Some(81));
}

#[test]
fn sampling_is_idempotent() {
    let params = ModelParameters::new(1.7, -0.4, 0.15, 0.92);
    assert_eq!(sample(&params, true), sample(&params, true));
}

#[test]
fn information_is_omitted_on_request() {
    let curve = sample(&ModelParameters::default(), false);
    assert!(curve.information.is_none());
    assert_eq!(curve.probability.len(), curve.theta.len());
}

#[test]
fn custom_grid_is_honoured() {
    let grid = ThetaGrid {
        min: -2.0,
        max: 2.0,
        step: 0.5,
    };
    let curve = sample_on(&grid, &ModelParameters::default(), false);
    assert_eq!(curve.theta.len(), 9);
    assert!((curve.probability[4] - 0.5).abs() < 1e-12);
}

#[test]
fn guessing_item_midpoint() {
    let params = ModelParameters::new(1.0, 0.0, 0.2, 0.9);
    assert!((probability(0.0, 1.0, 0.0, 0.2, 0.9) - 0.55).abs() < 1e-12);
    assert!((params.probability(0.0) - 0.55).abs() < 1e-12);
    assert!(information(0.0, 1.0, 0.0, 0.2, 0.9) > 0.0);
}

#[test]
fn payload_follows_information_switch() {
    let grid = ThetaGrid::default();
    let looks = SeriesLooks::default();

    let shown = RenderPayload::build(&ViewState::default(), &grid, &looks);
    assert_eq!(
        shown.roles(),
        vec![
            SeriesRole::Probability,
            SeriesRole::Information,
            SeriesRole::Guessing,
            SeriesRole::Inattention,
        ]
    );
    assert!(shown.layout.y_axis.auto_range);

    let hidden = RenderPayload::build(
        &ViewState {
            show_information: false,
            ..ViewState::default()
        },
        &grid,
        &looks,
    );
    assert!(hidden.series(SeriesRole::Information).is_none());
    assert_eq!(hidden.layout.y_axis.range, Some(PROBABILITY_Y_RANGE));
}

#[test]
fn asymptote_guides_track_parameters() {
    let state = ViewState {
        params: ModelParameters::new(1.0, 0.0, 0.25, 0.8),
        show_information: true,
    };
    let payload = RenderPayload::build(&state, &ThetaGrid::default(), &SeriesLooks::default());
    let guess = payload.series(SeriesRole::Guessing).unwrap();
    assert_eq!(guess.x, vec![-4.0, 4.0]);
    assert_eq!(guess.y, vec![0.25, 0.25]);
    assert!(!guess.show_in_legend);
    let inatt = payload.series(SeriesRole::Inattention).unwrap();
    assert_eq!(inatt.y, vec![0.8, 0.8]);
}

#[test]
fn payload_serialises_to_json() {
    let payload = RenderPayload::build(
        &ViewState::default(),
        &ExplorerConfig::default().grid,
        &SeriesLooks::default(),
    );
    let json = serde_json::to_value(&payload).unwrap();
    assert_eq!(json["series"].as_array().map(Vec::len), Some(4));
    assert_eq!(json["layout"]["x_axis"]["title"], "Ability (θ)");
}
