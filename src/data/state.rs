//! View state and its single-writer store.

use serde::{Deserialize, Serialize};

use crate::model::ModelParameters;

/// Identifies one of the four model parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ParamKey {
    A,
    B,
    C,
    D,
}

impl ParamKey {
    pub const ALL: [ParamKey; 4] = [ParamKey::A, ParamKey::B, ParamKey::C, ParamKey::D];

    /// Position in [`ParamKey::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn symbol(self) -> &'static str {
        match self {
            ParamKey::A => "a",
            ParamKey::B => "b",
            ParamKey::C => "c",
            ParamKey::D => "d",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            ParamKey::A => "Discrimination",
            ParamKey::B => "Difficulty",
            ParamKey::C => "Guessing",
            ParamKey::D => "Inattention",
        }
    }

    /// Decimal places used when the value is displayed.
    pub fn display_decimals(self) -> usize {
        match self {
            ParamKey::A | ParamKey::B => 1,
            ParamKey::C | ParamKey::D => 2,
        }
    }

    pub fn get(self, params: &ModelParameters) -> f64 {
        match self {
            ParamKey::A => params.a,
            ParamKey::B => params.b,
            ParamKey::C => params.c,
            ParamKey::D => params.d,
        }
    }

    pub fn set(self, params: &mut ModelParameters, value: f64) {
        match self {
            ParamKey::A => params.a = value,
            ParamKey::B => params.b = value,
            ParamKey::C => params.c = value,
            ParamKey::D => params.d = value,
        }
    }
}

impl std::fmt::Display for ParamKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Model parameters plus the information-curve switch.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewState {
    pub params: ModelParameters,
    pub show_information: bool,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            params: ModelParameters::default(),
            show_information: true,
        }
    }
}

impl ViewState {
    pub fn value(&self, key: ParamKey) -> f64 {
        key.get(&self.params)
    }
}

/// Owner of the current [`ViewState`].
///
/// Setters accept any value; ordering of `c` and `d` is not enforced.
#[derive(Debug, Clone, Default)]
pub struct ParameterStore {
    state: ViewState,
}

impl ParameterStore {
    pub fn new(initial: ViewState) -> Self {
        Self { state: initial }
    }

    /// Snapshot of the current state.
    pub fn get(&self) -> ViewState {
        self.state
    }

    pub fn set(&mut self, key: ParamKey, value: f64) {
        key.set(&mut self.state.params, value);
        if !self.state.params.asymptotes_ordered() {
            log::debug!(
                "asymptotes out of order (c={}, d={}); curve will decrease",
                self.state.params.c,
                self.state.params.d
            );
        }
    }

    pub fn toggle_information(&mut self, show: bool) {
        self.state.show_information = show;
    }

    /// Restore the documented defaults, including `show_information = true`.
    pub fn reset(&mut self) {
        self.state = ViewState::default();
    }
}
