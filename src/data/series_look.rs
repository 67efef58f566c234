use serde::{Deserialize, Serialize};

/// Stroke pattern of a rendered series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum LineDash {
    Solid,
    Dashed { length: f32 },
    Dotted { spacing: f32 },
}

/// Style metadata attached to every series pushed to the chart surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeriesLook {
    pub color_rgba: [u8; 4],
    pub width: f32,
    pub dash: LineDash,
}

impl Default for SeriesLook {
    fn default() -> Self {
        Self {
            color_rgba: [255, 255, 255, 255],
            width: 1.5,
            dash: LineDash::Solid,
        }
    }
}

impl SeriesLook {
    pub const fn solid(color_rgba: [u8; 4], width: f32) -> Self {
        Self {
            color_rgba,
            width,
            dash: LineDash::Solid,
        }
    }

    pub const fn dashed(color_rgba: [u8; 4], width: f32) -> Self {
        Self {
            color_rgba,
            width,
            dash: LineDash::Dashed { length: 6.0 },
        }
    }

    /// Probability curve: indigo 600.
    pub const fn probability() -> Self {
        Self::solid([0x4f, 0x46, 0xe5, 0xff], 3.0)
    }

    /// Information curve: emerald 500.
    pub const fn information() -> Self {
        Self::solid([0x10, 0xb9, 0x81, 0xff], 2.5)
    }

    /// Asymptote guide lines: slate 400, dashed.
    pub const fn asymptote() -> Self {
        Self::dashed([0x94, 0xa3, 0xb8, 0xff], 2.0)
    }
}

/// Looks for every series the explorer draws.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeriesLooks {
    pub probability: SeriesLook,
    pub information: SeriesLook,
    pub guessing: SeriesLook,
    pub inattention: SeriesLook,
}

impl Default for SeriesLooks {
    fn default() -> Self {
        Self {
            probability: SeriesLook::probability(),
            information: SeriesLook::information(),
            guessing: SeriesLook::asymptote(),
            inattention: SeriesLook::asymptote(),
        }
    }
}
