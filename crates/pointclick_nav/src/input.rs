//! Pointer input delivered by the host's click classifier

use pointclick_math::Vec2;
use serde::{Deserialize, Serialize};

/// Classified pointer event
///
/// Classification (press duration, drag detection) happens outside this
/// crate; the host forwards the result once per occurrence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// Press and release under the short-click duration
    ShortClick,
    /// Press and release over the short-click duration
    LongClick,
    /// Button held this tick, carrying the raw pointer delta
    MouseHold { delta: Vec2 },
}

impl PointerEvent {
    /// Whether this event ends a press
    pub fn is_release(&self) -> bool {
        matches!(self, PointerEvent::ShortClick | PointerEvent::LongClick)
    }
}

/// Runtime platform, which scales raw pointer deltas
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    #[default]
    Desktop,
    /// Browser builds report roughly four times larger pointer deltas
    Web,
}

impl Platform {
    /// Multiplier applied on top of the pan sensitivity
    pub fn sensitivity_modifier(&self) -> f32 {
        match self {
            Platform::Desktop => 1.0,
            Platform::Web => 0.25,
        }
    }
}

impl std::str::FromStr for Platform {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "desktop" | "native" => Ok(Self::Desktop),
            "web" | "webgl" | "wasm" => Ok(Self::Web),
            _ => Err(format!("Unknown platform: {}", s)),
        }
    }
}
