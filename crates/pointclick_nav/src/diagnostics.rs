//! Camera pan diagnostics
//!
//! A snapshot of how raw pointer input turns into pan-axis adjustments,
//! useful when tuning sensitivity per platform.

use pointclick_math::Vec2;
use serde::Serialize;
use std::fmt;

/// Pan sensitivity snapshot
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PanDiagnostics {
    /// Sensitivity as configured
    pub raw_sensitivity: f32,
    /// Platform multiplier
    pub platform_modifier: f32,
    /// Last raw pointer delta received while holding
    pub last_input: Vec2,
    /// Adjustment applied to (horizontal, vertical) axes for that input
    pub last_applied: Vec2,
}

impl PanDiagnostics {
    /// Sensitivity actually applied to input
    pub fn effective_sensitivity(&self) -> f32 {
        self.raw_sensitivity * self.platform_modifier
    }

    /// Render as JSON
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}

impl fmt::Display for PanDiagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Sensitivity:")?;
        writeln!(f, "  platform\t{}", self.effective_sensitivity())?;
        writeln!(f, "  raw\t{}", self.raw_sensitivity)?;
        writeln!(f, "  modifier\t{}", self.platform_modifier)?;
        writeln!(f, "X Input:\t{}", self.last_input.x)?;
        writeln!(f, "Y Input:\t{}", self.last_input.y)?;
        writeln!(f, "X Applied:\t{}", self.last_applied.x)?;
        write!(f, "Y Applied:\t{}", self.last_applied.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> PanDiagnostics {
        PanDiagnostics {
            raw_sensitivity: 2.0,
            platform_modifier: 0.25,
            last_input: Vec2::new(4.0, -2.0),
            last_applied: Vec2::new(-2.0, -1.0),
        }
    }

    #[test]
    fn test_effective_sensitivity() {
        assert_eq!(sample().effective_sensitivity(), 0.5);
    }

    #[test]
    fn test_display_lists_every_value() {
        let text = sample().to_string();
        assert!(text.starts_with("Sensitivity:"));
        assert!(text.contains("platform\t0.5"));
        assert!(text.contains("X Input:\t4"));
        assert!(text.contains("Y Applied:\t-1"));
    }

    #[test]
    fn test_json_snapshot() {
        let json = sample().to_json();
        assert!(json.contains("\"raw_sensitivity\":2.0"));
        assert!(json.contains("\"last_input\":{\"x\":4.0,\"y\":-2.0}"));
    }
}
