// Shared types used across modules

use serde::{Deserialize, Serialize};

/// Which unit the left input field holds; the right field holds the
/// other unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConversionDirection {
    #[default]
    PxToRem,
    RemToPx,
}

impl ConversionDirection {
    pub fn toggled(self) -> Self {
        match self {
            ConversionDirection::PxToRem => ConversionDirection::RemToPx,
            ConversionDirection::RemToPx => ConversionDirection::PxToRem,
        }
    }
}

impl std::fmt::Display for ConversionDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConversionDirection::PxToRem => write!(f, "PX to REM"),
            ConversionDirection::RemToPx => write!(f, "REM to PX"),
        }
    }
}

/// Persisted theme choice, stored as "light" / "dark"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeChoice {
    #[default]
    Light,
    Dark,
}

impl ThemeChoice {
    pub fn toggled(self) -> Self {
        match self {
            ThemeChoice::Light => ThemeChoice::Dark,
            ThemeChoice::Dark => ThemeChoice::Light,
        }
    }
}

/// Identifies one of the two converter input fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WhichSide {
    Left,
    Right,
}

impl WhichSide {
    pub fn other(self) -> Self {
        match self {
            WhichSide::Left => WhichSide::Right,
            WhichSide::Right => WhichSide::Left,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_choice_serializes_as_lowercase_string() {
        assert_eq!(
            serde_json::to_string(&ThemeChoice::Dark).unwrap(),
            "\"dark\""
        );
        assert_eq!(
            serde_json::from_str::<ThemeChoice>("\"light\"").unwrap(),
            ThemeChoice::Light
        );
    }
}
