//! Shareable roll summary

use serde::Serialize;

use crate::consts::LANTERN_TEN;
use crate::roll::{CriticalThreshold, HitInput, WoundInput};
use crate::roster::{CalculatorState, Page};

/// Results for one survivor at one moment
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RollReport {
    pub survivor: String,
    pub page: Page,
    pub hit_roll: i32,
    pub wound_roll: i32,
    pub critical: CriticalThreshold,
    pub hit_input: HitInput,
    pub wound_input: WoundInput,
}

impl RollReport {
    /// Build the report for the active survivor under `label`
    pub fn from_state(state: &CalculatorState, label: impl Into<String>) -> Self {
        let wound = state.wound_roll();
        Self {
            survivor: label.into(),
            page: state.page(),
            hit_roll: state.hit_roll(),
            wound_roll: wound.required_roll,
            critical: wound.critical,
            hit_input: state.hit_input(),
            wound_input: state.wound_input(),
        }
    }

    /// One line of plain text suitable for pasting into a chat
    pub fn summary(&self) -> String {
        let critical = match self.critical {
            CriticalThreshold::Unattainable => "no critical wounds".to_string(),
            CriticalThreshold::NaturalTenOnly => {
                format!("critical wound on {LANTERN_TEN} only")
            }
            CriticalThreshold::Value(_) => format!("critical wound on {}", self.critical),
        };
        format!(
            "{}: hits on {}+, wounds on {}+, {}",
            self.survivor, self.hit_roll, self.wound_roll, critical
        )
    }
}
