//! To-wound roll and critical wound threshold

use std::fmt;

use serde::{Deserialize, Serialize};

use super::clamp_to_die;
use crate::consts::{LANTERN_TEN, MAX_WOUND_ROLL, MIN_REQUIRED_ROLL};

/// Everything the wound formula reads
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WoundInput {
    pub weapon_strength: i32,
    pub survivor_strength: i32,
    pub monster_toughness: i32,
    /// Survivor luck, only used for the critical threshold
    pub luck: i32,
    /// Monster luck, only used for the critical threshold
    pub monster_luck: i32,
}

/// When a wound roll also counts as a critical wound
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum CriticalThreshold {
    /// The monster's luck exceeds the survivor's; no roll is critical
    Unattainable,
    /// Only a natural 10 is critical
    NaturalTenOnly,
    /// Any roll of at least this value is critical
    Value(i32),
}

impl CriticalThreshold {
    /// Lowest die face that crits, if any
    pub const fn min_face(&self) -> Option<i32> {
        match self {
            CriticalThreshold::Unattainable => None,
            CriticalThreshold::NaturalTenOnly => Some(LANTERN_TEN),
            CriticalThreshold::Value(n) => Some(*n),
        }
    }

    pub const fn is_attainable(&self) -> bool {
        !matches!(self, CriticalThreshold::Unattainable)
    }
}

impl fmt::Display for CriticalThreshold {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CriticalThreshold::Unattainable => f.write_str("not possible"),
            CriticalThreshold::NaturalTenOnly => f.write_str("Lantern 10"),
            CriticalThreshold::Value(n) => write!(f, "{n}-{LANTERN_TEN}"),
        }
    }
}

/// Result of the wound calculator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WoundRoll {
    /// Minimum die face that wounds, in 2..=9
    pub required_roll: i32,
    pub critical: CriticalThreshold,
}

/// Minimum die face that wounds, plus the critical threshold
pub fn compute_wound_roll(input: WoundInput) -> WoundRoll {
    let raw = i64::from(input.monster_toughness)
        - i64::from(input.weapon_strength)
        - i64::from(input.survivor_strength);

    WoundRoll {
        required_roll: clamp_to_die(raw, MIN_REQUIRED_ROLL, MAX_WOUND_ROLL),
        critical: critical_threshold(input.luck, input.monster_luck),
    }
}

/// Critical wound threshold from survivor and monster luck
///
/// Equal luck (net zero) falls through to the natural 10 default rather than
/// producing `Value(10)`.
pub fn critical_threshold(luck: i32, monster_luck: i32) -> CriticalThreshold {
    if monster_luck > luck {
        return CriticalThreshold::Unattainable;
    }

    let net_luck = i64::from(luck) - i64::from(monster_luck);
    if net_luck > 0 {
        let threshold = clamp_to_die(
            i64::from(LANTERN_TEN) - net_luck,
            MIN_REQUIRED_ROLL,
            LANTERN_TEN,
        );
        if threshold == LANTERN_TEN {
            CriticalThreshold::NaturalTenOnly
        } else {
            CriticalThreshold::Value(threshold)
        }
    } else {
        CriticalThreshold::NaturalTenOnly
    }
}
