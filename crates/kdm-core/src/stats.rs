//! Survivor and monster stat records
//!
//! Both records are plain `Copy` values. Every write goes through
//! [`StatBounds`], so stored integers never leave the configured range.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, VariantNames};

use crate::consts::{EXTENDED_STAT_LIMIT, LEGACY_STAT_LIMIT};
use crate::error::CoreError;

/// Inclusive range every integer stat is clamped to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatBounds {
    min: i32,
    max: i32,
}

impl StatBounds {
    /// Create bounds, rejecting an empty range
    pub const fn new(min: i32, max: i32) -> Result<Self, CoreError> {
        if min > max {
            return Err(CoreError::InvalidBounds { min, max });
        }
        Ok(Self { min, max })
    }

    /// [-99, 99]
    pub const fn extended() -> Self {
        Self {
            min: -EXTENDED_STAT_LIMIT,
            max: EXTENDED_STAT_LIMIT,
        }
    }

    /// [-10, 10]
    pub const fn legacy() -> Self {
        Self {
            min: -LEGACY_STAT_LIMIT,
            max: LEGACY_STAT_LIMIT,
        }
    }

    pub const fn min(&self) -> i32 {
        self.min
    }

    pub const fn max(&self) -> i32 {
        self.max
    }

    pub fn clamp(&self, value: i32) -> i32 {
        value.clamp(self.min, self.max)
    }

    pub fn contains(&self, value: i32) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

impl Default for StatBounds {
    fn default() -> Self {
        Self::extended()
    }
}

/// Named clamp presets, selectable from configuration
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    VariantNames,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum BoundsPreset {
    #[default]
    Extended,
    Legacy,
}

impl From<BoundsPreset> for StatBounds {
    fn from(preset: BoundsPreset) -> Self {
        match preset {
            BoundsPreset::Extended => StatBounds::extended(),
            BoundsPreset::Legacy => StatBounds::legacy(),
        }
    }
}

/// The two shapes a field value can take
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum ValueKind {
    #[strum(serialize = "numeric")]
    Number,
    #[strum(serialize = "flag")]
    Flag,
}

/// A value written to (or read from) a stat field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StatValue {
    Number(i32),
    Flag(bool),
}

impl StatValue {
    pub const fn kind(&self) -> ValueKind {
        match self {
            StatValue::Number(_) => ValueKind::Number,
            StatValue::Flag(_) => ValueKind::Flag,
        }
    }

    pub const fn as_number(&self) -> Option<i32> {
        match self {
            StatValue::Number(n) => Some(*n),
            StatValue::Flag(_) => None,
        }
    }

    pub const fn as_flag(&self) -> Option<bool> {
        match self {
            StatValue::Flag(b) => Some(*b),
            StatValue::Number(_) => None,
        }
    }
}

impl std::fmt::Display for StatValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StatValue::Number(n) => write!(f, "{n}"),
            StatValue::Flag(true) => f.write_str("yes"),
            StatValue::Flag(false) => f.write_str("no"),
        }
    }
}

/// Fields of a survivor record
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    VariantNames,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum SurvivorField {
    Accuracy,
    Strength,
    Luck,
    WeaponAccuracy,
    WeaponStrength,
    BlindSpot,
}

impl SurvivorField {
    /// Parse a kebab-case field name
    pub fn parse(name: &str) -> Result<Self, CoreError> {
        name.parse()
            .map_err(|_| CoreError::UnknownField(name.to_string()))
    }

    /// Label shown next to the input
    pub const fn label(&self) -> &'static str {
        match self {
            SurvivorField::Accuracy => "Survivor Accuracy",
            SurvivorField::Strength => "Survivor Strength",
            SurvivorField::Luck => "Luck",
            SurvivorField::WeaponAccuracy => "Weapon Accuracy",
            SurvivorField::WeaponStrength => "Weapon Strength",
            SurvivorField::BlindSpot => "Attacking from Blind Spot (+1 accuracy)",
        }
    }

    pub const fn kind(&self) -> ValueKind {
        match self {
            SurvivorField::BlindSpot => ValueKind::Flag,
            _ => ValueKind::Number,
        }
    }
}

/// Fields of the shared monster record
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    VariantNames,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum MonsterField {
    Toughness,
    Evasion,
    Luck,
    KnockedDown,
}

impl MonsterField {
    /// Parse a kebab-case field name
    pub fn parse(name: &str) -> Result<Self, CoreError> {
        name.parse()
            .map_err(|_| CoreError::UnknownField(name.to_string()))
    }

    /// Label shown next to the input
    pub const fn label(&self) -> &'static str {
        match self {
            MonsterField::Toughness => "Monster Toughness",
            MonsterField::Evasion => "Monster Evasion",
            MonsterField::Luck => "Monster Luck",
            MonsterField::KnockedDown => "Monster is Knocked Down (hits on 3+)",
        }
    }

    pub const fn kind(&self) -> ValueKind {
        match self {
            MonsterField::KnockedDown => ValueKind::Flag,
            _ => ValueKind::Number,
        }
    }
}

/// One survivor's inputs
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurvivorStats {
    pub accuracy: i32,
    pub strength: i32,
    pub luck: i32,
    pub weapon_accuracy: i32,
    pub weapon_strength: i32,
    pub blind_spot: bool,
}

impl SurvivorStats {
    /// Read a field
    pub const fn get(&self, field: SurvivorField) -> StatValue {
        match field {
            SurvivorField::Accuracy => StatValue::Number(self.accuracy),
            SurvivorField::Strength => StatValue::Number(self.strength),
            SurvivorField::Luck => StatValue::Number(self.luck),
            SurvivorField::WeaponAccuracy => StatValue::Number(self.weapon_accuracy),
            SurvivorField::WeaponStrength => StatValue::Number(self.weapon_strength),
            SurvivorField::BlindSpot => StatValue::Flag(self.blind_spot),
        }
    }

    /// Return a copy with one field replaced, clamping integers to `bounds`
    pub fn with(
        self,
        field: SurvivorField,
        value: StatValue,
        bounds: StatBounds,
    ) -> Result<Self, CoreError> {
        let mut next = self;
        match (value, next.number_mut(field)) {
            (StatValue::Number(n), Some(slot)) => *slot = bounds.clamp(n),
            (StatValue::Flag(flag), None) => next.blind_spot = flag,
            _ => {
                return Err(CoreError::ValueKind {
                    field: field.to_string(),
                    expected: field.kind(),
                });
            }
        }
        Ok(next)
    }

    /// Return a copy with one field stepped by `delta`
    ///
    /// Integers saturate at the bounds; the flag toggles on any non-zero step.
    pub fn adjusted(self, field: SurvivorField, delta: i32, bounds: StatBounds) -> Self {
        let mut next = self;
        match next.number_mut(field) {
            Some(slot) => *slot = bounds.clamp(slot.saturating_add(delta)),
            None if delta != 0 => next.blind_spot = !next.blind_spot,
            None => {}
        }
        next
    }

    /// Pull every integer back inside `bounds`
    pub fn clamped(self, bounds: StatBounds) -> Self {
        Self {
            accuracy: bounds.clamp(self.accuracy),
            strength: bounds.clamp(self.strength),
            luck: bounds.clamp(self.luck),
            weapon_accuracy: bounds.clamp(self.weapon_accuracy),
            weapon_strength: bounds.clamp(self.weapon_strength),
            blind_spot: self.blind_spot,
        }
    }

    fn number_mut(&mut self, field: SurvivorField) -> Option<&mut i32> {
        match field {
            SurvivorField::Accuracy => Some(&mut self.accuracy),
            SurvivorField::Strength => Some(&mut self.strength),
            SurvivorField::Luck => Some(&mut self.luck),
            SurvivorField::WeaponAccuracy => Some(&mut self.weapon_accuracy),
            SurvivorField::WeaponStrength => Some(&mut self.weapon_strength),
            SurvivorField::BlindSpot => None,
        }
    }
}

/// The shared monster's inputs
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonsterStats {
    pub toughness: i32,
    pub evasion: i32,
    pub luck: i32,
    pub knocked_down: bool,
}

impl MonsterStats {
    /// Read a field
    pub const fn get(&self, field: MonsterField) -> StatValue {
        match field {
            MonsterField::Toughness => StatValue::Number(self.toughness),
            MonsterField::Evasion => StatValue::Number(self.evasion),
            MonsterField::Luck => StatValue::Number(self.luck),
            MonsterField::KnockedDown => StatValue::Flag(self.knocked_down),
        }
    }

    /// Return a copy with one field replaced, clamping integers to `bounds`
    pub fn with(
        self,
        field: MonsterField,
        value: StatValue,
        bounds: StatBounds,
    ) -> Result<Self, CoreError> {
        let mut next = self;
        match (field, value) {
            (MonsterField::KnockedDown, StatValue::Flag(flag)) => next.knocked_down = flag,
            (MonsterField::KnockedDown, StatValue::Number(_)) | (_, StatValue::Flag(_)) => {
                return Err(CoreError::ValueKind {
                    field: field.to_string(),
                    expected: field.kind(),
                });
            }
            (MonsterField::Toughness, StatValue::Number(n)) => next.toughness = bounds.clamp(n),
            (MonsterField::Evasion, StatValue::Number(n)) => next.evasion = bounds.clamp(n),
            (MonsterField::Luck, StatValue::Number(n)) => next.luck = bounds.clamp(n),
        }
        Ok(next)
    }

    /// Return a copy with one field stepped by `delta`
    pub fn adjusted(self, field: MonsterField, delta: i32, bounds: StatBounds) -> Self {
        let mut next = self;
        let step = |v: i32| bounds.clamp(v.saturating_add(delta));
        match field {
            MonsterField::Toughness => next.toughness = step(next.toughness),
            MonsterField::Evasion => next.evasion = step(next.evasion),
            MonsterField::Luck => next.luck = step(next.luck),
            MonsterField::KnockedDown => {
                if delta != 0 {
                    next.knocked_down = !next.knocked_down;
                }
            }
        }
        next
    }

    /// Pull every integer back inside `bounds`
    pub fn clamped(self, bounds: StatBounds) -> Self {
        Self {
            toughness: bounds.clamp(self.toughness),
            evasion: bounds.clamp(self.evasion),
            luck: bounds.clamp(self.luck),
            knocked_down: self.knocked_down,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_bounds_presets() {
        assert_eq!(StatBounds::extended().min(), -99);
        assert_eq!(StatBounds::extended().max(), 99);
        assert_eq!(StatBounds::legacy().min(), -10);
        assert_eq!(StatBounds::legacy().max(), 10);
        assert_eq!(StatBounds::default(), StatBounds::extended());
        assert_eq!(StatBounds::from(BoundsPreset::Legacy), StatBounds::legacy());
    }

    #[test]
    fn test_bounds_reject_empty_range() {
        assert_eq!(
            StatBounds::new(5, -5),
            Err(CoreError::InvalidBounds { min: 5, max: -5 })
        );
        assert!(StatBounds::new(3, 3).is_ok());
    }

    #[test]
    fn test_field_names_round_trip_through_strum() {
        assert_eq!(SurvivorField::WeaponAccuracy.to_string(), "weapon-accuracy");
        assert_eq!(SurvivorField::parse("blind-spot"), Ok(SurvivorField::BlindSpot));
        assert_eq!(MonsterField::parse("knocked-down"), Ok(MonsterField::KnockedDown));
        assert_eq!(
            MonsterField::parse("armor"),
            Err(CoreError::UnknownField("armor".to_string()))
        );
    }

    #[test]
    fn test_set_clamps_to_bounds() {
        let stats = SurvivorStats::default()
            .with(SurvivorField::Accuracy, StatValue::Number(250), StatBounds::extended())
            .unwrap();
        assert_eq!(stats.accuracy, 99);

        let stats = stats
            .with(SurvivorField::Accuracy, StatValue::Number(-250), StatBounds::legacy())
            .unwrap();
        assert_eq!(stats.accuracy, -10);
    }

    #[test]
    fn test_set_rejects_wrong_value_kind() {
        let err = SurvivorStats::default()
            .with(SurvivorField::Luck, StatValue::Flag(true), StatBounds::default())
            .unwrap_err();
        assert_eq!(
            err,
            CoreError::ValueKind {
                field: "luck".to_string(),
                expected: ValueKind::Number
            }
        );

        let err = MonsterStats::default()
            .with(MonsterField::KnockedDown, StatValue::Number(1), StatBounds::default())
            .unwrap_err();
        assert!(err.to_string().contains("flag"));
    }

    #[test]
    fn test_adjust_saturates_at_bounds() {
        let bounds = StatBounds::legacy();
        let mut stats = SurvivorStats::default();
        for _ in 0..15 {
            stats = stats.adjusted(SurvivorField::Strength, 1, bounds);
        }
        assert_eq!(stats.strength, 10);
        for _ in 0..30 {
            stats = stats.adjusted(SurvivorField::Strength, -1, bounds);
        }
        assert_eq!(stats.strength, -10);
    }

    #[test]
    fn test_adjust_toggles_flags() {
        let bounds = StatBounds::default();
        let stats = SurvivorStats::default().adjusted(SurvivorField::BlindSpot, 1, bounds);
        assert!(stats.blind_spot);
        let stats = stats.adjusted(SurvivorField::BlindSpot, -1, bounds);
        assert!(!stats.blind_spot);
        assert!(!stats.adjusted(SurvivorField::BlindSpot, 0, bounds).blind_spot);

        let monster = MonsterStats::default().adjusted(MonsterField::KnockedDown, 1, bounds);
        assert!(monster.knocked_down);
    }

    #[test]
    fn test_adjust_touches_only_one_field() {
        let bounds = StatBounds::default();
        for field in SurvivorField::iter() {
            let before = SurvivorStats::default();
            let after = before.adjusted(field, 1, bounds);
            for other in SurvivorField::iter().filter(|f| *f != field) {
                assert_eq!(before.get(other), after.get(other), "{field} changed {other}");
            }
            assert_ne!(before.get(field), after.get(field));
        }
    }

    #[test]
    fn test_get_reports_declared_kind() {
        let stats = SurvivorStats::default();
        for field in SurvivorField::iter() {
            assert_eq!(stats.get(field).kind(), field.kind());
        }
        let monster = MonsterStats::default();
        for field in MonsterField::iter() {
            assert_eq!(monster.get(field).kind(), field.kind());
        }
    }

    #[test]
    fn test_clamped_pulls_values_in() {
        let monster = MonsterStats {
            toughness: 40,
            evasion: -40,
            luck: 3,
            knocked_down: true,
        }
        .clamped(StatBounds::legacy());
        assert_eq!(monster.toughness, 10);
        assert_eq!(monster.evasion, -10);
        assert_eq!(monster.luck, 3);
        assert!(monster.knocked_down);
    }
}
