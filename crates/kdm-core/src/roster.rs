//! Survivor roster and active selection
//!
//! The roster holds four survivor records and the one monster they all fight.
//! [`CalculatorState`] adds which survivor and which calculator page are on
//! screen. Every transition takes `self` by value and returns the next state;
//! nothing is mutated in place, so a caller holding an older state never sees
//! it change.

use std::fmt;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, VariantNames};

use crate::consts::MAX_SURVIVORS;
use crate::error::CoreError;
use crate::report::RollReport;
use crate::roll::{HitInput, WoundInput, WoundRoll, compute_hit_roll, compute_wound_roll};
use crate::stats::{
    MonsterField, MonsterStats, StatBounds, StatValue, SurvivorField, SurvivorStats, ValueKind,
};

/// A roster slot, always in 0..4
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct SlotIndex(u8);

impl SlotIndex {
    /// All slots in order
    pub const ALL: [SlotIndex; MAX_SURVIVORS] =
        [SlotIndex(0), SlotIndex(1), SlotIndex(2), SlotIndex(3)];

    pub const FIRST: SlotIndex = SlotIndex(0);
    pub const LAST: SlotIndex = SlotIndex(MAX_SURVIVORS as u8 - 1);

    /// Validate a zero-based index
    pub const fn new(index: usize) -> Result<Self, CoreError> {
        if index < MAX_SURVIVORS {
            Ok(SlotIndex(index as u8))
        } else {
            Err(CoreError::SlotOutOfRange { index })
        }
    }

    pub const fn get(&self) -> usize {
        self.0 as usize
    }

    /// Next slot, stopping at the last one
    pub const fn next(&self) -> Self {
        if self.0 < Self::LAST.0 {
            SlotIndex(self.0 + 1)
        } else {
            *self
        }
    }

    /// Previous slot, stopping at the first one
    pub const fn previous(&self) -> Self {
        if self.0 > 0 { SlotIndex(self.0 - 1) } else { *self }
    }

    /// Default tab label ("Survivor 1" for slot 0)
    pub fn label(&self) -> String {
        format!("Survivor {}", self.0 + 1)
    }
}

impl fmt::Display for SlotIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Calculator pages
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
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
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Page {
    #[default]
    Hit,
    Wound,
}

impl Page {
    /// Navigation bar title
    pub const fn title(&self) -> &'static str {
        match self {
            Page::Hit => "To Hit",
            Page::Wound => "To Wound",
        }
    }

    /// Calculator card heading
    pub const fn heading(&self) -> &'static str {
        match self {
            Page::Hit => "Hit Calculator",
            Page::Wound => "Wound Calculator",
        }
    }

    /// The inputs shown on this page, top to bottom
    pub const fn fields(&self) -> &'static [Field] {
        match self {
            Page::Hit => &[
                Field::Survivor(SurvivorField::Accuracy),
                Field::Survivor(SurvivorField::WeaponAccuracy),
                Field::Monster(MonsterField::Evasion),
                Field::Survivor(SurvivorField::BlindSpot),
                Field::Monster(MonsterField::KnockedDown),
            ],
            Page::Wound => &[
                Field::Survivor(SurvivorField::WeaponStrength),
                Field::Survivor(SurvivorField::Strength),
                Field::Monster(MonsterField::Toughness),
                Field::Survivor(SurvivorField::Luck),
                Field::Monster(MonsterField::Luck),
            ],
        }
    }

    pub const fn toggled(&self) -> Self {
        match self {
            Page::Hit => Page::Wound,
            Page::Wound => Page::Hit,
        }
    }
}

/// Any input field, survivor or monster
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "owner", content = "field", rename_all = "lowercase")]
pub enum Field {
    Survivor(SurvivorField),
    Monster(MonsterField),
}

impl Field {
    pub const fn label(&self) -> &'static str {
        match self {
            Field::Survivor(f) => f.label(),
            Field::Monster(f) => f.label(),
        }
    }

    pub const fn kind(&self) -> ValueKind {
        match self {
            Field::Survivor(f) => f.kind(),
            Field::Monster(f) => f.kind(),
        }
    }

    pub const fn is_flag(&self) -> bool {
        matches!(self.kind(), ValueKind::Flag)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Survivor(field) => write!(f, "survivor.{field}"),
            Field::Monster(field) => write!(f, "monster.{field}"),
        }
    }
}

/// Four survivors and the shared monster
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Roster {
    survivors: [SurvivorStats; MAX_SURVIVORS],
    monster: MonsterStats,
    bounds: StatBounds,
}

impl Roster {
    /// Empty roster clamping to `bounds`
    pub fn new(bounds: StatBounds) -> Self {
        Self {
            survivors: [SurvivorStats::default(); MAX_SURVIVORS],
            monster: MonsterStats::default(),
            bounds,
        }
    }

    pub const fn bounds(&self) -> StatBounds {
        self.bounds
    }

    pub const fn survivor(&self, slot: SlotIndex) -> &SurvivorStats {
        &self.survivors[slot.get()]
    }

    pub const fn survivors(&self) -> &[SurvivorStats; MAX_SURVIVORS] {
        &self.survivors
    }

    pub const fn monster(&self) -> &MonsterStats {
        &self.monster
    }

    /// Read any field as seen from `slot`
    pub const fn get(&self, slot: SlotIndex, field: Field) -> StatValue {
        match field {
            Field::Survivor(f) => self.survivor(slot).get(f),
            Field::Monster(f) => self.monster.get(f),
        }
    }

    /// Replace one field of one survivor
    pub fn update_survivor_field(
        self,
        index: usize,
        field: SurvivorField,
        value: StatValue,
    ) -> Result<Self, CoreError> {
        self.update_slot(SlotIndex::new(index)?, field, value)
    }

    /// Replace one field of the shared monster
    pub fn update_monster_field(
        self,
        field: MonsterField,
        value: StatValue,
    ) -> Result<Self, CoreError> {
        let mut next = self;
        next.monster = self.monster.with(field, value, self.bounds)?;
        tracing::debug!(%field, %value, "monster field updated");
        Ok(next)
    }

    /// Step one survivor field (the +/- buttons)
    pub fn adjust_survivor_field(
        self,
        index: usize,
        field: SurvivorField,
        delta: i32,
    ) -> Result<Self, CoreError> {
        Ok(self.adjust_slot(SlotIndex::new(index)?, field, delta))
    }

    /// Step one monster field
    pub fn adjust_monster_field(self, field: MonsterField, delta: i32) -> Self {
        let mut next = self;
        next.monster = self.monster.adjusted(field, delta, self.bounds);
        tracing::debug!(%field, delta, "monster field adjusted");
        next
    }

    /// Replace any field as seen from `slot`
    pub fn update_field(
        self,
        slot: SlotIndex,
        field: Field,
        value: StatValue,
    ) -> Result<Self, CoreError> {
        match field {
            Field::Survivor(f) => self.update_slot(slot, f, value),
            Field::Monster(f) => self.update_monster_field(f, value),
        }
    }

    /// Step any field as seen from `slot`
    pub fn adjust_field(self, slot: SlotIndex, field: Field, delta: i32) -> Self {
        match field {
            Field::Survivor(f) => self.adjust_slot(slot, f, delta),
            Field::Monster(f) => self.adjust_monster_field(f, delta),
        }
    }

    /// Put one survivor back to defaults
    pub fn reset_survivor(self, index: usize) -> Result<Self, CoreError> {
        Ok(self.reset_slot(SlotIndex::new(index)?))
    }

    /// Put the survivor in `slot` back to defaults
    pub fn reset_slot(self, slot: SlotIndex) -> Self {
        let mut next = self;
        next.survivors[slot.get()] = SurvivorStats::default();
        tracing::debug!(slot = slot.get(), "survivor reset");
        next
    }

    fn update_slot(
        self,
        slot: SlotIndex,
        field: SurvivorField,
        value: StatValue,
    ) -> Result<Self, CoreError> {
        let mut next = self;
        next.survivors[slot.get()] = self.survivor(slot).with(field, value, self.bounds)?;
        tracing::debug!(slot = slot.get(), %field, %value, "survivor field updated");
        Ok(next)
    }

    fn adjust_slot(self, slot: SlotIndex, field: SurvivorField, delta: i32) -> Self {
        let mut next = self;
        next.survivors[slot.get()] = self.survivor(slot).adjusted(field, delta, self.bounds);
        tracing::debug!(slot = slot.get(), %field, delta, "survivor field adjusted");
        next
    }

    /// Switch bounds, pulling every stored value inside the new range
    pub fn with_bounds(self, bounds: StatBounds) -> Self {
        Self {
            survivors: self.survivors.map(|s| s.clamped(bounds)),
            monster: self.monster.clamped(bounds),
            bounds,
        }
    }

    /// Hit formula input for `slot`
    pub const fn hit_input(&self, slot: SlotIndex) -> HitInput {
        let survivor = self.survivor(slot);
        HitInput {
            survivor_accuracy: survivor.accuracy,
            weapon_accuracy: survivor.weapon_accuracy,
            monster_evasion: self.monster.evasion,
            in_blind_spot: survivor.blind_spot,
            monster_knocked_down: self.monster.knocked_down,
        }
    }

    /// Wound formula input for `slot`
    pub const fn wound_input(&self, slot: SlotIndex) -> WoundInput {
        let survivor = self.survivor(slot);
        WoundInput {
            weapon_strength: survivor.weapon_strength,
            survivor_strength: survivor.strength,
            monster_toughness: self.monster.toughness,
            luck: survivor.luck,
            monster_luck: self.monster.luck,
        }
    }
}

/// Which survivor and page are on screen
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ActiveSelection {
    pub survivor: SlotIndex,
    pub page: Page,
}

/// The whole calculator: roster plus selection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CalculatorState {
    pub roster: Roster,
    pub selection: ActiveSelection,
}

impl CalculatorState {
    pub fn new(bounds: StatBounds) -> Self {
        Self {
            roster: Roster::new(bounds),
            selection: ActiveSelection::default(),
        }
    }

    pub const fn active_slot(&self) -> SlotIndex {
        self.selection.survivor
    }

    pub const fn page(&self) -> Page {
        self.selection.page
    }

    pub const fn active_survivor(&self) -> &SurvivorStats {
        self.roster.survivor(self.selection.survivor)
    }

    /// Show another survivor
    pub fn select_survivor(self, index: usize) -> Result<Self, CoreError> {
        let survivor = SlotIndex::new(index)?;
        tracing::debug!(slot = index, "survivor selected");
        Ok(Self {
            selection: ActiveSelection {
                survivor,
                ..self.selection
            },
            ..self
        })
    }

    /// Show another calculator page
    pub fn select_page(self, page: Page) -> Self {
        tracing::debug!(%page, "page selected");
        Self {
            selection: ActiveSelection {
                page,
                ..self.selection
            },
            ..self
        }
    }

    pub fn toggle_page(self) -> Self {
        let page = self.selection.page.toggled();
        self.select_page(page)
    }

    /// Swipe to the next survivor; stays put on the last one
    pub fn next_survivor(self) -> Self {
        Self {
            selection: ActiveSelection {
                survivor: self.selection.survivor.next(),
                ..self.selection
            },
            ..self
        }
    }

    /// Swipe to the previous survivor; stays put on the first one
    pub fn previous_survivor(self) -> Self {
        Self {
            selection: ActiveSelection {
                survivor: self.selection.survivor.previous(),
                ..self.selection
            },
            ..self
        }
    }

    pub fn update_survivor_field(
        self,
        index: usize,
        field: SurvivorField,
        value: StatValue,
    ) -> Result<Self, CoreError> {
        Ok(Self {
            roster: self.roster.update_survivor_field(index, field, value)?,
            ..self
        })
    }

    pub fn update_monster_field(
        self,
        field: MonsterField,
        value: StatValue,
    ) -> Result<Self, CoreError> {
        Ok(Self {
            roster: self.roster.update_monster_field(field, value)?,
            ..self
        })
    }

    /// Replace a field of the active survivor (or the monster)
    pub fn update_active_field(self, field: Field, value: StatValue) -> Result<Self, CoreError> {
        Ok(Self {
            roster: self.roster.update_field(self.active_slot(), field, value)?,
            ..self
        })
    }

    /// Step a field of the active survivor (or the monster)
    pub fn adjust_active_field(self, field: Field, delta: i32) -> Self {
        Self {
            roster: self.roster.adjust_field(self.active_slot(), field, delta),
            ..self
        }
    }

    /// Reset the survivor on screen
    pub fn reset_active_survivor(self) -> Self {
        Self {
            roster: self.roster.reset_slot(self.active_slot()),
            ..self
        }
    }

    pub const fn hit_input(&self) -> HitInput {
        self.roster.hit_input(self.selection.survivor)
    }

    pub const fn wound_input(&self) -> WoundInput {
        self.roster.wound_input(self.selection.survivor)
    }

    pub fn hit_roll(&self) -> i32 {
        compute_hit_roll(self.hit_input())
    }

    pub fn wound_roll(&self) -> WoundRoll {
        compute_wound_roll(self.wound_input())
    }

    /// Snapshot of the active survivor's results
    pub fn report(&self) -> RollReport {
        RollReport::from_state(self, self.active_slot().label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roll::CriticalThreshold;
    use strum::IntoEnumIterator;

    #[test]
    fn test_slot_index_bounds() {
        assert!(SlotIndex::new(3).is_ok());
        assert_eq!(SlotIndex::new(4), Err(CoreError::SlotOutOfRange { index: 4 }));
        assert_eq!(SlotIndex::LAST.next(), SlotIndex::LAST);
        assert_eq!(SlotIndex::FIRST.previous(), SlotIndex::FIRST);
        assert_eq!(SlotIndex::ALL[2].label(), "Survivor 3");
    }

    #[test]
    fn test_page_fields_cover_formula_inputs() {
        assert_eq!(Page::Hit.fields().len(), 5);
        assert_eq!(Page::Wound.fields().len(), 5);
        assert!(Page::Hit.fields().contains(&Field::Monster(MonsterField::KnockedDown)));
        assert!(Page::Wound.fields().contains(&Field::Monster(MonsterField::Luck)));
        for page in Page::iter() {
            assert_eq!(page.toggled().toggled(), page);
        }
    }

    #[test]
    fn test_update_isolates_slots() {
        let roster = Roster::default()
            .update_survivor_field(1, SurvivorField::Luck, StatValue::Number(5))
            .unwrap();
        assert_eq!(roster.survivor(SlotIndex::ALL[1]).luck, 5);
        for index in [0, 2, 3] {
            assert_eq!(*roster.survivor(SlotIndex::ALL[index]), SurvivorStats::default());
        }
    }

    #[test]
    fn test_update_leaves_original_untouched() {
        let before = Roster::default();
        let after = before
            .update_monster_field(MonsterField::Toughness, StatValue::Number(8))
            .unwrap();
        assert_eq!(before.monster().toughness, 0);
        assert_eq!(after.monster().toughness, 8);
    }

    #[test]
    fn test_update_rejects_bad_slot() {
        let err = Roster::default()
            .update_survivor_field(4, SurvivorField::Luck, StatValue::Number(1))
            .unwrap_err();
        assert_eq!(err, CoreError::SlotOutOfRange { index: 4 });
    }

    #[test]
    fn test_with_bounds_reclamps() {
        let roster = Roster::new(StatBounds::extended())
            .update_survivor_field(0, SurvivorField::Strength, StatValue::Number(40))
            .unwrap()
            .with_bounds(StatBounds::legacy());
        assert_eq!(roster.survivor(SlotIndex::FIRST).strength, 10);
        assert_eq!(roster.bounds(), StatBounds::legacy());
    }

    #[test]
    fn test_monster_is_shared_between_survivors() {
        let state = CalculatorState::default()
            .update_monster_field(MonsterField::Evasion, StatValue::Number(3))
            .unwrap();
        assert_eq!(state.hit_input().monster_evasion, 3);
        let state = state.next_survivor();
        assert_eq!(state.active_slot(), SlotIndex::ALL[1]);
        assert_eq!(state.hit_input().monster_evasion, 3);
    }

    #[test]
    fn test_selection_feeds_calculators() {
        let state = CalculatorState::default()
            .update_survivor_field(2, SurvivorField::WeaponAccuracy, StatValue::Number(7))
            .unwrap();
        assert_eq!(state.hit_roll(), 7);
        let state = state.select_survivor(2).unwrap();
        assert_eq!(state.hit_roll(), 7);
        let state = state.select_survivor(0).unwrap();
        assert_eq!(state.hit_roll(), 2);
    }

    #[test]
    fn test_wound_uses_survivor_and_monster_luck() {
        let state = CalculatorState::default()
            .update_survivor_field(0, SurvivorField::Luck, StatValue::Number(3))
            .unwrap()
            .update_monster_field(MonsterField::Luck, StatValue::Number(1))
            .unwrap();
        assert_eq!(state.wound_roll().critical, CriticalThreshold::Value(8));
    }

    #[test]
    fn test_swipe_stops_at_ends() {
        let mut state = CalculatorState::default();
        for _ in 0..10 {
            state = state.next_survivor();
        }
        assert_eq!(state.active_slot(), SlotIndex::LAST);
        for _ in 0..10 {
            state = state.previous_survivor();
        }
        assert_eq!(state.active_slot(), SlotIndex::FIRST);
    }

    #[test]
    fn test_page_switch_keeps_stats() {
        let state = CalculatorState::default()
            .adjust_active_field(Field::Survivor(SurvivorField::Accuracy), 2)
            .toggle_page();
        assert_eq!(state.page(), Page::Wound);
        assert_eq!(state.active_survivor().accuracy, 2);
        assert_eq!(state.select_page(Page::Hit).page(), Page::Hit);
    }

    #[test]
    fn test_reset_active_survivor_only() {
        let state = CalculatorState::default()
            .adjust_active_field(Field::Survivor(SurvivorField::Strength), 3)
            .adjust_active_field(Field::Monster(MonsterField::Toughness), 5)
            .update_survivor_field(1, SurvivorField::Strength, StatValue::Number(2))
            .unwrap()
            .reset_active_survivor();
        assert_eq!(*state.active_survivor(), SurvivorStats::default());
        assert_eq!(state.roster.survivor(SlotIndex::ALL[1]).strength, 2);
        assert_eq!(state.roster.monster().toughness, 5);
    }

    #[test]
    fn test_field_display() {
        assert_eq!(
            Field::Survivor(SurvivorField::WeaponAccuracy).to_string(),
            "survivor.weapon-accuracy"
        );
        assert_eq!(Field::Monster(MonsterField::KnockedDown).to_string(), "monster.knocked-down");
        assert!(Field::Monster(MonsterField::KnockedDown).is_flag());
    }

    #[test]
    fn test_update_field_routes_by_owner() {
        let slot = SlotIndex::ALL[2];
        let blind_spot = Field::Survivor(SurvivorField::BlindSpot);
        let evasion = Field::Monster(MonsterField::Evasion);
        let roster = Roster::default()
            .update_field(slot, blind_spot, StatValue::Flag(true))
            .unwrap()
            .update_field(slot, evasion, StatValue::Number(4))
            .unwrap();

        assert_eq!(roster.get(slot, blind_spot).as_flag(), Some(true));
        assert_eq!(roster.get(SlotIndex::FIRST, blind_spot).as_flag(), Some(false));
        // The monster is shared, so every slot sees the new evasion
        assert_eq!(roster.get(SlotIndex::FIRST, evasion).as_number(), Some(4));
        assert_eq!(roster.get(slot, evasion).as_flag(), None);

        let err = roster
            .update_field(slot, Field::Monster(MonsterField::KnockedDown), StatValue::Number(1))
            .unwrap_err();
        assert!(matches!(err, CoreError::ValueKind { expected: ValueKind::Flag, .. }));
    }

    #[test]
    fn test_adjust_field_matches_adjust_survivor_field() {
        let field = SurvivorField::Strength;
        let by_slot = Roster::default().adjust_field(SlotIndex::ALL[3], Field::Survivor(field), 2);
        let by_index = Roster::default().adjust_survivor_field(3, field, 2).unwrap();
        assert_eq!(by_slot, by_index);
        assert_eq!(by_slot.survivor(SlotIndex::ALL[3]).strength, 2);
    }

    #[test]
    fn test_reset_survivor_only_touches_its_slot() {
        let mut roster = Roster::default()
            .update_monster_field(MonsterField::Toughness, StatValue::Number(7))
            .unwrap();
        for index in 0..MAX_SURVIVORS {
            roster = roster
                .update_survivor_field(index, SurvivorField::Luck, StatValue::Number(3))
                .unwrap();
        }

        let reset = roster.reset_survivor(2).unwrap();
        assert_eq!(*reset.survivor(SlotIndex::ALL[2]), SurvivorStats::default());
        for index in [0, 1, 3] {
            let slot = SlotIndex::ALL[index];
            assert_eq!(reset.survivor(slot), roster.survivor(slot));
        }
        assert_eq!(reset.monster(), roster.monster());
        assert_eq!(roster.reset_survivor(4), Err(CoreError::SlotOutOfRange { index: 4 }));
    }
}
