//! kdm-core: Roll requirement logic for Kingdom Death: Monster
//!
//! This crate contains the hit and wound formulas and the survivor roster
//! state they read from. It has no I/O dependencies; every operation is a
//! pure function over small `Copy` values.

pub mod report;
pub mod roll;
pub mod roster;
pub mod stats;

mod consts;
mod error;

pub use consts::*;
pub use error::CoreError;
pub use report::RollReport;
pub use roll::{
    CriticalThreshold, HitInput, WoundInput, WoundRoll, compute_hit_roll, compute_wound_roll,
};
pub use roster::{ActiveSelection, CalculatorState, Field, Page, Roster, SlotIndex};
pub use stats::{
    BoundsPreset, MonsterField, MonsterStats, StatBounds, StatValue, SurvivorField, SurvivorStats,
    ValueKind,
};
