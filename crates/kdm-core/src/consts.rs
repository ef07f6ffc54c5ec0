//! Game constants
//!
//! Die faces and stat limits used by the roll formulas.

/// Highest face of the ten-sided die ("Lantern 10")
pub const LANTERN_TEN: i32 = 10;

/// A natural 1 always fails
pub const NATURAL_FAIL: i32 = 1;

/// Lowest threshold a hit or wound can require
pub const MIN_REQUIRED_ROLL: i32 = 2;

/// Highest hit threshold
pub const MAX_HIT_ROLL: i32 = 10;

/// Highest wound threshold (a natural 10 always wounds)
pub const MAX_WOUND_ROLL: i32 = 9;

/// Fixed hit threshold against a knocked down monster
pub const KNOCKED_DOWN_HIT_ROLL: i32 = 3;

/// Accuracy bonus for attacking from the blind spot
pub const BLIND_SPOT_BONUS: i32 = 1;

/// Number of survivor slots on the roster
pub const MAX_SURVIVORS: usize = 4;

/// Stat limits of the current calculator
pub const EXTENDED_STAT_LIMIT: i32 = 99;

/// Stat limits of the first calculator revision
pub const LEGACY_STAT_LIMIT: i32 = 10;

/// Display notes shown under the result panels
pub const HIT_NOTE: &str = "Lantern 10 always hits \u{2022} 1 always misses";
pub const WOUND_NOTE: &str = "Lantern 10 always wounds \u{2022} 1 always fails";
pub const CRITICAL_NOTE: &str = "Critical wounds cancel all reactions";
