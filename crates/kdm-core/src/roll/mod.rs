//! Roll requirement formulas
//!
//! Both calculators are pure and total: every input combination produces a
//! threshold on the ten-sided die.

mod hit;
mod wound;

pub use hit::{HitInput, compute_hit_roll};
pub use wound::{CriticalThreshold, WoundInput, WoundRoll, compute_wound_roll, critical_threshold};

/// Clamp a widened sum back onto the die
///
/// Formulas add and subtract several `i32` stats, so they are summed as `i64`
/// and only narrowed after clamping.
pub(crate) fn clamp_to_die(raw: i64, min: i32, max: i32) -> i32 {
    // The clamped value is within [min, max], so the narrowing cannot fail.
    raw.clamp(i64::from(min), i64::from(max)) as i32
}
