//! To-hit roll

use serde::{Deserialize, Serialize};

use super::clamp_to_die;
use crate::consts::{BLIND_SPOT_BONUS, KNOCKED_DOWN_HIT_ROLL, MAX_HIT_ROLL, MIN_REQUIRED_ROLL};

/// Everything the hit formula reads
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HitInput {
    pub survivor_accuracy: i32,
    pub weapon_accuracy: i32,
    pub monster_evasion: i32,
    pub in_blind_spot: bool,
    pub monster_knocked_down: bool,
}

/// Minimum die face that hits
///
/// A knocked down monster is hit on 3+ no matter what. Otherwise the
/// requirement is weapon accuracy plus monster evasion, less survivor
/// accuracy and the blind spot bonus, kept within 2..=10.
pub fn compute_hit_roll(input: HitInput) -> i32 {
    if input.monster_knocked_down {
        return KNOCKED_DOWN_HIT_ROLL;
    }

    let blind_spot = if input.in_blind_spot {
        BLIND_SPOT_BONUS
    } else {
        0
    };
    let raw = i64::from(input.weapon_accuracy) + i64::from(input.monster_evasion)
        - i64::from(input.survivor_accuracy)
        - i64::from(blind_spot);

    clamp_to_die(raw, MIN_REQUIRED_ROLL, MAX_HIT_ROLL)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hit(accuracy: i32, weapon: i32, evasion: i32) -> HitInput {
        HitInput {
            survivor_accuracy: accuracy,
            weapon_accuracy: weapon,
            monster_evasion: evasion,
            ..HitInput::default()
        }
    }

    #[test]
    fn test_default_input_hits_on_two() {
        assert_eq!(compute_hit_roll(HitInput::default()), 2);
    }

    #[test]
    fn test_blind_spot_example() {
        let input = HitInput {
            in_blind_spot: true,
            ..hit(2, 3, 1)
        };
        assert_eq!(compute_hit_roll(input), 2);
    }

    #[test]
    fn test_typical_requirement() {
        // Weapon accuracy 6, evasion 1, no survivor accuracy
        assert_eq!(compute_hit_roll(hit(0, 6, 1)), 7);
        // Each point of accuracy lowers it by one
        assert_eq!(compute_hit_roll(hit(2, 6, 1)), 5);
    }

    #[test]
    fn test_blind_spot_lowers_requirement_by_one() {
        let open = hit(0, 6, 0);
        let blind = HitInput {
            in_blind_spot: true,
            ..open
        };
        assert_eq!(compute_hit_roll(blind), compute_hit_roll(open) - 1);
    }

    #[test]
    fn test_requirement_caps_at_lantern_ten() {
        assert_eq!(compute_hit_roll(hit(0, 9, 8)), 10);
        assert_eq!(compute_hit_roll(hit(-99, 99, 99)), 10);
    }

    #[test]
    fn test_requirement_floors_at_two() {
        assert_eq!(compute_hit_roll(hit(10, 0, 0)), 2);
    }

    #[test]
    fn test_knocked_down_always_three() {
        for input in [hit(0, 0, 0), hit(99, 0, 0), hit(-99, 99, 99)] {
            let knocked = HitInput {
                monster_knocked_down: true,
                in_blind_spot: true,
                ..input
            };
            assert_eq!(compute_hit_roll(knocked), 3);
        }
    }
}
