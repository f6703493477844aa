//! Scoring module - level and speed progression rules
//!
//! Compatibility note:
//! The level-up test uses the *cumulative* score and an exact modulus, so a
//! multi-point pickup that jumps over a multiple of 5 (4 -> 7) does not level up.
//! Only landing exactly on a positive multiple triggers progression.

use crate::level::level_config;
use crate::types::{LEVEL_UP_EVERY, MAX_LEVEL, SPEED_STEP};

/// What happens after a food-eat event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Progression {
    /// Threshold not hit
    None,
    /// Advance to the given level
    LevelUp(u32),
    /// Already at `MAX_LEVEL`: keep the level, raise the tick rate to the given value
    SpeedUp(u32),
}

/// Check the cumulative-score threshold
pub fn hits_threshold(score: u32) -> bool {
    score > 0 && score % LEVEL_UP_EVERY == 0
}

/// Decide progression right after eating
pub fn progression_after_eat(score: u32, level: u32, tick_rate: u32) -> Progression {
    if !hits_threshold(score) {
        return Progression::None;
    }
    if level < MAX_LEVEL {
        Progression::LevelUp(level + 1)
    } else {
        Progression::SpeedUp(tick_rate.saturating_add(SPEED_STEP))
    }
}

/// Movement interval for a tick rate, in milliseconds
pub fn tick_interval_ms(tick_rate: u32) -> u32 {
    1000 / tick_rate.max(1)
}

/// Tick rate a level starts at
pub fn base_tick_rate(level: u32) -> u32 {
    level_config(level).ticks_per_second
}
