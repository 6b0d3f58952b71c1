//! Mini-games shown in the games section of the site.
//!
//! Each game is a plain state machine: the web layer renders it and feeds
//! clicks back in. Timing (flip-back delays, spin duration) is owned by the
//! caller; the games only report what should happen next.

pub mod memory;
pub mod quiz;
pub mod wheel;

/// Points credited to the loyalty balance when a game pays out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct GameReward {
    pub points: u32,
}

impl GameReward {
    pub const fn new(points: u32) -> Self {
        Self { points }
    }
}

// Linear congruential step shared by the games that need shuffling or spins.
// Not cryptographic; seeds come from the caller.
pub(crate) fn lcg_next(state: &mut u64) -> u32 {
    *state = state
        .wrapping_mul(6364136223846793005)
        .wrapping_add(1442695040888963407);
    (*state >> 33) as u32
}

pub(crate) fn lcg_next_f32(state: &mut u64) -> f32 {
    let mantissa = lcg_next(state) >> 7; // 24 bits
    (mantissa as f32) / ((1u32 << 24) as f32)
}
