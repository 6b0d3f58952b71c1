use crate::{lcg_next_f32, GameReward};

// ─────────────────────────────────────────────────────────────────────────
// Spin & Win: six prizes in equal segments, one spin at a time.
// ─────────────────────────────────────────────────────────────────────────

pub const PRIZES: [&str; 6] = [
    "10% OFF",
    "Free Fries",
    "20% OFF",
    "Free Drink",
    "15% OFF",
    "Free Pizza",
];

pub const SEGMENT_DEG: f32 = 360.0 / PRIZES.len() as f32;

/// How long the CSS spin runs before the prize is revealed.
pub const SPIN_MS: u32 = 3000;
pub const CLAIM_MESSAGE: &str = "🎁 Prize claimed! Check your rewards!";

pub fn prize_points(prize: &str) -> u32 {
    if prize.contains("OFF") {
        15
    } else if prize.contains("Free") {
        25
    } else {
        0
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spin {
    /// Total rotation to apply to the wheel element, in degrees.
    pub total_rotation_deg: f32,
    pub final_angle_deg: f32,
    pub prize_index: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WheelResult {
    pub prize: &'static str,
    pub reward: GameReward,
}

impl WheelResult {
    pub fn message(&self) -> String {
        format!(
            "🎉 You won {}! +{} points earned!",
            self.prize, self.reward.points
        )
    }
}

#[derive(Debug, Clone)]
pub struct SpinWheel {
    spinning: Option<Spin>,
    last: Option<WheelResult>,
    rng_seed: u64,
}

impl SpinWheel {
    pub fn new(seed: u64) -> Self {
        Self {
            spinning: None,
            last: None,
            rng_seed: seed,
        }
    }

    pub fn is_spinning(&self) -> bool {
        self.spinning.is_some()
    }

    pub fn last_result(&self) -> Option<&WheelResult> {
        self.last.as_ref()
    }

    /// Start a spin of 5-10 full turns. Ignored while a spin is in flight.
    pub fn spin(&mut self) -> Option<Spin> {
        if self.spinning.is_some() {
            return None;
        }
        let turns = 5.0 + lcg_next_f32(&mut self.rng_seed) * 5.0;
        let final_angle = lcg_next_f32(&mut self.rng_seed) * 360.0;
        let spin = Spin {
            total_rotation_deg: turns * 360.0 + final_angle,
            final_angle_deg: final_angle,
            prize_index: prize_index_for(final_angle),
        };
        self.spinning = Some(spin);
        Some(spin)
    }

    /// Settle the in-flight spin once the animation has run.
    pub fn settle(&mut self) -> Option<WheelResult> {
        let spin = self.spinning.take()?;
        let prize = PRIZES[spin.prize_index];
        let result = WheelResult {
            prize,
            reward: GameReward::new(prize_points(prize)),
        };
        self.last = Some(result.clone());
        Some(result)
    }
}

pub fn prize_index_for(final_angle_deg: f32) -> usize {
    let normalized = final_angle_deg.rem_euclid(360.0);
    ((normalized / SEGMENT_DEG) as usize).min(PRIZES.len() - 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn segments_map_to_prizes() {
        assert_eq!(prize_index_for(0.0), 0);
        assert_eq!(prize_index_for(59.9), 0);
        assert_eq!(prize_index_for(60.0), 1);
        assert_eq!(prize_index_for(359.9), 5);
        assert_eq!(prize_index_for(420.0), 1);
    }

    #[test]
    fn points_follow_prize_kind() {
        assert_eq!(prize_points("10% OFF"), 15);
        assert_eq!(prize_points("Free Pizza"), 25);
        assert_eq!(prize_points("Nothing"), 0);
    }

    #[test]
    fn spin_is_exclusive_until_settled() {
        let mut wheel = SpinWheel::new(11);
        let spin = wheel.spin().unwrap();
        assert!(spin.total_rotation_deg >= 5.0 * 360.0);
        assert!(spin.total_rotation_deg < 10.0 * 360.0 + 360.0);
        assert!(wheel.is_spinning());
        assert!(wheel.spin().is_none());

        let result = wheel.settle().unwrap();
        assert_eq!(result.prize, PRIZES[spin.prize_index]);
        assert_eq!(result.reward.points, prize_points(result.prize));
        assert!(!wheel.is_spinning());
        assert!(wheel.settle().is_none());
        assert!(wheel.spin().is_some());
    }

    #[test]
    fn result_message_names_prize_and_points() {
        let r = WheelResult {
            prize: "Free Drink",
            reward: GameReward::new(25),
        };
        assert_eq!(r.message(), "🎉 You won Free Drink! +25 points earned!");
    }
}
