//! Loyalty points and member levels.
//!
//! Points only ever go up. The level is re-derived from the point total each
//! time points are added, one step at a time, and never moves backwards. The
//! stored values are trusted as-is: a visitor editing their own storage can
//! award themselves anything.

use food3d_games::GameReward;
use tracing::{info, warn};

use crate::storage::{self, keys, KeyValueStore};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum Level {
    #[default]
    Bronze,
    Silver,
    Gold,
}

impl Level {
    pub fn label(self) -> &'static str {
        match self {
            Level::Bronze => "Bronze",
            Level::Silver => "Silver",
            Level::Gold => "Gold",
        }
    }

    pub fn parse(v: &str) -> Option<Self> {
        match v.trim() {
            "Bronze" => Some(Level::Bronze),
            "Silver" => Some(Level::Silver),
            "Gold" => Some(Level::Gold),
            _ => None,
        }
    }

    /// Points needed to leave this level. Gold has a threshold too; it drives
    /// the progress bar even though there is nowhere further to go.
    pub fn threshold(self) -> u64 {
        match self {
            Level::Bronze => 100,
            Level::Silver => 300,
            Level::Gold => 500,
        }
    }

    pub fn next(self) -> Option<Self> {
        match self {
            Level::Bronze => Some(Level::Silver),
            Level::Silver => Some(Level::Gold),
            Level::Gold => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelUp {
    pub from: Level,
    pub to: Level,
}

impl LevelUp {
    pub fn message(&self) -> String {
        format!("🎉 Level Up! You are now {} Member!", self.to.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reward {
    pub icon: &'static str,
    pub text: &'static str,
    pub available: bool,
}

const fn reward(icon: &'static str, text: &'static str, available: bool) -> Reward {
    Reward {
        icon,
        text,
        available,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Loyalty {
    points: u64,
    level: Level,
}

impl Loyalty {
    pub fn new(points: u64, level: Level) -> Self {
        let mut l = Self { points, level };
        l.promote();
        l
    }

    /// Load the stored balance. Missing or unparseable values read as zero
    /// points and Bronze.
    pub fn load(store: &impl KeyValueStore) -> Self {
        let points = storage::get_string(store, keys::USER_POINTS)
            .and_then(|v| leading_digits(&v))
            .unwrap_or(0);
        let level = storage::get_string(store, keys::USER_LEVEL)
            .and_then(|v| Level::parse(&v))
            .unwrap_or_default();
        Self::new(points, level)
    }

    pub fn save(&self, store: &impl KeyValueStore) -> storage::Result<()> {
        store.set(keys::USER_POINTS, &self.points.to_string())?;
        store.set(keys::USER_LEVEL, self.level.label())
    }

    pub fn points(&self) -> u64 {
        self.points
    }

    pub fn level(&self) -> Level {
        self.level
    }

    pub fn level_label(&self) -> String {
        format!("{} Member", self.level.label())
    }

    /// Credit points and return any promotions that followed.
    pub fn add_points(&mut self, amount: u32) -> Vec<LevelUp> {
        self.points = self.points.saturating_add(u64::from(amount));
        let ups = self.promote();
        for up in &ups {
            info!(from = up.from.label(), to = up.to.label(), points = self.points, "level up");
        }
        ups
    }

    pub fn apply_reward(&mut self, reward: GameReward) -> Vec<LevelUp> {
        self.add_points(reward.points)
    }

    /// Credit, persist, and report. Storage failures are logged; the in-memory
    /// balance still moves so the page stays consistent.
    pub fn credit(&mut self, store: &impl KeyValueStore, amount: u32) -> Vec<LevelUp> {
        let ups = self.add_points(amount);
        if let Err(e) = self.save(store) {
            warn!(error = %e, "could not persist loyalty points");
        }
        ups
    }

    fn promote(&mut self) -> Vec<LevelUp> {
        let mut ups = Vec::new();
        while self.points >= self.level.threshold() {
            let Some(next) = self.level.next() else {
                break;
            };
            ups.push(LevelUp {
                from: self.level,
                to: next,
            });
            self.level = next;
        }
        ups
    }

    /// Progress bar fill, 0..100.
    pub fn progress_percent(&self) -> f64 {
        let t = self.level.threshold();
        (self.points % t) as f64 / t as f64 * 100.0
    }

    pub fn rewards(&self) -> Vec<Reward> {
        let mut out = vec![
            reward("🎁", "Welcome Gift", true),
            reward("📧", "Newsletter Access", true),
            reward("🎮", "Free Games", true),
        ];
        if self.level >= Level::Silver {
            out.extend([
                reward("🍕", "Free Pizza (500 pts)", self.points >= 500),
                reward("🍔", "Free Burger (400 pts)", self.points >= 400),
                reward("🎉", "Birthday Bonus", true),
            ]);
        }
        if self.level >= Level::Gold {
            out.extend([
                reward("⭐", "VIP Support", true),
                reward("🎯", "Priority Orders", true),
                reward("💎", "Exclusive Menu", true),
            ]);
        }
        out
    }
}

/// Integer prefix of a stored number, so `"120.5"` and `"120pts"` read as 120.
fn leading_digits(raw: &str) -> Option<u64> {
    let t = raw.trim_start();
    let end = t.find(|c: char| !c.is_ascii_digit()).unwrap_or(t.len());
    t[..end].parse().ok()
}

pub fn points_message(amount: u32) -> String {
    format!("+{amount} points earned! 🎉")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn rewards_never_lower_points_or_level() {
        let mut l = Loyalty::default();
        let mut prev_points = l.points();
        let mut prev_level = l.level();
        for amount in [15, 25, 20, 0, 50, 25, 15, 100, 200, 20] {
            l.add_points(amount);
            assert!(l.points() >= prev_points);
            assert!(l.level() >= prev_level);
            prev_points = l.points();
            prev_level = l.level();
        }
        assert_eq!(l.level(), Level::Gold);
    }

    #[test]
    fn promotions_step_through_silver() {
        let mut l = Loyalty::new(90, Level::Bronze);
        let ups = l.add_points(20);
        assert_eq!(
            ups,
            vec![LevelUp {
                from: Level::Bronze,
                to: Level::Silver
            }]
        );
        assert_eq!(ups[0].message(), "🎉 Level Up! You are now Silver Member!");

        // A big jump passes through Silver on the way to Gold.
        let mut l = Loyalty::new(0, Level::Bronze);
        let ups = l.add_points(350);
        let path: Vec<Level> = ups.iter().map(|u| u.to).collect();
        assert_eq!(path, vec![Level::Silver, Level::Gold]);
        assert!(l.add_points(1000).is_empty());
    }

    #[test]
    fn stored_level_is_never_demoted() {
        let store = MemoryStore::new();
        store.set(keys::USER_POINTS, "10").unwrap();
        store.set(keys::USER_LEVEL, "Gold").unwrap();
        let l = Loyalty::load(&store);
        assert_eq!(l.level(), Level::Gold);
        assert_eq!(l.points(), 10);
    }

    #[test]
    fn garbage_in_storage_reads_as_fresh_member() {
        let store = MemoryStore::new();
        store.set(keys::USER_POINTS, "lots").unwrap();
        store.set(keys::USER_LEVEL, "Platinum").unwrap();
        assert_eq!(Loyalty::load(&store), Loyalty::default());
    }

    #[test]
    fn fractional_points_keep_their_integer_part() {
        let store = MemoryStore::new();
        store.set(keys::USER_POINTS, "120.5").unwrap();
        assert_eq!(Loyalty::load(&store).points(), 120);
        store.set(keys::USER_POINTS, " 42 points").unwrap();
        assert_eq!(Loyalty::load(&store).points(), 42);
    }

    #[test]
    fn credit_persists_balance() {
        let store = MemoryStore::new();
        let mut l = Loyalty::load(&store);
        let ups = l.credit(&store, 120);
        assert_eq!(ups.len(), 1);

        let back = Loyalty::load(&store);
        assert_eq!(back.points(), 120);
        assert_eq!(back.level(), Level::Silver);
        assert_eq!(back.level_label(), "Silver Member");
    }

    #[test]
    fn game_rewards_feed_the_balance() {
        let mut l = Loyalty::default();
        l.apply_reward(GameReward::new(20));
        assert_eq!(l.points(), 20);
        assert_eq!(points_message(20), "+20 points earned! 🎉");
    }

    #[test]
    fn progress_wraps_on_the_level_threshold() {
        let l = Loyalty::new(50, Level::Bronze);
        assert!((l.progress_percent() - 50.0).abs() < 1e-9);
        let l = Loyalty::new(450, Level::Gold);
        assert!((l.progress_percent() - 90.0).abs() < 1e-9);
    }

    #[test]
    fn reward_list_grows_with_level() {
        assert_eq!(Loyalty::new(0, Level::Bronze).rewards().len(), 3);

        let silver = Loyalty::new(420, Level::Silver);
        // 420 is past Silver's threshold, so this is already Gold.
        assert_eq!(silver.level(), Level::Gold);
        let rewards = silver.rewards();
        assert_eq!(rewards.len(), 9);
        let pizza = rewards.iter().find(|r| r.text.starts_with("Free Pizza")).unwrap();
        let burger = rewards.iter().find(|r| r.text.starts_with("Free Burger")).unwrap();
        assert!(!pizza.available);
        assert!(burger.available);

        let silver = Loyalty::new(150, Level::Bronze);
        assert_eq!(silver.level(), Level::Silver);
        assert_eq!(silver.rewards().len(), 6);
    }
}
