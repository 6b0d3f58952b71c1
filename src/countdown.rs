/// Limited-time offer countdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Countdown {
    ends_at_ms: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Tick {
    Running(String),
    /// Shows `00:00:00`; the banner is hidden and the interval cleared.
    Expired,
}

impl Countdown {
    pub fn starting_at(now_ms: u64, duration_ms: u64) -> Self {
        Self {
            ends_at_ms: now_ms.saturating_add(duration_ms),
        }
    }

    pub fn ends_at_ms(&self) -> u64 {
        self.ends_at_ms
    }

    pub fn tick(&self, now_ms: u64) -> Tick {
        if now_ms >= self.ends_at_ms {
            return Tick::Expired;
        }
        Tick::Running(format_hms(self.ends_at_ms - now_ms))
    }
}

impl Tick {
    pub fn display(&self) -> &str {
        match self {
            Tick::Running(s) => s,
            Tick::Expired => "00:00:00",
        }
    }
}

/// `HH:MM:SS`, hours not wrapped at 24.
pub fn format_hms(ms: u64) -> String {
    let secs = ms / 1000;
    format!("{:02}:{:02}:{:02}", secs / 3600, (secs % 3600) / 60, secs % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_down_from_two_hours() {
        let c = Countdown::starting_at(1_000, 2 * 60 * 60 * 1000);
        assert_eq!(c.tick(1_000).display(), "02:00:00");
        assert_eq!(c.tick(1_000 + 61_500).display(), "01:58:58");
    }

    #[test]
    fn expires_at_the_deadline() {
        let c = Countdown::starting_at(0, 5_000);
        assert_eq!(c.tick(4_999).display(), "00:00:00");
        assert_eq!(c.tick(5_000), Tick::Expired);
        assert_eq!(c.tick(9_000).display(), "00:00:00");
    }

    #[test]
    fn hours_are_not_wrapped() {
        assert_eq!(format_hms(100 * 3600 * 1000), "100:00:00");
    }
}
