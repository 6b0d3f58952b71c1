use tracing::warn;

use crate::storage::{self, keys, KeyValueStore};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Light,
    Dark,
}

impl Mode {
    pub fn is_dark(self) -> bool {
        matches!(self, Mode::Dark)
    }

    pub fn toggle(self) -> Self {
        match self {
            Mode::Light => Mode::Dark,
            Mode::Dark => Mode::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Light => "light",
            Mode::Dark => "dark",
        }
    }

    /// Icon on the toggle button: the mode you would switch to.
    pub fn icon(self) -> &'static str {
        match self {
            Mode::Light => "🌙",
            Mode::Dark => "☀️",
        }
    }

    /// Anything other than `"dark"` reads as light.
    pub fn parse(v: &str) -> Self {
        if v == "dark" {
            Mode::Dark
        } else {
            Mode::Light
        }
    }

    pub fn load(store: &impl KeyValueStore) -> Self {
        storage::get_string(store, keys::MODE)
            .map(|v| Mode::parse(&v))
            .unwrap_or_default()
    }

    pub fn save(self, store: &impl KeyValueStore) {
        if let Err(e) = store.set(keys::MODE, self.as_str()) {
            warn!(error = %e, "could not persist mode");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn toggle_persists_across_loads() {
        let store = MemoryStore::new();
        assert_eq!(Mode::load(&store), Mode::Light);

        let mode = Mode::load(&store).toggle();
        mode.save(&store);
        assert_eq!(Mode::load(&store), Mode::Dark);
        assert_eq!(Mode::load(&store).icon(), "☀️");
    }

    #[test]
    fn unknown_values_read_as_light() {
        assert_eq!(Mode::parse("DARK"), Mode::Light);
        assert_eq!(Mode::parse(""), Mode::Light);
    }
}
