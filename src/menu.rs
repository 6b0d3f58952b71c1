//! Food menu checkboxes and the "done" sheet.

use tracing::debug;

use crate::storage::{self, keys, KeyValueStore};

pub const SHEET_TITLE: &str = "Your Selected Food Menu";
pub const SHEET_FILENAME: &str = "food3d-menu.txt";
pub const EMPTY_SELECTION: &str = "Please select at least one item!";

/// Checked state of the menu checkboxes, in page order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuSelection {
    options: Vec<(String, bool)>,
}

impl MenuSelection {
    pub fn new<I, S>(options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            options: options.into_iter().map(|o| (o.into(), false)).collect(),
        }
    }

    /// Build the selection and check whatever was saved last time.
    /// Saved names that are no longer on the menu are dropped.
    pub fn restore<I, S>(store: &impl KeyValueStore, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let saved: Vec<String> = storage::load_json(store, keys::MENU_SELECTION);
        let mut sel = Self::new(options);
        for (name, checked) in &mut sel.options {
            *checked = saved.iter().any(|s| s == name);
        }
        sel
    }

    pub fn options(&self) -> impl Iterator<Item = (&str, bool)> {
        self.options.iter().map(|(n, c)| (n.as_str(), *c))
    }

    pub fn is_checked(&self, value: &str) -> bool {
        self.options.iter().any(|(n, c)| n == value && *c)
    }

    /// Set one checkbox and persist the full selection.
    pub fn toggle(
        &mut self,
        store: &impl KeyValueStore,
        value: &str,
        checked: bool,
    ) -> storage::Result<()> {
        if let Some(slot) = self.options.iter_mut().find(|(n, _)| n == value) {
            slot.1 = checked;
        }
        debug!(value, checked, "menu selection changed");
        self.save(store)
    }

    pub fn save(&self, store: &impl KeyValueStore) -> storage::Result<()> {
        storage::save_json(store, keys::MENU_SELECTION, &self.selected())
    }

    pub fn selected(&self) -> Vec<&str> {
        self.options
            .iter()
            .filter(|(_, c)| *c)
            .map(|(n, _)| n.as_str())
            .collect()
    }

    /// The downloadable sheet, or `None` when nothing is checked.
    pub fn sheet(&self) -> Option<MenuSheet> {
        let items: Vec<String> = self.selected().into_iter().map(str::to_string).collect();
        (!items.is_empty()).then_some(MenuSheet { items })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuSheet {
    pub items: Vec<String>,
}

impl MenuSheet {
    pub fn render(&self) -> String {
        let mut out = String::new();
        out.push_str(SHEET_TITLE);
        out.push_str("\n\n");
        for item in &self.items {
            out.push_str("• ");
            out.push_str(item);
            out.push('\n');
        }
        out
    }
}

/// Seasonal menus that are announced but not yet published.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpecialMenu {
    Ramadan,
    Festival,
}

impl SpecialMenu {
    pub fn all() -> &'static [SpecialMenu] {
        &[SpecialMenu::Ramadan, SpecialMenu::Festival]
    }

    pub fn label(self) -> &'static str {
        match self {
            SpecialMenu::Ramadan => "🌙 Ramadan Menu",
            SpecialMenu::Festival => "🎄 Festival Menu",
        }
    }

    pub fn coming_soon(self) -> &'static str {
        match self {
            SpecialMenu::Ramadan => "🌙 Special Ramadan menu coming soon!",
            SpecialMenu::Festival => "🎄 Festival menu coming soon!",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    const MENU: [&str; 5] = ["Pizza", "Burger", "Biryani", "Nihari", "Samosa"];

    #[test]
    fn persisted_selection_restores_exactly() {
        let store = MemoryStore::new();
        let mut sel = MenuSelection::new(MENU);
        sel.toggle(&store, "Biryani", true).unwrap();
        sel.toggle(&store, "Pizza", true).unwrap();
        sel.toggle(&store, "Samosa", true).unwrap();
        sel.toggle(&store, "Samosa", false).unwrap();

        let reloaded = MenuSelection::restore(&store, MENU);
        assert_eq!(reloaded, sel);
        assert_eq!(reloaded.selected(), vec!["Pizza", "Biryani"]);
    }

    #[test]
    fn stale_saved_names_are_ignored() {
        let store = MemoryStore::new();
        store
            .set(keys::MENU_SELECTION, r#"["Pizza","Haleem"]"#)
            .unwrap();
        let sel = MenuSelection::restore(&store, MENU);
        assert_eq!(sel.selected(), vec!["Pizza"]);
        assert!(!sel.is_checked("Haleem"));
    }

    #[test]
    fn corrupt_storage_restores_nothing() {
        let store = MemoryStore::new();
        store.set(keys::MENU_SELECTION, "{").unwrap();
        let sel = MenuSelection::restore(&store, MENU);
        assert!(sel.selected().is_empty());
    }

    #[test]
    fn sheet_requires_a_selection() {
        let store = MemoryStore::new();
        let mut sel = MenuSelection::new(MENU);
        assert!(sel.sheet().is_none());

        sel.toggle(&store, "Nihari", true).unwrap();
        let text = sel.sheet().unwrap().render();
        assert!(text.starts_with(SHEET_TITLE));
        assert!(text.contains("• Nihari\n"));
    }

    #[test]
    fn special_menus_are_announced_as_coming_soon() {
        for m in SpecialMenu::all() {
            assert!(m.coming_soon().ends_with("coming soon!"));
        }
        assert_eq!(
            SpecialMenu::Ramadan.coming_soon(),
            "🌙 Special Ramadan menu coming soon!"
        );
    }
}
