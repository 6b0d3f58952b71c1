//! UI models and metadata that should be available on both wasm and native.
//!
//! Keeping these out of the wasm-only `web` module allows us to unit-test the
//! page inventory and the outbound link builders on the host.

use food3d::search::{EntryKind, CATALOG};

/// Page sections reachable from the navbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Home,
    About,
    Menu,
    Order,
    Games,
    Loyalty,
    Reviews,
    Contact,
}

impl Section {
    pub fn label(self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::About => "About",
            Section::Menu => "Menu",
            Section::Order => "Order",
            Section::Games => "Games",
            Section::Loyalty => "Rewards",
            Section::Reviews => "Reviews",
            Section::Contact => "Contact",
        }
    }

    /// Element id the nav link scrolls to. Sections that search can reach use
    /// the id search derives from the entry name (lowercased, first space
    /// dropped, `Section` appended).
    pub fn anchor(self) -> &'static str {
        match self {
            Section::Home => "homeSection",
            Section::About => "aboutsectionSection",
            Section::Menu => "foodmenuSection",
            Section::Order => "ordernowSection",
            Section::Games => "gamesSection",
            Section::Loyalty => "loyaltySection",
            Section::Reviews => "customerreviewsSection",
            Section::Contact => "contactSection",
        }
    }

    pub fn all() -> &'static [Section] {
        &[
            Section::Home,
            Section::About,
            Section::Menu,
            Section::Order,
            Section::Games,
            Section::Loyalty,
            Section::Reviews,
            Section::Contact,
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameKind {
    Quiz,
    Memory,
    Wheel,
}

impl GameKind {
    pub fn label(self) -> &'static str {
        match self {
            GameKind::Quiz => "Food Quiz",
            GameKind::Memory => "Memory Match",
            GameKind::Wheel => "Spin the Wheel",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            GameKind::Quiz => "🧠",
            GameKind::Memory => "🃏",
            GameKind::Wheel => "🎡",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            GameKind::Quiz => "Answer three food questions",
            GameKind::Memory => "Match all eight food pairs for 20 points",
            GameKind::Wheel => "Spin for discounts and free food",
        }
    }

    pub fn all() -> &'static [GameKind] {
        &[GameKind::Quiz, GameKind::Memory, GameKind::Wheel]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuItem {
    pub name: &'static str,
    pub price: &'static str,
}

/// Checkbox values of the food menu, in page order.
pub const MENU_ITEMS: [MenuItem; 12] = [
    MenuItem { name: "Pizza", price: "Rs. 1200" },
    MenuItem { name: "Burger", price: "Rs. 650" },
    MenuItem { name: "Hotdog", price: "Rs. 400" },
    MenuItem { name: "Fries", price: "Rs. 300" },
    MenuItem { name: "Sandwich", price: "Rs. 450" },
    MenuItem { name: "Taco", price: "Rs. 500" },
    MenuItem { name: "Chicken Nuggets", price: "Rs. 550" },
    MenuItem { name: "Donut", price: "Rs. 250" },
    MenuItem { name: "Ice Cream", price: "Rs. 350" },
    MenuItem { name: "Biryani", price: "Rs. 700" },
    MenuItem { name: "Karahi", price: "Rs. 1500" },
    MenuItem { name: "Cold Drink", price: "Rs. 150" },
];

pub fn menu_values() -> impl Iterator<Item = &'static str> {
    MENU_ITEMS.iter().map(|m| m.name)
}

/// Food cards shown on the page, one per catalog food. The card's
/// `data-name` is the catalog name so search results can find it.
pub fn food_cards() -> impl Iterator<Item = &'static food3d::search::CatalogEntry> {
    CATALOG.iter().filter(|e| e.kind == EntryKind::Food)
}

pub const BANNER_SLIDES: [&str; 4] = [
    "🍕 Fresh pizza straight from the oven",
    "🍔 Double patty burgers all week",
    "🍟 Free fries with every combo",
    "🍦 Ice cream happy hour 3-5pm",
];

/// Elements that fade in the first time they scroll into view.
pub const REVEAL_SELECTOR: &str = "main > section, .food-card";

pub const SOCIAL_LINKS: [(&str, &str, &str); 4] = [
    ("Facebook", "📘", "https://facebook.com/food3d"),
    ("Instagram", "📸", "https://instagram.com/food3d"),
    ("Twitter", "🐦", "https://twitter.com/food3d"),
    ("YouTube", "▶️", "#"),
];

pub const WHATSAPP_PHONE: &str = "923001234567";
pub const WHATSAPP_MESSAGE: &str = "Hi! I want to order food from Food3D. Can you help me?";
pub const STORE_ADDRESS: &str = "123 Food Street, Karachi, Pakistan";
pub const SHARE_TITLE: &str = "Food3D - Amazing Food Website";
pub const SHARE_TEXT: &str = "Check out this amazing food website!";

// The encoder is passed in so the browser can use `encodeURIComponent`.

pub fn whatsapp_url(encode: impl Fn(&str) -> String) -> String {
    format!(
        "https://wa.me/{WHATSAPP_PHONE}?text={}",
        encode(WHATSAPP_MESSAGE)
    )
}

pub fn maps_url(encode: impl Fn(&str) -> String) -> String {
    format!(
        "https://www.google.com/maps/search/?api=1&query={}",
        encode(STORE_ADDRESS)
    )
}

/// Used when the browser has no native share sheet.
pub fn share_fallback_url(page_url: &str, encode: impl Fn(&str) -> String) -> String {
    format!(
        "https://twitter.com/intent/tweet?text={}&url={}",
        encode(SHARE_TEXT),
        encode(page_url)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spaces_only(s: &str) -> String {
        s.replace(' ', "%20").replace(',', "%2C")
    }

    #[test]
    fn section_inventory_is_stable() {
        let all = Section::all();
        assert_eq!(all.len(), 8);

        let mut anchors: Vec<&'static str> = all.iter().copied().map(Section::anchor).collect();
        anchors.sort_unstable();
        anchors.dedup();
        assert_eq!(anchors.len(), 8);

        for s in all {
            assert!(!s.label().trim().is_empty());
        }
    }

    #[test]
    fn search_sections_land_on_real_anchors() {
        use food3d::search::{navigation_target, NavigationTarget};

        for entry in CATALOG.iter().filter(|e| e.kind == EntryKind::Section) {
            let NavigationTarget::SectionId(id) = navigation_target(entry) else {
                panic!("{} should navigate to a section", entry.name);
            };
            assert!(
                Section::all().iter().any(|s| s.anchor() == id),
                "no section with id {id}"
            );
        }
    }

    #[test]
    fn game_kind_inventory_is_stable() {
        for k in GameKind::all() {
            assert!(!k.label().is_empty());
            assert!(!k.icon().is_empty());
            assert!(!k.description().is_empty());
        }
    }

    #[test]
    fn menu_values_are_unique() {
        let mut names: Vec<&str> = menu_values().collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), MENU_ITEMS.len());
    }

    #[test]
    fn every_catalog_food_has_a_card() {
        assert_eq!(food_cards().count(), 9);
        assert!(food_cards().all(|e| e.kind == EntryKind::Food));
    }

    #[test]
    fn outbound_links_encode_their_text() {
        assert_eq!(
            whatsapp_url(spaces_only),
            "https://wa.me/923001234567?text=Hi!%20I%20want%20to%20order%20food%20from%20Food3D.%20Can%20you%20help%20me?"
        );
        assert_eq!(
            maps_url(spaces_only),
            "https://www.google.com/maps/search/?api=1&query=123%20Food%20Street%2C%20Karachi%2C%20Pakistan"
        );
        let share = share_fallback_url("https://food3d.example/", spaces_only);
        assert!(share.starts_with("https://twitter.com/intent/tweet?text=Check%20out"));
        assert!(share.ends_with("&url=https://food3d.example/"));
    }
}
