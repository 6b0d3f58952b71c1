//! Site search over a fixed catalog of foods and page sections.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Food,
    Section,
}

impl EntryKind {
    pub fn icon(self) -> &'static str {
        match self {
            EntryKind::Food => "🍕",
            EntryKind::Section => "📋",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    pub kind: EntryKind,
    pub name: &'static str,
    pub description: &'static str,
    pub category: &'static str,
}

const fn food(name: &'static str, description: &'static str, category: &'static str) -> CatalogEntry {
    CatalogEntry {
        kind: EntryKind::Food,
        name,
        description,
        category,
    }
}

const fn section(name: &'static str, description: &'static str, category: &'static str) -> CatalogEntry {
    CatalogEntry {
        kind: EntryKind::Section,
        name,
        description,
        category,
    }
}

pub static CATALOG: [CatalogEntry; 13] = [
    food("Pizza Mania", "Cheesy, saucy, and loaded with toppings", "Fast Food"),
    food("Burger Blast", "Juicy beef patty, fresh veggies, and secret sauce", "Fast Food"),
    food("Hotdog Heaven", "Classic hotdog with tangy mustard and crispy onions", "Fast Food"),
    food("Fries Fiesta", "Golden, crispy fries served with a variety of dips", "Fast Food"),
    food("Sandwich Supreme", "Layered with meats, cheese, and fresh veggies", "Fast Food"),
    food("Taco Treat", "Spicy beef, crisp lettuce, and creamy cheese", "Fast Food"),
    food("Chicken Nuggets", "Crunchy on the outside, tender on the inside", "Fast Food"),
    food("Donut Delight", "Sweet, fluffy donuts with colorful sprinkles", "Desserts"),
    food("Ice Cream Dream", "Creamy, cold, and sweet. The perfect treat", "Desserts"),
    section("About Section", "Learn about our food world and passion", "Information"),
    section("Food Menu", "Browse our complete menu with prices", "Menu"),
    section("Order Now", "Place your order for delicious food", "Order"),
    section("Customer Reviews", "See what our customers say about us", "Reviews"),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    Results(Vec<&'static CatalogEntry>),
    NoResults,
}

impl SearchOutcome {
    pub fn heading(&self, query: &str) -> String {
        match self {
            SearchOutcome::Results(_) => format!("Search Results for \"{query}\""),
            SearchOutcome::NoResults => "No Results Found".to_string(),
        }
    }
}

pub const NO_RESULTS_HINT: &str = "Try searching for: Pizza, Burger, Menu, Order, etc.";

/// Where a chosen result scrolls to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationTarget {
    /// A food card, located by its `data-name` attribute.
    FoodCard(String),
    /// A section element, located by id.
    SectionId(String),
}

fn contains_ci(haystack: &str, needle_lower: &str) -> bool {
    haystack.to_lowercase().contains(needle_lower)
}

/// Full search on submit. A blank query does nothing and returns `None`.
pub fn search(query: &str) -> Option<SearchOutcome> {
    if query.trim().is_empty() {
        return None;
    }
    let q = query.to_lowercase();
    let results: Vec<&'static CatalogEntry> = CATALOG
        .iter()
        .filter(|e| {
            contains_ci(e.name, &q) || contains_ci(e.description, &q) || contains_ci(e.category, &q)
        })
        .collect();

    Some(if results.is_empty() {
        SearchOutcome::NoResults
    } else {
        SearchOutcome::Results(results)
    })
}

/// Whether a lookup is worth scheduling. Shorter queries hide the box at once.
pub fn wants_suggestions(query: &str, min_chars: usize) -> bool {
    query.chars().count() >= min_chars
}

/// Type-ahead suggestions: name or description only, and only once the query
/// is at least `min_chars` long. An empty vec means "hide the box".
pub fn suggestions(query: &str, min_chars: usize, limit: usize) -> Vec<&'static CatalogEntry> {
    if !wants_suggestions(query, min_chars) {
        return Vec::new();
    }
    let q = query.to_lowercase();
    CATALOG
        .iter()
        .filter(|e| contains_ci(e.name, &q) || contains_ci(e.description, &q))
        .take(limit)
        .collect()
}

pub fn navigation_target(entry: &CatalogEntry) -> NavigationTarget {
    match entry.kind {
        EntryKind::Food => NavigationTarget::FoodCard(entry.name.to_string()),
        // Only the first space is dropped: "Customer Reviews" -> "customerreviewsSection",
        // "Order Now" -> "ordernowSection".
        EntryKind::Section => NavigationTarget::SectionId(format!(
            "{}Section",
            entry.name.to_lowercase().replacen(' ', "", 1)
        )),
    }
}

pub fn find_entry(name: &str) -> Option<&'static CatalogEntry> {
    CATALOG.iter().find(|e| e.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(outcome: &SearchOutcome) -> Vec<&'static str> {
        match outcome {
            SearchOutcome::Results(r) => r.iter().map(|e| e.name).collect(),
            SearchOutcome::NoResults => Vec::new(),
        }
    }

    #[test]
    fn blank_query_is_a_no_op() {
        assert_eq!(search("   "), None);
        assert_eq!(search(""), None);
    }

    #[test]
    fn matches_any_field_case_insensitively() {
        let out = search("DESSERTS").unwrap();
        assert_eq!(names(&out), vec!["Donut Delight", "Ice Cream Dream"]);

        let out = search("mustard").unwrap();
        assert_eq!(names(&out), vec!["Hotdog Heaven"]);
    }

    #[test]
    fn unknown_query_reports_no_results() {
        let out = search("sushi").unwrap();
        assert_eq!(out, SearchOutcome::NoResults);
        assert_eq!(out.heading("sushi"), "No Results Found");
    }

    #[test]
    fn suggestions_need_two_chars_and_cap_at_three() {
        assert!(suggestions("c", 2, 3).is_empty());
        let s = suggestions("ch", 2, 3);
        assert_eq!(s.len(), 3);
        assert!(s.iter().all(|e| e.name.to_lowercase().contains("ch")
            || e.description.to_lowercase().contains("ch")));
    }

    #[test]
    fn suggestions_ignore_category() {
        // "Information" is only a category.
        assert!(suggestions("information", 2, 3).is_empty());
        assert!(search("information").is_some_and(|o| o != SearchOutcome::NoResults));
    }

    #[test]
    fn section_ids_drop_only_the_first_space() {
        let reviews = find_entry("Customer Reviews").unwrap();
        assert_eq!(
            navigation_target(reviews),
            NavigationTarget::SectionId("customerreviewsSection".to_string())
        );
        let pizza = find_entry("Pizza Mania").unwrap();
        assert_eq!(
            navigation_target(pizza),
            NavigationTarget::FoodCard("Pizza Mania".to_string())
        );
    }

    #[test]
    fn short_queries_skip_the_lookup() {
        assert!(!wants_suggestions("", 2));
        assert!(!wants_suggestions("p", 2));
        assert!(wants_suggestions("pi", 2));
        // Counted in characters, not bytes.
        assert!(!wants_suggestions("é", 2));
        assert!(suggestions("p", 2, 3).is_empty());
    }
}
