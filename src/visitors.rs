//! Local view counter.
//!
//! An approximation of site analytics kept entirely in the visitor's own
//! storage: a per-browser visitor id, a map of visitor id to last activity,
//! and a running view total. Nothing here is shared between browsers, so the
//! "active" count only ever sees tabs of the same origin.

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::SiteConfig;
use crate::prng::Prng;
use crate::storage::{self, keys, KeyValueStore};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewData {
    #[serde(rename = "totalViews", default)]
    pub total_views: u64,
    /// Visitor id -> last activity, milliseconds since the epoch. `None` when
    /// the stored blob has no `visitors` key at all.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visitors: Option<HashMap<String, u64>>,
}

impl ViewData {
    pub fn load(store: &impl KeyValueStore) -> Self {
        storage::load_json(store, keys::VIEW_DATA)
    }

    pub fn active_visitors(&self) -> usize {
        self.visitors.as_ref().map_or(0, HashMap::len)
    }

    /// 1-based rank of `visitor_id` by last activity, oldest first.
    /// Zero when the visitor is not in the map.
    pub fn visitor_number(&self, visitor_id: &str) -> usize {
        let mut ids: Vec<(&String, &u64)> = self.visitors.iter().flatten().collect();
        ids.sort_by(|a, b| a.1.cmp(b.1).then_with(|| a.0.cmp(b.0)));
        ids.iter()
            .position(|(id, _)| id.as_str() == visitor_id)
            .map_or(0, |i| i + 1)
    }

    /// The number shown in the details popup. A blob without a visitor map
    /// means "you are the first"; an empty map still ranks, giving zero.
    pub fn popup_visitor_number(&self, visitor_id: &str) -> usize {
        match self.visitors {
            None => 1,
            Some(_) => self.visitor_number(visitor_id),
        }
    }

    pub fn is_new_visitor(&self, visitor_id: &str) -> bool {
        !self
            .visitors
            .as_ref()
            .is_some_and(|v| v.contains_key(visitor_id))
    }

    pub fn welcome_message(&self) -> String {
        format!("Welcome! You're visitor #{}", self.total_views + 1)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisitSnapshot {
    pub total_views: u64,
    pub active_visitors: usize,
    pub visitor_number: usize,
}

/// `visitor_<now>_<9 base-36 chars>`.
pub fn generate_visitor_id(now_ms: u64, rng: &mut Prng) -> String {
    format!("visitor_{now_ms}_{}", rng.base36(9))
}

/// Read this browser's visitor id, creating and persisting one on first use.
pub fn visitor_id(store: &impl KeyValueStore, now_ms: u64, rng: &mut Prng) -> String {
    if let Some(id) = storage::get_string(store, keys::VISITOR_ID).filter(|s| !s.is_empty()) {
        return id;
    }
    let id = generate_visitor_id(now_ms, rng);
    if let Err(e) = store.set(keys::VISITOR_ID, &id) {
        warn!(error = %e, "could not persist visitor id");
    }
    id
}

#[derive(Debug, Clone, Copy)]
pub struct ViewCounter {
    visit_window_ms: u64,
    active_window_ms: u64,
}

impl ViewCounter {
    pub fn new(config: &SiteConfig) -> Self {
        Self {
            visit_window_ms: config.visit_window_ms,
            active_window_ms: config.active_window_ms,
        }
    }

    /// Note activity from `visitor_id` at `now_ms` and persist the result.
    ///
    /// A view is added only when this visitor was last seen more than the
    /// visit window ago (or never). Visitors idle past the active window are
    /// dropped from the map.
    pub fn record_visit(
        &self,
        store: &impl KeyValueStore,
        visitor_id: &str,
        now_ms: u64,
    ) -> storage::Result<VisitSnapshot> {
        let mut data = ViewData::load(store);
        let snapshot = self.apply_visit(&mut data, visitor_id, now_ms);
        storage::save_json(store, keys::VIEW_DATA, &data)?;
        debug!(
            total_views = snapshot.total_views,
            active = snapshot.active_visitors,
            "visit recorded"
        );
        Ok(snapshot)
    }

    pub fn apply_visit(&self, data: &mut ViewData, visitor_id: &str, now_ms: u64) -> VisitSnapshot {
        let visitors = data.visitors.get_or_insert_with(HashMap::new);
        let is_new_view = match visitors.get(visitor_id) {
            Some(&last) => now_ms.saturating_sub(last) > self.visit_window_ms,
            None => true,
        };
        visitors.insert(visitor_id.to_string(), now_ms);
        let cutoff = now_ms.saturating_sub(self.active_window_ms);
        visitors.retain(|_, &mut seen| seen >= cutoff);
        if is_new_view {
            data.total_views += 1;
        }

        VisitSnapshot {
            total_views: data.total_views,
            active_visitors: data.active_visitors(),
            visitor_number: data.visitor_number(visitor_id),
        }
    }
}

/// Whether a counter currently showing `displayed` should pulse to `new_value`.
/// Unparseable text counts as zero.
pub fn display_changed(displayed: &str, new_value: u64) -> bool {
    displayed.trim().parse::<u64>().unwrap_or(0) != new_value
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    const MIN: u64 = 60 * 1000;

    fn counter() -> ViewCounter {
        ViewCounter::new(&SiteConfig::default())
    }

    #[test]
    fn repeated_renders_do_not_double_count() {
        let store = MemoryStore::new();
        let c = counter();
        let t0 = 1_700_000_000_000;

        let first = c.record_visit(&store, "visitor_a", t0).unwrap();
        let second = c.record_visit(&store, "visitor_a", t0 + 2 * MIN).unwrap();

        assert_eq!(first.total_views, 1);
        assert_eq!(second.total_views, 1);
        assert_eq!(second.active_visitors, 1);
        assert_eq!(second.visitor_number, 1);
    }

    #[test]
    fn view_counts_again_after_visit_window() {
        let store = MemoryStore::new();
        let c = counter();
        let t0 = 1_000 * MIN;
        c.record_visit(&store, "a", t0).unwrap();
        let later = c.record_visit(&store, "a", t0 + 31 * MIN).unwrap();
        assert_eq!(later.total_views, 2);
    }

    #[test]
    fn idle_visitors_are_pruned_from_active() {
        let store = MemoryStore::new();
        let c = counter();
        let t0 = 1_000 * MIN;
        c.record_visit(&store, "a", t0).unwrap();
        let snap = c.record_visit(&store, "b", t0 + 4 * MIN).unwrap();
        assert_eq!(snap.active_visitors, 2);
        assert_eq!(snap.visitor_number, 2);

        let snap = c.record_visit(&store, "b", t0 + 6 * MIN).unwrap();
        assert_eq!(snap.active_visitors, 1);
        assert_eq!(snap.visitor_number, 1);
        assert_eq!(snap.total_views, 2);
        assert!(ViewData::load(&store).is_new_visitor("a"));
    }

    #[test]
    fn malformed_blob_starts_from_zero() {
        let store = MemoryStore::new();
        store.set(keys::VIEW_DATA, "][").unwrap();
        let snap = counter().record_visit(&store, "a", 5).unwrap();
        assert_eq!(snap.total_views, 1);
        assert_eq!(snap.active_visitors, 1);
    }

    #[test]
    fn reads_blobs_written_by_older_pages() {
        let store = MemoryStore::new();
        store
            .set(keys::VIEW_DATA, r#"{"totalViews":41,"visitors":{"x":100}}"#)
            .unwrap();
        let data = ViewData::load(&store);
        assert_eq!(data.total_views, 41);
        assert_eq!(data.welcome_message(), "Welcome! You're visitor #42");
        assert_eq!(data.visitor_number("x"), 1);
        assert_eq!(data.visitor_number("y"), 0);
    }

    #[test]
    fn visitor_id_is_created_once() {
        let store = MemoryStore::new();
        let mut rng = Prng::new(9);
        let id = visitor_id(&store, 1234, &mut rng);
        assert!(id.starts_with("visitor_1234_"));
        assert_eq!(id.len(), "visitor_1234_".len() + 9);
        assert_eq!(visitor_id(&store, 9999, &mut rng), id);
    }

    #[test]
    fn popup_number_defaults_to_one() {
        let data = ViewData::default();
        assert_eq!(data.popup_visitor_number("anyone"), 1);
    }

    #[test]
    fn popup_number_is_zero_for_an_empty_visitor_map() {
        let store = MemoryStore::new();
        store
            .set(keys::VIEW_DATA, r#"{"totalViews":3,"visitors":{}}"#)
            .unwrap();
        let data = ViewData::load(&store);
        assert_eq!(data.popup_visitor_number("anyone"), 0);

        store.set(keys::VIEW_DATA, r#"{"totalViews":3}"#).unwrap();
        assert_eq!(ViewData::load(&store).popup_visitor_number("anyone"), 1);
    }

    #[test]
    fn display_change_detection() {
        assert!(display_changed("", 1));
        assert!(!display_changed("0", 0));
        assert!(!display_changed(" 12 ", 12));
        assert!(display_changed("12", 13));
    }
}
