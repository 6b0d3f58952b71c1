use serde::{Deserialize, Serialize};

/// Timing windows and endpoints used across the site.
///
/// Every field has a default, so a partial JSON document only needs to name
/// the values it overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// A visitor counts as a new view once their last activity is older than this.
    pub visit_window_ms: u64,
    /// Visitors seen within this window are "active"; older ones are pruned.
    pub active_window_ms: u64,
    pub counter_refresh_ms: u32,
    /// Quiet period after the last mouse/key/scroll event before re-counting.
    pub activity_debounce_ms: u32,
    pub search_debounce_ms: u32,
    pub suggestion_min_chars: usize,
    pub suggestion_limit: usize,
    pub banner_interval_ms: u32,
    pub review_interval_ms: u32,
    pub intro_auto_hide_ms: u32,
    pub offer_duration_ms: u64,
    pub toast_lifetime_ms: u64,
    pub form_message_ms: u32,
    pub form_endpoint: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            visit_window_ms: 30 * 60 * 1000,
            active_window_ms: 5 * 60 * 1000,
            counter_refresh_ms: 30_000,
            activity_debounce_ms: 1000,
            search_debounce_ms: 300,
            suggestion_min_chars: 2,
            suggestion_limit: 3,
            banner_interval_ms: 2500,
            review_interval_ms: 3000,
            intro_auto_hide_ms: 4000,
            offer_duration_ms: 2 * 60 * 60 * 1000,
            toast_lifetime_ms: 3000,
            form_message_ms: 4000,
            form_endpoint: "https://formspree.io/f/food3d-orders".to_string(),
        }
    }
}

impl SiteConfig {
    /// Parse a (possibly partial) JSON override on top of the defaults.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_other_defaults() {
        let cfg = SiteConfig::from_json(r#"{ "active_window_ms": 1000 }"#).unwrap();
        assert_eq!(cfg.active_window_ms, 1000);
        assert_eq!(cfg.visit_window_ms, SiteConfig::default().visit_window_ms);
        assert_eq!(cfg.form_endpoint, SiteConfig::default().form_endpoint);
    }

    #[test]
    fn rejects_wrong_types() {
        assert!(SiteConfig::from_json(r#"{ "suggestion_limit": "three" }"#).is_err());
    }
}
