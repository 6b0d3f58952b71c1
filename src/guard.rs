//! Copy protection, the "leaving the site" confirmation for social links and
//! the signature badge tooltip.

pub const COPY_PROTECTION_TITLE: &str = "Copy Protection Active";
pub const COPY_PROTECTION_BODY: &str =
    "This content is protected. Please contact us for permissions.";
pub const COPY_PROTECTION_MS: u32 = 3000;

/// Ctrl+A/C/X/V and F12 are swallowed.
pub fn is_blocked_shortcut(ctrl: bool, key: &str) -> bool {
    key == "F12" || (ctrl && matches!(key, "a" | "c" | "x" | "v"))
}

/// A social link waiting for the visitor to allow or cancel.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SocialPrompt {
    pending: Option<String>,
}

impl SocialPrompt {
    pub fn open(&mut self, href: impl Into<String>) {
        self.pending = Some(href.into());
    }

    pub fn is_open(&self) -> bool {
        self.pending.is_some()
    }

    /// Close the prompt and return the URL to open, if any. Placeholder `#`
    /// links close without navigating.
    pub fn allow(&mut self) -> Option<String> {
        self.pending.take().filter(|h| !h.is_empty() && h != "#")
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }
}

/// Tooltip on the signature badge: a click on the badge flips it, a click
/// anywhere else closes it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SignatureBadge {
    active: bool,
}

impl SignatureBadge {
    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn click(&mut self, inside_badge: bool) {
        self.active = inside_badge && !self.active;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blocks_copy_shortcuts_and_devtools() {
        assert!(is_blocked_shortcut(true, "c"));
        assert!(is_blocked_shortcut(false, "F12"));
        assert!(!is_blocked_shortcut(false, "c"));
        assert!(!is_blocked_shortcut(true, "z"));
    }

    #[test]
    fn placeholder_links_do_not_navigate() {
        let mut p = SocialPrompt::default();
        p.open("#");
        assert!(p.is_open());
        assert_eq!(p.allow(), None);
        assert!(!p.is_open());

        p.open("https://instagram.com/food3d");
        assert_eq!(p.allow().as_deref(), Some("https://instagram.com/food3d"));

        p.open("https://facebook.com");
        p.cancel();
        assert_eq!(p.allow(), None);
    }

    #[test]
    fn badge_tooltip_toggles_and_closes_outside() {
        let mut b = SignatureBadge::default();
        b.click(true);
        assert!(b.is_active());
        b.click(true);
        assert!(!b.is_active());
        b.click(true);
        b.click(false);
        assert!(!b.is_active());
        b.click(false);
        assert!(!b.is_active());
    }
}
