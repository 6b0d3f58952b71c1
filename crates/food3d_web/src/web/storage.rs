use food3d::intro::Language;
use food3d::storage::{KeyValueStore, Result, StorageError};
use food3d::theme::Mode;

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

/// `window.localStorage`, looked up on every call so the handle can live in
/// `Send + Sync` reactive storage.
#[derive(Debug, Clone, Copy, Default)]
pub(super) struct LocalStorage;

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let s = local_storage().ok_or(StorageError::Unavailable)?;
        // A throwing getItem is as good as missing.
        Ok(s.get_item(key).ok().flatten())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let s = local_storage().ok_or(StorageError::Unavailable)?;
        s.set_item(key, value)
            .map_err(|_| StorageError::WriteRejected {
                key: key.to_string(),
            })
    }

    fn remove(&self, key: &str) -> Result<()> {
        let s = local_storage().ok_or(StorageError::Unavailable)?;
        s.remove_item(key)
            .map_err(|_| StorageError::WriteRejected {
                key: key.to_string(),
            })
    }
}

fn body() -> Option<web_sys::HtmlElement> {
    web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body())
}

pub(super) fn apply_mode_to_document(mode: Mode) {
    let Some(body) = body() else {
        return;
    };
    let _ = body.class_list().toggle_with_force("dark", mode.is_dark());
}

pub(super) fn apply_language_to_document(language: Language) {
    let Some(doc) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    if let Some(el) = doc.document_element() {
        let _ = el.set_attribute("lang", language.code());
        let _ = el.set_attribute("dir", if language.is_rtl() { "rtl" } else { "ltr" });
    }
    if let Some(body) = doc.body() {
        let _ = body.class_list().toggle_with_force("rtl", language.is_rtl());
    }
}

/// Keep the page from scrolling under a modal or the intro overlay.
pub(super) fn lock_scroll(locked: bool) {
    if let Some(body) = body() {
        let _ = body
            .style()
            .set_property("overflow", if locked { "hidden" } else { "" });
    }
}
