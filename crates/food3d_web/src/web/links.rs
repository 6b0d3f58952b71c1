use food3d::search::NavigationTarget;
use wasm_bindgen::{JsCast, JsValue};

use crate::ui_model;

pub(super) fn encode(s: &str) -> String {
    js_sys::encode_uri_component(s).into()
}

pub(super) fn open_in_new_tab(url: &str) {
    let Some(w) = web_sys::window() else {
        return;
    };
    if w.open_with_url_and_target(url, "_blank").is_err() {
        tracing::warn!(url, "window.open failed");
    }
}

pub(super) fn open_whatsapp() {
    open_in_new_tab(&ui_model::whatsapp_url(encode));
}

pub(super) fn open_maps() {
    open_in_new_tab(&ui_model::maps_url(encode));
}

/// Native share sheet when the browser has one, otherwise a tweet intent.
pub(super) fn share_page() {
    let Some(w) = web_sys::window() else {
        return;
    };
    let href = w.location().href().unwrap_or_default();
    let navigator: JsValue = w.navigator().into();

    let share = js_sys::Reflect::get(&navigator, &JsValue::from_str("share"))
        .ok()
        .and_then(|f| f.dyn_into::<js_sys::Function>().ok());

    if let Some(share) = share {
        let data = js_sys::Object::new();
        let _ = js_sys::Reflect::set(&data, &"title".into(), &ui_model::SHARE_TITLE.into());
        let _ = js_sys::Reflect::set(&data, &"text".into(), &ui_model::SHARE_TEXT.into());
        let _ = js_sys::Reflect::set(&data, &"url".into(), &href.as_str().into());
        if share.call1(&navigator, &data).is_ok() {
            return;
        }
    }
    open_in_new_tab(&ui_model::share_fallback_url(&href, encode));
}

fn smooth_scroll_into_view(el: &web_sys::Element) {
    let opts = web_sys::ScrollIntoViewOptions::new();
    opts.set_behavior(web_sys::ScrollBehavior::Smooth);
    opts.set_block(web_sys::ScrollLogicalPosition::Center);
    el.scroll_into_view_with_scroll_into_view_options(&opts);
}

pub(super) fn scroll_to_id(id: &str) {
    let Some(doc) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    match doc.get_element_by_id(id) {
        Some(el) => smooth_scroll_into_view(&el),
        None => tracing::debug!(id, "scroll target missing"),
    }
}

/// Scroll to a search result and flash it.
pub(super) fn navigate(target: &NavigationTarget) {
    let Some(doc) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let el = match target {
        NavigationTarget::FoodCard(name) => doc
            .query_selector(&format!(".food-card[data-name=\"{name}\"]"))
            .ok()
            .flatten(),
        NavigationTarget::SectionId(id) => doc.get_element_by_id(id),
    };
    let Some(el) = el else {
        tracing::debug!(?target, "search target missing");
        return;
    };
    smooth_scroll_into_view(&el);
    let _ = el.class_list().add_1("highlight");
    let el_done = el.clone();
    super::timers::set_timeout(2000, move || {
        let _ = el_done.class_list().remove_1("highlight");
    });
}

pub(super) fn scroll_to_top() {
    let Some(w) = web_sys::window() else {
        return;
    };
    let opts = web_sys::ScrollToOptions::new();
    opts.set_top(0.0);
    opts.set_behavior(web_sys::ScrollBehavior::Smooth);
    w.scroll_to_with_scroll_to_options(&opts);
}

/// Window scroll offset, viewport height and document height.
pub(super) fn scroll_metrics() -> (f64, f64, f64) {
    let Some(w) = web_sys::window() else {
        return (0.0, 0.0, 0.0);
    };
    let scroll_y = w.scroll_y().unwrap_or(0.0);
    let viewport = w
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let doc_height = w
        .document()
        .and_then(|d| d.document_element())
        .map(|e| f64::from(e.scroll_height()))
        .unwrap_or(0.0);
    (scroll_y, viewport, doc_height)
}

pub(super) fn element_top(id: &str) -> Option<f64> {
    let doc = web_sys::window()?.document()?;
    Some(doc.get_element_by_id(id)?.get_bounding_client_rect().top())
}

pub(super) fn location_hash() -> String {
    web_sys::window()
        .and_then(|w| w.location().hash().ok())
        .unwrap_or_default()
}
