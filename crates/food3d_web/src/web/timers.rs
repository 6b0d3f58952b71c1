use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

pub(super) fn now_ms() -> u64 {
    js_sys::Date::now() as u64
}

/// Today's (month, day), 1-based, in local time.
pub(super) fn today_month_day() -> (u32, u32) {
    let d = js_sys::Date::new_0();
    (d.get_month() + 1, d.get_date())
}

pub(super) fn local_time_string() -> String {
    js_sys::Date::new_0().to_locale_time_string("default").into()
}

pub(super) fn local_date_time_string() -> String {
    js_sys::Date::new_0()
        .to_locale_string("default", &wasm_bindgen::JsValue::UNDEFINED)
        .into()
}

/// Start a repeating timer. The closure is leaked; clear the handle to stop it.
pub(super) fn set_interval(ms: u32, f: impl FnMut() + 'static) -> Option<i32> {
    let window = web_sys::window()?;
    let cb = Closure::wrap(Box::new(f) as Box<dyn FnMut()>);
    match window.set_interval_with_callback_and_timeout_and_arguments_0(
        cb.as_ref().unchecked_ref(),
        ms as i32,
    ) {
        Ok(id) => {
            cb.forget();
            Some(id)
        }
        Err(_) => {
            tracing::warn!(ms, "failed to start interval");
            None
        }
    }
}

pub(super) fn clear_interval(id: i32) {
    if let Some(w) = web_sys::window() {
        w.clear_interval_with_handle(id);
    }
}

/// One-shot timer. The closure frees itself after it runs.
pub(super) fn set_timeout(ms: u32, f: impl FnOnce() + 'static) -> Option<i32> {
    let window = web_sys::window()?;
    let cb = Closure::once_into_js(f);
    window
        .set_timeout_with_callback_and_timeout_and_arguments_0(cb.unchecked_ref(), ms as i32)
        .ok()
}

pub(super) fn clear_timeout(id: i32) {
    if let Some(w) = web_sys::window() {
        w.clear_timeout_with_handle(id);
    }
}

/// Attach a listener for the lifetime of the page.
pub(super) fn listen(
    target: &web_sys::EventTarget,
    event: &str,
    f: impl FnMut(web_sys::Event) + 'static,
) {
    let cb = Closure::wrap(Box::new(f) as Box<dyn FnMut(web_sys::Event)>);
    if target
        .add_event_listener_with_callback(event, cb.as_ref().unchecked_ref())
        .is_ok()
    {
        cb.forget();
    }
}
