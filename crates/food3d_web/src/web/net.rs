use food3d::order::{interpret_response, OrderError, OrderForm};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

/// Post the order form once. No retries.
pub(super) async fn submit_order(endpoint: &str, form: &OrderForm) -> Result<(), OrderError> {
    form.validate()?;
    let window = web_sys::window().ok_or_else(|| OrderError::Network("no window".into()))?;

    let body = web_sys::FormData::new()
        .map_err(|_| OrderError::Network("FormData::new failed".into()))?;
    for (name, value) in form.fields() {
        body.append_with_str(name, &value)
            .map_err(|_| OrderError::Network("FormData append failed".into()))?;
    }

    let init = web_sys::RequestInit::new();
    init.set_method("POST");
    init.set_body(&body.into());
    let request = web_sys::Request::new_with_str_and_init(endpoint, &init)
        .map_err(|_| OrderError::Network("bad request".into()))?;
    request
        .headers()
        .set("Accept", "application/json")
        .map_err(|_| OrderError::Network("bad header".into()))?;

    let resp = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| OrderError::Network(format!("{e:?}")))?
        .dyn_into::<web_sys::Response>()
        .map_err(|_| OrderError::Network("expected Response".into()))?;

    let status = resp.status();
    let text = match resp.text() {
        Ok(p) => JsFuture::from(p)
            .await
            .ok()
            .and_then(|v| v.as_string())
            .unwrap_or_default(),
        Err(_) => String::new(),
    };
    interpret_response(status, &text)
}
