use food3d::order::{self, OrderError, OrderForm, REDIRECT_SUCCESS_MESSAGE, SUCCESS_MESSAGE};
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::cart::start_order;
use super::{links, net, timers, Site};

const HOUSE_DEAL: &str = "Food3D Family Deal";

#[component]
pub(super) fn OrderSection() -> impl IntoView {
    let site = expect_context::<Site>();
    let form = RwSignal::new(OrderForm::default());
    let message = RwSignal::new(None::<String>);
    let sending = RwSignal::new(false);
    let hide_timer = StoredValue::new(None::<i32>);

    let flash = move |text: &str| {
        message.set(Some(text.to_string()));
        if let Some(id) = hide_timer.get_value() {
            timers::clear_timeout(id);
        }
        let ms = site.cfg(|c| c.form_message_ms);
        hide_timer.set_value(timers::set_timeout(ms, move || message.set(None)));
    };

    Effect::new(move |_| {
        let food = site.order_food.get();
        form.update(|f| f.food = food);
    });

    if order::is_success_hash(&links::location_hash()) {
        flash(REDIRECT_SUCCESS_MESSAGE);
        site.celebrate();
    }

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if sending.get_untracked() {
            return;
        }
        let snapshot = form.get_untracked();
        let endpoint = site.cfg(|c| c.form_endpoint.clone());
        sending.set(true);
        spawn_local(async move {
            let result = net::submit_order(&endpoint, &snapshot).await;
            sending.set(false);
            match result {
                Ok(()) => {
                    flash(SUCCESS_MESSAGE);
                    form.update(OrderForm::reset);
                    site.order_food.set(None);
                    site.celebrate();
                }
                Err(OrderError::Validation(field)) => {
                    tracing::debug!(field, "order form incomplete");
                    flash(&format!("Please enter your {field}."));
                }
                Err(e) => {
                    tracing::warn!(error = %e, "order failed");
                    flash(e.user_message());
                }
            }
        });
    };

    let bind = move |set: fn(&mut OrderForm, String)| {
        move |ev: leptos::ev::Event| {
            let v = event_target_value(&ev);
            form.update(|f| set(f, v));
        }
    };

    view! {
        <section id="ordernowSection" class="order-section">
            <h2>"Order Now"</h2>
            <button
                id="orderNowBtn"
                class="btn-3d"
                data-name=HOUSE_DEAL
                on:click=move |_| start_order(site, HOUSE_DEAL)
            >
                "🛍️ Order Now"
            </button>
            <Show when=move || form.with(|f| f.food.is_some())>
                <p id="orderFoodName" class="order-food-name">
                    {move || form.with(|f| f.ordering_label()).unwrap_or_default()}
                </p>
                <form id="orderForm" class="order-form" on:submit=on_submit>
                    <input
                        type="text"
                        name="name"
                        placeholder="Your name"
                        required
                        prop:value=move || form.with(|f| f.name.clone())
                        on:input=bind(|f, v| f.name = v)
                    />
                    <input
                        type="email"
                        name="email"
                        placeholder="Email"
                        required
                        prop:value=move || form.with(|f| f.email.clone())
                        on:input=bind(|f, v| f.email = v)
                    />
                    <input
                        type="tel"
                        name="phone"
                        placeholder="Phone"
                        prop:value=move || form.with(|f| f.phone.clone())
                        on:input=bind(|f, v| f.phone = v)
                    />
                    <textarea
                        name="details"
                        placeholder="Address and order details"
                        prop:value=move || form.with(|f| f.details.clone())
                        on:input=bind(|f, v| f.details = v)
                    ></textarea>
                    <button type="submit" class="btn-3d" disabled=move || sending.get()>
                        {move || if sending.get() { "Sending..." } else { "Place Order" }}
                    </button>
                </form>
            </Show>
            <Show when=move || message.with(|m| m.is_some())>
                <p id="formSuccessMsg" class="form-message">
                    {move || message.get().unwrap_or_default()}
                </p>
            </Show>
        </section>
    }
}
