use leptos::prelude::*;

use super::{links, storage, Site};
use crate::ui_model::{self, Section};

/// Open the order form for `food` and bring it into view.
pub(super) fn start_order(site: Site, food: &str) {
    site.order_food.set(Some(food.to_string()));
    links::scroll_to_id(Section::Order.anchor());
}

#[component]
pub(super) fn FoodCards() -> impl IntoView {
    let site = expect_context::<Site>();

    view! {
        <section class="food-cards">
            <h2>"Our Favourites"</h2>
            <div class="card-grid">
                {ui_model::food_cards()
                    .map(|entry| {
                        view! {
                            <div class="food-card" data-name=entry.name>
                                <h3>{entry.name}</h3>
                                <p>{entry.description}</p>
                                <span class="food-category">{entry.category}</span>
                                <div class="card-actions">
                                    <button
                                        class="btn-3d add-cart-btn"
                                        on:click=move |_| site.cart.update(|c| c.add(entry.name))
                                    >
                                        "Add to Cart"
                                    </button>
                                    <button
                                        class="btn-3d order-card-btn"
                                        on:click=move |_| start_order(site, entry.name)
                                    >
                                        "Order Now"
                                    </button>
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
pub(super) fn CartModal() -> impl IntoView {
    let site = expect_context::<Site>();
    let cart = site.cart;
    let open = site.cart_open;

    // Skip the first run so the intro overlay keeps its own lock.
    Effect::new(move |prev: Option<bool>| {
        let o = open.get();
        if prev.is_some() {
            storage::lock_scroll(o);
        }
        o
    });

    view! {
        <div class="cart-modal" class:active=move || open.get() on:click=move |_| open.set(false)>
            <div class="cart-content" on:click=|ev| ev.stop_propagation()>
                <div class="cart-header">
                    <h3>"Your Cart"</h3>
                    <button class="close-cart" on:click=move |_| open.set(false)>
                        "✖️"
                    </button>
                </div>
                <Show
                    when=move || !cart.with(|c| c.is_empty())
                    fallback=|| view! { <p class="cart-empty">"Your cart is empty."</p> }
                >
                    <ul class="cart-items">
                        {move || {
                            cart.get()
                                .items()
                                .iter()
                                .enumerate()
                                .map(|(i, item)| {
                                    view! {
                                        <li>
                                            <span>{item.clone()}</span>
                                            <button
                                                class="remove-item"
                                                title="Remove"
                                                on:click=move |_| {
                                                    cart.update(|c| {
                                                        c.remove(i);
                                                    })
                                                }
                                            >
                                                "🗑️"
                                            </button>
                                        </li>
                                    }
                                })
                                .collect_view()
                        }}
                    </ul>
                </Show>
                <p class="cart-total">
                    "Items: "
                    <span>{move || cart.with(|c| c.count())}</span>
                </p>
            </div>
        </div>
    }
}
