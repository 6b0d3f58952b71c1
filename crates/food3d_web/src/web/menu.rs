use food3d::menu::{MenuSelection, SpecialMenu, EMPTY_SELECTION, SHEET_FILENAME};
use food3d::notice::ToastLevel;
use leptos::prelude::*;

use super::storage::LocalStorage;
use super::{files, Site};
use crate::ui_model::{self, MENU_ITEMS};

#[component]
pub(super) fn FoodMenu() -> impl IntoView {
    let site = expect_context::<Site>();
    let selection = RwSignal::new(MenuSelection::restore(&LocalStorage, ui_model::menu_values()));

    let on_done = move |_: leptos::ev::MouseEvent| {
        let Some(sheet) = selection.with_untracked(|s| s.sheet()) else {
            site.toast(ToastLevel::Error, EMPTY_SELECTION);
            return;
        };
        match files::download_text(SHEET_FILENAME, &sheet.render()) {
            Ok(()) => tracing::debug!(items = sheet.items.len(), "menu sheet downloaded"),
            Err(e) => {
                tracing::warn!(error = %e, "menu sheet download failed");
                site.toast(ToastLevel::Error, format!("Download failed: {e}"));
            }
        }
    };

    view! {
        <section id="foodmenuSection" class="food-menu-section">
            <h2>"Food Menu"</h2>
            <div class="menu-grid">
                {MENU_ITEMS
                    .iter()
                    .map(|item| {
                        let name = item.name;
                        view! {
                            <label class="menu-option">
                                <input
                                    type="checkbox"
                                    class="menu-checkbox"
                                    value=name
                                    prop:checked=move || selection.with(|s| s.is_checked(name))
                                    on:change=move |ev| {
                                        let checked = event_target_checked(&ev);
                                        selection
                                            .update(|s| {
                                                if let Err(e) = s.toggle(&LocalStorage, name, checked) {
                                                    tracing::warn!(error = %e, "menu selection not saved");
                                                }
                                            });
                                    }
                                />
                                <span class="menu-name">{name}</span>
                                <span class="menu-price">{item.price}</span>
                            </label>
                        }
                    })
                    .collect_view()}
            </div>
            <div class="selected-menu">
                <h3>"Selected Items"</h3>
                <ul id="selectedMenuList">
                    {move || {
                        selection
                            .with(|s| {
                                s.selected()
                                    .into_iter()
                                    .map(|n| n.to_string())
                                    .collect::<Vec<_>>()
                            })
                            .into_iter()
                            .map(|n| view! { <li>{n}</li> })
                            .collect_view()
                    }}
                </ul>
                <button id="menuDoneBtn" class="btn-3d" on:click=on_done>
                    "✅ Done"
                </button>
            </div>
            <div class="special-menus">
                {SpecialMenu::all()
                    .iter()
                    .copied()
                    .map(|m| {
                        view! {
                            <button
                                class="btn-3d special-menu-btn"
                                on:click=move |_| site.toast(ToastLevel::Info, m.coming_soon())
                            >
                                {m.label()}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
