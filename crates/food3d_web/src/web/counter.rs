use food3d::visitors::{self, ViewCounter, ViewData, VisitSnapshot};
use leptos::prelude::*;

use super::storage::LocalStorage;
use super::{timers, Site};

const PULSE_MS: u32 = 150;
const WELCOME_DELAY_MS: u32 = 1000;
const WELCOME_VISIBLE_MS: u32 = 3000;

#[derive(Debug, Clone)]
struct DetailStats {
    total_views: u64,
    active: usize,
    visit_number: usize,
    updated: String,
}

/// Swap in the new value after a short pulse, but only if it changed.
fn animate(text: RwSignal<String>, pulse: RwSignal<bool>, value: u64) {
    if !text.with_untracked(|t| visitors::display_changed(t, value)) {
        return;
    }
    pulse.set(true);
    timers::set_timeout(PULSE_MS, move || {
        text.set(value.to_string());
        pulse.set(false);
    });
}

#[component]
pub(super) fn VisitCounter() -> impl IntoView {
    let site = expect_context::<Site>();
    let counter = site.cfg(ViewCounter::new);
    let (refresh_ms, debounce_ms) = site.cfg(|c| (c.counter_refresh_ms, c.activity_debounce_ms));

    let visitor = StoredValue::new(
        site.with_rng(|r| visitors::visitor_id(&LocalStorage, timers::now_ms(), r)),
    );

    let total_text = RwSignal::new("0".to_string());
    let active_text = RwSignal::new("0".to_string());
    let pulse_total = RwSignal::new(false);
    let pulse_active = RwSignal::new(false);
    let snapshot = RwSignal::new(None::<VisitSnapshot>);
    let last_update = RwSignal::new(String::new());
    let details = RwSignal::new(None::<DetailStats>);
    let welcome = RwSignal::new(None::<String>);

    // Decide on the welcome before this visit lands in the map.
    let before = ViewData::load(&LocalStorage);
    if visitor.with_value(|id| before.is_new_visitor(id)) {
        let msg = before.welcome_message();
        timers::set_timeout(WELCOME_DELAY_MS, move || {
            welcome.set(Some(msg));
            timers::set_timeout(WELCOME_VISIBLE_MS, move || welcome.set(None));
        });
    }

    let refresh = move || {
        let now = timers::now_ms();
        match visitor.with_value(|id| counter.record_visit(&LocalStorage, id, now)) {
            Ok(snap) => {
                animate(total_text, pulse_total, snap.total_views);
                animate(active_text, pulse_active, snap.active_visitors as u64);
                snapshot.set(Some(snap));
                last_update.set(timers::local_time_string());
            }
            Err(e) => tracing::warn!(error = %e, "view counter not updated"),
        }
    };

    refresh();
    let interval = timers::set_interval(refresh_ms, refresh);
    on_cleanup(move || {
        if let Some(id) = interval {
            timers::clear_interval(id);
        }
    });

    if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
        let vis_doc = doc.clone();
        timers::listen(&doc, "visibilitychange", move |_| {
            if !vis_doc.hidden() {
                refresh();
            }
        });

        let pending = StoredValue::new(None::<i32>);
        for event in ["mousemove", "click", "scroll", "keypress"] {
            timers::listen(&doc, event, move |_| {
                if let Some(id) = pending.get_value() {
                    timers::clear_timeout(id);
                }
                pending.set_value(timers::set_timeout(debounce_ms, refresh));
            });
        }
    }

    let open_details = move |_: leptos::ev::MouseEvent| {
        let data = ViewData::load(&LocalStorage);
        details.set(Some(DetailStats {
            total_views: data.total_views,
            active: data.active_visitors(),
            visit_number: visitor.with_value(|id| data.popup_visitor_number(id)),
            updated: timers::local_date_time_string(),
        }));
    };

    view! {
        <div id="viewCounter" class="view-counter" on:click=open_details>
            <span class="counter-item">
                "👁️ "
                <span id="totalViews" class:pulse=move || pulse_total.get()>
                    {move || total_text.get()}
                </span>
            </span>
            <span class="counter-item">
                "🟢 "
                <span id="activeUsers" class:pulse=move || pulse_active.get()>
                    {move || active_text.get()}
                </span>
            </span>
            <div class="view-tooltip">
                <div>
                    "Total Views: "
                    {move || snapshot.get().map(|s| s.total_views).unwrap_or(0)}
                </div>
                <div>
                    "Active Users: "
                    {move || snapshot.get().map(|s| s.active_visitors).unwrap_or(0)}
                </div>
                <div>
                    "Your Visitor #: "
                    {move || snapshot.get().map(|s| s.visitor_number).unwrap_or(0)}
                </div>
                <div>"Last Update: " {move || last_update.get()}</div>
            </div>
        </div>
        <Show when=move || welcome.with(|w| w.is_some())>
            <div class="welcome-message show">
                <div class="welcome-content">
                    <span class="welcome-icon">"👋"</span>
                    <span>{move || welcome.get().unwrap_or_default()}</span>
                </div>
            </div>
        </Show>
        <Show when=move || details.with(|d| d.is_some())>
            <div class="view-details-popup show" on:click=move |_| details.set(None)>
                <div class="popup-content" on:click=|ev| ev.stop_propagation()>
                    <div class="popup-header">
                        <span class="popup-icon">"📊"</span>
                        <h3>"Detailed View Statistics"</h3>
                        <button class="popup-close" on:click=move |_| details.set(None)>
                            "✖️"
                        </button>
                    </div>
                    {move || {
                        details
                            .get()
                            .map(|d| {
                                view! {
                                    <div class="popup-body">
                                        <StatRow title="Total Views:" value=d.total_views.to_string() />
                                        <StatRow title="Currently Active:" value=d.active.to_string() />
                                        <StatRow title="Your Visit Number:" value=d.visit_number.to_string() />
                                        <StatRow title="Last Updated:" value=d.updated />
                                        <StatRow title="Data Source:" value="Local Storage".to_string() />
                                    </div>
                                }
                            })
                    }}
                </div>
            </div>
        </Show>
    }
}

#[component]
fn StatRow(title: &'static str, value: String) -> impl IntoView {
    view! {
        <div class="stat-row">
            <span class="stat-title">{title}</span>
            <span class="stat-number">{value}</span>
        </div>
    }
}
