use food3d::search::{self, CatalogEntry, SearchOutcome, NO_RESULTS_HINT};
use leptos::ev::KeyboardEvent;
use leptos::prelude::*;

use super::{links, timers, Site};

#[component]
pub(super) fn SearchBox() -> impl IntoView {
    let site = expect_context::<Site>();
    let query = RwSignal::new(String::new());
    let suggestions = RwSignal::new(Vec::<&'static CatalogEntry>::new());
    let results = RwSignal::new(None::<(String, SearchOutcome)>);
    let debounce = StoredValue::new(None::<i32>);

    let cancel_pending = move || {
        if let Some(id) = debounce.get_value() {
            timers::clear_timeout(id);
            debounce.set_value(None);
        }
    };

    let run_search = move |q: String| {
        cancel_pending();
        suggestions.set(Vec::new());
        if let Some(outcome) = search::search(&q) {
            tracing::debug!(query = %q, "search");
            results.set(Some((q, outcome)));
        }
    };

    let on_input = move |ev: leptos::ev::Event| {
        let q = event_target_value(&ev);
        query.set(q.clone());
        cancel_pending();
        let (wait, min_chars, limit) =
            site.cfg(|c| (c.search_debounce_ms, c.suggestion_min_chars, c.suggestion_limit));
        if !search::wants_suggestions(&q, min_chars) {
            suggestions.set(Vec::new());
            return;
        }
        debounce.set_value(timers::set_timeout(wait, move || {
            suggestions.set(search::suggestions(&q, min_chars, limit));
        }));
    };

    view! {
        <div class="search-container">
            <input
                type="search"
                class="search-input"
                placeholder="Search food or sections..."
                prop:value=move || query.get()
                on:input=on_input
                on:keydown=move |ev: KeyboardEvent| {
                    if ev.key() == "Enter" {
                        ev.prevent_default();
                        run_search(query.get_untracked());
                    }
                }
            />
            <button class="search-btn" on:click=move |_| run_search(query.get_untracked())>
                "🔍"
            </button>
            <Show when=move || !suggestions.with(|s| s.is_empty())>
                <div class="search-suggestions show">
                    {move || {
                        suggestions
                            .get()
                            .into_iter()
                            .map(|entry| {
                                view! {
                                    <div
                                        class="suggestion-item"
                                        on:click=move |_| {
                                            query.set(entry.name.to_string());
                                            run_search(entry.name.to_string());
                                        }
                                    >
                                        <span class="suggestion-icon">{entry.kind.icon()}</span>
                                        <span class="suggestion-text">{entry.name}</span>
                                    </div>
                                }
                            })
                            .collect_view()
                    }}
                </div>
            </Show>
        </div>
        <SearchModal results=results />
    }
}

#[component]
fn SearchModal(results: RwSignal<Option<(String, SearchOutcome)>>) -> impl IntoView {
    let close = move || results.set(None);

    view! {
        <Show when=move || results.with(|r| r.is_some())>
            <div class="search-modal show" on:click=move |_| close()>
                <div class="search-modal-content" on:click=|ev| ev.stop_propagation()>
                    {move || {
                        let Some((query, outcome)) = results.get() else {
                            return ().into_any();
                        };
                        let heading = outcome.heading(&query);
                        let body = match outcome {
                            SearchOutcome::Results(entries) => {
                                entries
                                    .into_iter()
                                    .map(|entry| {
                                        view! {
                                            <div
                                                class="search-result-item"
                                                on:click=move |_| {
                                                    close();
                                                    links::navigate(&search::navigation_target(entry));
                                                }
                                            >
                                                <div class="result-icon">{entry.kind.icon()}</div>
                                                <div class="result-content">
                                                    <div class="result-title">{entry.name}</div>
                                                    <div class="result-description">
                                                        {entry.description}
                                                    </div>
                                                    <div class="result-category">{entry.category}</div>
                                                </div>
                                            </div>
                                        }
                                    })
                                    .collect_view()
                                    .into_any()
                            }
                            SearchOutcome::NoResults => {
                                view! {
                                    <div class="no-results">
                                        <div class="no-results-icon">"🔍"</div>
                                        <p>{format!("No results found for \"{query}\"")}</p>
                                        <p>{NO_RESULTS_HINT}</p>
                                    </div>
                                }
                                    .into_any()
                            }
                        };
                        view! {
                            <div class="search-modal-header">
                                <h3>{heading}</h3>
                                <button class="search-modal-close" on:click=move |_| close()>
                                    "✖️"
                                </button>
                            </div>
                            <div class="search-modal-body">{body}</div>
                        }
                            .into_any()
                    }}
                </div>
            </div>
        </Show>
    }
}
