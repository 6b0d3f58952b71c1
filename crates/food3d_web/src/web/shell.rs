use food3d::audio::AudioSettings;
use food3d::effects::{self, Particle, REVEAL_ROOT_MARGIN, REVEAL_THRESHOLD};
use food3d::guard::{self, SocialPrompt};
use food3d::notice::ToastLevel;
use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};

use super::search::SearchBox;
use super::{links, timers, Site};
use crate::ui_model::{Section, REVEAL_SELECTOR, SOCIAL_LINKS};

#[component]
pub(super) fn Navbar() -> impl IntoView {
    let site = expect_context::<Site>();
    let (menu_open, set_menu_open) = signal(false);

    view! {
        <nav class="navbar">
            <div class="nav-brand">"🍔 Food3D"</div>
            <button
                class="nav-toggle"
                title="Menu"
                on:click=move |_| set_menu_open.update(|o| *o = !*o)
            >
                "☰"
            </button>
            <ul class="nav-links" class:open=move || menu_open.get()>
                {Section::all()
                    .iter()
                    .copied()
                    .map(|s| {
                        view! {
                            <li>
                                <a
                                    href=format!("#{}", s.anchor())
                                    on:click=move |ev| {
                                        ev.prevent_default();
                                        set_menu_open.set(false);
                                        links::scroll_to_id(s.anchor());
                                    }
                                >
                                    {s.label()}
                                </a>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
            <SearchBox />
            <button
                class="mode-toggle"
                title=move || format!("Switch from {} mode", site.mode.get().as_str())
                on:click=move |_| site.mode.update(|m| *m = m.toggle())
            >
                {move || site.mode.get().icon()}
            </button>
            <button class="cart-btn" title="Cart" on:click=move |_| site.cart_open.set(true)>
                "🛒"
                <span class="cart-count">{move || site.cart.with(|c| c.count())}</span>
            </button>
        </nav>
    }
}

#[component]
pub(super) fn ToastStack() -> impl IntoView {
    let site = expect_context::<Site>();
    let toasts = site.toasts;

    view! {
        <div class="toast-stack" aria-live="polite" aria-relevant="additions removals">
            <For
                each=move || toasts.with(|q| q.toasts().to_vec())
                key=|t| t.id
                children=move |t| {
                    let id = t.id;
                    let class = match t.level {
                        ToastLevel::Info => "message-popup info",
                        ToastLevel::Success => "message-popup success",
                        ToastLevel::Error => "message-popup error",
                    };
                    view! {
                        <div class=class>
                            <span>{t.message}</span>
                            <button
                                class="toast-close"
                                title="Dismiss"
                                on:click=move |_| toasts.update(|q| q.dismiss(id))
                            >
                                "×"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}

/// Progress bar, back-to-top button and the floating mascot.
#[component]
pub(super) fn ScrollWidgets() -> impl IntoView {
    let progress = RwSignal::new(0.0f64);
    let back_to_top = RwSignal::new(false);
    let mascot_top = RwSignal::new(20.0f64);
    let mascot_centered = RwSignal::new(false);

    let on_scroll = move || {
        let (scroll_y, viewport, doc_height) = links::scroll_metrics();
        progress.set(effects::scroll_progress_percent(scroll_y, doc_height, viewport));
        back_to_top.set(effects::back_to_top_visible(scroll_y));
        mascot_top.set(effects::mascot_top_vh(scroll_y, viewport));
        mascot_centered.set(
            links::element_top("siteFooter")
                .map(|top| effects::mascot_centered(top, viewport))
                .unwrap_or(false),
        );
    };

    if let Some(w) = web_sys::window() {
        timers::listen(&w, "scroll", move |_| on_scroll());
    }

    view! {
        <div class="scroll-progress" style:width=move || format!("{:.1}%", progress.get())></div>
        <button
            id="backToTop"
            class="back-to-top"
            class:show=move || back_to_top.get()
            title="Back to top"
            on:click=move |_| links::scroll_to_top()
        >
            "⬆️"
        </button>
        <Mascot top_vh=mascot_top centered=mascot_centered />
    }
}

#[derive(Clone)]
struct Burst {
    id: u64,
    x: i32,
    y: i32,
    particles: Vec<Particle>,
}

#[component]
fn Mascot(top_vh: RwSignal<f64>, centered: RwSignal<bool>) -> impl IntoView {
    let site = expect_context::<Site>();
    let bursts = RwSignal::new(Vec::<Burst>::new());
    let excited = RwSignal::new(false);

    let on_click = move |ev: leptos::ev::MouseEvent| {
        let id = site.seed();
        let particles = site.with_rng(effects::burst);
        bursts.update(|b| {
            b.push(Burst {
                id,
                x: ev.client_x(),
                y: ev.client_y(),
                particles,
            })
        });
        excited.set(true);
        timers::set_timeout(300, move || excited.set(false));
        timers::set_timeout(effects::PARTICLE_MS, move || {
            bursts.update(|b| b.retain(|x| x.id != id))
        });
    };

    view! {
        <div
            id="floatingMascot"
            class="floating-mascot"
            class:centered=move || centered.get()
            class:excited=move || excited.get()
            style:top=move || {
                if centered.get() { "50vh".to_string() } else { format!("{:.1}vh", top_vh.get()) }
            }
            on:click=on_click
        >
            "🍔"
        </div>
        <For
            each=move || bursts.get()
            key=|b| b.id
            children=move |b| {
                b.particles
                    .into_iter()
                    .map(|p| {
                        view! {
                            <div
                                class="click-particle"
                                style=format!(
                                    "left:{}px;top:{}px;--dx:{:.1}px;--dy:{:.1}px;",
                                    b.x,
                                    b.y,
                                    p.dx,
                                    p.dy,
                                )
                            ></div>
                        }
                    })
                    .collect_view()
            }
        />
    }
}

#[component]
pub(super) fn ConfettiLayer() -> impl IntoView {
    let site = expect_context::<Site>();

    view! {
        <div class="confetti-layer">
            {move || {
                site.confetti
                    .get()
                    .into_iter()
                    .map(|b| {
                        view! {
                            <div
                                class="balloon"
                                style=format!(
                                    "left:{:.1}vw;background:hsl({:.0},80%,60%);--rise:-{:.0}px;",
                                    b.left_vw,
                                    b.hue,
                                    b.rise_px,
                                )
                            ></div>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}

/// Ripple on every `.btn-3d` click, drawn straight into the button.
#[component]
pub(super) fn ClickEffects() -> impl IntoView {
    if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
        let target_doc = doc.clone();
        timers::listen(&doc, "click", move |ev| {
            let Some(mouse) = ev.dyn_ref::<web_sys::MouseEvent>() else {
                return;
            };
            let Some(btn) = ev
                .target()
                .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
                .and_then(|el| el.closest(".btn-3d").ok().flatten())
            else {
                return;
            };
            let rect = btn.get_bounding_client_rect();
            let r = effects::ripple(
                f64::from(mouse.client_x()),
                f64::from(mouse.client_y()),
                rect.left(),
                rect.top(),
                rect.width(),
                rect.height(),
            );
            let Ok(circle) = target_doc.create_element("span") else {
                return;
            };
            circle.set_class_name("ripple");
            let _ = circle.set_attribute(
                "style",
                &format!(
                    "width:{0}px;height:{0}px;left:{1}px;top:{2}px;",
                    r.size, r.left, r.top
                ),
            );
            if btn.append_child(&circle).is_ok() {
                timers::set_timeout(effects::RIPPLE_MS, move || circle.remove());
            }
        });
    }
}

/// Swallows the context menu and copy shortcuts, with a short notice.
#[component]
pub(super) fn CopyGuard() -> impl IntoView {
    let visible = RwSignal::new(false);
    let hide_timer = StoredValue::new(None::<i32>);

    let show = move || {
        visible.set(true);
        if let Some(id) = hide_timer.get_value() {
            timers::clear_timeout(id);
        }
        hide_timer.set_value(timers::set_timeout(guard::COPY_PROTECTION_MS, move || {
            visible.set(false)
        }));
    };

    if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
        timers::listen(&doc, "contextmenu", move |ev| {
            ev.prevent_default();
            show();
        });
        timers::listen(&doc, "keydown", move |ev| {
            let Some(key) = ev.dyn_ref::<web_sys::KeyboardEvent>() else {
                return;
            };
            if guard::is_blocked_shortcut(key.ctrl_key(), &key.key()) {
                ev.prevent_default();
                show();
            }
        });
    }

    view! {
        <Show when=move || visible.get()>
            <div class="copy-protection-alert show">
                <div class="copy-alert-content">
                    <div class="copy-alert-icon">"🚫"</div>
                    <h4>{guard::COPY_PROTECTION_TITLE}</h4>
                    <p>{guard::COPY_PROTECTION_BODY}</p>
                    <button on:click=move |_| visible.set(false)>"OK"</button>
                </div>
            </div>
        </Show>
    }
}

#[component]
pub(super) fn Footer() -> impl IntoView {
    let prompt = RwSignal::new(SocialPrompt::default());

    view! {
        <footer id="siteFooter" class="footer">
            <section id="contactSection" class="contact">
                <h3>"Contact"</h3>
                <button class="btn-3d whatsapp" on:click=move |_| links::open_whatsapp()>
                    "💬 Order on WhatsApp"
                </button>
                <button class="btn-3d" on:click=move |_| links::open_maps()>
                    "📍 Directions"
                </button>
                <button class="btn-3d" on:click=move |_| links::share_page()>
                    "🔗 Share"
                </button>
            </section>
            <div class="social-links">
                {SOCIAL_LINKS
                    .iter()
                    .map(|&(label, icon, href)| {
                        view! {
                            <a
                                href=href
                                title=label
                                on:click=move |ev| {
                                    ev.prevent_default();
                                    prompt.update(|p| p.open(href));
                                }
                            >
                                {icon}
                            </a>
                        }
                    })
                    .collect_view()}
            </div>
            <p class="copyright">"© Food3D. All rights reserved."</p>
        </footer>
        <Show when=move || prompt.with(|p| p.is_open())>
            <div class="social-popup show" on:click=move |_| prompt.update(|p| p.cancel())>
                <div class="social-popup-content" on:click=|ev| ev.stop_propagation()>
                    <p>"You are about to leave Food3D. Continue?"</p>
                    <button
                        id="popupAllow"
                        on:click=move |_| {
                            let mut url = None;
                            prompt.update(|p| url = p.allow());
                            if let Some(url) = url {
                                links::open_in_new_tab(&url);
                            }
                        }
                    >
                        "Allow"
                    </button>
                    <button id="popupCancel" on:click=move |_| prompt.update(|p| p.cancel())>
                        "Cancel"
                    </button>
                </div>
            </div>
        </Show>
    }
}

#[component]
pub(super) fn AudioControls() -> impl IntoView {
    let site = expect_context::<Site>();
    let audio = RwSignal::new(AudioSettings::default());

    let announce = move |toggle: fn(&mut AudioSettings) -> &'static str| {
        let mut msg = "";
        audio.update(|a| msg = toggle(a));
        site.toast(ToastLevel::Info, msg);
    };

    view! {
        <div class="audio-controls">
            <button
                id="audioBtn"
                class="audio-btn"
                title="Audio options"
                on:click=move |_| audio.update(|a| a.toggle_menu())
            >
                {move || if audio.with(|a| a.music_enabled()) { "🔊" } else { "🔈" }}
            </button>
            <Show when=move || audio.with(|a| a.menu_open())>
                <div id="audioMenu" class="audio-menu">
                    <button on:click=move |_| announce(AudioSettings::toggle_music)>
                        "🎵 Background Music"
                    </button>
                    <button on:click=move |_| announce(AudioSettings::toggle_voice_navigation)>
                        "🎤 Voice Navigation"
                    </button>
                    <button on:click=move |_| announce(AudioSettings::toggle_audio_descriptions)>
                        "🔊 Audio Descriptions"
                    </button>
                </div>
            </Show>
        </div>
    }
}

#[component]
pub(super) fn SignatureBadge() -> impl IntoView {
    let badge = RwSignal::new(guard::SignatureBadge::default());

    if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
        timers::listen(&doc, "click", move |ev| {
            let inside = ev
                .target()
                .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
                .and_then(|el| el.closest("#signatureBadge").ok().flatten())
                .is_some();
            badge.update(|b| b.click(inside));
        });
    }

    view! {
        <div
            id="signatureBadge"
            class="signature-badge"
            class:active=move || badge.with(|b| b.is_active())
        >
            "⭐ Chef's Signature"
            <div id="signatureTooltip" class="signature-tooltip">
                "Every recipe is tasted and signed off by our head chef."
            </div>
        </div>
    }
}

/// Adds `visible` to sections and food cards the first time they scroll in.
#[component]
pub(super) fn ScrollReveal() -> impl IntoView {
    // The rest of the page mounts after this runs.
    timers::set_timeout(0, observe_reveal_targets);
}

fn observe_reveal_targets() {
    let Some(doc) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let cb = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: web_sys::IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<web_sys::IntersectionObserverEntry>() else {
                    continue;
                };
                if !entry.is_intersecting() {
                    continue;
                }
                let target = entry.target();
                observer.unobserve(&target);
                reveal(&target);
            }
        },
    ) as Box<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>);

    let Ok(nodes) = doc.query_selector_all(REVEAL_SELECTOR) else {
        return;
    };
    let targets = (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|n| n.dyn_into::<web_sys::Element>().ok());

    let opts = web_sys::IntersectionObserverInit::new();
    opts.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
    opts.set_root_margin(REVEAL_ROOT_MARGIN);
    match web_sys::IntersectionObserver::new_with_options(cb.as_ref().unchecked_ref(), &opts) {
        Ok(observer) => {
            cb.forget();
            for el in targets {
                observer.observe(&el);
            }
        }
        Err(_) => {
            tracing::warn!("IntersectionObserver unavailable, showing everything");
            for el in targets {
                let _ = el.class_list().add_1("visible");
            }
        }
    }
}

/// Food cards bring their siblings in one after another.
fn reveal(target: &web_sys::Element) {
    let siblings = target
        .class_list()
        .contains("food-card")
        .then(|| target.parent_element())
        .flatten()
        .map(|p| p.children());
    let Some(cards) = siblings else {
        let _ = target.class_list().add_1("visible");
        return;
    };
    for i in 0..cards.length() {
        if let Some(card) = cards.item(i) {
            timers::set_timeout(effects::reveal_delay_ms(i as usize), move || {
                let _ = card.class_list().add_1("visible");
            });
        }
    }
}
