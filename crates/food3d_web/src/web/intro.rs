use food3d::intro::{
    IntroFlow, IntroParticle, Language, PARTICLE_INTERVAL_MS, PARTICLE_LIFETIME_MS, VIDEO_FADE_MS,
};
use food3d::theme::Mode;
use leptos::prelude::*;

use super::storage::{self, LocalStorage};
use super::{timers, Site};

#[derive(Clone)]
struct LiveParticle {
    id: u64,
    particle: IntroParticle,
}

/// Video intro for first-time visitors, then the mode and language loader.
#[component]
pub(super) fn IntroOverlay() -> impl IntoView {
    let site = expect_context::<Site>();
    let flow = RwSignal::new(IntroFlow::start(&LocalStorage));
    let fading = RwSignal::new(false);
    let particles = RwSignal::new(Vec::<LiveParticle>::new());
    let next_id = StoredValue::new(0u64);
    let spawner = StoredValue::new(None::<i32>);

    Effect::new(move |_| {
        let covering = flow.with(|f| f.shows_video() || f.shows_loader());
        storage::lock_scroll(covering);
    });

    let hide_video = move || {
        if fading.get_untracked() || !flow.with_untracked(|f| f.shows_video()) {
            return;
        }
        fading.set(true);
        if let Some(id) = spawner.get_value() {
            timers::clear_interval(id);
            spawner.set_value(None);
        }
        timers::set_timeout(VIDEO_FADE_MS, move || {
            flow.update(|f| f.hide_video(&LocalStorage));
            particles.set(Vec::new());
            tracing::debug!("intro video hidden");
        });
    };

    let auto_hide = if flow.with_untracked(|f| f.shows_video()) {
        let auto_hide = timers::set_timeout(site.cfg(|c| c.intro_auto_hide_ms), hide_video);
        spawner.set_value(timers::set_interval(PARTICLE_INTERVAL_MS, move || {
            if fading.get_untracked() || !flow.with_untracked(|f| f.shows_video()) {
                return;
            }
            let particle = site.with_rng(|r| Some(IntroParticle::random(r)));
            let Some(particle) = particle else {
                return;
            };
            let id = next_id.get_value();
            next_id.set_value(id + 1);
            particles.update(|ps| ps.push(LiveParticle { id, particle }));
            timers::set_timeout(PARTICLE_LIFETIME_MS, move || {
                particles.try_update(|ps| ps.retain(|p| p.id != id));
            });
        }));
        auto_hide
    } else {
        None
    };
    on_cleanup(move || {
        if let Some(id) = auto_hide {
            timers::clear_timeout(id);
        }
        if let Some(id) = spawner.try_get_value().flatten() {
            timers::clear_interval(id);
        }
    });

    let choose_mode = move |mode: Mode| {
        let mut accepted = false;
        flow.update(|f| accepted = f.choose_mode(mode));
        if accepted {
            site.mode.set(mode);
        }
    };

    let choose_language = move |language: Language| {
        let mut accepted = false;
        flow.update(|f| accepted = f.choose_language(language));
        if accepted {
            storage::apply_language_to_document(language);
            tracing::info!(lang = language.code(), "intro finished");
        }
    };

    view! {
        <Show when=move || flow.with(|f| f.shows_video())>
            <div id="videoIntroOverlay" class="video-intro-overlay show" class:hidden=move || fading.get()>
                <div class="video-fallback-bg"></div>
                <video id="introVideo" autoplay muted playsinline>
                    <source src="intro.mp4" type="video/mp4" />
                </video>
                <button id="skipIntroBtn" class="skip-intro-btn" on:click=move |_| hide_video()>
                    "Skip Intro ⏭️"
                </button>
                <For each=move || particles.get() key=|p| p.id let:p>
                    <div
                        class="intro-particle"
                        style:left=format!("{}%", p.particle.left_percent)
                        style:animation-duration=format!("{}s", p.particle.duration_s)
                        style:opacity=p.particle.opacity.to_string()
                    >
                        {p.particle.emoji}
                    </div>
                </For>
            </div>
        </Show>
        <Show when=move || flow.with(|f| f.shows_loader())>
            <div id="loaderOverlay" class="loader-overlay">
                <div class="loader-content">
                    <h2>"Welcome to Food3D"</h2>
                    <Show
                        when=move || flow.with(|f| f.mode().is_none())
                        fallback=move || {
                            view! {
                                <div id="langSection" class="lang-section">
                                    <p>"Choose your language"</p>
                                    <button
                                        id="chooseEnglish"
                                        class="btn-3d"
                                        on:click=move |_| choose_language(Language::English)
                                    >
                                        "English"
                                    </button>
                                    <button
                                        id="chooseUrdu"
                                        class="btn-3d"
                                        on:click=move |_| choose_language(Language::Urdu)
                                    >
                                        "اردو"
                                    </button>
                                </div>
                            }
                        }
                    >
                        <div id="modeButtons" class="mode-buttons">
                            <p>"Choose your style"</p>
                            <button
                                id="chooseLight"
                                class="btn-3d"
                                on:click=move |_| choose_mode(Mode::Light)
                            >
                                "☀️ Light"
                            </button>
                            <button
                                id="chooseDark"
                                class="btn-3d"
                                on:click=move |_| choose_mode(Mode::Dark)
                            >
                                "🌙 Dark"
                            </button>
                        </div>
                    </Show>
                </div>
            </div>
        </Show>
    }
}
