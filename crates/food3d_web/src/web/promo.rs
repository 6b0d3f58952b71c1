use food3d::carousel::{Carousel, REVIEWS};
use food3d::countdown::{Countdown, Tick};
use leptos::prelude::*;

use super::{timers, Site};
use crate::ui_model::BANNER_SLIDES;

const COUNTDOWN_TICK_MS: u32 = 1000;

/// Advance `carousel` every `ms` until the owning component is dropped.
fn rotate(carousel: RwSignal<Carousel>, ms: u32) {
    let handle = timers::set_interval(ms, move || {
        carousel.update(|c| {
            c.next();
        });
    });
    on_cleanup(move || {
        if let Some(id) = handle {
            timers::clear_interval(id);
        }
    });
}

#[component]
pub(super) fn BannerCarousel() -> impl IntoView {
    let site = expect_context::<Site>();
    let carousel = RwSignal::new(Carousel::new(BANNER_SLIDES.len()));
    rotate(carousel, site.cfg(|c| c.banner_interval_ms));

    view! {
        <div class="banner-carousel">
            <div id="carouselTrack" class="carousel-track">
                {BANNER_SLIDES
                    .iter()
                    .enumerate()
                    .map(|(i, slide)| {
                        view! {
                            <div
                                class="carousel-slide"
                                class:active=move || carousel.with(|c| c.is_active(i))
                            >
                                {*slide}
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

/// The 70% OFF banner. Hidden for good once the deadline passes.
#[component]
pub(super) fn OfferCountdown() -> impl IntoView {
    let site = expect_context::<Site>();
    let countdown = Countdown::starting_at(timers::now_ms(), site.cfg(|c| c.offer_duration_ms));
    let tick = RwSignal::new(countdown.tick(timers::now_ms()));
    let handle = StoredValue::new(None::<i32>);

    if tick.with_untracked(|t| *t != Tick::Expired) {
        handle.set_value(timers::set_interval(COUNTDOWN_TICK_MS, move || {
            let next = countdown.tick(timers::now_ms());
            if next == Tick::Expired {
                tracing::info!("offer expired");
                if let Some(id) = handle.try_get_value().flatten() {
                    timers::clear_interval(id);
                }
            }
            tick.set(next);
        }));
    }
    on_cleanup(move || {
        if let Some(id) = handle.try_get_value().flatten() {
            timers::clear_interval(id);
        }
    });

    view! {
        <Show when=move || tick.with(|t| *t != Tick::Expired)>
            <div class="offer-banner">
                <div id="offerTimer" class="offer-timer">
                    <span class="offer-label">"🔥 70% OFF ends in "</span>
                    <span id="timerCountdown">{move || tick.with(|t| t.display().to_string())}</span>
                </div>
            </div>
        </Show>
    }
}

#[component]
pub(super) fn ReviewCarousel() -> impl IntoView {
    let site = expect_context::<Site>();
    let carousel = RwSignal::new(Carousel::new(REVIEWS.len()));
    rotate(carousel, site.cfg(|c| c.review_interval_ms));

    view! {
        <section id="customerreviewsSection" class="reviews-section">
            <h2>"Customer Reviews"</h2>
            <div id="reviewCarousel" class="review-carousel">
                {move || {
                    let review = REVIEWS[carousel.with(|c| c.current())];
                    view! {
                        <div class="review-card active">
                            <div class="review-stars">{review.star_line()}</div>
                            <p class="review-text">{review.text}</p>
                            <div class="review-author">{review.byline()}</div>
                        </div>
                    }
                }}
            </div>
        </section>
    }
}
