use food3d::cart::Cart;
use food3d::config::SiteConfig;
use food3d::effects::{self, Balloon};
use food3d::loyalty::{points_message, Loyalty};
use food3d::notice::{ToastLevel, ToastQueue};
use food3d::prng::Prng;
use food3d::theme::Mode;
use leptos::prelude::*;

mod cart;
mod counter;
mod files;
mod games;
mod intro;
mod links;
mod loyalty;
mod menu;
mod net;
mod order;
mod promo;
mod search;
mod shell;
mod storage;
mod timers;

use cart::{CartModal, FoodCards};
use counter::VisitCounter;
use games::GamesSection;
use intro::IntroOverlay;
use loyalty::LoyaltySection;
use menu::FoodMenu;
use order::OrderSection;
use promo::{BannerCarousel, OfferCountdown, ReviewCarousel};
use shell::{
    AudioControls, ClickEffects, ConfettiLayer, CopyGuard, Footer, Navbar, ScrollReveal,
    ScrollWidgets, SignatureBadge, ToastStack,
};
use storage::LocalStorage;

pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    tracing::info!("food3d starting");
    mount_to_body(|| view! { <App /> });
}

/// Page-wide state shared through context.
#[derive(Clone, Copy)]
pub(crate) struct Site {
    pub(crate) config: StoredValue<SiteConfig>,
    rng: StoredValue<Prng>,
    pub(crate) toasts: RwSignal<ToastQueue>,
    pub(crate) loyalty: RwSignal<Loyalty>,
    pub(crate) cart: RwSignal<Cart>,
    pub(crate) cart_open: RwSignal<bool>,
    pub(crate) mode: RwSignal<Mode>,
    /// Food picked with an "Order Now" button.
    pub(crate) order_food: RwSignal<Option<String>>,
    pub(crate) confetti: RwSignal<Vec<Balloon>>,
    confetti_timer: StoredValue<Option<i32>>,
}

impl Site {
    fn new() -> Self {
        let seed = (js_sys::Math::random() * u64::MAX as f64) as u64 ^ timers::now_ms();
        Self {
            config: StoredValue::new(SiteConfig::default()),
            rng: StoredValue::new(Prng::new(seed)),
            toasts: RwSignal::new(ToastQueue::new()),
            loyalty: RwSignal::new(Loyalty::load(&LocalStorage)),
            cart: RwSignal::new(Cart::new()),
            cart_open: RwSignal::new(false),
            mode: RwSignal::new(Mode::load(&LocalStorage)),
            order_food: RwSignal::new(None),
            confetti: RwSignal::new(Vec::new()),
            confetti_timer: StoredValue::new(None),
        }
    }

    pub(crate) fn cfg<T>(&self, f: impl FnOnce(&SiteConfig) -> T) -> T {
        self.config.with_value(f)
    }

    /// Draw from the page PRNG. Yields the default once the app is torn down.
    pub(crate) fn with_rng<T: Default>(&self, f: impl FnOnce(&mut Prng) -> T) -> T {
        self.rng.try_update_value(f).unwrap_or_default()
    }

    pub(crate) fn seed(&self) -> u64 {
        self.with_rng(|r| r.next_u64())
    }

    pub(crate) fn toast(&self, level: ToastLevel, message: impl Into<String>) {
        let lifetime = self.cfg(|c| c.toast_lifetime_ms);
        let now = timers::now_ms();
        self.toasts
            .update(|q| {
                q.push(level, message, now, lifetime);
            });
        let toasts = self.toasts;
        timers::set_timeout(lifetime as u32, move || {
            toasts.update(|q| {
                q.expire(timers::now_ms());
            });
        });
    }

    /// Credit loyalty points, persist them and announce any promotion.
    pub(crate) fn credit(&self, amount: u32) {
        let mut ups = Vec::new();
        self.loyalty
            .update(|l| ups = l.credit(&LocalStorage, amount));
        self.toast(ToastLevel::Success, points_message(amount));
        for up in ups {
            self.toast(ToastLevel::Success, up.message());
        }
    }

    pub(crate) fn celebrate(&self) {
        let (_, viewport, _) = links::scroll_metrics();
        let balloons = self.with_rng(|r| effects::confetti(r, viewport as f32));
        self.confetti.set(balloons);
        // A new burst restarts the clear timer.
        if let Some(id) = self.confetti_timer.get_value() {
            timers::clear_timeout(id);
        }
        let confetti = self.confetti;
        self.confetti_timer.set_value(timers::set_timeout(effects::CONFETTI_MS, move || {
            confetti.set(Vec::new())
        }));
    }
}

#[component]
fn App() -> impl IntoView {
    let site = Site::new();
    provide_context(site);

    Effect::new(move |_| {
        let mode = site.mode.get();
        storage::apply_mode_to_document(mode);
        mode.save(&LocalStorage);
    });

    view! {
        <IntroOverlay />
        <ScrollWidgets />
        <Navbar />
        <AudioControls />
        <main>
            <BannerCarousel />
            <OfferCountdown />
            <section id="homeSection" class="hero">
                <h1>"Food3D"</h1>
                <p>"Fresh food, fast delivery, and a little fun on the side."</p>
                <SignatureBadge />
                <VisitCounter />
            </section>
            <section id="aboutsectionSection" class="about-section">
                <h2>"About Us"</h2>
                <p>"Food3D serves fast food and local favourites made fresh every day."</p>
                <button class="btn-3d" on:click=move |_| links::open_maps()>
                    "📍 Find us on the map"
                </button>
            </section>
            <FoodCards />
            <FoodMenu />
            <OrderSection />
            <GamesSection />
            <LoyaltySection />
            <ReviewCarousel />
        </main>
        <Footer />
        <CartModal />
        <ConfettiLayer />
        <ClickEffects />
        <CopyGuard />
        <ToastStack />
        <ScrollReveal />
    }
}
