use food3d::notice::ToastLevel;
use food3d::profile::{self, SaveOutcome, UserProfile};
use leptos::prelude::*;

use super::storage::LocalStorage;
use super::{timers, Site};

const FOOD_PREFERENCES: [&str; 5] = ["Pizza", "Burger", "Desi", "Desserts", "Drinks"];

#[component]
pub(super) fn LoyaltySection() -> impl IntoView {
    let site = expect_context::<Site>();
    let loyalty = site.loyalty;

    view! {
        <section id="loyaltySection" class="loyalty-section">
            <h2>"Loyalty Rewards"</h2>
            <div class="loyalty-card">
                <div class="loyalty-points">
                    <span id="userPoints">{move || loyalty.with(|l| l.points())}</span>
                    " points"
                </div>
                <div id="userLevel" class="loyalty-level">
                    {move || loyalty.with(|l| l.level_label())}
                </div>
                <div class="progress-bar">
                    <div
                        id="progressFill"
                        class="progress-fill"
                        style:width=move || format!("{:.1}%", loyalty.with(|l| l.progress_percent()))
                    ></div>
                </div>
                <ul id="rewardsList" class="rewards-list">
                    {move || {
                        loyalty
                            .with(|l| l.rewards())
                            .into_iter()
                            .map(|r| {
                                let locked = !r.available;
                                view! {
                                    <li class="reward-item" class:locked=locked>
                                        <span class="reward-icon">{r.icon}</span>
                                        <span>{r.text}</span>
                                    </li>
                                }
                            })
                            .collect_view()
                    }}
                </ul>
            </div>
            <ProfileForm />
        </section>
    }
}

#[component]
fn ProfileForm() -> impl IntoView {
    let site = expect_context::<Site>();
    let profile = RwSignal::new(UserProfile::load(&LocalStorage));

    let save = move |_: leptos::ev::MouseEvent| {
        match profile.with_untracked(|p| p.save(&LocalStorage)) {
            Ok(SaveOutcome::Saved) => site.toast(ToastLevel::Success, SaveOutcome::Saved.message()),
            Ok(outcome) => site.toast(ToastLevel::Error, outcome.message()),
            Err(e) => {
                tracing::warn!(error = %e, "profile not saved");
                site.toast(ToastLevel::Error, format!("Could not save profile: {e}"));
            }
        }
    };

    let claim_birthday = move |_: leptos::ev::MouseEvent| {
        let (month, day) = timers::today_month_day();
        let (points, message) = profile::claim_birthday_offer(&LocalStorage, month, day);
        site.toast(
            if points.is_some() { ToastLevel::Success } else { ToastLevel::Info },
            message,
        );
        if let Some(points) = points {
            site.celebrate();
            site.credit(points);
        }
    };

    view! {
        <div class="profile-form">
            <h3>"Your Profile"</h3>
            <input
                id="userName"
                type="text"
                placeholder="Name"
                prop:value=move || profile.with(|p| p.name.clone())
                on:input=move |ev| {
                    let v = event_target_value(&ev);
                    profile.update(|p| p.name = v);
                }
            />
            <input
                id="userEmail"
                type="email"
                placeholder="Email"
                prop:value=move || profile.with(|p| p.email.clone())
                on:input=move |ev| {
                    let v = event_target_value(&ev);
                    profile.update(|p| p.email = v);
                }
            />
            <select
                id="foodPreference"
                prop:value=move || profile.with(|p| p.food_preference.clone())
                on:change=move |ev| {
                    let v = event_target_value(&ev);
                    profile.update(|p| p.food_preference = v);
                }
            >
                <option value="">"Favourite food..."</option>
                {FOOD_PREFERENCES
                    .into_iter()
                    .map(|f| view! { <option value=f>{f}</option> })
                    .collect_view()}
            </select>
            <input
                id="userBirthday"
                type="date"
                prop:value=move || profile.with(|p| p.birthday.clone().unwrap_or_default())
                on:input=move |ev| {
                    let v = event_target_value(&ev);
                    profile.update(|p| p.birthday = (!v.is_empty()).then_some(v));
                }
            />
            <div class="profile-actions">
                <button class="btn-3d" on:click=save>
                    "💾 Save Profile"
                </button>
                <button class="btn-3d birthday-btn" on:click=claim_birthday>
                    "🎂 Claim Birthday Offer"
                </button>
            </div>
        </div>
    }
}
