use food3d::games::memory::{self, CardFace, FlipOutcome, MemoryGame};
use food3d::games::quiz::QuizGame;
use food3d::games::wheel::{self, SpinWheel, WheelResult, PRIZES, SEGMENT_DEG};
use food3d::notice::ToastLevel;
use leptos::prelude::*;

use super::{timers, Site};
use crate::ui_model::GameKind;

const QUIZ_STEP_MS: u32 = 1000;
const MISMATCH_MS: u32 = 1000;
const WIN_DELAY_MS: u32 = 500;
const REWARD_DELAY_MS: u32 = 1000;

#[component]
pub(super) fn GamesSection() -> impl IntoView {
    let open = RwSignal::new(None::<GameKind>);
    let close = Callback::new(move |()| open.set(None));

    view! {
        <section id="gamesSection" class="games-section">
            <h2>"Play & Win"</h2>
            <div class="games-grid">
                {GameKind::all()
                    .iter()
                    .copied()
                    .map(|kind| {
                        view! {
                            <div class="game-card">
                                <div class="game-icon">{kind.icon()}</div>
                                <h3>{kind.label()}</h3>
                                <p>{kind.description()}</p>
                                <button class="btn-3d" on:click=move |_| open.set(Some(kind))>
                                    "Play"
                                </button>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
        {move || match open.get() {
            Some(GameKind::Quiz) => view! { <QuizModal close=close /> }.into_any(),
            Some(GameKind::Memory) => view! { <MemoryModal close=close /> }.into_any(),
            Some(GameKind::Wheel) => view! { <WheelModal close=close /> }.into_any(),
            None => ().into_any(),
        }}
    }
}

#[component]
fn GameHeader(title: Signal<String>, close: Callback<()>) -> impl IntoView {
    view! {
        <div class="game-header">
            <h3>{move || title.get()}</h3>
            <button class="cancel-game-btn" on:click=move |_| close.run(())>
                "✖️"
            </button>
        </div>
    }
}

#[component]
fn QuizModal(close: Callback<()>) -> impl IntoView {
    let site = expect_context::<Site>();
    let game = RwSignal::new(QuizGame::new());
    // Options stay locked while the verdict is on screen.
    let locked = RwSignal::new(false);

    let title = Signal::derive(move || {
        let (n, total) = game.with(|g| g.position());
        format!("Question {n}/{total}")
    });

    let answer = move |option: &'static str| {
        if locked.get_untracked() {
            return;
        }
        let mut verdict = None;
        game.update(|g| verdict = g.answer(option));
        let Some(verdict) = verdict else {
            return;
        };
        site.toast(ToastLevel::Info, verdict.message());
        locked.set(true);
        // The modal may close first. `try_set` hands the value back once its
        // signals are disposed.
        timers::set_timeout(QUIZ_STEP_MS, move || {
            if locked.try_set(false).is_some() {
                return;
            }
            if let Some(msg) = game.try_with_untracked(|g| g.final_message()).flatten() {
                site.toast(ToastLevel::Success, msg);
                close.run(());
            }
        });
    };

    view! {
        <div class="quiz-modal">
            <div class="quiz-content">
                <GameHeader title=title close=close />
                {move || {
                    let hide = locked.get();
                    game.with(|g| g.current_question().cloned())
                        .filter(|_| !hide)
                        .map(|q| {
                            view! {
                                <p>{q.question}</p>
                                <div class="quiz-options">
                                    {q
                                        .options
                                        .into_iter()
                                        .map(|option| {
                                            view! {
                                                <button
                                                    class="quiz-option"
                                                    on:click=move |_| answer(option)
                                                >
                                                    {option}
                                                </button>
                                            }
                                        })
                                        .collect_view()}
                                </div>
                            }
                        })
                }}
                <p>"Score: " {move || game.with(|g| g.score())}</p>
            </div>
        </div>
    }
}

#[component]
fn MemoryModal(close: Callback<()>) -> impl IntoView {
    let site = expect_context::<Site>();
    let game = RwSignal::new(MemoryGame::new(site.seed()));

    let flip = move |index: usize| {
        let mut outcome = FlipOutcome::Ignored;
        game.update(|g| outcome = g.flip(index));
        match outcome {
            FlipOutcome::Mismatch { .. } => {
                timers::set_timeout(MISMATCH_MS, move || {
                    game.try_update(|g| g.hide_mismatch());
                });
            }
            FlipOutcome::Matched { won: true } => {
                let reward = game.with_untracked(|g| g.reward());
                timers::set_timeout(WIN_DELAY_MS, move || {
                    site.toast(ToastLevel::Success, memory::WIN_MESSAGE);
                    if let Some(reward) = reward {
                        site.credit(reward.points);
                    }
                    close.run(());
                });
            }
            FlipOutcome::Matched { won: false } | FlipOutcome::FirstUp | FlipOutcome::Ignored => {}
        }
    };

    view! {
        <div class="memory-modal">
            <div class="memory-content">
                <GameHeader title=Signal::derive(|| "Memory Match Game".to_string()) close=close />
                <div class="memory-grid">
                    {move || {
                        game.with(|g| g.cards().to_vec())
                            .into_iter()
                            .enumerate()
                            .map(|(i, card)| {
                                let flipped = card.face == CardFace::Up;
                                let matched = card.face == CardFace::Matched;
                                view! {
                                    <div
                                        class="memory-card"
                                        class:flipped=flipped
                                        class:matched=matched
                                        data-index=i.to_string()
                                        on:click=move |_| flip(i)
                                    >
                                        <span class="card-back">"❓"</span>
                                        <span class="card-front">{card.food}</span>
                                    </div>
                                }
                            })
                            .collect_view()
                    }}
                </div>
                <div class="game-stats">
                    <p>
                        "Matched: " {move || game.with(|g| g.matched_pairs())} "/"
                        {move || game.with(|g| g.total_pairs())}
                    </p>
                    <p>"Moves: " {move || game.with(|g| g.moves())}</p>
                </div>
            </div>
        </div>
    }
}

#[component]
fn WheelModal(close: Callback<()>) -> impl IntoView {
    let site = expect_context::<Site>();
    let wheel_state = RwSignal::new(SpinWheel::new(site.seed()));
    let rotation = RwSignal::new(0.0f32);
    let result = RwSignal::new(None::<WheelResult>);

    let spin = move |_: leptos::ev::MouseEvent| {
        let mut started = None;
        wheel_state.update(|w| started = w.spin());
        let Some(spin) = started else {
            return;
        };
        result.set(None);
        rotation.set(spin.total_rotation_deg);
        timers::set_timeout(wheel::SPIN_MS, move || {
            let Some(won) = wheel_state.try_update(|w| w.settle()).flatten() else {
                return;
            };
            result.try_set(Some(won.clone()));
            timers::set_timeout(REWARD_DELAY_MS, move || {
                site.toast(ToastLevel::Success, won.message());
                site.credit(won.reward.points);
            });
        });
    };

    view! {
        <div class="wheel-modal">
            <div class="wheel-content">
                <GameHeader title=Signal::derive(|| "Spin & Win!".to_string()) close=close />
                <div
                    id="wheel"
                    class="wheel"
                    class:spinning=move || wheel_state.with(|w| w.is_spinning())
                    style:transform=move || format!("rotate({}deg)", rotation.get())
                >
                    {PRIZES
                        .iter()
                        .enumerate()
                        .map(|(i, prize)| {
                            view! {
                                <div
                                    class="wheel-segment"
                                    style=format!("transform: rotate({}deg)", i as f32 * SEGMENT_DEG)
                                >
                                    <span>{*prize}</span>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
                <button
                    class="spin-btn"
                    disabled=move || wheel_state.with(|w| w.is_spinning())
                    on:click=spin
                >
                    {move || if wheel_state.with(|w| w.is_spinning()) { "Spinning..." } else { "SPIN!" }}
                </button>
                <Show when=move || result.with(|r| r.is_some())>
                    <div class="wheel-result" id="wheelResult">
                        <h4>"🎉 You Won!"</h4>
                        <p id="prizeText">{move || result.get().map(|r| r.prize).unwrap_or_default()}</p>
                        <button
                            class="claim-prize-btn"
                            on:click=move |_| {
                                site.toast(ToastLevel::Success, wheel::CLAIM_MESSAGE);
                                close.run(());
                            }
                        >
                            "Claim Prize"
                        </button>
                    </div>
                </Show>
            </div>
        </div>
    }
}
