//! First-visit intro video and the mode/language loader that follows it.

use tracing::warn;

use crate::prng::Prng;
use crate::storage::{self, keys, KeyValueStore};
use crate::theme::Mode;

pub const PARTICLE_FOODS: [&str; 8] = ["🍕", "🍔", "🍟", "🌭", "🌮", "🍦", "🍩", "🥤"];
pub const PARTICLE_INTERVAL_MS: u32 = 800;
pub const PARTICLE_LIFETIME_MS: u32 = 5000;
/// Fade-out of the video overlay before the loader is shown.
pub const VIDEO_FADE_MS: u32 = 800;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    English,
    Urdu,
}

impl Language {
    pub fn code(self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Urdu => "ur",
        }
    }

    pub fn is_rtl(self) -> bool {
        matches!(self, Language::Urdu)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntroStage {
    Video,
    ChooseMode,
    ChooseLanguage,
    Done,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntroFlow {
    stage: IntroStage,
    mode: Option<Mode>,
    language: Option<Language>,
}

impl IntroFlow {
    /// Returning visitors skip straight to the loader.
    pub fn start(store: &impl KeyValueStore) -> Self {
        let seen = storage::get_string(store, keys::INTRO_SEEN).is_some();
        Self {
            stage: if seen {
                IntroStage::ChooseMode
            } else {
                IntroStage::Video
            },
            mode: None,
            language: None,
        }
    }

    pub fn stage(&self) -> IntroStage {
        self.stage
    }

    pub fn mode(&self) -> Option<Mode> {
        self.mode
    }

    pub fn language(&self) -> Option<Language> {
        self.language
    }

    /// Skip button or auto-hide timer. Marks the intro as seen.
    pub fn hide_video(&mut self, store: &impl KeyValueStore) {
        if self.stage != IntroStage::Video {
            return;
        }
        if let Err(e) = store.set(keys::INTRO_SEEN, "true") {
            warn!(error = %e, "could not persist intro-seen flag");
        }
        self.stage = IntroStage::ChooseMode;
    }

    pub fn choose_mode(&mut self, mode: Mode) -> bool {
        if self.stage != IntroStage::ChooseMode {
            return false;
        }
        self.mode = Some(mode);
        self.stage = IntroStage::ChooseLanguage;
        true
    }

    pub fn choose_language(&mut self, language: Language) -> bool {
        if self.stage != IntroStage::ChooseLanguage {
            return false;
        }
        self.language = Some(language);
        self.stage = IntroStage::Done;
        true
    }

    pub fn shows_video(&self) -> bool {
        self.stage == IntroStage::Video
    }

    /// The loader covers the page and blocks scrolling until a language is picked.
    pub fn shows_loader(&self) -> bool {
        matches!(
            self.stage,
            IntroStage::ChooseMode | IntroStage::ChooseLanguage
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct IntroParticle {
    pub emoji: &'static str,
    pub left_percent: f32,
    pub duration_s: f32,
    pub opacity: f32,
}

impl IntroParticle {
    pub fn random(rng: &mut Prng) -> Self {
        Self {
            emoji: PARTICLE_FOODS[rng.gen_range_usize(0, PARTICLE_FOODS.len())],
            left_percent: rng.gen_range_f32(0.0, 100.0),
            duration_s: rng.gen_range_f32(2.0, 5.0),
            opacity: rng.gen_range_f32(0.3, 0.8),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn first_visit_walks_every_stage() {
        let store = MemoryStore::new();
        let mut flow = IntroFlow::start(&store);
        assert!(flow.shows_video());
        assert!(!flow.choose_mode(Mode::Dark));

        flow.hide_video(&store);
        assert!(flow.shows_loader());
        assert!(flow.choose_mode(Mode::Dark));
        assert_eq!(flow.stage(), IntroStage::ChooseLanguage);
        assert!(flow.choose_language(Language::Urdu));
        assert_eq!(flow.stage(), IntroStage::Done);
        assert!(flow.language().is_some_and(Language::is_rtl));
        assert_eq!(flow.mode(), Some(Mode::Dark));
    }

    #[test]
    fn returning_visitor_skips_the_video() {
        let store = MemoryStore::new();
        IntroFlow::start(&store).hide_video(&store);
        let flow = IntroFlow::start(&store);
        assert_eq!(flow.stage(), IntroStage::ChooseMode);
    }

    #[test]
    fn hiding_twice_is_harmless() {
        let store = MemoryStore::new();
        let mut flow = IntroFlow::start(&store);
        flow.hide_video(&store);
        flow.choose_mode(Mode::Light);
        flow.hide_video(&store);
        assert_eq!(flow.stage(), IntroStage::ChooseLanguage);
    }

    #[test]
    fn particles_stay_in_range() {
        let mut rng = Prng::new(5);
        for _ in 0..200 {
            let p = IntroParticle::random(&mut rng);
            assert!(PARTICLE_FOODS.contains(&p.emoji));
            assert!((0.0..100.0).contains(&p.left_percent));
            assert!((2.0..5.0).contains(&p.duration_s));
            assert!((0.3..0.8).contains(&p.opacity));
        }
    }
}
