//! Audio controls menu. Nothing actually plays; each toggle reports the
//! message the page shows for it.

pub const MUSIC_ENABLED: &str = "🎵 Background music enabled!";
pub const MUSIC_DISABLED: &str = "🔇 Background music disabled!";
pub const VOICE_NAVIGATION_TOGGLED: &str = "🎤 Voice navigation toggled!";
pub const AUDIO_DESCRIPTIONS_TOGGLED: &str = "🔊 Audio descriptions toggled!";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AudioSettings {
    menu_open: bool,
    music: bool,
    voice_navigation: bool,
    audio_descriptions: bool,
}

impl AudioSettings {
    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn music_enabled(&self) -> bool {
        self.music
    }

    pub fn voice_navigation(&self) -> bool {
        self.voice_navigation
    }

    pub fn audio_descriptions(&self) -> bool {
        self.audio_descriptions
    }

    /// The speaker button shows or hides the menu.
    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    pub fn toggle_music(&mut self) -> &'static str {
        self.music = !self.music;
        if self.music {
            MUSIC_ENABLED
        } else {
            MUSIC_DISABLED
        }
    }

    pub fn toggle_voice_navigation(&mut self) -> &'static str {
        self.voice_navigation = !self.voice_navigation;
        VOICE_NAVIGATION_TOGGLED
    }

    pub fn toggle_audio_descriptions(&mut self) -> &'static str {
        self.audio_descriptions = !self.audio_descriptions;
        AUDIO_DESCRIPTIONS_TOGGLED
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn music_alternates_between_enabled_and_disabled() {
        let mut a = AudioSettings::default();
        assert!(!a.music_enabled());
        assert_eq!(a.toggle_music(), MUSIC_ENABLED);
        assert!(a.music_enabled());
        assert_eq!(a.toggle_music(), MUSIC_DISABLED);
        assert_eq!(a.toggle_music(), MUSIC_ENABLED);
    }

    #[test]
    fn accessibility_toggles_always_announce() {
        let mut a = AudioSettings::default();
        assert_eq!(a.toggle_voice_navigation(), VOICE_NAVIGATION_TOGGLED);
        assert_eq!(a.toggle_voice_navigation(), VOICE_NAVIGATION_TOGGLED);
        assert!(!a.voice_navigation());
        assert_eq!(a.toggle_audio_descriptions(), AUDIO_DESCRIPTIONS_TOGGLED);
        assert!(a.audio_descriptions());
        assert!(!a.music_enabled());
    }

    #[test]
    fn menu_button_flips_visibility() {
        let mut a = AudioSettings::default();
        a.toggle_menu();
        assert!(a.menu_open());
        a.toggle_menu();
        assert!(!a.menu_open());
    }
}
