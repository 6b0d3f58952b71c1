//! Geometry for the decorative effects: scroll-linked widgets, confetti,
//! click particles and button ripples. The web layer turns these numbers into
//! inline styles.

use crate::prng::Prng;

pub const BACK_TO_TOP_AFTER_PX: f64 = 300.0;
pub const CONFETTI_COUNT: usize = 25;
pub const CONFETTI_MS: u32 = 2500;
pub const PARTICLE_COUNT: usize = 8;
pub const PARTICLE_MS: u32 = 600;
pub const RIPPLE_MS: u32 = 600;

/// Width of the scroll progress bar, 0..=100.
pub fn scroll_progress_percent(scroll_y: f64, document_height: f64, viewport_height: f64) -> f64 {
    let scrollable = document_height - viewport_height;
    if scrollable > 0.0 {
        (scroll_y / scrollable * 100.0).clamp(0.0, 100.0)
    } else {
        0.0
    }
}

pub fn back_to_top_visible(scroll_y: f64) -> bool {
    scroll_y > BACK_TO_TOP_AFTER_PX
}

/// Mascot `top` in vh: starts 20vh down and drifts 40vh per viewport scrolled.
pub fn mascot_top_vh(scroll_y: f64, viewport_height: f64) -> f64 {
    if viewport_height <= 0.0 {
        return 20.0;
    }
    20.0 + (scroll_y / viewport_height) * 40.0
}

/// The mascot parks in the middle once the footer is on screen.
pub fn mascot_centered(footer_top: f64, viewport_height: f64) -> bool {
    footer_top < viewport_height - 100.0
}

#[derive(Debug, Clone, PartialEq)]
pub struct Balloon {
    pub left_vw: f32,
    pub hue: f32,
    /// How far the balloon rises, in px.
    pub rise_px: f32,
}

pub fn confetti(rng: &mut Prng, viewport_height: f32) -> Vec<Balloon> {
    (0..CONFETTI_COUNT)
        .map(|_| Balloon {
            left_vw: rng.gen_range_f32(0.0, 90.0),
            hue: rng.gen_range_f32(0.0, 360.0),
            rise_px: viewport_height * 0.8 + rng.gen_range_f32(0.0, 100.0),
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub dx: f32,
    pub dy: f32,
}

/// Eight particles fanned out at equal angles, 50-80px from the click.
pub fn burst(rng: &mut Prng) -> Vec<Particle> {
    (0..PARTICLE_COUNT)
        .map(|i| {
            let angle = (i as f32 / PARTICLE_COUNT as f32) * std::f32::consts::TAU;
            let distance = rng.gen_range_f32(50.0, 80.0);
            Particle {
                dx: angle.cos() * distance,
                dy: angle.sin() * distance,
            }
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ripple {
    pub size: f64,
    pub left: f64,
    pub top: f64,
}

/// A square ripple as big as the button's longer side, centred on the click.
/// Coordinates are relative to the button's top-left corner.
pub fn ripple(click_x: f64, click_y: f64, rect_left: f64, rect_top: f64, width: f64, height: f64) -> Ripple {
    let size = width.max(height);
    Ripple {
        size,
        left: click_x - rect_left - size / 2.0,
        top: click_y - rect_top - size / 2.0,
    }
}

/// Share of a section that must be on screen before it fades in.
pub const REVEAL_THRESHOLD: f64 = 0.15;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";
pub const REVEAL_STAGGER_MS: u32 = 100;

/// Fade-in delay for the `index`-th sibling, so food cards appear in turn.
pub fn reveal_delay_ms(index: usize) -> u32 {
    u32::try_from(index)
        .unwrap_or(u32::MAX)
        .saturating_mul(REVEAL_STAGGER_MS)
}
