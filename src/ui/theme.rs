// Palette for the matrix UI

use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::*;

pub const FG: Rgb888 = Rgb888::WHITE;
pub const ACCENT: Rgb888 = Rgb888::CYAN;
pub const TAB: Rgb888 = Rgb888::MAGENTA;
pub const ERR: Rgb888 = Rgb888::RED;
pub const DOT_OFF: Rgb888 = Rgb888::new(20, 20, 20);

/// Breathing highlight: scale `base` between 50% and 100% on a sine of the
/// elapsed seconds. Cosmetic only, carries no state.
pub fn pulse(base: Rgb888, t: f32) -> Rgb888 {
    let p = ((t * 4.0).sin() + 1.0) / 2.0;
    let s = 0.5 + 0.5 * p;
    Rgb888::new(
        (base.r() as f32 * s) as u8,
        (base.g() as f32 * s) as u8,
        (base.b() as f32 * s) as u8,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pulse_stays_between_half_and_full() {
        for i in 0..100 {
            let t = i as f32 * 0.1;
            let c = pulse(ACCENT, t);
            assert!(c.b() >= 127, "dimmer than 50% at t={}", t);
            assert!(c.b() <= 255);
            assert_eq!(c.r(), 0); // Scaling never invents a channel
        }
    }
}
