// Menu frame rendering - a pure function of (entries, index, t)

use embedded_graphics::mono_font::ascii::FONT_6X10;
use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::*;
use embedded_graphics::text::Text;

use crate::display::{FrameCanvas, HEIGHT, WIDTH};
use crate::menu::pure::carousel::dot_position;
use crate::menu::GameEntry;
use crate::ui::theme;

/// Height of the left/right arrowheads.
const ARROW_H: i32 = 16;
/// At most this many position dots fit the bottom row.
const DOT_BUDGET: usize = 14;

/// Pixel width of a string in the 6x10 menu font.
pub fn text_width(text: &str) -> i32 {
    text.chars().count() as i32 * FONT_6X10.character_size.width as i32
}

fn draw_text_centered(canvas: &mut FrameCanvas, baseline_y: i32, text: &str, color: Rgb888) {
    let x = (WIDTH as i32 - text_width(text)) / 2;
    let style = MonoTextStyle::new(&FONT_6X10, color);
    let _ = Text::new(text, Point::new(x, baseline_y), style).draw(canvas);
}

/// Arrowhead at the horizontal extreme; `dir` is -1 (pointing left) or +1.
fn draw_arrow(canvas: &mut FrameCanvas, cx: i32, dir: i32, color: Rgb888) {
    let cy = HEIGHT as i32 / 2;
    for dy in -ARROW_H / 2..ARROW_H / 2 {
        let w = (ARROW_H / 2 - dy.abs()).max(0);
        for dx in 0..w {
            canvas.set_pixel(cx + dir * dx, cy + dy, color);
        }
    }
}

fn draw_index_dots(canvas: &mut FrameCanvas, current: usize, total: usize) {
    if total <= 1 {
        return;
    }
    let shown = total.min(DOT_BUDGET);
    let lit = dot_position(current, total, shown);

    let y = HEIGHT as i32 - 6;
    let start_x = (WIDTH as i32 - (shown as i32 * 6 - 2)) / 2;
    for i in 0..shown {
        let color = if i == lit { theme::TAB } else { theme::DOT_OFF };
        let x = start_x + i as i32 * 6;
        for yy in 0..2 {
            for xx in 0..2 {
                canvas.set_pixel(x + xx, y + yy, color);
            }
        }
    }
}

/// Draw one menu frame. `t` is seconds since startup, used only for the
/// pulsing accent.
pub fn draw_menu(canvas: &mut FrameCanvas, entries: &[GameEntry], index: usize, t: f32) {
    canvas.clear();

    let accent = theme::pulse(theme::ACCENT, t);

    if entries.is_empty() {
        draw_text_centered(canvas, 30, "NO FILES", theme::ERR);
        draw_text_centered(canvas, 44, "FOUND", theme::ERR);
        return;
    }

    let entry = &entries[index.min(entries.len() - 1)];
    draw_arrow(canvas, 8, -1, accent);
    draw_arrow(canvas, WIDTH as i32 - 9, 1, accent);
    draw_text_centered(canvas, 38, &entry.label, theme::FG);
    draw_index_dots(canvas, index, entries.len());
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn entries(n: usize) -> Vec<GameEntry> {
        (0..n)
            .map(|i| GameEntry {
                label: format!("GAME{}", i),
                path: PathBuf::from(format!("/tmp/game{}.py", i)),
                file_name: format!("game{}.py", i),
            })
            .collect()
    }

    fn lit_pixels(canvas: &FrameCanvas) -> usize {
        let mut count = 0;
        for y in 0..HEIGHT as i32 {
            for x in 0..WIDTH as i32 {
                if canvas.pixel(x, y) != Some(Rgb888::BLACK) {
                    count += 1;
                }
            }
        }
        count
    }

    #[test]
    fn empty_list_renders_error_state() {
        let mut canvas = FrameCanvas::new();
        draw_menu(&mut canvas, &[], 0, 0.0);

        let mut reds = 0;
        for y in 0..HEIGHT as i32 {
            for x in 0..WIDTH as i32 {
                if canvas.pixel(x, y) == Some(theme::ERR) {
                    reds += 1;
                }
            }
        }
        assert!(reds > 0, "NO FILES text should be drawn in the error color");
    }

    #[test]
    fn populated_menu_draws_arrows_label_and_dots() {
        let mut canvas = FrameCanvas::new();
        let list = entries(3);
        draw_menu(&mut canvas, &list, 1, 0.0);

        // Arrow tips sit at the horizontal extremes on the center line
        let cy = HEIGHT as i32 / 2;
        assert_ne!(canvas.pixel(8, cy), Some(Rgb888::BLACK));
        assert_ne!(canvas.pixel(WIDTH as i32 - 9, cy), Some(Rgb888::BLACK));

        // One lit dot in the bottom row
        let mut lit_dots = 0;
        for x in 0..WIDTH as i32 {
            if canvas.pixel(x, HEIGHT as i32 - 6) == Some(theme::TAB) {
                lit_dots += 1;
            }
        }
        assert_eq!(lit_dots, 2); // 2x2 dot: two pixels on this row

        assert!(lit_pixels(&canvas) > 0);
    }

    #[test]
    fn out_of_range_index_is_clamped_not_panicking() {
        let mut canvas = FrameCanvas::new();
        let list = entries(2);
        draw_menu(&mut canvas, &list, 99, 1.5);
        assert!(lit_pixels(&canvas) > 0);
    }

    #[test]
    fn text_width_is_six_per_char() {
        assert_eq!(text_width("SNAKE"), 30);
        assert_eq!(text_width(""), 0);
    }
}
