// ANSI terminal preview backend (half-block rendering, two pixels per cell)

use std::fmt::Write as _;
use std::io::{self, Write};

use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::*;

use crate::display::{Display, FrameCanvas, HEIGHT, WIDTH};

pub struct TerminalDisplay;

impl TerminalDisplay {
    pub fn new() -> Self {
        // Clean screen, hidden cursor for the duration
        print!("\x1b[2J\x1b[?25l");
        let _ = io::stdout().flush();
        Self
    }
}

impl Default for TerminalDisplay {
    fn default() -> Self {
        Self::new()
    }
}

impl Display for TerminalDisplay {
    fn present(&mut self, frame: &FrameCanvas) {
        let mut out = String::with_capacity((WIDTH * HEIGHT * 20) as usize);
        out.push_str("\x1b[H");
        for y in (0..HEIGHT as i32).step_by(2) {
            for x in 0..WIDTH as i32 {
                let top = frame.pixel(x, y).unwrap_or(Rgb888::BLACK);
                let bottom = frame.pixel(x, y + 1).unwrap_or(Rgb888::BLACK);
                let _ = write!(
                    out,
                    "\x1b[38;2;{};{};{}m\x1b[48;2;{};{};{}m\u{2580}",
                    top.r(),
                    top.g(),
                    top.b(),
                    bottom.r(),
                    bottom.g(),
                    bottom.b()
                );
            }
            out.push_str("\x1b[0m\n");
        }
        print!("{}", out);
        let _ = io::stdout().flush();
    }

    fn blank(&mut self) {
        print!("\x1b[0m\x1b[2J\x1b[H\x1b[?25h");
        let _ = io::stdout().flush();
    }
}

impl Drop for TerminalDisplay {
    fn drop(&mut self) {
        print!("\x1b[0m\x1b[?25h");
        let _ = io::stdout().flush();
    }
}
