// In-memory Rgb888 frame buffer implementing embedded-graphics DrawTarget

use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::*;

/// Width of the full surface: two chained 64x64 panels side by side.
pub const WIDTH: u32 = 128;
pub const HEIGHT: u32 = 64;

/// One frame worth of pixels, drawn fresh each tick and presented whole.
pub struct FrameCanvas {
    pixels: Vec<Rgb888>,
}

impl FrameCanvas {
    pub fn new() -> Self {
        Self {
            pixels: vec![Rgb888::BLACK; (WIDTH * HEIGHT) as usize],
        }
    }

    pub fn clear(&mut self) {
        self.pixels.fill(Rgb888::BLACK);
    }

    /// Bounds-checked pixel write; out-of-range coordinates are dropped.
    pub fn set_pixel(&mut self, x: i32, y: i32, color: Rgb888) {
        if x >= 0 && (x as u32) < WIDTH && y >= 0 && (y as u32) < HEIGHT {
            self.pixels[(y as u32 * WIDTH + x as u32) as usize] = color;
        }
    }

    pub fn pixel(&self, x: i32, y: i32) -> Option<Rgb888> {
        if x >= 0 && (x as u32) < WIDTH && y >= 0 && (y as u32) < HEIGHT {
            Some(self.pixels[(y as u32 * WIDTH + x as u32) as usize])
        } else {
            None
        }
    }
}

impl Default for FrameCanvas {
    fn default() -> Self {
        Self::new()
    }
}

impl OriginDimensions for FrameCanvas {
    fn size(&self) -> Size {
        Size::new(WIDTH, HEIGHT)
    }
}

impl DrawTarget for FrameCanvas {
    type Color = Rgb888;
    type Error = core::convert::Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            self.set_pixel(point.x, point.y, color);
        }
        Ok(())
    }
}
