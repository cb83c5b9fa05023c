// RGB matrix backend (rpi-led-matrix, two chained 64x64 panels)

use embedded_graphics::prelude::RgbColor;
use rpi_led_matrix::{LedCanvas, LedColor, LedMatrix, LedMatrixOptions, LedRuntimeOptions};

use crate::display::{Display, FrameCanvas, HEIGHT, WIDTH};

/// Double-buffered matrix output: frames are copied into the offscreen
/// canvas and swapped in on vsync.
pub struct MatrixDisplay {
    matrix: LedMatrix,
    offscreen: Option<LedCanvas>,
}

impl MatrixDisplay {
    /// Open the panels with the cabinet's wiring: adafruit-hat mapping, two
    /// chained 64x64 panels, brightness 50, GPIO slowdown 4.
    pub fn new() -> Result<Self, &'static str> {
        let mut options = LedMatrixOptions::new();
        options.set_hardware_mapping("adafruit-hat");
        options.set_rows(HEIGHT);
        options.set_cols(WIDTH / 2);
        options.set_chain_length(2);
        let _ = options.set_brightness(50);
        let mut rt_options = LedRuntimeOptions::new();
        rt_options.set_gpio_slowdown(4);

        let matrix = LedMatrix::new(Some(options), Some(rt_options))?;
        let offscreen = matrix.offscreen_canvas();
        Ok(Self {
            matrix,
            offscreen: Some(offscreen),
        })
    }
}

impl Display for MatrixDisplay {
    fn present(&mut self, frame: &FrameCanvas) {
        if let Some(mut canvas) = self.offscreen.take() {
            for y in 0..HEIGHT as i32 {
                for x in 0..WIDTH as i32 {
                    if let Some(c) = frame.pixel(x, y) {
                        canvas.set(
                            x,
                            y,
                            &LedColor {
                                red: c.r(),
                                green: c.g(),
                                blue: c.b(),
                            },
                        );
                    }
                }
            }
            self.offscreen = Some(self.matrix.swap(canvas));
        }
    }

    fn blank(&mut self) {
        if let Some(mut canvas) = self.offscreen.take() {
            canvas.clear();
            self.offscreen = Some(self.matrix.swap(canvas));
        }
    }
}
