// Application context and the main polling loop

use std::error::Error;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use crate::display::{Display, FrameCanvas};
use crate::exit::ExitOnBack;
use crate::input::{PadButton, PadSet};
use crate::launch::{exec_game, validate_target};
use crate::menu::{scan_games, Carousel};
use crate::ui;

/// Shared debounce for the launch/refresh buttons (level-triggered).
const ACTION_DEBOUNCE: Duration = Duration::from_millis(350);
/// Polling tick.
const TICK: Duration = Duration::from_millis(10);

/// Everything the menu owns: pads, display, exit helper, carousel state.
/// Built once in main and torn down implicitly by the process hand-off.
pub struct AppContext {
    games_dir: PathBuf,
    pads: PadSet,
    display: Box<dyn Display>,
    exit: ExitOnBack,
    carousel: Carousel,
    canvas: FrameCanvas,
    started: Instant,
    last_action: Instant,
}

impl AppContext {
    pub fn new(
        games_dir: PathBuf,
        pads: PadSet,
        display: Box<dyn Display>,
        exit: ExitOnBack,
    ) -> Self {
        let carousel = Carousel::new(scan_games(&games_dir));
        let now = Instant::now();
        Self {
            games_dir,
            pads,
            display,
            exit,
            carousel,
            canvas: FrameCanvas::new(),
            started: now,
            last_action: now,
        }
    }

    /// Single-threaded polling loop. Returns only on a fatal error; a launch
    /// or exit hand-off replaces the process image instead.
    pub fn run(&mut self) -> Result<(), Box<dyn Error>> {
        println!(
            "[matrixcade] {} game(s) in {}",
            self.carousel.len(),
            self.games_dir.display()
        );
        // Construction work (display init, first scan) eats into the ignore
        // window armed by ExitOnBack::new; re-arm it as the loop starts
        self.exit.reset();
        loop {
            self.pads.refresh();
            self.pads.pump();
            self.tick(Instant::now())?;
            std::thread::sleep(TICK);
        }
    }

    fn tick(&mut self, now: Instant) -> Result<(), Box<dyn Error>> {
        ui::draw_menu(
            &mut self.canvas,
            self.carousel.entries(),
            self.carousel.index(),
            self.started.elapsed().as_secs_f32(),
        );
        self.display.present(&self.canvas);

        // Exit (any pad)
        if self.exit.poll(&self.pads, now) {
            self.display.blank();
            return Err(self.exit.activate(&mut self.pads).into());
        }

        // Rescan (B, any pad)
        if self.pads.any_held(PadButton::Refresh) && self.debounced(now) {
            self.carousel.rebuild(scan_games(&self.games_dir));
            println!("[matrixcade] rescan: {} game(s)", self.carousel.len());
            self.last_action = now;
        }

        // Launch (A, any pad)
        if self.pads.any_held(PadButton::Confirm) && self.debounced(now) {
            if let Some(entry) = self.carousel.selected() {
                self.last_action = now;
                if validate_target(&entry.path) {
                    self.display.blank();
                    return Err(exec_game(entry).into());
                }
                // Scan/launch race: the file vanished, stay on the menu
                println!("[matrixcade] missing file: {}", entry.path.display());
            }
        }

        // Carousel movement (any pad, per-pad edge + hold-repeat)
        if !self.carousel.is_empty() {
            let delta = self.pads.nav_delta(now);
            if delta != 0 {
                self.carousel.navigate(delta);
            }
        }

        Ok(())
    }

    fn debounced(&self, now: Instant) -> bool {
        now.duration_since(self.last_action) > ACTION_DEBOUNCE
    }
}
