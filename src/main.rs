mod app;
mod display;
mod exit;
mod input;
mod launch;
mod menu;
mod paths;
mod ui;

use std::error::Error;
use std::path::PathBuf;

use crate::app::AppContext;
use crate::display::Display;
use crate::exit::{ExitAction, ExitOnBack};
use crate::input::PadSet;
use crate::paths::GAMES_DIR;

const USAGE_TEXT: &str = "\
matrixcade - LED matrix game carousel

Usage: matrixcade [OPTIONS]

Options:
  --dir <path>         Games directory (default: ~/games)
  --term               Terminal preview backend even on hardware builds
  --exit-exec <prog>   On Back, replace this process with <prog> instead of quitting
  --help               Show this help
";

fn main() -> Result<(), Box<dyn Error>> {
    let args: Vec<String> = std::env::args().collect();

    if args.iter().any(|arg| arg == "--help") {
        println!("{}", USAGE_TEXT);
        return Ok(());
    }

    let games_dir = match flag_value(&args, "--dir") {
        Some(dir) => PathBuf::from(dir),
        None => GAMES_DIR.clone(),
    };

    let action = match flag_value(&args, "--exit-exec") {
        Some(prog) => ExitAction::Handoff(PathBuf::from(prog)),
        None => ExitAction::Quit,
    };

    let pads = PadSet::scan();
    if pads.is_empty() {
        eprintln!("[matrixcade] no gamepad detected");
        std::process::exit(1);
    }
    println!("[matrixcade] {} gamepad(s) connected", pads.len());

    let display = open_display(args.iter().any(|arg| arg == "--term"))?;

    let mut ctx = AppContext::new(games_dir, pads, display, ExitOnBack::new(action));
    ctx.run()
}

fn flag_value<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    let i = args.iter().position(|arg| arg == flag)?;
    match args.get(i + 1) {
        Some(value) => Some(value),
        None => {
            eprintln!("{}", USAGE_TEXT);
            std::process::exit(1);
        }
    }
}

#[cfg(feature = "hardware")]
fn open_display(force_term: bool) -> Result<Box<dyn Display>, Box<dyn Error>> {
    if force_term {
        return Ok(Box::new(display::TerminalDisplay::new()));
    }
    Ok(Box::new(display::MatrixDisplay::new()?))
}

#[cfg(not(feature = "hardware"))]
fn open_display(_force_term: bool) -> Result<Box<dyn Display>, Box<dyn Error>> {
    Ok(Box::new(display::TerminalDisplay::new()))
}
