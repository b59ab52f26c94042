// main.rs - Greenberg-Hastings excitable medium, in a window or on the console

use anyhow::{Context, Result};
use eframe::egui;
use log::{info, warn, LevelFilter};
use simple_logger::SimpleLogger;
use std::io::{self, BufRead, Write};
use std::time::Instant;

mod args;       // Command line handling
mod automaton;  // Double-buffered rule engine
mod config;     // Runtime defaults
mod console;    // Text output and input-paced loop
mod driver;     // Time-paced stepping and command queue
mod grid;       // Grid types
mod ui;         // egui front end

use args::Mode;
use automaton::Automaton;
use config::{Config, GfxConfig};
use driver::Driver;

const TITLE: &str = "Greenberg-Hastings Automaton";

fn main() -> Result<()> {
    let level = log_level(std::env::var("RUST_LOG").ok().as_deref());
    SimpleLogger::new().with_level(level).init().context("failed to initialize logger")?;
    info!("Starting {} v{}", TITLE, env!("CARGO_PKG_VERSION"));

    let mode = args::parse(std::env::args().skip(1));
    if mode == Mode::Help {
        print!("{}", args::HELP_TEXT);
        return Ok(());
    }

    let mut automaton = Automaton::new();
    automaton.initialize();

    let stdin = io::stdin();
    let launch = |automaton| run_gui(automaton, Config::default());
    run_mode(mode, automaton, launch, stdin.lock(), io::stdout().lock())?;
    Ok(())
}

/// Level from `RUST_LOG`, defaulting to `Warn` so the console grid stays
/// readable.
fn log_level(var: Option<&str>) -> LevelFilter {
    var.and_then(|v| v.trim().parse().ok()).unwrap_or(LevelFilter::Warn)
}

/// Runs the window in GUI mode, or the console loop in console mode or when
/// the window cannot be opened. Returns the number of console generations.
fn run_mode<F, R, W>(mode: Mode, mut automaton: Automaton, launch_gui: F, input: R, out: W) -> Result<u64>
where
    F: FnOnce(Automaton) -> Result<()>,
    R: BufRead,
    W: Write,
{
    if mode == Mode::Gui {
        match launch_gui(automaton.clone()) {
            Ok(()) => return Ok(0),
            Err(e) => warn!("Could not open a window ({:#}), falling back to console", e),
        }
    }
    console::run(&mut automaton, input, out)
}

/// The graphical application: the driver plus what is needed to paint it.
pub struct AutomatonApp {
    driver: Driver,
    gfx: GfxConfig,
}

impl AutomatonApp {
    fn new(automaton: Automaton, config: Config) -> Self {
        Self {
            driver: Driver::new(automaton, &config.sim, Instant::now()),
            gfx: config.gfx,
        }
    }
}

fn run_gui(automaton: Automaton, config: Config) -> Result<()> {
    if !display_available() {
        anyhow::bail!("no display server found");
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(TITLE)
            .with_inner_size(config.gfx.window_size)
            .with_resizable(false),
        ..Default::default()
    };

    info!("Opening window");
    eframe::run_native(
        TITLE,
        options,
        Box::new(move |_cc| Box::new(AutomatonApp::new(automaton, config))),
    )
    .map_err(|e| anyhow::anyhow!("{}", e))
    .context("failed to run window")
}

/// Window creation panics instead of failing without a display server, so
/// check for one up front.
#[cfg(all(unix, not(target_os = "macos")))]
fn display_available() -> bool {
    std::env::var_os("DISPLAY").is_some() || std::env::var_os("WAYLAND_DISPLAY").is_some()
}

#[cfg(not(all(unix, not(target_os = "macos"))))]
fn display_available() -> bool {
    true
}
