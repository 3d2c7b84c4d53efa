#[macro_use]
extern crate derive_more;

use clap::Parser;
use ggez::conf::{WindowMode, WindowSetup};
use ggez::{event, ContextBuilder};
use log::{info, warn};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

use crate::app::App;
use crate::basic::{GRID, SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::cli::Args;
use crate::error::{Error, ErrorConversion, Result};
use crate::rendering::Typeface;

mod app;
mod basic;
mod cli;
mod error;
mod flashlight;
mod game;
mod grass;
mod rendering;

fn main() -> Result {
    let args = Args::parse();

    if let Err(e) = TermLogger::init(
        args.log_level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    ) {
        eprintln!("warning: logging disabled: {}", e);
    }

    let prefs = args.prefs(GRID)?;

    let wm = WindowMode::default()
        .dimensions(SCREEN_WIDTH as f32, SCREEN_HEIGHT as f32)
        .resizable(false);
    let ws = WindowSetup::default()
        .title("Snake + Procedural Grass + Flashlight Mode")
        .vsync(true);

    let (mut ctx, event_loop) = ContextBuilder::new("grass_snake", "grass_snake")
        .window_mode(wm)
        .window_setup(ws)
        .add_resource_path(args.resources.clone())
        .build()
        .map_err(Error::from)
        .with_trace_step("creating window")?;

    let typeface = match &args.font {
        Some(path) => Typeface::load(&mut ctx, path)?,
        None => Typeface::default(),
    };
    if !args.resources.is_dir() {
        warn!("resource directory {} not found", args.resources.display());
    }

    let app = App::new(&mut ctx, prefs, GRID, args.seed, typeface)?;
    info!("window ready, entering main menu");
    event::run(ctx, event_loop, app)
}
