use std::time::Instant;

use ggez::event::EventHandler;
use ggez::graphics::{Canvas, Color, DrawParam, Mesh};
use ggez::input::keyboard::KeyInput;
use ggez::Context;
use log::{debug, info};

use crate::app::audio::{Sound, Sounds};
use crate::app::input::Input;
use crate::app::prefs::Prefs;
use crate::app::screen::Screen;
use crate::app::session::Session;
use crate::basic::GridDim;
use crate::error::{Error, ErrorConversion, Result};
use crate::rendering::{self, Typeface};

pub mod audio;
pub mod control;
pub mod input;
pub mod menu;
pub mod prefs;
pub mod screen;
pub mod session;

/// Update ticks per second, the animation clock advances once per tick
const UPDATE_FPS: u32 = 60;

pub struct App {
    screen: Screen,
    session: Session,
    sounds: Sounds,
    typeface: Typeface,

    /// The grid never changes, built once
    grid_mesh: Mesh,
}

impl App {
    pub fn new(
        ctx: &mut Context,
        prefs: Prefs,
        grid: GridDim,
        seed: Option<u64>,
        typeface: Typeface,
    ) -> Result<Self> {
        let grid_mesh = rendering::grid_mesh(grid, ctx).with_trace_step("App::new")?;
        Ok(Self {
            screen: Screen::default(),
            session: Session::new(prefs, grid, seed),
            sounds: Sounds::load(ctx),
            typeface,
            grid_mesh,
        })
    }

    fn tick(&mut self, ctx: &Context, now: Instant) {
        self.session.clock.tick();
        if let Some(advance) = self.screen.update(&mut self.session, now) {
            if let Some(sound) = Sound::for_advance(advance) {
                self.sounds.play(ctx, sound);
            }
        }
    }

    fn apply_input(&mut self, input: Input, now: Instant) {
        let screen = std::mem::replace(&mut self.screen, Screen::Quit);
        let before = screen.name();
        self.screen = screen.handle_input(input, &mut self.session, now);
        if before != self.screen.name() {
            info!("{} -> {}", before, self.screen.name());
        }
    }

    fn draw_board(&self, canvas: &mut Canvas, ctx: &Context) -> Result {
        let game = match &self.screen {
            Screen::Playing { game, .. } | Screen::Paused { game, .. } => game,
            _ => return Ok(()),
        };

        if self.session.prefs.draw_grid {
            canvas.draw(&self.grid_mesh, DrawParam::default());
        }
        let board = rendering::board_mesh(game, &self.session, ctx)?;
        canvas.draw(&board, DrawParam::default());
        rendering::menu::score(canvas, &self.typeface, game.score(), self.session.high_score);
        Ok(())
    }

    fn draw_screen(&self, canvas: &mut Canvas, ctx: &Context) -> Result {
        let grass = rendering::grass_mesh(&self.session, ctx)?;
        canvas.draw(&grass, DrawParam::default());

        self.draw_board(canvas, ctx)?;

        let typeface = &self.typeface;
        match &self.screen {
            Screen::MainMenu(selection) => rendering::menu::main_menu(canvas, typeface, selection),
            Screen::ConfigMenu(selection) => {
                rendering::menu::config_menu(canvas, typeface, selection, &self.session.prefs)
            }
            Screen::ModeMenu(selection) => rendering::menu::mode_menu(canvas, typeface, selection),
            Screen::Paused { selection, .. } => {
                rendering::menu::pause_menu(canvas, typeface, selection)
            }
            Screen::Playing { .. } | Screen::Quit => {}
        }
        Ok(())
    }
}

impl EventHandler<Error> for App {
    fn update(&mut self, ctx: &mut Context) -> Result {
        while ctx.time.check_update_time(UPDATE_FPS) {
            self.tick(ctx, Instant::now());
        }
        if matches!(self.screen, Screen::Quit) {
            info!("quitting with high score {}", self.session.high_score);
            ctx.request_quit();
        }
        Ok(())
    }

    fn draw(&mut self, ctx: &mut Context) -> Result {
        let mut canvas = Canvas::from_frame(ctx, Color::BLACK);
        self.draw_screen(&mut canvas, ctx)
            .with_trace_step("App::draw")?;
        canvas.finish(ctx).map_err(Error::from)
    }

    fn key_down_event(&mut self, _ctx: &mut Context, input: KeyInput, repeated: bool) -> Result {
        if let Some(input) = input.keycode.and_then(Input::from_keycode) {
            debug!("input {:?}{}", input, if repeated { " (repeat)" } else { "" });
            self.apply_input(input, Instant::now());
        }
        Ok(())
    }
}
