use std::path::PathBuf;

use clap::Parser;
use simplelog::LevelFilter;

use crate::app::prefs::{GameMode, IntervalFloor, Prefs};
use crate::basic::GridDim;
use crate::error::{ErrorConversion, Result};

/// Snake on a procedurally animated grass field
#[derive(Parser, Debug)]
#[command(name = "grass-snake", version)]
pub struct Args {
    /// Food items on the board at once
    #[arg(long)]
    pub food: Option<usize>,

    /// Obstacles placed at the start of a game
    #[arg(long)]
    pub obstacles: Option<usize>,

    /// Milliseconds between snake steps (0 or less: every frame)
    #[arg(long, allow_negative_numbers = true)]
    pub interval_ms: Option<i32>,

    /// Start in flashlight mode
    #[arg(long)]
    pub flashlight: bool,

    /// Jump to a -20ms interval when speeding up past 1ms, like older builds
    #[arg(long)]
    pub legacy_speed_floor: bool,

    /// Don't draw grid lines
    #[arg(long)]
    pub no_grid: bool,

    /// Seed for food, obstacle and grass placement
    #[arg(long)]
    pub seed: Option<u64>,

    /// Directory containing sounds and fonts
    #[arg(long, default_value = "resources")]
    pub resources: PathBuf,

    /// Font file inside the resource directory, e.g. /COMIC.TTF
    #[arg(long)]
    pub font: Option<PathBuf>,

    #[arg(long, default_value_t = LevelFilter::Info)]
    pub log_level: LevelFilter,
}

impl Args {
    pub fn prefs(&self, grid: GridDim) -> Result<Prefs> {
        let mut prefs = Prefs::default()
            .mode(if self.flashlight { GameMode::Flashlight } else { GameMode::Normal })
            .interval_floor(if self.legacy_speed_floor {
                IntervalFloor::Sentinel
            } else {
                IntervalFloor::Clamp
            })
            .draw_grid(!self.no_grid);
        if let Some(food) = self.food {
            prefs = prefs.food_count(food);
        }
        if let Some(obstacles) = self.obstacles {
            prefs = prefs.obstacle_count(obstacles);
        }
        if let Some(ms) = self.interval_ms {
            prefs = prefs.move_interval_ms(ms);
        }

        prefs.validate(grid).with_trace_step("Args::prefs")?;
        Ok(prefs)
    }
}
