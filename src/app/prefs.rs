use std::time::Duration;

use crate::app::menu::ConfigItem;
use crate::basic::GridDim;
use crate::error::{ConfigError, Error, ErrorConversion, Result};

/// What happens when "speed up" is applied at the smallest
/// positive movement interval
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum IntervalFloor {
    /// Stay at `Prefs::MIN_INTERVAL_MS`
    Clamp,
    /// Jump to `Prefs::SENTINEL_INTERVAL_MS`, which makes the snake
    /// advance every frame, kept for compatibility with older builds
    Sentinel,
}

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum GameMode {
    Normal,
    /// Only cells near the snake's head are visible
    Flashlight,
}

#[derive(Clone, Debug)]
pub struct Prefs {
    /// Milliseconds between snake steps, smaller is faster,
    /// non-positive means a step every frame
    pub move_interval_ms: i32,
    pub food_count: usize,
    pub obstacle_count: usize,
    pub grass_amplitude: f32,
    pub grass_wave_speed: f32,

    pub interval_floor: IntervalFloor,
    pub mode: GameMode,
    pub draw_grid: bool,
}

impl Default for Prefs {
    fn default() -> Self {
        Self {
            move_interval_ms: 100,
            food_count: 10,
            obstacle_count: 15,
            grass_amplitude: 15.,
            grass_wave_speed: 0.05,

            interval_floor: IntervalFloor::Clamp,
            mode: GameMode::Normal,
            draw_grid: true,
        }
    }
}

// builder
impl Prefs {
    pub fn move_interval_ms(mut self, ms: i32) -> Self {
        self.move_interval_ms = ms;
        self
    }

    pub fn food_count(mut self, count: usize) -> Self {
        self.food_count = count;
        self
    }

    pub fn obstacle_count(mut self, count: usize) -> Self {
        self.obstacle_count = count;
        self
    }

    pub fn interval_floor(mut self, floor: IntervalFloor) -> Self {
        self.interval_floor = floor;
        self
    }

    pub fn mode(mut self, mode: GameMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn draw_grid(mut self, draw_grid: bool) -> Self {
        self.draw_grid = draw_grid;
        self
    }
}

impl Prefs {
    pub const MIN_INTERVAL_MS: i32 = 1;
    pub const SENTINEL_INTERVAL_MS: i32 = -20;
    const AMPLITUDE_STEP: f32 = 1.;
    const WAVE_SPEED_STEP: f32 = 0.01;

    /// `None` means the snake should advance every frame
    pub fn movement_interval(&self) -> Option<Duration> {
        match self.move_interval_ms {
            ms if ms <= 0 => None,
            ms => Some(Duration::from_millis(ms as u64)),
        }
    }

    pub fn speed_up(&mut self) {
        self.move_interval_ms = match (self.move_interval_ms, self.interval_floor) {
            (ms, _) if ms > Self::MIN_INTERVAL_MS => ms - 1,
            (_, IntervalFloor::Clamp) => Self::MIN_INTERVAL_MS,
            (_, IntervalFloor::Sentinel) => Self::SENTINEL_INTERVAL_MS,
        }
    }

    pub fn slow_down(&mut self) {
        self.move_interval_ms += 1;
    }

    /// Apply a left (`increase == false`) or right press on a config menu row
    pub fn adjust(&mut self, item: ConfigItem, increase: bool) {
        match (item, increase) {
            (ConfigItem::Speed, true) => self.speed_up(),
            (ConfigItem::Speed, false) => self.slow_down(),
            (ConfigItem::Food, true) => self.food_count += 1,
            (ConfigItem::Food, false) => self.food_count = self.food_count.saturating_sub(1),
            (ConfigItem::Obstacles, true) => self.obstacle_count += 1,
            (ConfigItem::Obstacles, false) => {
                self.obstacle_count = self.obstacle_count.saturating_sub(1)
            }
            (ConfigItem::Amplitude, true) => self.grass_amplitude += Self::AMPLITUDE_STEP,
            (ConfigItem::Amplitude, false) => {
                self.grass_amplitude = (self.grass_amplitude - Self::AMPLITUDE_STEP).max(0.)
            }
            (ConfigItem::WaveSpeed, true) => {
                self.grass_wave_speed = round_hundredths(self.grass_wave_speed + Self::WAVE_SPEED_STEP)
            }
            (ConfigItem::WaveSpeed, false) => {
                self.grass_wave_speed =
                    round_hundredths(self.grass_wave_speed - Self::WAVE_SPEED_STEP).max(0.)
            }
            (ConfigItem::Back, _) => {}
        }
    }

    /// Check launch settings, the board must keep at least one cell
    /// free for the snake after food and obstacles are placed
    pub fn validate(&self, grid: GridDim) -> Result {
        let res: Result = if self.food_count + self.obstacle_count >= grid.cell_count() {
            Err(Error::from(ConfigError::BoardTooSmall {
                requested: self.food_count + self.obstacle_count,
                available: grid.cell_count() - 1,
            }))
        } else if !self.grass_amplitude.is_finite() || self.grass_amplitude < 0. {
            Err(Error::from(ConfigError::Negative("grass amplitude")))
        } else if !self.grass_wave_speed.is_finite() || self.grass_wave_speed < 0. {
            Err(Error::from(ConfigError::Negative("grass wave speed")))
        } else {
            Ok(())
        };
        res.with_trace_step("Prefs::validate")
    }
}

// avoids drift from repeatedly adding 0.01
fn round_hundredths(x: f32) -> f32 {
    (x * 100.).round() / 100.
}
