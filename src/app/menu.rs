//! Menu item tables and the highlighted-row cursor shared by all menus

use std::marker::PhantomData;

use crate::app::prefs::{GameMode, Prefs};

pub trait MenuItem: Copy + Eq + 'static {
    /// Items in display order
    const ALL: &'static [Self];

    fn label(self) -> &'static str;
}

/// Index of the highlighted item, wraps around in both directions
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct Selection<T> {
    index: usize,
    _item: PhantomData<T>,
}

impl<T: MenuItem> Selection<T> {
    pub fn new() -> Self {
        Self { index: 0, _item: PhantomData }
    }

    /// Highlight `item` (falls back to the first item if it's not listed)
    pub fn at(item: T) -> Self {
        let index = T::ALL.iter().position(|x| *x == item).unwrap_or(0);
        Self { index, _item: PhantomData }
    }

    pub fn next(&mut self) {
        self.index = (self.index + 1) % T::ALL.len();
    }

    pub fn prev(&mut self) {
        self.index = (self.index + T::ALL.len() - 1) % T::ALL.len();
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn current(&self) -> T {
        T::ALL[self.index]
    }

    /// Items paired with whether they are highlighted
    pub fn items(&self) -> impl Iterator<Item = (T, bool)> + '_ {
        T::ALL
            .iter()
            .enumerate()
            .map(move |(i, item)| (*item, i == self.index))
    }
}

impl<T: MenuItem> Default for Selection<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum MainItem {
    Start,
    Config,
    Mode,
    Quit,
}

impl MenuItem for MainItem {
    const ALL: &'static [Self] = &[Self::Start, Self::Config, Self::Mode, Self::Quit];

    fn label(self) -> &'static str {
        match self {
            Self::Start => "Start Game",
            Self::Config => "Config Menu",
            Self::Mode => "Game Mode",
            Self::Quit => "Quit",
        }
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum PauseItem {
    Resume,
    MainMenu,
}

impl MenuItem for PauseItem {
    const ALL: &'static [Self] = &[Self::Resume, Self::MainMenu];

    fn label(self) -> &'static str {
        match self {
            Self::Resume => "Resume",
            Self::MainMenu => "Main Menu",
        }
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum ConfigItem {
    Speed,
    Food,
    Obstacles,
    Amplitude,
    WaveSpeed,
    Back,
}

impl MenuItem for ConfigItem {
    const ALL: &'static [Self] = &[
        Self::Speed,
        Self::Food,
        Self::Obstacles,
        Self::Amplitude,
        Self::WaveSpeed,
        Self::Back,
    ];

    fn label(self) -> &'static str {
        match self {
            Self::Speed => "SnakeSpeed (smaller = faster)",
            Self::Food => "Num Food",
            Self::Obstacles => "Num Obstacles",
            Self::Amplitude => "GrassAmplitude",
            Self::WaveSpeed => "GrassWaveSpeed",
            Self::Back => "Back to Main Menu",
        }
    }
}

impl ConfigItem {
    /// The row as displayed, with its current value
    pub fn line(self, prefs: &Prefs) -> String {
        match self {
            Self::Speed => format!("{}: {}", self.label(), prefs.move_interval_ms),
            Self::Food => format!("{}: {}", self.label(), prefs.food_count),
            Self::Obstacles => format!("{}: {}", self.label(), prefs.obstacle_count),
            Self::Amplitude => format!("{}: {:.2}", self.label(), prefs.grass_amplitude),
            Self::WaveSpeed => format!("{}: {:.2}", self.label(), prefs.grass_wave_speed),
            Self::Back => self.label().to_string(),
        }
    }
}

impl MenuItem for GameMode {
    const ALL: &'static [Self] = &[Self::Normal, Self::Flashlight];

    fn label(self) -> &'static str {
        match self {
            Self::Normal => "NORMAL MODE",
            Self::Flashlight => "FLASHLIGHT MODE",
        }
    }
}
