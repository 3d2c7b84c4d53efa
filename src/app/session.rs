use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::app::prefs::Prefs;
use crate::basic::GridDim;
use crate::game::sparkle::Sparkles;
use crate::grass::{AnimationClock, GrassField, BLADE_COUNT};

/// State that outlives a single game: settings, the best score so
/// far and the decorations drawn behind every screen
pub struct Session {
    pub prefs: Prefs,
    pub grid: GridDim,
    pub high_score: u32,
    pub sparkles: Sparkles,
    pub grass: GrassField,
    pub clock: AnimationClock,
    pub rng: StdRng,
}

impl Session {
    pub fn new(prefs: Prefs, grid: GridDim, seed: Option<u64>) -> Self {
        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let grass = GrassField::generate(BLADE_COUNT, grid, &mut rng);
        Self {
            prefs,
            grid,
            high_score: 0,
            sparkles: Sparkles::default(),
            grass,
            clock: AnimationClock::default(),
            rng,
        }
    }

    pub fn regenerate_grass(&mut self) {
        self.grass = GrassField::generate(BLADE_COUNT, self.grid, &mut self.rng);
    }

    pub fn record_score(&mut self, score: u32) {
        self.high_score = self.high_score.max(score);
    }
}
