//! Decorative grass covering the bottom half of the window, swaying
//! with a sine wave driven by the animation clock

use rand::Rng;

use crate::app::prefs::Prefs;
use crate::basic::{GridDim, Point};

pub const BLADE_COUNT: usize = 3000;

#[derive(Copy, Clone, Debug)]
pub struct Blade {
    /// Bottom of the blade
    pub base: Point,
    pub height: f32,
    pub phase: f32,
    /// Per-blade multiplier of the global amplitude
    pub amplitude: f32,
}

pub struct GrassField {
    blades: Vec<Blade>,
}

impl GrassField {
    // scales the configured amplitude down to pixels
    const SWAY_SCALE: f32 = 0.1;

    pub fn generate(count: usize, grid: GridDim, rng: &mut impl Rng) -> Self {
        let blades = (0..count)
            .map(|_| Blade {
                base: Point {
                    x: rng.gen_range(0..grid.width) as f32,
                    y: (grid.height - rng.gen_range(0..grid.height / 2)) as f32,
                },
                height: 10. + rng.gen_range(0..40) as f32,
                phase: rng.gen_range(0..100) as f32 * 0.1,
                amplitude: 0.5 + rng.gen_range(0..10) as f32,
            })
            .collect();
        Self { blades }
    }

    pub fn blades(&self) -> &[Blade] {
        &self.blades
    }

    /// Horizontal offset of a blade's tip at animation time `time`
    pub fn sway(blade: &Blade, time: f32, prefs: &Prefs) -> f32 {
        (time * prefs.grass_wave_speed + blade.phase).sin()
            * prefs.grass_amplitude
            * blade.amplitude
            * Self::SWAY_SCALE
    }

    pub fn tip(blade: &Blade, time: f32, prefs: &Prefs) -> Point {
        Point {
            x: blade.base.x + Self::sway(blade, time, prefs),
            y: blade.base.y - blade.height,
        }
    }
}

/// Logical time for animations, advances by a fixed step per update tick
#[derive(Copy, Clone, Debug, Default)]
pub struct AnimationClock {
    time: f32,
}

impl AnimationClock {
    pub const STEP: f32 = 0.02;

    pub fn tick(&mut self) {
        self.time += Self::STEP;
    }

    pub fn time(&self) -> f32 {
        self.time
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::basic::GRID;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_generate_ranges() {
        let mut rng = StdRng::seed_from_u64(11);
        let field = GrassField::generate(BLADE_COUNT, GRID, &mut rng);
        assert_eq!(field.blades().len(), BLADE_COUNT);
        for blade in field.blades() {
            assert!((0. ..GRID.width as f32).contains(&blade.base.x));
            assert!(blade.base.y > GRID.height as f32 / 2.);
            assert!(blade.base.y <= GRID.height as f32);
            assert!((10. ..50.).contains(&blade.height));
            assert!((0. ..10.).contains(&blade.phase));
            assert!((0.5..10.).contains(&blade.amplitude));
        }
    }

    #[test]
    fn test_sway() {
        let blade = Blade {
            base: Point { x: 100., y: 500. },
            height: 20.,
            phase: std::f32::consts::FRAC_PI_2,
            amplitude: 2.,
        };
        let prefs = Prefs::default();
        // sin(pi/2) * 15 * 2 * 0.1
        assert!((GrassField::sway(&blade, 0., &prefs) - 3.).abs() < 1e-5);
        let tip = GrassField::tip(&blade, 0., &prefs);
        assert!((tip.x - 103.).abs() < 1e-4);
        assert_eq!(tip.y, 480.);

        let still = Prefs { grass_amplitude: 0., ..Prefs::default() };
        assert_eq!(GrassField::sway(&blade, 123., &still), 0.);
    }

    #[test]
    fn test_clock_steps() {
        let mut clock = AnimationClock::default();
        for _ in 0..50 {
            clock.tick();
        }
        assert!((clock.time() - 1.).abs() < 1e-4);
    }
}
