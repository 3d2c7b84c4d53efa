use crate::basic::Point;

pub const BURST_SIZE: usize = 20;
/// Life lost per simulation step
const DECAY: f32 = 0.05;

#[derive(Copy, Clone, Debug)]
pub struct Sparkle {
    pub pos: Point,
    /// Between 0 and 1, the sparkle is removed when it reaches 0
    pub life: f32,
}

#[derive(Default)]
pub struct Sparkles(Vec<Sparkle>);

impl Sparkles {
    pub fn burst(&mut self, pos: Point) {
        self.0
            .extend(std::iter::repeat(Sparkle { pos, life: 1. }).take(BURST_SIZE));
    }

    pub fn decay(&mut self) {
        self.0.iter_mut().for_each(|sparkle| sparkle.life -= DECAY);
        self.0.retain(|sparkle| sparkle.life > 0.);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Sparkle> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[test]
fn test_sparkles_fade_out() {
    let mut sparkles = Sparkles::default();
    sparkles.burst(Point { x: 10., y: 10. });
    assert_eq!(sparkles.len(), BURST_SIZE);
    assert!(sparkles.iter().all(|sparkle| sparkle.life == 1.));

    sparkles.decay();
    assert_eq!(sparkles.len(), BURST_SIZE);

    // 0.05 doesn't divide 1 exactly in f32, allow one extra step
    for _ in 0..20 {
        sparkles.decay();
    }
    assert!(sparkles.is_empty());
}
