use ggez::audio::{SoundSource, Source};
use ggez::Context;
use log::warn;

use crate::game::Advance;

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Sound {
    Eat,
    Collision,
}

impl Sound {
    fn path(self) -> &'static str {
        match self {
            Self::Eat => "/eat.wav",
            Self::Collision => "/collision.wav",
        }
    }

    /// The sound that accompanies a simulation step, if any
    pub fn for_advance(advance: Advance) -> Option<Self> {
        match advance {
            Advance::Moved => None,
            Advance::Ate => Some(Self::Eat),
            Advance::Crashed { .. } => Some(Self::Collision),
        }
    }
}

/// Fire-and-forget sound effects, a clip that failed to load is skipped
pub struct Sounds {
    eat: Option<Source>,
    collision: Option<Source>,
}

impl Sounds {
    pub fn load(ctx: &Context) -> Self {
        Self {
            eat: Self::load_clip(ctx, Sound::Eat),
            collision: Self::load_clip(ctx, Sound::Collision),
        }
    }

    fn load_clip(ctx: &Context, sound: Sound) -> Option<Source> {
        match Source::new(ctx, sound.path()) {
            Ok(source) => Some(source),
            Err(e) => {
                warn!("{:?} sound disabled, failed to load {}: {}", sound, sound.path(), e);
                None
            }
        }
    }

    pub fn play(&mut self, ctx: &Context, sound: Sound) {
        let source = match sound {
            Sound::Eat => &mut self.eat,
            Sound::Collision => &mut self.collision,
        };
        if let Some(source) = source {
            if let Err(e) = source.play_detached(ctx) {
                warn!("failed to play {:?} sound: {}", sound, e);
            }
        }
    }
}

#[test]
fn test_sound_for_advance() {
    use crate::basic::Cell;

    assert_eq!(Sound::for_advance(Advance::Moved), None);
    assert_eq!(Sound::for_advance(Advance::Ate), Some(Sound::Eat));
    assert_eq!(
        Sound::for_advance(Advance::Crashed { at: Cell { x: 0, y: 0 } }),
        Some(Sound::Collision)
    );
}
