//! The game's state machine, each screen carries exactly the data it needs

use std::time::Instant;

use log::info;

use crate::app::control::MoveTimer;
use crate::app::input::Input;
use crate::app::menu::{ConfigItem, MainItem, PauseItem, Selection};
use crate::app::prefs::GameMode;
use crate::app::session::Session;
use crate::basic::Dir;
use crate::game::{Advance, Game};

pub enum Screen {
    MainMenu(Selection<MainItem>),
    ConfigMenu(Selection<ConfigItem>),
    ModeMenu(Selection<GameMode>),
    Playing { game: Game, timer: MoveTimer },
    Paused { game: Game, selection: Selection<PauseItem> },
    Quit,
}

impl Default for Screen {
    fn default() -> Self {
        Self::MainMenu(Selection::new())
    }
}

impl Screen {
    pub fn name(&self) -> &'static str {
        match self {
            Self::MainMenu(_) => "main menu",
            Self::ConfigMenu(_) => "config menu",
            Self::ModeMenu(_) => "mode menu",
            Self::Playing { .. } => "playing",
            Self::Paused { .. } => "paused",
            Self::Quit => "quit",
        }
    }

    fn start_game(session: &mut Session, now: Instant) -> Self {
        session.regenerate_grass();
        let game = Game::new(session);
        info!(
            "starting game: {} food, {} obstacles, {}ms interval, {:?}",
            session.prefs.food_count,
            session.prefs.obstacle_count,
            session.prefs.move_interval_ms,
            session.prefs.mode,
        );
        Self::Playing { game, timer: MoveTimer::new(now) }
    }

    /// Apply one input and return the next screen
    pub fn handle_input(self, input: Input, session: &mut Session, now: Instant) -> Self {
        match self {
            Self::MainMenu(mut selection) => match input {
                Input::Dir(Dir::U) => {
                    selection.prev();
                    Self::MainMenu(selection)
                }
                Input::Dir(Dir::D) => {
                    selection.next();
                    Self::MainMenu(selection)
                }
                Input::Confirm => match selection.current() {
                    MainItem::Start => Self::start_game(session, now),
                    MainItem::Config => Self::ConfigMenu(Selection::new()),
                    MainItem::Mode => Self::ModeMenu(Selection::at(session.prefs.mode)),
                    MainItem::Quit => Self::Quit,
                },
                Input::Dir(_) | Input::Cancel => Self::MainMenu(selection),
            },

            Self::ConfigMenu(mut selection) => match input {
                Input::Dir(Dir::U) => {
                    selection.prev();
                    Self::ConfigMenu(selection)
                }
                Input::Dir(Dir::D) => {
                    selection.next();
                    Self::ConfigMenu(selection)
                }
                Input::Dir(_) | Input::Confirm if selection.current() == ConfigItem::Back => {
                    Self::MainMenu(Selection::at(MainItem::Config))
                }
                Input::Dir(dir) => {
                    session.prefs.adjust(selection.current(), dir == Dir::R);
                    Self::ConfigMenu(selection)
                }
                Input::Confirm => Self::ConfigMenu(selection),
                Input::Cancel => Self::MainMenu(Selection::at(MainItem::Config)),
            },

            Self::ModeMenu(mut selection) => match input {
                Input::Dir(Dir::U) => {
                    selection.prev();
                    Self::ModeMenu(selection)
                }
                Input::Dir(Dir::D) => {
                    selection.next();
                    Self::ModeMenu(selection)
                }
                Input::Confirm => {
                    session.prefs.mode = selection.current();
                    info!("game mode set to {:?}", session.prefs.mode);
                    Self::MainMenu(Selection::at(MainItem::Mode))
                }
                Input::Cancel => Self::MainMenu(Selection::at(MainItem::Mode)),
                Input::Dir(_) => Self::ModeMenu(selection),
            },

            Self::Playing { mut game, timer } => match input {
                Input::Dir(dir) => {
                    game.turn(dir);
                    Self::Playing { game, timer }
                }
                Input::Cancel => Self::Paused { game, selection: Selection::new() },
                Input::Confirm => Self::Playing { game, timer },
            },

            Self::Paused { game, mut selection } => match input {
                Input::Dir(Dir::U) => {
                    selection.prev();
                    Self::Paused { game, selection }
                }
                Input::Dir(Dir::D) => {
                    selection.next();
                    Self::Paused { game, selection }
                }
                Input::Confirm if selection.current() == PauseItem::MainMenu => {
                    session.record_score(game.score());
                    Self::MainMenu(Selection::new())
                }
                Input::Confirm | Input::Cancel => Self::Playing { game, timer: MoveTimer::new(now) },
                Input::Dir(_) => Self::Paused { game, selection },
            },

            Self::Quit => Self::Quit,
        }
    }

    /// Advance the simulation if playing and the movement interval elapsed
    pub fn update(&mut self, session: &mut Session, now: Instant) -> Option<Advance> {
        match self {
            Self::Playing { game, timer } => {
                if timer.try_advance(now, session.prefs.movement_interval()) {
                    Some(game.advance(session))
                } else {
                    None
                }
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::prefs::Prefs;
    use crate::basic::GRID;
    use std::time::Duration;

    fn session() -> Session {
        Session::new(Prefs::default().food_count(0).obstacle_count(0), GRID, Some(5))
    }

    fn press(screen: Screen, inputs: &[Input], session: &mut Session) -> Screen {
        let now = Instant::now();
        inputs
            .iter()
            .fold(screen, |screen, input| screen.handle_input(*input, session, now))
    }

    const UP: Input = Input::Dir(Dir::U);
    const DOWN: Input = Input::Dir(Dir::D);
    const LEFT: Input = Input::Dir(Dir::L);
    const RIGHT: Input = Input::Dir(Dir::R);

    #[test]
    fn test_main_menu_wraps() {
        let mut session = session();
        let screen = press(Screen::default(), &[UP], &mut session);
        match &screen {
            Screen::MainMenu(selection) => assert_eq!(selection.index(), 3),
            other => panic!("unexpected screen {}", other.name()),
        }
        let screen = press(screen, &[Input::Confirm], &mut session);
        assert!(matches!(screen, Screen::Quit));
    }

    #[test]
    fn test_main_menu_targets() {
        let mut session = session();
        let screen = press(Screen::default(), &[Input::Confirm], &mut session);
        assert!(matches!(screen, Screen::Playing { .. }));

        let screen = press(Screen::default(), &[DOWN, Input::Confirm], &mut session);
        assert!(matches!(screen, Screen::ConfigMenu(_)));

        let screen = press(Screen::default(), &[DOWN, DOWN, Input::Confirm], &mut session);
        assert!(matches!(screen, Screen::ModeMenu(_)));

        // cancel and sideways input do nothing on the main menu
        let screen = press(Screen::default(), &[Input::Cancel, LEFT, RIGHT], &mut session);
        assert!(matches!(screen, Screen::MainMenu(s) if s.index() == 0));
    }

    #[test]
    fn test_pause_and_resume() {
        let mut session = session();
        let screen = press(Screen::default(), &[Input::Confirm, Input::Cancel], &mut session);
        assert!(matches!(screen, Screen::Paused { .. }));

        // direction keys only move the highlight while paused
        let screen = press(screen, &[UP], &mut session);
        match &screen {
            Screen::Paused { game, selection } => {
                assert_eq!(selection.current(), PauseItem::MainMenu);
                assert_eq!(game.snake().dir(), Dir::R);
            }
            other => panic!("unexpected screen {}", other.name()),
        }

        let screen = press(screen, &[Input::Cancel], &mut session);
        assert!(matches!(screen, Screen::Playing { .. }));

        let screen = press(screen, &[Input::Cancel, Input::Confirm], &mut session);
        assert!(matches!(screen, Screen::Playing { .. }));

        let screen = press(screen, &[Input::Cancel, DOWN, Input::Confirm], &mut session);
        assert!(matches!(screen, Screen::MainMenu(s) if s.current() == MainItem::Start));
    }

    #[test]
    fn test_playing_turns() {
        let mut session = session();
        let screen = press(Screen::default(), &[Input::Confirm, LEFT], &mut session);
        let screen = match screen {
            Screen::Playing { game, timer } => {
                assert_eq!(game.snake().dir(), Dir::R);
                Screen::Playing { game, timer }
            }
            other => panic!("unexpected screen {}", other.name()),
        };
        let screen = press(screen, &[DOWN], &mut session);
        match screen {
            Screen::Playing { game, .. } => assert_eq!(game.snake().dir(), Dir::D),
            other => panic!("unexpected screen {}", other.name()),
        }
    }

    #[test]
    fn test_config_menu() {
        let mut session = session();
        let screen = press(Screen::ConfigMenu(Selection::new()), &[RIGHT, RIGHT], &mut session);
        assert_eq!(session.prefs.move_interval_ms, 98);

        let screen = press(screen, &[DOWN, LEFT], &mut session);
        assert_eq!(session.prefs.food_count, 0);

        // up from the top wraps to "Back", sideways input leaves
        let screen = press(screen, &[UP, UP], &mut session);
        assert!(matches!(&screen, Screen::ConfigMenu(s) if s.current() == ConfigItem::Back));
        let screen = press(screen, &[LEFT], &mut session);
        assert!(matches!(screen, Screen::MainMenu(s) if s.current() == MainItem::Config));

        let screen = press(Screen::ConfigMenu(Selection::new()), &[Input::Cancel], &mut session);
        assert!(matches!(screen, Screen::MainMenu(_)));
    }

    #[test]
    fn test_config_speed_floor() {
        let mut session = session();
        session.prefs.move_interval_ms = 1;
        let screen = press(Screen::ConfigMenu(Selection::new()), &[RIGHT, RIGHT], &mut session);
        assert_eq!(session.prefs.move_interval_ms, 1);
        assert!(matches!(screen, Screen::ConfigMenu(_)));
    }

    #[test]
    fn test_mode_menu() {
        let mut session = session();
        let screen = press(Screen::ModeMenu(Selection::new()), &[DOWN, Input::Cancel], &mut session);
        assert_eq!(session.prefs.mode, GameMode::Normal);
        assert!(matches!(screen, Screen::MainMenu(s) if s.current() == MainItem::Mode));

        let screen = press(Screen::ModeMenu(Selection::new()), &[UP, Input::Confirm], &mut session);
        assert_eq!(session.prefs.mode, GameMode::Flashlight);
        assert!(matches!(screen, Screen::MainMenu(_)));

        // the highlight starts at the active mode
        let screen = press(Screen::default(), &[DOWN, DOWN, Input::Confirm], &mut session);
        assert!(matches!(screen, Screen::ModeMenu(s) if s.current() == GameMode::Flashlight));
    }

    #[test]
    fn test_update_paces_movement() {
        let mut session = session();
        let start = Instant::now();
        let mut screen = Screen::default().handle_input(Input::Confirm, &mut session, start);

        assert_eq!(screen.update(&mut session, start + Duration::from_millis(50)), None);
        assert_eq!(
            screen.update(&mut session, start + Duration::from_millis(100)),
            Some(Advance::Moved)
        );
        assert_eq!(screen.update(&mut session, start + Duration::from_millis(150)), None);

        let mut paused = screen.handle_input(Input::Cancel, &mut session, start);
        assert_eq!(paused.update(&mut session, start + Duration::from_secs(10)), None);
    }
}
