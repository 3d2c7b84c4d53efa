use log::debug;

use crate::app::session::Session;
use crate::basic::{Cell, Dir};
use snake::Snake;

pub mod snake;
pub mod sparkle;
pub mod spawn;

/// Obstacles added every time food is eaten
pub const OBSTACLES_PER_MEAL: usize = 5;

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Advance {
    Moved,
    Ate,
    /// The snake ran into itself or an obstacle at `at` (the head
    /// before the step) and the game was reset
    Crashed { at: Cell },
}

/// One round of play, replaced when the player starts a new game
pub struct Game {
    snake: Snake,
    food: Vec<Cell>,
    obstacles: Vec<Cell>,
    score: u32,
}

impl Game {
    pub fn new(session: &mut Session) -> Self {
        let mut game = Self {
            snake: Snake::new(session.grid.center_cell(), Dir::R),
            food: vec![],
            obstacles: vec![],
            score: 0,
        };
        game.reset(session);
        game
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn food(&self) -> &[Cell] {
        &self.food
    }

    pub fn obstacles(&self) -> &[Cell] {
        &self.obstacles
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn turn(&mut self, dir: Dir) -> bool {
        self.snake.turn(dir)
    }

    /// Length 1 snake in the center going right, fresh food and obstacles
    pub fn reset(&mut self, session: &mut Session) {
        self.snake = Snake::new(session.grid.center_cell(), Dir::R);
        self.score = 0;
        self.food.clear();
        self.obstacles.clear();
        self.spawn_food(session);
        let count = session.prefs.obstacle_count;
        self.spawn_obstacles(count, session);
    }

    fn spawn_food(&mut self, session: &mut Session) {
        let body: Vec<Cell> = self.snake.cells().collect();
        spawn::spawn(
            session.prefs.food_count,
            &mut self.food,
            &[&body[..], &self.obstacles[..]],
            session.grid,
            &mut session.rng,
        );
    }

    fn spawn_obstacles(&mut self, count: usize, session: &mut Session) {
        let body: Vec<Cell> = self.snake.cells().collect();
        spawn::spawn(
            count,
            &mut self.obstacles,
            &[&body[..], &self.food[..]],
            session.grid,
            &mut session.rng,
        );
    }

    /// Move the snake one cell
    pub fn advance(&mut self, session: &mut Session) -> Advance {
        let new_head = self.snake.next_head(session.grid);

        if self.snake.contains(new_head) || self.obstacles.contains(&new_head) {
            let at = self.snake.head();
            debug!(
                "crashed at {:?}, length {}, score {}",
                new_head,
                self.snake.len(),
                self.score
            );
            session.sparkles.burst(at.center(session.grid));
            session.record_score(self.score);
            self.reset(session);
            return Advance::Crashed { at };
        }

        let ate = self.food.contains(&new_head);
        self.snake.step(new_head, ate);
        session.sparkles.decay();

        if ate {
            self.score += 1;
            session.record_score(self.score);
            debug!("ate at {:?}, score {}", new_head, self.score);
            self.food.clear();
            self.spawn_food(session);
            self.spawn_obstacles(OBSTACLES_PER_MEAL, session);
            Advance::Ate
        } else {
            Advance::Moved
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::prefs::Prefs;
    use crate::basic::{GridDim, GRID};
    use std::collections::HashSet;

    fn session(prefs: Prefs) -> Session {
        Session::new(prefs, GRID, Some(42))
    }

    fn assert_disjoint(game: &Game) {
        let snake: HashSet<Cell> = game.snake().cells().collect();
        let food: HashSet<Cell> = game.food().iter().copied().collect();
        let obstacles: HashSet<Cell> = game.obstacles().iter().copied().collect();
        assert_eq!(food.len(), game.food().len(), "duplicate food");
        assert_eq!(obstacles.len(), game.obstacles().len(), "duplicate obstacles");
        assert!(snake.is_disjoint(&food));
        assert!(snake.is_disjoint(&obstacles));
        assert!(food.is_disjoint(&obstacles));
    }

    #[test]
    fn test_new_game() {
        let mut session = session(Prefs::default());
        let game = Game::new(&mut session);
        assert_eq!(game.snake().len(), 1);
        assert_eq!(game.snake().head(), GRID.center_cell());
        assert_eq!(game.snake().dir(), Dir::R);
        assert_eq!(game.food().len(), 10);
        assert_eq!(game.obstacles().len(), 15);
        assert_eq!(game.score(), 0);
        assert_disjoint(&game);
    }

    #[test]
    fn test_eat_food_ahead() {
        let mut session = session(Prefs::default().food_count(1).obstacle_count(0));
        let mut game = Game::new(&mut session);
        let ahead = game.snake().next_head(GRID);
        game.food = vec![ahead];

        assert_eq!(game.advance(&mut session), Advance::Ate);
        assert_eq!(game.snake().len(), 2);
        assert_eq!(game.snake().head(), ahead);
        assert_eq!(game.score(), 1);
        assert_eq!(session.high_score, 1);
        assert_eq!(game.food().len(), 1);
        assert_eq!(game.obstacles().len(), OBSTACLES_PER_MEAL);
        assert_disjoint(&game);
    }

    #[test]
    fn test_eating_replaces_whole_food_set() {
        let mut session = session(Prefs::default().food_count(4).obstacle_count(3));
        let mut game = Game::new(&mut session);
        let ahead = game.snake().next_head(GRID);
        game.food.retain(|cell| *cell != ahead);
        game.obstacles.retain(|cell| *cell != ahead);
        game.food[0] = ahead;
        let obstacles = game.obstacles().len();

        assert_eq!(game.advance(&mut session), Advance::Ate);
        assert_eq!(game.food().len(), 4);
        assert_eq!(game.obstacles().len(), obstacles + OBSTACLES_PER_MEAL);
        assert_disjoint(&game);
    }

    #[test]
    fn test_move_keeps_length() {
        let mut session = session(Prefs::default().food_count(0).obstacle_count(0));
        let mut game = Game::new(&mut session);
        let start = game.snake().head();
        assert_eq!(game.advance(&mut session), Advance::Moved);
        assert_eq!(game.snake().len(), 1);
        assert_eq!(game.snake().head(), Cell { x: start.x + GRID.step, y: start.y });
        assert_eq!(game.score(), 0);
    }

    #[test]
    fn test_wraps_around_edge() {
        let mut session = session(Prefs::default().food_count(0).obstacle_count(0));
        let mut game = Game::new(&mut session);
        // from the center, 20 steps right reach the right edge and wrap
        for _ in 0..GRID.columns() / 2 {
            assert_eq!(game.advance(&mut session), Advance::Moved);
        }
        assert_eq!(game.snake().head(), Cell { x: 0, y: GRID.center_cell().y });
    }

    #[test]
    fn test_obstacle_crash_resets() {
        let mut session = session(Prefs::default().food_count(2).obstacle_count(0));
        let mut game = Game::new(&mut session);
        game.score = 7;
        let head = game.snake().head();
        let ahead = game.snake().next_head(GRID);
        game.food.retain(|cell| *cell != ahead);
        game.obstacles = vec![ahead];

        assert_eq!(game.advance(&mut session), Advance::Crashed { at: head });
        assert_eq!(session.high_score, 7);
        assert_eq!(session.sparkles.len(), sparkle::BURST_SIZE);
        assert!(session.sparkles.iter().all(|s| s.pos == head.center(GRID)));

        assert_eq!(game.score(), 0);
        assert_eq!(game.snake().len(), 1);
        assert_eq!(game.snake().head(), GRID.center_cell());
        assert_eq!(game.snake().dir(), Dir::R);
        assert_eq!(game.food().len(), 2);
        assert!(game.obstacles().is_empty());
    }

    #[test]
    fn test_self_crash() {
        // a tiny board where the snake can't avoid itself
        let grid = GridDim { width: 80, height: 80, step: 20 };
        let mut session = Session::new(Prefs::default().food_count(0).obstacle_count(0), grid, Some(1));
        let mut game = Game::new(&mut session);
        let center = grid.center_cell();
        game.snake = Snake::new(center, Dir::R);
        // grow into a U shape: right, down, left, then up into the body
        for (dir, grow) in [(Dir::R, true), (Dir::D, true), (Dir::L, true)] {
            game.turn(dir);
            let next = game.snake.next_head(grid);
            game.snake.step(next, grow);
        }
        assert_eq!(game.snake().len(), 4);
        assert!(game.turn(Dir::U));
        assert!(matches!(game.advance(&mut session), Advance::Crashed { .. }));
        assert_eq!(game.snake().len(), 1);
    }

    #[test]
    fn test_high_score_monotonic() {
        let mut session = session(Prefs::default().food_count(1).obstacle_count(0));
        session.high_score = 10;
        let mut game = Game::new(&mut session);
        game.score = 3;
        let ahead = game.snake().next_head(GRID);
        game.food.clear();
        game.obstacles = vec![ahead];
        assert!(matches!(game.advance(&mut session), Advance::Crashed { .. }));
        assert_eq!(session.high_score, 10);
    }

    #[test]
    fn test_sparkles_decay_on_steps() {
        let mut session = session(Prefs::default().food_count(0).obstacle_count(0));
        let mut game = Game::new(&mut session);
        session.sparkles.burst(GRID.center_cell().center(GRID));
        for _ in 0..25 {
            game.advance(&mut session);
        }
        assert!(session.sparkles.is_empty());
    }
}
