//! Engine module - owns the complete game state and advances it one tick at a time
//!
//! This module ties together all core components: snake, obstacles, food, RNG and
//! progression. It performs no I/O; persistence and timing belong to the caller.

use tracing::{debug, info, trace, warn};

use crate::food::{spawn_food, Food};
use crate::grid::ObstacleGrid;
use crate::level::{clamp_level, level_config};
use crate::rng::SimpleRng;
use crate::scoring::{base_tick_rate, progression_after_eat, tick_interval_ms, Progression};
use crate::snake::{Snake, START_DIRECTION};
use crate::snapshot::EngineSnapshot;
use crate::types::*;

/// Seed used by [`GameEngine::new`]
pub const DEFAULT_SEED: u32 = 1;

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameEngine {
    phase: Phase,
    snake: Snake,
    /// Heading for the next movement step. Turns land here within the tick
    /// that carries them, so at most one turn applies per step.
    direction: Direction,
    obstacles: ObstacleGrid,
    food: Option<Food>,
    score: u32,
    level: u32,
    tick_rate: u32,
    /// Movement steps taken (pause and save ticks excluded)
    ticks: u64,
    rng: SimpleRng,
}

impl GameEngine {
    /// Create a new game at `initial_level` with the default seed.
    ///
    /// Out-of-range levels are clamped into `1..=MAX_LEVEL`.
    pub fn new(initial_level: u32) -> Self {
        Self::with_seed(initial_level, DEFAULT_SEED)
    }

    /// Create a new game with the given RNG seed
    pub fn with_seed(initial_level: u32, seed: u32) -> Self {
        let level = clamp_level(initial_level);
        if level != initial_level {
            warn!(requested = initial_level, level, "initial level out of range, clamped");
        }

        let mut engine = Self {
            phase: Phase::Ready,
            snake: Snake::at_start(),
            direction: START_DIRECTION,
            obstacles: ObstacleGrid::new(),
            food: None,
            score: 0,
            level,
            tick_rate: 0,
            ticks: 0,
            rng: SimpleRng::new(seed),
        };
        engine.load_level(level);
        engine
    }

    /// Leave the `Ready` phase. No-op in any other phase.
    pub fn start(&mut self) {
        if self.phase == Phase::Ready {
            self.phase = Phase::Running;
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn paused(&self) -> bool {
        self.phase == Phase::Paused
    }

    pub fn game_over(&self) -> bool {
        matches!(self.phase, Phase::Terminated(_))
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn food(&self) -> Option<Food> {
        self.food
    }

    pub fn obstacles(&self) -> &ObstacleGrid {
        &self.obstacles
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn tick_rate(&self) -> u32 {
        self.tick_rate
    }

    /// Wall-clock interval the caller should wait between ticks
    pub fn tick_interval_ms(&self) -> u32 {
        tick_interval_ms(self.tick_rate)
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn snapshot_into(&self, out: &mut EngineSnapshot) {
        out.phase = self.phase;
        out.snake.clear();
        out.snake.extend(self.snake.iter());
        out.direction = self.direction;
        out.obstacles = self.obstacles;
        out.food = self.food;
        out.score = self.score;
        out.level = self.level;
        out.tick_rate = self.tick_rate;
        out.ticks = self.ticks;
    }

    pub fn snapshot(&self) -> EngineSnapshot {
        let mut s = EngineSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Advance the simulation by one step.
    ///
    /// - `Terminated`: no-op, repeats the terminal outcome.
    /// - `Ready`: starts the game, then handles `command` normally.
    /// - `TogglePause`: flips `Running`/`Paused` without moving.
    /// - `Paused`: every other command is ignored.
    /// - `RequestSave`: returns `SaveRequested` without moving.
    /// - Otherwise applies at most one turn and moves the head one cell.
    pub fn tick(&mut self, command: Command) -> TickOutcome {
        match self.phase {
            Phase::Terminated(reason) => return TickOutcome::GameOver(reason),
            Phase::Ready => self.start(),
            Phase::Running | Phase::Paused => {}
        }

        if command == Command::TogglePause {
            self.toggle_pause();
            return TickOutcome::Continue;
        }

        if self.phase == Phase::Paused {
            return TickOutcome::Continue;
        }

        match command {
            Command::SetDirection(d) => self.request_direction(d),
            Command::RequestSave => return TickOutcome::SaveRequested,
            Command::None | Command::TogglePause => {}
        }

        self.step()
    }

    fn toggle_pause(&mut self) {
        self.phase = match self.phase {
            Phase::Running => Phase::Paused,
            Phase::Paused => Phase::Running,
            other => other,
        };
        debug!(phase = self.phase.as_str(), "pause toggled");
    }

    /// Turn for this tick's movement step, rejecting reversals
    fn request_direction(&mut self, direction: Direction) {
        if self.direction.is_opposite(direction) {
            trace!(current = self.direction.as_str(), requested = direction.as_str(), "reversal ignored");
            return;
        }
        self.direction = direction;
    }

    /// First collision for a prospective head, in priority order
    fn collision_at(&self, pos: Position) -> Option<GameOverReason> {
        if !pos.in_bounds() {
            return Some(GameOverReason::Boundary);
        }
        if self.obstacles.contains(pos) {
            return Some(GameOverReason::Wall);
        }
        // Pre-move body: the tail cell counts even though it is about to move.
        if self.snake.contains(pos) {
            return Some(GameOverReason::SelfCollision);
        }
        None
    }

    fn step(&mut self) -> TickOutcome {
        let new_head = self.snake.head().moved(self.direction);
        self.ticks = self.ticks.wrapping_add(1);

        if let Some(reason) = self.collision_at(new_head) {
            return self.terminate(reason);
        }

        self.snake.push_head(new_head);

        match self.food {
            Some(food) if food.position == new_head => self.eat(food),
            _ => {
                self.snake.pop_tail();
                self.age_food();
                TickOutcome::Continue
            }
        }
    }

    fn eat(&mut self, food: Food) -> TickOutcome {
        self.score = self.score.saturating_add(food.weight);
        debug!(weight = food.weight, score = self.score, "food eaten");
        self.respawn_food();

        match progression_after_eat(self.score, self.level, self.tick_rate) {
            Progression::None => TickOutcome::Continue,
            Progression::LevelUp(level) => {
                self.load_level(level);
                TickOutcome::LevelUp(level)
            }
            Progression::SpeedUp(tick_rate) => {
                debug!(from = self.tick_rate, to = tick_rate, "max level, speeding up");
                self.tick_rate = tick_rate;
                TickOutcome::Continue
            }
        }
    }

    fn age_food(&mut self) {
        match self.food.as_mut() {
            Some(food) => {
                if food.tick_down() {
                    trace!(x = food.position.x, y = food.position.y, "food expired");
                    self.respawn_food();
                }
            }
            // Grid was saturated last time; try again.
            None => self.respawn_food(),
        }
    }

    fn respawn_food(&mut self) {
        self.food = spawn_food(&mut self.rng, &self.snake, &self.obstacles, self.tick_rate);
        if self.food.is_none() {
            debug!("no free cell for food, skipping spawn");
        }
    }

    /// Enter `level`: new walls and tick rate, snake back at the start, fresh food
    fn load_level(&mut self, level: u32) {
        self.level = clamp_level(level);
        self.tick_rate = base_tick_rate(self.level);
        self.obstacles = level_config(self.level).obstacles();
        self.snake = Snake::at_start();
        self.direction = START_DIRECTION;
        self.respawn_food();
        debug!(level = self.level, tick_rate = self.tick_rate, "level loaded");
    }

    fn terminate(&mut self, reason: GameOverReason) -> TickOutcome {
        self.phase = Phase::Terminated(reason);
        info!(
            reason = reason.as_str(),
            score = self.score,
            level = self.level,
            "game over"
        );
        TickOutcome::GameOver(reason)
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::level::WallRect;

    fn p(x: i32, y: i32) -> Position {
        Position::new(x, y)
    }

    /// Running engine with an explicit layout and no obstacles.
    fn running_with(segments: &[Position], direction: Direction, food: Option<Food>) -> GameEngine {
        let mut engine = GameEngine::with_seed(1, 12345);
        engine.snake = Snake::from_segments(segments.iter().copied()).unwrap();
        engine.direction = direction;
        engine.obstacles = ObstacleGrid::new();
        engine.food = food;
        engine.start();
        engine
    }

    fn food_at(pos: Position, weight: u32) -> Option<Food> {
        Some(Food {
            position: pos,
            remaining_ticks: 100,
            weight,
        })
    }

    fn far_food() -> Option<Food> {
        food_at(p(29, 19), 1)
    }

    #[test]
    fn test_new_engine() {
        let engine = GameEngine::new(1);

        assert_eq!(engine.phase, Phase::Ready);
        assert_eq!(engine.score, 0);
        assert_eq!(engine.level, 1);
        assert_eq!(engine.tick_rate, 5);
        assert_eq!(engine.snake.len(), INITIAL_SNAKE_LEN);
        assert_eq!(engine.direction, Direction::Right);
        assert!(engine.obstacles.is_empty());

        let food = engine.food.unwrap();
        assert!(!engine.snake.contains(food.position));
    }

    #[test]
    fn test_new_clamps_level() {
        assert_eq!(GameEngine::new(0).level, 1);
        assert_eq!(GameEngine::new(9).level, MAX_LEVEL);
        assert_eq!(GameEngine::new(9).tick_rate, 10);
    }

    #[test]
    fn test_new_loads_level_obstacles() {
        let engine = GameEngine::new(4);
        assert_eq!(engine.obstacles, level_config(4).obstacles());
        assert_eq!(engine.tick_rate, 8);
        let food = engine.food.unwrap();
        assert!(!engine.obstacles.contains(food.position));
    }

    #[test]
    fn test_first_tick_starts_game() {
        let mut engine = GameEngine::new(1);
        assert_eq!(engine.tick(Command::None), TickOutcome::Continue);
        assert_eq!(engine.phase, Phase::Running);
        assert_eq!(engine.snake.head(), p(16, 10));
        assert_eq!(engine.ticks, 1);
    }

    #[test]
    fn test_eat_scenario() {
        // Pixels (100,100),(90,100),(80,100) on a 20px grid -> cells 5,4,3.
        let mut engine = running_with(&[p(5, 5), p(4, 5), p(3, 5)], Direction::Right, food_at(p(6, 5), 2));

        assert_eq!(engine.tick(Command::None), TickOutcome::Continue);
        assert_eq!(engine.snake.head(), p(6, 5));
        assert_eq!(engine.score, 2);
        assert_eq!(engine.snake.len(), 4);

        let food = engine.food.unwrap();
        assert_ne!(food.position, p(6, 5));
        assert!(!engine.snake.contains(food.position));
    }

    #[test]
    fn test_move_without_eating_keeps_length() {
        let mut engine = running_with(&[p(5, 5), p(4, 5), p(3, 5)], Direction::Right, far_food());

        engine.tick(Command::None);
        assert_eq!(engine.snake.len(), 3);
        assert_eq!(engine.snake.iter().collect::<Vec<_>>(), vec![p(6, 5), p(5, 5), p(4, 5)]);
        assert_eq!(engine.food.unwrap().remaining_ticks, 99);
    }

    #[test]
    fn test_boundary_collision() {
        let mut engine = running_with(&[p(0, 5), p(1, 5), p(2, 5)], Direction::Left, far_food());

        let outcome = engine.tick(Command::None);
        assert_eq!(outcome, TickOutcome::GameOver(GameOverReason::Boundary));
        assert_eq!(engine.phase, Phase::Terminated(GameOverReason::Boundary));
        // Snake is untouched by the fatal step.
        assert_eq!(engine.snake.head(), p(0, 5));
    }

    #[test]
    fn test_boundary_on_every_edge() {
        let cases = [
            (p(29, 3), p(28, 3), Direction::Right),
            (p(3, 0), p(3, 1), Direction::Up),
            (p(3, 19), p(3, 18), Direction::Down),
        ];
        for (head, neck, dir) in cases {
            let mut engine = running_with(&[head, neck], dir, far_food());
            assert_eq!(
                engine.tick(Command::None),
                TickOutcome::GameOver(GameOverReason::Boundary),
                "{:?}",
                dir
            );
        }
    }

    #[test]
    fn test_wall_collision() {
        let mut engine = running_with(&[p(5, 5), p(4, 5), p(3, 5)], Direction::Right, far_food());
        engine.obstacles = ObstacleGrid::from_walls(&[WallRect::new(6, 0, 1, 20)]);

        assert_eq!(engine.tick(Command::None), TickOutcome::GameOver(GameOverReason::Wall));
    }

    #[test]
    fn test_self_collision() {
        // Head turns back into its own body.
        let body = [p(5, 5), p(6, 5), p(6, 6), p(5, 6), p(4, 6), p(4, 5), p(4, 4)];
        let mut engine = running_with(&body, Direction::Left, far_food());

        assert_eq!(
            engine.tick(Command::None),
            TickOutcome::GameOver(GameOverReason::SelfCollision)
        );
        assert_eq!(engine.snake.len(), body.len());
    }

    #[test]
    fn test_moving_into_vacating_tail_is_fatal() {
        // Square loop: head (5,5) -> tail (5,6). Moving down targets the tail cell.
        let body = [p(5, 5), p(6, 5), p(6, 6), p(5, 6)];
        let mut engine = running_with(&body, Direction::Left, far_food());

        assert_eq!(
            engine.tick(Command::SetDirection(Direction::Down)),
            TickOutcome::GameOver(GameOverReason::SelfCollision)
        );
    }

    #[test]
    fn test_wall_reported_before_self() {
        let mut engine = running_with(&[p(5, 5), p(6, 5), p(6, 6), p(5, 6)], Direction::Left, far_food());
        engine.obstacles.set(p(5, 6), true);

        assert_eq!(
            engine.tick(Command::SetDirection(Direction::Down)),
            TickOutcome::GameOver(GameOverReason::Wall)
        );
    }

    #[test]
    fn test_reverse_direction_is_ignored() {
        let mut engine = running_with(&[p(5, 5), p(4, 5), p(3, 5)], Direction::Right, far_food());

        assert_eq!(engine.tick(Command::SetDirection(Direction::Left)), TickOutcome::Continue);
        assert_eq!(engine.direction, Direction::Right);
        assert_eq!(engine.snake.head(), p(6, 5));
    }

    #[test]
    fn test_turn_applies_on_same_tick() {
        let mut engine = running_with(&[p(5, 5), p(4, 5), p(3, 5)], Direction::Right, far_food());

        engine.tick(Command::SetDirection(Direction::Up));
        assert_eq!(engine.direction, Direction::Up);
        assert_eq!(engine.snake.head(), p(5, 4));
    }

    #[test]
    fn test_turn_is_checked_against_latest_heading() {
        let mut engine = running_with(&[p(5, 5), p(4, 5), p(3, 5)], Direction::Right, far_food());

        engine.tick(Command::SetDirection(Direction::Up));
        // Down reverses the new heading, not the old one.
        engine.tick(Command::SetDirection(Direction::Down));
        assert_eq!(engine.direction, Direction::Up);
        assert_eq!(engine.snake.head(), p(5, 3));
    }

    #[test]
    fn test_turn_during_pause_does_not_linger() {
        let mut engine = running_with(&[p(5, 5), p(4, 5), p(3, 5)], Direction::Right, far_food());

        engine.tick(Command::TogglePause);
        engine.tick(Command::SetDirection(Direction::Up));
        engine.tick(Command::TogglePause);
        engine.tick(Command::None);
        assert_eq!(engine.direction, Direction::Right);
        assert_eq!(engine.snake.head(), p(6, 5));
    }

    #[test]
    fn test_pause_is_non_advancing() {
        let mut engine = running_with(&[p(5, 5), p(4, 5), p(3, 5)], Direction::Right, far_food());

        assert_eq!(engine.tick(Command::TogglePause), TickOutcome::Continue);
        assert_eq!(engine.phase, Phase::Paused);
        assert_eq!(engine.snake.head(), p(5, 5));

        // Ignored while paused.
        engine.tick(Command::None);
        engine.tick(Command::SetDirection(Direction::Up));
        engine.tick(Command::RequestSave);
        assert_eq!(engine.snake.head(), p(5, 5));
        assert_eq!(engine.direction, Direction::Right);
        assert_eq!(engine.food.unwrap().remaining_ticks, 100);
        assert_eq!(engine.ticks, 0);

        assert_eq!(engine.tick(Command::TogglePause), TickOutcome::Continue);
        assert_eq!(engine.phase, Phase::Running);
        assert_eq!(engine.snake.head(), p(5, 5));

        engine.tick(Command::None);
        assert_eq!(engine.snake.head(), p(6, 5));
    }

    #[test]
    fn test_request_save_does_not_move() {
        let mut engine = running_with(&[p(5, 5), p(4, 5), p(3, 5)], Direction::Right, far_food());

        assert_eq!(engine.tick(Command::RequestSave), TickOutcome::SaveRequested);
        assert_eq!(engine.snake.head(), p(5, 5));
        assert_eq!(engine.phase, Phase::Running);
    }

    #[test]
    fn test_food_expiry_respawns_without_score() {
        let mut engine = running_with(
            &[p(5, 5), p(4, 5), p(3, 5)],
            Direction::Right,
            Some(Food {
                position: p(20, 15),
                remaining_ticks: 1,
                weight: 3,
            }),
        );

        engine.tick(Command::None);
        let food = engine.food.unwrap();
        assert!(food.remaining_ticks >= 5 * engine.tick_rate);
        assert!(!engine.snake.contains(food.position));
        assert_eq!(engine.score, 0);
    }

    #[test]
    fn test_level_up_on_exact_multiple() {
        let mut engine = running_with(&[p(5, 5), p(4, 5), p(3, 5)], Direction::Right, food_at(p(6, 5), 1));
        engine.score = 3;

        assert_eq!(engine.tick(Command::None), TickOutcome::Continue);
        assert_eq!(engine.score, 4);
        assert_eq!(engine.level, 1);

        engine.food = food_at(p(7, 5), 1);
        assert_eq!(engine.tick(Command::None), TickOutcome::LevelUp(2));
        assert_eq!(engine.score, 5);
        assert_eq!(engine.level, 2);
        assert_eq!(engine.tick_rate, 6);
        assert_eq!(engine.snake, Snake::at_start());
        assert_eq!(engine.direction, START_DIRECTION);
        assert_eq!(engine.obstacles, level_config(2).obstacles());
    }

    #[test]
    fn test_level_up_replaces_obstacles_and_food() {
        let mut engine = running_with(&[p(5, 5), p(4, 5), p(3, 5)], Direction::Right, food_at(p(6, 5), 2));
        engine.level = 3;
        engine.tick_rate = 7;
        engine.obstacles = level_config(3).obstacles();
        engine.score = 8;

        assert_eq!(engine.tick(Command::None), TickOutcome::LevelUp(4));
        assert_eq!(engine.obstacles, level_config(4).obstacles());
        let food = engine.food.unwrap();
        assert!(!engine.obstacles.contains(food.position));
        assert!(!engine.snake.contains(food.position));
    }

    #[test]
    fn test_jumping_over_threshold_does_not_level_up() {
        let mut engine = running_with(&[p(5, 5), p(4, 5), p(3, 5)], Direction::Right, food_at(p(6, 5), 3));
        engine.score = 4;

        assert_eq!(engine.tick(Command::None), TickOutcome::Continue);
        assert_eq!(engine.score, 7);
        assert_eq!(engine.level, 1);
        assert_eq!(engine.snake.len(), 4);
    }

    #[test]
    fn test_speed_up_at_max_level() {
        let mut engine = running_with(&[p(5, 5), p(4, 5), p(3, 5)], Direction::Right, food_at(p(6, 5), 1));
        engine.level = MAX_LEVEL;
        engine.tick_rate = 10;
        engine.score = 9;

        assert_eq!(engine.tick(Command::None), TickOutcome::Continue);
        assert_eq!(engine.level, MAX_LEVEL);
        assert_eq!(engine.tick_rate, 11);
        // No reset at max level: the snake grew in place.
        assert_eq!(engine.snake.head(), p(6, 5));
        assert_eq!(engine.snake.len(), 4);
    }

    #[test]
    fn test_saturated_grid_skips_food() {
        let mut engine = running_with(&[p(5, 5), p(4, 5), p(3, 5)], Direction::Right, food_at(p(6, 5), 1));
        let mut walls = ObstacleGrid::from_walls(&[WallRect::new(0, 0, 30, 20)]);
        for cell in [p(5, 5), p(4, 5), p(3, 5), p(6, 5)] {
            walls.set(cell, false);
        }
        engine.obstacles = walls;

        assert_eq!(engine.tick(Command::None), TickOutcome::Continue);
        assert_eq!(engine.score, 1);
        assert_eq!(engine.food, None);

        // Next step runs into the wall; no panic on the missing food.
        assert_eq!(engine.tick(Command::None), TickOutcome::GameOver(GameOverReason::Wall));
    }

    #[test]
    fn test_missing_food_is_retried() {
        let mut engine = running_with(&[p(5, 5), p(4, 5), p(3, 5)], Direction::Right, None);

        engine.tick(Command::None);
        assert!(engine.food.is_some());
    }

    #[test]
    fn test_terminated_is_absorbing() {
        let mut engine = running_with(&[p(0, 5), p(1, 5), p(2, 5)], Direction::Left, far_food());
        engine.score = 12;
        let over = engine.tick(Command::None);

        for cmd in [
            Command::None,
            Command::TogglePause,
            Command::RequestSave,
            Command::SetDirection(Direction::Up),
        ] {
            assert_eq!(engine.tick(cmd), over);
        }
        assert_eq!(engine.score, 12);
        assert_eq!(engine.level, 1);
        assert_eq!(engine.phase, Phase::Terminated(GameOverReason::Boundary));
    }

    #[test]
    fn test_snapshot_mirrors_state() {
        let mut engine = GameEngine::with_seed(2, 7);
        engine.tick(Command::None);

        let snap = engine.snapshot();
        assert_eq!(snap.phase, Phase::Running);
        assert_eq!(snap.snake, engine.snake.iter().collect::<Vec<_>>());
        assert_eq!(snap.food, engine.food);
        assert_eq!(snap.level, 2);
        assert_eq!(snap.tick_rate, 6);
        assert_eq!(snap.ticks, 1);
        assert!(snap.playable());
    }

    #[test]
    fn test_tick_interval() {
        assert_eq!(GameEngine::new(1).tick_interval_ms(), 200);
        assert_eq!(GameEngine::new(5).tick_interval_ms(), 100);
    }
}
