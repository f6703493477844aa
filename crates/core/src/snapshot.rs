use crate::food::Food;
use crate::grid::ObstacleGrid;
use crate::types::{Direction, Phase, Position};

/// Read-only view of the engine handed to the presentation layer once per frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineSnapshot {
    pub phase: Phase,
    /// Head first
    pub snake: Vec<Position>,
    pub direction: Direction,
    pub obstacles: ObstacleGrid,
    pub food: Option<Food>,
    pub score: u32,
    pub level: u32,
    pub tick_rate: u32,
    pub ticks: u64,
}

impl EngineSnapshot {
    pub fn playable(&self) -> bool {
        self.phase == Phase::Running
    }

    pub fn game_over(&self) -> bool {
        matches!(self.phase, Phase::Terminated(_))
    }

    pub fn head(&self) -> Option<Position> {
        self.snake.first().copied()
    }
}

impl Default for EngineSnapshot {
    fn default() -> Self {
        Self {
            phase: Phase::Ready,
            snake: Vec::with_capacity(64),
            direction: Direction::Right,
            obstacles: ObstacleGrid::new(),
            food: None,
            score: 0,
            level: 1,
            tick_rate: 0,
            ticks: 0,
        }
    }
}
