//! Food module - placement, lifetime and value of the single active food item
//!
//! Placement is rejection sampling over the whole grid. When the free area gets
//! small the sampler gives up after a bounded number of draws and falls back to
//! choosing uniformly among the remaining free cells, so a saturated grid yields
//! `None` instead of spinning forever.

use crate::grid::ObstacleGrid;
use crate::rng::SimpleRng;
use crate::snake::Snake;
use crate::types::{
    Position, FOOD_LIFETIME_SECS, FOOD_WEIGHTS, GRID_CELLS, GRID_HEIGHT, GRID_WIDTH,
};

/// Random draws tried before scanning for free cells
const MAX_SAMPLE_ATTEMPTS: u32 = 64;

/// The active food item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Food {
    pub position: Position,
    /// Movement steps left before the food expires (always > 0 while active)
    pub remaining_ticks: u32,
    /// Points awarded when eaten, one of 1, 2 or 3
    pub weight: u32,
}

impl Food {
    /// Count down one movement step. Returns true once the food has expired.
    pub fn tick_down(&mut self) -> bool {
        self.remaining_ticks = self.remaining_ticks.saturating_sub(1);
        self.remaining_ticks == 0
    }
}

/// Lifetime in ticks for a lifetime in seconds at `tick_rate` ticks per second.
///
/// Keeps the wall-clock lifetime constant as the game speeds up.
pub fn lifetime_ticks(secs: u32, tick_rate: u32) -> u32 {
    secs.saturating_mul(tick_rate).max(1)
}

/// Spawn a food item on a cell that is neither snake nor obstacle.
///
/// Returns `None` if every cell is occupied.
pub fn spawn_food(
    rng: &mut SimpleRng,
    snake: &Snake,
    obstacles: &ObstacleGrid,
    tick_rate: u32,
) -> Option<Food> {
    let position = pick_free_cell(rng, snake, obstacles)?;
    let (min_secs, max_secs) = FOOD_LIFETIME_SECS;
    let secs = rng.range_inclusive(min_secs, max_secs);
    let weight = rng.pick(&FOOD_WEIGHTS).unwrap_or(1);

    Some(Food {
        position,
        remaining_ticks: lifetime_ticks(secs, tick_rate),
        weight,
    })
}

fn is_free(pos: Position, snake: &Snake, obstacles: &ObstacleGrid) -> bool {
    !obstacles.contains(pos) && !snake.contains(pos)
}

fn pick_free_cell(rng: &mut SimpleRng, snake: &Snake, obstacles: &ObstacleGrid) -> Option<Position> {
    for _ in 0..MAX_SAMPLE_ATTEMPTS {
        let x = rng.next_range(GRID_WIDTH as u32) as i32;
        let y = rng.next_range(GRID_HEIGHT as u32) as i32;
        let pos = Position::new(x, y);
        if is_free(pos, snake, obstacles) {
            return Some(pos);
        }
    }

    // Crowded grid: pick the k-th free cell.
    let mut occupied = *obstacles;
    for seg in snake.iter() {
        occupied.set(seg, true);
    }
    let free = GRID_CELLS - occupied.count();
    if free == 0 {
        return None;
    }

    let k = rng.next_range(free as u32) as usize;
    occupied
        .cells()
        .iter()
        .enumerate()
        .filter(|(_, &blocked)| !blocked)
        .nth(k)
        .map(|(idx, _)| Position::from_index(idx))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::level::WallRect;

    #[test]
    fn test_spawn_avoids_snake_and_obstacles() {
        let snake = Snake::at_start();
        let obstacles = ObstacleGrid::from_walls(&[WallRect::new(0, 0, 30, 10)]);
        let mut rng = SimpleRng::new(42);

        for _ in 0..500 {
            let food = spawn_food(&mut rng, &snake, &obstacles, 5).unwrap();
            assert!(food.position.in_bounds());
            assert!(!snake.contains(food.position));
            assert!(!obstacles.contains(food.position));
        }
    }

    #[test]
    fn test_spawn_timer_and_weight_ranges() {
        let snake = Snake::at_start();
        let obstacles = ObstacleGrid::new();
        let mut rng = SimpleRng::new(9);

        for _ in 0..200 {
            let food = spawn_food(&mut rng, &snake, &obstacles, 7).unwrap();
            assert!((5 * 7..=10 * 7).contains(&food.remaining_ticks));
            assert!(FOOD_WEIGHTS.contains(&food.weight));
        }
    }

    #[test]
    fn test_spawn_on_full_grid_returns_none() {
        let snake = Snake::at_start();
        let obstacles = ObstacleGrid::from_walls(&[WallRect::new(0, 0, 30, 20)]);
        let mut rng = SimpleRng::new(1);

        assert_eq!(spawn_food(&mut rng, &snake, &obstacles, 5), None);
    }

    #[test]
    fn test_spawn_finds_last_free_cell() {
        let snake = Snake::at_start();
        let mut obstacles = ObstacleGrid::from_walls(&[WallRect::new(0, 0, 30, 20)]);
        for seg in snake.iter() {
            obstacles.set(seg, false);
        }
        let hole = Position::new(29, 19);
        obstacles.set(hole, false);

        let mut rng = SimpleRng::new(5);
        let food = spawn_food(&mut rng, &snake, &obstacles, 5).unwrap();
        assert_eq!(food.position, hole);
    }

    #[test]
    fn test_spawn_is_deterministic_per_seed() {
        let snake = Snake::at_start();
        let obstacles = ObstacleGrid::new();
        let a = spawn_food(&mut SimpleRng::new(77), &snake, &obstacles, 5);
        let b = spawn_food(&mut SimpleRng::new(77), &snake, &obstacles, 5);
        assert_eq!(a, b);
    }

    #[test]
    fn test_tick_down_expires_at_zero() {
        let mut food = Food {
            position: Position::new(0, 0),
            remaining_ticks: 2,
            weight: 1,
        };
        assert!(!food.tick_down());
        assert!(food.tick_down());
        assert_eq!(food.remaining_ticks, 0);
    }

    #[test]
    fn test_lifetime_scales_with_tick_rate() {
        assert_eq!(lifetime_ticks(5, 5), 25);
        assert_eq!(lifetime_ticks(10, 11), 110);
        assert_eq!(lifetime_ticks(0, 5), 1);
    }
}
