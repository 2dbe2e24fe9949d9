use crate::error::GridError;
use crate::grid::{Grid, Position};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::info;

/// Highest elevation a generated cell can have. The renderer has one color
/// per level from 0 up to this.
pub const MAX_ELEVATION: u32 = 5;

/// Parameters for a randomly generated map.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerrainConfig {
    pub width: usize,
    pub height: usize,
    pub num_walls: usize,
    pub num_peaks: usize,
}

/// The built-in 20x20 scenario: a wall corridor at x = 13 guarding the goal
/// and three elevation bands across rows 4 to 6.
pub fn preset_grid() -> Result<Grid, GridError> {
    let walls = [
        (5, 6),
        (6, 14),
        (17, 12),
        (16, 12),
        (15, 12),
        (14, 12),
        (13, 12),
        (13, 13),
        (13, 14),
        (13, 15),
        (13, 16),
        (13, 17),
        (13, 18),
        (13, 19),
        (19, 18),
        (8, 9),
        (6, 4),
    ]
    .map(|(x, y)| Position::new(x, y));

    let mut grid = Grid::new(20, 20, Position::new(2, 3), Position::new(16, 18), &walls)?;
    grid.fill_costs(Position::new(0, 4), Position::new(14, 4), 1);
    grid.fill_costs(Position::new(5, 5), Position::new(19, 5), 2);
    grid.fill_costs(Position::new(0, 6), Position::new(14, 6), 3);
    Ok(grid)
}

/// Generates a reproducible random map from `seed`.
///
/// Start lands in the top-left quadrant and goal in the bottom-right one.
/// Walls never cover either. Each peak has elevation `MAX_ELEVATION` and
/// drops by one per step of Manhattan distance; overlapping peaks keep the
/// higher value.
pub fn generate(config: &TerrainConfig, seed: u64) -> Result<Grid, GridError> {
    let (width, height) = (config.width, config.height);
    if width < 2 || height < 2 {
        return Err(GridError::EmptyDimensions { width, height });
    }

    let mut rng = StdRng::seed_from_u64(seed);

    let start = Position::new(
        rng.gen_range(0..width / 2) as i32,
        rng.gen_range(0..height / 2) as i32,
    );
    let goal = Position::new(
        rng.gen_range(width / 2..width) as i32,
        rng.gen_range(height / 2..height) as i32,
    );

    let mut walls = Vec::with_capacity(config.num_walls);
    let mut attempts = 0;
    while walls.len() < config.num_walls && attempts < config.num_walls * 3 {
        let pos = Position::new(
            rng.gen_range(0..width) as i32,
            rng.gen_range(0..height) as i32,
        );
        if pos != start && pos != goal && !walls.contains(&pos) {
            walls.push(pos);
        }
        attempts += 1;
    }

    let mut grid = Grid::new(width, height, start, goal, &walls)?;

    let peaks: Vec<Position> = (0..config.num_peaks)
        .map(|_| {
            Position::new(
                rng.gen_range(0..width) as i32,
                rng.gen_range(0..height) as i32,
            )
        })
        .collect();

    for x in 0..width as i32 {
        for y in 0..height as i32 {
            let pos = Position::new(x, y);
            let elevation = peaks
                .iter()
                .map(|peak| MAX_ELEVATION.saturating_sub(peak.manhattan(pos)))
                .max()
                .unwrap_or(0);
            grid.set_cost(pos, elevation)?;
        }
    }

    info!(
        seed,
        %start,
        %goal,
        walls = walls.len(),
        peaks = peaks.len(),
        "generated terrain"
    );
    Ok(grid)
}
