use crate::error::{GridError, ParsePositionError, Role};
use std::fmt;
use std::str::FromStr;

/// A cell coordinate. Signed so that neighbors of border cells can be
/// represented before they are filtered out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Position { x, y }
    }

    pub fn translate(self, direction: Direction) -> Position {
        let (dx, dy) = direction.offset();
        Position {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    pub fn manhattan(self, other: Position) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl FromStr for Position {
    type Err = ParsePositionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParsePositionError(s.to_string());
        let (x, y) = s.split_once(',').ok_or_else(err)?;
        let x = x.trim().parse().map_err(|_| err())?;
        let y = y.trim().parse().map_err(|_| err())?;
        Ok(Position { x, y })
    }
}

/// The four unit moves. `ALL` fixes the neighbor generation order, which
/// decides discovery order and therefore tie-breaking in every search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    pub fn offset(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Empty,
    Wall,
}

/// Static map data plus the single `finished` flag the search engine writes.
#[derive(Debug, Clone)]
pub struct Grid {
    width: usize,
    height: usize,
    // Indexed [x][y].
    cells: Vec<Vec<Cell>>,
    costs: Vec<Vec<u32>>,
    start: Position,
    goal: Position,
    finished: bool,
}

impl Grid {
    /// Builds a grid with zero cost everywhere.
    ///
    /// Fails when a dimension is zero, when start, goal or any wall lies
    /// outside the grid, when start or goal is a wall, or when start equals
    /// goal.
    pub fn new(
        width: usize,
        height: usize,
        start: Position,
        goal: Position,
        walls: &[Position],
    ) -> Result<Self, GridError> {
        if width == 0 || height == 0 {
            return Err(GridError::EmptyDimensions { width, height });
        }

        let mut grid = Grid {
            width,
            height,
            cells: vec![vec![Cell::Empty; height]; width],
            costs: vec![vec![0; height]; width],
            start,
            goal,
            finished: false,
        };

        for (role, pos) in [(Role::Start, start), (Role::Goal, goal)] {
            if !grid.in_bounds(pos) {
                return Err(GridError::OutOfBounds { role, pos });
            }
        }
        if start == goal {
            return Err(GridError::StartIsGoal(start));
        }

        for &wall in walls {
            if !grid.in_bounds(wall) {
                return Err(GridError::OutOfBounds {
                    role: Role::Wall,
                    pos: wall,
                });
            }
            if wall == start {
                return Err(GridError::OnWall {
                    role: Role::Start,
                    pos: wall,
                });
            }
            if wall == goal {
                return Err(GridError::OnWall {
                    role: Role::Goal,
                    pos: wall,
                });
            }
            grid.cells[wall.x as usize][wall.y as usize] = Cell::Wall;
        }

        Ok(grid)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn start(&self) -> Position {
        self.start
    }

    pub fn goal(&self) -> Position {
        self.goal
    }

    pub fn in_bounds(&self, pos: Position) -> bool {
        pos.x >= 0 && pos.y >= 0 && (pos.x as usize) < self.width && (pos.y as usize) < self.height
    }

    pub fn is_wall(&self, pos: Position) -> bool {
        self.in_bounds(pos) && self.cells[pos.x as usize][pos.y as usize] == Cell::Wall
    }

    /// In bounds and not a wall.
    pub fn is_valid(&self, pos: Position) -> bool {
        self.in_bounds(pos) && self.cells[pos.x as usize][pos.y as usize] != Cell::Wall
    }

    /// Traversal cost of entering `pos`. Zero outside the grid.
    pub fn cost(&self, pos: Position) -> u32 {
        if self.in_bounds(pos) {
            self.costs[pos.x as usize][pos.y as usize]
        } else {
            0
        }
    }

    pub fn set_cost(&mut self, pos: Position, cost: u32) -> Result<(), GridError> {
        if !self.in_bounds(pos) {
            return Err(GridError::OutOfBounds {
                role: Role::Cost,
                pos,
            });
        }
        self.costs[pos.x as usize][pos.y as usize] = cost;
        Ok(())
    }

    /// Sets every cell of the inclusive rectangle spanned by `from` and `to`,
    /// clipped to the grid.
    pub fn fill_costs(&mut self, from: Position, to: Position, cost: u32) {
        let (min_x, max_x) = (from.x.min(to.x).max(0), from.x.max(to.x));
        let (min_y, max_y) = (from.y.min(to.y).max(0), from.y.max(to.y));
        let max_x = max_x.min(self.width as i32 - 1);
        let max_y = max_y.min(self.height as i32 - 1);

        for x in min_x..=max_x {
            for y in min_y..=max_y {
                self.costs[x as usize][y as usize] = cost;
            }
        }
    }

    pub fn walls(&self) -> impl Iterator<Item = Position> + '_ {
        self.cells.iter().enumerate().flat_map(|(x, column)| {
            column
                .iter()
                .enumerate()
                .filter(|(_, cell)| **cell == Cell::Wall)
                .map(move |(y, _)| Position::new(x as i32, y as i32))
        })
    }

    /// The four candidate neighbors of `pos` in `Direction::ALL` order,
    /// before any validity filtering.
    pub fn neighbors(&self, pos: Position) -> [Position; 4] {
        Direction::ALL.map(|direction| pos.translate(direction))
    }

    /// Valid neighbors only, in `Direction::ALL` order.
    pub fn valid_neighbors(&self, pos: Position) -> impl Iterator<Item = Position> + '_ {
        self.neighbors(pos)
            .into_iter()
            .filter(move |neighbor| self.is_valid(*neighbor))
    }

    pub fn set_finished(&mut self) {
        self.finished = true;
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }
}
