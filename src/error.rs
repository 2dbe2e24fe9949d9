use crate::grid::Position;
use thiserror::Error;

/// Which designated cell a grid error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Start,
    Goal,
    Wall,
    Cost,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Role::Start => "start",
            Role::Goal => "goal",
            Role::Wall => "wall",
            Role::Cost => "cost edit",
        };
        f.write_str(name)
    }
}

/// Rejected grid configurations. Construction fails instead of proceeding.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GridError {
    #[error("grid dimensions must be non-zero, got {width}x{height}")]
    EmptyDimensions { width: usize, height: usize },
    #[error("{role} position {pos} is outside the grid")]
    OutOfBounds { role: Role, pos: Position },
    #[error("{role} position {pos} is on a wall")]
    OnWall { role: Role, pos: Position },
    #[error("start and goal are both {0}")]
    StartIsGoal(Position),
}

/// Invariant violations inside the search engine.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SearchError {
    #[error("parent chain broken at {at} while reconstructing the path")]
    BrokenParentChain { at: Position },
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("expected a position as `x,y`, got {0:?}")]
pub struct ParsePositionError(pub String);

/// Failures while reading an interactive setup.
#[derive(Debug, Error)]
pub enum PromptError {
    #[error("input closed before setup was complete")]
    Closed,
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Grid(#[from] GridError),
}
