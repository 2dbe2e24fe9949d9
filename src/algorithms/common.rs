use crate::agent::AgentKind;
use crate::error::SearchError;
use crate::grid::{Grid, Position};
use rustc_hash::{FxHashMap, FxHashSet};
use tracing::{debug, trace};

/// Ordering policy for discovered-but-not-yet-expanded cells.
///
/// `cost` is the cumulative cost of reaching `pos` along its discovery
/// chain. Only the priority frontier orders by it.
pub trait Frontier: Default {
    const KIND: AgentKind;

    fn push(&mut self, pos: Position, cost: u32);

    fn pop(&mut self) -> Option<(Position, u32)>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Pending cells in the order they would be expanded, except for the
    /// stack, which lists bottom to top.
    fn positions(&self) -> Vec<Position>;
}

/// Result of a single call to `step`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// The cell was popped and its neighbors examined.
    Expanded(Position),
    /// The goal was popped on this call; the path is available.
    GoalReached(Position),
    /// Nothing left to expand and the goal was never reached.
    Exhausted,
    /// The grid was already finished; nothing changed.
    Finished,
}

/// Query surface shared by every search strategy. The driver and renderer
/// only ever talk to agents through this.
pub trait SearchAgent {
    fn kind(&self) -> AgentKind;

    /// Advances the search by one pop and at most one expansion.
    fn step(&mut self) -> Result<StepOutcome, SearchError>;

    fn grid(&self) -> &Grid;

    fn current_position(&self) -> Position;

    fn visited_set(&self) -> &FxHashSet<Position>;

    fn frontier(&self) -> Vec<Position>;

    fn is_in_frontier(&self, pos: Position) -> bool;

    /// Start to goal inclusive. Empty until the goal has been reached.
    fn reconstructed_path(&self) -> &[Position];

    /// The four candidates generated by the last expansion, before filtering.
    fn discovered_neighbors(&self) -> &[Position];

    fn seen(&self) -> &FxHashSet<Position>;

    /// Every popped cell, in pop order.
    fn visit_order(&self) -> &[Position];

    /// Cumulative cost of the cell popped last.
    fn cost(&self) -> u32;

    /// Number of pops performed so far.
    fn steps(&self) -> usize;

    fn is_exhausted(&self) -> bool;
}

/// Frontier + visited + parent map skeleton shared by BFS, DFS and UFS.
/// Owns the grid it searches.
#[derive(Debug, Clone)]
pub struct Search<F> {
    grid: Grid,
    frontier: F,
    queued: FxHashSet<Position>,
    visited: FxHashSet<Position>,
    seen: FxHashSet<Position>,
    parents: FxHashMap<Position, Position>,
    current: Position,
    cost: u32,
    visit_order: Vec<Position>,
    neighbors: Vec<Position>,
    path: Vec<Position>,
}

impl<F: Frontier> Search<F> {
    /// Binds a new search to `grid`, standing on the start cell with the
    /// start cell as the only frontier entry.
    pub fn new(grid: Grid) -> Self {
        let start = grid.start();
        let mut search = Search {
            grid,
            frontier: F::default(),
            queued: FxHashSet::default(),
            visited: FxHashSet::default(),
            seen: FxHashSet::default(),
            parents: FxHashMap::default(),
            current: start,
            cost: 0,
            visit_order: Vec::new(),
            neighbors: Vec::with_capacity(4),
            path: Vec::new(),
        };
        search.frontier.push(start, 0);
        search.queued.insert(start);
        search.seen.insert(start);
        search
    }

    fn expand(&mut self) {
        let current = self.current;
        for neighbor in self.grid.neighbors(current) {
            self.neighbors.push(neighbor);
            if self.grid.in_bounds(neighbor) {
                self.seen.insert(neighbor);
            }

            if self.visited.contains(&neighbor)
                || !self.grid.is_valid(neighbor)
                || self.queued.contains(&neighbor)
            {
                continue;
            }

            // A cell gets its parent exactly once, on discovery.
            self.parents.insert(neighbor, current);
            self.queued.insert(neighbor);
            let cost = self.cost.saturating_add(self.grid.cost(neighbor));
            self.frontier.push(neighbor, cost);
        }
    }
}

impl<F: Frontier> SearchAgent for Search<F> {
    fn kind(&self) -> AgentKind {
        F::KIND
    }

    #[tracing::instrument(level = "trace", skip(self), fields(kind = ?F::KIND))]
    fn step(&mut self) -> Result<StepOutcome, SearchError> {
        if self.grid.is_finished() {
            return Ok(StepOutcome::Finished);
        }

        let Some((current, cost)) = self.frontier.pop() else {
            debug!(visited = self.visited.len(), "frontier empty, search exhausted");
            return Ok(StepOutcome::Exhausted);
        };
        self.queued.remove(&current);
        self.current = current;
        self.cost = cost;
        self.visited.insert(current);
        self.visit_order.push(current);
        self.neighbors.clear();

        if current == self.grid.goal() {
            self.path = reconstruct_path(&self.parents, self.grid.start(), current)?;
            self.grid.set_finished();
            debug!(
                steps = self.visit_order.len(),
                cost,
                path_len = self.path.len(),
                "goal reached"
            );
            return Ok(StepOutcome::GoalReached(current));
        }

        self.expand();
        trace!(%current, cost, frontier = self.frontier.len(), "expanded");
        Ok(StepOutcome::Expanded(current))
    }

    fn grid(&self) -> &Grid {
        &self.grid
    }

    fn current_position(&self) -> Position {
        self.current
    }

    fn visited_set(&self) -> &FxHashSet<Position> {
        &self.visited
    }

    fn frontier(&self) -> Vec<Position> {
        self.frontier.positions()
    }

    fn is_in_frontier(&self, pos: Position) -> bool {
        self.queued.contains(&pos)
    }

    fn reconstructed_path(&self) -> &[Position] {
        &self.path
    }

    fn discovered_neighbors(&self) -> &[Position] {
        &self.neighbors
    }

    fn seen(&self) -> &FxHashSet<Position> {
        &self.seen
    }

    fn visit_order(&self) -> &[Position] {
        &self.visit_order
    }

    fn cost(&self) -> u32 {
        self.cost
    }

    fn steps(&self) -> usize {
        self.visit_order.len()
    }

    fn is_exhausted(&self) -> bool {
        !self.grid.is_finished() && self.frontier.is_empty()
    }
}

/// Walks the parent map back from `goal` to `start` and returns the
/// inclusive start-to-goal sequence.
///
/// A missing parent, or a chain longer than the map itself, means the
/// caller reconstructed a cell that was never discovered from `start`.
pub fn reconstruct_path(
    parents: &FxHashMap<Position, Position>,
    start: Position,
    goal: Position,
) -> Result<Vec<Position>, SearchError> {
    let mut path = vec![goal];
    let mut at = goal;

    while at != start {
        at = *parents
            .get(&at)
            .ok_or(SearchError::BrokenParentChain { at })?;
        path.push(at);
        if path.len() > parents.len() + 1 {
            return Err(SearchError::BrokenParentChain { at });
        }
    }

    path.reverse();
    Ok(path)
}
