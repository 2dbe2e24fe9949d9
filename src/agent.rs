use crate::algorithms::{BfsAgent, DfsAgent, SearchAgent, StepOutcome, UfsAgent};
use crate::error::SearchError;
use crate::grid::{Grid, Position};
use rustc_hash::FxHashSet;
use std::fmt;

/// Tag the renderer and statistics switch on instead of inspecting the
/// concrete agent type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AgentKind {
    Bfs,
    Dfs,
    Ufs,
}

impl AgentKind {
    pub const ALL: [AgentKind; 3] = [AgentKind::Bfs, AgentKind::Dfs, AgentKind::Ufs];
}

impl fmt::Display for AgentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AgentKind::Bfs => "Breadth-first",
            AgentKind::Dfs => "Depth-first",
            AgentKind::Ufs => "Uniform-cost",
        };
        f.write_str(name)
    }
}

/// One of the three search strategies, bound to its grid.
#[derive(Debug, Clone)]
pub enum Agent {
    Bfs(BfsAgent),
    Dfs(DfsAgent),
    Ufs(UfsAgent),
}

impl Agent {
    pub fn new(kind: AgentKind, grid: Grid) -> Self {
        match kind {
            AgentKind::Bfs => Agent::Bfs(BfsAgent::new(grid)),
            AgentKind::Dfs => Agent::Dfs(DfsAgent::new(grid)),
            AgentKind::Ufs => Agent::Ufs(UfsAgent::new(grid)),
        }
    }

    fn inner(&self) -> &dyn SearchAgent {
        match self {
            Agent::Bfs(agent) => agent,
            Agent::Dfs(agent) => agent,
            Agent::Ufs(agent) => agent,
        }
    }

    fn inner_mut(&mut self) -> &mut dyn SearchAgent {
        match self {
            Agent::Bfs(agent) => agent,
            Agent::Dfs(agent) => agent,
            Agent::Ufs(agent) => agent,
        }
    }
}

impl SearchAgent for Agent {
    fn kind(&self) -> AgentKind {
        self.inner().kind()
    }

    fn step(&mut self) -> Result<StepOutcome, SearchError> {
        self.inner_mut().step()
    }

    fn grid(&self) -> &Grid {
        self.inner().grid()
    }

    fn current_position(&self) -> Position {
        self.inner().current_position()
    }

    fn visited_set(&self) -> &FxHashSet<Position> {
        self.inner().visited_set()
    }

    fn frontier(&self) -> Vec<Position> {
        self.inner().frontier()
    }

    fn is_in_frontier(&self, pos: Position) -> bool {
        self.inner().is_in_frontier(pos)
    }

    fn reconstructed_path(&self) -> &[Position] {
        self.inner().reconstructed_path()
    }

    fn discovered_neighbors(&self) -> &[Position] {
        self.inner().discovered_neighbors()
    }

    fn seen(&self) -> &FxHashSet<Position> {
        self.inner().seen()
    }

    fn visit_order(&self) -> &[Position] {
        self.inner().visit_order()
    }

    fn cost(&self) -> u32 {
        self.inner().cost()
    }

    fn steps(&self) -> usize {
        self.inner().steps()
    }

    fn is_exhausted(&self) -> bool {
        self.inner().is_exhausted()
    }
}
