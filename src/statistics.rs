use crate::agent::AgentKind;
use crate::algorithms::SearchAgent;
use crate::grid::Grid;
use pathfinding::prelude::{bfs, dijkstra};
use std::fmt;

/// Summary of one search run, alongside the reference optima for its grid.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchStats {
    pub kind: AgentKind,
    pub steps: usize,
    pub visited: usize,
    pub frontier: usize,
    pub reached: bool,
    /// Edges on the reconstructed path, if the goal was reached.
    pub path_edges: Option<usize>,
    pub path_cost: Option<u32>,
    pub optimal_edges: Option<usize>,
    pub optimal_cost: Option<u32>,
}

impl SearchStats {
    pub fn from_agent(agent: &dyn SearchAgent) -> Self {
        let grid = agent.grid();
        let path = agent.reconstructed_path();
        let reached = grid.is_finished();

        SearchStats {
            kind: agent.kind(),
            steps: agent.steps(),
            visited: agent.visited_set().len(),
            frontier: agent.frontier().len(),
            reached,
            path_edges: reached.then(|| path.len().saturating_sub(1)),
            path_cost: reached.then(|| agent.cost()),
            optimal_edges: shortest_edge_count(grid),
            optimal_cost: min_path_cost(grid),
        }
    }

    /// Path edges over optimal edges. 1.0 is a shortest path.
    pub fn route_efficiency(&self) -> Option<f64> {
        match (self.path_edges, self.optimal_edges) {
            (Some(edges), Some(optimal)) if optimal > 0 => Some(edges as f64 / optimal as f64),
            _ => None,
        }
    }
}

impl fmt::Display for SearchStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} Search Statistics:", self.kind)?;
        writeln!(f, "Steps: {}", self.steps)?;
        writeln!(f, "Visited cells: {}", self.visited)?;
        writeln!(f, "Frontier cells: {}", self.frontier)?;
        writeln!(f, "Goal reached: {}", if self.reached { "yes" } else { "no" })?;

        if let (Some(edges), Some(cost)) = (self.path_edges, self.path_cost) {
            writeln!(f, "Path length: {} steps (cost {})", edges, cost)?;
        }
        match (self.optimal_edges, self.optimal_cost) {
            (Some(edges), Some(cost)) => {
                writeln!(f, "Shortest possible: {} steps", edges)?;
                writeln!(f, "Cheapest possible: cost {}", cost)?;
            }
            _ => writeln!(f, "No path exists between start and goal")?,
        }
        if let Some(efficiency) = self.route_efficiency() {
            writeln!(f, "Route Efficiency: {:.3}", efficiency)?;
        }
        Ok(())
    }
}

/// Fewest edges from start to goal, ignoring cell costs.
pub fn shortest_edge_count(grid: &Grid) -> Option<usize> {
    let goal = grid.goal();
    bfs(
        &grid.start(),
        |pos| grid.valid_neighbors(*pos).collect::<Vec<_>>(),
        |pos| *pos == goal,
    )
    .map(|path| path.len() - 1)
}

/// Cheapest cumulative cost from start to goal, where entering a cell costs
/// that cell's elevation.
pub fn min_path_cost(grid: &Grid) -> Option<u32> {
    let goal = grid.goal();
    dijkstra(
        &grid.start(),
        |pos| {
            grid.valid_neighbors(*pos)
                .map(|next| (next, grid.cost(next)))
                .collect::<Vec<_>>()
        },
        |pos| *pos == goal,
    )
    .map(|(_, cost)| cost)
}
