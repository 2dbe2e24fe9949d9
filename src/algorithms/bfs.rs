use crate::agent::AgentKind;
use crate::algorithms::common::{Frontier, Search};
use crate::grid::Position;
use std::collections::VecDeque;

/// First in, first out.
#[derive(Debug, Clone, Default)]
pub struct FifoFrontier {
    queue: VecDeque<(Position, u32)>,
}

impl Frontier for FifoFrontier {
    const KIND: AgentKind = AgentKind::Bfs;

    fn push(&mut self, pos: Position, cost: u32) {
        self.queue.push_back((pos, cost));
    }

    fn pop(&mut self) -> Option<(Position, u32)> {
        self.queue.pop_front()
    }

    fn len(&self) -> usize {
        self.queue.len()
    }

    fn positions(&self) -> Vec<Position> {
        self.queue.iter().map(|(pos, _)| *pos).collect()
    }
}

/// Breadth-first search. The first path found is shortest in edge count.
pub type BfsAgent = Search<FifoFrontier>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::common::{SearchAgent, StepOutcome};
    use crate::grid::Grid;

    fn p(x: i32, y: i32) -> Position {
        Position::new(x, y)
    }

    fn open_3x3() -> Grid {
        Grid::new(3, 3, p(0, 0), p(2, 2), &[]).unwrap()
    }

    #[test]
    fn frontier_grows_in_fifo_order() {
        let mut agent = BfsAgent::new(open_3x3());
        assert_eq!(agent.current_position(), p(0, 0));
        assert_eq!(agent.frontier(), vec![p(0, 0)]);

        assert_eq!(agent.step().unwrap(), StepOutcome::Expanded(p(0, 0)));
        assert_eq!(agent.frontier(), vec![p(0, 1), p(1, 0)]);
        assert_eq!(
            agent.discovered_neighbors(),
            &[p(0, -1), p(0, 1), p(-1, 0), p(1, 0)]
        );

        assert_eq!(agent.step().unwrap(), StepOutcome::Expanded(p(0, 1)));
        assert_eq!(agent.frontier(), vec![p(1, 0), p(0, 2), p(1, 1)]);
    }

    #[test]
    fn finds_shortest_path_on_open_grid() {
        let mut agent = BfsAgent::new(open_3x3());
        let mut outcome = StepOutcome::Finished;
        for _ in 0..20 {
            outcome = agent.step().unwrap();
            if agent.grid().is_finished() {
                break;
            }
        }

        assert_eq!(outcome, StepOutcome::GoalReached(p(2, 2)));
        assert_eq!(
            agent.reconstructed_path(),
            &[p(0, 0), p(0, 1), p(0, 2), p(1, 2), p(2, 2)]
        );
        assert_eq!(
            agent.visit_order(),
            &[
                p(0, 0),
                p(0, 1),
                p(1, 0),
                p(0, 2),
                p(1, 1),
                p(2, 0),
                p(1, 2),
                p(2, 1),
                p(2, 2)
            ]
        );
        assert_eq!(agent.visited_set().len(), 9);
    }

    #[test]
    fn ignores_cell_costs() {
        let mut grid = open_3x3();
        grid.fill_costs(p(0, 1), p(0, 2), 5);
        let mut agent = BfsAgent::new(grid);
        while !agent.grid().is_finished() {
            agent.step().unwrap();
        }
        assert_eq!(
            agent.reconstructed_path(),
            &[p(0, 0), p(0, 1), p(0, 2), p(1, 2), p(2, 2)]
        );
        assert_eq!(agent.cost(), 10);
    }

    #[test]
    fn routes_around_walls() {
        // . # .
        // . # .
        // . . .
        let grid = Grid::new(3, 3, p(0, 0), p(2, 0), &[p(1, 0), p(1, 1)]).unwrap();
        let mut agent = BfsAgent::new(grid);
        while !agent.grid().is_finished() {
            agent.step().unwrap();
        }
        assert_eq!(
            agent.reconstructed_path(),
            &[p(0, 0), p(0, 1), p(0, 2), p(1, 2), p(2, 2), p(2, 1), p(2, 0)]
        );
        assert!(!agent.visited_set().contains(&p(1, 0)));
    }
}
