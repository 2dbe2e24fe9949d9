use crate::agent::AgentKind;
use crate::algorithms::common::{Frontier, Search};
use crate::grid::Position;

/// Last in, first out.
#[derive(Debug, Clone, Default)]
pub struct LifoFrontier {
    stack: Vec<(Position, u32)>,
}

impl Frontier for LifoFrontier {
    const KIND: AgentKind = AgentKind::Dfs;

    fn push(&mut self, pos: Position, cost: u32) {
        self.stack.push((pos, cost));
    }

    fn pop(&mut self) -> Option<(Position, u32)> {
        self.stack.pop()
    }

    fn len(&self) -> usize {
        self.stack.len()
    }

    fn positions(&self) -> Vec<Position> {
        self.stack.iter().map(|(pos, _)| *pos).collect()
    }
}

/// Depth-first search. Cells already on the stack are never pushed again,
/// so the path found follows discovery order and is not necessarily short.
pub type DfsAgent = Search<LifoFrontier>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::common::{SearchAgent, StepOutcome};
    use crate::grid::Grid;

    fn p(x: i32, y: i32) -> Position {
        Position::new(x, y)
    }

    fn run(agent: &mut DfsAgent) {
        for _ in 0..100 {
            if agent.grid().is_finished() || agent.is_exhausted() {
                return;
            }
            agent.step().unwrap();
        }
    }

    #[test]
    fn expands_most_recent_discovery_first() {
        let grid = Grid::new(3, 3, p(0, 0), p(2, 2), &[]).unwrap();
        let mut agent = DfsAgent::new(grid);

        agent.step().unwrap();
        assert_eq!(agent.frontier(), vec![p(0, 1), p(1, 0)]);
        assert_eq!(agent.step().unwrap(), StepOutcome::Expanded(p(1, 0)));
        assert_eq!(agent.frontier(), vec![p(0, 1), p(1, 1), p(2, 0)]);

        run(&mut agent);
        assert_eq!(
            agent.reconstructed_path(),
            &[p(0, 0), p(1, 0), p(2, 0), p(2, 1), p(2, 2)]
        );
        assert_eq!(agent.steps(), 5);
    }

    #[test]
    fn path_can_be_longer_than_shortest() {
        let grid = Grid::new(3, 3, p(0, 0), p(0, 2), &[]).unwrap();
        let mut agent = DfsAgent::new(grid);
        run(&mut agent);

        assert!(agent.grid().is_finished());
        assert_eq!(
            agent.reconstructed_path(),
            &[
                p(0, 0),
                p(1, 0),
                p(2, 0),
                p(2, 1),
                p(2, 2),
                p(1, 2),
                p(0, 2)
            ]
        );
    }

    #[test]
    fn seen_covers_visited_and_frontier() {
        let grid = Grid::new(4, 4, p(0, 0), p(3, 3), &[p(1, 1)]).unwrap();
        let mut agent = DfsAgent::new(grid);
        for _ in 0..4 {
            agent.step().unwrap();
        }

        for pos in agent.visited_set() {
            assert!(agent.seen().contains(pos));
        }
        for pos in agent.frontier() {
            assert!(agent.seen().contains(&pos));
        }
    }
}
