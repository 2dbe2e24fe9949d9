use crate::agent::AgentKind;
use crate::algorithms::common::{Frontier, Search};
use crate::grid::Position;
use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// Priority entry. `seq` is a strictly increasing insertion counter, so
/// equal-cost entries pop in insertion order whatever the heap does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Entry {
    cost: u32,
    seq: u64,
    pos: Position,
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed comparison to make BinaryHeap a min-heap
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.seq.cmp(&self.seq))
            .then_with(|| other.pos.cmp(&self.pos))
    }
}

/// Lowest cumulative cost first, FIFO among ties.
#[derive(Debug, Clone, Default)]
pub struct PriorityFrontier {
    heap: BinaryHeap<Entry>,
    counter: u64,
}

impl Frontier for PriorityFrontier {
    const KIND: AgentKind = AgentKind::Ufs;

    fn push(&mut self, pos: Position, cost: u32) {
        self.counter += 1;
        self.heap.push(Entry {
            cost,
            seq: self.counter,
            pos,
        });
    }

    fn pop(&mut self) -> Option<(Position, u32)> {
        self.heap.pop().map(|entry| (entry.pos, entry.cost))
    }

    fn len(&self) -> usize {
        self.heap.len()
    }

    fn positions(&self) -> Vec<Position> {
        let mut entries: Vec<&Entry> = self.heap.iter().collect();
        entries.sort_by_key(|entry| (entry.cost, entry.seq));
        entries.into_iter().map(|entry| entry.pos).collect()
    }
}

/// Uniform-cost search over the grid's per-cell costs.
///
/// Entering a cell always costs the same whichever neighbor it is entered
/// from, and cells are popped in non-decreasing cost order, so the first
/// discovery of a cell is already its cheapest. The cost held when the goal
/// is popped is the minimum path cost.
pub type UfsAgent = Search<PriorityFrontier>;
