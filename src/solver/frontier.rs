use super::*;

use std::cmp::Ordering;
use std::collections::{BinaryHeap, VecDeque};

/// A frontier node ordered by `priority` alone, with `seq` breaking ties so
/// that equal priorities pop in insertion order.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct FrontierEntry {
    pub node: NodeId,
    pub priority: u32,
    pub seq: u64,
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .priority
            .cmp(&self.priority)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Open set of generated but not yet expanded nodes.
#[derive(Debug, Clone)]
pub enum Frontier {
    Fifo(VecDeque<NodeId>),
    Priority {
        heap: BinaryHeap<FrontierEntry>,
        next_seq: u64,
    },
}

impl Frontier {
    pub fn for_strategy(strategy: Strategy) -> Self {
        match strategy {
            Strategy::BreadthFirst => Frontier::Fifo(VecDeque::new()),
            Strategy::GreedyBestFirst(_) | Strategy::AStar(_) => Frontier::Priority {
                heap: BinaryHeap::new(),
                next_seq: 0,
            },
        }
    }

    /// `priority` is ignored by the FIFO discipline.
    pub fn add(&mut self, node: NodeId, priority: u32) {
        match self {
            Frontier::Fifo(queue) => queue.push_back(node),
            Frontier::Priority { heap, next_seq } => {
                heap.push(FrontierEntry {
                    node,
                    priority,
                    seq: *next_seq,
                });
                *next_seq += 1;
            }
        }
    }

    pub fn pop(&mut self) -> Option<NodeId> {
        match self {
            Frontier::Fifo(queue) => queue.pop_front(),
            Frontier::Priority { heap, .. } => heap.pop().map(|entry| entry.node),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Frontier::Fifo(queue) => queue.len(),
            Frontier::Priority { heap, .. } => heap.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::heuristic::Heuristic;

    #[test]
    fn test_fifo_order() {
        let mut frontier = Frontier::for_strategy(Strategy::BreadthFirst);
        frontier.add(3, 9);
        frontier.add(1, 0);
        frontier.add(2, 5);
        assert_eq!(frontier.len(), 3);
        assert_eq!(frontier.pop(), Some(3));
        assert_eq!(frontier.pop(), Some(1));
        assert_eq!(frontier.pop(), Some(2));
        assert_eq!(frontier.pop(), None);
        assert_eq!(frontier.len(), 0);
    }

    #[test]
    fn test_priority_order_with_stable_ties() {
        let mut frontier = Frontier::for_strategy(Strategy::AStar(Heuristic::MisplacedTiles));
        frontier.add(10, 4);
        frontier.add(11, 2);
        frontier.add(12, 4);
        frontier.add(13, 2);
        frontier.add(14, 1);
        let order: Vec<_> = std::iter::from_fn(|| frontier.pop()).collect();
        assert_eq!(order, vec![14, 11, 13, 10, 12]);
    }
}
