//! Strategy-agnostic state-space search over sliding-tile boards.

mod frontier;
mod node;

use self::frontier::Frontier;
use self::node::{NodeId, ROOT, SearchTree};

use crate::action::Direction;
use crate::board::Board;
use crate::error::SolveError;
use crate::strategy::Strategy;

use log::{debug, trace};
use rustc_hash::FxHashSet;
use smallvec::SmallVec;
use std::time::{Duration, Instant};

type Successors = SmallVec<[(Direction, Board); 4]>;

pub fn solve(
    initial: &Board,
    desired: &Board,
    strategy: Strategy,
) -> Result<SolveResult, SolveError> {
    let solver = Solver::new(initial.clone(), desired.clone(), strategy)?;
    solver.solve()
}

/// Searches from an initial board towards a desired one.
#[derive(Debug, Clone)]
pub struct Solver {
    initial: Board,
    desired: Board,
    strategy: Strategy,
}

impl Solver {
    pub fn new(initial: Board, desired: Board, strategy: Strategy) -> Result<Self, SolveError> {
        if initial.width() != desired.width() || initial.height() != desired.height() {
            return Err(SolveError::DimensionMismatch {
                initial_width: initial.width(),
                initial_height: initial.height(),
                desired_width: desired.width(),
                desired_height: desired.height(),
            });
        }
        Ok(Self {
            initial,
            desired,
            strategy,
        })
    }

    /// Runs until the desired board is popped or the frontier runs dry.
    ///
    /// The goal test happens before a node is expanded, and every board enters
    /// the closed set exactly once, right before its successors are generated.
    pub fn solve(&self) -> Result<SolveResult, SolveError> {
        let timer = Instant::now();
        let mut tree = SearchTree::new(self.initial.clone());
        let mut closed: FxHashSet<Board> = FxHashSet::default();
        let mut frontier = Frontier::for_strategy(self.strategy);
        let mut max_frontier = 0;
        let mut current = ROOT;

        debug!(
            "Searching a {}x{} board with {}",
            self.initial.width(),
            self.initial.height(),
            self.strategy
        );

        let goal = loop {
            let node = tree.get(current);
            if node.board == self.desired {
                break Some(current);
            }

            trace!("Expanding node {current} at depth {}", node.depth);
            closed.insert(node.board.clone());
            let depth = node.depth + 1;
            let successors = self.expand(&node.board, &closed)?;

            for (action, board) in successors {
                let priority = self.strategy.priority(depth, &board, &self.desired)?;
                let id = tree.push(board, current, action);
                frontier.add(id, priority);
            }
            max_frontier = max_frontier.max(frontier.len());

            match Self::next_open(&mut frontier, &tree, &closed) {
                Some(id) => current = id,
                None => break None,
            }
        };

        let actions = goal.map(|id| tree.path_to(id));
        debug!(
            "Search finished: {} closed, {} generated, frontier peak {}, solved: {}",
            closed.len(),
            tree.len(),
            max_frontier,
            actions.is_some()
        );

        Ok(SolveResult {
            nodes_closed: closed.len(),
            nodes_generated: tree.len(),
            max_frontier,
            elapsed: timer.elapsed(),
            actions,
        })
    }

    fn expand(&self, board: &Board, closed: &FxHashSet<Board>) -> Result<Successors, SolveError> {
        let mut successors = Successors::new();
        for direction in Direction::ALL {
            if let Some(next) = board.apply_move(direction)? {
                if !closed.contains(&next) {
                    successors.push((direction, next));
                }
            }
        }
        Ok(successors)
    }

    /// Pops until a node whose board has not been expanded yet turns up. A board
    /// can sit in the frontier several times when two parents generated it.
    fn next_open(
        frontier: &mut Frontier,
        tree: &SearchTree,
        closed: &FxHashSet<Board>,
    ) -> Option<NodeId> {
        while let Some(id) = frontier.pop() {
            if !closed.contains(&tree.get(id).board) {
                return Some(id);
            }
        }
        None
    }
}

#[derive(Debug, Clone)]
pub struct SolveResult {
    /// Distinct boards expanded.
    pub nodes_closed: usize,
    pub nodes_generated: usize,
    pub max_frontier: usize,
    pub elapsed: Duration,
    /// Root-to-goal moves, or `None` when every reachable board was expanded.
    pub actions: Option<Vec<Direction>>,
}

impl SolveResult {
    pub fn is_solved(&self) -> bool {
        self.actions.is_some()
    }
}
