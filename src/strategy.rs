//! Resolves strategy and heuristic names into a frontier discipline.

use crate::board::Board;
use crate::error::SolveError;
use crate::heuristic::Heuristic;

use std::{fmt, str::FromStr};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum StrategyKind {
    BreadthFirst,
    GreedyBestFirst,
    AStar,
}

impl StrategyKind {
    pub const ALL: [StrategyKind; 3] = [
        StrategyKind::BreadthFirst,
        StrategyKind::GreedyBestFirst,
        StrategyKind::AStar,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            StrategyKind::BreadthFirst => "BFS",
            StrategyKind::GreedyBestFirst => "G",
            StrategyKind::AStar => "A*",
        }
    }

    pub fn requires_heuristic(&self) -> bool {
        !matches!(self, StrategyKind::BreadthFirst)
    }

    pub fn valid_names() -> String {
        Self::ALL
            .iter()
            .map(|s| s.name())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl FromStr for StrategyKind {
    type Err = SolveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|k| k.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| SolveError::UnknownStrategy {
                name: s.to_string(),
                valid: Self::valid_names(),
            })
    }
}

/// A frontier discipline together with the heuristic it orders by.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Strategy {
    /// FIFO expansion. Finds a shortest solution.
    BreadthFirst,
    /// Expands the node with the lowest `h`.
    GreedyBestFirst(Heuristic),
    /// Expands the node with the lowest `g + h`. Finds a shortest solution
    /// when `h` is admissible.
    AStar(Heuristic),
}

impl Strategy {
    /// Looks up a strategy by name, case-insensitively. The heuristic name is
    /// ignored for breadth-first search.
    pub fn resolve(strategy: &str, heuristic: Option<&str>) -> Result<Self, SolveError> {
        let kind: StrategyKind = strategy.parse()?;
        if !kind.requires_heuristic() {
            return Ok(Strategy::BreadthFirst);
        }
        let heuristic: Heuristic = heuristic
            .ok_or_else(|| SolveError::MissingHeuristic {
                strategy: kind.name().to_string(),
                valid: Heuristic::valid_names(),
            })?
            .parse()?;
        Ok(Self::new(kind, heuristic))
    }

    pub fn new(kind: StrategyKind, heuristic: Heuristic) -> Self {
        match kind {
            StrategyKind::BreadthFirst => Strategy::BreadthFirst,
            StrategyKind::GreedyBestFirst => Strategy::GreedyBestFirst(heuristic),
            StrategyKind::AStar => Strategy::AStar(heuristic),
        }
    }

    pub fn kind(&self) -> StrategyKind {
        match self {
            Strategy::BreadthFirst => StrategyKind::BreadthFirst,
            Strategy::GreedyBestFirst(_) => StrategyKind::GreedyBestFirst,
            Strategy::AStar(_) => StrategyKind::AStar,
        }
    }

    pub fn heuristic(&self) -> Option<Heuristic> {
        match self {
            Strategy::BreadthFirst => None,
            Strategy::GreedyBestFirst(h) | Strategy::AStar(h) => Some(*h),
        }
    }

    /// Frontier key for a node at `depth` holding `board`. Lower pops first.
    pub fn priority(&self, depth: u32, board: &Board, goal: &Board) -> Result<u32, SolveError> {
        match self {
            Strategy::BreadthFirst => Ok(0),
            Strategy::GreedyBestFirst(h) => h.estimate(board, goal),
            Strategy::AStar(h) => Ok(depth + h.estimate(board, goal)?),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.heuristic() {
            Some(h) => write!(f, "{} (heuristic: {})", self.kind().name(), h.name()),
            None => write!(f, "{} (heuristic: none)", self.kind().name()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve() {
        assert_eq!(Strategy::resolve("bfs", None), Ok(Strategy::BreadthFirst));
        assert_eq!(
            Strategy::resolve("BFS", Some("nonsense")),
            Ok(Strategy::BreadthFirst)
        );
        assert_eq!(
            Strategy::resolve("g", Some("MT")),
            Ok(Strategy::GreedyBestFirst(Heuristic::MisplacedTiles))
        );
        assert_eq!(
            Strategy::resolve("a*", Some("md")),
            Ok(Strategy::AStar(Heuristic::ManhattanDistance))
        );
    }

    #[test]
    fn test_resolve_errors() {
        let err = Strategy::resolve("dfs", Some("md")).unwrap_err();
        assert!(matches!(err, SolveError::UnknownStrategy { .. }));
        assert_eq!(
            err.to_string(),
            "search strategy 'dfs' is not a valid option; available: BFS, G, A*"
        );

        let err = Strategy::resolve("A*", None).unwrap_err();
        assert_eq!(
            err,
            SolveError::MissingHeuristic {
                strategy: "A*".to_string(),
                valid: "mt, mt-tiles, md, md-legacy".to_string(),
            }
        );

        let err = Strategy::resolve("G", Some("euclid")).unwrap_err();
        assert!(matches!(err, SolveError::UnknownHeuristic { ref name, .. } if name == "euclid"));
    }

    #[test]
    fn test_display() {
        let strategy = Strategy::AStar(Heuristic::MisplacedTiles);
        assert_eq!(strategy.to_string(), "A* (heuristic: mt)");
        assert_eq!(Strategy::BreadthFirst.to_string(), "BFS (heuristic: none)");
    }
}
