//! Estimates of the number of moves left between a board and the goal.

use crate::board::Board;
use crate::error::SolveError;

use std::str::FromStr;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Heuristic {
    /// Counts the blank too, so a single move away can score 2.
    MisplacedTiles,
    MisplacedNonBlankTiles,
    ManhattanDistance,
    /// Adds only the distance of the last tile of every column. Not admissible
    /// in general; kept for output compatibility with older runs.
    LegacyManhattanDistance,
}

impl Heuristic {
    pub const ALL: [Heuristic; 4] = [
        Heuristic::MisplacedTiles,
        Heuristic::MisplacedNonBlankTiles,
        Heuristic::ManhattanDistance,
        Heuristic::LegacyManhattanDistance,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Heuristic::MisplacedTiles => "mt",
            Heuristic::MisplacedNonBlankTiles => "mt-tiles",
            Heuristic::ManhattanDistance => "md",
            Heuristic::LegacyManhattanDistance => "md-legacy",
        }
    }

    pub fn valid_names() -> String {
        Self::ALL
            .iter()
            .map(|h| h.name())
            .collect::<Vec<_>>()
            .join(", ")
    }

    pub fn estimate(&self, current: &Board, goal: &Board) -> Result<u32, SolveError> {
        match self {
            Heuristic::MisplacedTiles => Ok(misplaced_tiles(current, goal)),
            Heuristic::MisplacedNonBlankTiles => Ok(misplaced_non_blank_tiles(current, goal)),
            Heuristic::ManhattanDistance => manhattan_distance(current, goal),
            Heuristic::LegacyManhattanDistance => legacy_manhattan_distance(current, goal),
        }
    }
}

impl FromStr for Heuristic {
    type Err = SolveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|h| h.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| SolveError::UnknownHeuristic {
                name: s.to_string(),
                valid: Self::valid_names(),
            })
    }
}

/// Number of cells whose tile differs from the goal, blank included.
pub fn misplaced_tiles(current: &Board, goal: &Board) -> u32 {
    current
        .tiles()
        .iter()
        .zip(goal.tiles())
        .filter(|(tile, target)| tile != target)
        .count() as u32
}

/// Number of non-blank tiles that are not on their goal cell. Admissible.
pub fn misplaced_non_blank_tiles(current: &Board, goal: &Board) -> u32 {
    current
        .tiles()
        .iter()
        .zip(goal.tiles())
        .filter(|(tile, target)| !tile.is_blank() && tile != target)
        .count() as u32
}

/// Sum over non-blank tiles of the L1 distance to the tile's goal cell.
pub fn manhattan_distance(current: &Board, goal: &Board) -> Result<u32, SolveError> {
    let width = current.width();
    let mut distance = 0;
    for (index, &tile) in current.tiles().iter().enumerate() {
        if tile.is_blank() {
            continue;
        }
        let (x, y) = (index % width, index / width);
        let (gx, gy) = goal.tile_position(tile)?;
        distance += x.abs_diff(gx) + y.abs_diff(gy);
    }
    Ok(distance as u32)
}

/// Manhattan distance as older releases computed it: every tile is looked up,
/// but only the last tile of each column contributes.
pub fn legacy_manhattan_distance(current: &Board, goal: &Board) -> Result<u32, SolveError> {
    let mut distance = 0;
    for x in 0..current.width() {
        let mut last = 0;
        for y in 0..current.height() {
            let tile = current.get(x, y);
            let (cx, cy) = current.tile_position(tile)?;
            let (gx, gy) = goal.tile_position(tile)?;
            last = cx.abs_diff(gx) + cy.abs_diff(gy);
        }
        distance += last;
    }
    Ok(distance as u32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Tile;

    fn board(width: usize, height: usize, ids: &[u8]) -> Board {
        let tiles: Vec<Tile> = ids.iter().map(|&id| Tile::new(id)).collect();
        Board::new(width, height, &tiles).unwrap()
    }

    #[test]
    fn test_parse_heuristic() {
        assert_eq!("mt".parse::<Heuristic>(), Ok(Heuristic::MisplacedTiles));
        assert_eq!("MD".parse::<Heuristic>(), Ok(Heuristic::ManhattanDistance));
        assert_eq!(
            "MT-Tiles".parse::<Heuristic>(),
            Ok(Heuristic::MisplacedNonBlankTiles)
        );
        assert_eq!(
            "Md-Legacy".parse::<Heuristic>(),
            Ok(Heuristic::LegacyManhattanDistance)
        );
        let err = "xy".parse::<Heuristic>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "heuristic function 'xy' is not a valid option; available: mt, mt-tiles, md, md-legacy"
        );
    }

    #[test]
    fn test_goal_scores_zero() {
        let goal = board(3, 3, &[1, 2, 3, 4, 5, 6, 7, 8, 0]);
        for heuristic in Heuristic::ALL {
            assert_eq!(heuristic.estimate(&goal, &goal), Ok(0));
        }
    }

    #[test]
    fn test_misplaced_tiles() {
        let goal = board(3, 3, &[1, 2, 3, 4, 5, 6, 7, 8, 0]);
        let current = board(3, 3, &[1, 2, 3, 4, 5, 6, 7, 0, 8]);
        assert_eq!(misplaced_tiles(&current, &goal), 2);
        assert_eq!(misplaced_non_blank_tiles(&current, &goal), 1);

        let current = board(3, 3, &[0, 1, 2, 3, 4, 5, 6, 7, 8]);
        assert_eq!(misplaced_tiles(&current, &goal), 9);
        assert_eq!(misplaced_non_blank_tiles(&current, &goal), 8);
    }

    #[test]
    fn test_manhattan_distance() {
        let goal = board(3, 3, &[1, 2, 3, 4, 5, 6, 7, 8, 0]);
        let current = board(3, 3, &[1, 2, 3, 4, 5, 6, 0, 7, 8]);
        assert_eq!(manhattan_distance(&current, &goal), Ok(2));

        // 8 and 1 are each three cells from home.
        let current = board(3, 3, &[8, 2, 3, 4, 5, 6, 7, 1, 0]);
        assert_eq!(manhattan_distance(&current, &goal), Ok(6));
    }

    #[test]
    fn test_legacy_manhattan_undercounts() {
        let goal = board(2, 2, &[0, 1, 2, 3]);
        let current = board(2, 2, &[1, 0, 2, 3]);
        assert_eq!(manhattan_distance(&current, &goal), Ok(1));
        assert_eq!(legacy_manhattan_distance(&current, &goal), Ok(0));

        // Bottom row holds the only displaced tiles, so every one of them counts,
        // blank included.
        let goal = board(3, 2, &[1, 2, 3, 4, 5, 0]);
        let current = board(3, 2, &[1, 2, 3, 0, 4, 5]);
        assert_eq!(manhattan_distance(&current, &goal), Ok(2));
        assert_eq!(legacy_manhattan_distance(&current, &goal), Ok(4));
    }

    #[test]
    fn test_missing_tile() {
        let goal = board(2, 2, &[0, 1, 2, 3]);
        let current = board(2, 2, &[0, 1, 2, 4]);
        assert_eq!(
            manhattan_distance(&current, &goal),
            Err(SolveError::TileNotFound(Tile::new(4)))
        );
        assert_eq!(
            legacy_manhattan_distance(&current, &goal),
            Err(SolveError::TileNotFound(Tile::new(4)))
        );
        assert_eq!(misplaced_tiles(&current, &goal), 1);
        assert_eq!(misplaced_non_blank_tiles(&current, &goal), 1);
    }
}
