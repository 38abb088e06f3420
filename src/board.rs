use crate::action::Direction;
use crate::error::SolveError;

use anyhow::{Context, Result, bail};
use smallvec::SmallVec;
use std::{fmt, path::Path};

pub const BLANK_LABEL: &str = "0";
pub const MAX_LABELS: usize = u8::MAX as usize + 1;

const INLINE_CELLS: usize = 16;

/// A tile is an interned label. Id 0 is always the blank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Tile(u8);

impl Tile {
    pub const BLANK: Self = Self(0);

    pub fn new(id: u8) -> Self {
        Self(id)
    }

    pub fn id(&self) -> u8 {
        self.0
    }

    pub fn is_blank(&self) -> bool {
        self.0 == Self::BLANK.0
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Maps the textual labels of a puzzle file to tiles and back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Labels {
    names: Vec<String>,
}

impl Labels {
    pub fn new() -> Self {
        Self {
            names: vec![BLANK_LABEL.to_string()],
        }
    }

    pub fn intern(&mut self, label: &str) -> Result<Tile> {
        if let Some(id) = self.names.iter().position(|name| name == label) {
            return Ok(Tile(id as u8));
        }
        if self.names.len() >= MAX_LABELS {
            bail!("Too many distinct tile labels; at most {MAX_LABELS} are supported");
        }
        self.names.push(label.to_string());
        Ok(Tile((self.names.len() - 1) as u8))
    }

    pub fn name(&self, tile: Tile) -> &str {
        self.names
            .get(tile.id() as usize)
            .map(|s| s.as_str())
            .unwrap_or("?")
    }

}

impl Default for Labels {
    fn default() -> Self {
        Self::new()
    }
}

/// A `width` x `height` grid of tiles. Cell `(x, y)` lives at index `x + y * width`.
///
/// Boards are never mutated once built; every move yields a fresh board.
/// The derived ordering is the total order used when states need sorting.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Board {
    width: usize,
    height: usize,
    cells: SmallVec<[Tile; INLINE_CELLS]>,
}

impl Board {
    pub fn new(width: usize, height: usize, tiles: &[Tile]) -> Result<Self> {
        if width == 0 || height == 0 {
            bail!("Invalid board dimensions {width}x{height}");
        }
        let Some(cells) = width.checked_mul(height) else {
            bail!("Board dimensions {width}x{height} are too large");
        };
        if tiles.len() != cells {
            bail!(
                "Expected {cells} tiles for a {width}x{height} board, found {}",
                tiles.len()
            );
        }
        Ok(Self {
            width,
            height,
            cells: SmallVec::from_slice(tiles),
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.cells
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Tile {
        self.cells[x + y * self.width]
    }

    /// Finds the first cell holding `tile`, scanning column by column.
    pub fn tile_position(&self, tile: Tile) -> Result<(usize, usize), SolveError> {
        for x in 0..self.width {
            for y in 0..self.height {
                if self.get(x, y) == tile {
                    return Ok((x, y));
                }
            }
        }
        Err(SolveError::TileNotFound(tile))
    }

    /// Moves the blank one cell in `direction`.
    ///
    /// Returns `Ok(None)` when the blank would leave the grid. `self` is left
    /// untouched either way.
    pub fn apply_move(&self, direction: Direction) -> Result<Option<Board>, SolveError> {
        let (x, y) = self.tile_position(Tile::BLANK)?;
        let (dx, dy) = direction.offset();
        let (Some(x2), Some(y2)) = (x.checked_add_signed(dx), y.checked_add_signed(dy)) else {
            return Ok(None);
        };
        if x2 >= self.width || y2 >= self.height {
            return Ok(None);
        }

        let mut board = self.clone();
        board.cells.swap(x + y * self.width, x2 + y2 * self.width);
        Ok(Some(board))
    }

    /// Replays `actions` from this board. `Ok(None)` if any step leaves the grid.
    pub fn apply_actions(&self, actions: &[Direction]) -> Result<Option<Board>, SolveError> {
        let mut board = self.clone();
        for &action in actions {
            match board.apply_move(action)? {
                Some(next) => board = next,
                None => return Ok(None),
            }
        }
        Ok(Some(board))
    }

    pub fn pretty_print(&self, labels: &Labels) -> String {
        let cell_width = self
            .cells
            .iter()
            .map(|&tile| labels.name(tile).len())
            .max()
            .unwrap_or(1);

        let mut output = String::new();
        for y in 0..self.height {
            let row = (0..self.width)
                .map(|x| {
                    let tile = self.get(x, y);
                    let name = if tile.is_blank() { "." } else { labels.name(tile) };
                    format!("{name:>cell_width$}")
                })
                .collect::<Vec<_>>()
                .join(" ");
            output.push_str(&row);
            output.push('\n');
        }
        output
    }
}

/// An initial board, the board to reach, and the labels both were read with.
#[derive(Debug, Clone)]
pub struct Puzzle {
    pub labels: Labels,
    pub initial: Board,
    pub desired: Board,
}

impl Puzzle {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read puzzle file '{}'", path.display()))?;
        Self::parse(&content).with_context(|| format!("Invalid puzzle file '{}'", path.display()))
    }

    /// Parses the three-line puzzle format:
    ///
    /// ```text
    /// 3x3
    /// 1 2 3 4 0 5 6 7 8
    /// 1 2 3 4 5 6 7 8 0
    /// ```
    pub fn parse(content: &str) -> Result<Self> {
        let mut lines = content.lines().map(|v| v.trim()).filter(|l| !l.is_empty());

        let dimensions = lines.next().context("Missing dimensions line")?;
        let (width, height) = Self::parse_dimensions(dimensions)
            .with_context(|| format!("Failed to parse dimensions at '{dimensions}'"))?;

        let mut labels = Labels::new();
        let mut read_board = |name: &str| -> Result<Board> {
            let line = lines
                .next()
                .with_context(|| format!("Missing {name} state line"))?;
            Self::parse_board(line, width, height, &mut labels)
                .with_context(|| format!("Failed to parse {name} state at '{line}'"))
        };
        let initial = read_board("initial")?;
        let desired = read_board("desired")?;

        Ok(Self {
            labels,
            initial,
            desired,
        })
    }

    fn parse_dimensions(s: &str) -> Result<(usize, usize)> {
        let (width, height) = s
            .split_once(|c| c == 'x' || c == 'X')
            .context("Expected '<width>x<height>'")?;
        let width = width.trim().parse::<usize>().context("Invalid width")?;
        let height = height.trim().parse::<usize>().context("Invalid height")?;
        if width == 0 || height == 0 {
            bail!("Board dimensions must be positive");
        }
        if width.checked_mul(height).is_none() {
            bail!("Board dimensions {width}x{height} are too large");
        }
        Ok((width, height))
    }

    fn parse_board(line: &str, width: usize, height: usize, labels: &mut Labels) -> Result<Board> {
        let tiles = line
            .split_whitespace()
            .map(|token| labels.intern(token))
            .collect::<Result<Vec<_>>>()?;
        let blanks = tiles.iter().filter(|tile| tile.is_blank()).count();
        if blanks != 1 {
            bail!("Expected exactly one blank tile '{BLANK_LABEL}', found {blanks}");
        }
        Board::new(width, height, &tiles)
    }
}
