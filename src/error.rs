use crate::board::Tile;

/// Failures the solver reports to its caller.
///
/// Running out of states to explore is not one of them: that is an ordinary
/// `SolveResult` without actions.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum SolveError {
    /// A tile referenced while evaluating a board is missing from it.
    #[error("tile {0} does not exist in state")]
    TileNotFound(Tile),

    #[error("search strategy '{name}' is not a valid option; available: {valid}")]
    UnknownStrategy { name: String, valid: String },

    #[error("heuristic function '{name}' is not a valid option; available: {valid}")]
    UnknownHeuristic { name: String, valid: String },

    #[error("search strategy '{strategy}' requires a heuristic; available: {valid}")]
    MissingHeuristic { strategy: String, valid: String },

    #[error("initial board is {initial_width}x{initial_height} but desired board is {desired_width}x{desired_height}")]
    DimensionMismatch {
        initial_width: usize,
        initial_height: usize,
        desired_width: usize,
        desired_height: usize,
    },
}
