use thiserror::Error;

/// Errors raised while building or assigning a [TerrainGrid](crate::TerrainGrid).
#[derive(Debug, Error, PartialEq)]
pub enum GridError {
    #[error("grid must be a list")]
    NotAList,
    #[error("grid must be a list of lists")]
    NotAListOfLists,
    #[error("grid must be rectangular: column {column} has {found} cells, expected {expected}")]
    Ragged {
        column: usize,
        expected: usize,
        found: usize,
    },
    #[error("invalid cell at [{x}][{y}]: {reason}")]
    InvalidCell { x: usize, y: usize, reason: String },
}

/// Errors raised when constructing a [Terrain](crate::Terrain) cell.
#[derive(Debug, Error, PartialEq)]
pub enum TerrainError {
    #[error("terrain weight must be finite and non-negative, got {0}")]
    InvalidWeight(f64),
}

/// Errors raised by [Context](crate::Context) on assignment or on [run](crate::Context::run).
#[derive(Debug, Error, PartialEq)]
pub enum ContextError {
    #[error(transparent)]
    Grid(#[from] GridError),
    #[error("strategy must be an instance of PathfindingStrategy, got `{0}`")]
    UnknownStrategy(String),
    #[error("strategy must implement the {0} method")]
    MissingCapability(&'static str),
    #[error("{0} has not been set")]
    Unset(&'static str),
}
