//! # terrain_pathfinding
//!
//! Least-cost pathfinding over a rectangular grid of terrain cells. Every cell is a
//! [Terrain] value (flat, plateau, downhill or uphill) carrying a traversal weight.
//! Two interchangeable solvers are provided behind the [PathfindingStrategy] trait:
//!
//! - [DijkstraSolver] explores the 8-neighbourhood with
//!   [Euclidean](https://en.wikipedia.org/wiki/Euclidean_distance) step costs.
//! - [AstarSolver] explores the 4-neighbourhood with
//!   [Manhattan](https://en.wikipedia.org/wiki/Taxicab_geometry) step costs and heuristic.
//!
//! A [Context] bundles a grid, a start cell, an end cell and a strategy and dispatches
//! the search on [Context::run]. Paths exclude the start cell and include the end cell;
//! an empty path means the end could not be reached.
//!
//! ```
//! use terrain_pathfinding::{Context, DijkstraSolver, Position, TerrainGrid, TerrainKind};
//!
//! let grid = TerrainGrid::filled(3, 3, TerrainKind::Flat);
//! let start = grid.get(Position::new(0, 0)).unwrap().clone();
//! let end = grid.get(Position::new(2, 2)).unwrap().clone();
//! let context = Context::new()
//!     .with_grid(grid)
//!     .with_start(start)
//!     .with_end(end)
//!     .with_strategy(DijkstraSolver);
//! let path = context.run().unwrap();
//! assert_eq!(path.len(), 2);
//! ```
mod context;
mod error;
mod position;
mod search;
pub mod solver;
mod terrain;
mod terrain_grid;

pub use context::Context;
pub use error::{ContextError, GridError, TerrainError};
pub use position::Position;
pub use solver::astar::AstarSolver;
pub use solver::dijkstra::DijkstraSolver;
pub use solver::{path_fuel, PathfindingStrategy, StrategyKind};
pub use terrain::{Terrain, TerrainKind};
pub use terrain_grid::TerrainGrid;

/// Default weight of [TerrainKind::Flat] cells.
pub const FLAT_WEIGHT: f64 = 1.0;
/// Default weight of [TerrainKind::Plateau] cells.
pub const PLATEAU_WEIGHT: f64 = 1.0;
/// Default weight of [TerrainKind::DownHill] cells.
pub const DOWNHILL_WEIGHT: f64 = 0.5;
/// Default weight of [TerrainKind::UpHill] cells.
pub const UPHILL_WEIGHT: f64 = 2.0;

/// Offsets of the full 8-neighbourhood in the order the Dijkstra solver expands them.
pub const MOORE_OFFSETS: [Position; 8] = [
    Position::new(-1, -1),
    Position::new(-1, 0),
    Position::new(-1, 1),
    Position::new(0, -1),
    Position::new(0, 1),
    Position::new(1, -1),
    Position::new(1, 0),
    Position::new(1, 1),
];

/// Offsets of the orthogonal 4-neighbourhood in the order the A* solver expands them.
pub const NEUMANN_OFFSETS: [Position; 4] = [
    Position::new(-1, 0),
    Position::new(0, -1),
    Position::new(0, 1),
    Position::new(1, 0),
];

/// Default multiplier applied to the A* heuristic.
const HEURISTIC_FACTOR: f64 = 1.0;
