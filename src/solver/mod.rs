use crate::error::ContextError;
use crate::terrain::Terrain;
use crate::terrain_grid::TerrainGrid;
use astar::AstarSolver;
use core::fmt;
use dijkstra::DijkstraSolver;
use std::str::FromStr;

pub mod astar;
pub mod dijkstra;

/// The capabilities every search strategy provides. [Context](crate::Context) only ever
/// talks to a strategy through this trait.
pub trait PathfindingStrategy: fmt::Debug {
    /// Computes a path from `start` to `end`. The returned cells exclude `start` and end
    /// with `end`; an empty path means `end` was not reached.
    fn find_path(&self, grid: &TerrainGrid, start: &Terrain, end: &Terrain) -> Vec<Terrain>;

    /// The in-bounds cells a search may step to from `node`.
    fn get_neighbors(&self, grid: &TerrainGrid, node: &Terrain) -> Vec<Terrain>;

    /// Cost of stepping between two cells.
    fn calculate_distance(&self, node1: &Terrain, node2: &Terrain) -> f64;

    /// Sums [calculate_distance](Self::calculate_distance) along `path`, starting from `start`.
    fn path_cost(&self, start: &Terrain, path: &[Terrain]) -> f64 {
        let mut previous = start;
        let mut total = 0.0;
        for node in path {
            total += self.calculate_distance(previous, node);
            previous = node;
        }
        total
    }
}

impl<S: PathfindingStrategy + ?Sized> PathfindingStrategy for Box<S> {
    fn find_path(&self, grid: &TerrainGrid, start: &Terrain, end: &Terrain) -> Vec<Terrain> {
        (**self).find_path(grid, start, end)
    }
    fn get_neighbors(&self, grid: &TerrainGrid, node: &Terrain) -> Vec<Terrain> {
        (**self).get_neighbors(grid, node)
    }
    fn calculate_distance(&self, node1: &Terrain, node2: &Terrain) -> f64 {
        (**self).calculate_distance(node1, node2)
    }
}

/// Total terrain weight of the cells on a path. Neither solver uses weights when
/// searching; this reports what a path costs in terms of terrain.
pub fn path_fuel(path: &[Terrain]) -> f64 {
    path.iter().map(Terrain::weight).sum()
}

/// The built-in strategies, selectable by name.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StrategyKind {
    Dijkstra,
    AStar,
}

impl StrategyKind {
    pub fn into_strategy(self) -> Box<dyn PathfindingStrategy> {
        match self {
            StrategyKind::Dijkstra => Box::new(DijkstraSolver),
            StrategyKind::AStar => Box::new(AstarSolver::new()),
        }
    }
}

impl FromStr for StrategyKind {
    type Err = ContextError;

    fn from_str(s: &str) -> Result<StrategyKind, ContextError> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dijkstra" => Ok(StrategyKind::Dijkstra),
            "astar" | "a_star" | "a*" => Ok(StrategyKind::AStar),
            _ => Err(ContextError::UnknownStrategy(s.to_owned())),
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            StrategyKind::Dijkstra => write!(f, "dijkstra"),
            StrategyKind::AStar => write!(f, "astar"),
        }
    }
}
