use crate::search::{best_first_search, QueuePolicy};
use crate::terrain::Terrain;
use crate::terrain_grid::TerrainGrid;
use crate::{solver::PathfindingStrategy, HEURISTIC_FACTOR, NEUMANN_OFFSETS};

/// A* over the 4-neighbourhood. Both step cost and heuristic are the Manhattan distance.
/// A cell is only queued if it is not already waiting in the queue.
#[derive(Clone, Debug)]
pub struct AstarSolver {
    pub heuristic_factor: f64,
}

impl AstarSolver {
    pub fn new() -> AstarSolver {
        AstarSolver {
            heuristic_factor: HEURISTIC_FACTOR,
        }
    }

    /// Just the distance times the heuristic factor.
    pub fn heuristic(&self, node: &Terrain, end: &Terrain) -> f64 {
        self.calculate_distance(node, end) * self.heuristic_factor
    }
}

impl Default for AstarSolver {
    fn default() -> AstarSolver {
        AstarSolver::new()
    }
}

impl PathfindingStrategy for AstarSolver {
    fn find_path(&self, grid: &TerrainGrid, start: &Terrain, end: &Terrain) -> Vec<Terrain> {
        best_first_search(
            start,
            end,
            QueuePolicy::SkipQueued,
            |node| {
                self.get_neighbors(grid, node)
                    .into_iter()
                    .map(|n| {
                        let cost = self.calculate_distance(node, &n);
                        (n, cost)
                    })
                    .collect::<Vec<_>>()
            },
            |node| self.heuristic(node, end),
        )
    }

    fn get_neighbors(&self, grid: &TerrainGrid, node: &Terrain) -> Vec<Terrain> {
        grid.neighborhood(node.position(), &NEUMANN_OFFSETS)
    }

    fn calculate_distance(&self, node1: &Terrain, node2: &Terrain) -> f64 {
        node1.position().manhattan_distance(&node2.position()) as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::Position;
    use crate::terrain::TerrainKind;

    fn cell(grid: &TerrainGrid, x: i32, y: i32) -> Terrain {
        grid.get(Position::new(x, y)).unwrap().clone()
    }

    /// Asserts that the optimal 4 step solution is found, going down the first column.
    #[test]
    fn solve_simple_problem() {
        let grid = TerrainGrid::filled(3, 3, TerrainKind::Flat);
        let solver = AstarSolver::new();
        let path = solver.find_path(&grid, &cell(&grid, 0, 0), &cell(&grid, 2, 2));
        let expected: Vec<Terrain> = [(0, 1), (0, 2), (1, 2), (2, 2)]
            .into_iter()
            .map(|(x, y)| Terrain::flat().at(Position::new(x, y)))
            .collect();
        assert_eq!(path, expected);
    }

    #[test]
    fn neighbour_counts() {
        let grid = TerrainGrid::filled(3, 3, TerrainKind::Flat);
        let solver = AstarSolver::new();
        for ((x, y), count) in [((1, 1), 4), ((0, 0), 2), ((1, 0), 3), ((2, 2), 2)] {
            let neighbours = solver.get_neighbors(&grid, &cell(&grid, x, y));
            assert_eq!(neighbours.len(), count);
            assert!(neighbours
                .iter()
                .all(|n| n.position().manhattan_distance(&Position::new(x, y)) == 1));
        }
    }

    #[test]
    fn manhattan_distance() {
        let solver = AstarSolver::new();
        let a = Terrain::flat().at(Position::new(0, 0));
        let b = Terrain::flat().at(Position::new(1, 1));
        let c = Terrain::flat().at(Position::new(3, -2));
        assert_eq!(solver.calculate_distance(&a, &b), 2.0);
        assert_eq!(solver.calculate_distance(&a, &c), 5.0);
    }

    #[test]
    fn heuristic_factor_scales_estimate() {
        let mut solver = AstarSolver::new();
        solver.heuristic_factor = 1.5;
        let a = Terrain::flat().at(Position::new(0, 0));
        let b = Terrain::flat().at(Position::new(2, 0));
        assert_eq!(solver.heuristic(&a, &b), 3.0);
    }

    #[test]
    fn path_length_is_manhattan_distance() {
        let grid = TerrainGrid::filled(7, 5, TerrainKind::DownHill);
        let solver = AstarSolver::new();
        let start = cell(&grid, 6, 0);
        let end = cell(&grid, 1, 4);
        let path = solver.find_path(&grid, &start, &end);
        assert_eq!(path.len(), 9);
        assert_eq!(path.last(), Some(&end));
        let mut previous = start.position();
        for step in &path {
            assert_eq!(step.position().manhattan_distance(&previous), 1);
            previous = step.position();
        }
    }

    #[test]
    fn unreachable_end_gives_empty_path() {
        let grid = TerrainGrid::filled(3, 3, TerrainKind::Flat);
        let outside = Terrain::flat().at(Position::new(-4, 1));
        assert!(AstarSolver::new()
            .find_path(&grid, &cell(&grid, 0, 0), &outside)
            .is_empty());
    }
}
