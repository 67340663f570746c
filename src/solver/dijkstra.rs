use crate::search::{best_first_search, QueuePolicy};
use crate::terrain::Terrain;
use crate::terrain_grid::TerrainGrid;
use crate::{solver::PathfindingStrategy, MOORE_OFFSETS};

/// Uniform-cost search over the 8-neighbourhood. Steps cost their Euclidean length, so
/// cardinal moves cost 1 and diagonal moves cost sqrt(2). Terrain weights are not used.
#[derive(Clone, Debug, Default)]
pub struct DijkstraSolver;

impl PathfindingStrategy for DijkstraSolver {
    fn find_path(&self, grid: &TerrainGrid, start: &Terrain, end: &Terrain) -> Vec<Terrain> {
        best_first_search(
            start,
            end,
            QueuePolicy::AllowDuplicates,
            |node| {
                self.get_neighbors(grid, node)
                    .into_iter()
                    .map(|n| {
                        let cost = self.calculate_distance(node, &n);
                        (n, cost)
                    })
                    .collect::<Vec<_>>()
            },
            |_| 0.0,
        )
    }

    fn get_neighbors(&self, grid: &TerrainGrid, node: &Terrain) -> Vec<Terrain> {
        grid.neighborhood(node.position(), &MOORE_OFFSETS)
    }

    fn calculate_distance(&self, node1: &Terrain, node2: &Terrain) -> f64 {
        node1.position().euclidean_distance(&node2.position())
    }
}
