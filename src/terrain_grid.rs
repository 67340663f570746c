use crate::error::GridError;
use crate::position::Position;
use crate::terrain::{Terrain, TerrainKind};
use core::fmt;
use itertools::{iproduct, Itertools};
use serde_json::Value;

/// A rectangular grid of [Terrain] cells stored as columns, so that `columns[x][y]`
/// is the cell at `(x, y)`. The grid is read-only during a search.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TerrainGrid {
    columns: Vec<Vec<Terrain>>,
    height: usize,
}

impl TerrainGrid {
    /// Wraps the given columns, rejecting ragged input. Cells keep whatever position they
    /// were built with.
    pub fn new(columns: Vec<Vec<Terrain>>) -> Result<TerrainGrid, GridError> {
        let height = columns.first().map_or(0, Vec::len);
        if let Some((column, found)) = columns
            .iter()
            .map(Vec::len)
            .enumerate()
            .find(|&(_, len)| len != height)
        {
            return Err(GridError::Ragged {
                column,
                expected: height,
                found,
            });
        }
        Ok(TerrainGrid { columns, height })
    }

    /// A `width` x `height` grid of a single terrain kind, each cell positioned at its index.
    ///
    /// Panics if either dimension does not fit in an [i32] coordinate.
    pub fn filled(width: usize, height: usize, kind: TerrainKind) -> TerrainGrid {
        let (Ok(w), Ok(h)) = (i32::try_from(width), i32::try_from(height)) else {
            panic!("grid of {width}x{height} cells does not fit i32 coordinates");
        };
        let columns = (0..w)
            .map(|x| {
                (0..h)
                    .map(|y| Terrain::new(kind).at(Position::new(x, y)))
                    .collect()
            })
            .collect();
        TerrainGrid { columns, height }
    }

    /// Builds a grid from an untyped JSON document: an array of columns, each an array of
    /// cells such as `{"kind": "up_hill", "weight": 2.5}`. Cells without a position are
    /// placed at their index.
    pub fn from_json_value(value: &Value) -> Result<TerrainGrid, GridError> {
        let columns = value.as_array().ok_or(GridError::NotAList)?;
        let columns = columns
            .iter()
            .enumerate()
            .map(|(x, column)| -> Result<Vec<Terrain>, GridError> {
                let cells = column.as_array().ok_or(GridError::NotAListOfLists)?;
                cells
                    .iter()
                    .enumerate()
                    .map(|(y, cell)| parse_cell(x, y, cell))
                    .collect::<Result<Vec<_>, _>>()
            })
            .collect::<Result<Vec<_>, _>>()?;
        TerrainGrid::new(columns)
    }

    pub fn width(&self) -> usize {
        self.columns.len()
    }
    pub fn height(&self) -> usize {
        self.height
    }
    pub fn columns(&self) -> &[Vec<Terrain>] {
        &self.columns
    }

    pub fn in_bounds(&self, position: Position) -> bool {
        position.x >= 0
            && position.y >= 0
            && (position.x as usize) < self.width()
            && (position.y as usize) < self.height
    }

    pub fn get(&self, position: Position) -> Option<&Terrain> {
        if self.in_bounds(position) {
            Some(&self.columns[position.x as usize][position.y as usize])
        } else {
            None
        }
    }

    /// Repaints the cell at `position` with the default weight of `kind`. Returns [false]
    /// if the position lies outside the grid.
    pub fn set(&mut self, position: Position, kind: TerrainKind) -> bool {
        if !self.in_bounds(position) {
            return false;
        }
        self.columns[position.x as usize][position.y as usize] = Terrain::new(kind).at(position);
        true
    }

    /// All cells, column by column.
    pub fn cells(&self) -> impl Iterator<Item = &Terrain> {
        iproduct!(0..self.width(), 0..self.height).map(|(x, y)| &self.columns[x][y])
    }

    /// The in-bounds cells reached by applying each offset to `position`, in offset order.
    pub fn neighborhood(&self, position: Position, offsets: &[Position]) -> Vec<Terrain> {
        offsets
            .iter()
            .filter_map(|&offset| position + offset)
            .filter_map(|p| self.get(p))
            .cloned()
            .collect()
    }
}

fn parse_cell(x: usize, y: usize, cell: &Value) -> Result<Terrain, GridError> {
    let terrain: Terrain =
        serde_json::from_value(cell.clone()).map_err(|e| GridError::InvalidCell {
            x,
            y,
            reason: e.to_string(),
        })?;
    if terrain.position().is_set() {
        Ok(terrain)
    } else {
        Ok(terrain.at(Position::new(x as i32, y as i32)))
    }
}

impl fmt::Display for TerrainGrid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Grid:")?;
        for y in 0..self.height {
            let row = self.columns.iter().map(|c| c[y].kind().glyph()).join(" ");
            writeln!(f, "{}", row)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn filled_positions_match_indices() {
        let grid = TerrainGrid::filled(3, 2, TerrainKind::Plateau);
        assert_eq!(grid.width(), 3);
        assert_eq!(grid.height(), 2);
        for x in 0..3 {
            for y in 0..2 {
                let p = Position::new(x, y);
                assert_eq!(grid.get(p).unwrap().position(), p);
            }
        }
        assert_eq!(grid.cells().count(), 6);
    }

    #[test]
    #[should_panic(expected = "does not fit i32 coordinates")]
    fn filled_rejects_oversized_dimensions() {
        TerrainGrid::filled(i32::MAX as usize + 1, 1, TerrainKind::Flat);
    }

    #[test]
    fn bounds() {
        let grid = TerrainGrid::filled(3, 3, TerrainKind::Flat);
        assert!(grid.in_bounds(Position::new(2, 2)));
        assert!(!grid.in_bounds(Position::new(3, 0)));
        assert!(!grid.in_bounds(Position::new(0, -1)));
        assert!(!grid.in_bounds(Position::UNSET));
        assert!(grid.get(Position::new(-1, 0)).is_none());
    }

    #[test]
    fn rejects_ragged_columns() {
        let columns = vec![
            vec![Terrain::flat(), Terrain::flat()],
            vec![Terrain::flat()],
        ];
        assert_eq!(
            TerrainGrid::new(columns),
            Err(GridError::Ragged {
                column: 1,
                expected: 2,
                found: 1
            })
        );
        assert!(TerrainGrid::new(vec![]).is_ok());
    }

    #[test]
    fn set_repaints_cell() {
        let mut grid = TerrainGrid::filled(2, 2, TerrainKind::Flat);
        assert!(grid.set(Position::new(1, 0), TerrainKind::UpHill));
        let cell = grid.get(Position::new(1, 0)).unwrap();
        assert_eq!(cell.kind(), TerrainKind::UpHill);
        assert_eq!(cell.weight(), 2.0);
        assert_eq!(cell.position(), Position::new(1, 0));
        assert!(!grid.set(Position::new(2, 0), TerrainKind::UpHill));
    }

    #[test]
    fn neighborhood_stays_in_bounds() {
        let grid = TerrainGrid::filled(3, 3, TerrainKind::Flat);
        let n = grid.neighborhood(Position::new(0, 0), &crate::MOORE_OFFSETS);
        assert_eq!(n.len(), 3);
        let n = grid.neighborhood(Position::UNSET, &crate::MOORE_OFFSETS);
        assert!(n.is_empty());
    }

    #[test]
    fn json_document_shape_errors() {
        assert_eq!(
            TerrainGrid::from_json_value(&json!("not a list")),
            Err(GridError::NotAList)
        );
        assert_eq!(
            TerrainGrid::from_json_value(&json!([10, 20])),
            Err(GridError::NotAListOfLists)
        );
        assert!(matches!(
            TerrainGrid::from_json_value(&json!([[{"kind": "lava"}]])),
            Err(GridError::InvalidCell { x: 0, y: 0, .. })
        ));
    }

    #[test]
    fn json_document_places_cells() {
        let grid = TerrainGrid::from_json_value(&json!([
            [{"kind": "flat"}, {"kind": "up_hill"}],
            [{"kind": "down_hill", "weight": 0.25}, {"kind": "plateau"}]
        ]))
        .unwrap();
        assert_eq!(grid.width(), 2);
        let cell = grid.get(Position::new(1, 0)).unwrap();
        assert_eq!(cell.kind(), TerrainKind::DownHill);
        assert_eq!(cell.weight(), 0.25);
        assert_eq!(cell.position(), Position::new(1, 0));
    }

    #[test]
    fn display_renders_rows() {
        let mut grid = TerrainGrid::filled(3, 2, TerrainKind::Flat);
        grid.set(Position::new(1, 1), TerrainKind::UpHill);
        assert_eq!(format!("{}", grid), "Grid:\n. . .\n. ^ .\n");
    }
}
