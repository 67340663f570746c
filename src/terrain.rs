use crate::error::TerrainError;
use crate::position::Position;
use crate::{DOWNHILL_WEIGHT, FLAT_WEIGHT, PLATEAU_WEIGHT, UPHILL_WEIGHT};
use core::fmt;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

/// The four terrain types a cell can have. They differ only in their default weight.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TerrainKind {
    Flat,
    Plateau,
    DownHill,
    UpHill,
}

impl TerrainKind {
    pub fn default_weight(self) -> f64 {
        match self {
            TerrainKind::Flat => FLAT_WEIGHT,
            TerrainKind::Plateau => PLATEAU_WEIGHT,
            TerrainKind::DownHill => DOWNHILL_WEIGHT,
            TerrainKind::UpHill => UPHILL_WEIGHT,
        }
    }

    pub fn glyph(self) -> char {
        match self {
            TerrainKind::Flat => '.',
            TerrainKind::Plateau => '=',
            TerrainKind::DownHill => 'v',
            TerrainKind::UpHill => '^',
        }
    }
}

/// A single grid cell. Two cells are equal when they sit at the same [Position],
/// whatever their weight; cells are ordered by weight alone.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(try_from = "RawTerrain")]
pub struct Terrain {
    kind: TerrainKind,
    weight: f64,
    position: Position,
}

impl Terrain {
    /// A cell of the given kind with its default weight and an unset position.
    pub fn new(kind: TerrainKind) -> Terrain {
        Terrain {
            kind,
            weight: kind.default_weight(),
            position: Position::UNSET,
        }
    }
    pub fn flat() -> Terrain {
        Terrain::new(TerrainKind::Flat)
    }
    pub fn plateau() -> Terrain {
        Terrain::new(TerrainKind::Plateau)
    }
    pub fn downhill() -> Terrain {
        Terrain::new(TerrainKind::DownHill)
    }
    pub fn uphill() -> Terrain {
        Terrain::new(TerrainKind::UpHill)
    }

    /// Overrides the default weight. Negative, infinite and NaN weights are rejected.
    pub fn with_weight(self, weight: f64) -> Result<Terrain, TerrainError> {
        if !weight.is_finite() || weight < 0.0 {
            return Err(TerrainError::InvalidWeight(weight));
        }
        Ok(Terrain { weight, ..self })
    }

    pub fn at(self, position: Position) -> Terrain {
        Terrain { position, ..self }
    }

    pub fn kind(&self) -> TerrainKind {
        self.kind
    }
    pub fn weight(&self) -> f64 {
        self.weight
    }
    pub fn position(&self) -> Position {
        self.position
    }
}

impl PartialEq for Terrain {
    fn eq(&self, other: &Self) -> bool {
        self.position == other.position
    }
}

impl Eq for Terrain {}

// Must agree with `eq`, so the weight stays out of the hash.
impl Hash for Terrain {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.position.hash(state);
    }
}

// Orders by weight alone, so equal cells may still compare Less. Not for ordered containers.
impl PartialOrd for Terrain {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.weight.partial_cmp(&other.weight)
    }
}

impl fmt::Display for Terrain {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?}{} w={}", self.kind, self.position, self.weight)
    }
}

#[derive(Deserialize)]
struct RawTerrain {
    kind: TerrainKind,
    #[serde(default)]
    weight: Option<f64>,
    #[serde(default)]
    position: Position,
}

impl TryFrom<RawTerrain> for Terrain {
    type Error = TerrainError;

    fn try_from(raw: RawTerrain) -> Result<Terrain, TerrainError> {
        let terrain = Terrain::new(raw.kind).at(raw.position);
        match raw.weight {
            Some(weight) => terrain.with_weight(weight),
            None => Ok(terrain),
        }
    }
}
