use crate::error::ContextError;
use crate::solver::{PathfindingStrategy, StrategyKind};
use crate::terrain::Terrain;
use crate::terrain_grid::TerrainGrid;
use log::debug;
use serde_json::Value;

/// Holds the parameters of a single query and runs it with the selected strategy.
/// Everything starts out unset; [run](Context::run) refuses to guess missing values.
#[derive(Debug, Default)]
pub struct Context {
    grid: Option<TerrainGrid>,
    start: Option<Terrain>,
    end: Option<Terrain>,
    strategy: Option<Box<dyn PathfindingStrategy>>,
}

impl Context {
    pub fn new() -> Context {
        Context::default()
    }

    pub fn with_grid(mut self, grid: TerrainGrid) -> Context {
        self.set_grid(grid);
        self
    }
    pub fn with_start(mut self, start: Terrain) -> Context {
        self.set_start(start);
        self
    }
    pub fn with_end(mut self, end: Terrain) -> Context {
        self.set_end(end);
        self
    }
    pub fn with_strategy<S: PathfindingStrategy + 'static>(mut self, strategy: S) -> Context {
        self.set_strategy(strategy);
        self
    }

    pub fn grid(&self) -> Option<&TerrainGrid> {
        self.grid.as_ref()
    }
    pub fn start(&self) -> Option<&Terrain> {
        self.start.as_ref()
    }
    pub fn end(&self) -> Option<&Terrain> {
        self.end.as_ref()
    }
    pub fn strategy(&self) -> Option<&dyn PathfindingStrategy> {
        self.strategy.as_deref()
    }

    pub fn set_grid(&mut self, grid: TerrainGrid) {
        self.grid = Some(grid);
    }

    /// Assigns a grid given as columns. Ragged columns are rejected and leave the current
    /// grid in place.
    pub fn set_grid_columns(&mut self, columns: Vec<Vec<Terrain>>) -> Result<(), ContextError> {
        self.grid = Some(TerrainGrid::new(columns)?);
        Ok(())
    }

    /// Assigns a grid given as an untyped JSON document. See
    /// [TerrainGrid::from_json_value] for the expected shape.
    pub fn set_grid_value(&mut self, value: &Value) -> Result<(), ContextError> {
        self.grid = Some(TerrainGrid::from_json_value(value)?);
        Ok(())
    }

    pub fn set_start(&mut self, start: Terrain) {
        self.start = Some(start);
    }
    pub fn set_end(&mut self, end: Terrain) {
        self.end = Some(end);
    }

    pub fn set_strategy<S: PathfindingStrategy + 'static>(&mut self, strategy: S) {
        self.strategy = Some(Box::new(strategy));
    }

    pub fn set_strategy_kind(&mut self, kind: StrategyKind) {
        self.strategy = Some(kind.into_strategy());
    }

    /// Selects a built-in strategy by name, e.g. `"dijkstra"` or `"astar"`.
    pub fn set_strategy_name(&mut self, name: &str) -> Result<(), ContextError> {
        self.set_strategy_kind(name.parse()?);
        Ok(())
    }

    /// Runs the strategy from scratch on the current grid, start and end and returns its
    /// path unchanged.
    pub fn run(&self) -> Result<Vec<Terrain>, ContextError> {
        let strategy = self
            .strategy
            .as_ref()
            .ok_or(ContextError::MissingCapability("find_path"))?;
        let grid = self.grid.as_ref().ok_or(ContextError::Unset("grid"))?;
        let start = self.start.as_ref().ok_or(ContextError::Unset("start"))?;
        let end = self.end.as_ref().ok_or(ContextError::Unset("end"))?;
        debug!(
            "Running {:?} on a {}x{} grid from {} to {}",
            strategy,
            grid.width(),
            grid.height(),
            start.position(),
            end.position()
        );
        Ok(strategy.find_path(grid, start, end))
    }
}
