use terrain_pathfinding::{path_fuel, Context, Position, StrategyKind, TerrainGrid, TerrainKind};

// In this example paths are found on a 5x4 grid with shape
//  _________
// |S . . . .|
// |. ^ ^ ^ .|
// |. v = ^ .|
// |. . . . E|
//  _________
// where
// - ^ marks uphill terrain, v downhill and = a plateau
// - S marks the start
// - E marks the end
//
// Both built-in strategies are run on the same context.

fn main() {
    let mut grid = TerrainGrid::filled(5, 4, TerrainKind::Flat);
    for x in 1..=3 {
        grid.set(Position::new(x, 1), TerrainKind::UpHill);
    }
    grid.set(Position::new(1, 2), TerrainKind::DownHill);
    grid.set(Position::new(2, 2), TerrainKind::Plateau);
    grid.set(Position::new(3, 2), TerrainKind::UpHill);
    println!("{}", grid);

    let start = grid.get(Position::new(0, 0)).cloned().unwrap();
    let end = grid.get(Position::new(4, 3)).cloned().unwrap();
    let mut context = Context::new().with_grid(grid).with_start(start).with_end(end);
    for kind in [StrategyKind::Dijkstra, StrategyKind::AStar] {
        context.set_strategy_kind(kind);
        let path = context.run().unwrap();
        println!("{} path (fuel {}):", kind, path_fuel(&path));
        for cell in path {
            println!("{}", cell);
        }
    }
}
