use std::time::Instant;

use dungest::{
    dungeon::{Dungeon, Point},
    generators::{CaveParams, Generator},
    solvers::Solver,
};

fn main() {
    let mut args = std::env::args();
    args.next(); // Skip executable name
    let num_iters = args
        .next()
        .and_then(|s| s.parse::<u32>().ok())
        .unwrap_or(100);

    let start = Point::new(1, 1);
    let end = Point::new(Dungeon::WIDTH - 2, Dungeon::HEIGHT - 2);
    let generators = [
        Generator::CellularAutomata(CaveParams::default()),
        Generator::RecurBacktrack,
    ];

    for generator in generators {
        for solver in [Solver::AStar, Solver::Dijkstra] {
            let mut found = 0;
            let timer = Instant::now();
            for seed in 0..num_iters {
                let mut dungeon = Dungeon::new(seed);
                dungeon.generate(generator);
                if dungeon.find_route(start, end, solver).is_some() {
                    found += 1;
                }
            }
            let elapsed = timer.elapsed();
            println!(
                "{} + {}: {} runs in {:?} ({:?} per run), {} routes found",
                generator,
                solver,
                num_iters,
                elapsed,
                elapsed / num_iters.max(1),
                found
            );
        }
    }
}
