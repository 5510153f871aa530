//! Runs a few creatures on two maps, one thread per map, and prints where
//! they ended up. Set `RUST_LOG=debug` to watch registrations and stalls.

use std::thread;

use log::info;
use rand::SeedableRng;
use rand::rngs::StdRng;
use waypath_core::Point;
use waypath_demos::{Behavior, CRYPT, Creature, MILETH, Simulation};
use waypath_paths::{GridModel, SearchOptions};
use waypath_service::PathfindingService;

const TICKS: usize = 50;

fn main() {
    env_logger::init();

    let service = PathfindingService::new();
    for (key, layout) in [("Mileth", MILETH), ("Crypt", CRYPT)] {
        match GridModel::from_layout(layout) {
            Ok(grid) => service.register_grid(key, grid),
            Err(e) => {
                eprintln!("Error: map {key}: {e}");
                std::process::exit(1);
            }
        }
    }

    let results = thread::scope(|scope| {
        let mileth = scope.spawn(|| {
            let mut sim = Simulation::new(&service, "mileth", Point::new(17, 7));
            sim.spawn(Creature::new("wolf", Point::new(1, 1), Behavior::Chase));
            sim.spawn(Creature::new("kobold", Point::new(6, 3), Behavior::Chase));
            sim.spawn(Creature::new("rat", Point::new(11, 2), Behavior::Wander));
            sim.spawn(Creature::new("deer", Point::new(15, 5), Behavior::Flee));
            run(sim, 1)
        });
        let crypt = scope.spawn(|| {
            let options = SearchOptions::default()
                .with_limit_radius(20)
                .with_ignore_blocking_reactors(true);
            let mut sim = Simulation::new(&service, "crypt", Point::new(13, 5)).with_options(options);
            sim.spawn(Creature::new("ghoul", Point::new(1, 1), Behavior::Chase));
            sim.spawn(Creature::new("bat", Point::new(5, 1), Behavior::Wander));
            sim.spawn(Creature::new("imp", Point::new(9, 3), Behavior::Flee));
            run(sim, 2)
        });
        [mileth.join(), crypt.join()]
    });

    for result in results {
        match result {
            Ok(Ok(lines)) => lines.iter().for_each(|l| println!("{l}")),
            Ok(Err(e)) => {
                eprintln!("Error: {e}");
                std::process::exit(1);
            }
            Err(_) => {
                eprintln!("Error: simulation thread panicked");
                std::process::exit(1);
            }
        }
    }
}

fn run(mut sim: Simulation<'_>, seed: u64) -> Result<Vec<String>, waypath_service::PathfindingError> {
    let mut rng = StdRng::seed_from_u64(seed);
    for tick in 0..TICKS {
        sim.tick(&mut rng)?;
        if tick % 10 == 0 {
            info!("{}: tick {tick}", sim.map());
        }
    }
    let mut lines = vec![format!("{} (quarry at {}):", sim.map(), sim.quarry)];
    for c in &sim.creatures {
        lines.push(format!(
            "  {:<7} {:?} at {} facing {} after {} moves, {} stalls",
            c.name, c.behavior, c.pos, c.facing, c.moves, c.stalls
        ));
    }
    Ok(lines)
}
