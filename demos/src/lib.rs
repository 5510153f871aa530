//! Shared simulation model for the headless demos.
//!
//! Demonstrates: registering maps from ASCII layouts, chasing with full paths,
//! idle wandering, fleeing with greedy steps, and treating other creatures as
//! per-tick dynamic obstacles.

use std::collections::HashSet;

use log::debug;
use rand::Rng;
use waypath_core::{Direction, Point};
use waypath_paths::SearchOptions;
use waypath_service::{PathfindingError, PathfindingService};

pub const MILETH: &str = "
####################
#........#.........#
#..R.....#....##...#
#........#.........#
#....#.......#.....#
#....#.......#..R..#
#....#########.....#
#..................#
####################";

pub const CRYPT: &str = "
###############
#.....#.......#
#.###.#.#####.#
#.#.....#...#.#
#.#.###.#.#.#.#
#...#.....#...#
###############";

/// What a creature does each tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Behavior {
    /// Follow a full path toward the quarry.
    Chase,
    /// Step in a random open direction.
    Wander,
    /// Step greedily away from the quarry.
    Flee,
}

#[derive(Clone, Debug)]
pub struct Creature {
    pub name: String,
    pub pos: Point,
    pub behavior: Behavior,
    /// Direction of the last step taken, `Invalid` until the first one.
    pub facing: Direction,
    pub moves: u32,
    pub stalls: u32,
}

impl Creature {
    pub fn new(name: &str, pos: Point, behavior: Behavior) -> Self {
        Self {
            name: name.to_string(),
            pos,
            behavior,
            facing: Direction::Invalid,
            moves: 0,
            stalls: 0,
        }
    }
}

/// One map's population, advanced tick by tick.
pub struct Simulation<'a> {
    service: &'a PathfindingService,
    map: String,
    pub quarry: Point,
    pub creatures: Vec<Creature>,
    options: SearchOptions,
}

impl<'a> Simulation<'a> {
    pub fn new(service: &'a PathfindingService, map: &str, quarry: Point) -> Self {
        Self {
            service,
            map: map.to_string(),
            quarry,
            creatures: Vec::new(),
            options: SearchOptions::default(),
        }
    }

    pub fn with_options(mut self, options: SearchOptions) -> Self {
        self.options = options;
        self
    }

    pub fn map(&self) -> &str {
        &self.map
    }

    pub fn spawn(&mut self, creature: Creature) {
        self.creatures.push(creature);
    }

    /// Advance every creature by one step.
    pub fn tick(&mut self, rng: &mut impl Rng) -> Result<(), PathfindingError> {
        for i in 0..self.creatures.len() {
            let options = self.options_for(i);
            let pos = self.creatures[i].pos;
            let next = match self.creatures[i].behavior {
                Behavior::Chase => {
                    if pos.is_adjacent(self.quarry) {
                        None
                    } else {
                        self.service
                            .find_path(&self.map, pos, self.quarry, &options)?
                            .first()
                            .copied()
                    }
                }
                Behavior::Wander => {
                    let pf = self.service.pathfinder(&self.map)?;
                    let dir = pf.find_random_direction_with(rng, pos, &options);
                    dir.is_valid().then(|| pos.step(dir))
                }
                Behavior::Flee => {
                    let away = pos + (pos - self.quarry);
                    let dir = self
                        .service
                        .find_simple_direction(&self.map, pos, away, &options)?;
                    (dir != Direction::Invalid).then(|| pos.step(dir))
                }
            };

            let creature = &mut self.creatures[i];
            match next {
                Some(p) => {
                    creature.facing = Direction::from_offset(p - creature.pos);
                    creature.pos = p;
                    creature.moves += 1;
                }
                None => {
                    creature.stalls += 1;
                    debug!("{} on {} holds at {}", creature.name, self.map, creature.pos);
                }
            }
        }
        Ok(())
    }

    /// Base options plus every other creature as an obstacle. The quarry
    /// blocks everyone but chasers, whose path has to end on it.
    fn options_for(&self, me: usize) -> SearchOptions {
        let mut others: HashSet<Point> = self
            .creatures
            .iter()
            .enumerate()
            .filter(|&(j, _)| j != me)
            .map(|(_, c)| c.pos)
            .collect();
        if self.creatures[me].behavior != Behavior::Chase {
            others.insert(self.quarry);
        }
        self.options.clone().with_blocked_points(others)
    }
}
