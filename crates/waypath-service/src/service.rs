use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use log::debug;
use parking_lot::RwLock;
use waypath_core::{Direction, Point};
use waypath_paths::{GridModel, Pathfinder, SearchOptions};

use crate::error::PathfindingError;

/// Case-insensitive map identifier.
///
/// Stored folded to lowercase so that `"Mileth"` and `"MILETH"` name the same
/// map.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct MapKey(String);

impl MapKey {
    pub fn new(key: &str) -> Self {
        Self(key.to_lowercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MapKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Registry mapping map keys to their [`Pathfinder`].
///
/// Registration takes the write lock; queries take the read lock only long
/// enough to clone the `Arc<Pathfinder>` and search outside it. Replacing a
/// map therefore never disturbs a search already running against the old
/// grid.
#[derive(Default)]
pub struct PathfindingService {
    grids: RwLock<HashMap<MapKey, Arc<Pathfinder>>>,
}

impl PathfindingService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `grid` under `key`, replacing any earlier registration.
    pub fn register_grid(&self, key: &str, grid: GridModel) {
        let map_key = MapKey::new(key);
        debug!(
            "registering pathfinding grid {map_key} ({}x{}, {} walls, {} blocking reactors)",
            grid.width(),
            grid.height(),
            grid.walls().len(),
            grid.blocking_reactors().len(),
        );
        let pathfinder = Arc::new(Pathfinder::new(grid));
        if self.grids.write().insert(map_key.clone(), pathfinder).is_some() {
            debug!("replaced previous pathfinding grid for {map_key}");
        }
    }

    /// Drop the registration for `key`. Returns whether one existed.
    pub fn remove_grid(&self, key: &str) -> bool {
        let map_key = MapKey::new(key);
        let removed = self.grids.write().remove(&map_key).is_some();
        if removed {
            debug!("removed pathfinding grid {map_key}");
        }
        removed
    }

    pub fn contains(&self, key: &str) -> bool {
        self.grids.read().contains_key(&MapKey::new(key))
    }

    pub fn len(&self) -> usize {
        self.grids.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.grids.read().is_empty()
    }

    /// The shared pathfinder currently registered for `key`.
    pub fn pathfinder(&self, key: &str) -> Result<Arc<Pathfinder>, PathfindingError> {
        self.grids
            .read()
            .get(&MapKey::new(key))
            .cloned()
            .ok_or_else(|| PathfindingError::NotFound {
                key: key.to_string(),
            })
    }

    /// See [`Pathfinder::find_path`].
    pub fn find_path(
        &self,
        key: &str,
        start: Point,
        end: Point,
        options: &SearchOptions,
    ) -> Result<Vec<Point>, PathfindingError> {
        Ok(self.pathfinder(key)?.find_path(start, end, options))
    }

    /// See [`Pathfinder::find_random_direction`].
    pub fn find_random_direction(
        &self,
        key: &str,
        point: Point,
        options: &SearchOptions,
    ) -> Result<Direction, PathfindingError> {
        Ok(self.pathfinder(key)?.find_random_direction(point, options))
    }

    /// See [`Pathfinder::find_simple_direction`].
    pub fn find_simple_direction(
        &self,
        key: &str,
        start: Point,
        end: Point,
        options: &SearchOptions,
    ) -> Result<Direction, PathfindingError> {
        Ok(self.pathfinder(key)?.find_simple_direction(start, end, options))
    }
}

impl fmt::Debug for PathfindingService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let grids = self.grids.read();
        let mut keys: Vec<&str> = grids.keys().map(MapKey::as_str).collect();
        keys.sort_unstable();
        f.debug_struct("PathfindingService").field("grids", &keys).finish()
    }
}
