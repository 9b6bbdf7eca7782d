use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::model::direction::Direction;

/// The application pinned to a direction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppMapping {
    pub bundle_id: String,
    pub name: String,
}

impl AppMapping {
    pub fn new(bundle_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            bundle_id: bundle_id.into(),
            name: name.into(),
        }
    }
}

/// Lookup seam for whatever owns the direction assignments.
pub trait MappingStore {
    fn lookup(&self, direction: Direction) -> Option<&AppMapping>;
}

/// At most one application per direction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DirectionMap(BTreeMap<Direction, AppMapping>);

impl DirectionMap {
    pub fn new() -> Self { Self::default() }

    /// Pins `app` to `direction`, returning whatever was there before.
    pub fn assign(&mut self, direction: Direction, app: AppMapping) -> Option<AppMapping> {
        self.0.insert(direction, app)
    }

    pub fn unassign(&mut self, direction: Direction) -> Option<AppMapping> {
        self.0.remove(&direction)
    }
}

impl MappingStore for DirectionMap {
    fn lookup(&self, direction: Direction) -> Option<&AppMapping> { self.0.get(&direction) }
}
