//! Depot and coordinate types

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::warn;

use busfare_types::{Error, Result};

/// A point on the earth in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinates {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

/// State-transport depot (bus stand)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Depot {
    pub name: String,
    pub lat: f64,
    pub lon: f64,
    pub id: u32,
}

impl Depot {
    pub fn coordinates(&self) -> Coordinates {
        Coordinates::new(self.lat, self.lon)
    }
}

fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Depot list indexed by case-normalised name
#[derive(Debug, Clone, Default)]
pub struct DepotDirectory {
    depots: Vec<Depot>,
    by_name: HashMap<String, usize>,
}

impl DepotDirectory {
    /// Build the index. A repeated name keeps the first depot.
    pub fn new(depots: Vec<Depot>) -> Self {
        let mut kept = Vec::with_capacity(depots.len());
        let mut by_name = HashMap::with_capacity(depots.len());
        for depot in depots {
            let key = normalize_name(&depot.name);
            if by_name.contains_key(&key) {
                warn!(name = %depot.name, id = depot.id, "duplicate depot name ignored");
                continue;
            }
            by_name.insert(key, kept.len());
            kept.push(depot);
        }
        Self {
            depots: kept,
            by_name,
        }
    }

    pub fn all(&self) -> &[Depot] {
        &self.depots
    }

    pub fn len(&self) -> usize {
        self.depots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.depots.is_empty()
    }

    /// Find a depot by name, case-insensitively
    pub fn resolve(&self, name: &str) -> Result<&Depot> {
        self.by_name
            .get(&normalize_name(name))
            .map(|&i| &self.depots[i])
            .ok_or_else(|| Error::DepotNotFound(name.to_string()))
    }

    /// Depots whose name starts with `prefix`, in load order
    pub fn search(&self, prefix: &str) -> Vec<&Depot> {
        let prefix = normalize_name(prefix);
        self.depots
            .iter()
            .filter(|d| normalize_name(&d.name).starts_with(&prefix))
            .collect()
    }
}
