//! Region, planet and belt descriptors: the declarative data tables.
//!
//! Angles are in degrees, signed, measured the SVG way (clockwise on screen).

use serde::{Deserialize, Serialize};

use crate::api::error::{SceneError, SceneResult};
use crate::api::types::{PlanetName, RegionName};

/// A planet and its fixed place on the ring.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Planet {
    pub name: PlanetName,
    /// Orbit-position angle in degrees.
    pub orbit_pos: f64,
}

impl Planet {
    pub const fn new(name: PlanetName, orbit_pos: f64) -> Self {
        Self { name, orbit_pos }
    }
}

/// Asteroid belt descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AsteroidBelt {
    /// Orbit-position angle in degrees.
    pub orbit_pos: f64,
    /// Number of clusters, each holding `asteroids_per_cluster` rocks.
    pub clusters: usize,
}

/// What a region contains. Exactly one kind per region.
#[derive(Debug, Clone, PartialEq)]
pub enum RegionContent<'a> {
    Planets(&'a [Planet]),
    Asteroids(AsteroidBelt),
}

/// A named annular zone. On the wire exactly one of `planets` and
/// `asteroids` is present; `validate` enforces it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Region {
    pub name: RegionName,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub planets: Option<Vec<Planet>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub asteroids: Option<AsteroidBelt>,
}

impl Region {
    pub fn with_planets(name: RegionName, planets: Vec<Planet>) -> Self {
        Self {
            name,
            planets: Some(planets),
            asteroids: None,
        }
    }

    pub fn with_asteroids(name: RegionName, orbit_pos: f64, clusters: usize) -> Self {
        Self {
            name,
            planets: None,
            asteroids: Some(AsteroidBelt { orbit_pos, clusters }),
        }
    }

    /// Check the one-of rule and non-empty contents.
    pub fn validate(&self) -> SceneResult<()> {
        match (&self.planets, &self.asteroids) {
            (Some(_), Some(_)) => Err(SceneError::invalid_region(
                self.name,
                "has both planets and asteroids",
            )),
            (None, None) => Err(SceneError::invalid_region(self.name, "is empty")),
            (Some(planets), None) if planets.is_empty() => {
                Err(SceneError::invalid_region(self.name, "planet list is empty"))
            }
            (None, Some(belt)) if belt.clusters == 0 => {
                Err(SceneError::invalid_region(self.name, "belt has zero clusters"))
            }
            _ => Ok(()),
        }
    }

    /// Borrow the region's content. Call on validated regions.
    pub fn content(&self) -> SceneResult<RegionContent<'_>> {
        self.validate()?;
        match (&self.planets, self.asteroids) {
            (Some(planets), None) => Ok(RegionContent::Planets(planets)),
            (None, Some(belt)) => Ok(RegionContent::Asteroids(belt)),
            _ => Err(SceneError::invalid_region(self.name, "has no single content kind")),
        }
    }
}
