use serde::{Deserialize, Serialize};

use crate::api::error::{SceneError, SceneResult};
use crate::api::types::{PlanetName, RegionName};
use crate::components::body::{Planet, Region};

/// Region table describing what the diagram shows, innermost region first.
/// Loaded from JSON at runtime or taken from `Default`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneManifest {
    pub regions: Vec<Region>,
}

impl Default for SceneManifest {
    fn default() -> Self {
        use PlanetName as P;
        use RegionName as R;

        Self {
            regions: vec![
                Region::with_planets(
                    R::InnerSystem,
                    vec![Planet::new(P::Mercury, -273.0), Planet::new(P::Venus, -249.0)],
                ),
                Region::with_planets(R::EarthOrbit, vec![Planet::new(P::Earth, -207.0)]),
                Region::with_planets(R::Mars, vec![Planet::new(P::Mars, -222.0)]),
                Region::with_asteroids(R::TheBelt, -50.0, 5),
                Region::with_planets(R::Jupiter, vec![Planet::new(P::Jupiter, -52.0)]),
                Region::with_planets(R::Titan, vec![Planet::new(P::Saturn, -34.0)]),
                Region::with_planets(
                    R::OuterSystem,
                    vec![Planet::new(P::Uranus, -19.0), Planet::new(P::Neptune, -13.0)],
                ),
            ],
        }
    }
}

impl SceneManifest {
    /// Parse a manifest from a JSON string and validate it.
    pub fn from_json(json: &str) -> SceneResult<Self> {
        let manifest: Self = serde_json::from_str(json)?;
        manifest.validate()?;
        Ok(manifest)
    }

    /// Every region must be well-formed and appear at most once, in
    /// canonical inside-out order. A planet may appear only once.
    pub fn validate(&self) -> SceneResult<()> {
        let mut previous: Option<RegionName> = None;
        let mut planets_seen: Vec<PlanetName> = Vec::new();

        for region in &self.regions {
            region.validate()?;

            if let Some(prev) = previous {
                if region.name <= prev {
                    return Err(SceneError::invalid_region(
                        region.name,
                        format!("listed after {prev}; regions must be unique and inside-out"),
                    ));
                }
            }
            previous = Some(region.name);

            for planet in region.planets.iter().flatten() {
                if planets_seen.contains(&planet.name) {
                    return Err(SceneError::invalid_region(
                        region.name,
                        format!("planet {} appears twice", planet.name),
                    ));
                }
                planets_seen.push(planet.name);
            }
        }
        Ok(())
    }

    /// Find a region by name.
    pub fn region(&self, name: RegionName) -> Option<&Region> {
        self.regions.iter().find(|r| r.name == name)
    }
}
