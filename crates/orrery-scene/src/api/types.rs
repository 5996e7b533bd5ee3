use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::api::error::SceneError;

/// Named annular zone of the diagram.
///
/// Declaration order is the canonical inside-out order; a manifest must
/// list its regions in this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RegionName {
    InnerSystem,
    EarthOrbit,
    Mars,
    TheBelt,
    Jupiter,
    Titan,
    OuterSystem,
}

impl RegionName {
    /// Total number of regions.
    pub const COUNT: usize = 7;

    /// All regions, innermost first.
    pub const ALL: [RegionName; Self::COUNT] = [
        Self::InnerSystem,
        Self::EarthOrbit,
        Self::Mars,
        Self::TheBelt,
        Self::Jupiter,
        Self::Titan,
        Self::OuterSystem,
    ];

    /// Identifier used in element ids and host events.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::InnerSystem => "inner_system",
            Self::EarthOrbit => "earth_orbit",
            Self::Mars => "mars",
            Self::TheBelt => "the_belt",
            Self::Jupiter => "jupiter",
            Self::Titan => "titan",
            Self::OuterSystem => "outer_system",
        }
    }
}

impl fmt::Display for RegionName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RegionName {
    type Err = SceneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|r| r.as_str() == s)
            .ok_or_else(|| SceneError::UnknownRegion(s.to_string()))
    }
}

/// Planet identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlanetName {
    Mercury,
    Venus,
    Earth,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
}

impl PlanetName {
    pub const COUNT: usize = 8;

    pub const ALL: [PlanetName; Self::COUNT] = [
        Self::Mercury,
        Self::Venus,
        Self::Earth,
        Self::Mars,
        Self::Jupiter,
        Self::Saturn,
        Self::Uranus,
        Self::Neptune,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Mercury => "mercury",
            Self::Venus => "venus",
            Self::Earth => "earth",
            Self::Mars => "mars",
            Self::Jupiter => "jupiter",
            Self::Saturn => "saturn",
            Self::Uranus => "uranus",
            Self::Neptune => "neptune",
        }
    }
}

impl fmt::Display for PlanetName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PlanetName {
    type Err = SceneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| SceneError::UnknownPlanet(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn region_order_is_inside_out() {
        for pair in RegionName::ALL.windows(2) {
            assert!(pair[0] < pair[1]);
        }
    }

    #[test]
    fn region_names_parse() {
        for region in RegionName::ALL {
            assert_eq!(region.as_str().parse::<RegionName>().unwrap(), region);
        }
        assert!(matches!(
            "kuiper_belt".parse::<RegionName>(),
            Err(SceneError::UnknownRegion(name)) if name == "kuiper_belt"
        ));
    }

    #[test]
    fn serde_uses_snake_case() {
        let json = serde_json::to_string(&RegionName::TheBelt).unwrap();
        assert_eq!(json, "\"the_belt\"");
        let planet: PlanetName = serde_json::from_str("\"neptune\"").unwrap();
        assert_eq!(planet, PlanetName::Neptune);
    }

    #[test]
    fn unknown_planet_is_rejected() {
        assert!("pluto".parse::<PlanetName>().is_err());
    }
}
