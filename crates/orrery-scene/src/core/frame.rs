//! The output of one render pass: resolved geometry for every shape,
//! independent of how it is drawn (SVG text or tessellated vertices).

use glam::DVec2;

use crate::api::types::{PlanetName, RegionName};
use crate::components::asteroid::AsteroidTemplate;
use crate::extensions::transform::TransformChain;

/// Orbit ring plus marker for one planet, in region-local coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct PlanetNode {
    pub name: PlanetName,
    pub orbit_radius: f64,
    pub ring_stroke: f64,
    /// Shear applied to the ring.
    pub ring_transform: TransformChain,
    pub marker_radius: f64,
    /// Places the marker (drawn at the local origin) on its ring.
    pub marker_transform: TransformChain,
}

/// One rock of the belt, in region-local coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct AsteroidNode {
    /// `asteroid-<region>-<n>`, unique in the document.
    pub id: String,
    pub cluster: usize,
    /// Position within the cluster.
    pub index: usize,
    pub template: AsteroidTemplate,
    /// Start point of the outline path.
    pub origin: DVec2,
    pub transform: TransformChain,
    /// Inert `rx`/`ry` carried on the element.
    pub radius: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub enum RegionBody {
    Planets(Vec<PlanetNode>),
    Asteroids(Vec<AsteroidNode>),
}

/// One region group, translated to the scene centre.
#[derive(Debug, Clone, PartialEq)]
pub struct RegionNode {
    pub name: RegionName,
    /// Position in the region table; decides the radius.
    pub index: usize,
    pub radius: f64,
    pub hovered: bool,
    pub body: RegionBody,
}

impl RegionNode {
    pub fn planets(&self) -> &[PlanetNode] {
        match &self.body {
            RegionBody::Planets(p) => p,
            RegionBody::Asteroids(_) => &[],
        }
    }

    pub fn asteroids(&self) -> &[AsteroidNode] {
        match &self.body {
            RegionBody::Asteroids(a) => a,
            RegionBody::Planets(_) => &[],
        }
    }
}

/// Everything needed to draw the diagram once.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneFrame {
    pub width: f64,
    pub height: f64,
    pub centre: DVec2,
    pub sun_radius: f64,
    /// Paint order: outermost region first, so inner groups end up on top.
    pub regions: Vec<RegionNode>,
}

impl SceneFrame {
    pub fn region(&self, name: RegionName) -> Option<&RegionNode> {
        self.regions.iter().find(|r| r.name == name)
    }

    /// Total asteroid shapes across all regions.
    pub fn asteroid_count(&self) -> usize {
        self.regions.iter().map(|r| r.asteroids().len()).sum()
    }
}
