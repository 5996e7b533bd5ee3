//! Planet placement: fan planets out inside their region's band and put
//! each marker on its ring at the planet's orbit-position angle.

use crate::api::config::SceneConfig;
use crate::components::body::Planet;
use crate::core::frame::PlanetNode;
use crate::extensions::scale::LinearScale;
use crate::extensions::transform::TransformChain;

/// Scale mapping a planet's normalized slot in [0, 1] to a radius offset.
pub fn planet_scale(config: &SceneConfig) -> LinearScale {
    LinearScale::new((0.0, 1.0), (0.0, config.planet_spread)).rounded(config.round_spread)
}

/// Ring radius of planet `index` out of `count` in a region at `region_radius`.
/// Earlier planets sit further out.
pub fn planet_radius(region_radius: f64, index: usize, count: usize, scale: &LinearScale) -> f64 {
    let slot = 1.0 - (index + 1) as f64 / count as f64;
    region_radius + scale.map(slot)
}

/// Resolve ring and marker geometry for every planet of a region.
pub fn place_planets(
    planets: &[Planet],
    region_radius: f64,
    hovered: bool,
    config: &SceneConfig,
    phase: f64,
) -> Vec<PlanetNode> {
    let scale = planet_scale(config);
    let count = planets.len();

    planets
        .iter()
        .enumerate()
        .map(|(j, planet)| {
            let orbit_radius = planet_radius(region_radius, j, count, &scale);
            let angle = planet.orbit_pos - config.jitter_deg * phase;
            PlanetNode {
                name: planet.name,
                orbit_radius,
                ring_stroke: config.orbit_stroke.pick(hovered),
                ring_transform: TransformChain::new().skew_x(config.skew_deg),
                marker_radius: config.marker_radius.pick(hovered),
                marker_transform: TransformChain::new()
                    .skew_x(config.skew_deg)
                    .rotate(angle)
                    .translate(orbit_radius, 0.0),
            }
        })
        .collect()
}
