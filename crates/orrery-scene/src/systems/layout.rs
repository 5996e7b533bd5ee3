//! Region layout: give each region its ring band and resolve its content.

use crate::api::config::SceneConfig;
use crate::api::error::SceneResult;
use crate::assets::manifest::SceneManifest;
use crate::components::body::RegionContent;
use crate::core::frame::{RegionBody, RegionNode};
use crate::core::hover::HoverState;
use crate::systems::asteroids::generate_belt;
use crate::systems::planets::place_planets;

/// Radius of the region at table position `index`. Strictly increasing.
#[inline]
pub fn region_radius(base: f64, step: f64, index: usize) -> f64 {
    base + step * (index + 1) as f64
}

/// Resolve every region, returned in paint order.
///
/// Paint order is outermost first: groups overlap and the pointer goes to
/// the topmost one, so inner regions must be drawn last to stay hoverable.
pub fn layout_regions(
    manifest: &SceneManifest,
    config: &SceneConfig,
    hover: &HoverState,
    phase: f64,
) -> SceneResult<Vec<RegionNode>> {
    let mut nodes = Vec::with_capacity(manifest.regions.len());

    for (index, region) in manifest.regions.iter().enumerate() {
        let radius = region_radius(config.base_radius, config.radius_step, index);
        let hovered = hover.is_hovered(region.name);

        let body = match region.content()? {
            RegionContent::Planets(planets) => {
                RegionBody::Planets(place_planets(planets, radius, hovered, config, phase))
            }
            RegionContent::Asteroids(belt) => RegionBody::Asteroids(generate_belt(
                region.name,
                belt,
                radius,
                hovered,
                config,
                phase,
            )?),
        };

        nodes.push(RegionNode {
            name: region.name,
            index,
            radius,
            hovered,
            body,
        });
    }

    nodes.reverse();
    log::debug!("layout: {} regions, {} hovered", nodes.len(), hover.hovered().len());
    Ok(nodes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::RegionName;

    #[test]
    fn default_radii() {
        let radii: Vec<f64> = (0..7).map(|i| region_radius(100.0, 200.0, i)).collect();
        assert_eq!(radii, vec![300.0, 500.0, 700.0, 900.0, 1100.0, 1300.0, 1500.0]);
    }

    #[test]
    fn radius_strictly_increasing() {
        for i in 0..50 {
            assert!(region_radius(100.0, 200.0, i) < region_radius(100.0, 200.0, i + 1));
        }
    }

    #[test]
    fn paint_order_is_outermost_first() {
        let nodes = layout_regions(
            &SceneManifest::default(),
            &SceneConfig::default(),
            &HoverState::new(),
            0.0,
        )
        .unwrap();
        let names: Vec<RegionName> = nodes.iter().map(|n| n.name).collect();
        let mut expected = RegionName::ALL.to_vec();
        expected.reverse();
        assert_eq!(names, expected);
        for pair in nodes.windows(2) {
            assert!(pair[0].radius > pair[1].radius);
        }
    }

    #[test]
    fn hover_reaches_only_its_region() {
        let mut hover = HoverState::new();
        hover.enter(RegionName::OuterSystem);
        let nodes = layout_regions(&SceneManifest::default(), &SceneConfig::default(), &hover, 0.0).unwrap();

        for node in &nodes {
            let expected = node.name == RegionName::OuterSystem;
            assert_eq!(node.hovered, expected);
            for planet in node.planets() {
                assert_eq!(planet.marker_radius, if expected { 50.0 } else { 20.0 });
                assert_eq!(planet.ring_stroke, if expected { 10.0 } else { 5.0 });
            }
        }
    }

    #[test]
    fn belt_sits_at_fourth_band() {
        let nodes = layout_regions(
            &SceneManifest::default(),
            &SceneConfig::default(),
            &HoverState::new(),
            0.0,
        )
        .unwrap();
        let belt = nodes.iter().find(|n| n.name == RegionName::TheBelt).unwrap();
        assert_eq!(belt.radius, 900.0);
        assert_eq!(belt.asteroids().len(), 30);
        assert!(belt.planets().is_empty());
    }
}
