//! SVG output for a resolved frame.
//!
//! Node order is paint order: background, sun, then region groups as the
//! frame lists them (outermost first). Each group carries `data-region` so a
//! host page can wire pointer enter/leave to the right region.

use glam::DVec2;
use svg::node::element::path::Data;
use svg::node::element::{Circle, Group, Path, Rectangle};
use svg::Document;

use crate::api::config::SceneConfig;
use crate::components::asteroid::AsteroidTemplate;
use crate::core::frame::{AsteroidNode, PlanetNode, RegionBody, RegionNode, SceneFrame};
use crate::extensions::transform::{fmt_num, TransformChain};

/// Build the full document for `frame`.
pub fn render_document(frame: &SceneFrame, config: &SceneConfig) -> Document {
    let palette = &config.palette;
    let (width, height) = if config.fit_viewport {
        ("100vw".to_string(), "100vh".to_string())
    } else {
        (fmt_num(frame.width), fmt_num(frame.height))
    };

    let mut doc = Document::new()
        .set("width", width)
        .set("height", height)
        .set(
            "viewBox",
            format!("0 0 {} {}", fmt_num(frame.width), fmt_num(frame.height)),
        )
        .add(
            Rectangle::new()
                .set("width", "100%")
                .set("height", "100%")
                .set("fill", palette.background.as_str()),
        )
        .add(
            Circle::new()
                .set("id", "sun")
                .set("cx", fmt_num(frame.centre.x))
                .set("cy", fmt_num(frame.centre.y))
                .set("r", fmt_num(frame.sun_radius))
                .set("fill", palette.sun.as_str()),
        );

    for region in &frame.regions {
        doc = doc.add(region_group(region, frame.centre, config));
    }
    doc
}

/// Render `frame` to SVG text.
pub fn render_svg(frame: &SceneFrame, config: &SceneConfig) -> String {
    render_document(frame, config).to_string()
}

fn region_group(region: &RegionNode, centre: DVec2, config: &SceneConfig) -> Group {
    let origin = TransformChain::new().translate(centre.x, centre.y);
    let mut g = Group::new()
        .set("id", format!("group-{}", region.name))
        .set("class", if region.hovered { "region hovered" } else { "region" })
        .set("data-region", region.name.as_str())
        .set("transform", origin.to_svg());

    match &region.body {
        RegionBody::Planets(planets) => {
            for planet in planets {
                let (ring, marker) = planet_shapes(planet, config);
                g = g.add(ring).add(marker);
            }
        }
        RegionBody::Asteroids(rocks) => {
            let mut belt = Group::new().set("class", "belt");
            for rock in rocks {
                belt = belt.add(asteroid_shape(rock, config));
            }
            g = g.add(belt);
        }
    }
    g
}

fn planet_shapes(planet: &PlanetNode, config: &SceneConfig) -> (Circle, Circle) {
    let ring = Circle::new()
        .set("id", format!("orbit-{}", planet.name))
        .set("cx", 0)
        .set("cy", 0)
        .set("r", fmt_num(planet.orbit_radius))
        .set("stroke", config.palette.orbit.as_str())
        .set("stroke-width", fmt_num(planet.ring_stroke))
        .set("fill-opacity", 0)
        .set("transform", planet.ring_transform.to_svg());

    let marker = Circle::new()
        .set("id", format!("planet-{}", planet.name))
        .set("cx", 0)
        .set("cy", 0)
        .set("r", fmt_num(planet.marker_radius))
        .set("fill", config.palette.planet.as_str())
        .set("transform", planet.marker_transform.to_svg());

    (ring, marker)
}

fn asteroid_shape(rock: &AsteroidNode, config: &SceneConfig) -> Path {
    Path::new()
        .set("id", rock.id.as_str())
        .set("d", outline_data(rock.template, rock.origin))
        .set("cx", 0)
        .set("cy", 0)
        .set("rx", fmt_num(rock.radius))
        .set("ry", fmt_num(rock.radius))
        .set("fill", config.palette.asteroid.as_str())
        .set("stroke", config.palette.background.as_str())
        .set("stroke-width", fmt_num(config.asteroid_stroke))
        .set("transform", rock.transform.to_svg())
}

/// Path data for a template outline starting at `origin`.
pub fn outline_data(template: AsteroidTemplate, origin: DVec2) -> Data {
    let mut d = Data::new().move_to(vec![origin.x as f32, origin.y as f32]);
    for segment in template.segments() {
        d = d.cubic_curve_by(segment.to_vec());
    }
    d.close()
}
