//! Triangle output for a resolved frame, for hosts that draw through a GPU
//! instead of the DOM. Paint order matches the SVG document.

use glam::{DAffine2, DVec2, Vec2};
use lyon::math::point;
use lyon::path::Path;

use crate::api::config::SceneConfig;
use crate::api::error::{SceneError, SceneResult};
use crate::components::asteroid::AsteroidTemplate;
use crate::core::frame::{AsteroidNode, PlanetNode, RegionBody, SceneFrame};
use crate::systems::vector::{VectorColor, VectorState};

/// Palette entries resolved to vertex colors.
#[derive(Debug, Clone, Copy)]
struct Colors {
    background: VectorColor,
    sun: VectorColor,
    orbit: VectorColor,
    planet: VectorColor,
    asteroid: VectorColor,
}

impl Colors {
    fn from_config(config: &SceneConfig) -> SceneResult<Self> {
        let p = &config.palette;
        let pick = |hex: &str| {
            VectorColor::from_hex(hex)
                .ok_or_else(|| SceneError::InvalidConfig(format!("palette color {hex:?}")))
        };
        Ok(Self {
            background: pick(p.background.as_str())?,
            sun: pick(p.sun.as_str())?,
            orbit: pick(p.orbit.as_str())?,
            planet: pick(p.planet.as_str())?,
            asteroid: pick(p.asteroid.as_str())?,
        })
    }
}

/// Clear `state` and fill it with the frame's triangles.
pub fn tessellate_frame(
    frame: &SceneFrame,
    config: &SceneConfig,
    state: &mut VectorState,
) -> SceneResult<()> {
    let colors = Colors::from_config(config)?;
    state.clear();

    state.fill_rect(
        Vec2::ZERO,
        frame.width as f32,
        frame.height as f32,
        colors.background,
    );
    state.fill_circle(
        frame.centre.as_vec2(),
        frame.sun_radius as f32,
        colors.sun,
    );

    let group = DAffine2::from_translation(frame.centre);
    for region in &frame.regions {
        match &region.body {
            RegionBody::Planets(planets) => {
                for planet in planets {
                    draw_planet(state, group, planet, &colors);
                }
            }
            RegionBody::Asteroids(rocks) => {
                for rock in rocks {
                    draw_asteroid(state, group, rock, config.asteroid_stroke as f32, &colors);
                }
            }
        }
    }
    state.reset_transform();

    log::trace!("tessellate: {} vertices", state.vertex_count());
    Ok(())
}

fn draw_planet(state: &mut VectorState, group: DAffine2, planet: &PlanetNode, colors: &Colors) {
    state.set_transform(group * planet.ring_transform.compose());
    state.stroke_circle(
        Vec2::ZERO,
        planet.orbit_radius as f32,
        planet.ring_stroke as f32,
        colors.orbit,
    );

    state.set_transform(group * planet.marker_transform.compose());
    state.fill_circle(Vec2::ZERO, planet.marker_radius as f32, colors.planet);
}

fn draw_asteroid(
    state: &mut VectorState,
    group: DAffine2,
    rock: &AsteroidNode,
    stroke: f32,
    colors: &Colors,
) {
    let path = outline_path(rock.template, rock.origin);
    state.set_transform(group * rock.transform.compose());
    state.fill_path(&path, colors.asteroid);
    state.stroke_path(&path, stroke, colors.background);
}

/// Closed lyon path for a template outline starting at `origin`.
pub fn outline_path(template: AsteroidTemplate, origin: DVec2) -> Path {
    let start = [origin.x as f32, origin.y as f32];
    let mut builder = Path::builder();
    builder.begin(point(start[0], start[1]));
    for [c1, c2, to] in template.absolute_segments(start) {
        builder.cubic_bezier_to(
            point(c1[0], c1[1]),
            point(c2[0], c2[1]),
            point(to[0], to[1]),
        );
    }
    builder.close();
    builder.build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::RegionName;
    use crate::assets::manifest::SceneManifest;
    use crate::core::scene::Scene;

    fn stock_vertices(hover: Option<RegionName>) -> VectorState {
        let mut scene = Scene::new(SceneConfig::default(), SceneManifest::default()).unwrap();
        if let Some(region) = hover {
            scene.enter(region);
        }
        let mut state = VectorState::new();
        tessellate_frame(&scene.frame().unwrap(), scene.config(), &mut state).unwrap();
        state
    }

    #[test]
    fn background_comes_first() {
        let state = stock_vertices(None);
        let bg = VectorColor::from_hex("#2B2D42").unwrap();
        let first = &state.vertices()[..6];
        assert!(first.iter().all(|v| v.r == bg.r && v.g == bg.g && v.b == bg.b));
    }

    #[test]
    fn whole_scene_tessellates() {
        let state = stock_vertices(None);
        assert!(state.vertex_count() > 1000);
        assert_eq!(state.vertex_count() % 3, 0);
    }

    /// Furthest planet-coloured vertex from the Jupiter marker's centre.
    fn jupiter_marker_extent(hover: Option<RegionName>) -> f32 {
        let scene = Scene::new(SceneConfig::default(), SceneManifest::default()).unwrap();
        let frame = scene.frame().unwrap();
        let marker = &frame.region(RegionName::Jupiter).unwrap().planets()[0];
        let centre = (frame.centre + marker.marker_transform.apply(DVec2::ZERO)).as_vec2();

        let state = stock_vertices(hover);
        let planet = VectorColor::from_hex("#7EBDC2").unwrap();
        state
            .vertices()
            .iter()
            .filter(|v| v.r == planet.r && v.g == planet.g && v.b == planet.b)
            .map(|v| Vec2::new(v.x, v.y).distance(centre))
            .filter(|d| *d < 100.0)
            .fold(0.0, f32::max)
    }

    #[test]
    fn hovered_marker_grows_by_emphasis_delta() {
        let calm = jupiter_marker_extent(None);
        let hot = jupiter_marker_extent(Some(RegionName::Jupiter));
        // The 30 degree shear stretches a circle by about 1.33 along its long axis.
        assert!(calm > 20.0 && calm < 30.0, "calm = {calm}");
        assert!(hot > 50.0 && hot < 70.0, "hot = {hot}");
        assert!(hot - calm > 30.0, "calm = {calm}, hot = {hot}");
    }

    #[test]
    fn hover_elsewhere_leaves_marker_alone() {
        let calm = jupiter_marker_extent(None);
        let other = jupiter_marker_extent(Some(RegionName::Mars));
        assert!((calm - other).abs() < 1e-3);
    }

    #[test]
    fn outline_path_is_closed() {
        let path = outline_path(AsteroidTemplate::Boulder, DVec2::new(3.0, 4.0));
        let events: Vec<_> = path.iter().collect();
        assert!(matches!(
            events.last(),
            Some(lyon::path::Event::End { close: true, .. })
        ));
    }

    #[test]
    fn bad_palette_is_an_error() {
        let mut config = SceneConfig::default();
        config.palette.sun = "yellow".into();
        let frame = Scene::new(SceneConfig::default(), SceneManifest::default())
            .unwrap()
            .frame()
            .unwrap();
        let mut state = VectorState::new();
        assert!(tessellate_frame(&frame, &config, &mut state).is_err());
    }
}
