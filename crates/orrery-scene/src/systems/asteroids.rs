//! Asteroid cluster generator.
//!
//! Each rock's outline starts on a sine wave, then a fixed transform list
//! (shear, belt rotation, cluster offset, per-rock spin, size falloff)
//! scatters it through the belt. Every rock reads the same `phase`, so all
//! wave offsets move together when the phase changes.

use std::f64::consts::TAU;

use glam::DVec2;

use crate::api::config::{AsteroidWave, SceneConfig};
use crate::api::error::SceneResult;
use crate::api::types::RegionName;
use crate::components::asteroid::AsteroidTemplate;
use crate::components::body::AsteroidBelt;
use crate::core::frame::AsteroidNode;
use crate::extensions::transform::TransformChain;

/// Wave seed `(x, y)` for the asteroid at `index`, in row-seed units.
pub fn wave_offset(index: usize, phase: f64, wave: &AsteroidWave) -> DVec2 {
    let y = index as f64 * wave.row_step;
    let x = (((y + phase) / 2.0) * wave.frequency * TAU).sin() * wave.amplitude;
    DVec2::new(x, y)
}

/// Size factor; shrinks as `index + cluster` grows.
pub fn asteroid_scale(index: usize, cluster: usize, per_cluster: usize, clusters: usize) -> f64 {
    let total = (per_cluster + clusters) as f64;
    0.8 + (total - (1 + index + cluster) as f64) / total / 4.0
}

/// Document-unique element id of a rock.
pub fn asteroid_id(region: RegionName, cluster: usize, index: usize, per_cluster: usize) -> String {
    format!("asteroid-{}-{}", region, cluster * per_cluster + index)
}

/// Geometry of rock `index` in cluster `cluster`.
///
/// Fails with `UnsupportedAsteroidIndex` when `index` has no template.
#[allow(clippy::too_many_arguments)]
pub fn asteroid(
    region: RegionName,
    belt: AsteroidBelt,
    region_radius: f64,
    cluster: usize,
    index: usize,
    hovered: bool,
    config: &SceneConfig,
    phase: f64,
) -> SceneResult<AsteroidNode> {
    let template = AsteroidTemplate::for_index(index)?;
    let per_cluster = config.asteroids_per_cluster;
    let wave = &config.wave;
    let origin = wave_offset(index, phase, wave) * wave.unit;
    let spin = ((index + 1) * (cluster + 1)) as f64 * wave.spin_deg;

    let transform = TransformChain::new()
        .skew_x(config.skew_deg)
        .rotate(belt.orbit_pos + config.jitter_deg * phase)
        .translate(
            region_radius - cluster as f64 * wave.unit / 3.0,
            cluster as f64 * wave.unit,
        )
        .rotate_about(spin, origin.x, origin.y)
        .scale(asteroid_scale(index, cluster, per_cluster, belt.clusters));

    Ok(AsteroidNode {
        id: asteroid_id(region, cluster, index, per_cluster),
        cluster,
        index,
        template,
        origin,
        transform,
        radius: config.asteroid_radius.pick(hovered),
    })
}

/// Every rock of a belt, cluster by cluster.
pub fn generate_belt(
    region: RegionName,
    belt: AsteroidBelt,
    region_radius: f64,
    hovered: bool,
    config: &SceneConfig,
    phase: f64,
) -> SceneResult<Vec<AsteroidNode>> {
    let per_cluster = config.asteroids_per_cluster;
    let mut rocks = Vec::with_capacity(belt.clusters * per_cluster);
    for cluster in 0..belt.clusters {
        for index in 0..per_cluster {
            rocks.push(asteroid(
                region,
                belt,
                region_radius,
                cluster,
                index,
                hovered,
                config,
                phase,
            )?);
        }
    }
    log::debug!("{}: generated {} asteroids", region, rocks.len());
    Ok(rocks)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::error::SceneError;
    use std::collections::HashSet;

    const BELT: AsteroidBelt = AsteroidBelt {
        orbit_pos: -50.0,
        clusters: 5,
    };

    #[test]
    fn count_is_clusters_times_six() {
        let config = SceneConfig::default();
        let rocks = generate_belt(RegionName::TheBelt, BELT, 900.0, false, &config, 0.4).unwrap();
        assert_eq!(rocks.len(), 30);
    }

    #[test]
    fn ids_unique_and_prefixed() {
        let config = SceneConfig::default();
        let rocks = generate_belt(RegionName::TheBelt, BELT, 900.0, false, &config, 0.4).unwrap();
        let ids: HashSet<&str> = rocks.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids.len(), rocks.len());
        assert!(rocks.iter().all(|r| r.id.starts_with("asteroid-the_belt-")));
        assert_eq!(rocks[0].id, "asteroid-the_belt-0");
        assert_eq!(rocks[29].id, "asteroid-the_belt-29");
    }

    #[test]
    fn five_distinct_silhouettes() {
        let config = SceneConfig::default();
        let rocks = generate_belt(RegionName::TheBelt, BELT, 900.0, false, &config, 0.0).unwrap();
        let templates: HashSet<AsteroidTemplate> = rocks.iter().map(|r| r.template).collect();
        assert_eq!(templates.len(), 5);
    }

    #[test]
    fn index_past_template_table_fails() {
        let config = SceneConfig::default();
        let err = asteroid(RegionName::TheBelt, BELT, 900.0, 0, 6, false, &config, 0.0).unwrap_err();
        assert!(matches!(err, SceneError::UnsupportedAsteroidIndex { index: 6, available: 6 }));
    }

    #[test]
    fn oversized_cluster_fails_whole_belt() {
        // Bypasses SceneConfig::validate on purpose.
        let config = SceneConfig {
            asteroids_per_cluster: 7,
            ..SceneConfig::default()
        };
        let result = generate_belt(RegionName::TheBelt, BELT, 900.0, false, &config, 0.0);
        assert!(matches!(
            result,
            Err(SceneError::UnsupportedAsteroidIndex { index: 6, .. })
        ));
    }

    #[test]
    fn wave_at_zero_phase() {
        let wave = AsteroidWave::default();
        let p = wave_offset(0, 0.0, &wave);
        assert_eq!(p, DVec2::ZERO);
        // i = 1: y = 0.5, x = sin(0.25 * 1.5 * TAU) * 0.8
        let p = wave_offset(1, 0.0, &wave);
        assert_eq!(p.y, 0.5);
        assert!((p.x - (0.375 * TAU).sin() * 0.8).abs() < 1e-12);
    }

    #[test]
    fn phase_shifts_every_rock() {
        let wave = AsteroidWave::default();
        for i in 0..6 {
            let a = wave_offset(i, 0.1, &wave);
            let b = wave_offset(i, 0.2, &wave);
            assert_eq!(a.y, b.y);
            assert_ne!(a.x, b.x);
        }
    }

    #[test]
    fn scale_falls_off_with_index() {
        assert!((asteroid_scale(0, 0, 6, 5) - (0.8 + 10.0 / 11.0 / 4.0)).abs() < 1e-12);
        assert!(asteroid_scale(5, 4, 6, 5) < asteroid_scale(0, 0, 6, 5));
        assert!((asteroid_scale(5, 4, 6, 5) - (0.8 + 1.0 / 11.0 / 4.0)).abs() < 1e-12);
    }

    #[test]
    fn transform_order() {
        let config = SceneConfig::default();
        let rock = asteroid(RegionName::TheBelt, BELT, 900.0, 1, 2, true, &config, 0.0).unwrap();
        assert_eq!(rock.radius, 50.0);
        let ops = rock.transform.ops();
        assert_eq!(ops.len(), 5);
        let text = rock.transform.to_svg();
        assert!(text.starts_with("skewX(30) rotate(-50) translate(866.666667 100) rotate(60 "));
        assert!(text.ends_with(&format!("scale({})", crate::extensions::fmt_num(asteroid_scale(2, 1, 6, 5)))));
    }
}
