use serde::{Deserialize, Serialize};

use crate::api::error::{SceneError, SceneResult};
use crate::components::asteroid::AsteroidTemplate;

/// A size that grows while its region is hovered.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Emphasis {
    pub normal: f64,
    pub hovered: f64,
}

impl Emphasis {
    pub const fn new(normal: f64, hovered: f64) -> Self {
        Self { normal, hovered }
    }

    /// Pick the size for the given hover flag.
    #[inline]
    pub fn pick(self, hovered: bool) -> f64 {
        if hovered {
            self.hovered
        } else {
            self.normal
        }
    }
}

/// Scene colors as `#rrggbb` strings, handed to SVG as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    pub background: String,
    pub sun: String,
    pub orbit: String,
    pub planet: String,
    pub asteroid: String,
    /// Unused by the default scene; kept for host stylesheets.
    pub accent: String,
    pub grey: String,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: "#2B2D42".into(),
            sun: "#F3DFA2".into(),
            orbit: "#EFE6DD".into(),
            planet: "#7EBDC2".into(),
            asteroid: "#848484".into(),
            accent: "#BB4430".into(),
            grey: "#bcbab8".into(),
        }
    }
}

impl Palette {
    fn entries(&self) -> [(&'static str, &str); 7] {
        [
            ("background", &self.background),
            ("sun", &self.sun),
            ("orbit", &self.orbit),
            ("planet", &self.planet),
            ("asteroid", &self.asteroid),
            ("accent", &self.accent),
            ("grey", &self.grey),
        ]
    }
}

/// Parse `#rgb` or `#rrggbb` into normalized RGB components.
pub fn hex_rgb(hex: &str) -> Option<[f32; 3]> {
    let digits = hex.strip_prefix('#').filter(|d| d.is_ascii())?;
    let channel = |s: &str| u8::from_str_radix(s, 16).ok().map(|v| v as f32 / 255.0);
    match digits.len() {
        6 => Some([
            channel(&digits[0..2])?,
            channel(&digits[2..4])?,
            channel(&digits[4..6])?,
        ]),
        3 => {
            let short = |i: usize| {
                let c = &digits[i..i + 1];
                channel(&format!("{c}{c}"))
            };
            Some([short(0)?, short(1)?, short(2)?])
        }
        _ => None,
    }
}

/// Sine-wave perturbation and spacing of asteroid shapes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AsteroidWave {
    /// Wave frequency in cycles per unit of row seed.
    pub frequency: f64,
    /// Wave amplitude in row-seed units.
    pub amplitude: f64,
    /// Row seed step between consecutive asteroids of a cluster.
    pub row_step: f64,
    /// Pixels per row-seed unit; also the radial step between clusters.
    pub unit: f64,
    /// Degrees of extra spin per (asteroid, cluster) index product.
    pub spin_deg: f64,
}

impl Default for AsteroidWave {
    fn default() -> Self {
        Self {
            frequency: 1.5,
            amplitude: 0.8,
            row_step: 0.5,
            unit: 100.0,
            spin_deg: 10.0,
        }
    }
}

/// Configuration for a scene. Every field has a default matching the
/// stock diagram, so a JSON config only needs to name what it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// Logical canvas width (viewBox units).
    pub width: f64,
    /// Logical canvas height (viewBox units).
    pub height: f64,
    /// Size the `<svg>` element to the viewport instead of the logical canvas.
    pub fit_viewport: bool,
    /// Shared origin of every region group.
    pub centre: [f64; 2],
    pub sun_radius: f64,
    /// Region `i` sits at `base_radius + radius_step * (i + 1)`.
    pub base_radius: f64,
    pub radius_step: f64,
    /// Output range upper bound of the planet fan-out scale.
    pub planet_spread: f64,
    /// Round fan-out offsets to whole units.
    pub round_spread: bool,
    /// Horizontal shear applied to every body, in degrees.
    pub skew_deg: f64,
    /// Angular jitter multiplier applied to the shared phase, in degrees.
    pub jitter_deg: f64,
    pub orbit_stroke: Emphasis,
    pub marker_radius: Emphasis,
    /// Inert `rx`/`ry` attributes carried on asteroid paths.
    pub asteroid_radius: Emphasis,
    pub asteroid_stroke: f64,
    pub asteroids_per_cluster: usize,
    pub wave: AsteroidWave,
    pub palette: Palette,
    /// Seed for the shared phase draw.
    pub seed: u64,
}

impl Default for SceneConfig {
    fn default() -> Self {
        let width = 2048.0;
        Self {
            width,
            height: 2048.0,
            fit_viewport: true,
            centre: [width / 2.0 - 500.0, width / 2.0 + 300.0],
            sun_radius: 100.0,
            base_radius: 100.0,
            radius_step: 200.0,
            planet_spread: 200.0,
            round_spread: true,
            skew_deg: 30.0,
            jitter_deg: 10.0,
            orbit_stroke: Emphasis::new(5.0, 10.0),
            marker_radius: Emphasis::new(20.0, 50.0),
            asteroid_radius: Emphasis::new(20.0, 50.0),
            asteroid_stroke: 5.0,
            asteroids_per_cluster: 6,
            wave: AsteroidWave::default(),
            palette: Palette::default(),
            seed: 42,
        }
    }
}

impl SceneConfig {
    /// Parse a config from a JSON string and validate it.
    pub fn from_json(json: &str) -> SceneResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check ranges that would otherwise produce degenerate geometry.
    pub fn validate(&self) -> SceneResult<()> {
        if !(self.width > 0.0 && self.height > 0.0) {
            return Err(SceneError::InvalidConfig(format!(
                "canvas must be positive, got {}x{}",
                self.width, self.height
            )));
        }
        if !(self.radius_step > 0.0) || self.base_radius < 0.0 {
            return Err(SceneError::InvalidConfig(format!(
                "radius base {} / step {} must give strictly growing rings",
                self.base_radius, self.radius_step
            )));
        }
        if self.planet_spread < 0.0 {
            return Err(SceneError::InvalidConfig("planet_spread must not be negative".into()));
        }
        if self.asteroids_per_cluster == 0 || self.asteroids_per_cluster > AsteroidTemplate::SLOTS {
            return Err(SceneError::InvalidConfig(format!(
                "asteroids_per_cluster must be in 1..={}, got {}",
                AsteroidTemplate::SLOTS,
                self.asteroids_per_cluster
            )));
        }
        for (name, value) in self.palette.entries() {
            if hex_rgb(value).is_none() {
                return Err(SceneError::InvalidConfig(format!(
                    "palette.{name} is not a hex color: {value:?}"
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_centre_matches_layout() {
        let config = SceneConfig::default();
        assert_eq!(config.centre, [524.0, 1324.0]);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config = SceneConfig::from_json(r#"{ "seed": 7, "wave": { "amplitude": 0.5 } }"#).unwrap();
        assert_eq!(config.seed, 7);
        assert_eq!(config.wave.amplitude, 0.5);
        assert_eq!(config.wave.frequency, 1.5);
        assert_eq!(config.radius_step, 200.0);
    }

    #[test]
    fn too_many_asteroids_per_cluster_rejected() {
        let config = SceneConfig {
            asteroids_per_cluster: AsteroidTemplate::SLOTS + 1,
            ..SceneConfig::default()
        };
        assert!(matches!(config.validate(), Err(SceneError::InvalidConfig(_))));
    }

    #[test]
    fn zero_radius_step_rejected() {
        let json = r#"{ "radius_step": 0.0 }"#;
        assert!(SceneConfig::from_json(json).is_err());
    }

    #[test]
    fn bad_palette_entry_rejected() {
        let mut config = SceneConfig::default();
        config.palette.sun = "vanilla".into();
        assert!(config.validate().is_err());
    }

    #[test]
    fn malformed_json_is_json_error() {
        assert!(matches!(SceneConfig::from_json("{"), Err(SceneError::Json(_))));
    }

    #[test]
    fn hex_parsing() {
        let rgb = hex_rgb("#ff8000").unwrap();
        assert_eq!(rgb[0], 1.0);
        assert!((rgb[1] - 0.502).abs() < 0.01);
        assert_eq!(rgb[2], 0.0);
        assert_eq!(hex_rgb("#fff"), Some([1.0, 1.0, 1.0]));
        assert_eq!(hex_rgb("ffffff"), None);
        assert_eq!(hex_rgb("#12345"), None);
    }

    #[test]
    fn emphasis_picks_by_flag() {
        let e = Emphasis::new(5.0, 10.0);
        assert_eq!(e.pick(false), 5.0);
        assert_eq!(e.pick(true), 10.0);
    }
}
