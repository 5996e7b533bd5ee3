use glam::DVec2;

use crate::api::config::SceneConfig;
use crate::api::error::SceneResult;
use crate::api::types::RegionName;
use crate::assets::manifest::SceneManifest;
use crate::core::frame::SceneFrame;
use crate::core::hover::HoverState;
use crate::input::queue::InputQueue;
use crate::systems::layout::layout_regions;
use crate::systems::rng::Rng;

/// The orbital scene: data tables, config, hover flags and the shared phase.
///
/// Rendering is a pure function of this state; the only thing that changes
/// during a session is the hover mapping.
#[derive(Debug, Clone)]
pub struct Scene {
    config: SceneConfig,
    manifest: SceneManifest,
    hover: HoverState,
    /// Single draw in [0, 1) shared by every jittered body.
    phase: f64,
}

impl Scene {
    /// Build a scene after validating both tables.
    pub fn new(config: SceneConfig, manifest: SceneManifest) -> SceneResult<Self> {
        config.validate()?;
        manifest.validate()?;
        let phase = Rng::new(config.seed).next_f64();
        log::debug!(
            "scene: {} regions, seed {}, phase {:.4}",
            manifest.regions.len(),
            config.seed,
            phase
        );
        Ok(Self {
            config,
            manifest,
            hover: HoverState::new(),
            phase,
        })
    }

    /// Parse both tables from JSON. A `None` manifest uses the stock table.
    pub fn from_json(config_json: &str, manifest_json: Option<&str>) -> SceneResult<Self> {
        let config = SceneConfig::from_json(config_json)?;
        let manifest = match manifest_json {
            Some(json) => SceneManifest::from_json(json)?,
            None => SceneManifest::default(),
        };
        Self::new(config, manifest)
    }

    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    pub fn manifest(&self) -> &SceneManifest {
        &self.manifest
    }

    pub fn hover(&self) -> &HoverState {
        &self.hover
    }

    pub fn phase(&self) -> f64 {
        self.phase
    }

    /// Redraw the shared phase from a new seed.
    pub fn reseed(&mut self, seed: u64) {
        self.config.seed = seed;
        self.phase = Rng::new(seed).next_f64();
        log::debug!("scene: reseeded with {seed}, phase {:.4}", self.phase);
    }

    /// Pointer entered a region. Returns whether the scene changed.
    pub fn enter(&mut self, region: RegionName) -> bool {
        let changed = self.hover.enter(region);
        if changed {
            log::debug!("hover: enter {region}");
        }
        changed
    }

    /// Pointer left a region. Returns whether the scene changed.
    pub fn leave(&mut self, region: RegionName) -> bool {
        let changed = self.hover.leave(region);
        if changed {
            log::debug!("hover: leave {region}");
        }
        changed
    }

    pub fn is_hovered(&self, region: RegionName) -> bool {
        self.hover.is_hovered(region)
    }

    /// Apply and drain queued pointer events in arrival order.
    /// Returns whether any hover flag changed.
    pub fn apply_input(&mut self, input: &mut InputQueue) -> bool {
        let mut changed = false;
        for event in input.drain() {
            if self.manifest.region(event.region()).is_none() {
                log::warn!("hover: {} is not in this scene, ignoring", event.region());
                continue;
            }
            changed |= self.hover.apply(event);
        }
        changed
    }

    /// Forget all hover flags.
    pub fn reset_hover(&mut self) {
        self.hover.clear();
    }

    /// Run one render pass.
    pub fn frame(&self) -> SceneResult<SceneFrame> {
        let regions = layout_regions(&self.manifest, &self.config, &self.hover, self.phase)?;
        Ok(SceneFrame {
            width: self.config.width,
            height: self.config.height,
            centre: DVec2::from(self.config.centre),
            sun_radius: self.config.sun_radius,
            regions,
        })
    }
}
