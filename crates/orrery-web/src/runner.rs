use orrery_scene::{render_svg, InputEvent, InputQueue, RegionName, Scene, SceneResult};
#[cfg(feature = "vectors")]
use orrery_scene::{tessellate_frame, VectorState};

/// Owns the scene between host calls.
///
/// Hover events are queued and applied on the next render, and the SVG text
/// is cached until a hover flag actually changes. `lib.rs` keeps one in a
/// `thread_local!` and forwards the wasm exports to it.
pub struct SceneRunner {
    scene: Scene,
    input: InputQueue,
    svg: String,
    dirty: bool,
    #[cfg(feature = "vectors")]
    vectors: VectorState,
}

impl SceneRunner {
    pub fn new(scene: Scene) -> Self {
        Self {
            scene,
            input: InputQueue::new(),
            svg: String::new(),
            dirty: true,
            #[cfg(feature = "vectors")]
            vectors: VectorState::new(),
        }
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// Hover flag after any queued events are applied.
    pub fn is_hovered(&mut self, region: RegionName) -> bool {
        self.flush_input();
        self.scene.is_hovered(region)
    }

    fn flush_input(&mut self) {
        if self.input.is_empty() {
            return;
        }
        if self.scene.apply_input(&mut self.input) {
            self.dirty = true;
        }
    }

    /// Apply queued events and rebuild outputs if anything changed.
    pub fn update(&mut self) -> SceneResult<()> {
        self.flush_input();
        if !self.dirty {
            return Ok(());
        }

        let frame = self.scene.frame()?;
        self.svg = render_svg(&frame, self.scene.config());
        #[cfg(feature = "vectors")]
        tessellate_frame(&frame, self.scene.config(), &mut self.vectors)?;

        self.dirty = false;
        log::debug!("runner: rebuilt {} regions", frame.regions.len());
        Ok(())
    }

    pub fn render_svg(&mut self) -> SceneResult<&str> {
        self.update()?;
        Ok(&self.svg)
    }

    // ---- Pointer accessors for the vertex buffer ----

    #[cfg(feature = "vectors")]
    pub fn vector_vertices_ptr(&self) -> *const f32 {
        self.vectors.buffer_ptr()
    }

    #[cfg(feature = "vectors")]
    pub fn vector_vertex_count(&self) -> u32 {
        self.vectors.vertex_count() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use orrery_scene::{SceneConfig, SceneManifest};

    fn runner() -> SceneRunner {
        SceneRunner::new(Scene::new(SceneConfig::default(), SceneManifest::default()).unwrap())
    }

    #[test]
    fn first_render_builds_svg() {
        let mut r = runner();
        let svg = r.render_svg().unwrap().to_string();
        assert!(svg.contains("<svg"));
        assert!(svg.contains("group-the_belt"));
    }

    #[test]
    fn queued_hover_applies_before_render() {
        let mut r = runner();
        let calm = r.render_svg().unwrap().to_string();
        r.push_input(InputEvent::PointerEnter { region: RegionName::Titan });
        assert!(r.is_hovered(RegionName::Titan));
        let hot = r.render_svg().unwrap().to_string();
        assert_ne!(calm, hot);
        assert!(hot.contains("region hovered"));
    }

    #[test]
    fn redundant_events_keep_cache() {
        let mut r = runner();
        r.render_svg().unwrap();
        r.push_input(InputEvent::PointerLeave { region: RegionName::Titan });
        r.flush_input();
        assert!(!r.dirty);
    }

    #[test]
    fn enter_then_leave_restores_calm_svg() {
        let mut r = runner();
        let calm = r.render_svg().unwrap().to_string();
        r.push_input(InputEvent::PointerEnter { region: RegionName::Titan });
        r.push_input(InputEvent::PointerLeave { region: RegionName::Titan });
        assert!(!r.is_hovered(RegionName::Titan));
        assert_eq!(r.render_svg().unwrap(), calm);
        assert!(!r.dirty);
    }

    #[cfg(feature = "vectors")]
    #[test]
    fn vertex_buffer_filled_on_update() {
        let mut r = runner();
        assert_eq!(r.vector_vertex_count(), 0);
        r.update().unwrap();
        assert!(r.vector_vertex_count() > 0);
    }
}
