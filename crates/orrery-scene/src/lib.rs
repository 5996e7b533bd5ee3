pub mod api;
pub mod core;
pub mod components;
pub mod systems;
pub mod renderer;
pub mod input;
pub mod assets;
pub mod extensions;

// Re-export key types at crate root for convenience
pub use api::config::{AsteroidWave, Emphasis, Palette, SceneConfig};
pub use api::error::{SceneError, SceneResult};
pub use api::types::{PlanetName, RegionName};
pub use assets::manifest::SceneManifest;
pub use components::asteroid::AsteroidTemplate;
pub use components::body::{AsteroidBelt, Planet, Region, RegionContent};
pub use core::frame::{AsteroidNode, PlanetNode, RegionBody, RegionNode, SceneFrame};
pub use core::hover::HoverState;
pub use core::scene::Scene;
pub use input::queue::{InputEvent, InputQueue};
pub use renderer::svg::{render_document, render_svg};
pub use systems::asteroids::generate_belt;
pub use systems::layout::{layout_regions, region_radius};
pub use systems::planets::place_planets;

#[cfg(feature = "vectors")]
pub use renderer::tessellate::tessellate_frame;
#[cfg(feature = "vectors")]
pub use systems::vector::{VectorColor, VectorState, VectorVertex};

// Extensions: geometry helpers independent of the scene model
pub use extensions::{fmt_num, lerp, LinearScale, TransformChain, TransformOp};
