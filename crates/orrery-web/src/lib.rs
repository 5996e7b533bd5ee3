//! wasm-bindgen exports for the orrery scene.
//!
//! The host page calls `scene_init` once, forwards pointer enter/leave on
//! each region group (the `data-region` attribute carries the name), and
//! swaps in the text from `scene_render_svg` after every change.

pub mod runner;

pub use runner::SceneRunner;

use std::cell::RefCell;

use orrery_scene::{InputEvent, RegionName, Scene, SceneConfig, SceneError, SceneManifest};
use wasm_bindgen::prelude::*;

thread_local! {
    static RUNNER: RefCell<Option<SceneRunner>> = const { RefCell::new(None) };
}

/// Run `f` against the live runner, or log and return `fallback`.
fn with_runner<R>(fallback: R, f: impl FnOnce(&mut SceneRunner) -> R) -> R {
    RUNNER.with(|cell| match cell.borrow_mut().as_mut() {
        Some(runner) => f(runner),
        None => {
            log::error!("scene not initialized, call scene_init() first");
            fallback
        }
    })
}

fn install(scene: Scene) {
    RUNNER.with(|cell| {
        *cell.borrow_mut() = Some(SceneRunner::new(scene));
    });
}

fn setup_logging() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
}

fn to_js(err: SceneError) -> JsValue {
    let msg = err.to_string();
    web_sys::console::error_1(&JsValue::from_str(&msg));
    JsValue::from_str(&msg)
}

fn parse_region(name: &str) -> Option<RegionName> {
    match name.parse() {
        Ok(region) => Some(region),
        Err(e) => {
            log::warn!("hover: {e}");
            None
        }
    }
}

/// Stock scene with a fresh seed from `Math.random`.
#[wasm_bindgen]
pub fn scene_init() -> Result<(), JsValue> {
    setup_logging();
    let config = SceneConfig {
        seed: (js_sys::Math::random() * u64::MAX as f64) as u64,
        ..SceneConfig::default()
    };
    let scene = Scene::new(config, SceneManifest::default()).map_err(to_js)?;
    log::info!("orrery: initialized, phase {:.4}", scene.phase());
    install(scene);
    Ok(())
}

/// Scene from JSON config and an optional JSON region table.
#[wasm_bindgen]
pub fn scene_init_with(config_json: &str, manifest_json: Option<String>) -> Result<(), JsValue> {
    setup_logging();
    let scene = Scene::from_json(config_json, manifest_json.as_deref()).map_err(to_js)?;
    log::info!(
        "orrery: initialized from json, {} regions",
        scene.manifest().regions.len()
    );
    install(scene);
    Ok(())
}

#[wasm_bindgen]
pub fn scene_pointer_enter(region: &str) {
    if let Some(region) = parse_region(region) {
        with_runner((), |r| r.push_input(InputEvent::PointerEnter { region }));
    }
}

#[wasm_bindgen]
pub fn scene_pointer_leave(region: &str) {
    if let Some(region) = parse_region(region) {
        with_runner((), |r| r.push_input(InputEvent::PointerLeave { region }));
    }
}

#[wasm_bindgen]
pub fn scene_is_hovered(region: &str) -> bool {
    match parse_region(region) {
        Some(region) => with_runner(false, |r| r.is_hovered(region)),
        None => false,
    }
}

#[wasm_bindgen]
pub fn scene_render_svg() -> Result<String, JsValue> {
    with_runner(Ok(String::new()), |r| {
        r.render_svg().map(str::to_owned).map_err(to_js)
    })
}

// ---- Vector accessors ----

/// Triangle list for the current frame, refreshed on the next update.
#[cfg(feature = "vectors")]
#[wasm_bindgen]
pub fn get_vector_vertices_ptr() -> *const f32 {
    with_runner(std::ptr::null(), |r| {
        if let Err(e) = r.update() {
            to_js(e);
        }
        r.vector_vertices_ptr()
    })
}

#[cfg(feature = "vectors")]
#[wasm_bindgen]
pub fn get_vector_vertex_count() -> u32 {
    with_runner(0, |r| {
        if let Err(e) = r.update() {
            to_js(e);
        }
        r.vector_vertex_count()
    })
}
