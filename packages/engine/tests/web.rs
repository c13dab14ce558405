//! Browser-side checks; run with `wasm-pack test --headless --firefox`.
#![cfg(target_arch = "wasm32")]

use wasm_bindgen_test::*;

use sandfall_engine::{mat_sand, mat_stone, World};

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn world_ticks_and_renders() {
    sandfall_engine::init();
    let mut world = World::with_seed(16, 16, 1);
    world.place(8, 0, mat_sand(), 0);
    world.tick();
    assert_eq!(world.get(8, 1), mat_sand());
    assert_eq!(world.tick_count(), 1);

    let ptr = world.render();
    assert!(!ptr.is_null());
    assert_eq!(world.pixels_len(), 256);
}

#[wasm_bindgen_test]
fn bad_config_surfaces_as_js_error() {
    assert!(World::from_config_json(r#"{"width":0}"#.to_string()).is_err());
    assert!(World::from_config_json(r#"{"width":4,"height":4}"#.to_string()).is_ok());
}

#[wasm_bindgen_test]
fn overrides_reload_clears_painted_cells() {
    let mut world = World::new(4, 4);
    world.place(1, 1, mat_stone(), 1);
    assert!(world.non_empty_count() > 0);
    assert!(world.load_material_overrides("nope".to_string()).is_err());
    assert!(world.non_empty_count() > 0);
    world
        .load_material_overrides(r#"{"materials":[]}"#.to_string())
        .unwrap();
    assert_eq!(world.non_empty_count(), 0);
}
