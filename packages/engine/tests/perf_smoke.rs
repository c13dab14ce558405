use sandfall_engine::{MaterialId, World};

#[test]
fn perf_smoke_tick() {
    let mut world = World::new(128, 64);
    world.enable_perf_metrics(true);
    for x in 0..128 {
        for y in 0..32 {
            world.place(x, y, MaterialId::Sand.as_u8(), 0);
        }
    }
    world.tick();
    let stats = world.get_perf_stats();
    assert!(stats.step_ms() >= 0.0);
    assert_eq!(stats.grid_size(), 128 * 64);
    assert_eq!(stats.non_empty_cells(), 128 * 32);
    assert!(stats.cells_averaged() > 0);
}
