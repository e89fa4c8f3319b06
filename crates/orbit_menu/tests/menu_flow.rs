//! # Menu Flow Verification Tests
//!
//! End-to-end walks of the engine as a host would drive it:
//!
//! 1. **Measure → layout**: asynchronous, repeated size reports settle
//!    into one deterministic layout
//! 2. **Toggle → frames**: open/close retargeting with reversed stagger
//! 3. **Scheduler**: the delay-aware interpolators actually unfurl and
//!    refurl in the expected order
//!
//! Run with: cargo test --test menu_flow

use orbit_core::{AnimationSpec, Easing, Size2, Vec2};
use orbit_menu::{Direction, Measurement, MenuConfig, MenuEngine, StaggerScheduler};

fn measured(side: f32) -> Measurement {
    Measurement::centered(Size2::new(side, side))
}

#[test]
fn full_cycle_linear_menu() {
    let config = MenuConfig::builder(3)
        .straight()
        .direction(Direction::Bottom)
        .spacing(10.0)
        .delays_from_delta(0.1)
        .animation(AnimationSpec::new(Easing::Linear, 0.2))
        .build()
        .unwrap();
    let mut engine = MenuEngine::new(config);
    let whole = engine.whole_menu_size();

    // Reports arrive out of order, twice, with sub-quantum jitter.
    engine.report_item_sizes(&[measured(45.0), measured(45.0), measured(45.0)]);
    engine.report_main_size(measured(60.0));
    engine.report_main_size(measured(59.999));
    engine.report_item_sizes(&[measured(44.996), measured(45.0), measured(45.0)]);

    assert_eq!(engine.revision(), 1, "jittered re-reports must not recompute");

    // Closed: everything collapsed on the main element, full opacity.
    let closed = engine.frames();
    assert!(closed.iter().all(|f| f.offset == Vec2::ZERO));
    assert!(closed.iter().all(|f| f.opacity == 1.0));

    // Open: items chain downwards, staggered outwards.
    engine.toggle();
    let open = engine.frames();
    assert_eq!(open[0].offset, Vec2::new(0.0, 62.5));
    assert_eq!(open[1].offset, Vec2::new(0.0, 117.5));
    assert_eq!(open[2].offset, Vec2::new(0.0, 172.5));
    assert_eq!(open[0].delay, 0.0);
    assert!((open[2].delay - 0.2).abs() < 1e-6);

    // The host can size its container from the binding. The aggregate
    // growth axis follows the cross-axis alignment (center stacks
    // horizontally), not the stacking direction.
    assert_eq!(whole.get(), Size2::new(225.0, 60.0));

    // Closing reverses the cascade: the outermost item leaves first.
    engine.toggle();
    let closing = engine.frames();
    assert_eq!(closing[2].delay, 0.0);
    assert!((closing[0].delay - 0.2).abs() < 1e-6);
}

#[test]
fn scheduler_unfurls_in_index_order_and_refurls_reversed() {
    let spec = AnimationSpec::new(Easing::Linear, 0.1);
    let config = MenuConfig::builder(2)
        .direction(Direction::Right)
        .delays(vec![0.0, 0.2])
        .animation(spec)
        .build()
        .unwrap();
    let mut engine = MenuEngine::new(config);
    engine.report_main_size(measured(60.0));
    engine.report_item_sizes(&[measured(45.0), measured(45.0)]);

    let mut scheduler = StaggerScheduler::new(spec, engine.item_count(), 1.0);
    scheduler.snap(&engine.frames());

    // Open: item 0 moves immediately, item 1 waits out its delay.
    engine.toggle();
    scheduler.retarget(&engine.frames());
    scheduler.update(0.15);

    let first = scheduler.visual(0).unwrap();
    let second = scheduler.visual(1).unwrap();
    assert_eq!(first.offset.x, 62.5);
    assert_eq!(second.offset.x, 0.0);

    scheduler.update(0.5);
    assert!(scheduler.is_settled());
    assert_eq!(scheduler.visual(1).unwrap().offset.x, 117.5);

    // Close: now item 1 leads and item 0 lags.
    engine.toggle();
    scheduler.retarget(&engine.frames());
    scheduler.update(0.15);

    assert_eq!(scheduler.visual(1).unwrap().offset.x, 0.0);
    assert_eq!(scheduler.visual(0).unwrap().offset.x, 62.5);

    scheduler.update(0.5);
    assert!(scheduler.is_settled());
    assert!(scheduler.visuals().iter().all(|v| v.offset == Vec2::ZERO));
}

#[test]
fn radial_menu_single_item_is_well_defined() {
    let config = MenuConfig::builder(1)
        .circle()
        .start_angle(std::f32::consts::PI)
        .radius(100.0)
        .build()
        .unwrap();
    let mut engine = MenuEngine::new(config);
    engine.report_main_size(measured(60.0));
    engine.report_item_sizes(&[measured(45.0)]);

    engine.toggle();
    let frame = engine.item_frame(0);
    assert!((frame.offset.x - -100.0).abs() < 1e-3);
    assert!(frame.offset.y.abs() < 1e-3);
}
