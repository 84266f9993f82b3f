//! End-to-end scenarios: text in, settled particles out.
//!
//! These drive the public API the same way the window and snapshot drivers
//! do, with a fixed seed so runs are repeatable.

use glyph_swarm::prelude::*;

const VIEWPORT: Viewport = Viewport::new(800, 600);

fn hi_scene(seed: u64) -> Scene {
    Scene::new(SceneConfig {
        layout: LayoutConfig::default().with_lines(["Hi"]),
        seed: Some(seed),
        ..Default::default()
    })
}

fn run_until_settled(scene: &mut Scene, max_frames: usize) -> usize {
    for frame in 0..max_frames {
        if scene.field().all_settled() {
            return frame;
        }
        scene.frame();
    }
    max_frames
}

// ============================================================================
// Assembly
// ============================================================================

#[test]
fn test_hi_assembles_and_settles() {
    let mut scene = hi_scene(7);
    let count = scene.resize(VIEWPORT).points.len();
    assert!(count > 0);
    assert_eq!(scene.field().len(), count);
    assert!(scene
        .field()
        .particles()
        .iter()
        .all(|p| p.phase() == Phase::Seeking));

    // Longest trip is a far corner at the slowest speed
    let frames = run_until_settled(&mut scene, 1000);
    assert!(frames < 1000, "still seeking after {frames} frames");

    for p in scene.field().particles() {
        assert_eq!(p.phase(), Phase::Settled);
        assert!(p.position().distance(p.target()) < 5.0);
    }
}

#[test]
fn test_settled_text_holds_still() {
    let mut scene = hi_scene(11);
    scene.resize(VIEWPORT);
    run_until_settled(&mut scene, 1000);
    for _ in 0..300 {
        scene.frame();
    }

    let before: Vec<Disc> = scene.frame().to_vec();
    let after: Vec<Disc> = scene.frame().to_vec();
    for (a, b) in before.iter().zip(&after) {
        assert!((a.x - b.x).abs() < 0.01 && (a.y - b.y).abs() < 0.01);
        assert_eq!(a.size, b.size);
    }
}

#[test]
fn test_spawned_outside_viewport() {
    let mut scene = hi_scene(3);
    scene.resize(VIEWPORT);
    for p in scene.field().particles() {
        let pos = p.position();
        let outside = pos.x < 0.0 || pos.y < 0.0 || pos.x > 800.0 || pos.y > 600.0;
        assert!(outside, "spawned inside at {pos}");
        assert!(VIEWPORT.contains_with_margin(pos, 50.0));
    }
}

// ============================================================================
// Pointer interaction
// ============================================================================

#[test]
fn test_pointer_scatters_then_text_reforms() {
    let mut scene = hi_scene(5);
    let layout = scene.resize(VIEWPORT).clone();
    run_until_settled(&mut scene, 1000);
    for _ in 0..300 {
        scene.frame();
    }

    // Park the pointer just beside the first target
    let first = layout.points[0];
    scene.pointer_mut().set(first.x + 3.0, first.y + 3.0);
    for _ in 0..10 {
        scene.frame();
    }
    let displaced = scene
        .field()
        .particles()
        .iter()
        .filter(|p| p.position().distance(p.target()) > 1.0)
        .count();
    assert!(displaced > 0);

    scene.pointer_mut().clear();
    for _ in 0..400 {
        scene.frame();
    }
    for p in scene.field().particles() {
        assert!(p.position().distance(p.target()) < 0.1);
    }
}

#[test]
fn test_far_pointer_has_no_effect() {
    let mut a = hi_scene(9);
    let mut b = hi_scene(9);
    a.resize(VIEWPORT);
    b.resize(VIEWPORT);
    b.pointer_mut().set(5000.0, 5000.0);

    for _ in 0..500 {
        assert_eq!(a.frame(), b.frame());
    }
}

// ============================================================================
// Layout
// ============================================================================

#[test]
fn test_resize_replaces_population() {
    let mut scene = hi_scene(1);
    let wide = scene.resize(VIEWPORT).points.len();
    run_until_settled(&mut scene, 1000);

    let narrow = scene.resize(Viewport::new(400, 700)).clone();
    assert!(narrow.narrow);
    assert_eq!(scene.field().len(), narrow.points.len());
    assert_eq!(scene.field().settled_count(), 0);
    assert_ne!(wide, 0);
}

#[test]
fn test_sampling_ignores_seed() {
    let mut a = hi_scene(1);
    let mut b = hi_scene(2);
    assert_eq!(a.resize(VIEWPORT), b.resize(VIEWPORT));
}

#[test]
fn test_zero_viewport_is_empty() {
    let mut scene = hi_scene(1);
    assert!(scene.resize(Viewport::new(0, 0)).points.is_empty());
    assert!(scene.frame().is_empty());
}

// ============================================================================
// Headless rendering
// ============================================================================

#[test]
fn test_snapshot_matches_field_size() {
    let mut scene = hi_scene(4);
    let canvas = snapshot(&mut scene, Viewport::new(320, 240), 30);
    assert_eq!(canvas.image().dimensions(), (320, 240));
    assert!(!scene.field().is_empty());
}
