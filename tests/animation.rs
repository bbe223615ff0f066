mod common;

use common::seeded_field;
use particle_backdrop::game::animation::{AnimationLoop, LoopState};

#[test]
fn test_stopped_loop_leaves_the_field_untouched() {
    let mut animation = AnimationLoop::new();
    let mut field = seeded_field(400.0, 400.0, 3);
    let before = field.particles().to_vec();

    assert!(!animation.is_running());
    assert!(animation.tick(&mut field).is_none());
    assert_eq!(field.particles(), before.as_slice());
    assert!(field.canvas().is_empty());
    assert_eq!(animation.frames(), 0);
}

#[test]
fn test_running_loop_renders_one_frame_per_tick() {
    let mut animation = AnimationLoop::new();
    let mut field = seeded_field(400.0, 400.0, 3);

    assert!(animation.start());
    // Already running: no second chain to schedule.
    assert!(!animation.start());

    for frame in 1..=5 {
        let stats = animation.tick(&mut field).expect("running loop renders");
        assert_eq!(stats.particles, field.particles().len());
        assert_eq!(animation.frames(), frame);
    }

    animation.stop();
    let before = field.particles().to_vec();
    assert!(animation.tick(&mut field).is_none());
    assert_eq!(field.particles(), before.as_slice());
    assert_eq!(animation.frames(), 5);
}

#[test]
fn test_toggle_alternates_between_states() {
    let mut animation = AnimationLoop::new();
    assert_eq!(animation.state(), LoopState::Stopped);
    assert_eq!(animation.toggle(), LoopState::Running);
    assert_eq!(animation.toggle(), LoopState::Stopped);
    assert_eq!(animation.toggle(), LoopState::Running);
}

#[test]
fn test_ticking_matches_rendering_frames_directly() {
    let mut animation = AnimationLoop::new();
    animation.start();
    let mut ticked = seeded_field(500.0, 300.0, 8);
    let mut direct = seeded_field(500.0, 300.0, 8);

    for _ in 0..20 {
        let a = animation.tick(&mut ticked);
        let b = direct.render_frame();
        assert_eq!(a, Some(b));
    }
    assert_eq!(ticked.particles(), direct.particles());
    assert_eq!(ticked.canvas().lines(), direct.canvas().lines());
}
