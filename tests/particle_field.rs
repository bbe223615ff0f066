mod common;

use common::{assert_close, field_with_particles, seeded_field, still_particle};
use glam::Vec2;
use particle_backdrop::game_data::canvas::Canvas;
use particle_backdrop::game_data::config::{MAX_ALPHA, MAX_EXTENT, MAX_PARTICLES, MAX_RADIUS, MAX_SPEED, MIN_ALPHA, MIN_RADIUS};
use particle_backdrop::game_data::particle::particle::Particle;

#[test]
fn test_particle_count_follows_surface_area() {
    let cases = [
        ((0.0, 0.0), 0),
        ((300.0, 300.0), 6),
        ((1920.0, 1080.0), 138),
        ((1.0, 1.0), 0),
        ((150.0, 99.9), 0),
        ((0.0, 5000.0), 0),
        ((122.5, 122.5), 1),
        ((1000.0, 15.0), 1),
    ];

    for ((width, height), expected) in cases {
        let field = seeded_field(width, height, 1);
        assert_eq!(field.particles().len(), expected, "surface {width}x{height}");
    }
}

#[test]
fn test_invalid_sizes_produce_an_empty_field() {
    for (width, height) in [(-300.0, 300.0), (300.0, -1.0), (f32::NAN, 300.0), (f32::INFINITY, 300.0)] {
        let mut field = seeded_field(width, height, 3);
        assert!(field.particles().is_empty());

        let stats = field.render_frame();
        assert_eq!(stats.particles, 0);
        assert!(field.canvas().is_empty());
    }
}

#[test]
fn test_new_particles_are_sampled_within_their_ranges() {
    let field = seeded_field(800.0, 600.0, 42);
    assert_eq!(field.particles().len(), 32);

    for particle in field.particles() {
        assert!((0.0..=800.0).contains(&particle.position.x));
        assert!((0.0..=600.0).contains(&particle.position.y));
        assert!(particle.velocity.x.abs() <= MAX_SPEED);
        assert!(particle.velocity.y.abs() <= MAX_SPEED);
        assert!((MIN_RADIUS..=MAX_RADIUS).contains(&particle.radius));
        assert!((MIN_ALPHA..=MAX_ALPHA).contains(&particle.alpha));
    }
}

#[test]
fn test_particles_stay_within_one_step_of_the_bounds() {
    let (width, height) = (400.0, 300.0);
    let mut field = seeded_field(width, height, 7);

    for _ in 0..2000 {
        field.render_frame();
        for particle in field.particles() {
            let tolerance = particle.velocity.abs() + Vec2::splat(1e-3);
            assert!(particle.position.x >= -tolerance.x && particle.position.x <= width + tolerance.x);
            assert!(particle.position.y >= -tolerance.y && particle.position.y <= height + tolerance.y);
        }
    }
}

#[test]
fn test_reflection_flips_only_the_crossing_axis() {
    let bounds = Vec2::new(100.0, 100.0);

    let mut particle = Particle::new(Vec2::new(0.1, 50.0), Vec2::new(-0.25, 0.1), 1.0, 0.2);
    let reflected = particle.advance(bounds);
    assert!(reflected.x && !reflected.y);
    assert_eq!(particle.velocity, Vec2::new(0.25, 0.1));
    // Not clamped: the particle sits outside for this frame.
    assert!(particle.position.x < 0.0);

    let reflected = particle.advance(bounds);
    assert!(!reflected.x && !reflected.y);
    assert_eq!(particle.velocity, Vec2::new(0.25, 0.1));
    assert!(particle.position.x > 0.0);

    let mut particle = Particle::new(Vec2::new(50.0, 99.9), Vec2::new(0.1, 0.25), 1.0, 0.2);
    let reflected = particle.advance(bounds);
    assert!(!reflected.x && reflected.y);
    assert_eq!(particle.velocity, Vec2::new(0.1, -0.25));

    let mut particle = Particle::new(Vec2::new(99.9, 99.9), Vec2::new(0.25, 0.25), 1.0, 0.2);
    let reflected = particle.advance(bounds);
    assert!(reflected.x && reflected.y);
    assert_eq!(particle.velocity, Vec2::new(-0.25, -0.25));
}

#[test]
fn test_each_crossing_reflects_exactly_once() {
    let bounds = Vec2::new(10.0, 10.0);
    let mut particle = Particle::new(Vec2::new(5.0, 5.0), Vec2::new(0.25, 0.0), 1.0, 0.2);

    let mut previous_reflected = false;
    let mut reflections = 0;
    for _ in 0..1000 {
        let reflected = particle.advance(bounds);
        assert!(!reflected.y);
        assert!(!(reflected.x && previous_reflected), "reflected twice in a row");
        if reflected.x {
            reflections += 1;
        }
        previous_reflected = reflected.x;
    }
    assert!(reflections > 0);
    assert_eq!(particle.position.y, 5.0);
}

#[test]
fn test_every_particle_is_drawn_once_per_frame() {
    let mut field = seeded_field(600.0, 500.0, 11);
    let count = field.particles().len();

    for _ in 0..3 {
        let stats = field.render_frame();
        assert_eq!(stats.particles, count);
        assert_eq!(field.canvas().discs().len(), count);
    }

    for (disc, particle) in field.canvas().discs().iter().zip(field.particles()) {
        assert_eq!(disc.center, particle.position);
        assert_eq!(disc.radius, particle.radius);
        assert_eq!(disc.color.w, particle.alpha);
    }
}

#[test]
fn test_close_particles_are_linked_once() {
    let mut field = field_with_particles(300.0, 300.0, vec![
        still_particle(10.0, 10.0),
        still_particle(60.0, 10.0),
        still_particle(200.0, 10.0),
    ]);

    let stats = field.render_frame();
    assert_eq!(stats.links, 1);
    assert_eq!(stats.pointer_links, 0);

    let lines = field.canvas().lines();
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].from, Vec2::new(10.0, 10.0));
    assert_eq!(lines[0].to, Vec2::new(60.0, 10.0));
    assert_close(lines[0].color.w, 0.1 - 50.0 / 1000.0);
}

#[test]
fn test_later_particles_are_linked_at_their_previous_position() {
    let mut moving = still_particle(10.0, 110.1);
    moving.velocity = Vec2::new(0.0, -0.2);
    let mut field = field_with_particles(300.0, 300.0, vec![still_particle(10.0, 10.0), moving]);

    // The second particle is still 100.1 away when the first one looks at it.
    assert_eq!(field.render_frame().links, 0);
    assert_eq!(field.render_frame().links, 1);
}

#[test]
fn test_no_pointer_links_before_the_pointer_moves() {
    let mut field = seeded_field(300.0, 300.0, 5);
    assert!(field.pointer().position().is_none());

    for _ in 0..10 {
        assert_eq!(field.render_frame().pointer_links, 0);
    }
}

#[test]
fn test_pointer_at_origin_is_a_real_position() {
    let mut field = field_with_particles(300.0, 300.0, vec![still_particle(3.0, 4.0)]);
    assert_eq!(field.render_frame().pointer_links, 0);

    field.on_pointer_move(0.0, 0.0);
    assert_eq!(field.pointer().position(), Some(Vec2::ZERO));

    let stats = field.render_frame();
    assert_eq!(stats.pointer_links, 1);
    assert_close(field.canvas().lines()[0].color.w, 0.2 - 5.0 / 1500.0);
}

#[test]
fn test_pointer_scenario_on_a_300_by_300_surface() {
    let field = seeded_field(300.0, 300.0, 9);
    assert_eq!(field.particles().len(), 6);

    let mut field = field_with_particles(300.0, 300.0, vec![
        still_particle(150.0, 155.0),
        still_particle(150.0, 400.0),
    ]);
    field.on_pointer_move(150.0, 150.0);

    let stats = field.render_frame();
    assert_eq!(stats.pointer_links, 1);
    assert_eq!(stats.links, 0);

    let lines = field.canvas().lines();
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].from, Vec2::new(150.0, 155.0));
    assert_eq!(lines[0].to, Vec2::new(150.0, 150.0));
}

#[test]
fn test_pointer_links_match_particles_in_reach() {
    let mut field = seeded_field(600.0, 400.0, 21);
    let pointer = Vec2::new(300.0, 200.0);
    field.on_pointer_move(pointer.x, pointer.y);

    for _ in 0..50 {
        let stats = field.render_frame();
        let in_reach = field.particles()
            .iter()
            .filter(|particle| particle.position.distance(pointer) < 150.0)
            .count();
        assert_eq!(stats.pointer_links, in_reach);
    }
}

#[test]
fn test_resize_regenerates_every_particle() {
    let mut field = seeded_field(300.0, 300.0, 13);
    field.on_pointer_move(20.0, 30.0);
    let before = field.particles().to_vec();

    field.resize(600.0, 300.0);
    assert_eq!(field.particles().len(), 12);
    assert_eq!(field.size(), Vec2::new(600.0, 300.0));
    assert_eq!(field.canvas().size(), Vec2::new(600.0, 300.0));

    field.resize(300.0, 300.0);
    assert_eq!(field.particles().len(), 6);
    assert_ne!(field.particles(), before.as_slice());

    // The pointer outlives the particles.
    assert_eq!(field.pointer().position(), Some(Vec2::new(20.0, 30.0)));
}

#[test]
fn test_resize_to_zero_empties_the_field() {
    let mut field = seeded_field(300.0, 300.0, 17);
    field.render_frame();
    assert!(!field.canvas().is_empty());

    field.resize(0.0, 300.0);
    assert!(field.particles().is_empty());
    assert!(field.canvas().is_empty());
    assert_eq!(field.render_frame().particles, 0);
}

#[test]
fn test_same_seed_gives_the_same_layout() {
    let a = seeded_field(500.0, 500.0, 99);
    let b = seeded_field(500.0, 500.0, 99);
    assert_eq!(a.particles(), b.particles());

    let c = seeded_field(500.0, 500.0, 100);
    assert_ne!(a.particles(), c.particles());
}

#[test]
fn test_huge_resize_is_capped() {
    let mut field = seeded_field(300.0, 300.0, 5);

    field.resize(f32::MAX, 1.0);
    assert!(field.particles().len() <= MAX_PARTICLES);
    assert_eq!(field.size(), Vec2::new(MAX_EXTENT, 1.0));

    field.resize(1e6, 1e6);
    assert_eq!(field.particles().len(), MAX_PARTICLES);
    assert_eq!(field.size(), Vec2::new(MAX_EXTENT, MAX_EXTENT));
    for particle in field.particles() {
        assert!(particle.position.x >= 0.0 && particle.position.x <= MAX_EXTENT);
        assert!(particle.position.y >= 0.0 && particle.position.y <= MAX_EXTENT);
    }
}

#[test]
fn test_repaint_draws_without_moving() {
    let mut field = seeded_field(300.0, 300.0, 8);
    let before = field.particles().to_vec();

    let stats = field.repaint();
    assert_eq!(stats.particles, 6);
    assert_eq!(field.canvas().discs().len(), 6);
    assert_eq!(field.particles(), before.as_slice());

    // A paused field that gets resized still shows its new layout.
    field.resize(600.0, 300.0);
    assert!(field.canvas().is_empty());
    field.repaint();
    assert_eq!(field.canvas().discs().len(), field.particles().len());
    assert_eq!(field.particles().len(), 12);
}
