// Not every test file will use every function.
#![allow(dead_code)]

use glam::Vec2;
use particle_backdrop::game_data::canvas::DrawList;
use particle_backdrop::game_data::config::FieldConfig;
use particle_backdrop::game_data::particle::particle::Particle;
use particle_backdrop::game_data::particle::particle_field::ParticleField;
use rand::SeedableRng;
use rand::rngs::StdRng;

pub type TestField = ParticleField<DrawList, StdRng>;

// A randomly populated field with a reproducible layout.
pub fn seeded_field(width: f32, height: f32, seed: u64) -> TestField {
    ParticleField::new(
        DrawList::new(),
        Vec2::new(width, height),
        FieldConfig::default(),
        StdRng::seed_from_u64(seed),
    )
}

// A field with a hand-placed layout.
pub fn field_with_particles(width: f32, height: f32, particles: Vec<Particle>) -> TestField {
    ParticleField::from_particles(
        DrawList::new(),
        Vec2::new(width, height),
        FieldConfig::default(),
        StdRng::seed_from_u64(0),
        particles,
    )
}

// A particle that never moves.
pub fn still_particle(x: f32, y: f32) -> Particle {
    Particle::new(Vec2::new(x, y), Vec2::ZERO, 2.0, 0.3)
}

pub fn assert_close(actual: f32, expected: f32) {
    assert!(
        (actual - expected).abs() < 1e-5,
        "expected {expected}, got {actual}"
    );
}
