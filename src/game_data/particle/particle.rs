use glam::{BVec2, Vec2};
use rand::Rng;
use crate::game_data::config::FieldConfig;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub position: Vec2,
    pub velocity: Vec2,
    pub radius: f32,
    /// Opacity, fixed for the particle's lifetime.
    pub alpha: f32,
}

impl Particle {
    pub fn new(position: Vec2, velocity: Vec2, radius: f32, alpha: f32) -> Self {
        Self { position, velocity, radius, alpha }
    }

    /// Samples a particle uniformly inside `bounds`.
    pub fn random<R: Rng + ?Sized>(rng: &mut R, bounds: Vec2, config: &FieldConfig) -> Self {
        let speed = config.max_speed.abs();
        let (min_radius, max_radius) = ordered(config.radius_range);
        let (min_alpha, max_alpha) = ordered(config.alpha_range);

        Self {
            position: Vec2::new(
                rng.random_range(0.0..=bounds.x),
                rng.random_range(0.0..=bounds.y),
            ),
            velocity: Vec2::new(
                rng.random_range(-speed..=speed),
                rng.random_range(-speed..=speed),
            ),
            radius: rng.random_range(min_radius..=max_radius),
            alpha: rng.random_range(min_alpha..=max_alpha),
        }
    }

    /// Moves the particle one frame and reflects the velocity on every axis
    /// whose coordinate left `[0, bounds]`. The position is not clamped.
    ///
    /// Returns the axes that were reflected.
    pub fn advance(&mut self, bounds: Vec2) -> BVec2 {
        self.position += self.velocity;

        let reflected = BVec2::new(
            self.position.x < 0.0 || self.position.x > bounds.x,
            self.position.y < 0.0 || self.position.y > bounds.y,
        );
        if reflected.x {
            self.velocity.x = -self.velocity.x;
        }
        if reflected.y {
            self.velocity.y = -self.velocity.y;
        }
        reflected
    }
}

fn ordered((a, b): (f32, f32)) -> (f32, f32) {
    if a <= b { (a, b) } else { (b, a) }
}
