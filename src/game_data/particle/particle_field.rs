use glam::Vec2;
use rand::Rng;
use crate::game_data::canvas::Canvas;
use crate::game_data::config::{sanitize_extent, FieldConfig};
use crate::game_data::particle::particle::Particle;
use crate::game_data::pointer::PointerState;

/// What one call to [`ParticleField::render_frame`] drew.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameStats {
    pub particles: usize,
    pub links: usize,
    pub pointer_links: usize,
}

/// A set of drifting particles rendered onto a canvas, linked to each other
/// and to the pointer when close enough.
pub struct ParticleField<C: Canvas, R: Rng> {
    canvas: C,
    config: FieldConfig,
    rng: R,
    size: Vec2,
    particles: Vec<Particle>,
    pointer: PointerState,
}

impl<C: Canvas, R: Rng> ParticleField<C, R> {
    /// Binds a field to `canvas` and populates it for a surface of `size`.
    pub fn new(canvas: C, size: Vec2, config: FieldConfig, rng: R) -> Self {
        let mut field = Self {
            canvas,
            config,
            rng,
            size: Vec2::ZERO,
            particles: Vec::new(),
            pointer: PointerState::new(),
        };
        field.resize(size.x, size.y);
        field
    }

    /// Binds a field to `canvas` around an existing particle layout. The next
    /// [`resize`](Self::resize) replaces it like any other layout.
    pub fn from_particles(canvas: C, size: Vec2, config: FieldConfig, rng: R, particles: Vec<Particle>) -> Self {
        let size = Vec2::new(sanitize_extent(size.x), sanitize_extent(size.y));
        let mut canvas = canvas;
        canvas.set_size(size);
        Self {
            canvas,
            config,
            rng,
            size,
            particles,
            pointer: PointerState::new(),
        }
    }

    /// Resizes the canvas and regenerates every particle from scratch.
    pub fn resize(&mut self, width: f32, height: f32) {
        let size = Vec2::new(sanitize_extent(width), sanitize_extent(height));
        if size.x == 0.0 || size.y == 0.0 {
            log::warn!("Particle field resized to an empty surface ({}x{})", width, height);
        }

        self.size = size;
        self.canvas.set_size(size);

        let count = self.config.particle_count(size);
        let (rng, config) = (&mut self.rng, &self.config);
        self.particles = (0..count).map(|_| Particle::random(rng, size, config)).collect();

        log::info!("Regenerated {} particles for a {}x{} surface", count, size.x, size.y);
    }

    pub fn on_pointer_move(&mut self, x: f32, y: f32) {
        self.pointer.update(x, y);
    }

    /// Advances every particle by one step and redraws the whole canvas.
    ///
    /// Particle `i` is moved and drawn before it is linked to the particles
    /// after it, which are still at their previous-frame positions.
    pub fn render_frame(&mut self) -> FrameStats {
        self.paint(true)
    }

    /// Redraws the whole canvas without moving any particle.
    pub fn repaint(&mut self) -> FrameStats {
        self.paint(false)
    }

    fn paint(&mut self, advance: bool) -> FrameStats {
        let bounds = self.size;
        let config = &self.config;
        let canvas = &mut self.canvas;
        let pointer = self.pointer.position();

        canvas.clear();
        let mut stats = FrameStats { particles: self.particles.len(), ..Default::default() };

        for i in 0..self.particles.len() {
            if advance {
                self.particles[i].advance(bounds);
            }

            let (head, tail) = self.particles.split_at(i + 1);
            let particle = &head[i];
            canvas.fill_disc(particle.position, particle.radius, config.particle_color.extend(particle.alpha));

            for other in tail {
                let distance = particle.position.distance(other.position);
                if let Some(alpha) = config.particle_links.alpha(distance) {
                    canvas.stroke_line(particle.position, other.position, config.link_color.extend(alpha));
                    stats.links += 1;
                }
            }

            if let Some(pointer) = pointer {
                let distance = particle.position.distance(pointer);
                if let Some(alpha) = config.pointer_links.alpha(distance) {
                    canvas.stroke_line(particle.position, pointer, config.pointer_link_color.extend(alpha));
                    stats.pointer_links += 1;
                }
            }
        }

        log::trace!("Frame: {:?}", stats);
        stats
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn pointer(&self) -> &PointerState {
        &self.pointer
    }

    pub fn size(&self) -> Vec2 {
        self.size
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    pub fn canvas(&self) -> &C {
        &self.canvas
    }
}
