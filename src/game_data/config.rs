use glam::{Vec2, Vec3};

/// Surface area (in square pixels) that buys one particle.
pub const AREA_PER_PARTICLE: f32 = 15000.0;
/// Largest absolute velocity component, in pixels per frame.
pub const MAX_SPEED: f32 = 0.25;
pub const MIN_RADIUS: f32 = 1.0;
pub const MAX_RADIUS: f32 = 3.0;
pub const MIN_ALPHA: f32 = 0.0;
pub const MAX_ALPHA: f32 = 0.5;
/// Largest surface extent, in pixels, a field is laid out for. Larger
/// extents are clamped to it.
pub const MAX_EXTENT: f32 = 65536.0;
/// Upper bound on the particle count; the per-frame link pass is quadratic.
pub const MAX_PARTICLES: usize = 2000;

/// How a connection line fades with distance.
///
/// A line is drawn only while `distance < max_distance`; its opacity is
/// `base_alpha - distance / falloff`, clamped at zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinkRule {
    pub max_distance: f32,
    pub base_alpha: f32,
    pub falloff: f32,
}

impl LinkRule {
    pub const fn new(max_distance: f32, base_alpha: f32, falloff: f32) -> Self {
        Self { max_distance, base_alpha, falloff }
    }

    /// Opacity of a line spanning `distance`, or `None` if no line is drawn.
    pub fn alpha(&self, distance: f32) -> Option<f32> {
        if !distance.is_finite() || distance >= self.max_distance {
            return None;
        }
        Some((self.base_alpha - distance / self.falloff).max(0.0))
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldConfig {
    pub area_per_particle: f32,
    pub max_speed: f32,
    pub radius_range: (f32, f32),
    pub alpha_range: (f32, f32),
    pub particle_links: LinkRule,
    pub pointer_links: LinkRule,
    pub particle_color: Vec3,
    pub link_color: Vec3,
    pub pointer_link_color: Vec3,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            area_per_particle: AREA_PER_PARTICLE,
            max_speed: MAX_SPEED,
            radius_range: (MIN_RADIUS, MAX_RADIUS),
            alpha_range: (MIN_ALPHA, MAX_ALPHA),
            particle_links: LinkRule::new(100.0, 0.1, 1000.0),
            pointer_links: LinkRule::new(150.0, 0.2, 1500.0),
            particle_color: Vec3::new(1.0, 1.0, 1.0),
            link_color: Vec3::new(1.0, 1.0, 1.0),
            pointer_link_color: Vec3::new(0.39, 1.0, 0.85),
        }
    }
}

impl FieldConfig {
    /// Number of particles for a surface of `size`: `floor(w * h / area_per_particle)`,
    /// capped at [`MAX_PARTICLES`]. Negative or NaN dimensions count as zero.
    pub fn particle_count(&self, size: Vec2) -> usize {
        let width = sanitize_extent(size.x) as f64;
        let height = sanitize_extent(size.y) as f64;
        if !(self.area_per_particle > 0.0) {
            return 0;
        }

        let count = (width * height / self.area_per_particle as f64).floor();
        if count > MAX_PARTICLES as f64 {
            log::warn!("{}x{} surface asks for {} particles, capping at {}", width, height, count, MAX_PARTICLES);
            return MAX_PARTICLES;
        }
        count as usize
    }
}

/// Maps negative, NaN and infinite extents to zero and clamps the rest to
/// [`MAX_EXTENT`].
pub fn sanitize_extent(extent: f32) -> f32 {
    if extent.is_finite() { extent.clamp(0.0, MAX_EXTENT) } else { 0.0 }
}

/// Settings of the hosting window / page.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub window_title: String,
    pub initial_size: (f64, f64),
    /// Id of the page `<canvas>` the background binds to on the web.
    pub canvas_id: String,
    pub clear_color: wgpu::Color,
    pub field: FieldConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            window_title: String::from("Particle backdrop"),
            initial_size: (1280.0, 720.0),
            canvas_id: String::from("background"),
            clear_color: wgpu::Color { r: 0.04, g: 0.06, b: 0.12, a: 1.0 },
            field: FieldConfig::default(),
        }
    }
}
