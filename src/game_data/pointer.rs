use glam::Vec2;

/// Last known pointer location. Absent until the first pointer move;
/// `(0, 0)` is a valid location, not "no pointer".
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerState {
    position: Option<Vec2>,
}

impl PointerState {
    pub fn new() -> Self {
        Self { position: None }
    }

    pub fn update(&mut self, x: f32, y: f32) {
        let position = Vec2::new(x, y);
        // A non-finite coordinate would poison every distance check.
        if position.is_finite() {
            self.position = Some(position);
        }
    }

    pub fn position(&self) -> Option<Vec2> {
        self.position
    }
}
