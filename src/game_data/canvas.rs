use glam::{Vec2, Vec4};

/// An immediate-mode 2D drawing surface.
///
/// Coordinates are in surface pixels with the origin at the top-left corner
/// and `y` growing downwards. Colors are straight (non-premultiplied) RGBA.
pub trait Canvas {
    fn set_size(&mut self, size: Vec2);
    fn size(&self) -> Vec2;
    /// Erases everything drawn so far.
    fn clear(&mut self);
    fn fill_disc(&mut self, center: Vec2, radius: f32, color: Vec4);
    fn stroke_line(&mut self, from: Vec2, to: Vec2, color: Vec4);
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Disc {
    pub center: Vec2,
    pub radius: f32,
    pub color: Vec4,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineSegment {
    pub from: Vec2,
    pub to: Vec2,
    pub color: Vec4,
}

/// Canvas that records the shapes drawn since the last clear.
///
/// The GPU renderer uploads its contents once per frame.
#[derive(Debug, Default, Clone)]
pub struct DrawList {
    size: Vec2,
    discs: Vec<Disc>,
    lines: Vec<LineSegment>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn discs(&self) -> &[Disc] {
        &self.discs
    }

    pub fn lines(&self) -> &[LineSegment] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.discs.is_empty() && self.lines.is_empty()
    }
}

impl Canvas for DrawList {
    fn set_size(&mut self, size: Vec2) {
        self.size = size;
        // Resizing a canvas wipes its contents.
        self.clear();
    }

    fn size(&self) -> Vec2 {
        self.size
    }

    fn clear(&mut self) {
        self.discs.clear();
        self.lines.clear();
    }

    fn fill_disc(&mut self, center: Vec2, radius: f32, color: Vec4) {
        self.discs.push(Disc { center, radius, color });
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, color: Vec4) {
        self.lines.push(LineSegment { from, to, color });
    }
}
