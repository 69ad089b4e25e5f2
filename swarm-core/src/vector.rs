//! The 2D vector contract used by the force model.
//!
//! Forces and displacements are plain `glam::Vec2` values; this trait adds
//! the in-place `set`/`multiply` operations and the `norm` the layout rules
//! are written in terms of.

use glam::Vec2;

pub trait VectorExt {
    /// Overwrite both components.
    fn set(&mut self, x: f32, y: f32);

    /// Scale both components in place.
    fn multiply(&mut self, scalar: f32);

    /// Euclidean magnitude, 0 for the zero vector.
    fn norm(&self) -> f32;
}

impl VectorExt for Vec2 {
    fn set(&mut self, x: f32, y: f32) {
        self.x = x;
        self.y = y;
    }

    fn multiply(&mut self, scalar: f32) {
        self.x *= scalar;
        self.y *= scalar;
    }

    fn norm(&self) -> f32 {
        (self.x * self.x + self.y * self.y).sqrt()
    }
}
