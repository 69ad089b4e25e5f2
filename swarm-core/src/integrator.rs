use crate::graph::Node;
use crate::vector::VectorExt;
use glam::Vec2;

/// Convert an accumulated force into velocity.
///
/// The force is divided by half its own norm before being added, so every
/// non-zero force contributes a vector of length 2 in its direction. This
/// is the tuned legacy behaviour, not a physical integration step. The
/// result is then scaled by `force_to_speed`, also when the force is zero.
pub fn apply_force_to(node: &mut Node, force: Vec2, force_to_speed: f32) {
    let dlen = force.norm() / 2.0;
    if dlen > 0.0 {
        node.vel.x += force.x / dlen;
        node.vel.y += force.y / dlen;
    }
    node.vel.multiply(force_to_speed);
}

/// Move a node by its velocity, then apply drag.
///
/// Velocity longer than the node's max speed is first clamped to exactly
/// that length, keeping its direction.
pub fn apply_speed_to(node: &mut Node, drag: f32) {
    let max_speed = node.max_speed();
    let speed = node.vel.norm();
    if speed > max_speed {
        node.vel.multiply(max_speed / speed);
    }

    node.pos += node.vel;

    node.vel.multiply(drag);
}
