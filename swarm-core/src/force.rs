//! Force rules of the legacy layout.
//!
//! Both functions are pure apart from the random draw used to separate
//! coincident nodes. Neither touches node state; the stepper accumulates
//! their results and hands them to the integrator.

use crate::graph::{Edge, Node};
use crate::vector::VectorExt;
use glam::Vec2;
use rand::Rng;

/// Divisor in the spring magnitude `(len - d) / (d * EDGE_STIFFNESS_DIVISOR)`.
pub const EDGE_STIFFNESS_DIVISOR: f32 = 3.0;

/// Full-strength value of an edge's life.
pub const LIFE_SCALE: f32 = 255.0;

/// Squared distance beyond which two nodes no longer repel.
pub const REPULSION_CUTOFF_SQ: f32 = 10000.0;

/// Spring force along an edge, as felt by the `to` node.
///
/// Positive magnitude (closer than `len`) pushes the file away from the
/// person, negative magnitude pulls it in. The `from` node receives the
/// negated force. Coincident endpoints yield zero.
pub fn force_along_edge(edge: &Edge, nodes: &[Node]) -> Vec2 {
    let from = &nodes[edge.from];
    let to = &nodes[edge.to];

    let mut force = Vec2::ZERO;
    force.set(to.pos.x - from.pos.x, to.pos.y - from.pos.y);
    let distance = force.norm();
    if distance > 0.0 {
        let mut magnitude = (edge.len - distance) / (distance * EDGE_STIFFNESS_DIVISOR);
        magnitude *= f32::from(edge.life) / LIFE_SCALE;
        force.multiply(magnitude);
    }
    force
}

/// Repulsion felt by `a` from `b`; `b` receives the negated force.
///
/// Only meaningful for nodes of the same kind. Inverse-distance (not
/// inverse-square), and zero at or beyond [`REPULSION_CUTOFF_SQ`].
/// Coincident nodes get a random push with each component drawn from
/// `[0, randomizer)`.
pub fn force_between_nodes<R: Rng + ?Sized>(
    a: &Node,
    b: &Node,
    randomizer: f32,
    rng: &mut R,
) -> Vec2 {
    let distx = a.pos.x - b.pos.x;
    let disty = a.pos.y - b.pos.y;
    let lensq = distx * distx + disty * disty;

    let mut force = Vec2::ZERO;
    if lensq == 0.0 {
        force.set(
            rng.random::<f32>() * randomizer,
            rng.random::<f32>() * randomizer,
        );
    } else if lensq < REPULSION_CUTOFF_SQ {
        force.set(distx / lensq, disty / lensq);
    }
    force
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::NodeKind;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn node(kind: NodeKind, x: f32, y: f32) -> Node {
        Node::new("n", kind, Vec2::new(x, y), 5.0).unwrap()
    }

    fn edge(len: f32, life: u8) -> Edge {
        Edge { from: 0, to: 1, len, life }
    }

    #[test]
    fn test_edge_stretched_pulls_together() {
        let nodes = vec![node(NodeKind::Person, 0.0, 0.0), node(NodeKind::File, 60.0, 0.0)];
        let force = force_along_edge(&edge(50.0, 255), &nodes);

        // (50 - 60) / (60 * 3) * 60 = -10 / 3
        assert!((force.x - (-10.0 / 3.0)).abs() < 1e-5);
        assert_eq!(force.y, 0.0);
    }

    #[test]
    fn test_edge_compressed_pushes_apart() {
        let nodes = vec![node(NodeKind::Person, 0.0, 0.0), node(NodeKind::File, 0.0, 10.0)];
        let force = force_along_edge(&edge(40.0, 255), &nodes);
        assert!(force.y > 0.0);
        assert_eq!(force.x, 0.0);
    }

    #[test]
    fn test_edge_at_rest_length() {
        let nodes = vec![node(NodeKind::Person, 0.0, 0.0), node(NodeKind::File, 3.0, 4.0)];
        assert_eq!(force_along_edge(&edge(5.0, 255), &nodes), Vec2::ZERO);
    }

    #[test]
    fn test_edge_zero_life() {
        let nodes = vec![node(NodeKind::Person, 0.0, 0.0), node(NodeKind::File, 90.0, 0.0)];
        assert_eq!(force_along_edge(&edge(10.0, 0), &nodes).norm(), 0.0);
    }

    #[test]
    fn test_edge_coincident_endpoints() {
        let nodes = vec![node(NodeKind::Person, 2.0, 2.0), node(NodeKind::File, 2.0, 2.0)];
        assert_eq!(force_along_edge(&edge(25.0, 255), &nodes), Vec2::ZERO);
    }

    #[test]
    fn test_edge_half_life_halves_force() {
        let nodes = vec![node(NodeKind::Person, 0.0, 0.0), node(NodeKind::File, 60.0, 0.0)];
        let full = force_along_edge(&edge(50.0, 255), &nodes);
        let half = force_along_edge(&edge(50.0, 51), &nodes);
        assert!((half.x - full.x * 0.2).abs() < 1e-6);
    }

    #[test]
    fn test_pair_inverse_distance() {
        let mut rng = StdRng::seed_from_u64(1);
        let a = node(NodeKind::File, 3.0, 4.0);
        let b = node(NodeKind::File, 0.0, 0.0);
        let force = force_between_nodes(&a, &b, 0.01, &mut rng);
        assert_eq!(force, Vec2::new(3.0 / 25.0, 4.0 / 25.0));
    }

    #[test]
    fn test_pair_cutoff() {
        let mut rng = StdRng::seed_from_u64(1);
        let a = node(NodeKind::Person, 100.0, 0.0);
        let b = node(NodeKind::Person, 0.0, 0.0);
        // lensq == 10000 is already outside
        assert_eq!(force_between_nodes(&a, &b, 0.01, &mut rng), Vec2::ZERO);
    }

    #[test]
    fn test_pair_coincident_is_random_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        let a = node(NodeKind::File, 1.0, 1.0);
        let b = node(NodeKind::File, 1.0, 1.0);
        for _ in 0..100 {
            let force = force_between_nodes(&a, &b, 0.5, &mut rng);
            assert!((0.0..0.5).contains(&force.x));
            assert!((0.0..0.5).contains(&force.y));
        }
    }

    #[test]
    fn test_pair_coincident_seeded_is_reproducible() {
        let a = node(NodeKind::File, 0.0, 0.0);
        let b = node(NodeKind::File, 0.0, 0.0);
        let first = force_between_nodes(&a, &b, 1.0, &mut StdRng::seed_from_u64(42));
        let second = force_between_nodes(&a, &b, 1.0, &mut StdRng::seed_from_u64(42));
        assert_eq!(first, second);
    }
}
