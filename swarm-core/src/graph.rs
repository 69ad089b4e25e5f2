use crate::error::{Result, SwarmError};
use glam::Vec2;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// The two kinds of entity laid out by the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    File,
    Person,
}

/// A graph vertex with position and velocity
#[derive(Debug, Clone)]
pub struct Node {
    pub name: String,
    pub kind: NodeKind,
    pub pos: Vec2,
    pub vel: Vec2,
    /// Aging scalar owned by the graph store, never touched by the engine
    pub life: u8,
    max_speed: f32,
}

impl Node {
    /// Create a node at rest. `max_speed` must be finite and strictly positive.
    pub fn new(name: impl Into<String>, kind: NodeKind, pos: Vec2, max_speed: f32) -> Result<Self> {
        let name = name.into();
        if !max_speed.is_finite() || max_speed <= 0.0 {
            return Err(SwarmError::InvalidMaxSpeed { name, max_speed });
        }
        Ok(Self {
            name,
            kind,
            pos,
            vel: Vec2::ZERO,
            life: u8::MAX,
            max_speed,
        })
    }

    pub fn with_velocity(mut self, vel: Vec2) -> Self {
        self.vel = vel;
        self
    }

    pub fn with_life(mut self, life: u8) -> Self {
        self.life = life;
        self
    }

    pub fn max_speed(&self) -> f32 {
        self.max_speed
    }

    pub fn speed(&self) -> f32 {
        self.vel.length()
    }
}

/// A link between a person (`from`) and one of its files (`to`)
#[derive(Debug, Clone)]
pub struct Edge {
    pub from: usize, // node index, always a person
    pub to: usize,   // node index, always a file
    pub len: f32,    // rest length
    pub life: u8,    // 0 = no force, 255 = full force
}

/// Node and edge store the engine steps over.
///
/// Nodes are addressed by index; names are unique and can be resolved
/// with [`Graph::node_index`].
#[derive(Debug, Default)]
pub struct Graph {
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
    by_name: HashMap<String, usize>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_node(&mut self, node: Node) -> Result<usize> {
        if self.by_name.contains_key(&node.name) {
            return Err(SwarmError::DuplicateNode(node.name));
        }
        let idx = self.nodes.len();
        self.by_name.insert(node.name.clone(), idx);
        self.nodes.push(node);
        Ok(idx)
    }

    /// Connect a person to a file. Endpoints are checked for kind.
    pub fn add_edge(&mut self, from: usize, to: usize, len: f32, life: u8) -> Result<usize> {
        let from_node = self
            .nodes
            .get(from)
            .ok_or_else(|| SwarmError::UnknownNode(format!("#{}", from)))?;
        let to_node = self
            .nodes
            .get(to)
            .ok_or_else(|| SwarmError::UnknownNode(format!("#{}", to)))?;

        if from_node.kind != NodeKind::Person || to_node.kind != NodeKind::File {
            return Err(SwarmError::EdgeKindMismatch {
                from: from_node.name.clone(),
                to: to_node.name.clone(),
            });
        }
        if life == 0 {
            tracing::warn!(from = %from_node.name, to = %to_node.name, "edge added with zero life");
        }

        let idx = self.edges.len();
        self.edges.push(Edge { from, to, len, life });
        Ok(idx)
    }

    pub fn node_index(&self, name: &str) -> Option<usize> {
        self.by_name.get(name).copied()
    }

    pub fn node(&self, name: &str) -> Option<&Node> {
        self.node_index(name).map(|idx| &self.nodes[idx])
    }
}
