//! Serializable snapshot of a graph.
//!
//! This is the hand-off format between whatever owns the graph (an event
//! ingester, a test fixture, a file on disk) and the engine. Optional
//! fields fall back to the engine configuration.

use crate::config::EngineConfig;
use crate::error::{Result, SwarmError};
use crate::graph::{Graph, Node, NodeKind};
use glam::Vec2;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Scene {
    #[serde(default)]
    pub nodes: Vec<NodeDecl>,
    #[serde(default)]
    pub edges: Vec<EdgeDecl>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeDecl {
    pub name: String,
    pub kind: NodeKind,
    pub pos: Vec2,
    #[serde(default)]
    pub vel: Vec2,
    #[serde(default)]
    pub max_speed: Option<f32>,
    #[serde(default = "full_life")]
    pub life: u8,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EdgeDecl {
    pub from: String,
    pub to: String,
    #[serde(default)]
    pub len: Option<f32>,
    #[serde(default = "full_life")]
    pub life: u8,
}

fn full_life() -> u8 {
    u8::MAX
}

impl Scene {
    pub fn from_json_str(source: &str) -> Result<Self> {
        Ok(serde_json::from_str(source)?)
    }

    pub fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let source = std::fs::read_to_string(path)?;
        Self::from_json_str(&source)
    }
}

/// Build a validated [`Graph`] from a scene.
pub fn build_graph(scene: &Scene, config: &EngineConfig) -> Result<Graph> {
    let mut graph = Graph::new();

    for decl in &scene.nodes {
        let max_speed = decl
            .max_speed
            .unwrap_or_else(|| config.max_speed_for(decl.kind));
        let node = Node::new(decl.name.clone(), decl.kind, decl.pos, max_speed)?
            .with_velocity(decl.vel)
            .with_life(decl.life);
        graph.add_node(node)?;
    }

    for decl in &scene.edges {
        let from = graph
            .node_index(&decl.from)
            .ok_or_else(|| SwarmError::UnknownNode(decl.from.clone()))?;
        let to = graph
            .node_index(&decl.to)
            .ok_or_else(|| SwarmError::UnknownNode(decl.to.clone()))?;
        graph.add_edge(from, to, decl.len.unwrap_or(config.edge_length), decl.life)?;
    }

    tracing::debug!(
        nodes = graph.nodes.len(),
        edges = graph.edges.len(),
        "graph built from scene"
    );
    Ok(graph)
}
