use crate::config::EngineConfig;
use crate::engine::{engine_by_name, PhysicsEngine};
use crate::error::Result;
use crate::graph::{Graph, NodeKind};
use crate::scene::{build_graph, Scene};
use glam::Vec2;
use serde::Serialize;

/// Drives one engine over a graph, one frame at a time.
///
/// Every frame runs in three passes: edge springs, then same-kind pair
/// repulsion, then integration. Both force passes read start-of-frame
/// positions and write into a per-node accumulator, so no node moves until
/// every force of the frame is known.
pub struct FrameStepper {
    engine: Box<dyn PhysicsEngine>,
    forces: Vec<Vec2>,
    frame: u64,
}

impl FrameStepper {
    pub fn new(engine: Box<dyn PhysicsEngine>) -> Self {
        Self {
            engine,
            forces: Vec::new(),
            frame: 0,
        }
    }

    pub fn engine(&self) -> &dyn PhysicsEngine {
        self.engine.as_ref()
    }

    /// Number of frames stepped so far
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Forces accumulated during the last frame, indexed like the nodes
    pub fn last_forces(&self) -> &[Vec2] {
        &self.forces
    }

    pub fn step_frame(&mut self, graph: &mut Graph) {
        let nodes = &mut graph.nodes;
        self.forces.clear();
        self.forces.resize(nodes.len(), Vec2::ZERO);

        for edge in &graph.edges {
            let force = self.engine.force_along_edge(edge, nodes);
            self.forces[edge.to] += force;
            self.forces[edge.from] -= force;
        }

        for i in 0..nodes.len() {
            for j in (i + 1)..nodes.len() {
                if nodes[i].kind != nodes[j].kind {
                    continue;
                }
                let force = self.engine.force_between_nodes(&nodes[i], &nodes[j]);
                self.forces[i] += force;
                self.forces[j] -= force;
            }
        }

        for (node, force) in nodes.iter_mut().zip(&self.forces) {
            self.engine.apply_force_to(node, *force);
            self.engine.apply_speed_to(node);
        }

        self.frame += 1;
        tracing::trace!(
            frame = self.frame,
            nodes = nodes.len(),
            max_force = self.forces.iter().map(|f| f.length()).fold(0.0f32, f32::max),
            "frame stepped"
        );
    }
}

/// Final state of one node
#[derive(Debug, Clone, Serialize)]
pub struct NodeState {
    pub name: String,
    pub kind: NodeKind,
    pub pos: Vec2,
    pub vel: Vec2,
}

/// Result of running a scene for a number of frames
#[derive(Debug, Serialize)]
pub struct SimulationResult {
    pub frames: u64,
    pub nodes: Vec<NodeState>,
}

/// A graph together with the stepper advancing it
pub struct SimulationContext {
    pub graph: Graph,
    pub stepper: FrameStepper,
    pub max_frames: u64,
}

impl SimulationContext {
    pub fn current_frame(&self) -> u64 {
        self.stepper.frame()
    }
}

/// Validate a scene and set up a context around the named engine.
pub fn build_simulation_context(
    scene: &Scene,
    config: EngineConfig,
    engine: &str,
    seed: Option<u64>,
    max_frames: u64,
) -> Result<SimulationContext> {
    let engine = engine_by_name(engine, config, seed)?;
    let graph = build_graph(scene, &config)?;
    Ok(SimulationContext {
        graph,
        stepper: FrameStepper::new(engine),
        max_frames,
    })
}

/// Advance one frame. Returns `true` once `max_frames` has been reached,
/// after which further calls do nothing.
pub fn step_simulation(ctx: &mut SimulationContext) -> bool {
    if ctx.current_frame() >= ctx.max_frames {
        return true;
    }
    ctx.stepper.step_frame(&mut ctx.graph);
    ctx.current_frame() >= ctx.max_frames
}

pub fn get_node_states(ctx: &SimulationContext) -> Vec<NodeState> {
    ctx.graph
        .nodes
        .iter()
        .map(|n| NodeState {
            name: n.name.clone(),
            kind: n.kind,
            pos: n.pos,
            vel: n.vel,
        })
        .collect()
}

/// Run a scene to completion with the named engine.
pub fn run_scene(
    scene: &Scene,
    config: EngineConfig,
    engine: &str,
    frames: u64,
    seed: Option<u64>,
) -> Result<SimulationResult> {
    let mut ctx = build_simulation_context(scene, config, engine, seed, frames)?;
    while !step_simulation(&mut ctx) {}

    tracing::debug!(frames = ctx.current_frame(), "scene finished");
    Ok(SimulationResult {
        frames: ctx.current_frame(),
        nodes: get_node_states(&ctx),
    })
}
