pub mod config;
pub mod engine;
pub mod error;
pub mod force;
pub mod graph;
pub mod integrator;
pub mod runtime;
pub mod scene;
pub mod vector;

pub use config::EngineConfig;
pub use engine::{engine_by_name, LegacyEngine, PhysicsEngine, ENGINES, LEGACY_ENGINE};
pub use error::{Result, SwarmError};
pub use graph::{Edge, Graph, Node, NodeKind};
pub use runtime::{
    build_simulation_context, get_node_states, run_scene, step_simulation, FrameStepper,
    NodeState, SimulationContext, SimulationResult,
};
pub use scene::{build_graph, EdgeDecl, NodeDecl, Scene};
pub use vector::VectorExt;
