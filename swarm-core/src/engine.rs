use crate::config::EngineConfig;
use crate::error::{Result, SwarmError};
use crate::force::{force_along_edge, force_between_nodes};
use crate::graph::{Edge, Node};
use crate::integrator::{apply_force_to, apply_speed_to};
use glam::Vec2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Force and integration rules the frame stepper is driven by.
///
/// The stepper only calls these four operations, so a different layout
/// behaviour can be swapped in without touching the stepping loop.
pub trait PhysicsEngine {
    fn name(&self) -> &str;

    /// Force felt by `edge.to`; `edge.from` receives the negation.
    fn force_along_edge(&self, edge: &Edge, nodes: &[Node]) -> Vec2;

    /// Force felt by `a` from a node `b` of the same kind; `b` receives
    /// the negation.
    fn force_between_nodes(&mut self, a: &Node, b: &Node) -> Vec2;

    fn apply_force_to(&self, node: &mut Node, force: Vec2);

    fn apply_speed_to(&self, node: &mut Node);
}

/// The legacy code_swarm layout rules.
#[derive(Debug)]
pub struct LegacyEngine<R = StdRng> {
    config: EngineConfig,
    rng: R,
}

impl LegacyEngine<StdRng> {
    /// Engine seeded from the thread-local generator.
    pub fn new(config: EngineConfig) -> Result<Self> {
        Self::with_rng(config, StdRng::from_rng(&mut rand::rng()))
    }

    /// Engine whose coincident-node pushes are reproducible.
    pub fn seeded(config: EngineConfig, seed: u64) -> Result<Self> {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> LegacyEngine<R> {
    pub fn with_rng(config: EngineConfig, rng: R) -> Result<Self> {
        config.validate()?;
        tracing::debug!(?config, "legacy engine configured");
        Ok(Self { config, rng })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }
}

impl<R: Rng> PhysicsEngine for LegacyEngine<R> {
    fn name(&self) -> &str {
        LEGACY_ENGINE
    }

    fn force_along_edge(&self, edge: &Edge, nodes: &[Node]) -> Vec2 {
        force_along_edge(edge, nodes)
    }

    fn force_between_nodes(&mut self, a: &Node, b: &Node) -> Vec2 {
        force_between_nodes(a, b, self.config.force_calculation_randomizer, &mut self.rng)
    }

    fn apply_force_to(&self, node: &mut Node, force: Vec2) {
        apply_force_to(node, force, self.config.force_to_speed_multiplier);
    }

    fn apply_speed_to(&self, node: &mut Node) {
        apply_speed_to(node, self.config.speed_to_position_multiplier);
    }
}

pub const LEGACY_ENGINE: &str = "legacy";

/// Names accepted by [`engine_by_name`].
pub const ENGINES: &[&str] = &[LEGACY_ENGINE];

/// Build a registered engine by name (case-insensitive). With a seed the
/// engine's random draws are reproducible.
pub fn engine_by_name(
    name: &str,
    config: EngineConfig,
    seed: Option<u64>,
) -> Result<Box<dyn PhysicsEngine>> {
    match name.to_ascii_lowercase().as_str() {
        "legacy" | "physicsenginelegacy" => {
            let engine = match seed {
                Some(seed) => LegacyEngine::seeded(config, seed)?,
                None => LegacyEngine::new(config)?,
            };
            Ok(Box::new(engine))
        }
        _ => Err(SwarmError::UnknownEngine(name.to_string())),
    }
}
