//! Engine configuration.
//!
//! All constants are fixed when an engine is constructed and never change
//! during a run. A configuration can come from JSON or from a `Key=Value`
//! properties file.

use crate::error::{Result, SwarmError};
use crate::graph::NodeKind;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Tuning constants for the legacy layout engine.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Upper bound (exclusive) of each random component used to separate
    /// coincident nodes.
    pub force_calculation_randomizer: f32,

    /// Factor applied to the velocity after a force has been added.
    pub force_to_speed_multiplier: f32,

    /// Drag applied to the velocity after the node has moved.
    pub speed_to_position_multiplier: f32,

    /// Max speed given to file nodes that do not carry their own.
    pub file_max_speed: f32,

    /// Max speed given to person nodes that do not carry their own.
    pub person_max_speed: f32,

    /// Rest length given to edges that do not carry their own.
    pub edge_length: f32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            force_calculation_randomizer: 0.01,
            force_to_speed_multiplier: 0.5,
            speed_to_position_multiplier: 0.5,
            file_max_speed: 7.0,
            person_max_speed: 2.0,
            edge_length: 25.0,
        }
    }
}

impl EngineConfig {
    /// Reject constants that are not strictly positive and finite.
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("force_calculation_randomizer", self.force_calculation_randomizer),
            ("force_to_speed_multiplier", self.force_to_speed_multiplier),
            ("speed_to_position_multiplier", self.speed_to_position_multiplier),
            ("file_max_speed", self.file_max_speed),
            ("person_max_speed", self.person_max_speed),
            ("edge_length", self.edge_length),
        ];
        for (name, value) in fields {
            if !value.is_finite() || value <= 0.0 {
                return Err(SwarmError::InvalidConfig(format!(
                    "{} must be finite and > 0, got {}",
                    name, value
                )));
            }
        }
        Ok(())
    }

    /// Default max speed for a node of the given kind.
    pub fn max_speed_for(&self, kind: NodeKind) -> f32 {
        match kind {
            NodeKind::File => self.file_max_speed,
            NodeKind::Person => self.person_max_speed,
        }
    }

    pub fn from_json_str(source: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse a properties file: one `Key=Value` per line, `#` starts a
    /// comment, missing keys keep their default.
    pub fn from_properties_str(source: &str) -> Result<Self> {
        let mut config = Self::default();

        for (line_num, raw) in source.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let (key, value) = line.split_once('=').ok_or_else(|| {
                SwarmError::InvalidConfig(format!(
                    "line {}: expected Key=Value, got '{}'",
                    line_num + 1,
                    line
                ))
            })?;
            let key = key.trim();
            let value: f32 = value.trim().parse().map_err(|_| {
                SwarmError::InvalidConfig(format!(
                    "line {}: value for {} is not a number: '{}'",
                    line_num + 1,
                    key,
                    value.trim()
                ))
            })?;

            match key {
                "ForceCalculationRandomizer" => config.force_calculation_randomizer = value,
                "ForceToSpeedMultiplier" => config.force_to_speed_multiplier = value,
                "SpeedToPositionMultiplier" => config.speed_to_position_multiplier = value,
                "FileSpeed" => config.file_max_speed = value,
                "PersonSpeed" => config.person_max_speed = value,
                "EdgeLength" => config.edge_length = value,
                other => {
                    return Err(SwarmError::InvalidConfig(format!(
                        "line {}: unknown key '{}'",
                        line_num + 1,
                        other
                    )))
                }
            }
        }

        config.validate()?;
        Ok(config)
    }

    /// Load from a file, JSON when the extension is `.json`, properties
    /// otherwise.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path)?;
        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        if is_json {
            Self::from_json_str(&source)
        } else {
            Self::from_properties_str(&source)
        }
    }
}
