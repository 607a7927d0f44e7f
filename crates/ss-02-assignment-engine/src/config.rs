//! Configuration for the Assignment Engine

use serde::{Deserialize, Serialize};

/// How a giver's draw loop treats a rejected candidate.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DrawMode {
    /// A rejected candidate is not drawn again for the same giver.
    #[default]
    WithoutReplacement,
    /// A rejected candidate may be drawn again. Only the rejection budget
    /// bounds the loop.
    WithReplacement,
}

/// Engine configuration
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Full attempts before the draw is declared infeasible. Must be at least 1.
    pub max_attempts: u32,

    /// Per-giver draw loop behaviour.
    pub draw_mode: DrawMode,
}

impl EngineConfig {
    pub const DEFAULT_MAX_ATTEMPTS: u32 = 10_000;

    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    pub fn with_draw_mode(mut self, draw_mode: DrawMode) -> Self {
        self.draw_mode = draw_mode;
        self
    }

    /// Reject settings the engine cannot run with.
    pub fn validate(&self) -> Result<(), String> {
        if self.max_attempts == 0 {
            return Err("max_attempts must be at least 1".to_string());
        }
        Ok(())
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_attempts: Self::DEFAULT_MAX_ATTEMPTS,
            draw_mode: DrawMode::default(),
        }
    }
}
