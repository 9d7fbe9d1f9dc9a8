//! Controller configuration.

use serde::{Deserialize, Serialize};

use crate::easing::Easing;
use crate::style::Dimension;

/// Configuration for a collapse/expand transition controller.
///
/// `name` is the class-name prefix the host's declarative transition
/// primitive applies around the phase; the controller itself only exposes
/// it. Changing `dimension` on a live controller invalidates any cached
/// measurement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CollapseConfig {
    /// CSS class-name prefix applied by the host.
    pub name: String,
    /// Axis the transition operates on.
    pub dimension: Dimension,
    /// Phase duration in milliseconds.
    pub duration_ms: f32,
    /// Timing function for the armed transition declaration.
    pub easing: Easing,
}

impl Default for CollapseConfig {
    fn default() -> Self {
        Self {
            name: "collapse".to_string(),
            dimension: Dimension::Height,
            duration_ms: 300.0,
            easing: Easing::EaseIn,
        }
    }
}

impl CollapseConfig {
    /// Create a config with all defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the host-facing class-name prefix.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Set the transition axis.
    pub fn with_dimension(mut self, dimension: Dimension) -> Self {
        self.dimension = dimension;
        self
    }

    /// Set the phase duration in milliseconds.
    pub fn with_duration_ms(mut self, duration_ms: f32) -> Self {
        self.duration_ms = duration_ms;
        self
    }

    /// Set the timing function.
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }
}
