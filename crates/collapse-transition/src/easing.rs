//! CSS timing-function keywords for the armed transition declaration.
//!
//! The controller never evaluates these curves — interpolation belongs to
//! the rendering host. The type exists so configuration stays typed while
//! still rendering to the exact CSS timing-function text.
//!
//! # Usage
//!
//! ```
//! use collapse_transition::Easing;
//!
//! assert_eq!(Easing::EaseIn.to_string(), "ease-in");
//! assert_eq!(
//!     Easing::cubic_bezier(0.4, 0.0, 0.2, 1.0).to_string(),
//!     "cubic-bezier(0.4, 0, 0.2, 1)",
//! );
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// CSS timing function for the transition declaration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Easing {
    /// Linear interpolation (no easing).
    Linear,

    /// CSS `ease` - Slow start, fast middle, slow end.
    Ease,

    /// CSS `ease-in` - Slow start, accelerating.
    EaseIn,

    /// CSS `ease-out` - Fast start, decelerating.
    EaseOut,

    /// CSS `ease-in-out` - Slow start and end, fast middle.
    EaseInOut,

    /// Custom cubic bezier curve.
    /// Parameters: (x1, y1, x2, y2) - control points.
    CubicBezier { x1: f32, y1: f32, x2: f32, y2: f32 },
}

impl Default for Easing {
    fn default() -> Self {
        Self::EaseIn
    }
}

impl Easing {
    /// Create a custom cubic bezier easing function.
    pub fn cubic_bezier(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self::CubicBezier { x1, y1, x2, y2 }
    }
}

impl fmt::Display for Easing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Linear => f.write_str("linear"),
            Self::Ease => f.write_str("ease"),
            Self::EaseIn => f.write_str("ease-in"),
            Self::EaseOut => f.write_str("ease-out"),
            Self::EaseInOut => f.write_str("ease-in-out"),
            Self::CubicBezier { x1, y1, x2, y2 } => {
                write!(f, "cubic-bezier({x1}, {y1}, {x2}, {y2})")
            }
        }
    }
}
