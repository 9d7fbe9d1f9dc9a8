//! Style properties, the transition axis, and the per-cycle style cache.
//!
//! This module defines:
//! - `Dimension`: The single axis (height or width) a transition operates on
//! - `StyleProperty`: Every inline style property the controller touches
//! - `StyleCache`: The cached natural size and padding for one cycle, and
//!   the derived CSS transition declaration
//!
//! Property keys use the camelCase form familiar from inline style objects;
//! [`camel_to_kebab`] converts them to CSS property names when the
//! transition declaration is rendered.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::easing::Easing;
use crate::error::CollapseError;

/// The geometric axis a collapse/expand transition operates on.
///
/// The axis determines which size property is measured and which pair of
/// padding properties is animated alongside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    /// Animate `height`, `padding-top` and `padding-bottom`.
    Height,
    /// Animate `width`, `padding-left` and `padding-right`.
    Width,
}

impl Default for Dimension {
    fn default() -> Self {
        Self::Height
    }
}

impl Dimension {
    /// The lowercase keyword form (`height` / `width`).
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Height => "height",
            Self::Width => "width",
        }
    }

    /// The size property measured and animated along this axis.
    pub fn size_property(&self) -> StyleProperty {
        match self {
            Self::Height => StyleProperty::Height,
            Self::Width => StyleProperty::Width,
        }
    }

    /// The two padding properties animated alongside the size.
    pub fn padding_properties(&self) -> [StyleProperty; 2] {
        match self {
            Self::Height => [StyleProperty::PaddingTop, StyleProperty::PaddingBottom],
            Self::Width => [StyleProperty::PaddingLeft, StyleProperty::PaddingRight],
        }
    }
}

impl FromStr for Dimension {
    type Err = CollapseError;

    /// Parse a dimension keyword, rejecting anything else at the boundary.
    ///
    /// Out-of-range values (`"depth"`, ...) never reach the core; the core
    /// itself treats an unmeasurable element as a silent no-op instead.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "height" => Ok(Self::Height),
            "width" => Ok(Self::Width),
            other => Err(CollapseError::UnsupportedDimension(other.to_string())),
        }
    }
}

/// Inline style properties the controller reads or writes.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum StyleProperty {
    Height,
    Width,
    PaddingTop,
    PaddingBottom,
    PaddingLeft,
    PaddingRight,
    /// Set to `hidden` during a phase to prevent content bleed.
    Overflow,
    /// The armed inline `transition` declaration.
    Transition,
    /// Toggled by the probe while measuring a hidden element.
    Visibility,
    /// Saved and restored verbatim by the probe.
    Display,
}

impl StyleProperty {
    /// The camelCase key form used for cached entries.
    pub fn key(&self) -> &'static str {
        match self {
            Self::Height => "height",
            Self::Width => "width",
            Self::PaddingTop => "paddingTop",
            Self::PaddingBottom => "paddingBottom",
            Self::PaddingLeft => "paddingLeft",
            Self::PaddingRight => "paddingRight",
            Self::Overflow => "overflow",
            Self::Transition => "transition",
            Self::Visibility => "visibility",
            Self::Display => "display",
        }
    }

    /// The kebab-case CSS property name.
    pub fn css_name(&self) -> String {
        camel_to_kebab(self.key())
    }
}

/// Convert a camelCase style key to its kebab-case CSS property name.
///
/// Inserts a hyphen before each uppercase letter, lowercases it, and strips
/// the hyphen a leading uppercase letter would produce.
pub fn camel_to_kebab(key: &str) -> String {
    let mut out = String::with_capacity(key.len() + 2);
    for ch in key.chars() {
        if ch.is_ascii_uppercase() {
            out.push('-');
            out.push(ch.to_ascii_lowercase());
        } else {
            out.push(ch);
        }
    }
    if out.starts_with('-') {
        out.remove(0);
    }
    out
}

/// The cached natural size and padding for the current animation cycle.
///
/// At most one cache is live per controller. It is populated lazily by the
/// probe on the first enter/leave trigger of a cycle, read repeatedly during
/// the style mutation steps, and cleared when the phase settles or the
/// configured axis changes.
///
/// A cache can be *populated but empty*: the probe ran but the element had
/// no layout box, so there is nothing to animate. That state still counts as
/// measured for the idempotence guarantee.
#[derive(Debug, Clone, Default)]
pub struct StyleCache {
    entries: Vec<(StyleProperty, String)>,
    populated: bool,
}

impl StyleCache {
    /// Create a new empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Capture a measurement. Values are immutable until [`clear`].
    ///
    /// [`clear`]: StyleCache::clear
    pub fn populate<I>(&mut self, entries: I)
    where
        I: IntoIterator<Item = (StyleProperty, String)>,
    {
        self.entries = entries.into_iter().collect();
        self.populated = true;
    }

    /// Whether a measurement has been captured this cycle.
    pub fn is_populated(&self) -> bool {
        self.populated
    }

    /// Number of cached properties.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no properties are cached.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up a cached value.
    pub fn get(&self, property: StyleProperty) -> Option<&str> {
        self.entries
            .iter()
            .find(|(p, _)| *p == property)
            .map(|(_, v)| v.as_str())
    }

    /// Iterate over cached property/value pairs in capture order.
    pub fn iter(&self) -> impl Iterator<Item = (StyleProperty, &str)> {
        self.entries.iter().map(|(p, v)| (*p, v.as_str()))
    }

    /// Drop the measurement, returning the cache to its unpopulated state.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.populated = false;
    }

    /// Render the inline CSS transition declaration for the cached keys.
    ///
    /// One `<kebab-property> <duration>ms <easing>` token per cached key,
    /// comma-joined. Empty string when nothing is cached.
    pub fn transition_declaration(&self, duration_ms: f32, easing: &Easing) -> String {
        self.entries
            .iter()
            .map(|(p, _)| format!("{} {}ms {}", p.css_name(), duration_ms, easing))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camel_to_kebab() {
        assert_eq!(camel_to_kebab("height"), "height");
        assert_eq!(camel_to_kebab("paddingTop"), "padding-top");
        assert_eq!(camel_to_kebab("paddingBottom"), "padding-bottom");
        // A leading uppercase letter must not leave a leading hyphen.
        assert_eq!(camel_to_kebab("Webkit"), "webkit");
        assert_eq!(camel_to_kebab("WebkitTransition"), "webkit-transition");
    }

    #[test]
    fn test_css_names() {
        assert_eq!(StyleProperty::Height.css_name(), "height");
        assert_eq!(StyleProperty::PaddingTop.css_name(), "padding-top");
        assert_eq!(StyleProperty::PaddingLeft.css_name(), "padding-left");
        assert_eq!(StyleProperty::Transition.css_name(), "transition");
    }

    #[test]
    fn test_dimension_properties() {
        assert_eq!(Dimension::Height.size_property(), StyleProperty::Height);
        assert_eq!(
            Dimension::Height.padding_properties(),
            [StyleProperty::PaddingTop, StyleProperty::PaddingBottom]
        );
        assert_eq!(Dimension::Width.size_property(), StyleProperty::Width);
        assert_eq!(
            Dimension::Width.padding_properties(),
            [StyleProperty::PaddingLeft, StyleProperty::PaddingRight]
        );
    }

    #[test]
    fn test_dimension_parse() {
        assert_eq!("height".parse::<Dimension>().unwrap(), Dimension::Height);
        assert_eq!(" Width ".parse::<Dimension>().unwrap(), Dimension::Width);

        let err = "depth".parse::<Dimension>().unwrap_err();
        assert!(err.to_string().contains("depth"));
    }

    #[test]
    fn test_cache_populate_and_clear() {
        let mut cache = StyleCache::new();
        assert!(!cache.is_populated());
        assert!(cache.is_empty());

        cache.populate([
            (StyleProperty::Height, "120px".to_string()),
            (StyleProperty::PaddingTop, "10px".to_string()),
        ]);
        assert!(cache.is_populated());
        assert_eq!(cache.len(), 2);
        assert_eq!(cache.get(StyleProperty::Height), Some("120px"));
        assert_eq!(cache.get(StyleProperty::PaddingBottom), None);

        cache.clear();
        assert!(!cache.is_populated());
        assert!(cache.is_empty());
    }

    #[test]
    fn test_populated_but_empty_is_distinct_from_cleared() {
        let mut cache = StyleCache::new();
        cache.populate([]);
        assert!(cache.is_populated());
        assert!(cache.is_empty());
    }

    #[test]
    fn test_transition_declaration_one_token_per_key() {
        let mut cache = StyleCache::new();
        cache.populate([
            (StyleProperty::Height, "120px".to_string()),
            (StyleProperty::PaddingTop, "10px".to_string()),
            (StyleProperty::PaddingBottom, "5px".to_string()),
        ]);

        let decl = cache.transition_declaration(300.0, &Easing::EaseIn);
        assert_eq!(
            decl,
            "height 300ms ease-in, padding-top 300ms ease-in, padding-bottom 300ms ease-in"
        );
    }

    #[test]
    fn test_transition_declaration_empty_cache() {
        let cache = StyleCache::new();
        assert_eq!(cache.transition_declaration(300.0, &Easing::EaseIn), "");
    }
}
