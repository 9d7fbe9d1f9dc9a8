//! Flash-free measurement of an element's natural size.
//!
//! The element may currently be hidden (zero size) or mid-transition, so
//! the probe forces it visible-but-not-painted (`visibility: hidden`, layout
//! participation intact) before reading geometry, then restores the original
//! inline `visibility`/`display` values exactly as they were.
//!
//! The probe is idempotent within a cycle: if the cache is already
//! populated it must not re-measure, because a mid-transition read would
//! capture a transient size rather than the natural one.

use tracing::{debug, trace};

use crate::element::StyledElement;
use crate::style::{Dimension, StyleCache, StyleProperty};

/// Measure `element` along `dimension` into `cache`.
///
/// No-op when the cache is already populated. An element with no layout box
/// yields a populated-but-empty cache, which downstream renders as an empty
/// transition declaration (a silent no-op transition, not a failure).
pub fn measure_into(
    element: &mut dyn StyledElement,
    dimension: Dimension,
    cache: &mut StyleCache,
) {
    if cache.is_populated() {
        trace!(dimension = dimension.as_str(), "measurement cached, skipping probe");
        return;
    }

    let saved_visibility = element.inline_style(StyleProperty::Visibility);
    let saved_display = element.inline_style(StyleProperty::Display);

    element.set_inline_style(StyleProperty::Visibility, "hidden");

    let mut entries = Vec::with_capacity(3);
    if let Some(size) = element.layout_size(dimension) {
        entries.push((dimension.size_property(), format!("{size}px")));
        for padding in dimension.padding_properties() {
            let value = element
                .inline_style(padding)
                .or_else(|| element.computed_style(padding))
                .unwrap_or_else(|| "0px".to_string());
            entries.push((padding, value));
        }
    } else {
        debug!(
            dimension = dimension.as_str(),
            "element has no layout box, caching empty measurement"
        );
    }

    restore(element, StyleProperty::Visibility, saved_visibility);
    restore(element, StyleProperty::Display, saved_display);

    trace!(properties = entries.len(), "captured natural size");
    cache.populate(entries);
}

/// Put an inline value back exactly as it was, removing it if it was absent.
fn restore(element: &mut dyn StyledElement, property: StyleProperty, saved: Option<String>) {
    match saved {
        Some(value) => element.set_inline_style(property, &value),
        None => element.remove_inline_style(property),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::fake::FakeElement;

    #[test]
    fn test_probe_captures_size_and_padding() {
        let mut el = FakeElement::new()
            .with_natural_height(120.0)
            .with_stylesheet(StyleProperty::PaddingTop, "10px")
            .with_stylesheet(StyleProperty::PaddingBottom, "5px");
        let mut cache = StyleCache::new();

        measure_into(&mut el, Dimension::Height, &mut cache);

        assert!(cache.is_populated());
        assert_eq!(cache.get(StyleProperty::Height), Some("120px"));
        assert_eq!(cache.get(StyleProperty::PaddingTop), Some("10px"));
        assert_eq!(cache.get(StyleProperty::PaddingBottom), Some("5px"));
    }

    #[test]
    fn test_probe_prefers_inline_padding() {
        let mut el = FakeElement::new()
            .with_natural_width(80.0)
            .with_inline(StyleProperty::PaddingLeft, "2px")
            .with_stylesheet(StyleProperty::PaddingLeft, "8px");
        let mut cache = StyleCache::new();

        measure_into(&mut el, Dimension::Width, &mut cache);

        assert_eq!(cache.get(StyleProperty::Width), Some("80px"));
        assert_eq!(cache.get(StyleProperty::PaddingLeft), Some("2px"));
        assert_eq!(cache.get(StyleProperty::PaddingRight), Some("0px"));
    }

    #[test]
    fn test_probe_restores_visibility_exactly() {
        // No prior inline visibility: the override must be removed again.
        let mut el = FakeElement::new().with_natural_height(40.0);
        let mut cache = StyleCache::new();
        measure_into(&mut el, Dimension::Height, &mut cache);
        assert_eq!(el.inline_style(StyleProperty::Visibility), None);

        // A prior inline visibility must come back verbatim.
        let mut el = FakeElement::new()
            .with_natural_height(40.0)
            .with_inline(StyleProperty::Visibility, "visible");
        let mut cache = StyleCache::new();
        measure_into(&mut el, Dimension::Height, &mut cache);
        assert_eq!(
            el.inline_style(StyleProperty::Visibility).as_deref(),
            Some("visible")
        );
    }

    #[test]
    fn test_probe_is_idempotent_within_a_cycle() {
        let mut el = FakeElement::new().with_natural_height(120.0);
        let mut cache = StyleCache::new();

        measure_into(&mut el, Dimension::Height, &mut cache);
        let first = cache.get(StyleProperty::Height).map(str::to_string);
        assert_eq!(el.layout_reads.get(), 1);

        // Second call: same values, no further layout read.
        measure_into(&mut el, Dimension::Height, &mut cache);
        assert_eq!(cache.get(StyleProperty::Height), first.as_deref());
        assert_eq!(el.layout_reads.get(), 1);
    }

    #[test]
    fn test_probe_without_layout_box_caches_empty() {
        let mut el = FakeElement::detached();
        let mut cache = StyleCache::new();

        measure_into(&mut el, Dimension::Height, &mut cache);

        assert!(cache.is_populated());
        assert!(cache.is_empty());
        // Visibility override was still cleaned up.
        assert_eq!(el.inline_style(StyleProperty::Visibility), None);
    }
}
