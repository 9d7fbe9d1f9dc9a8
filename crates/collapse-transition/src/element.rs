//! The opaque element handle the controller mutates.
//!
//! The controller never owns the target element. Every operation borrows a
//! [`StyledElement`] for its own duration only, and the handle's inline
//! styles are the single shared mutable resource of a phase — the host must
//! not touch them while a phase is in flight.

use crate::style::{Dimension, StyleProperty};

/// An element whose inline styles and layout geometry the controller drives.
///
/// Implementations wrap whatever the host renders: a DOM node, an IR node,
/// or an in-memory test element.
pub trait StyledElement {
    /// Read an inline style value, if one is set.
    fn inline_style(&self, property: StyleProperty) -> Option<String>;

    /// Set an inline style value, overriding the stylesheet.
    fn set_inline_style(&mut self, property: StyleProperty, value: &str);

    /// Remove an inline style override, reverting to stylesheet-driven values.
    fn remove_inline_style(&mut self, property: StyleProperty);

    /// Read the computed style value for a property, if the host knows one.
    fn computed_style(&self, property: StyleProperty) -> Option<String>;

    /// The laid-out size along an axis, in pixels.
    ///
    /// `None` when the element has no layout box (detached, `display: none`
    /// from the stylesheet, ...). Counts as a layout read: hosts backed by a
    /// real rendering engine compute up-to-date geometry to answer it.
    fn layout_size(&self, dimension: Dimension) -> Option<f32>;

    /// Flush pending layout so the next style write starts a new animatable
    /// state instead of coalescing with the previous one.
    ///
    /// This is the reflow barrier of the mutation sequence. Its placement is
    /// load-bearing: it must run after the closed/opened values are applied
    /// and before the transition declaration is armed.
    fn flush_pending_layout(&mut self);
}

#[cfg(test)]
pub(crate) mod fake {
    //! In-memory element for unit tests, with an operation log so tests can
    //! assert the mutation order.

    use std::cell::{Cell, RefCell};
    use std::collections::BTreeMap;

    use super::StyledElement;
    use crate::style::{Dimension, StyleProperty};

    #[derive(Debug, Default)]
    pub struct FakeElement {
        pub inline: BTreeMap<StyleProperty, String>,
        pub stylesheet: BTreeMap<StyleProperty, String>,
        pub natural_height: Option<f32>,
        pub natural_width: Option<f32>,
        pub layout_reads: Cell<usize>,
        pub layout_flushes: usize,
        log: RefCell<Vec<String>>,
    }

    impl FakeElement {
        pub fn new() -> Self {
            Self::default()
        }

        /// An element with no layout box at all.
        pub fn detached() -> Self {
            Self::default()
        }

        pub fn with_natural_height(mut self, px: f32) -> Self {
            self.natural_height = Some(px);
            self
        }

        pub fn with_natural_width(mut self, px: f32) -> Self {
            self.natural_width = Some(px);
            self
        }

        pub fn with_stylesheet(mut self, property: StyleProperty, value: &str) -> Self {
            self.stylesheet.insert(property, value.to_string());
            self
        }

        pub fn with_inline(mut self, property: StyleProperty, value: &str) -> Self {
            self.inline.insert(property, value.to_string());
            self
        }

        pub fn operations(&self) -> Vec<String> {
            self.log.borrow().clone()
        }

        fn record(&self, op: String) {
            self.log.borrow_mut().push(op);
        }
    }

    impl StyledElement for FakeElement {
        fn inline_style(&self, property: StyleProperty) -> Option<String> {
            self.inline.get(&property).cloned()
        }

        fn set_inline_style(&mut self, property: StyleProperty, value: &str) {
            self.record(format!("set {}={}", property.key(), value));
            self.inline.insert(property, value.to_string());
        }

        fn remove_inline_style(&mut self, property: StyleProperty) {
            self.record(format!("remove {}", property.key()));
            self.inline.remove(&property);
        }

        fn computed_style(&self, property: StyleProperty) -> Option<String> {
            if let Some(value) = self.inline.get(&property).or_else(|| self.stylesheet.get(&property)) {
                return Some(value.clone());
            }
            // Browsers report "0px" for unset paddings.
            match property {
                StyleProperty::PaddingTop
                | StyleProperty::PaddingBottom
                | StyleProperty::PaddingLeft
                | StyleProperty::PaddingRight => Some("0px".to_string()),
                _ => None,
            }
        }

        fn layout_size(&self, dimension: Dimension) -> Option<f32> {
            self.record(format!("read layout {}", dimension.as_str()));
            self.layout_reads.set(self.layout_reads.get() + 1);
            match dimension {
                Dimension::Height => self.natural_height,
                Dimension::Width => self.natural_width,
            }
        }

        fn flush_pending_layout(&mut self) {
            self.record("flush layout".to_string());
            self.layout_flushes += 1;
        }
    }
}
