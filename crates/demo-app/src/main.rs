//! Console demo: one expand/collapse cycle on an in-memory element.
//!
//! Plays the host role: invokes the lifecycle hooks in order, steps a clock
//! until the scheduled completion fires, then settles through the after-*
//! hooks. Logs every style write so the mutation order is visible.

use std::cell::Cell;
use std::collections::BTreeMap;
use std::rc::Rc;

use anyhow::Result;
use collapse_transition::{
    CollapseConfig, CollapseTransition, CompletionHandle, Dimension, PhaseObserver, StyleProperty,
    StyledElement,
};
use tracing::info;

/// In-memory element with inline styles layered over a stylesheet.
#[derive(Debug)]
struct DemoElement {
    inline: BTreeMap<StyleProperty, String>,
    stylesheet: BTreeMap<StyleProperty, String>,
    natural_height: f32,
}

impl DemoElement {
    fn panel() -> Self {
        let mut stylesheet = BTreeMap::new();
        stylesheet.insert(StyleProperty::PaddingTop, "10px".to_string());
        stylesheet.insert(StyleProperty::PaddingBottom, "5px".to_string());
        Self {
            inline: BTreeMap::new(),
            stylesheet,
            natural_height: 120.0,
        }
    }
}

impl StyledElement for DemoElement {
    fn inline_style(&self, property: StyleProperty) -> Option<String> {
        self.inline.get(&property).cloned()
    }

    fn set_inline_style(&mut self, property: StyleProperty, value: &str) {
        info!(property = property.key(), value, "style write");
        self.inline.insert(property, value.to_string());
    }

    fn remove_inline_style(&mut self, property: StyleProperty) {
        info!(property = property.key(), "style remove");
        self.inline.remove(&property);
    }

    fn computed_style(&self, property: StyleProperty) -> Option<String> {
        self.inline
            .get(&property)
            .or_else(|| self.stylesheet.get(&property))
            .cloned()
    }

    fn layout_size(&self, dimension: Dimension) -> Option<f32> {
        match dimension {
            Dimension::Height => Some(self.natural_height),
            Dimension::Width => None,
        }
    }

    fn flush_pending_layout(&mut self) {
        info!("layout flush");
    }
}

/// Observer that logs every forwarded hook.
struct LoggingObserver;

impl PhaseObserver for LoggingObserver {
    fn on_before_enter(&mut self, _el: &mut dyn StyledElement) {
        info!("hook: before-enter");
    }
    fn on_enter(&mut self, _el: &mut dyn StyledElement, _done: CompletionHandle) {
        info!("hook: enter");
    }
    fn on_after_enter(&mut self, _el: &mut dyn StyledElement) {
        info!("hook: after-enter");
    }
    fn on_before_leave(&mut self, _el: &mut dyn StyledElement) {
        info!("hook: before-leave");
    }
    fn on_leave(&mut self, _el: &mut dyn StyledElement, _done: CompletionHandle) {
        info!("hook: leave");
    }
    fn on_after_leave(&mut self, _el: &mut dyn StyledElement) {
        info!("hook: after-leave");
    }
}

/// Step the controller's clock in frame-sized increments until `done` fires.
fn wait_for_completion(
    transition: &mut CollapseTransition<LoggingObserver>,
    done: &Rc<Cell<bool>>,
) {
    let mut elapsed = 0.0;
    while !done.get() {
        transition.advance(16.0);
        elapsed += 16.0;
    }
    info!(elapsed_ms = elapsed, "phase completed");
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    let mut el = DemoElement::panel();
    let mut transition =
        CollapseTransition::new(CollapseConfig::default().with_name("panel"), LoggingObserver);

    info!(name = transition.transition_name(), "expanding");
    let expanded = Rc::new(Cell::new(false));
    let done = {
        let expanded = Rc::clone(&expanded);
        Box::new(move || expanded.set(true))
    };
    transition.before_enter(&mut el);
    transition.enter(&mut el, done);
    wait_for_completion(&mut transition, &expanded);
    transition.after_enter(&mut el);

    info!("collapsing");
    let collapsed = Rc::new(Cell::new(false));
    let done = {
        let collapsed = Rc::clone(&collapsed);
        Box::new(move || collapsed.set(true))
    };
    transition.before_leave(&mut el);
    transition.leave(&mut el, done);
    wait_for_completion(&mut transition, &collapsed);
    transition.after_leave(&mut el);

    info!(inline_overrides = el.inline.len(), "cycle finished");
    Ok(())
}
