//! The twelve lifecycle hooks and the bridge that relays them.
//!
//! A declarative transition host drives a phase by invoking named hooks.
//! The bridge forwards every hook unchanged to a caller-supplied
//! [`PhaseObserver`], so a caller relying purely on the host's standard
//! notification contract sees identical semantics — and the four driving
//! hooks (`enter`, `after-enter`, `leave`, `after-leave`) additionally get
//! the sizing behavior for free:
//!
//! - `enter` / `leave` run the sequencer's mutation steps, hand the
//!   observer a shared [`CompletionHandle`] to the host's callback, and
//!   schedule the same handle for completion
//! - `after-enter` / `after-leave` settle the phase before re-emitting
//! - the `-cancelled` hooks retract the pending completion, then re-emit;
//!   inline styles are left as-is (see the sequencer docs)
//!
//! The `appear` family is pure pass-through.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::config::CollapseConfig;
use crate::element::StyledElement;
use crate::sequencer::{CompletionFn, CompletionHandle, PhaseKind, TransitionSequencer};
use crate::style::Dimension;

/// The twelve phase hook names a transition host can invoke.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PhaseHook {
    BeforeAppear,
    Appear,
    AfterAppear,
    AppearCancelled,
    BeforeEnter,
    Enter,
    AfterEnter,
    EnterCancelled,
    BeforeLeave,
    Leave,
    AfterLeave,
    LeaveCancelled,
}

impl PhaseHook {
    /// All twelve hooks, in host invocation families.
    pub const ALL: [Self; 12] = [
        Self::BeforeAppear,
        Self::Appear,
        Self::AfterAppear,
        Self::AppearCancelled,
        Self::BeforeEnter,
        Self::Enter,
        Self::AfterEnter,
        Self::EnterCancelled,
        Self::BeforeLeave,
        Self::Leave,
        Self::AfterLeave,
        Self::LeaveCancelled,
    ];

    /// The kebab-case event name the host uses.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BeforeAppear => "before-appear",
            Self::Appear => "appear",
            Self::AfterAppear => "after-appear",
            Self::AppearCancelled => "appear-cancelled",
            Self::BeforeEnter => "before-enter",
            Self::Enter => "enter",
            Self::AfterEnter => "after-enter",
            Self::EnterCancelled => "enter-cancelled",
            Self::BeforeLeave => "before-leave",
            Self::Leave => "leave",
            Self::AfterLeave => "after-leave",
            Self::LeaveCancelled => "leave-cancelled",
        }
    }
}

/// Caller-facing notification surface: one method per hook, every default
/// body empty so observers override only what they care about.
///
/// `on_enter`/`on_leave` receive the same completion the host delivered,
/// as a shared handle: the observer may resolve it to finish the phase on
/// its own signal, or hold it and let the scheduled completion fire.
#[allow(unused_variables)]
pub trait PhaseObserver {
    fn on_before_appear(&mut self, element: &mut dyn StyledElement) {}
    fn on_appear(&mut self, element: &mut dyn StyledElement) {}
    fn on_after_appear(&mut self, element: &mut dyn StyledElement) {}
    fn on_appear_cancelled(&mut self, element: &mut dyn StyledElement) {}
    fn on_before_enter(&mut self, element: &mut dyn StyledElement) {}
    fn on_enter(&mut self, element: &mut dyn StyledElement, done: CompletionHandle) {}
    fn on_after_enter(&mut self, element: &mut dyn StyledElement) {}
    fn on_enter_cancelled(&mut self, element: &mut dyn StyledElement) {}
    fn on_before_leave(&mut self, element: &mut dyn StyledElement) {}
    fn on_leave(&mut self, element: &mut dyn StyledElement, done: CompletionHandle) {}
    fn on_after_leave(&mut self, element: &mut dyn StyledElement) {}
    fn on_leave_cancelled(&mut self, element: &mut dyn StyledElement) {}
}

/// Bridge between a transition host's hooks, the sequencer, and the
/// caller's observer.
#[derive(Debug)]
pub struct CollapseTransition<O: PhaseObserver> {
    sequencer: TransitionSequencer,
    observer: O,
}

impl<O: PhaseObserver> CollapseTransition<O> {
    /// Create a controller from a configuration and observer.
    pub fn new(config: CollapseConfig, observer: O) -> Self {
        Self {
            sequencer: TransitionSequencer::new(config),
            observer,
        }
    }

    /// Create a controller with the default configuration.
    pub fn with_observer(observer: O) -> Self {
        Self::new(CollapseConfig::default(), observer)
    }

    /// The class-name prefix the host's transition primitive applies.
    pub fn transition_name(&self) -> &str {
        &self.sequencer.config().name
    }

    /// Borrow the underlying sequencer.
    pub fn sequencer(&self) -> &TransitionSequencer {
        &self.sequencer
    }

    /// Borrow the observer.
    pub fn observer(&self) -> &O {
        &self.observer
    }

    /// Change the transition axis; a changed axis drops any cached
    /// measurement.
    pub fn set_dimension(&mut self, dimension: Dimension) {
        self.sequencer.set_dimension(dimension);
    }

    /// Advance scheduled time, firing a due phase completion.
    pub fn advance(&mut self, delta_ms: f32) -> bool {
        self.sequencer.advance(delta_ms)
    }

    // Appear family: pass-through only.

    pub fn before_appear(&mut self, element: &mut dyn StyledElement) {
        trace!(hook = PhaseHook::BeforeAppear.as_str(), "forwarding hook");
        self.observer.on_before_appear(element);
    }

    pub fn appear(&mut self, element: &mut dyn StyledElement) {
        trace!(hook = PhaseHook::Appear.as_str(), "forwarding hook");
        self.observer.on_appear(element);
    }

    pub fn after_appear(&mut self, element: &mut dyn StyledElement) {
        trace!(hook = PhaseHook::AfterAppear.as_str(), "forwarding hook");
        self.observer.on_after_appear(element);
    }

    pub fn appear_cancelled(&mut self, element: &mut dyn StyledElement) {
        trace!(hook = PhaseHook::AppearCancelled.as_str(), "forwarding hook");
        self.sequencer.cancel_pending();
        self.observer.on_appear_cancelled(element);
    }

    // Enter family.

    pub fn before_enter(&mut self, element: &mut dyn StyledElement) {
        trace!(hook = PhaseHook::BeforeEnter.as_str(), "forwarding hook");
        self.observer.on_before_enter(element);
    }

    /// Expand phase: steps 1-6, phase-started notification carrying the
    /// shared completion, completion scheduling, in that order.
    pub fn enter(&mut self, element: &mut dyn StyledElement, done: CompletionFn) {
        trace!(hook = PhaseHook::Enter.as_str(), "forwarding hook");
        self.sequencer.begin_phase(element, PhaseKind::Expand);
        let done = CompletionHandle::new(done);
        self.observer.on_enter(element, done.clone());
        self.sequencer.schedule_completion(done);
    }

    /// Settle the expand phase, then re-emit.
    pub fn after_enter(&mut self, element: &mut dyn StyledElement) {
        trace!(hook = PhaseHook::AfterEnter.as_str(), "forwarding hook");
        self.sequencer.settle(element);
        self.observer.on_after_enter(element);
    }

    pub fn enter_cancelled(&mut self, element: &mut dyn StyledElement) {
        trace!(hook = PhaseHook::EnterCancelled.as_str(), "forwarding hook");
        self.sequencer.cancel_pending();
        self.observer.on_enter_cancelled(element);
    }

    // Leave family.

    pub fn before_leave(&mut self, element: &mut dyn StyledElement) {
        trace!(hook = PhaseHook::BeforeLeave.as_str(), "forwarding hook");
        self.observer.on_before_leave(element);
    }

    /// Collapse phase: the expand sequence with start and end states
    /// swapped, including the defensive measurement for elements that start
    /// closed.
    pub fn leave(&mut self, element: &mut dyn StyledElement, done: CompletionFn) {
        trace!(hook = PhaseHook::Leave.as_str(), "forwarding hook");
        self.sequencer.begin_phase(element, PhaseKind::Collapse);
        let done = CompletionHandle::new(done);
        self.observer.on_leave(element, done.clone());
        self.sequencer.schedule_completion(done);
    }

    /// Settle the collapse phase, then re-emit.
    pub fn after_leave(&mut self, element: &mut dyn StyledElement) {
        trace!(hook = PhaseHook::AfterLeave.as_str(), "forwarding hook");
        self.sequencer.settle(element);
        self.observer.on_after_leave(element);
    }

    pub fn leave_cancelled(&mut self, element: &mut dyn StyledElement) {
        trace!(hook = PhaseHook::LeaveCancelled.as_str(), "forwarding hook");
        self.sequencer.cancel_pending();
        self.observer.on_leave_cancelled(element);
    }
}
