//! The ordered style mutations that make a dimension transition animate.
//!
//! Each phase walks the same eight steps: measure, apply the start state,
//! clamp overflow, flush layout, arm the inline transition declaration,
//! apply the end state, notify, schedule completion. The order is
//! load-bearing — without the layout flush between the two value writes the
//! rendering engine coalesces them into one state and nothing animates,
//! which shows up first on nested or lazily-rendered elements.
//!
//! The sequencer performs steps 1-6 synchronously in [`begin_phase`], leaves
//! the phase-started notification (step 7) to the lifecycle bridge, and
//! schedules completion (step 8) as a cancellable task driven by
//! [`advance`].
//!
//! [`begin_phase`]: TransitionSequencer::begin_phase
//! [`advance`]: TransitionSequencer::advance

use std::cell::RefCell;
use std::rc::Rc;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use crate::config::CollapseConfig;
use crate::element::StyledElement;
use crate::probe;
use crate::scheduler::{CompletionScheduler, TaskId};
use crate::style::{Dimension, StyleCache, StyleProperty};

/// Host completion callback, fired exactly once per phase.
pub type CompletionFn = Box<dyn FnOnce()>;

/// Shareable handle to a phase's completion callback.
///
/// The lifecycle bridge hands one clone to the observer and one to the
/// sequencer's scheduled completion. Whichever side resolves first consumes
/// the callback; every later resolve is a no-op, so completion fires
/// exactly once per phase no matter who gets there first.
#[derive(Clone)]
pub struct CompletionHandle {
    inner: Rc<RefCell<Option<CompletionFn>>>,
}

impl CompletionHandle {
    /// Wrap a host completion callback.
    pub fn new(done: CompletionFn) -> Self {
        Self {
            inner: Rc::new(RefCell::new(Some(done))),
        }
    }

    /// Fire the callback if nobody has yet.
    pub fn resolve(&self) {
        if let Some(done) = self.inner.borrow_mut().take() {
            done();
        }
    }

    /// Whether the callback has already fired.
    pub fn is_resolved(&self) -> bool {
        self.inner.borrow().is_none()
    }
}

impl std::fmt::Debug for CompletionHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CompletionHandle")
            .field("resolved", &self.is_resolved())
            .finish()
    }
}

/// Direction of a phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PhaseKind {
    /// Animate from zero to natural size (enter).
    Expand,
    /// Animate from natural size to zero (leave).
    Collapse,
}

/// Per-invocation state of the mutation sequence.
///
/// `Idle` through `PostTransitionStyled` advance synchronously inside one
/// `begin_phase` call; `Settled` is reached during settle and immediately
/// returns to `Idle` after cleanup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PhaseState {
    Idle,
    Measuring,
    PreTransitionStyled,
    Reflowed,
    TransitionArmed,
    PostTransitionStyled,
    Settled,
}

#[derive(Debug)]
struct PendingCompletion {
    task: TaskId,
}

/// Drives the style mutation sequence for expand and collapse phases.
pub struct TransitionSequencer {
    config: CollapseConfig,
    cache: StyleCache,
    scheduler: CompletionScheduler,
    state: PhaseState,
    pending: Option<PendingCompletion>,
    done: Option<CompletionHandle>,
}

impl TransitionSequencer {
    /// Create a sequencer for the given configuration.
    pub fn new(config: CollapseConfig) -> Self {
        Self {
            config,
            cache: StyleCache::new(),
            scheduler: CompletionScheduler::new(),
            state: PhaseState::Idle,
            pending: None,
            done: None,
        }
    }

    /// Current configuration.
    pub fn config(&self) -> &CollapseConfig {
        &self.config
    }

    /// Current cycle cache.
    pub fn cache(&self) -> &StyleCache {
        &self.cache
    }

    /// Current sequence state.
    pub fn state(&self) -> PhaseState {
        self.state
    }

    /// Change the transition axis, invalidating any cached measurement.
    ///
    /// A stale measurement taken along the old axis must never drive the
    /// next phase. Intended for idle reconfiguration; the host serializes
    /// phases per element.
    pub fn set_dimension(&mut self, dimension: Dimension) {
        if self.config.dimension != dimension {
            debug!(
                from = self.config.dimension.as_str(),
                to = dimension.as_str(),
                "dimension changed, invalidating cached measurement"
            );
            self.config.dimension = dimension;
            self.cache.clear();
        }
    }

    /// Execute steps 1-6 of a phase synchronously, in order.
    ///
    /// For an expand the start state is closed (every cached property `0`)
    /// and the end state is opened (the cached natural values); a collapse
    /// swaps the two. The collapse measurement doubles as the defensive
    /// guard for elements that start closed without ever having expanded:
    /// when the cache is already populated it is a no-op.
    pub fn begin_phase(&mut self, element: &mut dyn StyledElement, kind: PhaseKind) {
        if self.pending.is_some() {
            warn!(?kind, "phase started while a completion is still pending");
        }
        debug!(
            ?kind,
            dimension = self.config.dimension.as_str(),
            "beginning phase"
        );

        // 1. Measure (no-op if this cycle already has a measurement).
        self.state = PhaseState::Measuring;
        probe::measure_into(element, self.config.dimension, &mut self.cache);

        // 2. Start state.
        match kind {
            PhaseKind::Expand => self.apply_closed(element),
            PhaseKind::Collapse => self.apply_opened(element),
        }
        self.state = PhaseState::PreTransitionStyled;

        // 3. Clamp overflow so content does not bleed mid-animation.
        element.set_inline_style(StyleProperty::Overflow, "hidden");

        // 4. Layout flush: the next write must be a new animatable state,
        //    not coalesced with step 2.
        element.flush_pending_layout();
        self.state = PhaseState::Reflowed;

        // 5. Arm the transition declaration (nothing to arm for an empty
        //    measurement; the phase still runs and completes).
        let declaration = self
            .cache
            .transition_declaration(self.config.duration_ms, &self.config.easing);
        if !declaration.is_empty() {
            trace!(%declaration, "arming transition");
            element.set_inline_style(StyleProperty::Transition, &declaration);
        }
        self.state = PhaseState::TransitionArmed;

        // 6. End state.
        match kind {
            PhaseKind::Expand => self.apply_opened(element),
            PhaseKind::Collapse => self.apply_closed(element),
        }
        self.state = PhaseState::PostTransitionStyled;
    }

    /// Schedule the phase's completion (step 8).
    ///
    /// The handle resolves through [`advance`] once the configured duration
    /// has elapsed — never earlier, and a handle some other holder already
    /// resolved is not fired again.
    ///
    /// [`advance`]: TransitionSequencer::advance
    pub fn schedule_completion(&mut self, done: CompletionHandle) -> TaskId {
        let task = self.scheduler.schedule(self.config.duration_ms);
        trace!(
            duration_ms = self.config.duration_ms,
            "scheduled phase completion"
        );
        self.pending = Some(PendingCompletion { task });
        self.done = Some(done);
        task
    }

    /// Advance scheduled time. Fires the pending completion callback when
    /// its delay has elapsed; returns whether it fired.
    pub fn advance(&mut self, delta_ms: f32) -> bool {
        let due = self.scheduler.advance(delta_ms);
        let fired = matches!(&self.pending, Some(p) if due.contains(&p.task));
        if fired {
            self.pending = None;
            if let Some(done) = self.done.take() {
                debug!("phase completion fired");
                done.resolve();
            }
        }
        fired
    }

    /// Settle the phase: remove every transitional override and clear the
    /// cycle cache, reverting the element to stylesheet-driven values.
    pub fn settle(&mut self, element: &mut dyn StyledElement) {
        self.state = PhaseState::Settled;
        element.remove_inline_style(StyleProperty::Overflow);
        element.remove_inline_style(StyleProperty::Transition);
        let cached: Vec<StyleProperty> = self.cache.iter().map(|(p, _)| p).collect();
        for property in cached {
            element.remove_inline_style(property);
        }
        self.cache.clear();
        if let Some(pending) = self.pending.take() {
            self.scheduler.cancel(pending.task);
        }
        self.done = None;
        self.state = PhaseState::Idle;
        debug!("phase settled");
    }

    /// Retract the pending completion after the host cancelled the phase.
    ///
    /// Inline overrides are deliberately left in place: cancellation
    /// performs no style cleanup, only the scheduled callback is withdrawn
    /// so it cannot fire after the host has moved on.
    pub fn cancel_pending(&mut self) {
        if let Some(pending) = self.pending.take() {
            self.scheduler.cancel(pending.task);
            debug!("pending completion retracted after cancellation");
        }
        self.done = None;
        self.state = PhaseState::Idle;
    }

    fn apply_closed(&self, element: &mut dyn StyledElement) {
        for (property, _) in self.cache.iter() {
            element.set_inline_style(property, "0");
        }
    }

    fn apply_opened(&self, element: &mut dyn StyledElement) {
        for (property, value) in self.cache.iter() {
            element.set_inline_style(property, value);
        }
    }
}

impl std::fmt::Debug for TransitionSequencer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TransitionSequencer")
            .field("config", &self.config)
            .field("cache", &self.cache)
            .field("state", &self.state)
            .field("pending", &self.pending)
            .finish()
    }
}
