//! Facade crate re-exporting the collapse-transition controller.
//!
//! See the `collapse-transition` crate for the full API.

pub use collapse_transition::{
    camel_to_kebab, CollapseConfig, CollapseError, CollapseResult, CollapseTransition,
    CompletionFn, CompletionHandle, CompletionScheduler, Dimension, Easing, PhaseHook, PhaseKind,
    PhaseObserver, PhaseState, StyleCache, StyleProperty, StyledElement, TaskId,
    TransitionSequencer,
};
