//! Collapse/expand dimension transitions for elements whose natural size
//! is not known in advance.
//!
//! This crate provides:
//! - **Probe**: Flash-free measurement of an element's natural size
//! - **Style Cache**: Per-cycle cache of the measured size and padding
//! - **Sequencer**: The ordered style mutations and reflow barrier that make
//!   a CSS transition animate from zero to natural size and back
//! - **Lifecycle Bridge**: The twelve phase hooks a transition host invokes,
//!   forwarded unchanged to a caller-supplied observer
//!
//! # Architecture
//!
//! ```text
//! host hooks
//!   └── CollapseTransition (bridge + observer fan-out)
//!         └── TransitionSequencer (ordered mutations + completion)
//!               ├── probe (measure natural size once per cycle)
//!               ├── StyleCache (cached size/padding, transition string)
//!               └── CompletionScheduler (cancellable phase completion)
//! ```
//!
//! The crate never runs the animation itself: it arms an inline CSS
//! `transition` declaration and leaves the interpolation to the rendering
//! host. The target element is an opaque [`StyledElement`] handle, borrowed
//! for the duration of each operation and never retained.

pub mod config;
pub mod easing;
pub mod element;
pub mod error;
pub mod hooks;
pub mod probe;
pub mod scheduler;
pub mod sequencer;
pub mod style;

pub use config::CollapseConfig;
pub use easing::Easing;
pub use element::StyledElement;
pub use error::{CollapseError, CollapseResult};
pub use hooks::{CollapseTransition, PhaseHook, PhaseObserver};
pub use scheduler::{CompletionScheduler, TaskId};
pub use sequencer::{CompletionFn, CompletionHandle, PhaseKind, PhaseState, TransitionSequencer};
pub use style::{camel_to_kebab, Dimension, StyleCache, StyleProperty};
