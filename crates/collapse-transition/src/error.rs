//! Error type for the collapse-transition crate.
//!
//! The core deliberately has no failure taxonomy: past the configuration
//! boundary every operation is a defensive-default style mutation. The only
//! rejection happens when parsing a dimension keyword.

use thiserror::Error;

/// Errors produced at the configuration boundary.
#[derive(Debug, Error)]
pub enum CollapseError {
    /// The dimension keyword is not one of `height` or `width`.
    #[error("unsupported dimension '{0}': expected \"height\" or \"width\"")]
    UnsupportedDimension(String),
}

/// Convenience alias for results in this crate.
pub type CollapseResult<T> = Result<T, CollapseError>;
