// src/error.rs

use thiserror::Error;

/// The error type for resolution failures.
///
/// Registration is infallible; every failure mode of the container surfaces
/// through `resolve` (or a deferred factory call) as one of these kinds, each
/// carrying the offending dependency name so the unsatisfied edge of the
/// object graph can be read straight off the message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ResolveError {
  /// `resolve` was called with an empty dependency name.
  #[error("resolve requires a non-empty dependency name")]
  InvalidArgument,

  /// The requested name uses a reserved suffix combination (`_fact_list`).
  #[error("the requested dependency name '{0}' is not valid")]
  InvalidName(String),

  /// No registration exists locally or in any ancestor, and test-double
  /// generation is disabled on the resolving container.
  #[error("the requested dependency '{0}' could not be located")]
  NotFound(String),

  /// The name is already being resolved further up the current call stack.
  #[error("circular dependency detected while resolving '{0}'")]
  Cycle(String),

  /// A deferred factory was invoked after the container scope it was minted
  /// from had already been dropped.
  #[error("the scope behind the deferred factory for '{0}' is gone")]
  ScopeClosed(String),
}

/// A specialized `Result` type for container operations.
pub type Result<T, E = ResolveError> = std::result::Result<T, E>;
