//! Core, non-public data structures for the container.

use std::cell::RefCell;
use std::collections::HashSet;

use crate::error::ResolveError;
use crate::provider::{Policy, Provider};

thread_local! {
  // The set of names currently being resolved on this thread. This is the
  // key to detecting circular dependencies.
  static RESOLVING_STACK: RefCell<HashSet<String>> = RefCell::new(HashSet::new());
}

/// An RAII guard that detects circular resolution.
///
/// Acquired once per requested name at the guarded resolution entry point;
/// parent delegation and per-parameter sub-resolution run beneath it without
/// re-acquiring, so only a genuine cycle trips it. Dropping the guard removes
/// the name from the stack.
pub(crate) struct ResolutionGuard {
  name: String,
}

impl ResolutionGuard {
  pub(crate) fn acquire(name: &str) -> Result<Self, ResolveError> {
    let fresh = RESOLVING_STACK.with(|stack| stack.borrow_mut().insert(name.to_owned()));
    if fresh {
      Ok(Self {
        name: name.to_owned(),
      })
    } else {
      Err(ResolveError::Cycle(name.to_owned()))
    }
  }
}

impl Drop for ResolutionGuard {
  fn drop(&mut self) {
    RESOLVING_STACK.with(|stack| {
      stack.borrow_mut().remove(&self.name);
    });
  }
}

/// A single registration under a name. Immutable once registered.
#[derive(Clone)]
pub(crate) struct Entry {
  pub(crate) provider: Provider,
  pub(crate) policy: Policy,
}
