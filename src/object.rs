//! The dynamic value handle that flows through the object graph.

use std::any::Any;
use std::fmt;
use std::rc::Rc;

/// Scoped-resource capability for container-owned instances.
///
/// A type that declares this capability (by being registered through
/// [`Object::scoped`]) is taken in with `enter` when its owning container
/// produces it, and torn down with `exit` exactly once when that container's
/// scope is disposed. Both hooks take `&self`; use interior mutability
/// (`Cell`, `RefCell`) for any state they touch.
pub trait Lifecycle {
  /// Called once when an owning container takes the instance in.
  fn enter(&self) {}

  /// Called once when the owning container scope is disposed.
  fn exit(&self);
}

/// A shared, dynamically typed handle to a resolved value.
///
/// Everything the container hands out is an `Object`: plain instances,
/// constructed components, lists (wrapping `Vec<Object>`), deferred
/// factories (wrapping [`Deferred`](crate::Deferred)), and synthesized test
/// doubles (wrapping [`Double`](crate::Double)). Cloning an `Object` clones
/// the handle, not the value; identity is observable through [`ptr_eq`].
///
/// [`ptr_eq`]: Object::ptr_eq
#[derive(Clone)]
pub struct Object {
  value: Rc<dyn Any>,
  lifecycle: Option<Rc<dyn Lifecycle>>,
}

impl Object {
  /// Wraps a value with no lifecycle capability.
  pub fn new<T: Any>(value: T) -> Self {
    Self {
      value: Rc::new(value),
      lifecycle: None,
    }
  }

  /// Wraps an already shared value with no lifecycle capability.
  pub fn from_rc<T: Any>(value: Rc<T>) -> Self {
    Self {
      value,
      lifecycle: None,
    }
  }

  /// Wraps a value that declares the [`Lifecycle`] capability.
  ///
  /// The capability is recorded here, at construction time; the container
  /// never probes resolved values for it.
  pub fn scoped<T: Any + Lifecycle>(value: T) -> Self {
    let value = Rc::new(value);
    Self {
      lifecycle: Some(value.clone() as Rc<dyn Lifecycle>),
      value,
    }
  }

  /// Attempts to view the value as a `T`, sharing ownership on success.
  pub fn downcast<T: Any>(&self) -> Option<Rc<T>> {
    self.value.clone().downcast::<T>().ok()
  }

  /// Returns `true` if the wrapped value is a `T`.
  pub fn is<T: Any>(&self) -> bool {
    self.value.is::<T>()
  }

  /// Returns `true` if both handles point at the same value.
  pub fn ptr_eq(&self, other: &Object) -> bool {
    Rc::ptr_eq(&self.value, &other.value)
  }

  pub(crate) fn enter(&self) {
    if let Some(lifecycle) = &self.lifecycle {
      lifecycle.enter();
    }
  }

  pub(crate) fn exit(&self) {
    if let Some(lifecycle) = &self.lifecycle {
      lifecycle.exit();
    }
  }
}

impl fmt::Debug for Object {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Object")
      .field("scoped", &self.lifecycle.is_some())
      .finish_non_exhaustive()
  }
}
