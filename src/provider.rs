//! Provider payloads and registration policy.

use std::any::Any;
use std::rc::Rc;

use crate::container::Container;
use crate::object::Object;

/// Statically declared constructor descriptor for a constructible
/// registration.
///
/// A blueprint names its dependencies up front, in constructor order; the
/// resolution engine resolves each name and hands the results to the build
/// closure. Extra positional arguments supplied at resolution time satisfy
/// the leading declared parameters and are passed through ahead of the
/// resolved ones.
pub struct Blueprint {
  params: Vec<String>,
  build: Box<dyn Fn(Vec<Object>) -> Object>,
}

impl Blueprint {
  pub fn new<I, S, F>(params: I, build: F) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
    F: Fn(Vec<Object>) -> Object + 'static,
  {
    Self {
      params: params.into_iter().map(Into::into).collect(),
      build: Box::new(build),
    }
  }

  /// The declared dependency names, in constructor order.
  pub fn params(&self) -> &[String] {
    &self.params
  }

  pub(crate) fn construct(&self, args: Vec<Object>) -> Object {
    (self.build)(args)
  }
}

/// A registered binding payload: a pre-built value, a constructible
/// blueprint, or a factory callable invoked with the owning container.
#[derive(Clone)]
pub enum Provider {
  /// A pre-built value, returned as-is on every resolution.
  Value(Object),
  /// A constructible type with declared dependencies.
  Blueprint(Rc<Blueprint>),
  /// A callable producing a fresh value from the owning container.
  Factory(Rc<dyn Fn(&Container) -> Object>),
}

impl Provider {
  /// A pre-built value provider.
  pub fn value<T: Any>(value: T) -> Self {
    Provider::Value(Object::new(value))
  }

  /// A pre-built value provider from an existing [`Object`] handle.
  pub fn object(object: Object) -> Self {
    Provider::Value(object)
  }

  /// A constructible provider with declared dependency names.
  pub fn blueprint<I, S, F>(params: I, build: F) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
    F: Fn(Vec<Object>) -> Object + 'static,
  {
    Provider::Blueprint(Rc::new(Blueprint::new(params, build)))
  }

  /// A constructible provider with no dependencies.
  pub fn construct<F>(build: F) -> Self
  where
    F: Fn() -> Object + 'static,
  {
    Provider::Blueprint(Rc::new(Blueprint::new(
      Vec::<String>::new(),
      move |_| build(),
    )))
  }

  /// A factory provider, called with the owning container on each
  /// resolution.
  pub fn factory<F>(factory: F) -> Self
  where
    F: Fn(&Container) -> Object + 'static,
  {
    Provider::Factory(Rc::new(factory))
  }
}

/// Lifetime and ownership flags for a registration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Policy {
  /// At most one instance per owning container; later resolutions return
  /// the cached instance.
  pub single_instance: bool,
  /// Instances are owned by the container the resolution was requested on,
  /// rather than by the container that declared the registration.
  pub locally_owned: bool,
}

impl Default for Policy {
  fn default() -> Self {
    Self {
      single_instance: false,
      locally_owned: true,
    }
  }
}

impl Policy {
  /// Single-instance, locally owned.
  pub fn single() -> Self {
    Self {
      single_instance: true,
      ..Self::default()
    }
  }

  /// Transient, owned by the declaring container.
  pub fn declarer_owned() -> Self {
    Self {
      locally_owned: false,
      ..Self::default()
    }
  }
}
