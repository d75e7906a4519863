//! The `Container`, its resolution engine, and the scope/disposal protocol.

use std::cell::RefCell;
use std::collections::HashMap;
use std::ops::Deref;
use std::rc::{Rc, Weak};

use tracing::{debug, trace};

use crate::core::{Entry, ResolutionGuard};
use crate::double::Double;
use crate::error::{ResolveError, Result};
use crate::object::Object;
use crate::provider::{Policy, Provider};

const LIST_SUFFIX: &str = "_list";
const FACT_SUFFIX: &str = "_fact";
const FACT_LIST_SUFFIX: &str = "_fact_list";

struct ContainerInner {
  // Never owned; a dropped parent simply ends the delegation chain.
  parent: Option<Weak<ContainerInner>>,
  registry: RefCell<HashMap<String, Vec<Entry>>>,
  singles: RefCell<HashMap<String, Object>>,
  owned: RefCell<Vec<Object>>,
  auto_doubles: bool,
}

/// A hierarchical, name-based dependency injection container.
///
/// Callers register named providers ([`Provider`]) and later resolve them by
/// name; resolution recursively satisfies a blueprint's declared
/// dependencies, walking up the parent chain when a name is not registered
/// locally. A `Container` is a cheap-clone handle; clones share the same
/// registrations, single-instance cache, and disposal list.
///
/// The container is single-threaded by contract (`Rc`/`RefCell` throughout)
/// and resolution is a plain recursive call tree: it either returns a value
/// or fails synchronously with a [`ResolveError`].
///
/// # Name-suffix protocol
///
/// - `<base>_list` resolves every entry registered under `<base>` at this
///   level, in registration order. Lists never consult the parent chain.
/// - `<base>_fact` resolves to a [`Deferred`] that re-enters resolution for
///   `<base>` when called, optionally with extra positional arguments.
/// - `<base>_fact_list` is reserved and always rejected.
#[derive(Clone)]
pub struct Container {
  inner: Rc<ContainerInner>,
}

impl Default for Container {
  fn default() -> Self {
    Self::new()
  }
}

impl Container {
  fn build(parent: Option<&Container>, auto_doubles: bool) -> Self {
    Self {
      inner: Rc::new(ContainerInner {
        parent: parent.map(|p| Rc::downgrade(&p.inner)),
        registry: RefCell::new(HashMap::new()),
        singles: RefCell::new(HashMap::new()),
        owned: RefCell::new(Vec::new()),
        auto_doubles,
      }),
    }
  }

  /// Creates a new, empty root container.
  pub fn new() -> Self {
    Self::build(None, false)
  }

  /// Creates a root container that synthesizes a [`Double`] for any name
  /// that cannot be located anywhere in the hierarchy.
  pub fn auto_doubling() -> Self {
    Self::build(None, true)
  }

  /// Creates an empty child of this container.
  pub fn child(&self) -> Self {
    Self::build(Some(self), false)
  }

  /// Creates an auto-doubling child of this container.
  pub fn auto_doubling_child(&self) -> Self {
    Self::build(Some(self), true)
  }

  /// Opens a disposable child scope.
  ///
  /// The returned guard disposes the child container when dropped, whether
  /// the scope is left normally or by unwinding.
  pub fn scope(&self) -> Scope {
    Scope {
      container: self.child(),
    }
  }

  /// Wraps this container in a guard that disposes it on drop.
  pub fn into_scope(self) -> Scope {
    Scope { container: self }
  }

  fn from_weak(weak: &Weak<ContainerInner>) -> Option<Container> {
    weak.upgrade().map(|inner| Container { inner })
  }

  // --- Registration ---

  /// Registers `provider` under `name` with the default [`Policy`]
  /// (transient, locally owned).
  ///
  /// Names are not unique: the first entry registered under a name is the
  /// one used for singular resolution, while `<name>_list` aggregates all
  /// of them in registration order.
  pub fn register(&self, name: &str, provider: Provider) {
    self.register_with(name, provider, Policy::default());
  }

  /// Registers `provider` under `name` with an explicit [`Policy`].
  pub fn register_with(&self, name: &str, provider: Provider, policy: Policy) {
    debug!(
      name,
      single = policy.single_instance,
      local = policy.locally_owned,
      "registering provider"
    );
    if let Provider::Value(object) = &provider {
      // Pre-built values join the declaring container's disposal list up
      // front; they are never "constructed" later.
      self.track(object.clone());
    }
    self
      .inner
      .registry
      .borrow_mut()
      .entry(name.to_owned())
      .or_default()
      .push(Entry { provider, policy });
  }

  /// Convenience for registering a plain value under the default policy.
  pub fn register_value<T: std::any::Any>(&self, name: &str, value: T) {
    self.register(name, Provider::value(value));
  }

  // --- Resolution ---

  /// Resolves the dependency registered under `name`.
  pub fn resolve(&self, name: &str) -> Result<Object> {
    self.resolve_with(name, Vec::new())
  }

  /// Resolves `name`, threading extra positional arguments through to the
  /// eventual blueprint construction.
  ///
  /// Positional arguments satisfy a blueprint's leading declared parameters;
  /// only the remaining names are resolved from the container.
  pub fn resolve_with(&self, name: &str, args: Vec<Object>) -> Result<Object> {
    self.resolve_scoped(name, self, args)
  }

  // Guarded entry point. `requester` is the container resolution was
  // originally requested on; parent delegation passes it through unchanged
  // so that locally-owned instances stay attributed to the original
  // requester.
  pub(crate) fn resolve_scoped(
    &self,
    name: &str,
    requester: &Container,
    args: Vec<Object>,
  ) -> Result<Object> {
    if name.is_empty() {
      return Err(ResolveError::InvalidArgument);
    }
    trace!(name, "resolving dependency");
    let _guard = ResolutionGuard::acquire(name)?;
    self.lookup(name, requester, args)
  }

  fn lookup(&self, name: &str, requester: &Container, args: Vec<Object>) -> Result<Object> {
    // A list of bound factories has no defined semantics; reject before any
    // lookup.
    if name.ends_with(FACT_LIST_SUFFIX) {
      return Err(ResolveError::InvalidName(name.to_owned()));
    }

    // List resolution aggregates the same-named siblings registered at this
    // level; it never consults the parent chain.
    if let Some(base) = name.strip_suffix(LIST_SUFFIX) {
      let entries = self.inner.registry.borrow().get(base).cloned();
      let entries = entries.ok_or_else(|| ResolveError::NotFound(name.to_owned()))?;
      let mut items = Vec::with_capacity(entries.len());
      for entry in &entries {
        items.push(self.create(base, entry, requester, args.clone())?);
      }
      return Ok(Object::new(items));
    }

    // A deferred factory re-enters resolution for the base name later, with
    // the original requester still attached, so ownership attribution stays
    // stable no matter how far the factory travels.
    if let Some(base) = name.strip_suffix(FACT_SUFFIX) {
      trace!(name, "minting deferred factory");
      return Ok(Object::new(Deferred {
        scope: Rc::downgrade(&self.inner),
        requester: Rc::downgrade(&requester.inner),
        name: base.to_owned(),
      }));
    }

    // Most-local registration wins; the first entry under a name is the one
    // used for singular resolution.
    let entry = self
      .inner
      .registry
      .borrow()
      .get(name)
      .and_then(|entries| entries.first().cloned());
    if let Some(entry) = entry {
      return self.create(name, &entry, requester, args);
    }

    // Walk up the hierarchy. Any failure in an ancestor means "not found
    // there" and leaves the local fallback path in charge.
    if let Some(parent) = self.inner.parent.as_ref().and_then(Container::from_weak) {
      if let Ok(found) = parent.lookup(name, requester, args.clone()) {
        return Ok(found);
      }
    }

    if self.inner.auto_doubles {
      debug!(name, "synthesizing test double for unregistered dependency");
      return Ok(Object::new(Double::new(name)));
    }

    Err(ResolveError::NotFound(name.to_owned()))
  }

  // --- Instance creation (ownership-aware) ---

  // `self` is the declaring container here: it decides who owns the product.
  fn create(
    &self,
    name: &str,
    entry: &Entry,
    requester: &Container,
    args: Vec<Object>,
  ) -> Result<Object> {
    let owner = if entry.policy.locally_owned {
      requester.clone()
    } else {
      self.clone()
    };
    owner.create_instance(name, entry, requester, args)
  }

  // `self` is the owner: it caches single instances and keeps the disposal
  // list. Dependencies still resolve in the requester's scope.
  fn create_instance(
    &self,
    name: &str,
    entry: &Entry,
    requester: &Container,
    args: Vec<Object>,
  ) -> Result<Object> {
    if entry.policy.single_instance {
      if let Some(cached) = self.inner.singles.borrow().get(name) {
        return Ok(cached.clone());
      }
      let object = self.produce(entry, requester, args)?;
      self
        .inner
        .singles
        .borrow_mut()
        .insert(name.to_owned(), object.clone());
      return Ok(object);
    }
    self.produce(entry, requester, args)
  }

  fn produce(&self, entry: &Entry, requester: &Container, args: Vec<Object>) -> Result<Object> {
    match &entry.provider {
      // Pre-built values were entered and tracked at registration time.
      Provider::Value(object) => Ok(object.clone()),
      Provider::Blueprint(blueprint) => {
        // Positional extras satisfy the leading declared parameters; the
        // rest resolve by name in the requester's scope.
        let mut resolved = args;
        for param in blueprint.params().iter().skip(resolved.len()) {
          resolved.push(requester.resolve_scoped(param, requester, Vec::new())?);
        }
        Ok(self.track(blueprint.construct(resolved)))
      }
      Provider::Factory(factory) => Ok(self.track(factory(self))),
    }
  }

  fn track(&self, object: Object) -> Object {
    object.enter();
    self.inner.owned.borrow_mut().push(object.clone());
    object
  }

  // --- Disposal ---

  /// Disposes every instance this container owns, invoking the
  /// [`Lifecycle`](crate::Lifecycle) exit contract in creation order.
  ///
  /// The owned list is drained, so a second call is a no-op. Disposal never
  /// cascades: a child's disposal does not reach instances owned by its
  /// parent, and vice versa.
  pub fn dispose(&self) {
    let owned: Vec<Object> = self.inner.owned.borrow_mut().drain(..).collect();
    if !owned.is_empty() {
      debug!(count = owned.len(), "disposing container scope");
    }
    for object in &owned {
      object.exit();
    }
  }
}

/// A reified `<base>_fact` resolution.
///
/// Calling a `Deferred` re-enters name resolution for the base name, with
/// any supplied positional arguments threaded through to the eventual
/// construction. It holds weak references to both the container it was
/// minted from and the original requester; invoking it after either has been
/// dropped fails with [`ResolveError::ScopeClosed`].
pub struct Deferred {
  scope: Weak<ContainerInner>,
  requester: Weak<ContainerInner>,
  name: String,
}

impl Deferred {
  /// The base name this factory resolves.
  pub fn name(&self) -> &str {
    &self.name
  }

  /// Resolves a fresh value for the base name.
  pub fn call(&self) -> Result<Object> {
    self.call_with(Vec::new())
  }

  /// Resolves a fresh value, passing extra positional arguments through to
  /// the eventual blueprint construction.
  pub fn call_with(&self, args: Vec<Object>) -> Result<Object> {
    let scope = Container::from_weak(&self.scope)
      .ok_or_else(|| ResolveError::ScopeClosed(self.name.clone()))?;
    let requester = Container::from_weak(&self.requester)
      .ok_or_else(|| ResolveError::ScopeClosed(self.name.clone()))?;
    scope.resolve_scoped(&self.name, &requester, args)
  }
}

/// An RAII guard implementing the scoped-acquisition protocol.
///
/// Dropping the guard disposes the wrapped container exactly once, whether
/// the scope is left by normal return or by unwinding. Nested scopes form a
/// simple stack through ordinary drop order.
pub struct Scope {
  container: Container,
}

impl Scope {
  /// A handle to the underlying container, e.g. to parent further scopes.
  pub fn container(&self) -> &Container {
    &self.container
  }
}

impl Deref for Scope {
  type Target = Container;

  fn deref(&self) -> &Container {
    &self.container
  }
}

impl Drop for Scope {
  fn drop(&mut self) {
    self.container.dispose();
  }
}
