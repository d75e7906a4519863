//! # Weft IoC
//!
//! A hierarchical, scope-aware, name-based dependency injection container.
//!
//! Callers register named providers — pre-built values, constructible
//! blueprints, or factory callables — and later resolve an object by name;
//! the container builds or returns it, recursively resolving the declared
//! dependencies of a blueprint by name. Containers form a hierarchy: a child
//! delegates unresolved names to its parent while keeping "most local
//! registration wins" shadowing, and a disposable [`Scope`] tears down
//! everything it owns, in creation order, when it closes.
//!
//! ## Core concepts
//!
//! - **Container**: the registry for named providers, and the unit of
//!   instance ownership and disposal.
//! - **Blueprint**: a constructible registration that statically declares
//!   its dependency names in constructor order.
//! - **Name suffixes**: `<base>_list` resolves all same-named local entries
//!   as an ordered list; `<base>_fact` resolves to a [`Deferred`] factory;
//!   `<base>_fact_list` is reserved and always rejected.
//! - **Scopes**: [`Container::scope`] opens a child that disposes its owned
//!   instances when dropped, honoring the [`Lifecycle`] exit contract.
//! - **Test doubles**: an auto-doubling container fabricates a recording
//!   [`Double`] for any name it cannot locate.
//!
//! ## Quick start
//!
//! ```
//! use std::rc::Rc;
//! use weft_ioc::{Container, Object, Provider};
//!
//! struct Engine {
//!   cylinders: u32,
//! }
//!
//! struct Car {
//!   engine: Rc<Engine>,
//! }
//!
//! let container = Container::new();
//! container.register(
//!   "engine",
//!   Provider::construct(|| Object::new(Engine { cylinders: 6 })),
//! );
//! container.register(
//!   "car",
//!   Provider::blueprint(["engine"], |mut deps| {
//!     let engine = deps.remove(0).downcast::<Engine>().expect("engine dependency");
//!     Object::new(Car { engine })
//!   }),
//! );
//!
//! let car = container.resolve("car").unwrap().downcast::<Car>().unwrap();
//! assert_eq!(car.engine.cylinders, 6);
//! ```

mod container;
mod core;
mod double;
mod error;
mod inject;
mod macros;
mod object;
mod provider;

pub use container::{Container, Deferred, Scope};
pub use double::{CallRecord, Double};
pub use error::{ResolveError, Result};
pub use inject::injected;
pub use object::{Lifecycle, Object};
pub use provider::{Blueprint, Policy, Provider};
