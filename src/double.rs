//! A self-recording placeholder for dependencies that cannot be located.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use crate::object::Object;

/// One recorded invocation of a [`Double`].
#[derive(Clone)]
pub struct CallRecord {
  /// Positional arguments, in call order.
  pub args: Vec<Object>,
  /// Named arguments, in call order.
  pub named: Vec<(String, Object)>,
  /// The fresh double returned from this call.
  pub result: Double,
}

struct DoubleInner {
  name: String,
  attrs: RefCell<HashMap<String, Object>>,
  history: RefCell<Vec<CallRecord>>,
}

/// An auto-generated test double.
///
/// Synthesized by an auto-doubling container for any name that cannot be
/// located, and usable standalone in tests. Attribute access for an
/// unrecognized name lazily creates and memoizes a child double, so repeated
/// access under the same name returns the same object and identity
/// assertions hold. Invoking a double records the arguments together with a
/// fresh result double; each call produces a distinct result.
///
/// `Double` is a cheap-clone handle; clones share the same attribute map and
/// call history.
#[derive(Clone)]
pub struct Double {
  inner: Rc<DoubleInner>,
}

impl Double {
  pub fn new(name: &str) -> Self {
    Self {
      inner: Rc::new(DoubleInner {
        name: name.to_owned(),
        attrs: RefCell::new(HashMap::new()),
        history: RefCell::new(Vec::new()),
      }),
    }
  }

  /// The name this double was synthesized under.
  pub fn name(&self) -> &str {
    &self.inner.name
  }

  /// Attribute access: returns the memoized child under `name`, creating a
  /// fresh child double on first access.
  pub fn attr(&self, name: &str) -> Object {
    self
      .inner
      .attrs
      .borrow_mut()
      .entry(name.to_owned())
      .or_insert_with(|| Object::new(Double::new(name)))
      .clone()
  }

  /// Replaces the child under `name` with an arbitrary value, e.g. to stub
  /// in real behavior or literal data.
  pub fn set_attr(&self, name: &str, value: Object) {
    self
      .inner
      .attrs
      .borrow_mut()
      .insert(name.to_owned(), value);
  }

  /// Typed attribute access: the child double under `name`, or `None` if
  /// the slot was overridden with a non-double value.
  pub fn child(&self, name: &str) -> Option<Double> {
    self.attr(name).downcast::<Double>().map(|rc| (*rc).clone())
  }

  /// Records an argument-less invocation and returns its fresh result
  /// double.
  pub fn call(&self) -> Double {
    self.call_with(Vec::new(), Vec::new())
  }

  /// Records an invocation with positional and named arguments and returns
  /// its fresh result double.
  pub fn call_with(&self, args: Vec<Object>, named: Vec<(String, Object)>) -> Double {
    let result = Double::new(&format!("{}_result", self.inner.name));
    self.inner.history.borrow_mut().push(CallRecord {
      args,
      named,
      result: result.clone(),
    });
    result
  }

  /// The number of recorded invocations.
  pub fn call_count(&self) -> usize {
    self.inner.history.borrow().len()
  }

  /// A snapshot of the recorded invocations, in call order.
  pub fn history(&self) -> Vec<CallRecord> {
    self.inner.history.borrow().clone()
  }

  /// Returns `true` if both handles point at the same double.
  pub fn ptr_eq(&self, other: &Double) -> bool {
    Rc::ptr_eq(&self.inner, &other.inner)
  }
}

impl fmt::Debug for Double {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "<double '{}'>", self.inner.name)
  }
}
