//! Parameter-injecting call wrapper.

use crate::container::Container;
use crate::error::Result;
use crate::object::Object;

/// Wraps a callable so its declared parameters are resolved on each
/// invocation.
///
/// Every call opens a fresh child scope off `container`, resolves each
/// declared parameter name not already covered by a supplied positional
/// argument, invokes `f` with the combined ordered arguments, and disposes
/// the scope before returning — on normal return and on unwind alike, via
/// the [`Scope`](crate::Scope) guard.
///
/// ```
/// use weft_ioc::{injected, Container, Object};
///
/// let container = Container::new();
/// container.register_value("greeting", String::from("hello"));
///
/// let greet = injected(&container, ["greeting"], |args| {
///   (*args[0].downcast::<String>().unwrap()).clone()
/// });
///
/// assert_eq!(greet(Vec::new()).unwrap(), "hello");
/// ```
pub fn injected<R>(
  container: &Container,
  params: impl IntoIterator<Item = impl Into<String>>,
  f: impl Fn(Vec<Object>) -> R,
) -> impl Fn(Vec<Object>) -> Result<R> {
  let parent = container.clone();
  let params: Vec<String> = params.into_iter().map(Into::into).collect();
  move |mut args: Vec<Object>| {
    let scope = parent.scope();
    for param in params.iter().skip(args.len()) {
      args.push(scope.resolve(param)?);
    }
    Ok(f(args))
  }
}
