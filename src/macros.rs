//! Public macros for ergonomic, panicking resolution.

/// Resolves a dependency from a container, panicking if it cannot be
/// located.
///
/// The two-argument form returns the raw [`Object`](crate::Object); the
/// three-argument form additionally downcasts to a concrete type. For a
/// non-panicking version, use [`Container::resolve`](crate::Container::resolve)
/// directly.
///
/// # Examples
///
/// ```
/// use weft_ioc::{resolve, Container};
///
/// let container = Container::new();
/// container.register_value("message", String::from("hello"));
///
/// let message = resolve!(container, String, "message");
/// assert_eq!(*message, "hello");
/// ```
#[macro_export]
macro_rules! resolve {
  // Raw object form: resolve!(container, "name")
  ($container:expr, $name:expr) => {
    $container.resolve($name).unwrap_or_else(|e| {
      panic!("failed to resolve required dependency '{}': {}", $name, e)
    })
  };

  // Typed form: resolve!(container, MyService, "name")
  ($container:expr, $ty:ty, $name:expr) => {
    $crate::resolve!($container, $name)
      .downcast::<$ty>()
      .unwrap_or_else(|| {
        panic!(
          "dependency '{}' is not a {}",
          $name,
          ::std::any::type_name::<$ty>()
        )
      })
  };
}
