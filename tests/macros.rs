use pretty_assertions::assert_eq;
use weft_ioc::{resolve, Container, Object, Provider};

// --- Test Fixtures ---

struct Widget {
  id: u32,
}

// --- Macro Tests ---

#[test]
fn typed_resolution_downcasts() {
  // Arrange
  let container = Container::new();
  container.register("widget", Provider::construct(|| Object::new(Widget { id: 7 })));

  // Act
  let widget = resolve!(container, Widget, "widget");

  // Assert
  assert_eq!(widget.id, 7);
}

#[test]
fn raw_resolution_returns_an_object() {
  // Arrange
  let container = Container::new();
  container.register_value("message", String::from("hi"));

  // Act
  let object = resolve!(container, "message");

  // Assert
  assert!(object.is::<String>());
}

#[test]
#[should_panic(expected = "failed to resolve required dependency")]
fn missing_dependency_panics() {
  let container = Container::new();
  let _ = resolve!(container, "missing");
}

#[test]
#[should_panic(expected = "is not a")]
fn wrong_type_panics() {
  let container = Container::new();
  container.register_value("message", String::from("hi"));
  let _ = resolve!(container, Widget, "message");
}
