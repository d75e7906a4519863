use std::rc::Rc;

use pretty_assertions::assert_eq;
use weft_ioc::{Container, Object, Policy, Provider, ResolveError};

// --- Test Fixtures ---

struct Widget;

struct Holder {
  widget: Rc<Widget>,
}

fn widget_provider() -> Provider {
  Provider::construct(|| Object::new(Widget))
}

fn holder_provider() -> Provider {
  Provider::blueprint(["widget"], |mut deps| {
    let widget = deps
      .remove(0)
      .downcast::<Widget>()
      .expect("widget dependency");
    Object::new(Holder { widget })
  })
}

// --- Basic Tests ---

#[test]
fn blueprint_resolutions_yield_distinct_instances() {
  // Arrange
  let container = Container::new();
  container.register("widget", widget_provider());

  // Act
  let w1 = container.resolve("widget").unwrap();
  let w2 = container.resolve("widget").unwrap();

  // Assert
  assert!(w1.is::<Widget>());
  assert!(w2.is::<Widget>());
  assert!(!w1.ptr_eq(&w2));
}

#[test]
fn value_resolutions_share_the_registered_instance() {
  // Arrange
  let container = Container::new();
  let value = Object::new(Widget);
  container.register("widget", Provider::object(value.clone()));

  // Act
  let w1 = container.resolve("widget").unwrap();
  let w2 = container.resolve("widget").unwrap();

  // Assert
  assert!(w1.ptr_eq(&value));
  assert!(w2.ptr_eq(&value));
}

#[test]
fn single_instance_resolutions_share_one_object() {
  // Arrange: a single-instance component over a transient dependency. The
  // component is built once, so the dependency it captured is shared too.
  let container = Container::new();
  container.register_with("component", holder_provider(), Policy::single());
  container.register("widget", widget_provider());

  // Act
  let c1 = container.resolve("component").unwrap();
  let c2 = container.resolve("component").unwrap();

  // Assert
  assert!(c1.ptr_eq(&c2));
  let c1 = c1.downcast::<Holder>().unwrap();
  let c2 = c2.downcast::<Holder>().unwrap();
  assert!(Rc::ptr_eq(&c1.widget, &c2.widget));
}

#[test]
fn dependency_is_wired_by_name() {
  // Arrange
  let container = Container::new();
  container.register("component", holder_provider());
  container.register("widget", widget_provider());

  // Act
  let component = container.resolve("component").unwrap();

  // Assert
  assert!(component.downcast::<Holder>().is_some());
}

#[test]
fn factory_provider_produces_the_dependency() {
  // Arrange
  let container = Container::new();
  container.register("component", holder_provider());
  container.register("widget", Provider::factory(|_| Object::new(Widget)));

  // Act
  let component = container.resolve("component").unwrap();

  // Assert
  assert!(component.is::<Holder>());
}

#[test]
fn missing_dependency_reports_the_unsatisfied_name() {
  // Arrange: the component is registered, its dependency is not.
  let container = Container::new();
  container.register("component", holder_provider());

  // Act
  let err = container.resolve("component").unwrap_err();

  // Assert: the failing edge of the graph is named directly.
  assert_eq!(err, ResolveError::NotFound("widget".to_string()));
  assert!(err.to_string().contains("widget"));
}

#[test]
fn unregistered_name_fails_with_not_found() {
  let container = Container::new();

  let err = container.resolve("missing").unwrap_err();

  assert_eq!(err, ResolveError::NotFound("missing".to_string()));
}

#[test]
fn unregistered_list_fails_with_not_found() {
  let container = Container::new();

  let err = container.resolve("widget_list").unwrap_err();

  assert_eq!(err, ResolveError::NotFound("widget_list".to_string()));
}

#[test]
fn empty_name_is_rejected() {
  let container = Container::new();

  assert_eq!(
    container.resolve("").unwrap_err(),
    ResolveError::InvalidArgument
  );
}

#[test]
fn error_display_carries_the_dependency_name() {
  let err = ResolveError::NotFound("gearbox".to_string());

  assert_eq!(
    err.to_string(),
    "the requested dependency 'gearbox' could not be located"
  );
}
