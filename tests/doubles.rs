use pretty_assertions::assert_eq;
use weft_ioc::{Double, Object};

// --- Double Tests ---

#[test]
fn attributes_can_be_assigned_and_read_back() {
  // Arrange
  let double = Double::new("simple");

  // Act
  double.set_attr("attribute_1", Object::new(String::from("value1")));
  double.set_attr("attribute_2", Object::new(vec![1, 2, 3, 4]));

  // Assert
  assert_eq!(
    *double.attr("attribute_1").downcast::<String>().unwrap(),
    "value1"
  );
  assert_eq!(
    *double.attr("attribute_2").downcast::<Vec<i32>>().unwrap(),
    vec![1, 2, 3, 4]
  );
}

#[test]
fn debug_representation_includes_the_name() {
  let double = Double::new("simple");

  assert!(format!("{:?}", double).contains("simple"));
}

#[test]
fn attribute_access_is_memoized() {
  // Arrange
  let double = Double::new("simple");

  // Act
  let attr_1 = double.child("attr_1").unwrap();
  let attr_2 = double.child("attr_2").unwrap();

  // Assert: distinct names give distinct children, repeated access gives
  // the same child back.
  assert!(!attr_1.ptr_eq(&attr_2));
  assert!(attr_1.ptr_eq(&double.child("attr_1").unwrap()));
  assert!(attr_2.ptr_eq(&double.child("attr_2").unwrap()));
}

#[test]
fn assignment_overrides_a_memoized_child() {
  // Arrange
  let double = Double::new("simple");
  let _auto = double.child("port").unwrap();

  // Act
  double.set_attr("port", Object::new(8080_u16));

  // Assert
  assert_eq!(*double.attr("port").downcast::<u16>().unwrap(), 8080);
  assert!(double.child("port").is_none());
}

#[test]
fn calls_are_recorded_with_arguments_and_results() {
  // Arrange
  let double = Double::new("simple");
  let func_no_args = double.child("func_no_args").unwrap();
  let func_args = double.child("func_args").unwrap();
  let func_named = double.child("func_named").unwrap();

  // Act
  let r1 = func_no_args.call();
  let r2 = func_no_args.call();
  let r3 = func_args.call_with(vec![Object::new(1_i32), Object::new(2_i32)], Vec::new());
  let r4 = func_named.call_with(
    Vec::new(),
    vec![("kwarg".to_string(), Object::new(String::from("arg")))],
  );

  // Assert: call counts per child.
  assert_eq!(func_no_args.call_count(), 2);
  assert_eq!(func_args.call_count(), 1);
  assert_eq!(func_named.call_count(), 1);

  // Assert: argument and result capture.
  let history = func_no_args.history();
  assert!(history[0].args.is_empty());
  assert!(history[0].result.ptr_eq(&r1));
  assert!(history[1].result.ptr_eq(&r2));

  let history = func_args.history();
  assert_eq!(*history[0].args[0].downcast::<i32>().unwrap(), 1);
  assert_eq!(*history[0].args[1].downcast::<i32>().unwrap(), 2);
  assert!(history[0].result.ptr_eq(&r3));

  let history = func_named.history();
  assert_eq!(history[0].named[0].0, "kwarg");
  assert_eq!(*history[0].named[0].1.downcast::<String>().unwrap(), "arg");
  assert!(history[0].result.ptr_eq(&r4));
}

#[test]
fn each_call_yields_a_fresh_result_named_after_the_double() {
  // Arrange
  let double = Double::new("simple");
  let func = double.child("func").unwrap();

  // Act
  let r1 = func.call();
  let r2 = func.call();

  // Assert
  assert!(!r1.ptr_eq(&r2));
  assert_eq!(r1.name(), "func_result");
  assert_eq!(r2.name(), "func_result");
}
