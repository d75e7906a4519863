//! Scoped lifetimes: a connection that opens when a scope builds it and
//! closes when the scope is disposed, first with an explicit scope guard and
//! then through a parameter-injecting wrapper that scopes each call.

use std::cell::Cell;

use weft_ioc::{injected, Container, Lifecycle, Object, Provider};

struct Connection {
  open: Cell<bool>,
}

impl Connection {
  fn query(&self) -> &'static str {
    if self.open.get() {
      "42 rows"
    } else {
      "connection closed"
    }
  }
}

impl Lifecycle for Connection {
  fn enter(&self) {
    println!("opening connection");
    self.open.set(true);
  }

  fn exit(&self) {
    println!("closing connection");
    self.open.set(false);
  }
}

fn main() {
  tracing_subscriber::fmt().with_env_filter("debug").init();

  let container = Container::new();
  container.register(
    "connection",
    Provider::construct(|| {
      Object::scoped(Connection {
        open: Cell::new(false),
      })
    }),
  );

  // Explicit scope: the connection lives exactly as long as the guard.
  {
    let scope = container.scope();
    let connection = scope
      .resolve("connection")
      .expect("connection")
      .downcast::<Connection>()
      .expect("connection type");
    println!("inside scope: {}", connection.query());
  }

  // Injected wrapper: each call gets a fresh, private scope.
  let report = injected(&container, ["connection"], |args| {
    let connection = args[0].downcast::<Connection>().expect("connection type");
    println!("inside call: {}", connection.query());
  });
  report(Vec::new()).expect("first call");
  report(Vec::new()).expect("second call");
}
