//! Wiring a small object graph by name, with every provider flavor in play:
//! a pre-built value, two same-named registrations aggregated as a list, a
//! factory, a deferred factory, and an auto-generated double for the one
//! dependency nobody registered.

use std::rc::Rc;

use weft_ioc::{Container, Deferred, Double, Object, Provider};

struct Engine;

#[derive(Debug)]
struct DashboardItem;

struct Exhaust;

fn main() {
  tracing_subscriber::fmt().with_env_filter("debug").init();

  let container = Container::auto_doubling();
  container.register_value("engine", Engine);
  container.register(
    "dashboard",
    Provider::construct(|| {
      println!("creating dashboard...");
      Object::new(DashboardItem)
    }),
  );
  container.register_value("dashboard", DashboardItem);
  container.register(
    "tic_tac",
    Provider::factory(|_| Object::new(String::from("A tic-tac!"))),
  );
  container.register(
    "exhaust",
    Provider::construct(|| {
      println!("puff, puff!");
      Object::new(Exhaust)
    }),
  );
  container.register(
    "car",
    Provider::blueprint(
      ["engine", "dashboard_list", "tic_tac", "exhaust_fact", "mock_me"],
      |deps| {
        let engine: Rc<Engine> = deps[0].downcast().expect("engine");
        let dashboards: Rc<Vec<Object>> = deps[1].downcast().expect("dashboards");
        let tic_tac: Rc<String> = deps[2].downcast().expect("tic_tac");
        let exhaust: Rc<Deferred> = deps[3].downcast().expect("exhaust factory");
        let mock_me: Rc<Double> = deps[4].downcast().expect("mock");

        println!("my engine: {:p}", engine);
        println!("my dashboards: {} item(s)", dashboards.len());
        println!("my candy: {}", tic_tac);
        exhaust.call().expect("exhaust");
        exhaust.call().expect("exhaust");
        println!("something mocked: {:?}", mock_me);

        Object::new(())
      },
    ),
  );

  container.resolve("car").expect("car wiring");
}
