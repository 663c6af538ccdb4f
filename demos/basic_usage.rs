//! Basic usage example for event-notifier.
//!
//! Demonstrates:
//! - Registering listeners for a capability trait
//! - Broadcasting with `invoke()` and `try_invoke()`
//! - Listeners disappearing when their owner drops them
//! - Watching notifier operations with a trace callback
//!
//! Run with: `cargo run --example basic_usage`

use event_notifier::{define_notifier, EventNotifier, NotifierApi};
use std::sync::Arc;

pub trait Foo: Send + Sync {
    fn bar(&self);
}

struct Example {
    name: &'static str,
}

impl Foo for Example {
    fn bar(&self) {
        println!("   bar from {}", self.name);
    }
}

// A global notifier, reachable from anywhere in the program
define_notifier!(on_bar, dyn Foo);

fn main() {
    println!("=== event-notifier: Basic Usage ===\n");

    // -------------------------------------------------------------------------
    // 1. Add a listener and broadcast
    // -------------------------------------------------------------------------
    println!("1. Adding a listener and invoking...");

    let notifier = EventNotifier::<dyn Foo>::new();
    let example: Arc<dyn Foo> = Arc::new(Example { name: "example" });
    notifier.add_listener(&example);

    notifier.invoke(|listener| listener.bar());
    println!("   is_empty: {}", notifier.is_empty());

    // -------------------------------------------------------------------------
    // 2. Listeners are held weakly
    // -------------------------------------------------------------------------
    println!("\n2. Dropping the only owner...");

    drop(example);
    println!("   is_empty: {}", notifier.is_empty());

    // -------------------------------------------------------------------------
    // 3. Fail-fast broadcasts
    // -------------------------------------------------------------------------
    println!("\n3. Stopping a broadcast at the first error...");

    let first: Arc<dyn Foo> = Arc::new(Example { name: "first" });
    let second: Arc<dyn Foo> = Arc::new(Example { name: "second" });
    notifier.add_listener(&first);
    notifier.add_listener(&second);

    let result = notifier.try_invoke(|listener| {
        listener.bar();
        Err("first listener refused")
    });
    println!("   result: {:?}", result);

    // -------------------------------------------------------------------------
    // 4. Global notifier with tracing
    // -------------------------------------------------------------------------
    println!("\n4. Tracing a global notifier...");

    on_bar::set_trace_callback(|event| println!("   [trace] {}", event));

    on_bar::add_listener(&first);
    on_bar::add_listener(&first);
    on_bar::invoke(|listener| listener.bar());
    on_bar::remove_listener(&second);

    on_bar::clear_trace_callback();

    println!("\n=== Done ===");
}
