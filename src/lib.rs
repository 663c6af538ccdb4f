//! # Event Notifier
//!
//! A multicast registry of listeners that does not keep its listeners alive.
//!
//! Listeners are registered as `Arc<T>` (or `Rc<T>` for [`LocalEventNotifier`]), where `T`
//! is usually a trait object describing the capability the listeners share. The notifier
//! only stores weak handles: once the last owner of a listener drops it, the listener
//! disappears from the notifier without any explicit removal.
//!
//! ## Quick Start
//!
//! ```rust
//! use event_notifier::{EventNotifier, NotifierApi};
//! use std::sync::Arc;
//!
//! trait Greeter: Send + Sync {
//!     fn greet(&self) -> String;
//! }
//!
//! struct English;
//!
//! impl Greeter for English {
//!     fn greet(&self) -> String {
//!         "hello".to_string()
//!     }
//! }
//!
//! let notifier = EventNotifier::<dyn Greeter>::new();
//! let english: Arc<dyn Greeter> = Arc::new(English);
//! notifier.add_listener(&english);
//!
//! let mut greetings = Vec::new();
//! notifier.invoke(|listener| greetings.push(listener.greet()));
//! assert_eq!(greetings, ["hello"]);
//!
//! // Dropping the last owner unregisters the listener
//! drop(english);
//! assert!(notifier.is_empty());
//! ```
//!
//! ## Features
//!
//! - **Weak**: The notifier never extends a listener's lifetime
//! - **Idempotent**: A listener is registered at most once, by identity
//! - **Reentrant**: Broadcast actions may add or remove listeners
//! - **Tracing support**: Optional callback for monitoring notifier operations,
//!   and the `tracing` cargo feature for forwarding them to `tracing`
//!
//! ## Main Items
//!
//! - [`EventNotifier`] - Thread-safe notifier
//! - [`LocalEventNotifier`] - Single-threaded notifier for `Rc` listeners
//! - [`NotifierApi`] - Notifier operations, implementable for custom storage
//! - [`define_notifier!`] - Declare a global notifier
//! - [`NotifierEvent`] - Events passed to trace callbacks

mod event_notifier;
mod handles;
mod local;
mod macros;
mod notifier_event;
mod notifier_trait;

// Re-export the main public API
pub use event_notifier::EventNotifier;
pub use local::LocalEventNotifier;
pub use notifier_event::NotifierEvent;
pub use notifier_trait::{NotifierApi, TraceCallback, TraceSlot};
