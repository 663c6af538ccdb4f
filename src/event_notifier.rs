//! A thread-safe notifier that multicasts actions to weakly-held listeners.
//!
//! # Examples
//!
//! ```
//! use event_notifier::{EventNotifier, NotifierApi};
//! use std::sync::Arc;
//!
//! trait Foo: Send + Sync {
//!     fn bar(&self) -> &'static str;
//! }
//!
//! struct Example;
//!
//! impl Foo for Example {
//!     fn bar(&self) -> &'static str {
//!         "bar"
//!     }
//! }
//!
//! let notifier = EventNotifier::<dyn Foo>::new();
//! let example: Arc<dyn Foo> = Arc::new(Example);
//! notifier.add_listener(&example);
//!
//! let mut said = Vec::new();
//! notifier.invoke(|listener| said.push(listener.bar()));
//!
//! assert_eq!(said, ["bar"]);
//! assert!(!notifier.is_empty());
//! ```

use std::{
    fmt,
    sync::{Mutex, Weak},
};

use crate::{NotifierApi, TraceSlot};

/// Holds weak handles to listeners implementing `T` and broadcasts actions to them.
///
/// All operations live on [`NotifierApi`]; bring it into scope to use them.
/// `EventNotifier<T>` is `Send + Sync` whenever `T: Send + Sync`.
pub struct EventNotifier<T: ?Sized> {
    listeners: Mutex<Vec<Weak<T>>>,
    trace: TraceSlot,
}

impl<T: ?Sized> EventNotifier<T> {
    /// Creates an empty notifier.
    pub const fn new() -> Self {
        Self {
            listeners: Mutex::new(Vec::new()),
            trace: Mutex::new(None),
        }
    }
}

impl<T: ?Sized> Default for EventNotifier<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ?Sized> NotifierApi<T> for EventNotifier<T> {
    fn storage(&self) -> &Mutex<Vec<Weak<T>>> {
        &self.listeners
    }

    fn trace(&self) -> &TraceSlot {
        &self.trace
    }
}

impl<T: ?Sized> fmt::Debug for EventNotifier<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventNotifier")
            .field("type_name", &std::any::type_name::<T>())
            .field("listeners", &self.len())
            .finish()
    }
}
