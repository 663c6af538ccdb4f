//! Single-threaded notifier for listeners held in `Rc`.
//!
//! Mirrors the [`NotifierApi`](crate::NotifierApi) operations for listeners that are not
//! `Send + Sync`. Borrows of the internal list are never held while user code runs,
//! so actions and trace callbacks may re-enter the notifier.

use std::any::type_name;
use std::cell::RefCell;
use std::convert::Infallible;
use std::fmt;
use std::rc::{Rc, Weak};

use crate::handles;
use crate::notifier_event::forward_to_tracing;
use crate::NotifierEvent;

type LocalTraceCallback = dyn Fn(&NotifierEvent) + 'static;

/// `Rc`-based counterpart of [`EventNotifier`](crate::EventNotifier).
///
/// # Examples
///
/// ```
/// use event_notifier::LocalEventNotifier;
/// use std::cell::Cell;
/// use std::rc::Rc;
///
/// let notifier = LocalEventNotifier::<Cell<u32>>::new();
/// let counter = Rc::new(Cell::new(0));
/// notifier.add_listener(&counter);
///
/// notifier.invoke(|c| c.set(c.get() + 1));
/// assert_eq!(counter.get(), 1);
///
/// drop(counter);
/// assert!(notifier.is_empty());
/// ```
pub struct LocalEventNotifier<T: ?Sized> {
    listeners: RefCell<Vec<Weak<T>>>,
    trace: RefCell<Option<Rc<LocalTraceCallback>>>,
}

impl<T: ?Sized> LocalEventNotifier<T> {
    /// Creates an empty notifier.
    pub const fn new() -> Self {
        Self {
            listeners: RefCell::new(Vec::new()),
            trace: RefCell::new(None),
        }
    }

    /// Set a tracing callback for notifier operations.
    pub fn set_trace_callback(&self, callback: impl Fn(&NotifierEvent) + 'static) {
        *self.trace.borrow_mut() = Some(Rc::new(callback));
    }

    /// Clear the tracing callback.
    pub fn clear_trace_callback(&self) {
        *self.trace.borrow_mut() = None;
    }

    fn emit_event(&self, event: &NotifierEvent) {
        forward_to_tracing(event);

        let callback = self.trace.borrow().clone();
        if let Some(callback) = callback {
            callback(event);
        }
    }

    /// Add a listener. Adding one that is already registered does nothing.
    pub fn add_listener(&self, listener: &Rc<T>) {
        let added = handles::insert(&mut *self.listeners.borrow_mut(), listener);

        self.emit_event(&NotifierEvent::AddListener {
            type_name: type_name::<T>(),
            added,
        });
    }

    /// Remove a previously-added listener; a no-op when absent.
    pub fn remove_listener(&self, listener: &Rc<T>) {
        let removed = handles::remove(&mut *self.listeners.borrow_mut(), listener);

        self.emit_event(&NotifierEvent::RemoveListener {
            type_name: type_name::<T>(),
            removed,
        });
    }

    /// Check whether `listener` is registered.
    pub fn contains_listener(&self, listener: &Rc<T>) -> bool {
        let found = handles::contains(&*self.listeners.borrow(), listener);

        self.emit_event(&NotifierEvent::Contains {
            type_name: type_name::<T>(),
            found,
        });

        found
    }

    /// Number of listeners that are still alive.
    pub fn len(&self) -> usize {
        let mut listeners = self.listeners.borrow_mut();
        handles::compact(&mut *listeners);
        listeners.len()
    }

    /// Returns `true` if no live listener is registered.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Strong references to every live listener, in registration order.
    pub fn listeners(&self) -> Vec<Rc<T>> {
        handles::upgrade_all(&*self.listeners.borrow())
    }

    /// Call `action` once for every live listener.
    ///
    /// Same snapshot semantics as [`NotifierApi::invoke`](crate::NotifierApi::invoke).
    pub fn invoke(&self, mut action: impl FnMut(&Rc<T>)) {
        let outcome = self.try_invoke(|listener| {
            action(listener);
            Ok::<(), Infallible>(())
        });

        match outcome {
            Ok(()) => {}
            Err(never) => match never {},
        }
    }

    /// Fallible form of [`invoke`](Self::invoke); stops at the first error.
    pub fn try_invoke<E>(
        &self,
        action: impl FnMut(&Rc<T>) -> Result<(), E>,
    ) -> Result<(), E> {
        let snapshot: Vec<Weak<T>> = {
            let mut listeners = self.listeners.borrow_mut();
            handles::compact(&mut *listeners);
            listeners.clone()
        };

        let (notified, result) = handles::broadcast(&snapshot, action);

        self.emit_event(&NotifierEvent::Invoke {
            type_name: type_name::<T>(),
            notified,
        });

        result
    }

    /// Discard the entries of dropped listeners, returning how many were removed.
    pub fn prune(&self) -> usize {
        let pruned = handles::compact(&mut *self.listeners.borrow_mut());

        self.emit_event(&NotifierEvent::Prune {
            type_name: type_name::<T>(),
            pruned,
        });

        pruned
    }

    /// Remove every listener.
    pub fn clear(&self) {
        drop(self.listeners.take());

        self.emit_event(&NotifierEvent::Clear {
            type_name: type_name::<T>(),
        });
    }
}

impl<T: ?Sized> Default for LocalEventNotifier<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ?Sized> fmt::Debug for LocalEventNotifier<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LocalEventNotifier")
            .field("type_name", &type_name::<T>())
            .field("listeners", &self.len())
            .finish()
    }
}
