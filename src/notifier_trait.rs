//! Core trait defining notifier behavior.
//!
//! This module provides the `NotifierApi` trait with default implementations for
//! registering, removing, querying and broadcasting to weakly-held listeners.
//!
//! Listeners are tracked by identity (the address of their `Arc` allocation) and are
//! never kept alive by the notifier. Adding a listener that is already present is a no-op.

use std::any::type_name;
use std::convert::Infallible;
use std::sync::{Arc, Mutex, MutexGuard, Weak};

use crate::handles;
use crate::notifier_event::forward_to_tracing;
use crate::NotifierEvent;

/// Type alias for the user-supplied tracing callback.
///
/// The callback receives a reference to a `NotifierEvent` every time the notifier is
/// interacted with. It must be thread-safe because notifiers may be shared between threads.
pub type TraceCallback = dyn Fn(&NotifierEvent) + Send + Sync + 'static;

/// Storage for an optional trace callback.
pub type TraceSlot = Mutex<Option<Arc<TraceCallback>>>;

/// Lock a mutex, recovering from poisoning.
///
/// Poisoning can only happen if a thread panicked while holding the lock. None of the
/// critical sections run user code, so the protected data is always consistent.
fn lock<V: ?Sized>(mutex: &Mutex<V>) -> MutexGuard<'_, V> {
    mutex.lock().unwrap_or_else(|p| p.into_inner())
}

/// Core trait defining notifier behavior.
///
/// Provides default implementations for all notifier operations, requiring only
/// two accessor methods (`storage` and `trace`) to be implemented by the implementor.
///
/// `T` is the listener capability, usually a trait object such as `dyn Foo`.
pub trait NotifierApi<T: ?Sized> {
    // -------------------------------------------------------------------------------------------------
    // Tracing
    // -------------------------------------------------------------------------------------------------

    /// Access the trace callback slot.
    fn trace(&self) -> &TraceSlot;

    /// Set a tracing callback for notifier operations.
    ///
    /// The callback will be invoked for add, remove, contains, invoke, prune and clear.
    ///
    /// The callback is cloned out of its lock before it runs, so it may call back into
    /// the notifier (including replacing itself).
    fn set_trace_callback(&self, callback: impl Fn(&NotifierEvent) + Send + Sync + 'static) {
        *lock(self.trace()) = Some(Arc::new(callback));
    }

    /// Clear the tracing callback.
    ///
    /// Note: This does not affect registered listeners, only the tracing callback.
    fn clear_trace_callback(&self) {
        *lock(self.trace()) = None;
    }

    /// Emit a notifier event using the current callback.
    ///
    /// # Panics
    ///
    /// If the callback itself panics, the panic will propagate to the caller.
    /// No lock is held while the callback runs.
    fn emit_event(&self, event: &NotifierEvent) {
        forward_to_tracing(event);

        let callback = lock(self.trace()).clone();
        if let Some(callback) = callback {
            callback(event);
        }
    }

    // -------------------------------------------------------------------------------------------------
    // Listeners
    // -------------------------------------------------------------------------------------------------

    /// Access the listener storage.
    fn storage(&self) -> &Mutex<Vec<Weak<T>>>;

    /// Add a listener.
    ///
    /// Only a weak handle is stored: the notifier never keeps `listener` alive.
    /// Adding a listener that is already registered does nothing.
    fn add_listener(&self, listener: &Arc<T>) {
        let added = handles::insert(&mut *lock(self.storage()), listener);

        self.emit_event(&NotifierEvent::AddListener {
            type_name: type_name::<T>(),
            added,
        });
    }

    /// Remove a previously-added listener.
    ///
    /// Removing a listener that is not registered is a no-op.
    fn remove_listener(&self, listener: &Arc<T>) {
        let removed = handles::remove(&mut *lock(self.storage()), listener);

        self.emit_event(&NotifierEvent::RemoveListener {
            type_name: type_name::<T>(),
            removed,
        });
    }

    /// Check whether `listener` is registered.
    fn contains_listener(&self, listener: &Arc<T>) -> bool {
        let found = handles::contains(&*lock(self.storage()), listener);

        self.emit_event(&NotifierEvent::Contains {
            type_name: type_name::<T>(),
            found,
        });

        found
    }

    /// Number of listeners that are still alive.
    ///
    /// Entries of dropped listeners are discarded as a side effect.
    fn len(&self) -> usize {
        let mut listeners = lock(self.storage());
        handles::compact(&mut *listeners);
        listeners.len()
    }

    /// Returns `true` if no live listener is registered.
    ///
    /// Entries of dropped listeners are discarded as a side effect.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Strong references to every live listener, in registration order.
    fn listeners(&self) -> Vec<Arc<T>> {
        handles::upgrade_all(&*lock(self.storage()))
    }

    /// Call `action` once for every live listener.
    ///
    /// The set of listeners is captured when the call starts. Listeners added by
    /// `action` are not called during this broadcast; a listener whose last owner is
    /// dropped before its turn is skipped. No lock is held while `action` runs, so it
    /// may use the notifier freely.
    ///
    /// A panic inside `action` propagates to the caller and ends the broadcast.
    fn invoke(&self, mut action: impl FnMut(&Arc<T>)) {
        let outcome = self.try_invoke(|listener| {
            action(listener);
            Ok::<(), Infallible>(())
        });

        match outcome {
            Ok(()) => {}
            Err(never) => match never {},
        }
    }

    /// Fallible form of [`invoke`](NotifierApi::invoke).
    ///
    /// Stops at the first error, which is returned unchanged. Listeners after the
    /// failing one are not called.
    fn try_invoke<E>(
        &self,
        action: impl FnMut(&Arc<T>) -> Result<(), E>,
    ) -> Result<(), E> {
        let snapshot: Vec<Weak<T>> = {
            let mut listeners = lock(self.storage());
            handles::compact(&mut *listeners);
            listeners.clone()
        };

        // the lock is released; entries dropped since the snapshot are skipped
        let (notified, result) = handles::broadcast(&snapshot, action);

        self.emit_event(&NotifierEvent::Invoke {
            type_name: type_name::<T>(),
            notified,
        });

        result
    }

    /// Discard the entries of dropped listeners.
    ///
    /// Returns how many entries were removed.
    fn prune(&self) -> usize {
        let pruned = handles::compact(&mut *lock(self.storage()));

        self.emit_event(&NotifierEvent::Prune {
            type_name: type_name::<T>(),
            pruned,
        });

        pruned
    }

    /// Remove every listener.
    ///
    /// Listeners themselves are unaffected; they are only forgotten.
    fn clear(&self) {
        let forgotten = std::mem::take(&mut *lock(self.storage()));
        drop(forgotten);

        self.emit_event(&NotifierEvent::Clear {
            type_name: type_name::<T>(),
        });
    }
}

// -------------------------------------------------------------------------------------------------
// Tests
// -------------------------------------------------------------------------------------------------
