//! Macros for declaring global notifiers.

/// Declares a named, process-global notifier for a listener capability.
///
/// The macro generates a module containing:
/// - An `EventNotifier` static (hidden)
/// - Free functions delegating to [`NotifierApi`](crate::NotifierApi)
/// - A `notifier()` accessor for trait-based usage
///
/// The capability must be `Send + Sync` (e.g. `dyn Foo` where `trait Foo: Send + Sync`),
/// and must be nameable from the module the macro is invoked in.
///
/// # Examples
///
/// ```rust
/// use event_notifier::define_notifier;
/// use std::sync::Arc;
///
/// pub trait Shutdown: Send + Sync {
///     fn shutdown(&self);
/// }
///
/// struct Worker;
///
/// impl Shutdown for Worker {
///     fn shutdown(&self) {}
/// }
///
/// define_notifier!(on_shutdown, dyn Shutdown);
///
/// fn main() {
///     let worker: Arc<dyn Shutdown> = Arc::new(Worker);
///     on_shutdown::add_listener(&worker);
///     on_shutdown::invoke(|listener| listener.shutdown());
///
///     assert!(on_shutdown::contains_listener(&worker));
/// }
/// ```
///
/// # Multiple Notifiers
///
/// Every invocation is isolated, even for the same capability:
///
/// ```rust
/// use event_notifier::define_notifier;
/// use std::sync::Arc;
///
/// pub trait Tick: Send + Sync {}
/// struct Clock;
/// impl Tick for Clock {}
///
/// define_notifier!(fast, dyn Tick);
/// define_notifier!(slow, dyn Tick);
///
/// fn main() {
///     let clock: Arc<dyn Tick> = Arc::new(Clock);
///     fast::add_listener(&clock);
///
///     assert!(!fast::is_empty());
///     assert!(slow::is_empty());
/// }
/// ```
#[macro_export]
macro_rules! define_notifier {
    ($name:ident, $capability:ty) => {
        pub mod $name {
            #[allow(unused_imports)]
            use super::*;

            use std::sync::Arc;

            // Global notifier (module-private)
            static NOTIFIER: $crate::EventNotifier<$capability> = $crate::EventNotifier::new();

            /// The underlying notifier, for trait-based usage.
            pub fn notifier() -> &'static $crate::EventNotifier<$capability> {
                &NOTIFIER
            }

            /// Add a listener.
            pub fn add_listener(listener: &Arc<$capability>) {
                use $crate::NotifierApi;
                NOTIFIER.add_listener(listener)
            }

            /// Remove a previously-added listener.
            pub fn remove_listener(listener: &Arc<$capability>) {
                use $crate::NotifierApi;
                NOTIFIER.remove_listener(listener)
            }

            /// Check whether a listener is registered.
            pub fn contains_listener(listener: &Arc<$capability>) -> bool {
                use $crate::NotifierApi;
                NOTIFIER.contains_listener(listener)
            }

            /// Returns `true` if no live listener is registered.
            pub fn is_empty() -> bool {
                use $crate::NotifierApi;
                NOTIFIER.is_empty()
            }

            /// Number of live listeners.
            pub fn len() -> usize {
                use $crate::NotifierApi;
                NOTIFIER.len()
            }

            /// Strong references to every live listener.
            pub fn listeners() -> Vec<Arc<$capability>> {
                use $crate::NotifierApi;
                NOTIFIER.listeners()
            }

            /// Call `action` once for every live listener.
            pub fn invoke(action: impl FnMut(&Arc<$capability>)) {
                use $crate::NotifierApi;
                NOTIFIER.invoke(action)
            }

            /// Call `action` for every live listener, stopping at the first error.
            pub fn try_invoke<E>(
                action: impl FnMut(&Arc<$capability>) -> Result<(), E>,
            ) -> Result<(), E> {
                use $crate::NotifierApi;
                NOTIFIER.try_invoke(action)
            }

            /// Discard entries of dropped listeners.
            pub fn prune() -> usize {
                use $crate::NotifierApi;
                NOTIFIER.prune()
            }

            /// Remove every listener.
            pub fn clear() {
                use $crate::NotifierApi;
                NOTIFIER.clear()
            }

            /// Set a tracing callback for notifier operations.
            pub fn set_trace_callback(
                callback: impl Fn(&$crate::NotifierEvent) + Send + Sync + 'static,
            ) {
                use $crate::NotifierApi;
                NOTIFIER.set_trace_callback(callback)
            }

            /// Clear the tracing callback.
            pub fn clear_trace_callback() {
                use $crate::NotifierApi;
                NOTIFIER.clear_trace_callback()
            }
        }
    };
}
