//! Integration tests demonstrating how to use `NotifierApi` WITHOUT the macro.
//!
//! This shows the manual implementation approach, which gives you full control
//! over where the listener list and trace callback live. This is useful when you
//! need custom behavior or want to understand how the macro works under the hood.
//!
//! NOTE: Tests touching MY_NOTIFIER use #[serial] because they share its static storage.
//! Running them in parallel would cause interference and non-deterministic failures.

use event_notifier::{NotifierApi, TraceSlot};
use serial_test::serial;
use std::sync::{Arc, Mutex, Weak};

trait Service: Send + Sync {
    fn name(&self) -> &str;
}

struct MyService(&'static str);

impl Service for MyService {
    fn name(&self) -> &str {
        self.0
    }
}

fn service(name: &'static str) -> Arc<dyn Service> {
    Arc::new(MyService(name))
}

// ============================================================================
// Manual Notifier Implementation (Without Macro)
// ============================================================================

/// Define the static listener storage for our notifier
static MY_STORAGE: Mutex<Vec<Weak<dyn Service>>> = Mutex::new(Vec::new());

/// Define the static trace callback storage
static MY_TRACE: TraceSlot = Mutex::new(None);

/// Our custom notifier implementation
struct MyNotifier;

impl NotifierApi<dyn Service> for MyNotifier {
    fn storage(&self) -> &Mutex<Vec<Weak<dyn Service>>> {
        &MY_STORAGE
    }

    fn trace(&self) -> &TraceSlot {
        &MY_TRACE
    }
}

/// Constant instance of our notifier
const MY_NOTIFIER: MyNotifier = MyNotifier;

// ============================================================================
// Tests Using Manual Implementation
// ============================================================================

#[test]
#[serial]
fn test_basic_add_and_invoke() {
    MY_NOTIFIER.clear();

    let a = service("a");
    MY_NOTIFIER.add_listener(&a);

    let mut names = Vec::new();
    MY_NOTIFIER.invoke(|s| names.push(s.name().to_string()));
    assert_eq!(names, vec!["a"]);
}

#[test]
#[serial]
fn test_contains_check() {
    MY_NOTIFIER.clear();

    let a = service("a");
    let b = service("b");
    MY_NOTIFIER.add_listener(&a);

    assert!(MY_NOTIFIER.contains_listener(&a));
    assert!(!MY_NOTIFIER.contains_listener(&b));
}

#[test]
#[serial]
fn test_listeners_outlive_nothing() {
    MY_NOTIFIER.clear();

    {
        let scoped = service("scoped");
        MY_NOTIFIER.add_listener(&scoped);
        assert_eq!(MY_NOTIFIER.len(), 1);
    }

    assert!(MY_NOTIFIER.is_empty());
}

#[test]
#[serial]
fn test_with_tracing() {
    use std::sync::atomic::{AtomicUsize, Ordering};

    MY_NOTIFIER.clear();

    // Counter for trace events
    let event_count = Arc::new(AtomicUsize::new(0));
    let event_count_clone = Arc::clone(&event_count);

    MY_NOTIFIER.set_trace_callback(move |_event| {
        event_count_clone.fetch_add(1, Ordering::SeqCst);
    });

    let a = service("a");
    MY_NOTIFIER.add_listener(&a); // +1 event
    MY_NOTIFIER.invoke(|_| {}); // +1 event
    MY_NOTIFIER.contains_listener(&a); // +1 event
    MY_NOTIFIER.remove_listener(&a); // +1 event

    assert_eq!(event_count.load(Ordering::SeqCst), 4);

    MY_NOTIFIER.clear_trace_callback();
}

#[test]
#[serial]
fn test_prune_after_drop() {
    MY_NOTIFIER.clear();

    let a = service("a");
    let b = service("b");
    MY_NOTIFIER.add_listener(&a);
    MY_NOTIFIER.add_listener(&b);
    drop(b);

    assert_eq!(MY_NOTIFIER.prune(), 1);
    assert_eq!(MY_NOTIFIER.listeners().len(), 1);
}

// ============================================================================
// Multiple Manual Notifiers Example
// ============================================================================

/// Second notifier for isolation testing
static ANOTHER_STORAGE: Mutex<Vec<Weak<dyn Service>>> = Mutex::new(Vec::new());

static ANOTHER_TRACE: TraceSlot = Mutex::new(None);

struct AnotherNotifier;

impl NotifierApi<dyn Service> for AnotherNotifier {
    fn storage(&self) -> &Mutex<Vec<Weak<dyn Service>>> {
        &ANOTHER_STORAGE
    }

    fn trace(&self) -> &TraceSlot {
        &ANOTHER_TRACE
    }
}

const ANOTHER: AnotherNotifier = AnotherNotifier;

#[test]
#[serial]
fn test_multiple_manual_notifiers() {
    MY_NOTIFIER.clear();

    let mine = service("mine");
    let theirs = service("theirs");
    MY_NOTIFIER.add_listener(&mine);
    ANOTHER.add_listener(&theirs);

    assert!(MY_NOTIFIER.contains_listener(&mine));
    assert!(!MY_NOTIFIER.contains_listener(&theirs));
    assert!(ANOTHER.contains_listener(&theirs));
    assert!(!ANOTHER.contains_listener(&mine));

    ANOTHER.clear();
}

// ============================================================================
// Advanced: Owning Notifier with Additional Features
// ============================================================================

#[cfg(test)]
mod advanced {
    use super::*;

    /// A notifier that owns its storage and counts broadcasts
    #[derive(Default)]
    struct CountingNotifier {
        storage: Mutex<Vec<Weak<dyn Service>>>,
        trace: TraceSlot,
        broadcasts: std::sync::atomic::AtomicUsize,
    }

    impl NotifierApi<dyn Service> for CountingNotifier {
        fn storage(&self) -> &Mutex<Vec<Weak<dyn Service>>> {
            &self.storage
        }

        fn trace(&self) -> &TraceSlot {
            &self.trace
        }
    }

    impl CountingNotifier {
        fn broadcast(&self, action: impl FnMut(&Arc<dyn Service>)) {
            self.broadcasts
                .fetch_add(1, std::sync::atomic::Ordering::SeqCst);
            self.invoke(action);
        }
    }

    #[test]
    fn test_counting_notifier() {
        let notifier = CountingNotifier::default();
        let a = service("a");
        notifier.add_listener(&a);

        let mut calls = 0;
        notifier.broadcast(|_| calls += 1);
        notifier.broadcast(|_| calls += 1);

        assert_eq!(calls, 2);
        assert_eq!(
            notifier.broadcasts.load(std::sync::atomic::Ordering::SeqCst),
            2
        );
    }
}
