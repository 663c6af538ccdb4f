/// Events emitted by a notifier during operations.
///
/// These events are passed to the tracing callback set via `set_trace_callback`.
/// The `Clone` derive allows callbacks to store or forward events if needed.
///
/// `type_name` is the listener capability, e.g. `dyn my_app::Foo`.
///
/// # Examples
///
/// ```rust
/// use event_notifier::NotifierEvent;
///
/// let event = NotifierEvent::AddListener { type_name: "dyn Foo", added: true };
/// assert_eq!(event.to_string(), "add_listener { type_name: dyn Foo, added: true }");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotifierEvent {
    /// A listener was offered to the notifier.
    AddListener {
        /// The capability type of the notifier
        type_name: &'static str,
        /// `false` when the same listener was already registered
        added: bool,
    },

    /// A listener removal was requested.
    RemoveListener {
        /// The capability type of the notifier
        type_name: &'static str,
        /// Whether a matching entry existed
        removed: bool,
    },

    /// A membership check was performed.
    Contains {
        /// The capability type of the notifier
        type_name: &'static str,
        /// Whether the listener is registered and alive
        found: bool,
    },

    /// A broadcast finished (or stopped at the first failing action).
    Invoke {
        /// The capability type of the notifier
        type_name: &'static str,
        /// How many listeners the action was called with
        notified: usize,
    },

    /// Entries of dropped listeners were discarded.
    Prune {
        /// The capability type of the notifier
        type_name: &'static str,
        /// How many dead entries were removed
        pruned: usize,
    },

    /// The notifier was cleared.
    Clear {
        /// The capability type of the notifier
        type_name: &'static str,
    },
}

impl std::fmt::Display for NotifierEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NotifierEvent::AddListener { type_name, added } => {
                write!(f, "add_listener {{ type_name: {}, added: {} }}", type_name, added)
            }
            NotifierEvent::RemoveListener { type_name, removed } => {
                write!(
                    f,
                    "remove_listener {{ type_name: {}, removed: {} }}",
                    type_name, removed
                )
            }
            NotifierEvent::Contains { type_name, found } => {
                write!(
                    f,
                    "contains {{ type_name: {}, found: {} }}",
                    type_name, found
                )
            }
            NotifierEvent::Invoke {
                type_name,
                notified,
            } => {
                write!(
                    f,
                    "invoke {{ type_name: {}, notified: {} }}",
                    type_name, notified
                )
            }
            NotifierEvent::Prune { type_name, pruned } => {
                write!(f, "prune {{ type_name: {}, pruned: {} }}", type_name, pruned)
            }
            NotifierEvent::Clear { type_name } => {
                write!(f, "clear {{ type_name: {} }}", type_name)
            }
        }
    }
}

/// Forwards an event to the `tracing` subscriber, if the feature is enabled.
#[inline]
pub(crate) fn forward_to_tracing(event: &NotifierEvent) {
    #[cfg(feature = "tracing")]
    tracing::trace!(target: "event_notifier", event = %event, "notifier operation");

    #[cfg(not(feature = "tracing"))]
    let _ = event;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notifier_event_display() {
        let event = NotifierEvent::AddListener {
            type_name: "dyn Foo",
            added: false,
        };
        assert_eq!(
            event.to_string(),
            "add_listener { type_name: dyn Foo, added: false }"
        );

        let event = NotifierEvent::RemoveListener {
            type_name: "dyn Foo",
            removed: true,
        };
        assert_eq!(
            event.to_string(),
            "remove_listener { type_name: dyn Foo, removed: true }"
        );

        let event = NotifierEvent::Contains {
            type_name: "u8",
            found: false,
        };
        assert_eq!(
            event.to_string(),
            "contains { type_name: u8, found: false }"
        );

        let event = NotifierEvent::Invoke {
            type_name: "dyn Foo",
            notified: 3,
        };
        assert_eq!(
            event.to_string(),
            "invoke { type_name: dyn Foo, notified: 3 }"
        );

        let event = NotifierEvent::Prune {
            type_name: "dyn Foo",
            pruned: 2,
        };
        assert_eq!(event.to_string(), "prune { type_name: dyn Foo, pruned: 2 }");

        let event = NotifierEvent::Clear {
            type_name: "dyn Foo",
        };
        assert_eq!(event.to_string(), "clear { type_name: dyn Foo }");
    }

    #[test]
    fn test_notifier_event_clone() {
        let event = NotifierEvent::Invoke {
            type_name: "dyn Foo",
            notified: 1,
        };
        let cloned = event.clone();
        assert_eq!(event, cloned);
        assert_eq!(format!("{:?}", event), format!("{:?}", cloned));
    }
}
