//! Operations on lists of weak listener handles.
//!
//! Both notifiers keep a `Vec` of weak handles; [`EventNotifier`](crate::EventNotifier)
//! uses `sync::Weak` and [`LocalEventNotifier`](crate::LocalEventNotifier) uses `rc::Weak`.
//! The list logic lives here once, written against [`WeakHandle`].

use std::rc::{self, Rc};
use std::sync::{self, Arc};

/// A non-owning handle to a shared listener.
pub(crate) trait WeakHandle: Clone {
    /// The owning pointer the handle was created from.
    type Strong;

    fn downgrade(listener: &Self::Strong) -> Self;

    fn upgrade(&self) -> Option<Self::Strong>;

    fn is_alive(&self) -> bool;

    /// Whether the handle points at the same allocation as `listener`.
    ///
    /// Only the address is compared; vtable metadata of `dyn` listeners is ignored.
    fn refers_to(&self, listener: &Self::Strong) -> bool;
}

impl<T: ?Sized> WeakHandle for sync::Weak<T> {
    type Strong = Arc<T>;

    fn downgrade(listener: &Arc<T>) -> Self {
        Arc::downgrade(listener)
    }

    fn upgrade(&self) -> Option<Arc<T>> {
        sync::Weak::upgrade(self)
    }

    fn is_alive(&self) -> bool {
        self.strong_count() > 0
    }

    fn refers_to(&self, listener: &Arc<T>) -> bool {
        std::ptr::addr_eq(self.as_ptr(), Arc::as_ptr(listener))
    }
}

impl<T: ?Sized> WeakHandle for rc::Weak<T> {
    type Strong = Rc<T>;

    fn downgrade(listener: &Rc<T>) -> Self {
        Rc::downgrade(listener)
    }

    fn upgrade(&self) -> Option<Rc<T>> {
        rc::Weak::upgrade(self)
    }

    fn is_alive(&self) -> bool {
        self.strong_count() > 0
    }

    fn refers_to(&self, listener: &Rc<T>) -> bool {
        std::ptr::addr_eq(self.as_ptr(), Rc::as_ptr(listener))
    }
}

/// Drop the handles of dead listeners, returning how many were removed.
pub(crate) fn compact<W: WeakHandle>(handles: &mut Vec<W>) -> usize {
    let before = handles.len();
    handles.retain(W::is_alive);
    before - handles.len()
}

/// Add `listener` unless it is already present. Returns `true` if it was added.
pub(crate) fn insert<W: WeakHandle>(handles: &mut Vec<W>, listener: &W::Strong) -> bool {
    compact(handles);

    if handles.iter().any(|h| h.refers_to(listener)) {
        return false;
    }
    handles.push(W::downgrade(listener));
    true
}

/// Remove the handle of `listener`. Returns `true` if one existed.
pub(crate) fn remove<W: WeakHandle>(handles: &mut Vec<W>, listener: &W::Strong) -> bool {
    match handles.iter().position(|h| h.refers_to(listener)) {
        Some(index) => {
            handles.remove(index);
            true
        }
        None => false,
    }
}

pub(crate) fn contains<W: WeakHandle>(handles: &[W], listener: &W::Strong) -> bool {
    handles.iter().any(|h| h.is_alive() && h.refers_to(listener))
}

pub(crate) fn upgrade_all<W: WeakHandle>(handles: &[W]) -> Vec<W::Strong> {
    handles.iter().filter_map(W::upgrade).collect()
}

/// Call `action` for every handle in `snapshot` whose listener is still alive.
///
/// Each handle is upgraded just before its call, so listeners dropped by an earlier
/// call are skipped. Stops at the first error. Returns how many listeners were called.
pub(crate) fn broadcast<W: WeakHandle, E>(
    snapshot: &[W],
    mut action: impl FnMut(&W::Strong) -> Result<(), E>,
) -> (usize, Result<(), E>) {
    let mut notified = 0;
    let result = snapshot.iter().try_for_each(|handle| {
        let Some(listener) = handle.upgrade() else {
            return Ok(());
        };
        notified += 1;
        action(&listener)
    });

    (notified, result)
}
