//! Single-slot callback registration with scoped deregistration.
//!
//! The controller, theme manager and clipboard each notify at most one
//! registrant; registering again replaces the previous one. Registration
//! hands back a [`Subscription`] whose drop removes the registration, so a
//! callback can never outlive its observer. Generation tags keep a stale
//! handle from clearing a newer registration, and the handle only holds a
//! weak reference, so owner and handle may drop in either order.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

struct SlotInner<C> {
    callback: Option<C>,
    generation: u64,
}

/// Holder for at most one registered callback of type `C`.
pub(crate) struct CallbackSlot<C> {
    inner: Rc<RefCell<SlotInner<C>>>,
}

impl<C> CallbackSlot<C> {
    pub fn new() -> Self {
        Self {
            inner: Rc::new(RefCell::new(SlotInner {
                callback: None,
                generation: 0,
            })),
        }
    }
}

impl<C: 'static> CallbackSlot<C> {
    /// Install `callback`, replacing any previous registrant.
    pub fn register(&self, callback: C) -> Subscription {
        let generation = {
            let mut inner = self.inner.borrow_mut();
            inner.generation += 1;
            inner.callback = Some(callback);
            inner.generation
        };
        let erased: Rc<dyn Deregister> = self.inner.clone();
        Subscription {
            slot: Some(Rc::downgrade(&erased)),
            generation,
        }
    }

    /// Run `f` against the registered callback, if any.
    ///
    /// The slot stays borrowed for the duration of the call; callbacks must
    /// not register on the slot that is notifying them.
    pub fn with<R>(&self, f: impl FnOnce(&mut C) -> R) -> Option<R> {
        let mut inner = self.inner.borrow_mut();
        inner.callback.as_mut().map(f)
    }

    #[cfg(test)]
    pub fn has_registrant(&self) -> bool {
        self.inner.borrow().callback.is_some()
    }
}

impl<C> Default for CallbackSlot<C> {
    fn default() -> Self {
        Self::new()
    }
}

trait Deregister {
    fn deregister(&self, generation: u64);
}

impl<C> Deregister for RefCell<SlotInner<C>> {
    fn deregister(&self, generation: u64) {
        let mut inner = self.borrow_mut();
        // Only clear our own registration; a newer one stays in place.
        if inner.generation == generation {
            inner.callback = None;
        }
    }
}

/// Scoped handle to a callback registration.
///
/// Dropping the handle deregisters the callback, unless a newer
/// registration has already replaced it.
#[must_use = "dropping the subscription immediately deregisters the callback"]
pub struct Subscription {
    slot: Option<Weak<dyn Deregister>>,
    generation: u64,
}

impl Subscription {
    /// Give up deregistration and keep the callback installed for the
    /// owner's remaining lifetime.
    pub fn detach(mut self) {
        self.slot = None;
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(slot) = self.slot.take().and_then(|weak| weak.upgrade()) {
            slot.deregister(self.generation);
        }
    }
}
