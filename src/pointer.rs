//! Process-wide pointer button events
//!
//! The host forwards raw button presses/releases to a [`PointerHub`]. Anything
//! interested subscribes and receives a [`Subscription`] that removes the
//! listener when dropped, so a disposed owner can never be called back.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

/// Pointer button transitions, regardless of which button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEvent {
    Down,
    Up,
}

type Listener = Rc<RefCell<dyn FnMut(PointerEvent)>>;

#[derive(Default)]
struct HubInner {
    next_id: u64,
    listeners: Vec<(u64, Listener)>,
}

/// Single-threaded event source for pointer buttons
#[derive(Clone, Default)]
pub struct PointerHub {
    inner: Rc<RefCell<HubInner>>,
}

impl PointerHub {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener; it stays registered until the handle is dropped
    pub fn subscribe(&self, listener: impl FnMut(PointerEvent) + 'static) -> Subscription {
        let mut inner = self.inner.borrow_mut();
        inner.next_id += 1;
        let id = inner.next_id;
        inner
            .listeners
            .push((id, Rc::new(RefCell::new(listener)) as Listener));
        tracing::trace!(id, "pointer listener added");

        Subscription {
            id,
            hub: Rc::downgrade(&self.inner),
        }
    }

    /// Deliver an event to every registered listener
    pub fn emit(&self, event: PointerEvent) {
        // Snapshot first: a listener may drop its own subscription.
        let listeners: Vec<Listener> = self
            .inner
            .borrow()
            .listeners
            .iter()
            .map(|(_, listener)| Rc::clone(listener))
            .collect();

        for listener in listeners {
            if let Ok(mut callback) = listener.try_borrow_mut() {
                (&mut *callback)(event);
            }
        }
    }

    pub fn listener_count(&self) -> usize {
        self.inner.borrow().listeners.len()
    }
}

impl std::fmt::Debug for PointerHub {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PointerHub")
            .field("listeners", &self.listener_count())
            .finish()
    }
}

/// Registration handle returned by [`PointerHub::subscribe`]
#[derive(Debug)]
pub struct Subscription {
    id: u64,
    hub: Weak<RefCell<HubInner>>,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(hub) = self.hub.upgrade() {
            hub.borrow_mut().listeners.retain(|(id, _)| *id != self.id);
            tracing::trace!(id = self.id, "pointer listener removed");
        }
    }
}
