//! Synchronous change notifications.
//!
//! Layout raises events such as "size changed" or "snap points changed" at
//! most once per pass and only when something actually changed. Subscribers
//! are plain closures stored in an [`Event`].

use alloc::{boxed::Box, vec::Vec};
use core::fmt;

/// Identifies a subscription so it can be removed later.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HandlerId(u64);

type BoxHandler<T> = Box<dyn FnMut(&T)>;

/// An ordered list of handlers invoked with a borrowed payload.
pub struct Event<T: ?Sized> {
    handlers: Vec<(HandlerId, BoxHandler<T>)>,
    next_id: u64,
}

impl<T: ?Sized> Default for Event<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ?Sized> Event<T> {
    /// Creates an event with no subscribers.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            handlers: Vec::new(),
            next_id: 0,
        }
    }

    /// Registers `handler`. Handlers run in subscription order.
    pub fn subscribe(&mut self, handler: impl FnMut(&T) + 'static) -> HandlerId {
        let id = HandlerId(self.next_id);
        self.next_id += 1;
        self.handlers.push((id, Box::new(handler)));
        id
    }

    /// Removes a handler. Returns false if `id` was not subscribed.
    pub fn unsubscribe(&mut self, id: HandlerId) -> bool {
        let before = self.handlers.len();
        self.handlers.retain(|(handler_id, _)| *handler_id != id);
        self.handlers.len() != before
    }

    /// Invokes every handler with `payload`.
    pub fn raise(&mut self, payload: &T) {
        for (_, handler) in &mut self.handlers {
            handler(payload);
        }
    }

    /// Number of subscribers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// Returns true if nobody is subscribed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

impl<T: ?Sized> fmt::Debug for Event<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Event")
            .field("handlers", &self.handlers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::rc::Rc;
    use alloc::vec;
    use core::cell::RefCell;

    #[test]
    fn test_handlers_run_in_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut event = Event::<u32>::new();

        let first = log.clone();
        event.subscribe(move |value| first.borrow_mut().push(("first", *value)));
        let second = log.clone();
        event.subscribe(move |value| second.borrow_mut().push(("second", *value)));

        event.raise(&7);

        assert_eq!(*log.borrow(), vec![("first", 7), ("second", 7)]);
    }

    #[test]
    fn test_unsubscribe() {
        let count = Rc::new(RefCell::new(0));
        let mut event = Event::<[f32]>::new();

        let counter = count.clone();
        let id = event.subscribe(move |points| *counter.borrow_mut() += points.len());
        event.raise(&[1.0, 2.0]);

        assert!(event.unsubscribe(id));
        assert!(!event.unsubscribe(id));
        assert!(event.is_empty());

        event.raise(&[3.0]);
        assert_eq!(*count.borrow(), 2);
    }
}
