//! Single-subscriber conduit that replays the latest persistent value.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// Callback attached to a [`DamFlow`].
pub type Subscriber<T> = Rc<dyn Fn(&T)>;

struct Dam<T> {
    cached: Option<T>,
    subscriber: Option<Subscriber<T>>,
}

/// A value conduit with exactly one live subscriber and a one-slot replay cache.
///
/// - Values are delivered synchronously, in send order, to whoever is
///   subscribed at the time of sending. Nothing is queued.
/// - The most recent persistent value is cached and handed to every new
///   subscriber inside [`subscribe`](Self::subscribe).
/// - Ephemeral values reach the live subscriber only and never touch the cache.
///
/// `DamFlow` is a handle: clones share the same cache and subscriber slot.
/// No internal borrow is held while a callback runs, so callbacks may call
/// back into the flow. A value sent from inside a callback is delivered
/// nested, before the outer send returns, and the cache ends up holding the
/// last persistent value sent.
///
/// # Example
///
/// ```rust
/// use sluice::flow::DamFlow;
/// use std::cell::RefCell;
/// use std::rc::Rc;
///
/// let flow = DamFlow::new();
/// flow.send_value("first");
/// flow.send_value("latest");
/// flow.send_ephemeral("blink");
///
/// let seen = Rc::new(RefCell::new(Vec::new()));
/// let sink = Rc::clone(&seen);
/// flow.subscribe(move |v: &&str| sink.borrow_mut().push(*v));
///
/// assert_eq!(*seen.borrow(), vec!["latest"]);
/// ```
pub struct DamFlow<T> {
    inner: Rc<RefCell<Dam<T>>>,
}

impl<T: Clone + 'static> DamFlow<T> {
    /// Create an empty flow: no cached value, no subscriber.
    pub fn new() -> Self {
        Self {
            inner: Rc::new(RefCell::new(Dam {
                cached: None,
                subscriber: None,
            })),
        }
    }

    /// Send a persistent value: cache it and deliver it to the subscriber.
    pub fn send_value(&self, value: T) {
        self.send(value, false);
    }

    /// Send a one-shot value: deliver it to the subscriber, if any, and
    /// leave the cache untouched.
    pub fn send_ephemeral(&self, value: T) {
        self.send(value, true);
    }

    /// Send a value, caching it for replay unless `ephemeral`.
    ///
    /// [`send_value`](Self::send_value) and
    /// [`send_ephemeral`](Self::send_ephemeral) fix the flag.
    pub fn send(&self, value: T, ephemeral: bool) {
        let subscriber = {
            let mut dam = self.inner.borrow_mut();
            if !ephemeral {
                dam.cached = Some(value.clone());
            }
            dam.subscriber.clone()
        };

        match subscriber {
            Some(subscriber) => {
                tracing::trace!(ephemeral, "delivering value");
                subscriber(&value);
            }
            None if ephemeral => tracing::trace!("no subscriber, ephemeral value dropped"),
            None => tracing::trace!("no subscriber, value cached for replay"),
        }
    }

    /// Attach `subscriber`, replacing any previous one.
    ///
    /// If a value is cached it is delivered to the new subscriber before
    /// this call returns.
    pub fn subscribe<F>(&self, subscriber: F)
    where
        F: Fn(&T) + 'static,
    {
        let subscriber: Subscriber<T> = Rc::new(subscriber);
        let replay = {
            let mut dam = self.inner.borrow_mut();
            dam.subscriber = Some(Rc::clone(&subscriber));
            dam.cached.clone()
        };

        if let Some(value) = replay {
            tracing::trace!("replaying cached value to new subscriber");
            subscriber(&value);
        }
    }

    /// Detach the subscriber. The cached value is kept for the next one.
    pub fn unsubscribe(&self) {
        self.inner.borrow_mut().subscriber = None;
    }

    /// Detach the subscriber and forget the cached value.
    pub fn clear(&self) {
        let mut dam = self.inner.borrow_mut();
        dam.subscriber = None;
        dam.cached = None;
    }

    /// The value a new subscriber would be replayed, if any.
    pub fn latest(&self) -> Option<T> {
        self.inner.borrow().cached.clone()
    }

    pub fn has_subscriber(&self) -> bool {
        self.inner.borrow().subscriber.is_some()
    }
}

impl<T> Clone for DamFlow<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T: Clone + 'static> Default for DamFlow<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for DamFlow<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let dam = self.inner.borrow();
        f.debug_struct("DamFlow")
            .field("cached", &dam.cached)
            .field("subscribed", &dam.subscriber.is_some())
            .finish()
    }
}
