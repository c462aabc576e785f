//! Single-slot observable values.
//!
//! [`Value`] holds one current value and a list of subscribers that are
//! notified on every write. The text field funnels both external
//! `set_value` calls and user keystrokes through the same holder, so an
//! update callback registered by the host sees every change exactly once,
//! whichever side made it.

/// Callback invoked with the new value on every write.
pub type Subscriber<T> = Box<dyn FnMut(&T) + Send>;

/// A single-slot observable value.
pub struct Value<T> {
    current: T,
    subscribers: Vec<Subscriber<T>>,
}

impl<T> Value<T> {
    /// Creates a holder with the given initial value. Subscribers are not
    /// called for the initial value, only for subsequent writes.
    pub fn new(initial: T) -> Self {
        Self {
            current: initial,
            subscribers: Vec::new(),
        }
    }

    /// The current value.
    pub fn get(&self) -> &T {
        &self.current
    }

    /// Writes a new value and notifies every subscriber, in registration
    /// order. Writes are not deduplicated: setting an equal value notifies
    /// again.
    pub fn set(&mut self, value: T) {
        self.current = value;
        for sub in &mut self.subscribers {
            sub(&self.current);
        }
    }

    /// Registers a callback invoked on every subsequent write.
    pub fn subscribe(&mut self, subscriber: Subscriber<T>) {
        self.subscribers.push(subscriber);
    }
}

impl<T: Default> Default for Value<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}
