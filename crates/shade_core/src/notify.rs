//! Change notification
//!
//! A [`ChangeNotifier`] is a payload-free listener registry: subscribers
//! learn *that* something changed and re-read the relevant state
//! themselves. This keeps notification decoupled from the shape of the
//! state being watched.

use std::sync::Mutex;

use slotmap::SlotMap;

slotmap::new_key_type! {
    /// Handle returned by [`ChangeNotifier::subscribe`], used to
    /// unsubscribe later.
    pub struct ListenerId;
}

type Callback = Box<dyn Fn() + Send + Sync>;

/// Payload-free listener registry.
///
/// Callbacks run synchronously on the thread that calls [`emit`] and while
/// the registry is locked; a callback must not subscribe or unsubscribe.
///
/// [`emit`]: ChangeNotifier::emit
#[derive(Default)]
pub struct ChangeNotifier {
    listeners: Mutex<SlotMap<ListenerId, Callback>>,
}

impl ChangeNotifier {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a callback, returning a handle for [`unsubscribe`].
    ///
    /// [`unsubscribe`]: ChangeNotifier::unsubscribe
    pub fn subscribe<F>(&self, callback: F) -> ListenerId
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.listeners.lock().unwrap().insert(Box::new(callback))
    }

    /// Removes a previously registered callback.
    ///
    /// Returns `false` if the handle was already removed.
    pub fn unsubscribe(&self, id: ListenerId) -> bool {
        self.listeners.lock().unwrap().remove(id).is_some()
    }

    /// Invokes every registered callback.
    pub fn emit(&self) {
        let listeners = self.listeners.lock().unwrap();
        tracing::trace!(listeners = listeners.len(), "change notification");
        for (_, callback) in listeners.iter() {
            callback();
        }
    }

    /// Number of registered listeners.
    pub fn len(&self) -> usize {
        self.listeners.lock().unwrap().len()
    }

    /// Returns true if no listeners are registered.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
