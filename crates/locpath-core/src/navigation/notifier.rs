//! Location-change notification: a registry of listeners called after each
//! navigation.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, PoisonError, RwLock};

/// Callback run after the active location changes. Carries no payload;
/// listeners read the new location themselves.
pub type Listener = Arc<dyn Fn() + Send + Sync>;

/// Handle returned by [`ChangeNotifier::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SubscriptionId(u64);

/// Shared registry of location-change listeners.
///
/// Listeners run in subscription order. The registry is not locked while
/// they run, so a listener may subscribe or unsubscribe.
#[derive(Default)]
pub struct ChangeNotifier {
    next_id: AtomicU64,
    listeners: RwLock<BTreeMap<SubscriptionId, Listener>>,
}

impl ChangeNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe<F>(&self, listener: F) -> SubscriptionId
    where
        F: Fn() + Send + Sync + 'static,
    {
        let id = SubscriptionId(self.next_id.fetch_add(1, Ordering::Relaxed));
        self.listeners
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(id, Arc::new(listener));
        id
    }

    /// Returns false if `id` was not subscribed.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.listeners
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(&id)
            .is_some()
    }

    pub fn listener_count(&self) -> usize {
        self.listeners
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Calls every listener once.
    pub fn notify(&self) {
        let listeners: Vec<Listener> = self
            .listeners
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .values()
            .cloned()
            .collect();

        tracing::trace!("notifying {} location listeners", listeners.len());
        for listener in listeners {
            listener();
        }
    }
}

impl std::fmt::Debug for ChangeNotifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChangeNotifier")
            .field("listeners", &self.listener_count())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;
    use std::sync::Mutex;

    #[test]
    fn notify_calls_every_listener() {
        let notifier = ChangeNotifier::new();
        let calls = Arc::new(AtomicUsize::new(0));
        for _ in 0..3 {
            let calls = Arc::clone(&calls);
            notifier.subscribe(move || {
                calls.fetch_add(1, Ordering::SeqCst);
            });
        }
        notifier.notify();
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn notify_without_listeners_is_noop() {
        ChangeNotifier::new().notify();
    }

    #[test]
    fn unsubscribe_stops_delivery() {
        let notifier = ChangeNotifier::new();
        let calls = Arc::new(AtomicUsize::new(0));
        let c = Arc::clone(&calls);
        let id = notifier.subscribe(move || {
            c.fetch_add(1, Ordering::SeqCst);
        });

        notifier.notify();
        assert!(notifier.unsubscribe(id));
        assert!(!notifier.unsubscribe(id));
        notifier.notify();

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(notifier.listener_count(), 0);
    }

    #[test]
    fn listeners_run_in_subscription_order() {
        let notifier = ChangeNotifier::new();
        let order = Arc::new(Mutex::new(Vec::new()));
        for n in 0..4 {
            let order = Arc::clone(&order);
            notifier.subscribe(move || order.lock().unwrap().push(n));
        }
        notifier.notify();
        assert_eq!(*order.lock().unwrap(), vec![0, 1, 2, 3]);
    }

    #[test]
    fn listener_may_subscribe_during_notify() {
        let notifier = Arc::new(ChangeNotifier::new());
        let inner = Arc::clone(&notifier);
        notifier.subscribe(move || {
            inner.subscribe(|| {});
        });
        notifier.notify();
        assert_eq!(notifier.listener_count(), 2);
    }
}
