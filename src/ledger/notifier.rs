use std::fmt;
use std::fmt::{Debug, Formatter};

/// ChangeObserver is told that the ledger changed, without any detail. Observers
/// re-query the ledger to learn what happened.
pub trait ChangeObserver: Sync + Send {
    fn on_change(&self);
}

impl<F> ChangeObserver for F where F: Fn() + Sync + Send {
    fn on_change(&self) {
        self()
    }
}

#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub struct ObserverHandle(u64);

// ChangeNotifier keeps observers in registration order and calls them synchronously
#[derive(Default)]
pub struct ChangeNotifier {
    observers: Vec<(ObserverHandle, Box<dyn ChangeObserver>)>,
    next_handle: u64,
}

impl ChangeNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, observer: Box<dyn ChangeObserver>) -> ObserverHandle {
        let handle = ObserverHandle(self.next_handle);
        self.next_handle += 1;
        self.observers.push((handle, observer));
        handle
    }

    // returns false when the handle was not registered, which is not an error
    pub fn unregister(&mut self, handle: ObserverHandle) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(h, _)| *h != handle);
        before != self.observers.len()
    }

    pub fn notify_all(&self) {
        for (_, observer) in &self.observers {
            observer.on_change();
        }
    }

    pub fn len(&self) -> usize {
        self.observers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }
}

impl Debug for ChangeNotifier {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChangeNotifier")
            .field("observers", &self.observers.len())
            .field("next_handle", &self.next_handle)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use crate::ledger::notifier::ChangeNotifier;

    #[tokio::test]
    async fn test_should_notify_in_registration_order() {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let mut notifier = ChangeNotifier::new();
        for name in ["first", "second", "third"] {
            let calls = calls.clone();
            let _ = notifier.register(Box::new(move || calls.lock().expect("lock").push(name)));
        }
        notifier.notify_all();
        assert_eq!(vec!["first", "second", "third"], *calls.lock().expect("lock"));
    }

    #[tokio::test]
    async fn test_should_unregister_observer() {
        let count = Arc::new(AtomicUsize::new(0));
        let mut notifier = ChangeNotifier::new();
        let counter = count.clone();
        let handle = notifier.register(Box::new(move || { counter.fetch_add(1, Ordering::SeqCst); }));
        notifier.notify_all();
        assert!(notifier.unregister(handle));
        notifier.notify_all();
        assert_eq!(1, count.load(Ordering::SeqCst));
        assert!(notifier.is_empty());
    }

    #[tokio::test]
    async fn test_should_ignore_unknown_handle() {
        let mut notifier = ChangeNotifier::new();
        let handle = notifier.register(Box::new(|| {}));
        assert!(notifier.unregister(handle));
        assert!(!notifier.unregister(handle));
        assert_eq!(0, notifier.len());
    }
}
