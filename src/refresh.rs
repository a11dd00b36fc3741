//! Refresh Coordinator
//!
//! Version counter that mutations bump after they succeed. Views that show
//! server data subscribe and re-fetch on every new version.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

type Listener = Arc<dyn Fn(u64) + Send + Sync>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubscriptionId(u64);

#[derive(Default)]
struct Inner {
    version: u64,
    next_id: u64,
    listeners: Vec<(SubscriptionId, Listener)>,
}

/// Cheap to clone; clones share the same version and listeners
#[derive(Clone, Default)]
pub struct RefreshCoordinator {
    inner: Arc<Mutex<Inner>>,
}

impl RefreshCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn version(&self) -> u64 {
        self.lock().version
    }

    /// Call `listener` with the new version after every bump
    pub fn subscribe(&self, listener: impl Fn(u64) + Send + Sync + 'static) -> SubscriptionId {
        let mut inner = self.lock();
        let id = SubscriptionId(inner.next_id);
        inner.next_id += 1;
        inner.listeners.push((id, Arc::new(listener)));
        id
    }

    /// Like `subscribe`, but also runs `listener` once right away
    pub fn watch(&self, listener: impl Fn(u64) + Send + Sync + 'static) -> SubscriptionId {
        let listener: Listener = Arc::new(listener);
        let current = self.version();
        let id = {
            let listener = listener.clone();
            self.subscribe(move |version| listener(version))
        };
        listener(current);
        id
    }

    pub fn unsubscribe(&self, id: SubscriptionId) {
        self.lock().listeners.retain(|(listener_id, _)| *listener_id != id);
    }

    /// Advance the version and notify every listener once
    pub fn bump(&self) -> u64 {
        let (version, listeners) = {
            let mut inner = self.lock();
            inner.version += 1;
            let listeners: Vec<Listener> = inner.listeners.iter().map(|(_, l)| l.clone()).collect();
            (inner.version, listeners)
        };
        log::debug!("Refresh version {} ({} listeners)", version, listeners.len());
        for listener in listeners {
            listener(version);
        }
        version
    }
}
