use parking_lot::RwLock;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tracing::debug;

use crate::comparison::pipeline::RouteComparison;
use crate::models::esg::EnvironmentalRecord;

pub type SubscriberId = u64;
type Subscriber<T> = Arc<dyn Fn(Option<&T>) + Send + Sync>;

/// Holds the current value and notifies subscribers whenever it changes.
///
/// Shared by handing out `&Store` (or an `Arc`) to consumers. Subscribers
/// run synchronously on the thread calling `replace` or `clear`, after the
/// change is visible to `current`. A cleared store notifies with `None`.
pub struct Store<T: 'static> {
    current: RwLock<Option<Arc<T>>>,
    subscribers: RwLock<Vec<(SubscriberId, Subscriber<T>)>>,
    next_id: AtomicU64,
}

/// Latest route comparison
pub type ComparisonStore = Store<RouteComparison>;

/// Current environmental reporting dataset
pub type DatasetStore = Store<Vec<EnvironmentalRecord>>;

impl<T: 'static> Default for Store<T> {
    fn default() -> Self {
        Self {
            current: RwLock::new(None),
            subscribers: RwLock::new(Vec::new()),
            next_id: AtomicU64::new(0),
        }
    }
}

impl<T: 'static> Store<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<Arc<T>> {
        self.current.read().clone()
    }

    pub fn replace(&self, value: T) {
        let value = Arc::new(value);
        *self.current.write() = Some(Arc::clone(&value));
        self.notify(Some(&*value));
    }

    pub fn clear(&self) {
        *self.current.write() = None;
        self.notify(None);
    }

    fn notify(&self, value: Option<&T>) {
        // Clone the list so callbacks may subscribe or unsubscribe
        let subscribers: Vec<Subscriber<T>> = self
            .subscribers
            .read()
            .iter()
            .map(|(_, callback)| Arc::clone(callback))
            .collect();

        debug!("Notifying {} subscribers (cleared: {})", subscribers.len(), value.is_none());
        for callback in subscribers {
            callback(value);
        }
    }

    pub fn subscribe<F>(&self, callback: F) -> SubscriberId
    where
        F: Fn(Option<&T>) + Send + Sync + 'static,
    {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        self.subscribers.write().push((id, Arc::new(callback)));
        id
    }

    /// Returns false if the id was not subscribed.
    pub fn unsubscribe(&self, id: SubscriberId) -> bool {
        let mut subscribers = self.subscribers.write();
        let before = subscribers.len();
        subscribers.retain(|(existing, _)| *existing != id);
        subscribers.len() != before
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.read().len()
    }
}
