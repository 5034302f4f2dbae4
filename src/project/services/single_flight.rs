//! Coalescing of concurrent identical operations.

use std::collections::HashMap;
use std::future::Future;
use std::hash::Hash;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tokio::sync::OnceCell;

type Slot<T, E> = Arc<OnceCell<Result<T, E>>>;

/// Registry of in-flight operations keyed by `K`.
///
/// Callers that arrive while an operation for the same key is running
/// await that operation instead of starting their own, and all of them
/// receive a clone of its result. The key is released once the operation
/// settles, so the next call starts fresh.
pub struct SingleFlight<K, T, E> {
    in_flight: Mutex<HashMap<K, Slot<T, E>>>,
}

impl<K, T, E> Default for SingleFlight<K, T, E> {
    fn default() -> Self {
        Self {
            in_flight: Mutex::new(HashMap::new()),
        }
    }
}

impl<K, T, E> SingleFlight<K, T, E>
where
    K: Eq + Hash + Clone,
    T: Clone,
    E: Clone,
{
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn slots(&self) -> MutexGuard<'_, HashMap<K, Slot<T, E>>> {
        self.in_flight.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Runs `operation` unless one is already in flight for `key`.
    ///
    /// # Errors
    ///
    /// Returns the shared operation's error.
    pub async fn run<F, Fut>(&self, key: K, operation: F) -> Result<T, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, E>>,
    {
        let slot = Arc::clone(self.slots().entry(key.clone()).or_default());
        let result = slot.get_or_init(operation).await.clone();

        let mut slots = self.slots();
        if slots
            .get(&key)
            .is_some_and(|current| Arc::ptr_eq(current, &slot))
        {
            slots.remove(&key);
        }
        result
    }

    /// Returns `true` while an operation for `key` is running.
    #[must_use]
    pub fn is_in_flight(&self, key: &K) -> bool {
        self.slots().contains_key(key)
    }
}
