//! # Single-Flight Coordinator
//!
//! Runs at most one instance of a keyed piece of async work at a time. The
//! first caller for a key starts the work; callers arriving while it is in
//! flight wait for the same result instead of starting their own.
//!
//! The work runs on its own task. A caller that stops waiting (dropped
//! future, cancelled request) never abandons the others, and the shared
//! outcome is delivered to every waiter that is still listening.

use std::collections::HashMap;
use std::future::Future;
use std::hash::Hash;
use std::sync::Arc;

use parking_lot::Mutex;
use thiserror::Error;
use tokio::sync::oneshot;

/// The in-flight work ended without producing a value (it panicked or the
/// runtime shut down).
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
#[error("single-flight work was abandoned before completing")]
pub struct FlightAbandoned;

type Waiters<V> = Vec<oneshot::Sender<V>>;

/// Keyed single-flight coordinator. Cloning shares the in-flight table.
pub struct SingleFlight<K, V> {
    inflight: Arc<Mutex<HashMap<K, Waiters<V>>>>,
}

impl<K, V> Clone for SingleFlight<K, V> {
    fn clone(&self) -> Self {
        Self {
            inflight: Arc::clone(&self.inflight),
        }
    }
}

impl<K, V> Default for SingleFlight<K, V> {
    fn default() -> Self {
        Self {
            inflight: Arc::new(Mutex::new(HashMap::new())),
        }
    }
}

impl<K, V> SingleFlight<K, V>
where
    K: Eq + Hash + Clone + Send + 'static,
    V: Clone + Send + 'static,
{
    pub fn new() -> Self {
        Self::default()
    }

    /// True while work for `key` is running.
    pub fn is_in_flight(&self, key: &K) -> bool {
        self.inflight.lock().contains_key(key)
    }

    /// Number of callers currently waiting on `key`, the starter included.
    pub fn waiters(&self, key: &K) -> usize {
        self.inflight.lock().get(key).map_or(0, Vec::len)
    }

    /// Run `work` unless it is already running for `key`, and wait for the
    /// shared outcome.
    ///
    /// `work` is only invoked by the caller that starts the flight. The
    /// check for an existing flight and the registration of a new one happen
    /// under a single lock acquisition, so two callers can never both start.
    pub async fn run_exclusive<F, Fut>(&self, key: K, work: F) -> Result<V, FlightAbandoned>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = V> + Send + 'static,
    {
        let (tx, rx) = oneshot::channel();

        let starts_flight = {
            let mut inflight = self.inflight.lock();
            match inflight.get_mut(&key) {
                Some(waiters) => {
                    waiters.push(tx);
                    false
                }
                None => {
                    inflight.insert(key.clone(), vec![tx]);
                    true
                }
            }
        };

        if starts_flight {
            let guard = FlightGuard {
                inflight: Arc::clone(&self.inflight),
                key: Some(key),
            };
            let fut = work();
            tokio::spawn(async move {
                let value = fut.await;
                guard.complete(value);
            });
        }

        rx.await.map_err(|_| FlightAbandoned)
    }
}

/// Removes the flight entry when the work task ends, however it ends.
struct FlightGuard<K: Eq + Hash, V> {
    inflight: Arc<Mutex<HashMap<K, Waiters<V>>>>,
    key: Option<K>,
}

impl<K: Eq + Hash, V: Clone> FlightGuard<K, V> {
    fn complete(mut self, value: V) {
        let waiters = self
            .key
            .take()
            .and_then(|key| self.inflight.lock().remove(&key))
            .unwrap_or_default();

        for waiter in waiters {
            // A waiter that stopped listening is fine to skip.
            let _ = waiter.send(value.clone());
        }
    }
}

impl<K: Eq + Hash, V> Drop for FlightGuard<K, V> {
    fn drop(&mut self) {
        // Dropping the senders wakes every waiter with FlightAbandoned.
        if let Some(key) = self.key.take() {
            self.inflight.lock().remove(&key);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    #[tokio::test]
    async fn concurrent_callers_share_one_run() {
        let flight: SingleFlight<&'static str, u32> = SingleFlight::new();
        let runs = Arc::new(AtomicUsize::new(0));

        let calls = (0..5).map(|_| {
            let flight = flight.clone();
            let runs = Arc::clone(&runs);
            async move {
                flight
                    .run_exclusive("refresh", move || async move {
                        runs.fetch_add(1, Ordering::SeqCst);
                        tokio::time::sleep(Duration::from_millis(50)).await;
                        7
                    })
                    .await
            }
        });

        let results = futures::future::join_all(calls).await;
        assert_eq!(runs.load(Ordering::SeqCst), 1);
        assert!(results.iter().all(|r| *r == Ok(7)));
        assert!(!flight.is_in_flight(&"refresh"));
    }

    #[tokio::test]
    async fn next_flight_starts_after_completion() {
        let flight: SingleFlight<u8, usize> = SingleFlight::new();
        let runs = Arc::new(AtomicUsize::new(0));

        for expected in 1..=2 {
            let counter = Arc::clone(&runs);
            let value = flight
                .run_exclusive(0, move || async move { counter.fetch_add(1, Ordering::SeqCst) + 1 })
                .await
                .unwrap();
            assert_eq!(value, expected);
        }
    }

    #[tokio::test]
    async fn dropped_caller_does_not_abandon_others() {
        let flight: SingleFlight<u8, &'static str> = SingleFlight::new();

        let starter = {
            let flight = flight.clone();
            tokio::spawn(async move {
                flight
                    .run_exclusive(1, || async {
                        tokio::time::sleep(Duration::from_millis(80)).await;
                        "done"
                    })
                    .await
            })
        };
        tokio::time::sleep(Duration::from_millis(10)).await;
        assert!(flight.is_in_flight(&1));

        let follower = {
            let flight = flight.clone();
            tokio::spawn(async move { flight.run_exclusive(1, || async { "second" }).await })
        };
        tokio::time::sleep(Duration::from_millis(10)).await;
        starter.abort();

        assert_eq!(follower.await.unwrap(), Ok("done"));
    }

    #[tokio::test]
    async fn panicking_work_releases_waiters() {
        let flight: SingleFlight<u8, u8> = SingleFlight::new();
        let result = flight
            .run_exclusive(9, || async {
                let broken = true;
                if broken {
                    panic!("refresh task blew up");
                }
                0
            })
            .await;

        assert_eq!(result, Err(FlightAbandoned));
        assert!(!flight.is_in_flight(&9));
    }
}
