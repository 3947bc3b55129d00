//! Product feed: one catalog fetch per activation, exposed as a `FeedState`.
//!
//! The blocking catalog call runs on a worker thread and reports back over a
//! channel; the UI loop calls [`ProductFeed::poll`] to pick the result up.

use crate::domain::{FeedError, FeedState, ProductSummary};
use crate::infrastructure::CatalogClient;
use crossbeam_channel::{Receiver, Sender, TryRecvError, bounded, unbounded};
use std::sync::Arc;
use std::thread;

/// Number of products the grid shows at most.
pub const DISPLAY_LIMIT: usize = 12;

/// Number of skeleton cards shown while loading.
pub const SKELETON_COUNT: usize = 8;

type FetchResult = Result<Vec<ProductSummary>, FeedError>;

pub struct ProductFeed {
    client: Arc<dyn CatalogClient>,
    state: FeedState,
    pending: Option<Receiver<FetchResult>>,
    activations: u64,
    subscribers: Vec<Sender<FeedState>>,
}

impl ProductFeed {
    pub fn new(client: Arc<dyn CatalogClient>) -> Self {
        Self {
            client,
            state: FeedState::loading(),
            pending: None,
            activations: 0,
            subscribers: Vec::new(),
        }
    }

    /// Starts a fetch, replacing any previous state. A fetch still in flight
    /// from an earlier activation is abandoned and its result discarded.
    pub fn activate(&mut self) {
        self.activations += 1;
        let activation = self.activations;
        self.replace_state(FeedState::loading());

        let (tx, rx) = bounded(1);
        let client = Arc::clone(&self.client);
        tracing::info!(activation, "fetching product catalog");
        let spawned = thread::Builder::new()
            .name(format!("catalog-fetch-{activation}"))
            .spawn(move || {
                let result = client.fetch_products();
                // The feed may have been re-activated or dropped meanwhile.
                if tx.send(result).is_err() {
                    tracing::debug!(activation, "catalog result discarded");
                }
            });

        match spawned {
            Ok(_) => self.pending = Some(rx),
            Err(e) => {
                tracing::error!(activation, "could not spawn catalog worker: {e}");
                self.pending = None;
                self.settle(Err(FeedError::Network(e.to_string())));
            }
        }
    }

    /// Applies the fetch result if it has arrived. Returns true when the
    /// state changed.
    pub fn poll(&mut self) -> bool {
        let Some(rx) = &self.pending else {
            return false;
        };
        let result = match rx.try_recv() {
            Ok(result) => result,
            Err(TryRecvError::Empty) => return false,
            Err(TryRecvError::Disconnected) => Err(FeedError::Disconnected),
        };
        self.pending = None;
        self.settle(result);
        true
    }

    pub fn get_state(&self) -> &FeedState {
        &self.state
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Number of activations since construction.
    pub fn activations(&self) -> u64 {
        self.activations
    }

    /// Registers an observer of state replacements. Dropping the receiver
    /// unsubscribes it.
    pub fn subscribe(&mut self) -> Receiver<FeedState> {
        let (tx, rx) = unbounded();
        self.subscribers.push(tx);
        rx
    }

    fn settle(&mut self, result: FetchResult) {
        let state = match result {
            Ok(items) => {
                tracing::info!(count = items.len(), "product catalog loaded");
                FeedState::loaded(items)
            }
            Err(e) => {
                tracing::warn!("product catalog fetch failed: {e}");
                FeedState::failed(e.user_message())
            }
        };
        self.replace_state(state);
    }

    fn replace_state(&mut self, state: FeedState) {
        self.state = state;
        let snapshot = &self.state;
        self.subscribers.retain(|tx| tx.send(snapshot.clone()).is_ok());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Rating;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicU64, Ordering};
    use std::time::{Duration, Instant};

    struct StaticCatalog(FetchResult);

    impl CatalogClient for StaticCatalog {
        fn fetch_products(&self) -> Result<Vec<ProductSummary>, FeedError> {
            self.0.clone()
        }
    }

    /// Blocks each fetch until the test releases it.
    struct GatedCatalog {
        gate: Mutex<Receiver<FetchResult>>,
    }

    impl CatalogClient for GatedCatalog {
        fn fetch_products(&self) -> Result<Vec<ProductSummary>, FeedError> {
            let gate = self.gate.lock().unwrap();
            gate.recv().unwrap_or(Err(FeedError::Disconnected))
        }
    }

    /// Numbers its calls; the first one waits for the test to release it.
    struct FirstCallGated {
        calls: AtomicU64,
        started: Sender<()>,
        gate: Mutex<Receiver<()>>,
    }

    impl CatalogClient for FirstCallGated {
        fn fetch_products(&self) -> Result<Vec<ProductSummary>, FeedError> {
            let call = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
            if call == 1 {
                let _ = self.started.send(());
                let gate = self.gate.lock().unwrap();
                let _ = gate.recv();
            }
            Ok(vec![product(call)])
        }
    }

    struct PanickingCatalog;

    impl CatalogClient for PanickingCatalog {
        fn fetch_products(&self) -> Result<Vec<ProductSummary>, FeedError> {
            panic!("catalog worker crashed");
        }
    }

    fn product(id: u64) -> ProductSummary {
        ProductSummary {
            id,
            title: format!("Product {id}"),
            description: "A product".to_string(),
            price: 10.0 + id as f64,
            category: "electronics".to_string(),
            image: format!("https://example.com/{id}.jpg"),
            rating: Rating { score: 4.5, count: 10 },
        }
    }

    fn settle(feed: &mut ProductFeed) {
        let deadline = Instant::now() + Duration::from_secs(5);
        while !feed.poll() {
            assert!(Instant::now() < deadline, "feed never settled");
            thread::sleep(Duration::from_millis(2));
        }
    }

    #[test]
    fn test_starts_loading() {
        let feed = ProductFeed::new(Arc::new(StaticCatalog(Ok(Vec::new()))));
        assert_eq!(feed.get_state(), &FeedState::loading());
        assert!(!feed.is_pending());
    }

    #[test]
    fn test_successful_activation() {
        let items: Vec<_> = (1..=20).map(product).collect();
        let mut feed = ProductFeed::new(Arc::new(StaticCatalog(Ok(items.clone()))));

        feed.activate();
        assert!(feed.get_state().loading);
        settle(&mut feed);

        let state = feed.get_state();
        assert_eq!(state.items.len(), 20, "the feed itself never truncates");
        assert_eq!(state.items, items);
        assert!(!state.loading);
        assert!(state.error.is_none());
        assert!(!feed.is_pending());
    }

    #[test]
    fn test_failed_activation() {
        let mut feed = ProductFeed::new(Arc::new(StaticCatalog(Err(FeedError::Network(
            "connection refused".to_string(),
        )))));

        feed.activate();
        settle(&mut feed);

        let state = feed.get_state();
        assert!(state.items.is_empty());
        assert!(!state.loading);
        let message = state.error.as_deref().unwrap();
        assert!(!message.is_empty());
        assert!(message.contains("connection refused"));
    }

    #[test]
    fn test_worker_crash_settles_with_error() {
        let mut feed = ProductFeed::new(Arc::new(PanickingCatalog));
        feed.activate();
        settle(&mut feed);
        assert_eq!(
            feed.get_state().error.as_deref(),
            Some("Failed to load products: catalog request ended without a response")
        );
    }

    #[test]
    fn test_poll_without_activation_does_nothing() {
        let mut feed = ProductFeed::new(Arc::new(StaticCatalog(Ok(vec![product(1)]))));
        assert!(!feed.poll());
        assert!(feed.get_state().loading);
    }

    #[test]
    fn test_state_is_stable_between_mutations() {
        let mut feed = ProductFeed::new(Arc::new(StaticCatalog(Ok(vec![product(1), product(2)]))));
        feed.activate();
        settle(&mut feed);

        let first = feed.get_state().clone();
        assert!(!feed.poll());
        assert_eq!(feed.get_state(), &first);
        assert_eq!(feed.get_state(), &first);
    }

    #[test]
    fn test_reactivation_discards_superseded_result() {
        let (release, gate) = unbounded();
        let (started_tx, started) = unbounded();
        let catalog = Arc::new(FirstCallGated {
            calls: AtomicU64::new(0),
            started: started_tx,
            gate: Mutex::new(gate),
        });
        let mut feed = ProductFeed::new(catalog);

        feed.activate();
        started.recv_timeout(Duration::from_secs(5)).unwrap();
        feed.activate();
        assert_eq!(feed.activations(), 2);

        settle(&mut feed);
        let ids: Vec<u64> = feed.get_state().items.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![2]);

        // Let the abandoned first fetch finish; its answer must not land.
        release.send(()).unwrap();
        thread::sleep(Duration::from_millis(20));
        assert!(!feed.poll());
        let ids: Vec<u64> = feed.get_state().items.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![2]);
        assert!(!feed.is_pending());
    }

    #[test]
    fn test_subscribers_see_loading_then_result() {
        let mut feed = ProductFeed::new(Arc::new(StaticCatalog(Ok(vec![product(7)]))));
        let rx = feed.subscribe();
        let dropped = feed.subscribe();
        drop(dropped);

        feed.activate();
        settle(&mut feed);

        let seen: Vec<FeedState> = rx.try_iter().collect();
        assert_eq!(seen.len(), 2);
        assert!(seen[0].loading);
        assert_eq!(seen[1].items.len(), 1);
        assert_eq!(feed.subscribers.len(), 1);
    }

    #[test]
    fn test_dropping_feed_mid_fetch_is_harmless() {
        let (release, gate) = unbounded();
        let mut feed = ProductFeed::new(Arc::new(GatedCatalog { gate: Mutex::new(gate) }));
        feed.activate();
        drop(feed);
        // The worker finishes and finds nobody listening.
        release.send(Ok(vec![product(1)])).unwrap();
        thread::sleep(Duration::from_millis(20));
    }
}
