use std::future::Future;
use tokio::sync::OnceCell;

/// A one-shot asynchronous initialisation shared by every waiter.
///
/// The first `wait` runs the initializer; concurrent and later waiters
/// suspend until it has finished and then all observe the same value.
pub struct ReadinessGate<T> {
    cell: OnceCell<T>,
}

impl<T> ReadinessGate<T> {
    pub const fn new() -> Self {
        Self {
            cell: OnceCell::const_new(),
        }
    }

    pub async fn wait<F, Fut>(&self, init: F) -> &T
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = T>,
    {
        self.cell.get_or_init(init).await
    }
}

#[derive(Debug)]
pub struct MapsLibrary {
    pub id: &'static str,
    pub libraries: Vec<&'static str>,
    pub client: reqwest::Client,
}

static MAPS_LIBRARY: ReadinessGate<MapsLibrary> = ReadinessGate::new();

/// Resolves the process-wide maps library, loading it on first use.
pub async fn load() -> &'static MapsLibrary {
    MAPS_LIBRARY
        .wait(|| async {
            let library = MapsLibrary {
                id: "google-map-script",
                libraries: vec!["places"],
                client: reqwest::Client::new(),
            };

            tracing::info!(
                "loaded maps library {} with {:?}",
                library.id,
                library.libraries
            );

            library
        })
        .await
}

#[test]
fn gate_initializes_once() {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tokio_test::block_on;

    let gate: ReadinessGate<usize> = ReadinessGate::new();
    let calls = AtomicUsize::new(0);
    let calls = &calls;

    let init = move || async move {
        tokio::task::yield_now().await;
        calls.fetch_add(1, Ordering::SeqCst) + 41
    };

    assert!(!gate.cell.initialized());

    let (a, b) = block_on(async { tokio::join!(gate.wait(init), gate.wait(init)) });

    assert_eq!((*a, *b), (41, 41));
    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert_eq!(gate.cell.get(), Some(&41));
}

#[tokio::test]
async fn library_loads_once_per_process() {
    let first = load().await as *const MapsLibrary;
    let second = load().await as *const MapsLibrary;

    assert_eq!(first, second);
    assert!(MAPS_LIBRARY.cell.initialized());
    assert_eq!(load().await.libraries, vec!["places"]);
}
