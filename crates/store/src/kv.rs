//! Store contract: get/set/remove plus change subscription.

use std::sync::{Mutex, mpsc};

use thiserror::Error;

/// Store-level error.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store io failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("store (de)serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Internal lock poisoning.
    #[error("store lock poisoned")]
    Poisoned,
}

/// A change notification: which key was written or removed.
///
/// Carries only the key; subscribers re-read through the store. Keeps the
/// channel payload cheap and avoids stale snapshots in flight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreChange {
    pub key: String,
}

/// A subscription to store change notifications.
///
/// Each subscription gets a copy of every change published after it was
/// created (broadcast semantics). Designed for single-threaded consumption.
#[derive(Debug)]
pub struct Subscription<M> {
    receiver: mpsc::Receiver<M>,
}

impl<M> Subscription<M> {
    pub fn new(receiver: mpsc::Receiver<M>) -> Self {
        Self { receiver }
    }

    /// Block until the next message is available.
    pub fn recv(&self) -> Result<M, mpsc::RecvError> {
        self.receiver.recv()
    }

    /// Try to receive a message without blocking.
    pub fn try_recv(&self) -> Result<M, mpsc::TryRecvError> {
        self.receiver.try_recv()
    }
}

/// Key-value store with change notifications.
///
/// The dashboard treats this the way the browser original treats local
/// storage: whole serialized collections under well-known keys, rewritten on
/// every mutation. Implementations must be safe to share across threads.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;

    fn remove(&self, key: &str) -> Result<(), StoreError>;

    fn subscribe(&self) -> Subscription<StoreChange>;
}

/// Shared fan-out of change notifications to subscribers.
///
/// Best-effort broadcast; dead subscribers are pruned while publishing.
#[derive(Debug, Default)]
pub(crate) struct ChangeNotifier {
    subscribers: Mutex<Vec<mpsc::Sender<StoreChange>>>,
}

impl ChangeNotifier {
    pub(crate) fn subscribe(&self) -> Subscription<StoreChange> {
        let (sender, receiver) = mpsc::channel();
        match self.subscribers.lock() {
            Ok(mut subs) => subs.push(sender),
            Err(_) => tracing::error!("store subscriber list poisoned; subscription is inert"),
        }
        Subscription::new(receiver)
    }

    pub(crate) fn publish(&self, key: &str) {
        let Ok(mut subs) = self.subscribers.lock() else {
            return;
        };
        // Drop any dead subscribers while publishing.
        subs.retain(|sender| {
            sender
                .send(StoreChange {
                    key: key.to_string(),
                })
                .is_ok()
        });
    }
}
