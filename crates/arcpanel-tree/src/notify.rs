//! Change notification primitives.
//!
//! The tree signals "something changed, re-read everything" with no
//! payload. The channel value is a generation counter rather than a unit,
//! so consumers (and tests) can tell exactly how many signals fired.

use tokio::sync::watch;

/// Sending side of the tree change signal.
#[derive(Debug)]
pub struct ChangeNotifier {
    sender: watch::Sender<u64>,
}

impl ChangeNotifier {
    /// Create a notifier at generation zero.
    pub fn new() -> Self {
        let (sender, _) = watch::channel(0);
        Self { sender }
    }

    /// Fire the change signal once.
    pub fn notify(&self) {
        self.sender.send_modify(|generation| *generation += 1);
    }

    /// Create a listener attached to this notifier.
    pub fn subscribe(&self) -> ChangeListener {
        ChangeListener {
            receiver: self.sender.subscribe(),
        }
    }
}

impl Default for ChangeNotifier {
    fn default() -> Self {
        Self::new()
    }
}

/// Receiving side of the tree change signal.
#[derive(Debug, Clone)]
pub struct ChangeListener {
    receiver: watch::Receiver<u64>,
}

impl ChangeListener {
    /// The current generation, without marking it observed.
    pub fn generation(&self) -> u64 {
        *self.receiver.borrow()
    }

    /// Whether the signal fired since the last observation.
    pub fn has_changed(&self) -> bool {
        self.receiver.has_changed().unwrap_or(false)
    }

    /// Wait for the next signal, marking it observed.
    ///
    /// Returns `false` once the notifier is gone and no further signal
    /// can arrive.
    pub async fn changed(&mut self) -> bool {
        self.receiver.changed().await.is_ok()
    }
}
