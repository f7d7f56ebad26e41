use std::sync::Arc;

use tokio::sync::watch;
use tracing::debug;

/// The page-owned "dialog open" flag. Either component may flip it.
#[derive(Clone)]
pub struct DialogFlag {
    sender: Arc<watch::Sender<bool>>,
}

impl DialogFlag {
    pub fn new() -> Self {
        let (sender, _) = watch::channel(false);
        Self { sender: Arc::new(sender) }
    }

    pub fn is_open(&self) -> bool {
        *self.sender.borrow()
    }

    pub fn subscribe(&self) -> watch::Receiver<bool> {
        self.sender.subscribe()
    }

    pub fn open(&self) {
        self.set(true);
    }

    pub fn close(&self) {
        self.set(false);
    }

    fn set(&self, open: bool) {
        let changed = self.sender.send_if_modified(|current| {
            if *current == open {
                return false;
            }
            *current = open;
            true
        });
        if changed {
            debug!("Booking dialog {}", if open { "opened" } else { "closed" });
        }
    }
}

impl Default for DialogFlag {
    fn default() -> Self {
        Self::new()
    }
}
