use tokio::sync::broadcast;
use tracing::debug;

use crate::models::Notification;

pub type NotificationReceiver = broadcast::Receiver<Notification>;

/// Fan-out for toasts. Publishing with nobody listening is not an error.
#[derive(Clone)]
pub struct NotificationCenter {
    sender: broadcast::Sender<Notification>,
}

impl NotificationCenter {
    pub fn new() -> Self {
        let (sender, _) = broadcast::channel(16);
        Self { sender }
    }

    pub fn subscribe(&self) -> NotificationReceiver {
        self.sender.subscribe()
    }

    pub fn publish(&self, notification: Notification) {
        debug!("Publishing notification: {}", notification.title);
        if self.sender.send(notification).is_err() {
            debug!("No notification subscribers");
        }
    }
}

impl Default for NotificationCenter {
    fn default() -> Self {
        Self::new()
    }
}
