//! Shutdown coordination.
//!
//! The trigger is latched: a listener created after `trigger` has been called
//! still resolves immediately, so the order of signal handling and server
//! startup does not matter.

use tokio::sync::watch;

/// Owner side. Dropping it also releases every listener.
pub struct Shutdown {
    tx: watch::Sender<bool>,
}

/// Task side, handed to anything that has to stop when the relay stops.
#[derive(Clone)]
pub struct ShutdownListener {
    rx: watch::Receiver<bool>,
}

impl Shutdown {
    pub fn new() -> Self {
        let (tx, _) = watch::channel(false);
        Self { tx }
    }

    pub fn subscribe(&self) -> ShutdownListener {
        ShutdownListener {
            rx: self.tx.subscribe(),
        }
    }

    pub fn trigger(&self) {
        self.tx.send_replace(true);
    }

    pub fn is_triggered(&self) -> bool {
        *self.tx.borrow()
    }
}

impl Default for Shutdown {
    fn default() -> Self {
        Self::new()
    }
}

impl ShutdownListener {
    /// Resolve once shutdown has been triggered or the owner is gone.
    pub async fn wait(&mut self) {
        let _ = self.rx.wait_for(|triggered| *triggered).await;
    }
}
