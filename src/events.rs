//! Adapter event bus — host-facing asynchronous notifications.

use tokio::sync::broadcast;

/// Events published to the hosting system.
///
/// This venue has no streaming channel (connect/disconnect are inert), so
/// the adapter never pushes market-data updates; `Error` is the only event
/// it emits.
#[derive(Debug, Clone)]
pub enum AdapterEvent {
    /// A public operation failed; the call returned an absent result.
    Error {
        operation: &'static str,
        message: String,
    },
}

/// Broadcast bus the facade publishes to. Hosts subscribe; publishing with
/// no live subscriber is a no-op.
pub struct EventBus {
    tx: broadcast::Sender<AdapterEvent>,
}

impl EventBus {
    pub fn new(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity);
        Self { tx }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<AdapterEvent> {
        self.tx.subscribe()
    }

    pub fn publish(&self, event: AdapterEvent) {
        // Send only fails when nobody is listening; that is fine.
        let _ = self.tx.send(event);
    }
}
