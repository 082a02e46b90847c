use tokio::sync::broadcast;
use tracing::trace;

/// How many events a slow subscriber can fall behind before it starts lagging.
const EVENT_CAPACITY: usize = 64;

/// Events published by a [`Network`](crate::Network).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum NetworkEvent {
    /// Result of a liveness probe. Published on every probe, even when the
    /// value did not change.
    Online(bool),
}

impl NetworkEvent {
    /// Name the event is published under.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Online(_) => "online",
        }
    }
}

/// Publish/subscribe channel for [`NetworkEvent`]s.
#[derive(Debug, Clone)]
pub struct Events {
    sender: broadcast::Sender<NetworkEvent>,
}

impl Events {
    pub fn new() -> Self {
        let (sender, _) = broadcast::channel(EVENT_CAPACITY);
        Self { sender }
    }

    /// Publish an event to every current subscriber.
    pub fn emit(&self, event: NetworkEvent) {
        trace!(target: "lamden_network", event = event.name(), ?event, "emitting");
        // Sending only fails when nobody is subscribed, which is fine.
        let _ = self.sender.send(event);
    }

    pub fn subscribe(&self) -> broadcast::Receiver<NetworkEvent> {
        self.sender.subscribe()
    }

    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for Events {
    fn default() -> Self {
        Self::new()
    }
}
