//! Domain event sink trait and implementations.

use std::sync::{Arc, Mutex};

use super::DomainEvent;

/// Trait for receiving domain events.
///
/// Implementations translate domain events into platform-specific actions.
/// Core services emit events through this trait after successful mutations.
///
/// `emit()` must be fast and non-blocking, and failure to deliver an event
/// must not affect the domain operation that produced it.
pub trait DomainEventSink: Send + Sync {
    /// Emit a single domain event.
    fn emit(&self, event: DomainEvent);
}

/// No-op implementation for tests or contexts that don't need events.
#[derive(Clone, Default)]
pub struct NoOpDomainEventSink;

impl DomainEventSink for NoOpDomainEventSink {
    fn emit(&self, _event: DomainEvent) {
        // Intentionally empty - events are discarded
    }
}

/// Mock sink for testing - collects emitted events.
#[derive(Clone, Default)]
pub struct MockDomainEventSink {
    events: Arc<Mutex<Vec<DomainEvent>>>,
}

impl MockDomainEventSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns all collected events.
    pub fn events(&self) -> Vec<DomainEvent> {
        self.events.lock().unwrap().clone()
    }

    /// Returns the number of collected events.
    pub fn len(&self) -> usize {
        self.events.lock().unwrap().len()
    }

    /// Returns true if no events have been collected.
    pub fn is_empty(&self) -> bool {
        self.events.lock().unwrap().is_empty()
    }
}

impl DomainEventSink for MockDomainEventSink {
    fn emit(&self, event: DomainEvent) {
        self.events.lock().unwrap().push(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_noop_sink_does_not_panic() {
        let sink = NoOpDomainEventSink;
        sink.emit(DomainEvent::campaigns_changed(vec!["c-1".to_string()]));
        sink.emit(DomainEvent::session_changed(false));
    }

    #[test]
    fn test_mock_sink_collects_events() {
        let sink = MockDomainEventSink::new();
        assert!(sink.is_empty());

        sink.emit(DomainEvent::campaigns_changed(vec!["c-1".to_string()]));
        sink.emit(DomainEvent::session_changed(true));
        assert_eq!(sink.len(), 2);

        let events = sink.events();
        assert_eq!(
            events[0],
            DomainEvent::CampaignsChanged {
                campaign_ids: vec!["c-1".to_string()]
            }
        );
        assert_eq!(
            events[1],
            DomainEvent::SessionChanged {
                authenticated: true
            }
        );
    }
}
