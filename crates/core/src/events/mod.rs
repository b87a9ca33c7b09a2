//! Domain events - change notifications emitted by core services after
//! successful mutations.

mod domain_event;
mod sink;

pub use domain_event::DomainEvent;
pub use sink::{DomainEventSink, MockDomainEventSink, NoOpDomainEventSink};
