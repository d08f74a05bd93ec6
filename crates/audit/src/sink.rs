//! Audit sink trait

use crate::event::AuditEvent;

/// Destination for audit events
///
/// Implementations must return promptly and must not surface errors; the
/// enrollment path calls this after every attempt.
pub trait AuditSink: Send + Sync {
    fn publish(&self, event: AuditEvent);
}

/// Sink that discards everything
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopSink;

impl AuditSink for NoopSink {
    fn publish(&self, _event: AuditEvent) {}
}
