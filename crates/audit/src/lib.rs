//! Registrar audit - best-effort asynchronous audit trail
//!
//! Enrollment attempts are published into a bounded channel and drained by a
//! single background task into an append-only in-memory log.
//!
//! # Guarantees
//! - `publish` never blocks and never fails; a full queue drops the event
//! - Events are recorded in the order they were dequeued
//! - After `stop`, nothing more is consumed

pub mod event;
pub mod sink;
pub mod worker;

pub use event::{AuditAction, AuditEvent, AuditResult};
pub use sink::{AuditSink, NoopSink};
pub use worker::{AuditWorker, DEFAULT_AUDIT_BUFFER};
