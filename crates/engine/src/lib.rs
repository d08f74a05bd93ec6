//! Registrar enrollment engine
//!
//! Decides whether an enrollment attempt is admitted, waitlisted or
//! rejected, and reports every attempt to the audit sink.
//!
//! Flow: Existence checks → Duplicate check → Capacity count → Insert →
//! (lock released) → Audit publish

pub mod engine;
pub mod error;

pub use engine::EnrollmentEngine;
pub use error::{EnrollError, Result};
