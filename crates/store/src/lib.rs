//! Registrar store - thread-safe in-memory repository
//!
//! One readers-writer lock guards every table and the duplicate-pair index.
//! ID generation runs on a separate atomic counter and never touches the lock.
//!
//! Multi-step sequences that must be atomic (duplicate check, capacity count,
//! insert) go through [`Store::write`], which hands out an [`EnrollmentTxn`]
//! holding the exclusive lock for its whole lifetime.

pub mod error;
pub mod id;
pub mod store;
pub mod txn;

pub use error::{Result, StoreError};
pub use id::IdGenerator;
pub use store::Store;
pub use txn::EnrollmentTxn;
