//! Utils library - configuration and request validation
//!
//! Crate này chứa các hàm tiện ích dùng chung cho server.

pub mod config;
pub mod validation;

pub use config::*;
pub use validation::*;
