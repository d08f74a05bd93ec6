//! Registrar core - domain records shared by every crate
//!
//! Crate này chỉ chứa dữ liệu thuần: students, instructors, courses và
//! enrollments. Không có logic đồng bộ hay lưu trữ ở đây.

pub mod id;
pub mod models;

pub use id::IdPrefix;
pub use models::*;
