//! Clubhouse membership service
//!
//! Members, clubs, and the member-owned many-to-many relation between them,
//! served over HTTP with actix-web and persisted in MySQL or in memory.

pub mod app;
pub mod config;
pub mod core;
pub mod logging;
pub mod middleware;
pub mod modules;
pub mod storage;

// Re-export commonly used types
pub use app::AppState;
pub use crate::core::{AppError, Result};
pub use modules::clubs;
pub use modules::members;
pub use modules::memberships;
