//! Storage backends shared across entity modules

pub mod in_memory;

pub use in_memory::InMemoryStore;
