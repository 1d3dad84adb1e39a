pub mod repository;

pub use repository::{Relations, Repository};
