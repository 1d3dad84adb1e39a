pub mod club_repository;
pub mod in_memory_club_repository;

pub use club_repository::{ClubRepository, MySqlClubRepository};
pub use in_memory_club_repository::InMemoryClubRepository;
