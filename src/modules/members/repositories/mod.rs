pub mod in_memory_member_repository;
pub mod member_repository;

pub use in_memory_member_repository::InMemoryMemberRepository;
pub use member_repository::{MemberRepository, MySqlMemberRepository};
