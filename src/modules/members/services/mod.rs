pub mod member_service;

pub use member_service::{is_permitted_email, MemberService};
