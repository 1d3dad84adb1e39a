// Members module

pub mod controllers;
pub mod models;
pub mod repositories;
pub mod services;

pub use models::{Member, MemberRequest, UpdateMember};
pub use repositories::{InMemoryMemberRepository, MemberRepository, MySqlMemberRepository};
pub use services::{is_permitted_email, MemberService};
