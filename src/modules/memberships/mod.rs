// Memberships module: the member-owned relation between members and clubs

pub mod controllers;
pub mod services;

pub use services::MembershipService;
