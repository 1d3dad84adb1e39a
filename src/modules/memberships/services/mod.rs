pub mod membership_service;

pub use membership_service::MembershipService;
