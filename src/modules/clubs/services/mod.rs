pub mod club_service;

pub use club_service::{is_valid_club_name, ClubService};
