// Clubs module

pub mod controllers;
pub mod models;
pub mod repositories;
pub mod services;

pub use models::{Club, ClubRequest, UpdateClub};
pub use repositories::{ClubRepository, InMemoryClubRepository, MySqlClubRepository};
pub use services::{is_valid_club_name, ClubService};
