mod club;

pub use club::{Club, ClubRequest, UpdateClub};
