pub mod club_controller;

pub use club_controller::configure;
