pub mod clubs;
pub mod health;
pub mod members;
pub mod memberships;
