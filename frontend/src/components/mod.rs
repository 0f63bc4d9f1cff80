pub mod add_character;
pub mod admin;
pub mod characters;
pub mod dashboard;
pub mod guard;
pub mod home;
pub mod leaderboard;
pub mod login;
pub mod logout;
mod navbar;
pub mod quests;
pub mod register;
pub mod verify;

pub use navbar::Navbar;
