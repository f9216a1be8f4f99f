//! Entity definitions for the MiniTwit data model

pub mod follower;
pub mod twit;
pub mod user;

pub use follower::Follower;
pub use twit::{NewTwit, Twit};
pub use user::{NewUser, User};
