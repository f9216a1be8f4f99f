//! Repository implementations over the SQLite pool

pub mod follower_repository;
pub mod twit_repository;
pub mod user_repository;

pub use follower_repository::FollowerRepository;
pub use twit_repository::TwitRepository;
pub use user_repository::UserRepository;
