//! Application services orchestrating the ports.

mod posts;

pub use posts::PostService;
