//! SeaORM entity definitions.

pub mod post;
pub mod user;
