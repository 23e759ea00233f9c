//! Business logic services

pub mod resolution_board;
pub mod wish_feed;

pub use resolution_board::ResolutionBoard;
pub use wish_feed::WishFeed;
