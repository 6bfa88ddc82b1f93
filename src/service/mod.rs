//! Persistence operations for each entity. Every function runs against one checked-out connection.

pub mod entries;
pub mod posts;

pub use entries::EntryService;
pub use posts::PostService;
