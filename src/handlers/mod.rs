//! HTTP handlers: greeting, posts, entries, users.

pub mod entries;
pub mod posts;
pub mod root;
pub mod users;
pub use entries::*;
pub use posts::*;
pub use root::*;
pub use users::*;
