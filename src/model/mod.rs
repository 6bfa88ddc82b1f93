//! Canonical entities and the request payloads that create or replace them.

mod entry;
mod post;

pub use entry::{Entry, EntryPayload, EntryRow, Metadata};
pub use post::{Post, PostPayload};
