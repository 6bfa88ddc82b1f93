//! Runtime configuration loaded from the environment (and `.env` when present).

mod settings;

pub use settings::{Settings, DEFAULT_BIND_ADDR, DEFAULT_DATABASE_URL};
