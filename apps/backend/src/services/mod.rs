pub mod sessions;

pub use sessions::{spawn_idle_sweeper, SessionDirectory, SessionHandle, DEFAULT_IDLE_TTL};
