//! Shared types used by the transport and the domain model.

pub mod enums;
pub mod flags;
pub mod options;
pub mod time;

// Re-export commonly used items
pub use enums::*;
pub use flags::ResponseFlags;
pub use options::FetchOptions;
pub use time::{parse_time, BACKUP_TIMESTAMP, TIME_FORMAT};
