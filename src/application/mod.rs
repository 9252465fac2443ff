//! Application core: the optimistic cache and the flows composed on top.

pub mod cache;
pub mod playlist;
pub mod session;

pub use cache::{CourseCache, EntityCache, MusicCache, RecordCache};
pub use playlist::PlaylistService;
pub use session::SessionStore;
