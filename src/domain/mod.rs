//! Domain types: entities, identifiers, route geometry, pace math, and the
//! list sort strategy.

pub mod course;
pub mod error;
pub mod id;
pub mod music;
pub mod pace;
pub mod record;
pub mod route;
pub mod sort;

pub use course::{Course, CoursePatch, NewCourse};
pub use id::{CourseId, RecordId, TrackId, UserId};
pub use music::{NewTrack, RunningTrack, TrackInfo, TrackPatch};
pub use record::{NewRecord, RecordPatch, RunningRecord};
pub use route::{GeoPoint, RoutePath};
pub use sort::{SortKey, Sortable};
