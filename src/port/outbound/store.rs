//! The remote entity gateway port and the entity contract it operates on.
//!
//! A gateway is a thin wrapper over the remote row store: exactly one round
//! trip per operation, no retries, no business rules. Validation happens in
//! the draft constructors before a payload ever reaches a gateway.

use std::fmt::Display;
use std::hash::Hash;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::domain::sort::{SortKey, Sortable};
use crate::domain::{
    Course, CourseId, CoursePatch, NewCourse, NewRecord, NewTrack, RecordId, RecordPatch,
    RunningRecord, RunningTrack, TrackId, TrackPatch,
};
use crate::error::Result;

/// A cacheable remote entity: identified, sortable, and mutable through a
/// draft (insert payload) and a patch (partial update).
pub trait Entity: Sortable + Clone + Send + Sync + DeserializeOwned + 'static {
    type Id: Clone + Eq + Hash + Display + Send + Sync + 'static;
    type Draft: Serialize + Send + Sync + 'static;
    type Patch: Serialize + Clone + Send + Sync + 'static;

    fn id(&self) -> &Self::Id;

    /// Merge a patch into a local copy. Used for the optimistic view while
    /// the remote update is in flight.
    fn apply_patch(&mut self, patch: &Self::Patch);
}

/// Remote row-store operations for one entity type.
#[async_trait]
pub trait EntityGateway<E: Entity>: Send + Sync {
    /// Fetch every row, ordered by the given key server-side.
    async fn fetch_all(&self, sort: SortKey) -> Result<Vec<E>>;

    /// Insert a draft and return the server row (with assigned id).
    async fn insert(&self, draft: E::Draft) -> Result<E>;

    /// Patch a row by id and return the updated server row.
    async fn update(&self, id: &E::Id, patch: E::Patch) -> Result<E>;

    /// Delete a row by id. Missing rows are a typed failure, not a no-op.
    async fn delete(&self, id: &E::Id) -> Result<()>;
}

impl Entity for Course {
    type Id = CourseId;
    type Draft = NewCourse;
    type Patch = CoursePatch;

    fn id(&self) -> &CourseId {
        &self.id
    }

    fn apply_patch(&mut self, patch: &CoursePatch) {
        if let Some(name) = &patch.name {
            self.name = name.clone();
        }
        if let Some(description) = &patch.description {
            self.description = Some(description.clone());
        }
        if let Some(path) = &patch.path {
            self.path = path.clone();
        }
        if let Some(image_path) = &patch.image_path {
            self.image_path = Some(image_path.clone());
        }
    }
}

impl Entity for RunningRecord {
    type Id = RecordId;
    type Draft = NewRecord;
    type Patch = RecordPatch;

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn apply_patch(&mut self, patch: &RecordPatch) {
        if let Some(distance_km) = patch.distance_km {
            self.distance_km = distance_km;
        }
        if let Some(duration_secs) = patch.duration_secs {
            self.duration_secs = duration_secs;
        }
        if let Some(title) = &patch.title {
            self.title = Some(title.clone());
        }
    }
}

impl Entity for RunningTrack {
    type Id = TrackId;
    type Draft = NewTrack;
    type Patch = TrackPatch;

    fn id(&self) -> &TrackId {
        &self.id
    }

    fn apply_patch(&mut self, patch: &TrackPatch) {
        if let Some(title) = &patch.title {
            self.title = title.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::RoutePath;
    use chrono::Utc;

    #[test]
    fn course_patch_merges_only_set_fields() {
        let mut course = Course {
            id: CourseId::new(),
            created_at: Utc::now(),
            name: "Old".into(),
            description: Some("keep me".into()),
            path: RoutePath::empty(),
            image_path: None,
        };

        course.apply_patch(&CoursePatch::default().with_name("New"));

        assert_eq!(course.name, "New");
        assert_eq!(course.description.as_deref(), Some("keep me"));
        assert!(course.image_path.is_none());
    }
}
