//! Running records: distance and time logged against a course.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::error::ValidationError;
use crate::domain::id::{CourseId, RecordId};
use crate::domain::pace;
use crate::domain::sort::Sortable;

/// A running record row as stored remotely. Pace is derived, never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunningRecord {
    pub id: RecordId,
    pub created_at: DateTime<Utc>,
    pub course_id: CourseId,
    pub distance_km: f64,
    pub duration_secs: u32,
    #[serde(default)]
    pub title: Option<String>,
}

impl RunningRecord {
    /// Pace rendered as `M'SS" / km`.
    #[must_use]
    pub fn pace(&self) -> String {
        pace::format_pace(self.distance_km, self.duration_secs)
    }

    /// Duration rendered as `H:MM:SS`.
    #[must_use]
    pub fn duration(&self) -> String {
        pace::format_duration(self.duration_secs)
    }
}

impl Sortable for RunningRecord {
    fn created_at(&self) -> Option<DateTime<Utc>> {
        Some(self.created_at)
    }

    // Titles are optional, so name ordering follows the null-is-larger
    // convention for untitled runs.
    fn sort_name(&self) -> Option<&str> {
        self.title.as_deref()
    }
}

/// Draft for logging a run. Distance and duration must be positive.
#[derive(Debug, Clone, Serialize)]
pub struct NewRecord {
    course_id: CourseId,
    distance_km: f64,
    duration_secs: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    title: Option<String>,
}

impl NewRecord {
    pub fn try_new(
        course_id: CourseId,
        distance_km: f64,
        duration_secs: u32,
    ) -> Result<Self, ValidationError> {
        if !distance_km.is_finite() || distance_km <= 0.0 {
            return Err(ValidationError::NonPositiveDistance { value: distance_km });
        }
        if duration_secs == 0 {
            return Err(ValidationError::ZeroDuration);
        }
        Ok(Self {
            course_id,
            distance_km,
            duration_secs,
            title: None,
        })
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn course_id(&self) -> &CourseId {
        &self.course_id
    }

    #[must_use]
    pub fn distance_km(&self) -> f64 {
        self.distance_km
    }

    #[must_use]
    pub fn duration_secs(&self) -> u32 {
        self.duration_secs
    }

    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }
}

/// Field-wise patch for a record. Unset fields are omitted from the wire.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RecordPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance_km: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_secs: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl RecordPatch {
    #[must_use]
    pub fn with_distance_km(mut self, distance_km: f64) -> Self {
        self.distance_km = Some(distance_km);
        self
    }

    #[must_use]
    pub fn with_duration_secs(mut self, duration_secs: u32) -> Self {
        self.duration_secs = Some(duration_secs);
        self
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_non_positive_distance() {
        let id = CourseId::new();
        assert!(matches!(
            NewRecord::try_new(id, 0.0, 1500),
            Err(ValidationError::NonPositiveDistance { .. })
        ));
        assert!(NewRecord::try_new(id, -2.0, 1500).is_err());
        assert!(NewRecord::try_new(id, f64::NAN, 1500).is_err());
    }

    #[test]
    fn rejects_zero_duration() {
        assert!(matches!(
            NewRecord::try_new(CourseId::new(), 5.0, 0),
            Err(ValidationError::ZeroDuration)
        ));
    }

    #[test]
    fn derives_pace_from_fields() {
        let record = RunningRecord {
            id: RecordId::new(),
            created_at: Utc::now(),
            course_id: CourseId::new(),
            distance_km: 5.0,
            duration_secs: 1500,
            title: None,
        };
        assert_eq!(record.pace(), "5'00\" / km");
        assert_eq!(record.duration(), "25:00");
    }
}
