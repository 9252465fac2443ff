//! The course entity: a named running route with optional geometry and image.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::error::ValidationError;
use crate::domain::id::CourseId;
use crate::domain::route::RoutePath;
use crate::domain::sort::Sortable;

/// A course row as stored remotely.
///
/// `id` and `created_at` are server-assigned and immutable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub id: CourseId,
    pub created_at: DateTime<Utc>,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub path: RoutePath,
    #[serde(default)]
    pub image_path: Option<String>,
}

impl Sortable for Course {
    fn created_at(&self) -> Option<DateTime<Utc>> {
        Some(self.created_at)
    }

    fn sort_name(&self) -> Option<&str> {
        Some(&self.name)
    }
}

/// Draft for creating a course. The id is server-assigned on insert.
///
/// Name validation is the caller's responsibility (the gateway enforces
/// nothing), so construction goes through [`NewCourse::try_new`].
#[derive(Debug, Clone, Serialize)]
pub struct NewCourse {
    name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    path: RoutePath,
    #[serde(skip_serializing_if = "Option::is_none")]
    image_path: Option<String>,
}

impl NewCourse {
    /// Create a draft with a non-empty name and an empty route.
    pub fn try_new(name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into().trim().to_string();
        if name.is_empty() {
            return Err(ValidationError::EmptyName);
        }
        Ok(Self {
            name,
            description: None,
            path: RoutePath::empty(),
            image_path: None,
        })
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Attach route geometry, re-normalized at this boundary.
    #[must_use]
    pub fn with_path(mut self, path: RoutePath) -> Self {
        self.path = path.normalized();
        self
    }

    #[must_use]
    pub fn with_image_path(mut self, image_path: impl Into<String>) -> Self {
        self.image_path = Some(image_path.into());
        self
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    #[must_use]
    pub fn path(&self) -> &RoutePath {
        &self.path
    }

    #[must_use]
    pub fn image_path(&self) -> Option<&str> {
        self.image_path.as_deref()
    }
}

/// Field-wise patch for updating a course. Unset fields are left untouched
/// and omitted from the wire body.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CoursePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<RoutePath>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_path: Option<String>,
}

impl CoursePatch {
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Replace the route geometry, re-normalized at this boundary.
    #[must_use]
    pub fn with_path(mut self, path: RoutePath) -> Self {
        self.path = Some(path.normalized());
        self
    }

    #[must_use]
    pub fn with_image_path(mut self, image_path: impl Into<String>) -> Self {
        self.image_path = Some(image_path.into());
        self
    }

    /// True when no field is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.path.is_none()
            && self.image_path.is_none()
    }
}
