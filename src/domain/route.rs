//! Course route geometry.
//!
//! A route is an ordered sequence of geographic points. Exactly one wire
//! shape is accepted: a JSON array of `{"lat": .., "lng": ..}` objects.
//! Normalization happens once, at the storage boundary, and is idempotent:
//! normalizing an already-normalized path returns it unchanged.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::error::ValidationError;

/// A geographic point in WGS84 coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

impl GeoPoint {
    #[must_use]
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// True when both coordinates are finite numbers.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.lat.is_finite() && self.lng.is_finite()
    }

    fn normalized(self) -> Self {
        Self {
            lat: self.lat.clamp(-90.0, 90.0),
            lng: wrap_longitude(self.lng),
        }
    }
}

/// Wrap a longitude into the half-open interval (-180, 180].
fn wrap_longitude(lng: f64) -> f64 {
    let mut wrapped = lng % 360.0;
    if wrapped <= -180.0 {
        wrapped += 360.0;
    } else if wrapped > 180.0 {
        wrapped -= 360.0;
    }
    wrapped
}

/// An ordered sequence of route points. May be empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoutePath(Vec<GeoPoint>);

impl RoutePath {
    /// An empty route.
    #[must_use]
    pub fn empty() -> Self {
        Self(Vec::new())
    }

    /// Build a route from raw points, normalizing at the boundary.
    ///
    /// Non-finite points are dropped; latitudes are clamped to [-90, 90]
    /// and longitudes wrapped into (-180, 180].
    #[must_use]
    pub fn from_points(points: Vec<GeoPoint>) -> Self {
        Self(
            points
                .into_iter()
                .filter(GeoPoint::is_finite)
                .map(GeoPoint::normalized)
                .collect(),
        )
    }

    /// Re-apply normalization. A no-op on output of [`Self::from_points`].
    #[must_use]
    pub fn normalized(self) -> Self {
        Self::from_points(self.0)
    }

    #[must_use]
    pub fn points(&self) -> &[GeoPoint] {
        &self.0
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Coordinate average of the route, used to center a map viewport.
    ///
    /// Returns `None` for an empty route.
    #[must_use]
    pub fn center(&self) -> Option<GeoPoint> {
        if self.0.is_empty() {
            return None;
        }
        let n = self.0.len() as f64;
        let (lat_sum, lng_sum) = self
            .0
            .iter()
            .fold((0.0, 0.0), |(lat, lng), p| (lat + p.lat, lng + p.lng));
        Some(GeoPoint::new(lat_sum / n, lng_sum / n))
    }
}

impl FromStr for RoutePath {
    type Err = ValidationError;

    /// Parse the CLI form `lat,lng;lat,lng;...`. An empty string is an
    /// empty route.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Ok(Self::empty());
        }
        let mut points = Vec::new();
        for part in trimmed.split(';') {
            let (lat, lng) = part
                .split_once(',')
                .ok_or_else(|| ValidationError::MalformedPoint {
                    value: part.to_string(),
                })?;
            let lat: f64 = lat
                .trim()
                .parse()
                .map_err(|_| ValidationError::MalformedPoint {
                    value: part.to_string(),
                })?;
            let lng: f64 = lng
                .trim()
                .parse()
                .map_err(|_| ValidationError::MalformedPoint {
                    value: part.to_string(),
                })?;
            points.push(GeoPoint::new(lat, lng));
        }
        Ok(Self::from_points(points))
    }
}
