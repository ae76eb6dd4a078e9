use std::{fmt, str::FromStr};

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::{description::describe, error::ValidationError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WorkoutId(u64);

impl WorkoutId {
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for WorkoutId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for WorkoutId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(Self)
    }
}

/// A point on the map. Stored as `[lat, lng]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }
}

impl From<[f64; 2]> for Coordinates {
    fn from([latitude, longitude]: [f64; 2]) -> Self {
        Self { latitude, longitude }
    }
}

impl From<Coordinates> for [f64; 2] {
    fn from(coordinates: Coordinates) -> Self {
        [coordinates.latitude, coordinates.longitude]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkoutKind {
    #[default]
    Running,
    Cycling,
}

impl WorkoutKind {
    pub fn as_str(self) -> &'static str {
        match self {
            WorkoutKind::Running => "running",
            WorkoutKind::Cycling => "cycling",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            WorkoutKind::Running => "🏃‍♂️",
            WorkoutKind::Cycling => "🚴‍♀️",
        }
    }
}

impl fmt::Display for WorkoutKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WorkoutKind {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "running" => Ok(WorkoutKind::Running),
            "cycling" => Ok(WorkoutKind::Cycling),
            other => Err(ValidationError::UnknownKind(other.to_owned())),
        }
    }
}

/// Variant specific fields. The `type` tag is what lets a stored list come
/// back as the right variants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum WorkoutDetails {
    Running {
        cadence_spm: u32,
        pace_min_per_km: f64,
    },
    Cycling {
        elevation_gain_m: f64,
        speed_km_per_hour: f64,
    },
}

impl WorkoutDetails {
    pub fn kind(&self) -> WorkoutKind {
        match self {
            WorkoutDetails::Running { .. } => WorkoutKind::Running,
            WorkoutDetails::Cycling { .. } => WorkoutKind::Cycling,
        }
    }
}

/// A single logged workout.
///
/// Everything except the click counter is fixed at construction. Derived
/// values (pace, speed, description) are computed once in the constructors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Workout {
    id: WorkoutId,
    created_at: DateTime<FixedOffset>,
    distance_km: f64,
    duration_min: f64,
    coordinates: Coordinates,
    clicks: u32,
    description: String,
    #[serde(flatten)]
    details: WorkoutDetails,
}

impl Workout {
    pub fn running(
        id: WorkoutId,
        created_at: DateTime<FixedOffset>,
        distance_km: f64,
        duration_min: f64,
        coordinates: Coordinates,
        cadence_spm: u32,
    ) -> Self {
        let details = WorkoutDetails::Running {
            cadence_spm,
            pace_min_per_km: pace(distance_km, duration_min),
        };
        Self::new(id, created_at, distance_km, duration_min, coordinates, details)
    }

    pub fn cycling(
        id: WorkoutId,
        created_at: DateTime<FixedOffset>,
        distance_km: f64,
        duration_min: f64,
        coordinates: Coordinates,
        elevation_gain_m: f64,
    ) -> Self {
        let details = WorkoutDetails::Cycling {
            elevation_gain_m,
            speed_km_per_hour: speed(distance_km, duration_min),
        };
        Self::new(id, created_at, distance_km, duration_min, coordinates, details)
    }

    fn new(
        id: WorkoutId,
        created_at: DateTime<FixedOffset>,
        distance_km: f64,
        duration_min: f64,
        coordinates: Coordinates,
        details: WorkoutDetails,
    ) -> Self {
        Self {
            id,
            created_at,
            distance_km,
            duration_min,
            coordinates,
            clicks: 0,
            description: describe(details.kind(), created_at.date_naive()),
            details,
        }
    }

    pub fn id(&self) -> WorkoutId {
        self.id
    }

    pub fn kind(&self) -> WorkoutKind {
        self.details.kind()
    }

    pub fn created_at(&self) -> DateTime<FixedOffset> {
        self.created_at
    }

    pub fn distance_km(&self) -> f64 {
        self.distance_km
    }

    pub fn duration_min(&self) -> f64 {
        self.duration_min
    }

    pub fn coordinates(&self) -> Coordinates {
        self.coordinates
    }

    pub fn clicks(&self) -> u32 {
        self.clicks
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn details(&self) -> &WorkoutDetails {
        &self.details
    }

    pub fn pace_min_per_km(&self) -> Option<f64> {
        match self.details {
            WorkoutDetails::Running { pace_min_per_km, .. } => Some(pace_min_per_km),
            WorkoutDetails::Cycling { .. } => None,
        }
    }

    pub fn speed_km_per_hour(&self) -> Option<f64> {
        match self.details {
            WorkoutDetails::Cycling { speed_km_per_hour, .. } => Some(speed_km_per_hour),
            WorkoutDetails::Running { .. } => None,
        }
    }

    /// Registers a selection from the list and returns the new count.
    pub(crate) fn click(&mut self) -> u32 {
        self.clicks += 1;
        self.clicks
    }
}

/// Minutes per km.
pub(crate) fn pace(distance_km: f64, duration_min: f64) -> f64 {
    duration_min / distance_km
}

/// Km per hour.
pub(crate) fn speed(distance_km: f64, duration_min: f64) -> f64 {
    distance_km / (duration_min / 60.)
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn april_14() -> DateTime<FixedOffset> {
        FixedOffset::east_opt(2 * 3600)
            .unwrap()
            .with_ymd_and_hms(2025, 4, 14, 9, 30, 0)
            .unwrap()
    }

    #[test]
    fn running_pace_is_minutes_per_km() {
        let workout = Workout::running(WorkoutId::new(1), april_14(), 5., 30., Coordinates::new(10., 20.), 170);

        assert_eq!(workout.pace_min_per_km(), Some(6.));
        assert_eq!(workout.speed_km_per_hour(), None);
        assert_eq!(workout.kind(), WorkoutKind::Running);
        assert_eq!(workout.description(), "Running on April 14");
        assert_eq!(workout.clicks(), 0);
    }

    #[test]
    fn cycling_speed_is_km_per_hour() {
        let workout = Workout::cycling(WorkoutId::new(2), april_14(), 20., 60., Coordinates::new(1., 1.), -5.);

        assert_eq!(workout.speed_km_per_hour(), Some(20.));
        assert_eq!(workout.pace_min_per_km(), None);
        assert_eq!(workout.description(), "Cycling on April 14");
    }

    #[test]
    fn derived_metrics_match_formula() {
        for distance in [0.1, 1., 3.3, 42.195, 180.] {
            for duration in [0.5, 12., 59.9, 600.] {
                let running = Workout::running(WorkoutId::new(1), april_14(), distance, duration, Coordinates::new(0., 0.), 1);
                let cycling = Workout::cycling(WorkoutId::new(2), april_14(), distance, duration, Coordinates::new(0., 0.), 0.);

                assert_eq!(running.pace_min_per_km(), Some(duration / distance));
                assert_eq!(cycling.speed_km_per_hour(), Some(distance / (duration / 60.)));
            }
        }
    }

    #[test]
    fn click_counts_up() {
        let mut workout = Workout::running(WorkoutId::new(1), april_14(), 5., 30., Coordinates::new(0., 0.), 160);
        assert_eq!(workout.click(), 1);
        assert_eq!(workout.click(), 2);
        assert_eq!(workout.clicks(), 2);
    }

    #[test]
    fn stored_shape_carries_type_tag() {
        let workout = Workout::cycling(WorkoutId::new(7), april_14(), 20., 60., Coordinates::new(1.5, -2.), 120.);
        let value = serde_json::to_value(&workout).unwrap();

        assert_eq!(value["type"], "cycling");
        assert_eq!(value["id"], 7);
        assert_eq!(value["coordinates"], serde_json::json!([1.5, -2.0]));
        assert_eq!(value["elevation_gain_m"], 120.0);
        assert_eq!(value["created_at"], "2025-04-14T09:30:00+02:00");

        let back: Workout = serde_json::from_value(value).unwrap();
        assert_eq!(back, workout);
    }

    #[test]
    fn kind_parses_form_values() {
        assert_eq!("running".parse::<WorkoutKind>(), Ok(WorkoutKind::Running));
        assert_eq!("cycling".parse::<WorkoutKind>(), Ok(WorkoutKind::Cycling));
        assert_eq!(
            "swimming".parse::<WorkoutKind>(),
            Err(ValidationError::UnknownKind("swimming".into()))
        );
    }
}
