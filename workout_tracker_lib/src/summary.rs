use crate::workout::{Coordinates, Workout, WorkoutDetails, WorkoutId, WorkoutKind};

#[derive(Debug, Clone, PartialEq)]
pub struct Stat {
    pub icon: &'static str,
    pub value: String,
    pub unit: &'static str,
}

impl Stat {
    fn new(icon: &'static str, value: String, unit: &'static str) -> Self {
        Self { icon, value, unit }
    }
}

/// One row of the workout list.
#[derive(Debug, Clone, PartialEq)]
pub struct ListEntry {
    pub id: WorkoutId,
    pub kind: WorkoutKind,
    pub title: String,
    pub stats: [Stat; 4],
}

impl ListEntry {
    pub fn css_class(&self) -> String {
        format!("workout workout--{}", self.kind)
    }
}

impl From<&Workout> for ListEntry {
    fn from(workout: &Workout) -> Self {
        let kind = workout.kind();
        let distance = Stat::new(kind.icon(), workout.distance_km().to_string(), "km");
        let duration = Stat::new("⏱", workout.duration_min().to_string(), "min");

        let [metric, extra] = match *workout.details() {
            WorkoutDetails::Running { cadence_spm, pace_min_per_km } => [
                Stat::new("⚡️", format!("{pace_min_per_km:.1}"), "min/km"),
                Stat::new("🦶🏼", cadence_spm.to_string(), "spm"),
            ],
            WorkoutDetails::Cycling { elevation_gain_m, speed_km_per_hour } => [
                Stat::new("⚡️", format!("{speed_km_per_hour:.1}"), "km/h"),
                Stat::new("⛰", elevation_gain_m.to_string(), "m"),
            ],
        };

        Self {
            id: workout.id(),
            kind,
            title: workout.description().to_owned(),
            stats: [distance, duration, metric, extra],
        }
    }
}

/// A map pin with an always-open popup.
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    pub coordinates: Coordinates,
    pub popup_text: String,
    pub popup_class: String,
    pub max_width: f64,
    pub min_width: f64,
    pub auto_close: bool,
    pub close_on_click: bool,
}

impl From<&Workout> for Marker {
    fn from(workout: &Workout) -> Self {
        let kind = workout.kind();
        Self {
            coordinates: workout.coordinates(),
            popup_text: format!("{} {}", kind.icon(), workout.description()),
            popup_class: format!("{kind}-popup"),
            max_width: 250.,
            min_width: 100.,
            auto_close: false,
            close_on_click: false,
        }
    }
}
