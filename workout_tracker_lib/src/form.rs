use std::fmt;

use crate::{
    error::ValidationError,
    workout::{pace, speed, WorkoutKind},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Distance,
    Duration,
    Cadence,
    Elevation,
}

impl Field {
    /// The type specific field shown for a workout kind.
    pub fn for_kind(kind: WorkoutKind) -> Self {
        match kind {
            WorkoutKind::Running => Field::Cadence,
            WorkoutKind::Cycling => Field::Elevation,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Field::Distance => "distance",
            Field::Duration => "duration",
            Field::Cadence => "cadence",
            Field::Elevation => "elevation gain",
        })
    }
}

/// Raw text from the input form, exactly as typed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WorkoutForm {
    pub kind: WorkoutKind,
    pub distance: String,
    pub duration: String,
    pub cadence: String,
    pub elevation: String,
}

/// The type specific number, already checked.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Metric {
    Cadence(u32),
    Elevation(f64),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValidInput {
    pub distance_km: f64,
    pub duration_min: f64,
    pub metric: Metric,
}

impl WorkoutForm {
    pub fn new(kind: WorkoutKind, distance: &str, duration: &str, type_specific: &str) -> Self {
        let mut form = Self {
            kind,
            distance: distance.into(),
            duration: duration.into(),
            ..Default::default()
        };
        form.set(Field::for_kind(kind), type_specific.into());
        form
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Distance => &self.distance,
            Field::Duration => &self.duration,
            Field::Cadence => &self.cadence,
            Field::Elevation => &self.elevation,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Distance => self.distance = value,
            Field::Duration => self.duration = value,
            Field::Cadence => self.cadence = value,
            Field::Elevation => self.elevation = value,
        }
    }

    /// Empties every input, keeps the selected kind.
    pub fn clear(&mut self) {
        self.distance.clear();
        self.duration.clear();
        self.cadence.clear();
        self.elevation.clear();
    }

    /// Validates the form as its own selected kind.
    pub fn validate(&self) -> Result<ValidInput, ValidationError> {
        self.validate_as(self.kind)
    }

    /// Distance and duration must be positive. Cadence must be a positive
    /// whole number, elevation gain only has to be a finite number. Only the
    /// field belonging to `kind` is read.
    pub fn validate_as(&self, kind: WorkoutKind) -> Result<ValidInput, ValidationError> {
        let distance_km = positive(Field::Distance, parse_number(Field::Distance, &self.distance)?)?;
        let duration_min = positive(Field::Duration, parse_number(Field::Duration, &self.duration)?)?;

        let field = Field::for_kind(kind);
        let value = parse_number(field, self.get(field))?;
        let (metric, derived, derived_value) = match kind {
            WorkoutKind::Running => (
                Metric::Cadence(whole(field, positive(field, value)?)?),
                "pace",
                pace(distance_km, duration_min),
            ),
            WorkoutKind::Cycling => (Metric::Elevation(value), "speed", speed(distance_km, duration_min)),
        };

        // Stored as JSON, which has no infinity
        if !derived_value.is_finite() {
            return Err(ValidationError::DerivedOutOfRange(derived));
        }

        Ok(ValidInput {
            distance_km,
            duration_min,
            metric,
        })
    }
}

fn parse_number(field: Field, raw: &str) -> Result<f64, ValidationError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(ValidationError::Missing(field));
    }

    let value: f64 = raw
        .parse()
        .map_err(|_| ValidationError::NotANumber(field, raw.to_owned()))?;

    if !value.is_finite() {
        return Err(ValidationError::NotFinite(field));
    }

    Ok(value)
}

fn whole(field: Field, value: f64) -> Result<u32, ValidationError> {
    if value.fract() == 0. && value <= f64::from(u32::MAX) {
        Ok(value as u32)
    } else {
        Err(ValidationError::NotAWholeNumber(field))
    }
}

fn positive(field: Field, value: f64) -> Result<f64, ValidationError> {
    if value > 0. {
        Ok(value)
    } else {
        Err(ValidationError::NotPositive(field))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn running_form_validates() {
        let input = WorkoutForm::new(WorkoutKind::Running, "5", " 30 ", "170").validate().unwrap();
        assert_eq!(input.distance_km, 5.);
        assert_eq!(input.duration_min, 30.);
        assert_eq!(input.metric, Metric::Cadence(170));
    }

    #[test]
    fn empty_cadence_is_rejected() {
        let result = WorkoutForm::new(WorkoutKind::Running, "5", "30", "").validate();
        assert_eq!(result, Err(ValidationError::Missing(Field::Cadence)));
    }

    #[test]
    fn cadence_must_be_positive() {
        let result = WorkoutForm::new(WorkoutKind::Running, "5", "30", "0").validate();
        assert_eq!(result, Err(ValidationError::NotPositive(Field::Cadence)));
    }

    #[test]
    fn negative_elevation_is_accepted() {
        let input = WorkoutForm::new(WorkoutKind::Cycling, "20", "60", "-5").validate().unwrap();
        assert_eq!(input.metric, Metric::Elevation(-5.));
    }

    #[test]
    fn distance_and_duration_must_be_positive() {
        assert_eq!(
            WorkoutForm::new(WorkoutKind::Cycling, "-1", "60", "5").validate(),
            Err(ValidationError::NotPositive(Field::Distance))
        );
        assert_eq!(
            WorkoutForm::new(WorkoutKind::Cycling, "10", "0", "5").validate(),
            Err(ValidationError::NotPositive(Field::Duration))
        );
    }

    #[test]
    fn non_finite_and_garbage_are_rejected() {
        assert_eq!(
            WorkoutForm::new(WorkoutKind::Running, "inf", "30", "170").validate(),
            Err(ValidationError::NotFinite(Field::Distance))
        );
        assert_eq!(
            WorkoutForm::new(WorkoutKind::Cycling, "10", "30", "NaN").validate(),
            Err(ValidationError::NotFinite(Field::Elevation))
        );
        assert_eq!(
            WorkoutForm::new(WorkoutKind::Running, "5km", "30", "170").validate(),
            Err(ValidationError::NotANumber(Field::Distance, "5km".into()))
        );
    }

    #[test]
    fn only_the_visible_field_is_read() {
        let mut form = WorkoutForm::new(WorkoutKind::Cycling, "10", "30", "100");
        form.cadence = "not read".into();
        assert!(form.validate().is_ok());

        form.kind = WorkoutKind::Running;
        assert_eq!(
            form.validate(),
            Err(ValidationError::NotANumber(Field::Cadence, "not read".into()))
        );
    }

    #[test]
    fn clear_keeps_kind() {
        let mut form = WorkoutForm::new(WorkoutKind::Cycling, "10", "30", "100");
        form.clear();
        assert_eq!(form.kind, WorkoutKind::Cycling);
        assert!(form.distance.is_empty() && form.elevation.is_empty());
    }

    #[test]
    fn fractional_cadence_is_rejected() {
        let result = WorkoutForm::new(WorkoutKind::Running, "5", "30", "172.5").validate();
        assert_eq!(result, Err(ValidationError::NotAWholeNumber(Field::Cadence)));

        let input = WorkoutForm::new(WorkoutKind::Running, "5", "30", "172.0").validate().unwrap();
        assert_eq!(input.metric, Metric::Cadence(172));
    }

    #[test]
    fn overflowing_speed_or_pace_is_rejected() {
        assert_eq!(
            WorkoutForm::new(WorkoutKind::Cycling, "1e308", "1", "0").validate(),
            Err(ValidationError::DerivedOutOfRange("speed"))
        );
        assert_eq!(
            WorkoutForm::new(WorkoutKind::Running, "1e-320", "30", "170").validate(),
            Err(ValidationError::DerivedOutOfRange("pace"))
        );
    }

    #[test]
    fn validate_as_reads_the_given_kind() {
        let form = WorkoutForm::new(WorkoutKind::Running, "20", "60", "180");
        assert_eq!(form.validate_as(WorkoutKind::Cycling), Err(ValidationError::Missing(Field::Elevation)));
    }
}
