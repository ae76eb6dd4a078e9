use chrono::{DateTime, FixedOffset, Local};
use tracing::{debug, error, info, warn};

use crate::{
    config::TrackerConfig,
    error::{GeolocationError, ValidationError},
    form::{Field, Metric, WorkoutForm},
    storage::{KeyValueStore, WorkoutStorage},
    summary::{ListEntry, Marker},
    surface::{MapSurface, PageSurface, PanOptions},
    workout::{Coordinates, Workout, WorkoutId, WorkoutKind},
};

pub type Clock = Box<dyn Fn() -> DateTime<FixedOffset>>;

pub fn local_now() -> DateTime<FixedOffset> {
    Local::now().fixed_offset()
}

/// Ids are the last 10 digits of the creation time in milliseconds.
const ID_MODULUS: u64 = 10_000_000_000;

#[derive(Debug, Default)]
struct IdGenerator {
    last: Option<u64>,
}

impl IdGenerator {
    fn next(&mut self, at: DateTime<FixedOffset>) -> WorkoutId {
        let candidate = at.timestamp_millis().unsigned_abs() % ID_MODULUS;
        let id = match self.last {
            Some(last) if candidate <= last => last + 1,
            _ => candidate,
        };
        self.last = Some(id);
        WorkoutId::new(id)
    }

    fn observe(&mut self, id: WorkoutId) {
        self.last = self.last.max(Some(id.value()));
    }
}

/// Owns the workout list and reacts to page events.
///
/// The map surface is only available once the map has loaded. Until then
/// markers are not drawn; `attach_map` draws every known workout.
pub struct WorkoutController<S, M> {
    config: TrackerConfig,
    storage: WorkoutStorage<S>,
    workouts: Vec<Workout>,
    map: Option<M>,
    pending_click: Option<Coordinates>,
    input_mode: WorkoutKind,
    ids: IdGenerator,
    clock: Clock,
}

impl<S: KeyValueStore, M: MapSurface> WorkoutController<S, M> {
    pub fn new(store: S, config: TrackerConfig) -> Self {
        Self {
            storage: WorkoutStorage::new(store, config.storage_key.clone()),
            config,
            workouts: Vec::new(),
            map: None,
            pending_click: None,
            input_mode: WorkoutKind::default(),
            ids: IdGenerator::default(),
            clock: Box::new(local_now),
        }
    }

    pub fn with_clock(mut self, clock: impl Fn() -> DateTime<FixedOffset> + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }

    pub fn workouts(&self) -> &[Workout] {
        &self.workouts
    }

    pub fn workout(&self, id: WorkoutId) -> Option<&Workout> {
        self.workouts.iter().find(|workout| workout.id() == id)
    }

    pub fn storage(&self) -> &WorkoutStorage<S> {
        &self.storage
    }

    pub fn map(&self) -> Option<&M> {
        self.map.as_ref()
    }

    pub fn is_map_ready(&self) -> bool {
        self.map.is_some()
    }

    pub fn pending_click(&self) -> Option<Coordinates> {
        self.pending_click
    }

    pub fn input_mode(&self) -> WorkoutKind {
        self.input_mode
    }

    /// Reads the stored list and renders it as list items. Returns the number
    /// of restored workouts. Missing or unreadable data restores nothing.
    pub fn restore(&mut self, page: &mut impl PageSurface) -> usize {
        let workouts = match self.storage.load() {
            Ok(Some(workouts)) => workouts,
            Ok(None) => {
                debug!("No stored workouts under {:?}", self.storage.key());
                return 0;
            }
            Err(err) => {
                warn!("Ignoring stored workouts: {err}");
                return 0;
            }
        };

        for workout in &workouts {
            self.ids.observe(workout.id());
            page.render_list_item(&ListEntry::from(workout));
        }

        // Normally the map is not ready yet and attach_map draws these
        if let Some(map) = self.map.as_mut() {
            for workout in &workouts {
                map.place_marker(&Marker::from(workout));
            }
        }

        self.workouts = workouts;
        info!("Restored {} workouts", self.workouts.len());
        self.workouts.len()
    }

    /// Takes over a loaded map and draws a marker for every workout, in order.
    pub fn attach_map(&mut self, mut map: M) {
        for workout in &self.workouts {
            map.place_marker(&Marker::from(workout));
        }
        info!("Map ready, placed {} markers", self.workouts.len());
        self.map = Some(map);
    }

    pub fn geolocation_failed(&self, err: &GeolocationError) {
        error!("Could not access your location (code {}): {}", err.code, err.message);
    }

    pub fn map_clicked(&mut self, coordinates: Coordinates, page: &mut impl PageSurface) {
        debug!("Map clicked at {}, {}", coordinates.latitude, coordinates.longitude);
        self.pending_click = Some(coordinates);
        page.show_form();
    }

    /// Switches which type specific input is shown and read on submit.
    /// `submit_workout` builds the workout kind selected here, whatever the
    /// form's own kind says.
    pub fn toggle_input_mode(&mut self, kind: WorkoutKind) -> Field {
        self.input_mode = kind;
        Field::for_kind(kind)
    }

    /// Submits the form at the location of the last map click.
    pub fn submit_pending(&mut self, form: &WorkoutForm, page: &mut impl PageSurface) -> Result<&Workout, ValidationError> {
        let coordinates = self.pending_click.ok_or(ValidationError::MissingLocation)?;
        self.submit_workout(form, coordinates, page)
    }

    /// Validates the form and records a new workout.
    ///
    /// On success the marker (if the map is ready) and the list item are
    /// rendered, the form is hidden, and the whole list is written to storage.
    /// A failed write is logged; the workout stays in the list.
    pub fn submit_workout(
        &mut self,
        form: &WorkoutForm,
        coordinates: Coordinates,
        page: &mut impl PageSurface,
    ) -> Result<&Workout, ValidationError> {
        let input = form
            .validate_as(self.input_mode)
            .inspect_err(|err| debug!("Rejected workout form: {err}"))?;

        let created_at = (self.clock)();
        let id = self.ids.next(created_at);
        let workout = match input.metric {
            Metric::Cadence(cadence) => {
                Workout::running(id, created_at, input.distance_km, input.duration_min, coordinates, cadence)
            }
            Metric::Elevation(elevation) => {
                Workout::cycling(id, created_at, input.distance_km, input.duration_min, coordinates, elevation)
            }
        };
        info!("New workout {}: {}", workout.id(), workout.description());

        self.workouts.push(workout);
        self.pending_click = None;

        let index = self.workouts.len() - 1;
        let workout = &self.workouts[index];
        match self.map.as_mut() {
            Some(map) => map.place_marker(&Marker::from(workout)),
            None => debug!("Map not ready, marker for {} deferred", workout.id()),
        }
        page.render_list_item(&ListEntry::from(workout));
        page.hide_form();

        self.persist();
        Ok(&self.workouts[index])
    }

    /// Centers the map on a workout and counts the selection. Unknown ids are
    /// ignored. The click count is not written to storage.
    pub fn select_workout(&mut self, id: WorkoutId) -> Option<u32> {
        let Some(workout) = self.workouts.iter_mut().find(|workout| workout.id() == id) else {
            debug!("Selected unknown workout {id}");
            return None;
        };

        let clicks = workout.click();
        if let Some(map) = self.map.as_mut() {
            let pan = PanOptions {
                animate: true,
                duration_secs: self.config.pan_duration_secs,
            };
            map.set_view(workout.coordinates(), self.config.zoom_level, pan);
        }

        debug!("Workout {id} selected {clicks} times");
        Some(clicks)
    }

    /// Wipes stored workouts and asks the page to reload from scratch.
    pub fn reset_all(&mut self, page: &mut impl PageSurface) {
        if let Err(err) = self.storage.clear() {
            error!("Failed to clear stored workouts: {err}");
        }
        self.workouts.clear();
        self.pending_click = None;
        info!("Workouts reset");
        page.reload();
    }

    fn persist(&mut self) {
        if let Err(err) = self.storage.save(&self.workouts) {
            error!("Failed to store {} workouts: {err}", self.workouts.len());
        }
    }
}
