pub mod config;
pub mod controller;
pub mod description;
pub mod error;
pub mod form;
pub mod storage;
pub mod summary;
pub mod surface;
pub mod workout;

pub use config::TrackerConfig;
pub use controller::WorkoutController;
pub use error::{GeolocationError, StorageError, ValidationError};
pub use form::{Field, WorkoutForm};
pub use workout::{Coordinates, Workout, WorkoutDetails, WorkoutId, WorkoutKind};
