use gloo_utils::window;
use wasm_bindgen::{prelude::Closure, JsCast};
use web_sys::{
    Position as GeolocationPosition, PositionError as GeolocationPositionError, PositionOptions,
};
use workout_tracker_lib::{Coordinates, GeolocationError};
use yew::Callback;

/// Asks the browser for the current position, once, with high accuracy.
/// Exactly one of the callbacks is called.
pub fn request_position(on_found: Callback<Coordinates>, on_failed: Callback<GeolocationError>) {
    let geolocation = match window().navigator().geolocation() {
        Ok(geolocation) => geolocation,
        Err(_) => {
            on_failed.emit(GeolocationError::unsupported());
            return;
        }
    };

    let success = Closure::once_into_js(move |position: GeolocationPosition| {
        let coords = position.coords();
        on_found.emit(Coordinates::new(coords.latitude(), coords.longitude()));
    });

    let failed = on_failed.clone();
    let failure = Closure::once_into_js(move |error: GeolocationPositionError| {
        failed.emit(GeolocationError {
            code: error.code(),
            message: error.message(),
        })
    });

    let options = PositionOptions::new();
    options.set_enable_high_accuracy(true);

    if let Err(err) = geolocation.get_current_position_with_error_callback_and_options(
        success.unchecked_ref(),
        Some(failure.unchecked_ref()),
        &options,
    ) {
        on_failed.emit(GeolocationError {
            code: 0,
            message: format!("{err:?}"),
        });
    }
}
