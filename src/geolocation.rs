//! Device geolocation wrapper.
//!
//! Bridges the callback-style browser API to `async` with a oneshot
//! channel. Startup resolution falls back to a fixed default silently;
//! the explicit "use my location" action surfaces the failure cause.

use std::cell::RefCell;
use std::rc::Rc;

use futures_channel::oneshot;
use thiserror::Error;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Position, PositionError, PositionOptions};

use crate::state::global::Coordinate;

/// Fallback when the device position is unavailable (Bengaluru city center).
pub const DEFAULT_LOCATION: Coordinate = Coordinate {
    lat: 12.9716,
    lng: 77.5946,
};

const POSITION_TIMEOUT_MS: u32 = 5_000;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeolocationError {
    #[error("Geolocation is not supported by your browser")]
    Unsupported,
    #[error("Location access denied. Please allow location access in your browser settings.")]
    PermissionDenied,
    #[error("Location unavailable. Please check your device location settings.")]
    Unavailable,
    #[error("Location request timed out. Please try again.")]
    Timeout,
    #[error("Failed to get your location. Please try again.")]
    Other,
}

impl From<&PositionError> for GeolocationError {
    fn from(e: &PositionError) -> Self {
        match e.code() {
            PositionError::PERMISSION_DENIED => GeolocationError::PermissionDenied,
            PositionError::POSITION_UNAVAILABLE => GeolocationError::Unavailable,
            PositionError::TIMEOUT => GeolocationError::Timeout,
            _ => GeolocationError::Other,
        }
    }
}

/// Ask the device for its current position.
pub async fn current_position() -> Result<Coordinate, GeolocationError> {
    let geolocation = web_sys::window()
        .and_then(|w| w.navigator().geolocation().ok())
        .ok_or(GeolocationError::Unsupported)?;

    let (tx, rx) = oneshot::channel();
    let tx = Rc::new(RefCell::new(Some(tx)));

    let success_tx = Rc::clone(&tx);
    let on_success = Closure::<dyn FnMut(Position)>::new(move |position: Position| {
        let coords = position.coords();
        let coord = Coordinate::new(coords.latitude(), coords.longitude());
        if let Some(tx) = success_tx.borrow_mut().take() {
            let _ = tx.send(Ok(coord));
        }
    });

    let error_tx = Rc::clone(&tx);
    let on_error = Closure::<dyn FnMut(PositionError)>::new(move |e: PositionError| {
        if let Some(tx) = error_tx.borrow_mut().take() {
            let _ = tx.send(Err(GeolocationError::from(&e)));
        }
    });

    let options = PositionOptions::new();
    options.set_enable_high_accuracy(true);
    options.set_timeout(POSITION_TIMEOUT_MS);
    options.set_maximum_age(0);

    geolocation
        .get_current_position_with_error_callback_and_options(
            on_success.as_ref().unchecked_ref(),
            Some(on_error.as_ref().unchecked_ref()),
            &options,
        )
        .map_err(|_| GeolocationError::Unsupported)?;

    // The browser invokes exactly one of the callbacks; leak them until then.
    on_success.forget();
    on_error.forget();

    rx.await.map_err(|_| GeolocationError::Other)?
}

/// Resolve the startup location. Never fails: any geolocation problem
/// (denial, timeout, missing capability) substitutes the default.
pub async fn resolve_initial_location() -> Coordinate {
    match current_position().await {
        Ok(coord) => coord,
        Err(e) => {
            web_sys::console::log_1(
                &format!("Geolocation unavailable ({}), using default location", e).into(),
            );
            DEFAULT_LOCATION
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_location_is_the_fixed_fallback() {
        assert_eq!(DEFAULT_LOCATION, Coordinate::new(12.9716, 77.5946));
        assert!(DEFAULT_LOCATION.is_valid());
    }

    #[test]
    fn failure_causes_are_human_readable() {
        assert!(GeolocationError::PermissionDenied
            .to_string()
            .contains("Location access denied"));
        assert!(GeolocationError::Timeout.to_string().contains("timed out"));
        assert!(GeolocationError::Unsupported
            .to_string()
            .contains("not supported"));
    }
}
