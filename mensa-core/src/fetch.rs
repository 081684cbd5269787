//! Fetching a week's menu and classifying failures.
//!
//! A failed fetch is classified by location membership alone: a known location
//! yields [`FetchError::NotFound`] whatever went wrong underneath, an unknown
//! one yields [`FetchError::UnknownLocation`]. The transport error is only logged.

use crate::error::{FetchError, TransportError};
use crate::location::is_known_location;
use crate::menu::Menu;
use crate::week::{menu_path, WeekKey};
use log::{info, warn};

/// Something that can load a menu document from a relative path.
#[allow(async_fn_in_trait)]
pub trait MenuSource {
    async fn get_menu(&self, path: &str) -> Result<Menu, TransportError>;
}

/// Fetch the menu of `location` for `week` with a single request.
pub async fn fetch_menu<S: MenuSource>(
    source: &S,
    location: &str,
    week: WeekKey,
) -> Result<Menu, FetchError> {
    let path = menu_path(location, week);
    info!("Fetching menu {}", path);

    match source.get_menu(&path).await {
        Ok(menu) => {
            info!(
                "Loaded {} days ({} dishes) for {} {}",
                menu.days.len(),
                menu.dish_count(),
                location,
                week
            );
            Ok(menu)
        }
        Err(e) => {
            warn!("Failed to load {}: {}", path, e);
            Err(classify_failure(location, week, path))
        }
    }
}

/// Map a failed fetch to the error shown to the user.
pub fn classify_failure(location: &str, week: WeekKey, path: String) -> FetchError {
    if is_known_location(location) {
        FetchError::NotFound {
            location: location.to_string(),
            week,
            path,
        }
    } else {
        FetchError::UnknownLocation {
            location: location.to_string(),
        }
    }
}
