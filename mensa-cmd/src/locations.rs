use mensa_core::location::{DEFAULT_LOCATION, KNOWN_LOCATIONS};

/// One location per line, the default marked with `(default)`.
pub fn render_locations() -> String {
    KNOWN_LOCATIONS
        .iter()
        .map(|location| {
            if *location == DEFAULT_LOCATION {
                format!("{} (default)\n", location)
            } else {
                format!("{}\n", location)
            }
        })
        .collect()
}
