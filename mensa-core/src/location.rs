/// Location slugs with a published menu, in dropdown order.
pub const KNOWN_LOCATIONS: [&str; 22] = [
    "fmi-bistro",
    "ipp-bistro",
    "mensa-arcisstr",
    "mensa-garching",
    "mensa-leopoldstr",
    "mensa-lothstr",
    "mensa-martinsried",
    "mensa-pasing",
    "mensa-weihenstephan",
    "stubistro-arcisstr",
    "stubistro-goethestr",
    "stubistro-großhadern",
    "stubistro-grosshadern",
    "stubistro-rosenheim",
    "stubistro-schellingstr",
    "stucafe-adalbertstr",
    "stucafe-akademie-weihenstephan",
    "stucafe-boltzmannstr",
    "stucafe-garching",
    "stucafe-karlstr",
    "stucafe-pasing",
    "mediziner-mensa",
];

/// Location shown when the page is opened without a `mensa` query parameter.
pub const DEFAULT_LOCATION: &str = "mensa-garching";

/// Name of the query parameter selecting the location.
pub const LOCATION_QUERY_PARAM: &str = "mensa";

/// Pick the location to load from the `mensa` query parameter.
///
/// The value is passed through unvalidated. Unknown slugs are only detected
/// once their fetch fails, see [`crate::fetch::fetch_menu`].
pub fn resolve_location(query: Option<&str>) -> String {
    match query {
        Some(location) => location.to_string(),
        None => DEFAULT_LOCATION.to_string(),
    }
}

/// Whether the slug belongs to the known locations.
pub fn is_known_location(location: &str) -> bool {
    KNOWN_LOCATIONS.contains(&location)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_resolve_absent_uses_default() {
        assert_eq!(resolve_location(None), "mensa-garching");
    }

    #[test]
    fn test_resolve_passes_value_through_unvalidated() {
        assert_eq!(resolve_location(Some("foo")), "foo");
        assert_eq!(resolve_location(Some("")), "");
    }

    #[test]
    fn test_default_is_fourth_known_location() {
        assert_eq!(KNOWN_LOCATIONS[3], DEFAULT_LOCATION);
    }

    #[test]
    fn test_known_locations_are_unique() {
        let unique: HashSet<&str> = KNOWN_LOCATIONS.iter().copied().collect();
        assert_eq!(unique.len(), KNOWN_LOCATIONS.len());
    }

    #[test]
    fn test_membership() {
        assert!(is_known_location("mensa-garching"));
        assert!(is_known_location("stubistro-großhadern"));
        assert!(!is_known_location("not-a-real-place"));
        assert!(!is_known_location("Mensa-Garching"));
    }
}
