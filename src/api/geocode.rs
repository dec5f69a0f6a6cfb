//! City search against the OpenStreetMap Nominatim service.
//!
//! Search failures are downgraded to an empty suggestion list; a broken
//! geocoder should never block manual coordinate entry.

use gloo_net::http::Request;
use serde::Deserialize;

/// Nominatim search endpoint.
pub const NOMINATIM_SEARCH_URL: &str = "https://nominatim.openstreetmap.org/search";

/// Queries shorter than this never hit the network.
pub const MIN_QUERY_LEN: usize = 3;

/// Quiet period before a keystroke batch fires a search.
pub const SEARCH_DEBOUNCE_MS: u32 = 500;

/// Maximum number of suggestions requested per search.
pub const MAX_SUGGESTIONS: u32 = 5;

/// A selectable geocoding result.
#[derive(Clone, Debug, PartialEq)]
pub struct CitySuggestion {
    pub id: u64,
    pub display_name: String,
    pub lat: f64,
    pub lon: f64,
}

/// Raw Nominatim entry; `lat`/`lon` arrive as strings.
#[derive(Debug, Deserialize)]
struct NominatimPlace {
    place_id: u64,
    display_name: String,
    lat: String,
    lon: String,
}

impl NominatimPlace {
    fn into_suggestion(self) -> Option<CitySuggestion> {
        let lat = self.lat.parse().ok()?;
        let lon = self.lon.parse().ok()?;
        Some(CitySuggestion {
            id: self.place_id,
            display_name: self.display_name,
            lat,
            lon,
        })
    }
}

/// Whether a search term is long enough to look up.
pub fn should_search(term: &str) -> bool {
    term.chars().count() >= MIN_QUERY_LEN
}

/// Look up city suggestions for a search term.
pub async fn search_cities(term: &str) -> Vec<CitySuggestion> {
    if !should_search(term) {
        return Vec::new();
    }

    let url = format!(
        "{}?format=json&q={}&limit={}",
        NOMINATIM_SEARCH_URL,
        urlencoding::encode(term),
        MAX_SUGGESTIONS
    );

    let response = match Request::get(&url).send().await {
        Ok(response) => response,
        Err(e) => {
            web_sys::console::error_1(&format!("City search failed: {}", e).into());
            return Vec::new();
        }
    };

    if !response.ok() {
        web_sys::console::error_1(
            &format!("City search returned status {}", response.status()).into(),
        );
        return Vec::new();
    }

    match response.json::<Vec<NominatimPlace>>().await {
        Ok(places) => places
            .into_iter()
            .filter_map(NominatimPlace::into_suggestion)
            .collect(),
        Err(e) => {
            web_sys::console::error_1(&format!("City search parse error: {}", e).into());
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_terms_never_search() {
        assert!(!should_search(""));
        assert!(!should_search("Ba"));
        assert!(should_search("Ban"));
        assert!(should_search("Bangalore"));
    }

    #[test]
    fn nominatim_strings_convert_to_floats() {
        let place = NominatimPlace {
            place_id: 42,
            display_name: "Bengaluru, Karnataka, India".to_string(),
            lat: "12.9716".to_string(),
            lon: "77.5946".to_string(),
        };

        let suggestion = place.into_suggestion().unwrap();
        assert_eq!(suggestion.id, 42);
        assert_eq!(suggestion.lat, 12.9716);
        assert_eq!(suggestion.lon, 77.5946);
    }

    #[test]
    fn unparseable_entries_are_dropped() {
        let place = NominatimPlace {
            place_id: 7,
            display_name: "Nowhere".to_string(),
            lat: "not-a-number".to_string(),
            lon: "77.5946".to_string(),
        };
        assert!(place.into_suggestion().is_none());
    }

    #[test]
    fn raw_entries_deserialize_from_nominatim_json() {
        let json = r#"[{"place_id":1,"display_name":"Bengaluru","lat":"12.97","lon":"77.59","class":"place"}]"#;
        let places: Vec<NominatimPlace> = serde_json::from_str(json).unwrap();
        assert_eq!(places.len(), 1);
        assert_eq!(places[0].display_name, "Bengaluru");
    }
}
