//! Global Application State
//!
//! Reactive state management using Leptos signals. `GlobalState` is the
//! single owner of the current location, the latest prediction, and the
//! loading/error flags; components emit events upward and never mutate
//! these signals directly.

use leptos::*;
use serde::Deserialize;

use crate::api;
use crate::geolocation;

/// A latitude/longitude pair identifying a map location.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinate {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Whether both components are finite and within range.
    pub fn is_valid(&self) -> bool {
        self.lat.is_finite()
            && self.lng.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lng)
    }

    /// Parse manual form input. `None` when either field is non-numeric.
    pub fn parse(lat: &str, lng: &str) -> Option<Self> {
        let lat = lat.trim().parse().ok()?;
        let lng = lng.trim().parse().ok()?;
        Some(Self { lat, lng })
    }
}

/// Categorical severity of predicted accident risk.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    #[default]
    #[serde(other)]
    Unknown,
}

impl RiskLevel {
    pub fn label(&self) -> &'static str {
        match self {
            RiskLevel::Low => "LOW",
            RiskLevel::Medium => "MEDIUM",
            RiskLevel::High => "HIGH",
            RiskLevel::Unknown => "UNKNOWN",
        }
    }
}

/// Risk summary attached to a prediction. Risk level and probability are
/// independent fields from the API; neither is recomputed from the other.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct Insights {
    #[serde(default)]
    pub risk_level: RiskLevel,
    /// Percentage in [0, 100].
    #[serde(default)]
    pub probability: f64,
    #[serde(default)]
    pub insights: Vec<String>,
}

/// Weather conditions at the predicted location. Every field is optional;
/// absent values render as "N/A", never as zero.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, serde::Serialize)]
pub struct WeatherSnapshot {
    #[serde(default)]
    pub temperature: Option<f64>,
    #[serde(default)]
    pub conditions: Option<String>,
    #[serde(default)]
    pub humidity: Option<f64>,
    #[serde(default)]
    pub wind_speed: Option<f64>,
    #[serde(default)]
    pub visibility: Option<f64>,
    #[serde(default)]
    pub precipitation: Option<f64>,
}

/// Traffic conditions at the predicted location.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct TrafficSnapshot {
    pub flow_speed: f64,
    pub free_flow_speed: f64,
    pub congestion_percentage: f64,
}

/// A full prediction response. A missing or non-numeric `prediction` field
/// fails deserialization, which the client surfaces as an invalid response.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct PredictionResult {
    /// Raw model output in [0, 1].
    pub prediction: f64,
    #[serde(default)]
    pub insights: Insights,
    #[serde(default)]
    pub weather_data: Option<WeatherSnapshot>,
    #[serde(default)]
    pub traffic_data: Option<TrafficSnapshot>,
    #[serde(default)]
    pub voice_alert: Option<String>,
}

/// Backend reachability, refreshed once at startup.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BackendStatus {
    #[default]
    Checking,
    Healthy,
    Error,
}

impl BackendStatus {
    /// Map a `/health` status string to a display status.
    pub fn from_health(status: &str) -> Self {
        if status == "healthy" {
            BackendStatus::Healthy
        } else {
            BackendStatus::Error
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BackendStatus::Checking => "checking",
            BackendStatus::Healthy => "healthy",
            BackendStatus::Error => "error",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            BackendStatus::Checking => "bg-gray-600 text-gray-200",
            BackendStatus::Healthy => "bg-green-600 text-white",
            BackendStatus::Error => "bg-red-600 text-white",
        }
    }
}

/// Monotonically increasing tag for outgoing prediction requests. A
/// response is applied only while its sequence is still the latest, so two
/// rapid selections always settle on the second one regardless of which
/// network call resolves first.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RequestSeq(u64);

impl RequestSeq {
    pub fn next(self) -> RequestSeq {
        RequestSeq(self.0 + 1)
    }

    pub fn is_current(self, latest: RequestSeq) -> bool {
        self == latest
    }
}

/// Global application state provided to all components
#[derive(Clone)]
pub struct GlobalState {
    /// The single current location
    pub location: RwSignal<Option<Coordinate>>,
    /// Latest prediction for the current location
    pub prediction: RwSignal<Option<PredictionResult>>,
    /// A prediction request is in flight
    pub loading: RwSignal<bool>,
    /// Prediction/validation error to display
    pub error: RwSignal<Option<String>>,
    /// Geolocation error from the explicit "use my location" action
    pub location_error: RwSignal<Option<String>>,
    /// Backend reachability
    pub backend_status: RwSignal<BackendStatus>,
    /// When the displayed prediction was fetched (ms since epoch)
    pub last_updated: RwSignal<Option<i64>>,
    /// Sequence of the newest outstanding prediction request
    prediction_seq: RwSignal<RequestSeq>,
}

/// Provide global state to the component tree
pub fn provide_global_state() {
    let state = GlobalState {
        location: create_rw_signal(None),
        prediction: create_rw_signal(None),
        loading: create_rw_signal(false),
        error: create_rw_signal(None),
        location_error: create_rw_signal(None),
        backend_status: create_rw_signal(BackendStatus::Checking),
        last_updated: create_rw_signal(None),
        prediction_seq: create_rw_signal(RequestSeq::default()),
    };

    provide_context(state);
}

impl GlobalState {
    /// Startup work: resolve an initial location and check backend health.
    /// The two run concurrently and independently.
    pub fn init(&self) {
        let state = self.clone();
        spawn_local(async move {
            let coord = geolocation::resolve_initial_location().await;
            // Initial resolution only centers the map; the first prediction
            // waits for an explicit selection.
            state.location.set(Some(coord));
        });

        let state = self.clone();
        spawn_local(async move {
            let status = match api::client::check_health().await {
                Ok(health) => BackendStatus::from_health(&health.status),
                Err(e) => {
                    web_sys::console::error_1(
                        &format!("Backend health check failed: {}", e).into(),
                    );
                    BackendStatus::Error
                }
            };
            state.backend_status.set(status);
        });
    }

    /// Select a new location and fetch a prediction for it. Every entry
    /// path (manual submit, city select, map click, current location)
    /// funnels through here.
    pub fn select_location(&self, coord: Coordinate) {
        if !coord.is_valid() {
            self.error.set(Some("Invalid location coordinates".to_string()));
            self.loading.set(false);
            return;
        }

        self.location.set(Some(coord));
        self.location_error.set(None);
        self.error.set(None);
        self.loading.set(true);

        let seq = self.prediction_seq.get_untracked().next();
        self.prediction_seq.set(seq);

        let state = self.clone();
        spawn_local(async move {
            let result = api::client::get_prediction(coord).await;

            // A newer selection superseded this request; drop the response.
            if !seq.is_current(state.prediction_seq.get_untracked()) {
                return;
            }

            match result {
                Ok(prediction) => {
                    state.prediction.set(Some(prediction));
                    state
                        .last_updated
                        .set(Some(chrono::Utc::now().timestamp_millis()));
                }
                Err(e) => {
                    web_sys::console::error_1(
                        &format!("Prediction request failed: {}", e).into(),
                    );
                    state.error.set(Some(e.to_string()));
                    state.prediction.set(None);
                }
            }
            state.loading.set(false);
        });
    }

    /// Explicit "use my location" action. Unlike startup resolution, a
    /// geolocation failure here is surfaced with its cause.
    pub fn use_current_location(&self) {
        self.location_error.set(None);
        self.loading.set(true);

        let state = self.clone();
        spawn_local(async move {
            match geolocation::current_position().await {
                Ok(coord) => state.select_location(coord),
                Err(e) => {
                    state.location_error.set(Some(e.to_string()));
                    state.loading.set(false);
                }
            }
        });
    }

    /// Re-issue the prediction request for the unchanged current location.
    pub fn retry(&self) {
        if let Some(coord) = self.location.get_untracked() {
            self.select_location(coord);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coordinate_range_validation() {
        assert!(Coordinate::new(12.9716, 77.5946).is_valid());
        assert!(Coordinate::new(-90.0, 180.0).is_valid());
        assert!(!Coordinate::new(90.5, 0.0).is_valid());
        assert!(!Coordinate::new(0.0, -180.5).is_valid());
        assert!(!Coordinate::new(f64::NAN, 0.0).is_valid());
    }

    #[test]
    fn coordinate_parse_rejects_non_numeric_input() {
        assert_eq!(
            Coordinate::parse("12.9716", " 77.5946 "),
            Some(Coordinate::new(12.9716, 77.5946))
        );
        assert_eq!(Coordinate::parse("abc", "77.5946"), None);
        assert_eq!(Coordinate::parse("12.97", ""), None);
    }

    #[test]
    fn risk_level_deserializes_from_api_strings() {
        let parse = |s: &str| serde_json::from_str::<RiskLevel>(s).unwrap();
        assert_eq!(parse("\"HIGH\""), RiskLevel::High);
        assert_eq!(parse("\"MEDIUM\""), RiskLevel::Medium);
        assert_eq!(parse("\"LOW\""), RiskLevel::Low);
        assert_eq!(parse("\"UNKNOWN\""), RiskLevel::Unknown);
        // Anything unexpected degrades to Unknown rather than failing.
        assert_eq!(parse("\"SEVERE\""), RiskLevel::Unknown);
    }

    #[test]
    fn prediction_result_requires_a_numeric_prediction() {
        let full = r#"{
            "prediction": 0.73,
            "insights": {"risk_level": "HIGH", "probability": 73.0, "insights": ["a"]},
            "voice_alert": "High accident risk detected."
        }"#;
        let result: PredictionResult = serde_json::from_str(full).unwrap();
        assert_eq!(result.prediction, 0.73);
        assert_eq!(result.insights.risk_level, RiskLevel::High);
        assert_eq!(result.insights.probability, 73.0);
        assert_eq!(result.insights.insights, vec!["a".to_string()]);
        assert!(result.weather_data.is_none());

        let missing: Result<PredictionResult, _> = serde_json::from_str(r#"{"insights": {}}"#);
        assert!(missing.is_err());

        let non_numeric: Result<PredictionResult, _> =
            serde_json::from_str(r#"{"prediction": "high"}"#);
        assert!(non_numeric.is_err());
    }

    #[test]
    fn prediction_result_defaults_optional_sections() {
        let minimal: PredictionResult = serde_json::from_str(r#"{"prediction": 0.1}"#).unwrap();
        assert_eq!(minimal.insights, Insights::default());
        assert_eq!(minimal.insights.risk_level, RiskLevel::Unknown);
        assert!(minimal.traffic_data.is_none());
        assert!(minimal.voice_alert.is_none());
    }

    #[test]
    fn weather_snapshot_keeps_absent_fields_absent() {
        let partial: WeatherSnapshot =
            serde_json::from_str(r#"{"temperature": 25.0, "conditions": "Rainy"}"#).unwrap();
        assert_eq!(partial.temperature, Some(25.0));
        assert_eq!(partial.conditions.as_deref(), Some("Rainy"));
        assert!(partial.humidity.is_none());
        assert!(partial.precipitation.is_none());
    }

    #[test]
    fn backend_status_from_health_string() {
        assert_eq!(BackendStatus::from_health("healthy"), BackendStatus::Healthy);
        assert_eq!(BackendStatus::from_health("unhealthy"), BackendStatus::Error);
        assert_eq!(BackendStatus::from_health(""), BackendStatus::Error);
    }

    #[test]
    fn stale_responses_never_win() {
        // Two rapid selections: A issues seq 1, B issues seq 2.
        let start = RequestSeq::default();
        let seq_a = start.next();
        let seq_b = seq_a.next();
        let latest = seq_b;

        // B's response arrives first and is applied.
        assert!(seq_b.is_current(latest));
        // A's response arrives late and is dropped.
        assert!(!seq_a.is_current(latest));
    }
}
