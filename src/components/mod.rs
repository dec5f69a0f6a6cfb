//! UI Components
//!
//! Reusable Leptos components for the dashboard.

pub mod insights_card;
pub mod loading;
pub mod location_input;
pub mod map_view;
pub mod risk_indicator;
pub mod traffic_card;
pub mod voice_alert;
pub mod weather_card;

pub use insights_card::InsightsCard;
pub use loading::Loading;
pub use location_input::LocationInput;
pub use map_view::MapView;
pub use risk_indicator::RiskIndicator;
pub use traffic_card::TrafficCard;
pub use voice_alert::VoiceAlert;
pub use weather_card::WeatherCard;
