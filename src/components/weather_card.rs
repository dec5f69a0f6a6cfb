//! Weather Card Component
//!
//! Formats the optional weather metrics; absent values show "N/A".

use leptos::*;

use crate::state::global::WeatherSnapshot;

/// Sentinel for metrics the backend did not report.
pub const NOT_AVAILABLE: &str = "N/A";

/// Format an optional metric with its unit.
pub fn format_metric(value: Option<f64>, unit: &str) -> String {
    match value {
        Some(v) if unit.is_empty() => format!("{}", v),
        Some(v) => format!("{} {}", v, unit),
        None => NOT_AVAILABLE.to_string(),
    }
}

/// Weather conditions card
#[component]
pub fn WeatherCard(data: WeatherSnapshot) -> impl IntoView {
    let conditions = data
        .conditions
        .clone()
        .unwrap_or_else(|| NOT_AVAILABLE.to_string());

    view! {
        <div class="bg-gray-800 rounded-xl p-6">
            <h3 class="text-lg font-semibold mb-4">"Weather Conditions"</h3>
            <div class="grid grid-cols-2 md:grid-cols-3 gap-4">
                <WeatherMetric label="Temperature" value=format_metric(data.temperature, "°C") />
                <WeatherMetric label="Conditions" value=conditions />
                <WeatherMetric label="Humidity" value=format_metric(data.humidity, "%") />
                <WeatherMetric label="Wind Speed" value=format_metric(data.wind_speed, "m/s") />
                <WeatherMetric label="Visibility" value=format_metric(data.visibility, "km") />
                <WeatherMetric label="Precipitation" value=format_metric(data.precipitation, "mm") />
            </div>
        </div>
    }
}

#[component]
fn WeatherMetric(
    label: &'static str,
    #[prop(into)]
    value: String,
) -> impl IntoView {
    view! {
        <div>
            <div class="text-gray-400 text-sm">{label}</div>
            <div class="font-semibold mt-1">{value}</div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn present_metrics_carry_their_unit() {
        assert_eq!(format_metric(Some(25.5), "°C"), "25.5 °C");
        assert_eq!(format_metric(Some(65.0), "%"), "65 %");
        assert_eq!(format_metric(Some(3.0), ""), "3");
    }

    #[test]
    fn absent_metrics_render_the_sentinel_not_zero() {
        assert_eq!(format_metric(None, "°C"), NOT_AVAILABLE);
        assert_eq!(format_metric(None, ""), NOT_AVAILABLE);
    }
}
