//! Traffic Card Component
//!
//! Derives qualitative speed/congestion bands and a current-vs-free-flow
//! comparison bar from the traffic snapshot.

use leptos::*;

use crate::state::global::TrafficSnapshot;

pub fn speed_label(speed: f64) -> &'static str {
    if speed < 20.0 {
        "Very Slow"
    } else if speed < 40.0 {
        "Slow"
    } else if speed < 60.0 {
        "Moderate"
    } else {
        "Fast"
    }
}

pub fn speed_color(speed: f64) -> &'static str {
    if speed < 20.0 {
        "#ff4444"
    } else if speed < 40.0 {
        "#ffbb33"
    } else if speed < 60.0 {
        "#00C851"
    } else {
        "#007bff"
    }
}

pub fn congestion_label(percentage: f64) -> &'static str {
    if percentage >= 70.0 {
        "Heavy"
    } else if percentage >= 40.0 {
        "Moderate"
    } else {
        "Light"
    }
}

pub fn congestion_color(percentage: f64) -> &'static str {
    if percentage >= 70.0 {
        "#ff4444"
    } else if percentage >= 40.0 {
        "#ffbb33"
    } else {
        "#00C851"
    }
}

/// Current speed as a percentage of free-flow speed, clamped to [0, 100].
pub fn speed_ratio_percent(flow_speed: f64, free_flow_speed: f64) -> f64 {
    if free_flow_speed <= 0.0 {
        return 0.0;
    }
    (flow_speed / free_flow_speed * 100.0).clamp(0.0, 100.0)
}

/// Traffic conditions card
#[component]
pub fn TrafficCard(data: TrafficSnapshot) -> impl IntoView {
    let flow = data.flow_speed;
    let free_flow = data.free_flow_speed;
    let congestion = data.congestion_percentage;

    view! {
        <div class="bg-gray-800 rounded-xl p-6">
            <h3 class="text-lg font-semibold mb-4">"🚦 Traffic Conditions"</h3>

            <div class="grid grid-cols-3 gap-4">
                <TrafficMetric
                    label="Current Speed"
                    value=format!("{} km/h", flow)
                    status=speed_label(flow)
                    color=speed_color(flow)
                />
                <TrafficMetric
                    label="Congestion"
                    value=format!("{}%", congestion)
                    status=congestion_label(congestion)
                    color=congestion_color(congestion)
                />
                <TrafficMetric
                    label="Free Flow Speed"
                    value=format!("{} km/h", free_flow)
                    status="Expected Speed"
                    color="#9ca3af"
                />
            </div>

            // Current vs. free-flow comparison bar
            <div class="w-full bg-gray-700 rounded-full h-2 mt-6">
                <div
                    class="rounded-full h-2 transition-all"
                    style=format!(
                        "width: {}%; background-color: {}",
                        speed_ratio_percent(flow, free_flow),
                        speed_color(flow)
                    )
                />
            </div>
            <div class="flex justify-between text-xs text-gray-400 mt-1">
                <span>"Current Speed"</span>
                <span>"Free Flow"</span>
            </div>
        </div>
    }
}

#[component]
fn TrafficMetric(
    label: &'static str,
    #[prop(into)]
    value: String,
    status: &'static str,
    color: &'static str,
) -> impl IntoView {
    view! {
        <div>
            <div class="text-gray-400 text-sm">{label}</div>
            <div class="font-semibold mt-1" style=format!("color: {}", color)>
                {value}
            </div>
            <div class="text-sm mt-1" style=format!("color: {}", color)>
                {status}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn speed_bands_and_colors() {
        assert_eq!(speed_label(15.0), "Very Slow");
        assert_eq!(speed_color(15.0), "#ff4444");
        assert_eq!(speed_label(25.0), "Slow");
        assert_eq!(speed_color(25.0), "#ffbb33");
        assert_eq!(speed_label(45.0), "Moderate");
        assert_eq!(speed_color(45.0), "#00C851");
        assert_eq!(speed_label(60.0), "Fast");
        assert_eq!(speed_color(60.0), "#007bff");
    }

    #[test]
    fn congestion_bands_and_colors() {
        assert_eq!(congestion_label(80.0), "Heavy");
        assert_eq!(congestion_color(80.0), "#ff4444");
        assert_eq!(congestion_label(70.0), "Heavy");
        assert_eq!(congestion_label(55.0), "Moderate");
        assert_eq!(congestion_color(55.0), "#ffbb33");
        assert_eq!(congestion_label(39.9), "Light");
        assert_eq!(congestion_color(10.0), "#00C851");
    }

    #[test]
    fn comparison_bar_ratio_clamps_to_full_width() {
        assert_eq!(speed_ratio_percent(15.0, 50.0), 30.0);
        assert_eq!(speed_ratio_percent(80.0, 50.0), 100.0);
        assert_eq!(speed_ratio_percent(30.0, 0.0), 0.0);
    }
}
