//! Risk Indicator Component
//!
//! Displays the risk level and probability as a colored meter.

use leptos::*;

use crate::state::global::{Insights, RiskLevel};

/// Fixed risk level → meter/label color lookup.
pub fn risk_color(level: RiskLevel) -> &'static str {
    match level {
        RiskLevel::High => "#ff4444",
        RiskLevel::Medium => "#ffbb33",
        RiskLevel::Low => "#00C851",
        RiskLevel::Unknown => "#aaaaaa",
    }
}

/// Fixed risk level → icon lookup.
pub fn risk_icon(level: RiskLevel) -> &'static str {
    match level {
        RiskLevel::High => "⚠️",
        RiskLevel::Medium => "⚡",
        RiskLevel::Low => "✅",
        RiskLevel::Unknown => "❓",
    }
}

/// Meter bar width for a probability, clamped to [0, 100].
pub fn meter_width(probability: f64) -> f64 {
    probability.clamp(0.0, 100.0)
}

/// Risk assessment card with a width-proportional meter bar
#[component]
pub fn RiskIndicator(insights: Insights) -> impl IntoView {
    let level = insights.risk_level;
    let probability = insights.probability;

    view! {
        <div class="bg-gray-800 rounded-xl p-6">
            <h3 class="text-lg font-semibold mb-4">"Accident Risk Assessment"</h3>

            // Meter bar
            <div class="w-full bg-gray-700 rounded-full h-3 mb-4">
                <div
                    class="rounded-full h-3 transition-all"
                    style=format!(
                        "width: {}%; background-color: {}",
                        meter_width(probability),
                        risk_color(level)
                    )
                />
            </div>

            <div class="flex items-center justify-between">
                <span
                    class="font-semibold"
                    style=format!("color: {}", risk_color(level))
                >
                    {risk_icon(level)}
                    " "
                    {level.label()}
                    " RISK"
                </span>
                <span class="text-gray-300">
                    {format!("{:.1}% probability", probability)}
                </span>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_color_and_icon_lookup() {
        assert_eq!(risk_color(RiskLevel::High), "#ff4444");
        assert_eq!(risk_icon(RiskLevel::High), "⚠️");
        assert_eq!(risk_color(RiskLevel::Medium), "#ffbb33");
        assert_eq!(risk_icon(RiskLevel::Medium), "⚡");
        assert_eq!(risk_color(RiskLevel::Low), "#00C851");
        assert_eq!(risk_icon(RiskLevel::Low), "✅");
        assert_eq!(risk_color(RiskLevel::Unknown), "#aaaaaa");
        assert_eq!(risk_icon(RiskLevel::Unknown), "❓");
    }

    #[test]
    fn meter_tracks_probability_and_clamps() {
        assert_eq!(meter_width(73.0), 73.0);
        assert_eq!(meter_width(-5.0), 0.0);
        assert_eq!(meter_width(140.0), 100.0);
    }
}
