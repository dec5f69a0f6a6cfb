//! Insights Card Component
//!
//! Renders the safety insight list. The backend delivers insights as free
//! text, so each line is classified by keyword to pick its emoji tag.

use leptos::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InsightKind {
    Weather,
    Traffic,
    Time,
    Location,
    Other,
}

/// Fixed kind → emoji lookup.
pub fn insight_emoji(kind: InsightKind) -> &'static str {
    match kind {
        InsightKind::Weather => "🌤️",
        InsightKind::Traffic => "🚦",
        InsightKind::Time => "⏰",
        InsightKind::Location => "📍",
        InsightKind::Other => "💡",
    }
}

const WEATHER_TERMS: [&str; 9] = [
    "rain", "fog", "snow", "wind", "visibility", "weather", "hot", "precipitation", "temperature",
];
const TRAFFIC_TERMS: [&str; 4] = ["traffic", "congestion", "speed", "flow"];
const TIME_TERMS: [&str; 4] = ["hour", "night", "rush", "time"];
const LOCATION_TERMS: [&str; 4] = ["location", "area", "junction", "zone"];

/// Classify an insight line by its dominant topic.
pub fn classify_insight(text: &str) -> InsightKind {
    let lower = text.to_lowercase();
    if WEATHER_TERMS.iter().any(|t| lower.contains(t)) {
        InsightKind::Weather
    } else if TRAFFIC_TERMS.iter().any(|t| lower.contains(t)) {
        InsightKind::Traffic
    } else if TIME_TERMS.iter().any(|t| lower.contains(t)) {
        InsightKind::Time
    } else if LOCATION_TERMS.iter().any(|t| lower.contains(t)) {
        InsightKind::Location
    } else {
        InsightKind::Other
    }
}

/// Safety insights card
#[component]
pub fn InsightsCard(items: Vec<String>) -> impl IntoView {
    view! {
        <div class="bg-gray-800 rounded-xl p-6">
            <h3 class="text-lg font-semibold mb-4">"💡 Risk Insights"</h3>
            <div class="space-y-3">
                {items
                    .into_iter()
                    .map(|text| {
                        let emoji = insight_emoji(classify_insight(&text));
                        view! {
                            <div class="flex items-start space-x-3">
                                <span class="text-xl">{emoji}</span>
                                <p class="text-gray-300 leading-relaxed">{text}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keyword_classification() {
        assert_eq!(
            classify_insight("Rainy conditions with 2.5mm precipitation."),
            InsightKind::Weather
        );
        assert_eq!(
            classify_insight("Heavy traffic with 80% congestion."),
            InsightKind::Traffic
        );
        assert_eq!(classify_insight("Rush hour ahead."), InsightKind::Time);
        assert_eq!(
            classify_insight("Accident-prone junction nearby."),
            InsightKind::Location
        );
        assert_eq!(
            classify_insight("Stay alert and follow the rules."),
            InsightKind::Other
        );
    }

    #[test]
    fn fixed_emoji_lookup() {
        assert_eq!(insight_emoji(InsightKind::Weather), "🌤️");
        assert_eq!(insight_emoji(InsightKind::Traffic), "🚦");
        assert_eq!(insight_emoji(InsightKind::Time), "⏰");
        assert_eq!(insight_emoji(InsightKind::Location), "📍");
        assert_eq!(insight_emoji(InsightKind::Other), "💡");
    }
}
