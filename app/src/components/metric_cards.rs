//! Metric Cards Component
//!
//! The four-up KPI row at the top of the dashboard.

use dioxus::prelude::*;

use crate::types::StatisticsPayload;
use crate::utils::format_with_unit;

#[component]
pub fn MetricCards(stats: StatisticsPayload) -> Element {
    rsx! {
        section { class: "metric-cards",
            MetricCard {
                icon: "🏭",
                label: "Total Units",
                value: stats.total_count.to_string(),
            }
            MetricCard {
                icon: "🌡️",
                label: "Avg Pressure",
                value: format_with_unit(stats.avg_pressure, "bar"),
            }
            MetricCard {
                icon: "🔥",
                label: "Max Temp",
                value: format_with_unit(stats.max_temp, "°C"),
            }
            MetricCard {
                icon: "💧",
                label: "Avg Flow",
                value: format_with_unit(stats.avg_flowrate, "m³/h"),
            }
        }
    }
}

#[component]
fn MetricCard(icon: &'static str, label: &'static str, value: String) -> Element {
    rsx! {
        div { class: "metric-card",
            div { class: "metric-icon", "{icon}" }
            span { class: "metric-label", "{label}" }
            h2 { class: "metric-value", "{value}" }
        }
    }
}
