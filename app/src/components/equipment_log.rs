//! Equipment Log Component
//!
//! Search box plus the detailed reading table. Temperatures above the hot
//! threshold get the alert treatment.

use dioxus::prelude::*;

use crate::derived::{ScoredRow, filter_by_name};
use crate::utils::format_quantity;

#[component]
pub fn EquipmentLog(rows: Vec<ScoredRow>) -> Element {
    let mut search_term = use_signal(String::new);

    let term = search_term();
    let filtered = filter_by_name(&rows, &term);

    rsx! {
        section { class: "equipment-log panel",
            div { class: "log-header",
                h3 { "Detailed Equipment Log" }
                input {
                    class: "log-search",
                    r#type: "text",
                    placeholder: "Search by equipment name...",
                    value: "{search_term}",
                    oninput: move |e| search_term.set(e.value()),
                }
                span { class: "row-count", "{filtered.len()} of {rows.len()} readings" }
            }

            if filtered.is_empty() {
                div { class: "log-empty",
                    i { class: "fa-solid fa-inbox" }
                    p { "No matching equipment" }
                    p { class: "hint", "Try a different equipment name" }
                }
            } else {
                div { class: "log-table-container",
                    table { class: "log-table",
                        thead {
                            tr {
                                th { class: "col-name", "NAME" }
                                th { class: "col-type", "TYPE" }
                                th { class: "col-value", "PRESSURE" }
                                th { class: "col-value", "TEMP" }
                            }
                        }
                        tbody {
                            for (idx, scored) in filtered.iter().enumerate() {
                                {
                                    let temp_class = if scored.row.runs_hot() { "temp-high" } else { "" };
                                    let equipment_type =
                                        scored.row.equipment_type.as_deref().unwrap_or("—");

                                    rsx! {
                                        tr { key: "{idx}-{scored.row.name}",
                                            td { class: "col-name", "{scored.row.name}" }
                                            td { class: "col-type", "{equipment_type}" }
                                            td { class: "col-value",
                                                "{format_quantity(scored.row.pressure)} bar"
                                            }
                                            td { class: "col-value {temp_class}",
                                                "{format_quantity(scored.row.temperature)} °C"
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
