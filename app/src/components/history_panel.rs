//! Upload History Panel Component
//!
//! Numbered list of recent uploads as reported by the backend.

use dioxus::prelude::*;

use crate::types::UploadRecord;

#[component]
pub fn HistoryPanel(history: Vec<UploadRecord>) -> Element {
    rsx! {
        section { class: "history-panel panel accent-navy",
            h4 { "📂 History" }
            if history.is_empty() {
                p { class: "hint", "No uploads recorded yet" }
            } else {
                for (idx, record) in history.iter().enumerate() {
                    {
                        let position = idx + 1;
                        rsx! {
                            div { key: "{idx}-{record.filename}", class: "side-card",
                                strong { "{position}. {record.filename}" }
                                br {}
                                small { "{record.date}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
