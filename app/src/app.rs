#![allow(non_snake_case)]

//! Root component
//!
//! Owns the view-state machine and the upload flow; everything below it is a
//! pure function of the signals defined here.

use dioxus::prelude::*;
use dioxus_logger::tracing::{info, warn};
use wasm_bindgen::JsCast;

use crate::api::{self, UploadError};
use crate::components::{ChartsPanel, EquipmentLog, HistoryPanel, Leaderboard, MetricCards};
use crate::derived::compute_performance;
use crate::types::ViewState;

static CSS: Asset = asset!("/assets/styles.css");

const ECHARTS_CDN: &str = "https://cdnjs.cloudflare.com/ajax/libs/echarts/5.5.1/echarts.min.js";

/// The chosen file stays inside this DOM input (mounted for the lifetime of
/// the page, hidden outside the landing screen) and is looked up at upload
/// time, so the CSV bytes never cross into wasm memory.
const FILE_INPUT_ID: &str = "csv-file-input";

/// How long the full progress bar stays on screen before the dashboard
/// replaces it.
const REVEAL_DELAY_MS: u32 = 500;

fn selected_file() -> Option<web_sys::File> {
    let document = web_sys::window()?.document()?;
    document
        .get_element_by_id(FILE_INPUT_ID)?
        .dyn_into::<web_sys::HtmlInputElement>()
        .ok()?
        .files()?
        .get(0)
}

// ─────────────────────────────────────────────────────────────────────────────
// App Component
// ─────────────────────────────────────────────────────────────────────────────

pub fn App() -> Element {
    // Which screen is up. Progress and the published payload live inside the
    // variants, so a stale dashboard can never show through a running upload.
    let mut view = use_signal(|| ViewState::Landing);

    // Chosen file name, mirrored out of the input for display
    let mut selected_name = use_signal(|| None::<String>);

    // Blocking notice text; the modal shows while this is Some
    let mut notice = use_signal(|| None::<String>);

    // Bumped per published dataset. Keys the dashboard subtree so charts and
    // the search box rebuild instead of inheriting the previous dataset's
    // internal state.
    let mut refresh_token = use_signal(|| 0u32);

    // Identifies the latest upload. Progress ticks and outcomes carrying an
    // older generation are dropped, so a response that lands after a reset
    // is never applied.
    let mut generation = use_signal(|| 0u64);

    let run_analysis = move |_| {
        // One upload at a time
        if view.read().is_loading() {
            return;
        }
        let Some(file) = selected_file() else {
            notice.set(Some(UploadError::NoFileSelected.notice().to_string()));
            return;
        };

        let r#gen = generation() + 1;
        generation.set(r#gen);
        view.set(ViewState::Loading { progress: 0 });
        info!("uploading {} ({} bytes)", file.name(), file.size());

        spawn(async move {
            let outcome = api::upload_csv(&file, move |percent| {
                if generation() != r#gen {
                    return;
                }
                // The bar only moves forward
                if let ViewState::Loading { progress } = view()
                    && percent > progress
                {
                    view.set(ViewState::Loading { progress: percent });
                }
            })
            .await;

            if generation() != r#gen {
                // Superseded by a reset or a newer upload
                return;
            }

            match outcome {
                Ok(stats) => {
                    // Let the 100% state register before swapping screens
                    gloo_timers::future::TimeoutFuture::new(REVEAL_DELAY_MS).await;
                    if generation() != r#gen {
                        return;
                    }
                    info!("analysis complete: {} readings", stats.raw_data.len());
                    refresh_token.set(refresh_token() + 1);
                    view.set(ViewState::Dashboard { stats });
                }
                Err(err) => {
                    warn!("upload failed: {err}");
                    notice.set(Some(err.notice().to_string()));
                    view.set(ViewState::Landing);
                }
            }
        });
    };

    let reset = move |_| {
        generation.set(generation() + 1);
        view.set(ViewState::Landing);
    };

    // Read signals
    let screen = view();
    let on_landing = matches!(screen, ViewState::Landing);
    let chosen_name = selected_name();
    let notice_text = notice();
    let token = refresh_token();
    let processing_name = chosen_name.clone().unwrap_or_default();
    let file_label = match chosen_name {
        Some(ref name) => format!("📄 {name}"),
        None => "📁 Choose CSV Dataset".to_string(),
    };

    rsx! {
        link { rel: "stylesheet", href: CSS }
        link { rel: "stylesheet", href: "https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.5.1/css/all.min.css" }
        script { src: ECHARTS_CDN }

        // Persistent file input: selection survives screen changes, so a
        // reset does not forget the chosen file
        input {
            r#type: "file",
            id: FILE_INPUT_ID,
            class: "file-input",
            accept: ".csv",
            onchange: move |_| {
                selected_name.set(selected_file().map(|f| f.name()));
            },
        }

        if on_landing {
            div { class: "hero-screen",
                div { class: "hero-card",
                    h1 { class: "hero-title",
                        "Chemical Equipment"
                        br {}
                        "Parameter Visualizer"
                    }
                    p { class: "hero-tagline",
                        "Harness industrial-grade analytics to monitor plant pressure, temperature, and flow metrics in real-time."
                    }

                    div { class: "upload-box",
                        label { class: "file-label", r#for: FILE_INPUT_ID,
                            "{file_label}"
                        }
                        button { class: "btn btn-run", onclick: run_analysis,
                            "Run Analysis →"
                        }
                    }

                    div { class: "hero-footnote",
                        "Supports .CSV datasets • Secure local processing"
                    }
                }
            }
        } else {
            main { class: "page",
                header { class: "dash-header",
                    h3 { "Chemical Equipment Visualizer" }
                    button { class: "btn btn-reset", onclick: reset,
                        "Analyze New File"
                    }
                }

                if let ViewState::Loading { progress } = screen {
                    section { class: "progress-section",
                        div { class: "progress-caption",
                            "Processing {processing_name}... {progress}%"
                        }
                        div { class: "progress-track",
                            div {
                                class: "progress-fill",
                                style: "width: {progress}%",
                            }
                        }
                    }
                }

                if let ViewState::Dashboard { ref stats } = screen {
                    {
                        let scored = compute_performance(&stats.raw_data);
                        rsx! {
                            div { key: "{token}", class: "dashboard",
                                MetricCards { stats: stats.clone() }
                                ChartsPanel { distribution: stats.type_distribution.clone() }
                                div { class: "bottom-grid",
                                    EquipmentLog { rows: scored.clone() }
                                    Leaderboard { rows: scored }
                                    HistoryPanel { history: stats.history.clone() }
                                }
                            }
                        }
                    }
                }
            }
        }

        // Blocking notice modal
        if let Some(ref message) = notice_text {
            div { class: "modal-backdrop",
                onclick: move |_| notice.set(None),
                div { class: "notice-panel",
                    onclick: move |e| e.stop_propagation(),
                    p { class: "notice-text", "{message}" }
                    button { class: "btn btn-ok",
                        onclick: move |_| notice.set(None),
                        "OK"
                    }
                }
            }
        }
    }
}
