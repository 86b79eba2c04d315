//! Backend API client module
//!
//! Centralizes all communication with the analytics backend: the upload
//! request, its progress plumbing, and response decoding. XHR rather than
//! fetch because upload progress events only exist on XHR.

use std::cell::RefCell;
use std::rc::Rc;

use thiserror::Error;
use wasm_bindgen::prelude::*;

use crate::types::StatisticsPayload;

// ─────────────────────────────────────────────────────────────────────────────
// Endpoint Configuration
// ─────────────────────────────────────────────────────────────────────────────

/// Upload endpoint of the analytics backend.
const UPLOAD_URL: &str = "http://127.0.0.1:8000/api/upload/";

/// Abort requests that have not completed after five minutes.
const UPLOAD_TIMEOUT_MS: u32 = 300_000;

// ─────────────────────────────────────────────────────────────────────────────
// Error Taxonomy
// ─────────────────────────────────────────────────────────────────────────────

/// Why an upload produced no dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UploadError {
    #[error("no file selected")]
    NoFileSelected,
    #[error("request failed: {0}")]
    Transport(String),
    #[error("server returned HTTP {0}")]
    Status(u16),
    #[error("malformed statistics payload: {0}")]
    Decode(String),
}

impl UploadError {
    /// User-facing notice text. Transport, status, and decode failures read
    /// the same on screen; the distinction is for the log.
    pub fn notice(&self) -> &'static str {
        match self {
            UploadError::NoFileSelected => "Please select a file first.",
            _ => "Upload failed. Ensure the analytics backend is running.",
        }
    }
}

fn transport(err: JsValue, context: &str) -> UploadError {
    UploadError::Transport(match err.as_string() {
        Some(detail) => format!("{context}: {detail}"),
        None => context.to_string(),
    })
}

// ─────────────────────────────────────────────────────────────────────────────
// Response Interpretation (pure, shared with tests)
// ─────────────────────────────────────────────────────────────────────────────

/// Interpret a completed request: 2xx decodes the payload, anything else is
/// a status failure. A 2xx body that does not decode to a complete payload
/// is rejected whole.
fn decode_response(status: u16, body: &str) -> Result<StatisticsPayload, UploadError> {
    if !(200..300).contains(&status) {
        return Err(UploadError::Status(status));
    }
    serde_json::from_str(body).map_err(|err| UploadError::Decode(err.to_string()))
}

/// Rounded percentage of the request body sent so far, clamped to 0-100.
fn progress_percent(loaded: f64, total: f64) -> u8 {
    if total <= 0.0 || !total.is_finite() {
        return 0;
    }
    (loaded / total * 100.0).round().clamp(0.0, 100.0) as u8
}

// ─────────────────────────────────────────────────────────────────────────────
// Upload
// ─────────────────────────────────────────────────────────────────────────────

/// Upload a CSV to the backend, reporting progress along the way.
///
/// Resolves once the backend's response has been decoded (or the request has
/// failed). The progress callback receives rounded 0-100 percentages in
/// upload order; enforcing monotonic display is the caller's job.
pub async fn upload_csv(
    file: &web_sys::File,
    mut on_progress: impl FnMut(u8) + 'static,
) -> Result<StatisticsPayload, UploadError> {
    let xhr = web_sys::XmlHttpRequest::new().map_err(|e| transport(e, "request setup failed"))?;
    xhr.open("POST", UPLOAD_URL)
        .map_err(|e| transport(e, "request setup failed"))?;
    xhr.set_timeout(UPLOAD_TIMEOUT_MS);

    let form = web_sys::FormData::new().map_err(|e| transport(e, "form setup failed"))?;
    form.append_with_blob_and_filename("file", file, &file.name())
        .map_err(|e| transport(e, "form setup failed"))?;

    // One-shot completion channel; whichever terminal handler fires first
    // takes the sender.
    let (tx, rx) = tokio::sync::oneshot::channel::<Result<StatisticsPayload, UploadError>>();
    let tx = Rc::new(RefCell::new(Some(tx)));

    let on_progress = Closure::<dyn FnMut(web_sys::ProgressEvent)>::new(
        move |event: web_sys::ProgressEvent| {
            if event.length_computable() {
                on_progress(progress_percent(event.loaded(), event.total()));
            }
        },
    );
    if let Ok(upload) = xhr.upload() {
        upload.set_onprogress(Some(on_progress.as_ref().unchecked_ref()));
    }

    let xhr_done = xhr.clone();
    let tx_done = Rc::clone(&tx);
    let onload = Closure::<dyn FnMut()>::new(move || {
        let status = xhr_done.status().unwrap_or(0);
        let body = xhr_done.response_text().ok().flatten().unwrap_or_default();
        if let Some(tx) = tx_done.borrow_mut().take() {
            let _ = tx.send(decode_response(status, &body));
        }
    });
    xhr.set_onload(Some(onload.as_ref().unchecked_ref()));

    let tx_err = Rc::clone(&tx);
    let onerror = Closure::<dyn FnMut()>::new(move || {
        if let Some(tx) = tx_err.borrow_mut().take() {
            let _ = tx.send(Err(UploadError::Transport("network error".to_string())));
        }
    });
    xhr.set_onerror(Some(onerror.as_ref().unchecked_ref()));

    let tx_timeout = Rc::clone(&tx);
    let ontimeout = Closure::<dyn FnMut()>::new(move || {
        if let Some(tx) = tx_timeout.borrow_mut().take() {
            let _ = tx.send(Err(UploadError::Transport("request timed out".to_string())));
        }
    });
    xhr.set_ontimeout(Some(ontimeout.as_ref().unchecked_ref()));

    xhr.send_with_opt_form_data(Some(&form))
        .map_err(|e| transport(e, "send failed"))?;

    // The closures must outlive the request: dropping them before the
    // terminal event fires would tear down the JS callbacks mid-flight.
    let result = rx
        .await
        .map_err(|_| UploadError::Transport("response channel closed".to_string()));
    drop(on_progress);
    drop(onload);
    drop(onerror);
    drop(ontimeout);
    result?
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_success_payload() {
        let body = r#"{
            "total_count": 1,
            "avg_pressure": 4.5,
            "max_temp": 88.0,
            "avg_flowrate": 12.0,
            "type_distribution": {"Pump": 1},
            "raw_data": [{"Equipment Name": "P1", "Temperature": 88.0, "Pressure": 4.5}],
            "history": [{"filename": "a.csv", "date": "2024-01-01"}]
        }"#;
        let payload = decode_response(200, body).unwrap();
        assert_eq!(payload.total_count, 1);
        assert_eq!(payload.history.len(), 1);
    }

    #[test]
    fn non_success_status_is_rejected() {
        assert_eq!(decode_response(500, "{}"), Err(UploadError::Status(500)));
        assert_eq!(decode_response(404, ""), Err(UploadError::Status(404)));
        assert_eq!(decode_response(0, ""), Err(UploadError::Status(0)));
    }

    #[test]
    fn malformed_body_is_a_decode_failure() {
        assert!(matches!(
            decode_response(200, "<html>server error</html>"),
            Err(UploadError::Decode(_))
        ));
        assert!(matches!(
            decode_response(200, r#"{"total_count": 1}"#),
            Err(UploadError::Decode(_))
        ));
    }

    #[test]
    fn progress_rounds_and_clamps() {
        assert_eq!(progress_percent(0.0, 1000.0), 0);
        assert_eq!(progress_percent(250.0, 1000.0), 25);
        assert_eq!(progress_percent(999.0, 1000.0), 100);
        assert_eq!(progress_percent(1000.0, 1000.0), 100);
        assert_eq!(progress_percent(2000.0, 1000.0), 100);
        assert_eq!(progress_percent(10.0, 0.0), 0);
    }

    #[test]
    fn progress_rounds_half_up() {
        assert_eq!(progress_percent(245.0, 1000.0), 25);
        assert_eq!(progress_percent(244.0, 1000.0), 24);
    }

    #[test]
    fn notices_stay_generic_for_backend_failures() {
        assert_eq!(UploadError::NoFileSelected.notice(), "Please select a file first.");
        let backend = UploadError::Status(500).notice();
        assert_eq!(backend, UploadError::Transport("x".into()).notice());
        assert_eq!(backend, UploadError::Decode("y".into()).notice());
    }
}
