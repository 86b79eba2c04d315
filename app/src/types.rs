//! Frontend type definitions
//!
//! Re-exports from chemviz-types (shared with the backend) plus the
//! frontend-only view-state machine.

// ─────────────────────────────────────────────────────────────────────────────
// Re-exports from chemviz-types (shared with backend)
// ─────────────────────────────────────────────────────────────────────────────

pub use chemviz_types::{EquipmentRow, HOT_TEMP_THRESHOLD, StatisticsPayload, UploadRecord};

// ─────────────────────────────────────────────────────────────────────────────
// View State
// ─────────────────────────────────────────────────────────────────────────────

/// The three mutually exclusive screens of the app.
///
/// Progress and the published statistics live inside their variants, so
/// "loading while a dashboard is showing" cannot be represented.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewState {
    /// File picker and run button.
    Landing,
    /// Upload in flight. Progress is a 0-100 percentage.
    Loading { progress: u8 },
    /// A complete statistics payload is on screen.
    Dashboard { stats: StatisticsPayload },
}

impl ViewState {
    pub fn is_loading(&self) -> bool {
        matches!(self, ViewState::Loading { .. })
    }
}
