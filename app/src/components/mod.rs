//! UI Components
//!
//! This module contains the dashboard panels extracted from app.rs
//! to improve code organization and reduce file size.

pub mod charts_panel;
pub mod equipment_log;
pub mod history_panel;
pub mod leaderboard;
pub mod metric_cards;

pub use charts_panel::ChartsPanel;
pub use equipment_log::EquipmentLog;
pub use history_panel::HistoryPanel;
pub use leaderboard::Leaderboard;
pub use metric_cards::MetricCards;
