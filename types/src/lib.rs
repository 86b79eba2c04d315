//! Shared wire types for the Chemical Equipment Parameter Visualizer
//!
//! This crate contains the serializable REST contract shared between the
//! analytics backend and the WASM frontend (chemviz-ui). Field renames follow
//! the wire spelling exactly; the backend echoes CSV headers verbatim.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// ─────────────────────────────────────────────────────────────────────────────
// Display Thresholds (shared product rules, not presentation details)
// ─────────────────────────────────────────────────────────────────────────────

/// Temperature in °C above which a reading is flagged as running hot.
pub const HOT_TEMP_THRESHOLD: f64 = 115.0;

// ─────────────────────────────────────────────────────────────────────────────
// Upload Response Types
// ─────────────────────────────────────────────────────────────────────────────

/// One equipment reading, echoed back by the backend from the uploaded CSV.
///
/// Keys on the wire are the CSV column headers, spaces included.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquipmentRow {
    #[serde(rename = "Equipment Name")]
    pub name: String,
    /// Equipment category (Pump, Valve, ...). Older backends omit it.
    #[serde(rename = "Type", default, skip_serializing_if = "Option::is_none")]
    pub equipment_type: Option<String>,
    /// Reading in °C.
    #[serde(rename = "Temperature")]
    pub temperature: f64,
    /// Reading in bar.
    #[serde(rename = "Pressure")]
    pub pressure: f64,
    /// Reading in m³/h. Older backends omit it.
    #[serde(rename = "Flowrate", default, skip_serializing_if = "Option::is_none")]
    pub flowrate: Option<f64>,
}

impl EquipmentRow {
    /// True when the temperature sits strictly above [`HOT_TEMP_THRESHOLD`].
    pub fn runs_hot(&self) -> bool {
        self.temperature > HOT_TEMP_THRESHOLD
    }
}

/// One prior upload kept by the backend, newest first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UploadRecord {
    pub filename: String,
    /// Backend-formatted timestamp. Rendered verbatim, never parsed.
    pub date: String,
}

/// Aggregated statistics returned by `POST /api/upload/`.
///
/// Every envelope field is required: a response missing any of them is
/// rejected whole rather than rendered partially.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatisticsPayload {
    pub total_count: u64,
    pub avg_pressure: f64,
    pub max_temp: f64,
    pub avg_flowrate: f64,
    /// Equipment category -> unit count. BTreeMap keeps chart order stable
    /// across refreshes regardless of backend serialization order.
    pub type_distribution: BTreeMap<String, u64>,
    pub raw_data: Vec<EquipmentRow>,
    pub history: Vec<UploadRecord>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scenario_payload() -> &'static str {
        r#"{
            "total_count": 2,
            "avg_pressure": 5.0,
            "max_temp": 120.0,
            "avg_flowrate": 10.0,
            "type_distribution": {"Pump": 1, "Valve": 1},
            "raw_data": [
                {"Equipment Name": "P1", "Type": "Pump", "Temperature": 100.0, "Pressure": 10.0, "Flowrate": 12.0},
                {"Equipment Name": "V1", "Type": "Valve", "Temperature": 120.0, "Pressure": 5.0, "Flowrate": 8.0}
            ],
            "history": []
        }"#
    }

    #[test]
    fn decodes_full_payload() {
        let payload: StatisticsPayload = serde_json::from_str(scenario_payload()).unwrap();
        assert_eq!(payload.total_count, 2);
        assert_eq!(payload.avg_pressure, 5.0);
        assert_eq!(payload.max_temp, 120.0);
        assert_eq!(payload.avg_flowrate, 10.0);
        assert_eq!(payload.type_distribution.get("Pump"), Some(&1));
        assert_eq!(payload.type_distribution.get("Valve"), Some(&1));
        assert_eq!(payload.raw_data.len(), 2);
        assert_eq!(payload.raw_data[0].name, "P1");
        assert_eq!(payload.raw_data[1].pressure, 5.0);
        assert!(payload.history.is_empty());
    }

    #[test]
    fn rows_tolerate_missing_optional_columns() {
        let json = r#"{"Equipment Name": "R1", "Temperature": 90.5, "Pressure": 3.0}"#;
        let row: EquipmentRow = serde_json::from_str(json).unwrap();
        assert_eq!(row.name, "R1");
        assert_eq!(row.equipment_type, None);
        assert_eq!(row.flowrate, None);
    }

    #[test]
    fn rows_ignore_unknown_columns() {
        let json = r#"{"Equipment Name": "R1", "Temperature": 90.5, "Pressure": 3.0, "Operator": "J. Doe"}"#;
        let row: EquipmentRow = serde_json::from_str(json).unwrap();
        assert_eq!(row.name, "R1");
    }

    #[test]
    fn missing_envelope_field_is_rejected() {
        // avg_pressure dropped
        let json = r#"{
            "total_count": 2,
            "max_temp": 120.0,
            "avg_flowrate": 10.0,
            "type_distribution": {},
            "raw_data": [],
            "history": []
        }"#;
        assert!(serde_json::from_str::<StatisticsPayload>(json).is_err());
    }

    #[test]
    fn hot_threshold_is_strict() {
        let mut row: EquipmentRow = serde_json::from_str(
            r#"{"Equipment Name": "R1", "Temperature": 115.0, "Pressure": 3.0}"#,
        )
        .unwrap();
        assert!(!row.runs_hot());
        row.temperature = 115.1;
        assert!(row.runs_hot());
    }

    #[test]
    fn history_records_decode() {
        let json = r#"[{"filename": "plant_a.csv", "date": "2024-03-01 09:12"}]"#;
        let history: Vec<UploadRecord> = serde_json::from_str(json).unwrap();
        assert_eq!(history[0].filename, "plant_a.csv");
        assert_eq!(history[0].date, "2024-03-01 09:12");
    }

    #[test]
    fn distribution_keys_sort_for_stable_charts() {
        let json = r#"{"Valve": 3, "Pump": 2, "Compressor": 1}"#;
        let dist: BTreeMap<String, u64> = serde_json::from_str(json).unwrap();
        let keys: Vec<&str> = dist.keys().map(String::as_str).collect();
        assert_eq!(keys, ["Compressor", "Pump", "Valve"]);
    }
}
