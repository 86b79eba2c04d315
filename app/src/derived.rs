//! Derived data layer
//!
//! Pure client-side computations over the statistics payload: the per-row
//! efficiency score, the name filter, and the leaderboard ranking. Everything
//! here is recomputed per render pass and never stored.

use crate::types::EquipmentRow;

/// How many entries the leaderboard shows.
pub const LEADERBOARD_SIZE: usize = 5;

/// A raw reading paired with its efficiency score.
///
/// The score is Temperature/Pressure rounded to two decimals. Readings with
/// zero pressure (or an otherwise non-finite quotient) carry no score.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredRow {
    pub row: EquipmentRow,
    pub score: Option<f64>,
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Score every row, preserving input order.
pub fn compute_performance(rows: &[EquipmentRow]) -> Vec<ScoredRow> {
    rows.iter()
        .map(|row| {
            let quotient = row.temperature / row.pressure;
            let score = quotient.is_finite().then(|| round2(quotient));
            ScoredRow {
                row: row.clone(),
                score,
            }
        })
        .collect()
}

/// Case-insensitive substring match on the equipment name. An empty term
/// matches everything. Order-preserving.
pub fn filter_by_name(rows: &[ScoredRow], term: &str) -> Vec<ScoredRow> {
    if term.is_empty() {
        return rows.to_vec();
    }
    let needle = term.to_lowercase();
    rows.iter()
        .filter(|scored| scored.row.name.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

/// The lowest-scoring rows, ascending, at most [`LEADERBOARD_SIZE`] of them.
/// Unscored rows are excluded; ties keep input order.
pub fn rank_leaderboard(rows: &[ScoredRow]) -> Vec<ScoredRow> {
    let mut ranked: Vec<ScoredRow> = rows
        .iter()
        .filter(|scored| scored.score.is_some())
        .cloned()
        .collect();
    ranked.sort_by(|a, b| match (a.score, b.score) {
        (Some(x), Some(y)) => x.total_cmp(&y),
        _ => std::cmp::Ordering::Equal,
    });
    ranked.truncate(LEADERBOARD_SIZE);
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(name: &str, temperature: f64, pressure: f64) -> EquipmentRow {
        EquipmentRow {
            name: name.to_string(),
            equipment_type: None,
            temperature,
            pressure,
            flowrate: None,
        }
    }

    #[test]
    fn scores_round_to_two_decimals() {
        let rows = vec![row("P1", 100.0, 10.0), row("V1", 120.0, 5.0), row("C1", 10.0, 3.0)];
        let scored = compute_performance(&rows);
        assert_eq!(scored[0].score, Some(10.0));
        assert_eq!(scored[1].score, Some(24.0));
        assert_eq!(scored[2].score, Some(3.33));
    }

    #[test]
    fn scoring_preserves_order() {
        let rows = vec![row("Z", 1.0, 1.0), row("A", 2.0, 1.0), row("M", 3.0, 1.0)];
        let scored = compute_performance(&rows);
        let names: Vec<&str> = scored.iter().map(|s| s.row.name.as_str()).collect();
        assert_eq!(names, ["Z", "A", "M"]);
    }

    #[test]
    fn zero_pressure_rows_carry_no_score() {
        let scored = compute_performance(&[row("broken gauge", 95.0, 0.0)]);
        assert_eq!(scored[0].score, None);
    }

    #[test]
    fn empty_term_matches_all() {
        let scored = compute_performance(&[row("P1", 100.0, 10.0), row("V1", 120.0, 5.0)]);
        let filtered = filter_by_name(&scored, "");
        assert_eq!(filtered.len(), 2);
        assert_eq!(filtered[0].row.name, "P1");
    }

    #[test]
    fn filter_is_case_insensitive() {
        let scored = compute_performance(&[
            row("Main Pump", 100.0, 10.0),
            row("Relief Valve", 120.0, 5.0),
            row("pump aux", 90.0, 9.0),
        ]);
        let filtered = filter_by_name(&scored, "PUMP");
        let names: Vec<&str> = filtered.iter().map(|s| s.row.name.as_str()).collect();
        assert_eq!(names, ["Main Pump", "pump aux"]);

        let filtered = filter_by_name(&scored, "v");
        let names: Vec<&str> = filtered.iter().map(|s| s.row.name.as_str()).collect();
        assert_eq!(names, ["Relief Valve"]);
    }

    #[test]
    fn single_letter_filter_narrows_to_matching_unit() {
        let scored = compute_performance(&[row("P1", 100.0, 10.0), row("V1", 120.0, 5.0)]);
        let filtered = filter_by_name(&scored, "v");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].row.name, "V1");
    }

    #[test]
    fn leaderboard_is_ascending_top_five() {
        let scored = compute_performance(&[
            row("A", 60.0, 1.0),
            row("B", 10.0, 1.0),
            row("C", 50.0, 1.0),
            row("D", 20.0, 1.0),
            row("E", 40.0, 1.0),
            row("F", 30.0, 1.0),
            row("G", 70.0, 1.0),
        ]);
        let ranked = rank_leaderboard(&scored);
        let names: Vec<&str> = ranked.iter().map(|s| s.row.name.as_str()).collect();
        assert_eq!(names, ["B", "D", "F", "E", "C"]);
    }

    #[test]
    fn leaderboard_skips_unscored_rows() {
        let scored = compute_performance(&[row("ok", 10.0, 2.0), row("dead gauge", 1.0, 0.0)]);
        let ranked = rank_leaderboard(&scored);
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].row.name, "ok");
    }

    #[test]
    fn leaderboard_ties_keep_input_order() {
        let scored = compute_performance(&[row("first", 10.0, 1.0), row("second", 20.0, 2.0)]);
        let ranked = rank_leaderboard(&scored);
        let names: Vec<&str> = ranked.iter().map(|s| s.row.name.as_str()).collect();
        assert_eq!(names, ["first", "second"]);
    }
}
