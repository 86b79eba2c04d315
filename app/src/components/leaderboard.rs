//! Leaderboard Component
//!
//! The five lowest Temperature/Pressure ratios, ascending, with medals on
//! the top three.

use dioxus::prelude::*;

use crate::derived::{ScoredRow, rank_leaderboard};
use crate::utils::format_score;

fn medal(rank: usize) -> &'static str {
    match rank {
        0 => "🥇",
        1 => "🥈",
        2 => "🥉",
        _ => "",
    }
}

#[component]
pub fn Leaderboard(rows: Vec<ScoredRow>) -> Element {
    let ranked = rank_leaderboard(&rows);

    rsx! {
        section { class: "leaderboard panel accent-gold",
            h4 { "🏆 Leaderboard" }
            if ranked.is_empty() {
                p { class: "hint", "No scored readings yet" }
            } else {
                for (rank, scored) in ranked.iter().enumerate() {
                    {
                        let card_class = if rank < 3 { "side-card ranked" } else { "side-card" };
                        rsx! {
                            div { key: "{rank}-{scored.row.name}", class: "{card_class}",
                                strong { "{scored.row.name} {medal(rank)}" }
                                br {}
                                small { "Efficiency: {format_score(scored.score)}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn medals_stop_after_third_place() {
        assert_eq!(medal(0), "🥇");
        assert_eq!(medal(1), "🥈");
        assert_eq!(medal(2), "🥉");
        assert_eq!(medal(3), "");
        assert_eq!(medal(4), "");
    }
}
