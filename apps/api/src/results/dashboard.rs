//! Results dashboard. Ranked cards plus a match-score comparison, in the
//! exact order the provider returned them. Nothing here sorts.

use serde::Serialize;
use thiserror::Error;

use crate::models::CareerSuggestion;

pub const TOP_CHOICE_BADGE: &str = "Top Choice";

/// Outlook markers that get the highlighted colour.
const HIGH_GROWTH_MARKERS: &[&str] = &["Very High", "Alta"];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("no result card at index {index} (have {len})")]
pub struct CardOutOfRange {
    pub index: usize,
    pub len: usize,
}

/// One bar of the horizontal match-score chart.
#[derive(Debug, Clone, Serialize)]
pub struct ChartBar {
    pub label: String,
    pub full_title: String,
    pub score: i64,
    pub top: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct CardView {
    pub index: usize,
    pub title: String,
    pub description: String,
    pub salary_range_usd: String,
    pub match_score: i64,
    pub match_label: String,
    pub badge: Option<&'static str>,
    pub expanded: bool,
    pub detail: Option<CardDetail>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CardDetail {
    pub education_path: String,
    pub why_it_fits: String,
    pub required_skills: Vec<String>,
    pub growth_outlook: String,
    pub high_growth: bool,
}

/// Held suggestions plus which card, if any, is open.
#[derive(Debug, Clone)]
pub struct ResultsBoard {
    suggestions: Vec<CareerSuggestion>,
    expanded: Option<usize>,
}

impl ResultsBoard {
    /// Returns `None` for an empty list; an empty board never exists.
    /// The first card starts expanded.
    pub fn new(suggestions: Vec<CareerSuggestion>) -> Option<Self> {
        if suggestions.is_empty() {
            return None;
        }
        Some(Self {
            suggestions,
            expanded: Some(0),
        })
    }

    pub fn suggestions(&self) -> &[CareerSuggestion] {
        &self.suggestions
    }

    pub fn expanded(&self) -> Option<usize> {
        self.expanded
    }

    /// Selecting the open card closes it; selecting any other opens it alone.
    pub fn toggle(&mut self, index: usize) -> Result<Option<usize>, CardOutOfRange> {
        if index >= self.suggestions.len() {
            return Err(CardOutOfRange {
                index,
                len: self.suggestions.len(),
            });
        }
        self.expanded = if self.expanded == Some(index) {
            None
        } else {
            Some(index)
        };
        Ok(self.expanded)
    }

    pub fn chart(&self) -> Vec<ChartBar> {
        self.suggestions
            .iter()
            .enumerate()
            .map(|(i, s)| ChartBar {
                label: short_label(&s.title).to_string(),
                full_title: s.title.clone(),
                score: s.match_score,
                top: i == 0,
            })
            .collect()
    }

    pub fn cards(&self) -> Vec<CardView> {
        self.suggestions
            .iter()
            .enumerate()
            .map(|(i, s)| {
                let expanded = self.expanded == Some(i);
                CardView {
                    index: i,
                    title: s.title.clone(),
                    description: s.description.clone(),
                    salary_range_usd: s.salary_range_usd.clone(),
                    match_score: s.match_score,
                    match_label: format!("{}%", s.match_score),
                    badge: (i == 0).then_some(TOP_CHOICE_BADGE),
                    expanded,
                    detail: expanded.then(|| CardDetail {
                        education_path: s.education_path.clone(),
                        why_it_fits: s.why_it_fits.clone(),
                        required_skills: s.required_skills.clone(),
                        growth_outlook: s.growth_outlook.clone(),
                        high_growth: is_high_growth(&s.growth_outlook),
                    }),
                }
            })
            .collect()
    }
}

/// First word of the title, for the chart axis.
fn short_label(title: &str) -> &str {
    title.split_whitespace().next().unwrap_or(title)
}

fn is_high_growth(outlook: &str) -> bool {
    HIGH_GROWTH_MARKERS.iter().any(|m| outlook.contains(m))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn suggestion(title: &str, score: i64, outlook: &str) -> CareerSuggestion {
        CareerSuggestion {
            title: title.to_string(),
            description: format!("{title} description"),
            match_score: score,
            salary_range_usd: "$100k - $150k".to_string(),
            education_path: "Grado universitario".to_string(),
            required_skills: vec!["Python".to_string()],
            why_it_fits: "Encaja contigo".to_string(),
            growth_outlook: outlook.to_string(),
        }
    }

    fn board() -> ResultsBoard {
        ResultsBoard::new(vec![
            suggestion("Ingeniero de Datos", 70, "High"),
            suggestion("Actuario", 95, "Stable"),
            suggestion("Arquitecto de Soluciones", 88, "Very High"),
        ])
        .unwrap()
    }

    #[test]
    fn test_empty_list_makes_no_board() {
        assert!(ResultsBoard::new(vec![]).is_none());
    }

    #[test]
    fn test_first_card_expanded_by_default() {
        let board = board();
        assert_eq!(board.expanded(), Some(0));
        let cards = board.cards();
        assert!(cards[0].expanded);
        assert!(cards[0].detail.is_some());
        assert!(cards[1..].iter().all(|c| !c.expanded && c.detail.is_none()));
    }

    #[test]
    fn test_toggle_open_card_collapses_it() {
        let mut board = board();
        assert_eq!(board.toggle(0), Ok(None));
        assert!(board.cards().iter().all(|c| !c.expanded));
    }

    #[test]
    fn test_toggle_other_card_moves_expansion() {
        let mut board = board();
        assert_eq!(board.toggle(2), Ok(Some(2)));
        let expanded: Vec<usize> = board
            .cards()
            .iter()
            .filter(|c| c.expanded)
            .map(|c| c.index)
            .collect();
        assert_eq!(expanded, vec![2]);

        assert_eq!(board.toggle(2), Ok(None));
        assert_eq!(board.toggle(1), Ok(Some(1)));
    }

    #[test]
    fn test_toggle_out_of_range_leaves_state() {
        let mut board = board();
        assert_eq!(board.toggle(3), Err(CardOutOfRange { index: 3, len: 3 }));
        assert_eq!(board.expanded(), Some(0));
    }

    #[test]
    fn test_provider_order_is_kept() {
        let board = board();
        let scores: Vec<i64> = board.chart().iter().map(|b| b.score).collect();
        assert_eq!(scores, vec![70, 95, 88]);
        let titles: Vec<String> = board.cards().into_iter().map(|c| c.title).collect();
        assert_eq!(
            titles,
            vec!["Ingeniero de Datos", "Actuario", "Arquitecto de Soluciones"]
        );
    }

    #[test]
    fn test_only_first_entry_is_top_choice() {
        let board = board();
        let cards = board.cards();
        assert_eq!(cards[0].badge, Some("Top Choice"));
        assert!(cards[1..].iter().all(|c| c.badge.is_none()));
        let chart = board.chart();
        assert!(chart[0].top);
        assert!(chart[1..].iter().all(|b| !b.top));
    }

    #[test]
    fn test_chart_label_is_first_word() {
        let chart = board().chart();
        assert_eq!(chart[0].label, "Ingeniero");
        assert_eq!(chart[0].full_title, "Ingeniero de Datos");
        assert_eq!(chart[1].label, "Actuario");
    }

    #[test]
    fn test_match_label_and_growth_highlight() {
        let mut board = board();
        assert_eq!(board.cards()[1].match_label, "95%");
        board.toggle(2).unwrap();
        let detail = board.cards()[2].detail.clone().unwrap();
        assert!(detail.high_growth);
        board.toggle(1).unwrap();
        assert!(!board.cards()[1].detail.clone().unwrap().high_growth);
        assert!(is_high_growth("Alta"));
    }
}
