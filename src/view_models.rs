// src/view_models.rs

use crate::model::ScoreResult;
use crate::share::score_emoji;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScoreRow {
    pub order: u32,
    pub score: u32,
    pub guessed: String,
    pub correct: String,
    pub emoji: &'static str,
}

impl ScoreRow {
    pub fn label(&self) -> String {
        format!("{} Sample {}", self.emoji, self.order)
    }

    pub fn is_correct(&self) -> bool {
        self.score == 100
    }
}

impl From<&ScoreResult> for ScoreRow {
    fn from(s: &ScoreResult) -> Self {
        let guessed = if s.guessed_language.trim().is_empty() {
            "(no guess)".to_string()
        } else {
            s.guessed_language.clone()
        };
        Self {
            order: s.order,
            score: s.score,
            guessed,
            correct: s.correct_language.clone(),
            emoji: score_emoji(s.score),
        }
    }
}

/// Filas ordenadas por número de muestra.
pub fn score_rows(scores: &[ScoreResult]) -> Vec<ScoreRow> {
    let mut rows: Vec<ScoreRow> = scores.iter().map(ScoreRow::from).collect();
    rows.sort_by_key(|r| r.order);
    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_are_sorted_and_labelled() {
        let scores = vec![
            ScoreResult {
                order: 2,
                score: 0,
                correct_language: "Thai".into(),
                guessed_language: "".into(),
            },
            ScoreResult {
                order: 1,
                score: 100,
                correct_language: "Greek".into(),
                guessed_language: "Greek".into(),
            },
        ];

        let rows = score_rows(&scores);

        assert_eq!(rows[0].order, 1);
        assert!(rows[0].is_correct());
        assert_eq!(rows[0].label(), "🎯 Sample 1");
        assert_eq!(rows[1].guessed, "(no guess)");
        assert_eq!(rows[1].emoji, "❌");
    }
}
