use crate::model::ScoreResult;
use chrono::NaiveDate;

pub fn score_emoji(score: u32) -> &'static str {
    match score {
        100 => "🎯",
        70 => "👌",
        _ => "❌",
    }
}

/// Texto para compartir los resultados del día.
pub fn share_text(scores: &[ScoreResult], total: u32, max: u32, date: NaiveDate, url: &str) -> String {
    let emojis: String = scores.iter().map(|s| score_emoji(s.score)).collect();
    format!(
        "🌍 Language Game {}\n\nScore: {total}/{max}\n\n{emojis}\n\nPlay at: {url}",
        date.format("%d/%m/%Y")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score(order: u32, score: u32) -> ScoreResult {
        ScoreResult {
            order,
            score,
            correct_language: "Polish".into(),
            guessed_language: "Czech".into(),
        }
    }

    #[test]
    fn emoji_per_score_band() {
        assert_eq!(score_emoji(100), "🎯");
        assert_eq!(score_emoji(70), "👌");
        assert_eq!(score_emoji(0), "❌");
    }

    #[test]
    fn share_text_lists_one_emoji_per_sample() {
        let scores: Vec<_> = [100, 70, 70, 0, 100]
            .iter()
            .enumerate()
            .map(|(i, &s)| score(i as u32 + 1, s))
            .collect();
        let date = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();

        let text = share_text(&scores, 340, 500, date, "https://play.example/");

        assert_eq!(
            text,
            "🌍 Language Game 10/03/2025\n\nScore: 340/500\n\n🎯👌👌❌🎯\n\nPlay at: https://play.example/"
        );
    }
}
