use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Una muestra de audio del reto diario.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Sample {
    pub language: String, // idioma correcto
    pub audio_url: String,
    pub text: String,
    pub order: u32, // 1-based, único dentro de la partida
}

/// order -> idioma elegido
pub type Guesses = BTreeMap<u32, String>;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct LanguageGuess {
    pub order: u32,
    pub correct_language: String,
    pub guessed_language: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ScoreResult {
    pub order: u32,
    pub score: u32, // 0 | 70 | 100
    pub correct_language: String,
    pub guessed_language: String,
}

// --- Wire ---

#[derive(Deserialize, Debug, Clone)]
pub struct NewGameResponse {
    pub samples: Vec<Sample>,
    #[serde(default)]
    pub message: String,
}

#[derive(Serialize, Debug, Clone)]
pub struct ScoreRequest {
    pub guesses: Vec<LanguageGuess>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct ScoreResponse {
    pub scores: Vec<ScoreResult>,
    pub total_score: u32,
    #[serde(default)]
    pub message: String,
}

// --- Persistencia ---

/// Registro persistido. Las claves en camelCase coinciden con lo que guarda
/// el cliente web, así un registro antiguo sigue cargando.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GameRecord {
    pub current_game: CurrentGame,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_score: Option<LastScore>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CurrentGame {
    pub samples: Vec<Sample>,
    pub fetch_date: DateTime<Utc>,
    pub has_played: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct LastScore {
    pub total_score: u32,
    pub date: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub scores: Vec<ScoreResult>,
}

impl GameRecord {
    pub fn new(samples: Vec<Sample>, fetched_at: DateTime<Utc>) -> Self {
        Self {
            current_game: CurrentGame {
                samples,
                fetch_date: fetched_at,
                has_played: false,
            },
            last_score: None,
        }
    }

    pub fn mark_played(&mut self, total_score: u32, scores: Vec<ScoreResult>, at: DateTime<Utc>) {
        self.current_game.has_played = true;
        self.last_score = Some(LastScore {
            total_score,
            date: at,
            scores,
        });
    }

    /// La última puntuación, solo si pertenece a la partida guardada
    /// (registrada después de su descarga).
    pub fn score_for_current_game(&self) -> Option<&LastScore> {
        self.last_score
            .as_ref()
            .filter(|last| last.date >= self.current_game.fetch_date)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GameStatus {
    #[default]
    Welcome,
    Playing,
    Results,
}
