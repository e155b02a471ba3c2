//! Estado de la partida diaria.
//!
//! `GameStore` es la única fuente de verdad para la UI. Las peticiones a la
//! API vuelven por un canal y se aplican en [`GameStore::poll`]; cada una va
//! marcada con una generación y solo se aplica si sigue siendo la actual.

use crate::api::GameApi;
use crate::clock::Clock;
use crate::config::ResumeScores;
use crate::error::ApiError;
use crate::model::{GameStatus, Guesses, NewGameResponse, Sample, ScoreResponse, ScoreResult};
use crate::refresh::DEFAULT_REFRESH_HOUR;
use crate::storage::GameRepository;
use std::sync::mpsc::{self, Receiver, Sender};

// Submódulos
mod actions;
mod completion;
mod resets;


pub const START_ERROR_MESSAGE: &str = "Failed to start game. Please try again.";
pub const SUBMIT_ERROR_MESSAGE: &str = "Failed to submit answers. Please try again.";
pub const POINTS_PER_SAMPLE: u32 = 100;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StoreOptions {
    pub refresh_hour: u32,
    pub resume_scores: ResumeScores,
}

impl Default for StoreOptions {
    fn default() -> Self {
        Self {
            refresh_hour: DEFAULT_REFRESH_HOUR,
            resume_scores: ResumeScores::default(),
        }
    }
}

/// Respuesta de la API pendiente de aplicar.
enum Completion {
    NewGame {
        generation: u64,
        result: Result<NewGameResponse, ApiError>,
    },
    Scored {
        generation: u64,
        result: Result<ScoreResponse, ApiError>,
    },
}

impl Completion {
    fn generation(&self) -> u64 {
        match self {
            Completion::NewGame { generation, .. } | Completion::Scored { generation, .. } => {
                *generation
            }
        }
    }
}

pub struct GameStore {
    samples: Vec<Sample>,
    guesses: Guesses,
    scores: Option<Vec<ScoreResult>>,
    total_score: Option<u32>,
    status: GameStatus,
    is_loading: bool,
    error: Option<String>,

    generation: u64,
    api: Box<dyn GameApi>,
    repo: Box<dyn GameRepository>,
    clock: Box<dyn Clock>,
    options: StoreOptions,
    tx: Sender<Completion>,
    rx: Receiver<Completion>,
}

impl GameStore {
    pub fn new(
        api: Box<dyn GameApi>,
        repo: Box<dyn GameRepository>,
        clock: Box<dyn Clock>,
        options: StoreOptions,
    ) -> Self {
        let (tx, rx) = mpsc::channel();
        Self {
            samples: Vec::new(),
            guesses: Guesses::new(),
            scores: None,
            total_score: None,
            status: GameStatus::Welcome,
            is_loading: false,
            error: None,
            generation: 0,
            api,
            repo,
            clock,
            options,
            tx,
            rx,
        }
    }

    // Accesores para la UI
    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }
    pub fn guesses(&self) -> &Guesses {
        &self.guesses
    }
    pub fn guess(&self, order: u32) -> Option<&str> {
        self.guesses.get(&order).map(String::as_str)
    }
    pub fn scores(&self) -> Option<&[ScoreResult]> {
        self.scores.as_deref()
    }
    pub fn total_score(&self) -> Option<u32> {
        self.total_score
    }
    pub fn status(&self) -> GameStatus {
        self.status
    }
    pub fn is_loading(&self) -> bool {
        self.is_loading
    }
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
    pub fn options(&self) -> StoreOptions {
        self.options
    }

    /// Todas las muestras tienen una respuesta no vacía.
    pub fn all_guessed(&self) -> bool {
        !self.samples.is_empty()
            && self
                .samples
                .iter()
                .all(|s| self.guess(s.order).is_some_and(|g| !g.trim().is_empty()))
    }

    pub fn max_score(&self) -> u32 {
        POINTS_PER_SAMPLE * self.samples.len() as u32
    }

    /// Invalida cualquier petición en vuelo y devuelve la generación nueva.
    fn next_generation(&mut self) -> u64 {
        self.generation += 1;
        self.generation
    }
}
