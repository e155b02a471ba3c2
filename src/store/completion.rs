use super::*;
use crate::model::GameRecord;
use chrono::Utc;
use std::collections::BTreeSet;

impl GameStore {
    /// Aplica las respuestas llegadas desde la última llamada. Devuelve `true`
    /// si el estado cambió. La UI lo llama en cada frame.
    pub fn poll(&mut self) -> bool {
        let mut changed = false;
        while let Ok(completion) = self.rx.try_recv() {
            changed |= self.apply(completion);
        }
        changed
    }

    fn apply(&mut self, completion: Completion) -> bool {
        let generation = completion.generation();
        if generation != self.generation {
            log::debug!(
                "descartando respuesta obsoleta (generación {generation}, actual {})",
                self.generation
            );
            return false;
        }

        match completion {
            Completion::NewGame { result, .. } => self.apply_new_game(result),
            Completion::Scored { result, .. } => self.apply_scores(result),
        }
        self.is_loading = false;
        true
    }

    fn apply_new_game(&mut self, result: Result<NewGameResponse, ApiError>) {
        let response = match result.and_then(check_new_game) {
            Ok(response) => response,
            Err(err) => {
                log::error!("no se pudo obtener la partida ({}): {err}", err.kind());
                self.error = Some(START_ERROR_MESSAGE.to_string());
                return;
            }
        };

        let fetched_at = self.clock.now().with_timezone(&Utc);
        let record = GameRecord::new(response.samples, fetched_at);
        self.persist(&record);
        log::info!(
            "partida nueva con {} muestras",
            record.current_game.samples.len()
        );

        self.samples = record.current_game.samples;
        self.guesses.clear();
        self.scores = None;
        self.total_score = None;
        self.status = GameStatus::Playing;
    }

    fn apply_scores(&mut self, result: Result<ScoreResponse, ApiError>) {
        let response = match result.and_then(|r| check_scores(&self.samples, r)) {
            Ok(response) => response,
            Err(err) => {
                log::error!("no se pudieron puntuar las respuestas ({}): {err}", err.kind());
                self.error = Some(SUBMIT_ERROR_MESSAGE.to_string());
                return;
            }
        };

        let summed: u32 = response.scores.iter().map(|s| s.score).sum();
        if summed != response.total_score {
            log::warn!(
                "total del servidor ({}) distinto de la suma de puntuaciones ({summed})",
                response.total_score
            );
        }

        let now = self.clock.now().with_timezone(&Utc);
        match self.repo.load() {
            Some(mut record) => {
                record.mark_played(response.total_score, response.scores.clone(), now);
                self.persist(&record);
            }
            None => log::warn!("no hay partida guardada que marcar como jugada"),
        }

        log::info!("puntuación {}/{}", response.total_score, self.max_score());
        self.scores = Some(response.scores);
        self.total_score = Some(response.total_score);
        self.status = GameStatus::Results;
    }

    pub(super) fn resume_cached(&mut self, record: GameRecord) {
        let has_played = record.current_game.has_played;
        let restored = match self.options.resume_scores {
            ResumeScores::Restore if has_played => record.score_for_current_game().cloned(),
            _ => None,
        };

        log::info!(
            "retomando partida del {} ({})",
            record.current_game.fetch_date,
            if has_played { "ya jugada" } else { "pendiente" }
        );
        self.samples = record.current_game.samples;
        self.status = if has_played {
            GameStatus::Results
        } else {
            GameStatus::Playing
        };

        match restored {
            Some(last) => {
                self.total_score = Some(last.total_score);
                self.scores = (!last.scores.is_empty()).then_some(last.scores);
            }
            None => {
                self.total_score = None;
                self.scores = None;
            }
        }
    }

    fn persist(&mut self, record: &GameRecord) {
        if let Err(err) = self.repo.save(record) {
            log::warn!("no se pudo guardar la partida: {err}");
        }
    }
}

fn check_new_game(response: NewGameResponse) -> Result<NewGameResponse, ApiError> {
    if response.samples.is_empty() {
        return Err(ApiError::Malformed("la partida no trae muestras".into()));
    }
    let orders: BTreeSet<u32> = response.samples.iter().map(|s| s.order).collect();
    if orders.len() != response.samples.len() {
        return Err(ApiError::Malformed("orden de muestra repetido".into()));
    }
    Ok(response)
}

fn check_scores(samples: &[Sample], response: ScoreResponse) -> Result<ScoreResponse, ApiError> {
    let expected: BTreeSet<u32> = samples.iter().map(|s| s.order).collect();
    let received: BTreeSet<u32> = response.scores.iter().map(|s| s.order).collect();
    if response.scores.len() != samples.len() || expected != received {
        return Err(ApiError::Malformed(format!(
            "{} puntuaciones para {} muestras",
            response.scores.len(),
            samples.len()
        )));
    }
    Ok(response)
}
