use super::*;
use crate::model::LanguageGuess;

impl GameStore {
    pub fn set_guess(&mut self, order: u32, language: impl Into<String>) {
        self.guesses.insert(order, language.into());
    }

    /// Retoma la partida guardada si sigue vigente; si no, pide la del día.
    pub fn start_game(&mut self) {
        if self.is_loading {
            log::warn!("start_game ignorado: ya hay una petición en curso");
            return;
        }
        self.is_loading = true;
        self.error = None;

        let refresh_hour = self.options.refresh_hour;
        match self.repo.load() {
            Some(record) if !self.clock.should_fetch_new_game(Some(&record), refresh_hour) => {
                self.resume_cached(record);
                self.is_loading = false;
            }
            _ => self.request_new_game(),
        }
    }

    fn request_new_game(&mut self) {
        let generation = self.next_generation();
        let tx = self.tx.clone();
        log::info!("pidiendo partida nueva (generación {generation})");

        self.api.fetch_new_game(Box::new(move |result| {
            let _ = tx.send(Completion::NewGame { generation, result });
        }));
    }

    /// Una respuesta por muestra; las que faltan van como cadena vacía.
    pub fn guess_payload(&self) -> Vec<LanguageGuess> {
        self.samples
            .iter()
            .map(|sample| LanguageGuess {
                order: sample.order,
                correct_language: sample.language.clone(),
                guessed_language: self.guess(sample.order).unwrap_or_default().to_string(),
            })
            .collect()
    }

    /// Envía las respuestas a puntuar. No comprueba que estén todas: de eso
    /// se encarga la UI deshabilitando el botón.
    pub fn submit_guesses(&mut self) {
        if self.is_loading {
            log::warn!("submit_guesses ignorado: ya hay una petición en curso");
            return;
        }
        let guesses = self.guess_payload();
        self.is_loading = true;
        self.error = None;

        let generation = self.next_generation();
        let tx = self.tx.clone();
        log::info!("enviando {} respuestas (generación {generation})", guesses.len());

        self.api.submit_scores(
            guesses,
            Box::new(move |result| {
                let _ = tx.send(Completion::Scored { generation, result });
            }),
        );
    }
}
