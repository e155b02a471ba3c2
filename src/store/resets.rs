use super::*;

impl GameStore {
    /// Vuelve a la bienvenida. No toca lo guardado: el próximo `start_game`
    /// vuelve a consultar la regla diaria. Lo que esté en vuelo se descarta.
    pub fn reset_game(&mut self) {
        self.next_generation();
        self.guesses.clear();
        self.scores = None;
        self.total_score = None;
        self.error = None;
        self.is_loading = false;
        self.status = GameStatus::Welcome;
    }
}
