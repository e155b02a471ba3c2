use super::EchoLingoApp;
use crate::config::SHARE_URL;
use crate::model::GameStatus;
use crate::share::share_text;
use chrono::Local;
use eframe::egui::Context;

pub const COPIED_MESSAGE: &str = "Text copied to clipboard!";

impl EchoLingoApp {
    /// Limpia lo local de la vista y arranca (o retoma) la partida.
    pub fn start_game(&mut self) {
        self.audio.stop();
        self.message.clear();
        self.revealed.clear();
        self.store.start_game();
    }

    pub fn submit_answers(&mut self) {
        self.audio.stop();
        self.message.clear();
        self.store.submit_guesses();
    }

    pub fn play_again(&mut self) {
        self.audio.stop();
        self.message.clear();
        self.revealed.clear();
        self.store.reset_game();
    }

    /// Play/pausa del audio de la muestra `order`.
    pub fn toggle_audio(&mut self, order: u32) {
        let Some(url) = self
            .store
            .samples()
            .iter()
            .find(|s| s.order == order)
            .map(|s| s.audio_url.clone())
        else {
            return;
        };
        self.audio.toggle(order, &url);
    }

    /// Una vez por frame. Fuera de la partida no suena nada; devuelve `true`
    /// mientras haya audio cargando o sonando.
    pub fn tick_audio(&mut self) -> bool {
        if self.store.status() != GameStatus::Playing || self.store.error().is_some() {
            self.audio.stop();
            return false;
        }
        self.audio.tick()
    }

    pub fn toggle_reveal(&mut self, order: u32) {
        if !self.revealed.remove(&order) {
            self.revealed.insert(order);
        }
    }

    pub fn is_revealed(&self, order: u32) -> bool {
        self.revealed.contains(&order)
    }

    pub fn set_dark_mode(&mut self, ctx: &Context, dark_mode: bool) {
        self.prefs.dark_mode = dark_mode;
        ctx.set_visuals(self.prefs.visuals());
    }

    /// Sin puntuaciones por muestra no hay nada que compartir.
    pub fn share_payload(&self) -> Option<String> {
        let scores = self.store.scores()?;
        let total = self.store.total_score()?;
        Some(share_text(
            scores,
            total,
            self.store.max_score(),
            Local::now().date_naive(),
            SHARE_URL,
        ))
    }

    pub fn share_results(&mut self, ctx: &Context) {
        if let Some(text) = self.share_payload() {
            ctx.copy_text(text);
            self.message = COPIED_MESSAGE.to_string();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{GameApi, Reply};
    use crate::app::UiPrefs;
    use crate::audio::AudioPlayer;
    use crate::audio::fake::FakeBackend;
    use crate::clock::SystemClock;
    use crate::model::{LanguageGuess, NewGameResponse, ScoreResponse};
    use crate::storage::MemoryRepository;
    use crate::store::{GameStore, StoreOptions};

    /// API que nunca contesta
    struct SilentApi;

    impl GameApi for SilentApi {
        fn fetch_new_game(&self, _reply: Reply<NewGameResponse>) {}
        fn submit_scores(&self, _guesses: Vec<LanguageGuess>, _reply: Reply<ScoreResponse>) {}
    }

    fn app() -> EchoLingoApp {
        app_with_audio(FakeBackend::default())
    }

    fn app_with_audio(audio: FakeBackend) -> EchoLingoApp {
        let store = GameStore::new(
            Box::new(SilentApi),
            Box::new(MemoryRepository::default()),
            Box::new(SystemClock),
            StoreOptions::default(),
        );
        EchoLingoApp::with_store(store, AudioPlayer::new(Box::new(audio)), UiPrefs::default())
    }

    #[test]
    fn reveal_toggles_per_sample() {
        let mut app = app();
        app.toggle_reveal(2);
        assert!(app.is_revealed(2));
        assert!(!app.is_revealed(1));
        app.toggle_reveal(2);
        assert!(!app.is_revealed(2));
    }

    #[test]
    fn nothing_to_share_without_scores() {
        assert_eq!(app().share_payload(), None);
    }

    #[test]
    fn play_again_clears_view_state() {
        let mut app = app();
        app.toggle_reveal(1);
        app.message = COPIED_MESSAGE.to_string();

        app.play_again();

        assert!(app.revealed.is_empty());
        assert!(app.message.is_empty());
        assert!(!app.store.is_loading());
    }

    #[test]
    fn catalog_is_loaded_on_startup() {
        assert!(!app().languages.is_empty());
    }

    #[test]
    fn prefs_default_to_dark() {
        assert!(UiPrefs::default().dark_mode);
        assert!(UiPrefs::default().visuals().dark_mode);
    }

    #[test]
    fn audio_stops_outside_the_game() {
        let audio = FakeBackend::default();
        let mut app = app_with_audio(audio.clone());
        app.audio.toggle(1, "https://cdn.example/1.mp3");
        assert!(app.audio.is_active());

        // la tienda sigue en bienvenida
        assert!(!app.tick_audio());

        assert!(!app.audio.is_active());
        assert!(audio.0.borrow().stops >= 2);
    }

    #[test]
    fn toggle_audio_ignores_unknown_sample() {
        let audio = FakeBackend::default();
        let mut app = app_with_audio(audio.clone());

        app.toggle_audio(7);

        assert!(audio.0.borrow().started.is_empty());
        assert!(!app.audio.is_active());
    }

    #[test]
    fn play_again_silences_audio() {
        let mut app = app();
        app.audio.toggle(2, "u2");

        app.play_again();

        assert!(!app.audio.is_active());
    }
}
