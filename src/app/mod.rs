use crate::api::HttpGameApi;
use crate::audio::{AudioBackend, AudioPlayer};
use crate::clock::SystemClock;
use crate::config::AppConfig;
use crate::error::ApiError;
use crate::languages::language_catalog;
use crate::storage::GameRepository;
use crate::store::GameStore;
use eframe::egui;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

// Submódulos
pub mod actions;

/// Preferencias de la UI. Se guardan con la persistencia de eframe,
/// aparte de la partida.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct UiPrefs {
    pub dark_mode: bool,
}

impl Default for UiPrefs {
    fn default() -> Self {
        Self { dark_mode: true }
    }
}

impl UiPrefs {
    pub fn visuals(&self) -> egui::Visuals {
        if self.dark_mode {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        }
    }
}

pub struct EchoLingoApp {
    pub store: GameStore,
    pub audio: AudioPlayer,
    pub prefs: UiPrefs,
    pub languages: Vec<String>,
    /// Muestras con el texto visible
    pub revealed: BTreeSet<u32>,
    pub message: String,
}

impl EchoLingoApp {
    pub fn new(cc: &eframe::CreationContext<'_>, config: AppConfig) -> Result<Self, ApiError> {
        let prefs: UiPrefs = cc
            .storage
            .and_then(|storage| eframe::get_value(storage, eframe::APP_KEY))
            .unwrap_or_default();
        cc.egui_ctx.set_visuals(prefs.visuals());

        let api = HttpGameApi::new(&config)?;
        log::info!("API en {}", api.base_url());
        let store = GameStore::new(
            Box::new(api),
            repository(&config),
            Box::new(SystemClock),
            config.store_options(),
        );
        let audio = AudioPlayer::new(audio_backend(&config));
        Ok(Self::with_store(store, audio, prefs))
    }

    pub fn with_store(store: GameStore, audio: AudioPlayer, prefs: UiPrefs) -> Self {
        Self {
            store,
            audio,
            prefs,
            languages: language_catalog(),
            revealed: BTreeSet::new(),
            message: String::new(),
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn repository(config: &AppConfig) -> Box<dyn GameRepository> {
    use crate::storage::FileRepository;

    let repo = FileRepository::new(&config.data_file);
    log::info!("partida guardada en {}", repo.path().display());
    Box::new(repo)
}

#[cfg(target_arch = "wasm32")]
fn repository(_config: &AppConfig) -> Box<dyn GameRepository> {
    use crate::storage::LocalStorageRepository;

    Box::new(LocalStorageRepository::default())
}

#[cfg(not(target_arch = "wasm32"))]
fn audio_backend(config: &AppConfig) -> Box<dyn AudioBackend> {
    Box::new(crate::audio::RodioBackend::new(config.request_timeout))
}

#[cfg(target_arch = "wasm32")]
fn audio_backend(_config: &AppConfig) -> Box<dyn AudioBackend> {
    Box::new(crate::audio::HtmlAudioBackend::default())
}
