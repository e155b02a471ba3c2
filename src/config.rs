use crate::refresh::DEFAULT_REFRESH_HOUR;
use crate::store::StoreOptions;
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_API_BASE_URL: &str = "https://language-guesser-25.onrender.com";
pub const DEFAULT_DATA_FILE: &str = "echolingo_game.json";
pub const DEFAULT_TIMEOUT_SECS: u64 = 20;
pub const SHARE_URL: &str = "https://splendid-salamander-7089cc.netlify.app/";

pub const API_URL_VAR: &str = "ECHOLINGO_API_URL";
pub const DATA_FILE_VAR: &str = "ECHOLINGO_DATA_FILE";
pub const REFRESH_HOUR_VAR: &str = "ECHOLINGO_REFRESH_HOUR";
pub const RESUME_SCORES_VAR: &str = "ECHOLINGO_RESUME_SCORES";
pub const TIMEOUT_VAR: &str = "ECHOLINGO_TIMEOUT_SECS";

/// Qué hacer con las puntuaciones al retomar una partida ya jugada.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ResumeScores {
    /// Mostrar otra vez la última puntuación guardada de esa partida.
    #[default]
    Restore,
    /// Entrar en resultados sin puntuaciones.
    Discard,
}

impl ResumeScores {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "restore" => Some(ResumeScores::Restore),
            "discard" => Some(ResumeScores::Discard),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    pub api_base_url: String,
    pub data_file: PathBuf,
    pub refresh_hour: u32,
    pub resume_scores: ResumeScores,
    pub request_timeout: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            refresh_hour: DEFAULT_REFRESH_HOUR,
            resume_scores: ResumeScores::default(),
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl AppConfig {
    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// En web solo la URL de la API, fijada al compilar.
    #[cfg(target_arch = "wasm32")]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| match key {
            API_URL_VAR => option_env!("ECHOLINGO_API_URL").map(str::to_string),
            _ => None,
        })
    }

    /// Construye la configuración a partir de una función de búsqueda de
    /// variables. Los valores vacíos o inválidos caen al valor por defecto.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(url) = get(API_URL_VAR) {
            config.api_base_url = url.trim().to_string();
        }

        if let Some(path) = get(DATA_FILE_VAR) {
            config.data_file = PathBuf::from(path.trim());
        }

        if let Some(raw) = get(REFRESH_HOUR_VAR) {
            match raw.trim().parse::<u32>() {
                Ok(hour) if hour < 24 => config.refresh_hour = hour,
                _ => log::warn!("{REFRESH_HOUR_VAR}={raw:?} no es una hora válida (0-23)"),
            }
        }

        if let Some(raw) = get(RESUME_SCORES_VAR) {
            match ResumeScores::parse(&raw) {
                Some(policy) => config.resume_scores = policy,
                None => log::warn!("{RESUME_SCORES_VAR}={raw:?} debe ser restore o discard"),
            }
        }

        if let Some(raw) = get(TIMEOUT_VAR) {
            match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => config.request_timeout = Duration::from_secs(secs),
                _ => log::warn!("{TIMEOUT_VAR}={raw:?} no es un número de segundos válido"),
            }
        }

        config
    }

    pub fn store_options(&self) -> StoreOptions {
        StoreOptions {
            refresh_hour: self.refresh_hour,
            resume_scores: self.resume_scores,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn empty_environment_gives_defaults() {
        let config = AppConfig::from_lookup(|_| None);
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.refresh_hour, 8);
        assert_eq!(config.resume_scores, ResumeScores::Restore);
    }

    #[test]
    fn reads_every_variable() {
        let config = AppConfig::from_lookup(lookup_from(&[
            (API_URL_VAR, " http://127.0.0.1:9000 "),
            (DATA_FILE_VAR, "/tmp/echo.json"),
            (REFRESH_HOUR_VAR, "6"),
            (RESUME_SCORES_VAR, "Discard"),
            (TIMEOUT_VAR, "3"),
        ]));

        assert_eq!(config.api_base_url, "http://127.0.0.1:9000");
        assert_eq!(config.data_file, PathBuf::from("/tmp/echo.json"));
        assert_eq!(config.refresh_hour, 6);
        assert_eq!(config.resume_scores, ResumeScores::Discard);
        assert_eq!(config.request_timeout, Duration::from_secs(3));
    }

    #[test]
    fn invalid_values_fall_back_to_defaults() {
        let config = AppConfig::from_lookup(lookup_from(&[
            (API_URL_VAR, "   "),
            (REFRESH_HOUR_VAR, "24"),
            (RESUME_SCORES_VAR, "sometimes"),
            (TIMEOUT_VAR, "0"),
        ]));

        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn store_options_follow_config() {
        let config = AppConfig {
            refresh_hour: 5,
            resume_scores: ResumeScores::Discard,
            ..AppConfig::default()
        };
        let options = config.store_options();

        assert_eq!(options.refresh_hour, 5);
        assert_eq!(options.resume_scores, ResumeScores::Discard);
    }
}
