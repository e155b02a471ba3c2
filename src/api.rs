//! Cliente de la API del juego: `GET /game/new` y `POST /game/score`.
//!
//! Las peticiones nunca bloquean el hilo de la UI. En nativo se lanzan en un
//! hilo con `reqwest::blocking`; en web con `fetch` vía `spawn_local`. El
//! resultado se entrega al callback `reply`.

use crate::config::AppConfig;
use crate::error::ApiError;
use crate::model::{LanguageGuess, NewGameResponse, ScoreResponse};
#[cfg(not(target_arch = "wasm32"))]
use crate::model::ScoreRequest;
use serde::de::DeserializeOwned;

pub const NEW_GAME_PATH: &str = "/game/new";
pub const SCORE_PATH: &str = "/game/score";

pub type Reply<T> = Box<dyn FnOnce(Result<T, ApiError>) + Send + 'static>;

pub trait GameApi {
    fn fetch_new_game(&self, reply: Reply<NewGameResponse>);
    fn submit_scores(&self, guesses: Vec<LanguageGuess>, reply: Reply<ScoreResponse>);
}

/// Une base y ruta sin duplicar ni perder barras.
pub fn endpoint(base: &str, path: &str) -> String {
    let base = base.trim().trim_end_matches('/');
    let path = path.trim().trim_start_matches('/');
    format!("{base}/{path}")
}

fn decode_body<T: DeserializeOwned>(url: &str, status: u16, body: &str) -> Result<T, ApiError> {
    if !(200..300).contains(&status) {
        return Err(ApiError::Status {
            status,
            url: url.to_string(),
            body: body.trim().to_string(),
        });
    }

    serde_json::from_str(body).map_err(|err| ApiError::Malformed(format!("{url}: {err}")))
}

pub struct HttpGameApi {
    base_url: String,
    #[cfg(not(target_arch = "wasm32"))]
    client: reqwest::blocking::Client,
}

impl HttpGameApi {
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

/* Nativo */

#[cfg(not(target_arch = "wasm32"))]
impl HttpGameApi {
    pub fn new(config: &AppConfig) -> Result<Self, ApiError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(config.request_timeout)
            .user_agent(concat!("EchoLingo/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|err| ApiError::Network(format!("no se pudo crear el cliente HTTP: {err}")))?;

        Ok(Self {
            base_url: config.api_base_url.clone(),
            client,
        })
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn read_json<T: DeserializeOwned>(
    url: &str,
    sent: reqwest::Result<reqwest::blocking::Response>,
) -> Result<T, ApiError> {
    let response = sent.map_err(|err| ApiError::Network(format!("{url}: {err}")))?;
    let status = response.status().as_u16();
    let body = response
        .text()
        .map_err(|err| ApiError::Network(format!("no se pudo leer el body de {url}: {err}")))?;
    decode_body(url, status, &body)
}

#[cfg(not(target_arch = "wasm32"))]
impl GameApi for HttpGameApi {
    fn fetch_new_game(&self, reply: Reply<NewGameResponse>) {
        let client = self.client.clone();
        let url = endpoint(&self.base_url, NEW_GAME_PATH);

        std::thread::spawn(move || {
            let result = read_json(&url, client.get(&url).send());
            reply(result);
        });
    }

    fn submit_scores(&self, guesses: Vec<LanguageGuess>, reply: Reply<ScoreResponse>) {
        let client = self.client.clone();
        let url = endpoint(&self.base_url, SCORE_PATH);

        std::thread::spawn(move || {
            let payload = ScoreRequest { guesses };
            let result = read_json(&url, client.post(&url).json(&payload).send());
            reply(result);
        });
    }
}

/* Web */

#[cfg(target_arch = "wasm32")]
impl HttpGameApi {
    pub fn new(config: &AppConfig) -> Result<Self, ApiError> {
        Ok(Self {
            base_url: config.api_base_url.clone(),
        })
    }
}

#[cfg(target_arch = "wasm32")]
async fn fetch_json<T: DeserializeOwned>(url: &str, body: Option<String>) -> Result<T, ApiError> {
    use wasm_bindgen::{JsCast, JsValue};
    use wasm_bindgen_futures::JsFuture;
    use web_sys::{Request, RequestInit, RequestMode, Response};

    let opts = RequestInit::new();
    opts.set_mode(RequestMode::Cors);
    match &body {
        Some(json) => {
            opts.set_method("POST");
            opts.set_body(&JsValue::from_str(json));
        }
        None => opts.set_method("GET"),
    }

    let request = Request::new_with_str_and_init(url, &opts)
        .map_err(|err| ApiError::Network(format!("no se pudo crear la petición: {err:?}")))?;
    if body.is_some() {
        request
            .headers()
            .set("Content-Type", "application/json")
            .map_err(|err| ApiError::Network(format!("no se pudieron asignar headers: {err:?}")))?;
    }

    let window = web_sys::window().ok_or_else(|| ApiError::Network("no existe window".into()))?;
    let value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|err| ApiError::Network(format!("{url}: {err:?}")))?;
    let response: Response = value
        .dyn_into()
        .map_err(|_| ApiError::Malformed("fetch no devolvió un Response".into()))?;

    let text_promise = response
        .text()
        .map_err(|err| ApiError::Network(format!("no se pudo leer el body de {url}: {err:?}")))?;
    let text = JsFuture::from(text_promise)
        .await
        .map_err(|err| ApiError::Network(format!("no se pudo leer el body de {url}: {err:?}")))?
        .as_string()
        .ok_or_else(|| ApiError::Malformed(format!("{url}: el body no es texto")))?;

    decode_body(url, response.status(), &text)
}

#[cfg(target_arch = "wasm32")]
impl GameApi for HttpGameApi {
    fn fetch_new_game(&self, reply: Reply<NewGameResponse>) {
        let url = endpoint(&self.base_url, NEW_GAME_PATH);
        wasm_bindgen_futures::spawn_local(async move {
            reply(fetch_json(&url, None).await);
        });
    }

    fn submit_scores(&self, guesses: Vec<LanguageGuess>, reply: Reply<ScoreResponse>) {
        let url = endpoint(&self.base_url, SCORE_PATH);
        let payload = match serde_json::to_string(&crate::model::ScoreRequest { guesses }) {
            Ok(json) => json,
            Err(err) => {
                reply(Err(ApiError::Malformed(format!("no se pudo serializar la petición: {err}"))));
                return;
            }
        };
        wasm_bindgen_futures::spawn_local(async move {
            reply(fetch_json(&url, Some(payload)).await);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_joins_without_double_slash() {
        assert_eq!(
            endpoint("https://language-guesser-25.onrender.com/", NEW_GAME_PATH),
            "https://language-guesser-25.onrender.com/game/new"
        );
        assert_eq!(endpoint("http://127.0.0.1:8000", "game/score"), "http://127.0.0.1:8000/game/score");
        assert_eq!(endpoint(" /api// ", SCORE_PATH), "/api/game/score");
    }

    #[test]
    fn decode_body_parses_success() {
        let body = r#"{"samples":[{"language":"Greek","audio_url":"u","text":"t","order":1}],"message":"ok"}"#;
        let parsed: NewGameResponse = decode_body("u", 200, body).unwrap();
        assert_eq!(parsed.samples.len(), 1);
        assert_eq!(parsed.message, "ok");
    }

    #[test]
    fn decode_body_reports_http_status() {
        let err = decode_body::<ScoreResponse>("http://x/game/score", 503, " busy ").unwrap_err();
        match err {
            ApiError::Status { status, url, body } => {
                assert_eq!(status, 503);
                assert_eq!(url, "http://x/game/score");
                assert_eq!(body, "busy");
            }
            other => panic!("esperaba Status, llegó {other:?}"),
        }
    }

    #[test]
    fn decode_body_flags_malformed_json() {
        let err = decode_body::<ScoreResponse>("u", 200, "{\"scores\": 3}").unwrap_err();
        assert_eq!(err.kind(), "malformed");
    }

    #[test]
    fn score_response_tolerates_missing_message() {
        let body = r#"{"scores":[{"order":1,"score":70,"correct_language":"Dutch","guessed_language":"German"}],"total_score":70}"#;
        let parsed: ScoreResponse = decode_body("u", 200, body).unwrap();
        assert_eq!(parsed.total_score, 70);
        assert!(parsed.message.is_empty());
    }
}
