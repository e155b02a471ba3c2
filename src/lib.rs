pub mod api;
pub mod app;
pub mod audio;
pub mod clock;
pub mod config;
pub mod error;
pub mod languages;
pub mod model;
pub mod refresh;
pub mod share;
pub mod storage;
pub mod store;
pub mod ui;
pub mod view_models;

pub use app::EchoLingoApp;
pub use store::GameStore;

/* Web */

#[cfg(target_arch = "wasm32")]
mod web {
    use crate::EchoLingoApp;
    use crate::config::AppConfig;
    use wasm_bindgen::JsCast;
    use wasm_bindgen::prelude::*;
    use web_sys::HtmlCanvasElement;

    pub const CANVAS_ID: &str = "echolingo_canvas";

    #[wasm_bindgen(start)]
    pub fn start() {
        console_error_panic_hook::set_once();
        let _ = console_log::init_with_level(log::Level::Info);
        wasm_bindgen_futures::spawn_local(async {
            if let Err(err) = run().await {
                log::error!("no se pudo arrancar la app: {err:?}");
            }
        });
    }

    async fn run() -> Result<(), JsValue> {
        let canvas = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(CANVAS_ID))
            .ok_or_else(|| JsValue::from_str("canvas no encontrado"))?
            .dyn_into::<HtmlCanvasElement>()?;

        let config = AppConfig::from_env();
        eframe::WebRunner::new()
            .start(
                canvas,
                eframe::WebOptions::default(),
                Box::new(move |cc| Ok(Box::new(EchoLingoApp::new(cc, config)?))),
            )
            .await
    }
}
