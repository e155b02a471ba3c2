#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result<()> {
    use echolingo::EchoLingoApp;
    use echolingo::config::AppConfig;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = AppConfig::from_env();
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("EchoLingo")
            .with_inner_size([720.0, 820.0])
            .with_min_inner_size([420.0, 520.0]),
        ..Default::default()
    };
    eframe::run_native(
        "EchoLingo",
        options,
        Box::new(move |cc| Ok(Box::new(EchoLingoApp::new(cc, config)?))),
    )
}

// En web el arranque lo hace `#[wasm_bindgen(start)]` de la librería
#[cfg(target_arch = "wasm32")]
fn main() {}
