mod helpers;
pub mod layout;
pub mod views;

use crate::app::EchoLingoApp;
use crate::model::GameStatus;
use eframe::{APP_KEY, App, Frame, set_value};
use egui::Context;
use layout::{bottom_panel, top_panel};
use std::time::Duration;

impl App for EchoLingoApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        // Respuestas de la API que hayan llegado desde el último frame
        if self.store.poll() {
            ctx.request_repaint();
        }
        let audio_active = self.tick_audio();
        if self.store.is_loading() || audio_active {
            ctx.request_repaint_after(Duration::from_millis(100));
        }

        top_panel(ctx);

        // PANEL INFERIOR TEMA OSCURO O CLARO
        bottom_panel(self, ctx);

        // Un error tapa cualquier otra vista
        if self.store.error().is_some() {
            views::error::ui_error(self, ctx);
            return;
        }

        match self.store.status() {
            GameStatus::Welcome => views::welcome::ui_welcome(self, ctx),
            GameStatus::Playing => views::playing::ui_playing(self, ctx),
            GameStatus::Results => views::results::ui_results(self, ctx),
        }
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        set_value(storage, APP_KEY, &self.prefs);
    }
}
