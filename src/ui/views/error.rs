use crate::app::EchoLingoApp;
use crate::ui::helpers::big_button;
use crate::ui::layout::centered_panel;
use egui::{Color32, Context, RichText};

pub fn ui_error(app: &mut EchoLingoApp, ctx: &Context) {
    let message = app.store.error().unwrap_or_default().to_string();
    centered_panel(ctx, 160.0, 480.0, |ui| {
        ui.vertical_centered(|ui| {
            ui.label(
                RichText::new(format!("⚠ {message}"))
                    .color(Color32::from_rgb(220, 38, 38))
                    .strong(),
            );
            ui.add_space(14.0);
            if big_button(ui, "Try Again", 160.0, 36.0, true) {
                app.play_again();
            }
        });
    });
}
