use crate::app::EchoLingoApp;
use crate::ui::helpers::big_button;
use crate::ui::layout::centered_panel;
use egui::Context;

pub fn ui_welcome(app: &mut EchoLingoApp, ctx: &Context) {
    centered_panel(ctx, 220.0, 520.0, |ui| {
        ui.vertical_centered(|ui| {
            ui.heading("Welcome to Today's Challenge!");
            ui.add_space(10.0);
            ui.label(
                "Listen to 5 audio samples and guess their languages. \
                 How many can you get right?",
            );
            ui.add_space(18.0);

            let loading = app.store.is_loading();
            let label = if loading { "Loading..." } else { "▶ Start Game" };
            if big_button(ui, label, 220.0, 40.0, !loading) {
                app.start_game();
            }
        });
    });
}
