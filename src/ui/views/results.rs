use crate::app::EchoLingoApp;
use crate::ui::helpers::{big_button, muted, score_color};
use crate::ui::layout::scroll_panel;
use crate::view_models::score_rows;
use egui::{Color32, Context, Grid, RichText};

const MAX_WIDTH: f32 = 640.0;

pub fn ui_results(app: &mut EchoLingoApp, ctx: &Context) {
    let rows = app.store.scores().map(score_rows).unwrap_or_default();
    let total = app.store.total_score();
    let max = app.store.max_score();
    let refresh_hour = app.store.options().refresh_hour;

    scroll_panel(ctx, MAX_WIDTH, |ui| {
        ui.add_space(12.0);
        ui.heading("🏆 Your Results");
        ui.add_space(8.0);

        if let Some(total) = total {
            ui.label(
                RichText::new(format!("{total}/{max}"))
                    .size(36.0)
                    .strong()
                    .color(Color32::from_rgb(79, 70, 229)),
            );
        }

        // Partida ya jugada sin detalle guardado
        if rows.is_empty() {
            ui.add_space(8.0);
            ui.label("You have already played today's challenge.");
            ui.label(muted(format!(
                "A new one is available every day at {refresh_hour:02}:00."
            )));
        } else {
            ui.add_space(12.0);
            Grid::new("score_grid")
                .striped(true)
                .num_columns(4)
                .spacing([18.0, 6.0])
                .show(ui, |ui| {
                    ui.strong("Sample");
                    ui.strong("Score");
                    ui.strong("Your guess");
                    ui.strong("Correct");
                    ui.end_row();

                    for row in &rows {
                        ui.label(row.label());
                        ui.label(
                            RichText::new(format!("{}%", row.score)).color(score_color(row.score)),
                        );
                        ui.label(row.guessed.as_str());
                        if row.is_correct() {
                            ui.label(RichText::new(row.correct.as_str()).strong());
                        } else {
                            ui.label(row.correct.as_str());
                        }
                        ui.end_row();
                    }
                });
        }

        ui.add_space(16.0);
        ui.horizontal(|ui| {
            // centra la fila de dos botones
            ui.add_space(((ui.available_width() - 340.0) / 2.0).max(0.0));
            if big_button(ui, "📋 Share Results", 160.0, 36.0, !rows.is_empty()) {
                app.share_results(ctx);
            }
            if big_button(ui, "🔄 Play Again", 160.0, 36.0, true) {
                app.play_again();
            }
        });

        if !app.message.is_empty() {
            ui.add_space(6.0);
            ui.label(muted(app.message.as_str()));
        }
        ui.add_space(12.0);
    });
}
