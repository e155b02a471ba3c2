use crate::app::EchoLingoApp;
use crate::audio::ClipState;
use crate::model::Sample;
use crate::ui::helpers::{big_button, muted};
use crate::ui::layout::scroll_panel;
use egui::{Button, Color32, ComboBox, Context, Frame, ProgressBar, RichText, Ui, Vec2};

const MAX_WIDTH: f32 = 640.0;
const NO_GUESS: &str = "Select a language";

pub fn ui_playing(app: &mut EchoLingoApp, ctx: &Context) {
    // Copia para no mantener prestado el store mientras se edita
    let samples: Vec<Sample> = app.store.samples().to_vec();

    scroll_panel(ctx, MAX_WIDTH, |ui| {
        ui.add_space(12.0);
        ui.heading("🎧 Which languages are these?");
        ui.add_space(12.0);

        for sample in &samples {
            sample_card(app, ui, sample);
            ui.add_space(10.0);
        }

        ui.add_space(8.0);
        let enabled = app.store.all_guessed() && !app.store.is_loading();
        let label = if app.store.is_loading() {
            "Submitting..."
        } else {
            "Submit Answers"
        };
        if big_button(ui, label, 220.0, 40.0, enabled) {
            app.submit_answers();
        }
        if !app.store.all_guessed() {
            ui.label(muted("Pick a language for every sample to submit."));
        }
        ui.add_space(12.0);
    });
}

fn sample_card(app: &mut EchoLingoApp, ui: &mut Ui, sample: &Sample) {
    Frame::group(ui.style())
        .inner_margin(egui::Margin::symmetric(12, 10))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(RichText::new(format!("Sample {}", sample.order)).strong());
            ui.horizontal(|ui| {
                let clip = app.audio.view(sample.order);
                let play = Button::new(RichText::new(clip.button_label()).size(18.0))
                    .min_size(Vec2::new(40.0, 40.0));
                if ui.add_enabled(clip.state != ClipState::Loading, play).clicked() {
                    app.toggle_audio(sample.order);
                }
                ui.add(
                    ProgressBar::new(clip.progress)
                        .desired_width((ui.available_width() - 36.0).max(60.0))
                        .animate(clip.state == ClipState::Loading),
                );
                ui.label("🔊");
            });
            if let Some(err) = app.audio.error_for(sample.order) {
                ui.label(RichText::new("Audio unavailable").color(Color32::from_rgb(220, 38, 38)))
                    .on_hover_text(err);
            }

            let mut selected = app.store.guess(sample.order).unwrap_or_default().to_string();
            let shown = if selected.is_empty() {
                NO_GUESS.to_string()
            } else {
                selected.clone()
            };
            ComboBox::from_id_salt(("guess", sample.order))
                .width(220.0)
                .selected_text(shown)
                .show_ui(ui, |ui| {
                    for language in &app.languages {
                        ui.selectable_value(&mut selected, language.clone(), language.as_str());
                    }
                });
            if app.store.guess(sample.order).unwrap_or_default() != selected {
                app.store.set_guess(sample.order, selected);
            }

            let revealed = app.is_revealed(sample.order);
            let toggle = if revealed { "Hide text" } else { "Reveal text" };
            if ui.small_button(toggle).clicked() {
                app.toggle_reveal(sample.order);
            }
            if revealed {
                ui.label(muted(format!("\"{}\"", sample.text)));
            }
        });
}
