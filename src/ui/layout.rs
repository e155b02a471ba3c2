use crate::app::EchoLingoApp;
use egui::{CentralPanel, Context, Frame, RichText, Ui};

pub fn top_panel(ctx: &Context) {
    egui::TopBottomPanel::top("title_panel").show(ctx, |ui| {
        ui.vertical_centered(|ui| {
            ui.add_space(6.0);
            ui.heading(RichText::new("🌐 EchoLingo").strong());
            ui.label("Guess the language of today's audio samples");
            ui.add_space(6.0);
        });
    });
}

pub fn bottom_panel(app: &mut EchoLingoApp, ctx: &Context) {
    egui::TopBottomPanel::bottom("bottom_panel").show(ctx, |ui| {
        // ----------- BOTONES DE TEMA -----------
        ui.with_layout(
            egui::Layout::right_to_left(egui::Align::Center),
            |ui| {
                if ui
                    .selectable_label(app.prefs.dark_mode, "🌙 Dark mode")
                    .clicked()
                {
                    app.set_dark_mode(ctx, true);
                }
                if ui
                    .selectable_label(!app.prefs.dark_mode, "☀ Light mode")
                    .clicked()
                {
                    app.set_dark_mode(ctx, false);
                }
            },
        );
    });
}

/// Panel centrado tanto vertical como horizontalmente,
/// con un tamaño de contenido máximo y un bloque interior `inner`.
pub fn centered_panel(
    ctx: &Context,
    est_height: f32,
    max_width: f32,
    inner: impl FnOnce(&mut Ui),
) {
    CentralPanel::default().show(ctx, |ui| {
        // Espacio vertical para centrar
        let extra = ((ui.available_height() - est_height) / 2.0).max(0.0);
        ui.add_space(extra);
        ui.vertical_centered(|ui| {
            Frame::default()
                .fill(ui.visuals().window_fill())
                .inner_margin(egui::Margin::symmetric(16, 16))
                .show(ui, |ui| {
                    let w = ui.available_width().min(max_width);
                    ui.set_width(w);
                    inner(ui);
                });
        });
        ui.add_space(extra);
    });
}

/// Panel con scroll vertical y ancho máximo, para listas largas.
pub fn scroll_panel(ctx: &Context, max_width: f32, inner: impl FnOnce(&mut Ui)) {
    CentralPanel::default().show(ctx, |ui| {
        egui::ScrollArea::vertical()
            .auto_shrink([false; 2])
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    let w = ui.available_width().min(max_width);
                    ui.set_max_width(w);
                    inner(ui);
                });
            });
    });
}
