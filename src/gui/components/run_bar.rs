// src/gui/components/run_bar.rs
//
// Trigger button, progress bar and the status line.

use eframe::egui::{self, widgets::Spinner, Color32, ProgressBar, RichText};

use crate::{gui::{actions, app::App}, session::Phase};

const GREEN: Color32 = Color32::from_rgb(0x3C, 0xB3, 0x71);
const RED: Color32 = Color32::from_rgb(0xDC, 0x61, 0x49);

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal(|ui| {
        let button = ui.add_enabled(
            app.session.can_start(),
            egui::Button::new(RichText::new("Fetch Statistics").strong()),
        );
        if button.clicked() {
            let ctx = ui.ctx().clone();
            actions::fetch(app, &ctx);
        }

        if app.session.is_running() {
            ui.add(Spinner::new().size(16.0));
        }

        let status = RichText::new(app.session.status());
        let status = match app.session.phase() {
            Phase::Completed => status.color(GREEN),
            Phase::Failed(_) => status.color(RED),
            _ => status,
        };
        ui.label(status);
    });

    if matches!(app.session.phase(), Phase::Running | Phase::Completed) {
        ui.add(
            ProgressBar::new(app.session.progress())
                .show_percentage()
                .animate(app.session.is_running()),
        );
    }
}
