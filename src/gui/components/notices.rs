// src/gui/components/notices.rs
//
// Per-row warnings and inline errors from the current run.

use eframe::egui::{self, Color32};

use crate::{gui::app::App, session::Notice};

const WARN: Color32 = Color32::from_rgb(0xF0, 0xD2, 0x3C);
const ERROR: Color32 = Color32::from_rgb(0xDC, 0x61, 0x49);

pub fn draw(ui: &mut egui::Ui, app: &App) {
    let notices = app.session.notices();
    if notices.is_empty() {
        return;
    }

    let title = format!("Messages ({})", notices.len());
    egui::CollapsingHeader::new(title)
        .id_salt("notices")
        .default_open(true)
        .show(ui, |ui| {
            egui::ScrollArea::vertical()
                .id_salt("notices_scroll")
                .max_height(140.0)
                .stick_to_bottom(true)
                .show(ui, |ui| {
                    for n in notices {
                        match n {
                            Notice::Warning(msg) => ui.colored_label(WARN, format!("⚠ {msg}")),
                            Notice::Error(msg) => ui.colored_label(ERROR, format!("✖ {msg}")),
                        };
                    }
                });
        });
}
