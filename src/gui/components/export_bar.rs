// src/gui/components/export_bar.rs

use eframe::egui;

use crate::gui::{actions, app::App};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    if !app.session.can_export() {
        return;
    }

    ui.horizontal(|ui| {
        ui.label("Output dir:");
        if ui
            .add(egui::TextEdit::singleline(&mut app.state.gui.out_dir_text)
                .font(egui::TextStyle::Monospace)
                .desired_width(260.0))
            .changed()
        {
            app.state.gui.out_dir_dirty = true;
            logd!("UI: out_dir_text changed (dirty=true) → {}", app.state.gui.out_dir_text);
        }
        if app.state.options.export.is_default() && !app.state.gui.out_dir_dirty {
            ui.weak("(default)");
        }

        let name = app.session.export_name().unwrap_or_default().to_string();
        if ui
            .button("📥 Download Statistics CSV")
            .on_hover_text(name)
            .clicked()
        {
            actions::export(app);
        }

        if ui.button("Copy").clicked() {
            let ctx = ui.ctx().clone();
            actions::copy(app, &ctx);
        }

        if let Some(msg) = &app.export_status {
            ui.label(msg);
        }
    });

    ui.separator();
}
