// src/gui/components/upload_panel.rs
//
// Roster input: path field + Load, or drop a file anywhere on the window.

use eframe::egui;

use crate::gui::{actions, app::App};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let running = app.session.is_running();

    ui.label(egui::RichText::new("Upload student data CSV").strong());

    ui.horizontal(|ui| {
        ui.label("File:");
        let field = ui.add_enabled(
            !running,
            egui::TextEdit::singleline(&mut app.state.gui.input_path_text)
                .hint_text("path/to/students.csv")
                .font(egui::TextStyle::Monospace)
                .desired_width(420.0),
        );
        let submitted = field.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

        let load_clicked = ui.add_enabled(!running, egui::Button::new("Load")).clicked();
        if load_clicked || submitted {
            actions::load(app);
        }
    });

    ui.weak("…or drop a .csv file onto this window");

    if let (Some(name), Some(roster)) = (app.session.source_name(), app.session.roster()) {
        ui.label(format!(
            "Loaded {}: {} student(s), {} with a username",
            name,
            roster.len(),
            roster.with_username()
        ));
    }
}
