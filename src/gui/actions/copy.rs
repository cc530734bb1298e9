// src/gui/actions/copy.rs
use eframe::egui;

use crate::{file, gui::app::App};

pub fn copy(app: &mut App, ctx: &egui::Context) {
    let msg = match app.session.results() {
        Some(table) if !table.is_empty() => match file::to_csv_string(table) {
            Ok(txt) => {
                logf!("Copy: rows={}", table.len());
                ctx.copy_text(txt);
                s!("Copied to clipboard")
            }
            Err(e) => {
                loge!("Copy: Error: {}", e);
                format!("Copy error: {e}")
            }
        },
        _ => {
            logd!("Copy: Clicked, but there's nothing to copy");
            s!("Nothing to copy")
        }
    };
    app.export_status = Some(msg);
}
