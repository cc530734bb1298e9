// src/gui/components/instructions.rs
use eframe::egui;

use crate::config::consts::{COL_NAME, COL_ROLL, COL_USERNAME};

pub fn draw(ui: &mut egui::Ui) {
    egui::CollapsingHeader::new("📋 Instructions")
        .id_salt("instructions")
        .show(ui, |ui| {
            ui.label("1. Upload a CSV file containing student data with columns:");
            for col in [COL_ROLL, COL_NAME, COL_USERNAME] {
                ui.monospace(format!("     - {col}"));
            }
            ui.label("2. Click 'Fetch Statistics' to collect data");
            ui.label("3. Wait for the process to complete");
            ui.label("4. Download the resulting CSV file");
        });
}
