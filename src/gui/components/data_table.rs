// src/gui/components/data_table.rs
//
// Preview of the collected results. Purely a view.

use eframe::egui::{self, Align, Layout, RichText};
use egui_extras::{Column, TableBuilder};

use crate::{data::ResultTable, gui::app::App, session::Phase};

// ROLL NUM, NAME, USERNAME are text; the rest are counts
const TEXT_COLS: usize = 3;

pub fn draw(ui: &mut egui::Ui, app: &App) {
    let Some(table) = app.session.results() else {
        let hint = match app.session.phase() {
            Phase::Running => "Collecting…",
            Phase::FileLoaded => "Ready. Click 'Fetch Statistics' to start.",
            _ => "No results yet.",
        };
        ui.weak(hint);
        return;
    };

    ui.label(RichText::new("Preview of Collected Data").strong());
    ui.label(format!(
        "{} row(s), {} with solved problems",
        table.len(),
        table.nonzero_count()
    ));

    let headers = ResultTable::headers();
    let avail_h = ui.available_height();

    egui::ScrollArea::horizontal()
        .id_salt("results_hscroll")
        .show(ui, |ui| {
            let mut builder = TableBuilder::new(ui)
                .striped(true)
                .min_scrolled_height(0.0)
                .max_scroll_height(avail_h);

            for ci in 0..table.ncols() {
                let col = if ci < TEXT_COLS {
                    Column::initial(160.0).resizable(true).clip(true).at_least(40.0)
                } else {
                    Column::initial(110.0).resizable(true).at_least(40.0)
                };
                builder = builder.column(col);
            }

            builder
                .header(24.0, |mut header| {
                    for (ci, h) in headers.iter().enumerate() {
                        header.col(|ui| {
                            let label = RichText::new(*h).strong();
                            if ci < TEXT_COLS {
                                ui.with_layout(Layout::left_to_right(Align::Center), |ui| { ui.label(label); });
                            } else {
                                ui.centered_and_justified(|ui| { ui.label(label); });
                            }
                        });
                    }
                })
                .body(|body| {
                    body.rows(20.0, table.len(), |mut row| {
                        let Some(data) = table.rows().get(row.index()) else { return };
                        for (ci, cell) in data.cells().into_iter().enumerate() {
                            row.col(|ui| {
                                if ci < TEXT_COLS {
                                    ui.with_layout(Layout::left_to_right(Align::Center), |ui| { ui.label(cell); });
                                } else {
                                    ui.centered_and_justified(|ui| { ui.label(cell); });
                                }
                            });
                        }
                    });
                });
        });
}
