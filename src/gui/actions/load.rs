// src/gui/actions/load.rs
use std::path::PathBuf;

use eframe::egui;

use crate::gui::app::App;

/// Load the roster named in the input path field.
pub fn load(app: &mut App) {
    let text = app.state.gui.input_path_text.trim().to_string();
    if text.is_empty() {
        logd!("Load: Clicked with empty path");
        return;
    }
    let path = PathBuf::from(text);
    logf!("Load: Begin {}", path.display());

    // Session records the outcome (FileLoaded or Failed) for display
    let _ = app.session.load_path(&path);
    app.export_status = None;
}

/// Pick up a file dropped onto the window. First file wins.
pub fn load_dropped(app: &mut App, ctx: &egui::Context) {
    let dropped = ctx.input(|i| i.raw.dropped_files.clone());
    let Some(f) = dropped.into_iter().next() else { return };

    if app.session.is_running() {
        logd!("Load: Drop ignored while running");
        return;
    }

    if let Some(path) = f.path {
        app.state.gui.input_path_text = path.display().to_string();
        logf!("Load: Dropped {}", path.display());
        let _ = app.session.load_path(&path);
    } else if let Some(bytes) = f.bytes {
        let name = if f.name.is_empty() { s!("dropped file") } else { f.name };
        app.state.gui.input_path_text = name.clone();
        logf!("Load: Dropped bytes name={} len={}", name, bytes.len());
        let _ = app.session.load_bytes(&name, &bytes);
    } else {
        return;
    }
    app.export_status = None;
}
