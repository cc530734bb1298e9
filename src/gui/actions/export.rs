// src/gui/actions/export.rs
use crate::{file, gui::app::App};

/// Write the completed table into the output directory under the
/// timestamped name stamped at completion.
pub fn export(app: &mut App) {
    // normalize out dir first (mutates app) before any &app borrows
    if app.state.gui.out_dir_dirty {
        app.state.options.export.set_dir(&app.state.gui.out_dir_text);
        logf!("Export: Out dir set → {}", app.state.options.export.out_dir().display());
        app.state.gui.out_dir_dirty = false;
    }

    let status_msg = match (app.session.results(), app.session.export_name()) {
        (Some(table), Some(name)) if app.session.can_export() => {
            logf!("Export: Begin rows={} name={}", table.len(), name);
            match file::write_export(&app.state.options.export, name, table) {
                Ok(path) => format!("Saved {}", path.display()),
                Err(e) => {
                    loge!("Export: Error: {}", e);
                    format!("Export error: {e}")
                }
            }
        }
        _ => {
            logd!("Export: Clicked, but there's nothing to export");
            s!("Nothing to export")
        }
    };

    // mutate app only after the session borrows are gone
    app.export_status = Some(status_msg);
}
