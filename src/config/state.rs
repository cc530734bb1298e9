// src/config/state.rs
use super::options::AppOptions;

#[derive(Clone, Debug)]
pub struct GuiState {
    pub window_w: u32,
    pub window_h: u32,

    /// Roster path as typed (or dropped) by the user
    pub input_path_text: String,

    /// Output dir text field; mapped into ExportOptions on export
    pub out_dir_text: String,
    pub out_dir_dirty: bool,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            window_w: 1100,
            window_h: 720,
            input_path_text: s!(),
            out_dir_text: s!(crate::config::consts::DEFAULT_OUT_DIR),
            out_dir_dirty: false,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub options: AppOptions,
    pub gui: GuiState,
}
