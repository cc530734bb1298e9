// src/bin/gui.rs
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]
use eframe::egui::{IconData, ViewportBuilder};
use image::{Rgba, RgbaImage};
use lc_stats::{config::state::GuiState, gui};

const ICON_SIZE: u32 = 64;

/// Orange disc with three bars (easy/medium/hard), drawn at startup.
fn app_icon() -> IconData {
    let n = ICON_SIZE as f32;
    let c = n / 2.0;
    let bars = [(18u32, 26u32, 0.45f32), (29, 37, 0.65), (40, 48, 0.85)];

    let img = RgbaImage::from_fn(ICON_SIZE, ICON_SIZE, |x, y| {
        let (fx, fy) = (x as f32 + 0.5, y as f32 + 0.5);
        let inside = (fx - c).powi(2) + (fy - c).powi(2) <= (c - 1.0).powi(2);
        if !inside {
            return Rgba([0, 0, 0, 0]);
        }
        for (x0, x1, h) in bars {
            let top = n * (1.0 - h) + 4.0;
            if x >= x0 && x < x1 && fy >= top && fy < n - 14.0 {
                return Rgba([255, 255, 255, 255]);
            }
        }
        Rgba([0xFF, 0xA1, 0x16, 255])
    });

    let (w, h) = img.dimensions();
    IconData { rgba: img.into_raw(), width: w, height: h }
}

fn main() {
    lc_stats::log::init();

    let gui_defaults = GuiState::default();
    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_inner_size([gui_defaults.window_w as f32, gui_defaults.window_h as f32])
            .with_drag_and_drop(true)
            .with_icon(app_icon()),
        ..Default::default()
    };

    if let Err(e) = gui::run(options) {
        eprintln!("GUI failed: {}", e);
        std::process::exit(1);
    }
}
