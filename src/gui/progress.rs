// src/gui/progress.rs
use std::sync::mpsc::Sender;

use eframe::egui;

use crate::progress::Progress;
use crate::session::RunEvent;

/// Worker-side progress sink: forwards every step to the UI thread and asks
/// for a repaint so the bar moves while the batch blocks on the network.
pub struct GuiProgress {
    tx: Sender<RunEvent>,
    ctx: egui::Context,
}

impl GuiProgress {
    pub fn new(tx: Sender<RunEvent>, ctx: egui::Context) -> Self {
        Self { tx, ctx }
    }

    fn send(&self, ev: RunEvent) {
        // UI gone → nothing left to tell
        let _ = self.tx.send(ev);
        self.ctx.request_repaint();
    }
}

impl Progress for GuiProgress {
    fn begin(&mut self, total: usize) {
        self.send(RunEvent::Begin { total });
    }
    fn log(&mut self, msg: &str) {
        self.send(RunEvent::Status(s!(msg)));
    }
    fn warn(&mut self, msg: &str) {
        self.send(RunEvent::Warning(s!(msg)));
    }
    fn error(&mut self, msg: &str) {
        self.send(RunEvent::Error(s!(msg)));
    }
    fn advance(&mut self, done: usize, total: usize) {
        self.send(RunEvent::Advance { done, total });
    }
}
