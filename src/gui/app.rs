// src/gui/app.rs
use std::{
    error::Error,
    sync::mpsc::{Receiver, TryRecvError},
    time::Duration,
};

use eframe::egui;

use crate::{
    config::state::AppState,
    session::{RunEvent, Session},
};

use super::components;

pub fn run(options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        "LeetCode Stats Collector",
        options,
        Box::new(|_cc| Ok(Box::new(App::new(AppState::default())))),
    )?;
    Ok(())
}

pub struct App {
    // options + text fields (UI thread only)
    pub state: AppState,

    // workflow state: phase, progress, notices, results
    pub session: Session,

    // live while a batch worker is running
    pub events: Option<Receiver<RunEvent>>,

    // last export/copy outcome, shown next to the buttons
    pub export_status: Option<String>,
}

impl App {
    pub fn new(state: AppState) -> Self {
        logf!("Init: endpoint={} out_dir={}",
            state.options.fetch.endpoint,
            state.options.export.out_dir().display()
        );
        Self {
            state,
            session: Session::new(),
            events: None,
            export_status: None,
        }
    }

    /// Fold everything the worker has sent so far into the session.
    pub fn drain_events(&mut self) {
        let Some(rx) = self.events.take() else { return };

        loop {
            match rx.try_recv() {
                Ok(ev) => {
                    let last = matches!(ev, RunEvent::Finished(_) | RunEvent::Crashed(_));
                    self.session.apply(ev);
                    if last {
                        logf!("Run: phase → {:?}", self.session.phase());
                        return; // receiver dropped
                    }
                }
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    if self.session.is_running() {
                        loge!("Run: worker disconnected without finishing");
                        self.session.apply(RunEvent::Crashed(s!("worker stopped unexpectedly")));
                    }
                    return;
                }
            }
        }
        self.events = Some(rx);
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.drain_events();
        super::actions::load_dropped(self, ctx);

        egui::TopBottomPanel::top("title").show(ctx, |ui| {
            ui.heading("🎯 LeetCode Statistics Collector");
        });

        egui::TopBottomPanel::bottom("instructions").show(ctx, |ui| {
            components::instructions::draw(ui);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            components::upload_panel::draw(ui, self);

            ui.separator();

            components::run_bar::draw(ui, self);
            components::notices::draw(ui, self);

            ui.separator();

            components::export_bar::draw(ui, self);
            components::data_table::draw(ui, self);
        });

        if self.session.is_running() {
            // keep the spinner turning between worker events
            ctx.request_repaint_after(Duration::from_millis(100));
        }
    }
}
