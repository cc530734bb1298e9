// src/gui/actions/fetch.rs
use std::{sync::mpsc, thread};

use eframe::egui;

use crate::{
    fetcher::LeetCode,
    gui::{app::App, progress::GuiProgress},
    runner,
    session::RunEvent,
};

/// Start the batch on a worker thread. The batch itself stays sequential;
/// the thread only keeps the window responsive while it blocks.
pub fn fetch(app: &mut App, ctx: &egui::Context) {
    let Some(roster) = app.session.start() else {
        logd!("Fetch: Clicked, but nothing to run");
        return;
    };
    app.export_status = None;

    let opts = app.state.options.fetch.clone();
    let (tx, rx) = mpsc::channel::<RunEvent>();
    app.events = Some(rx);

    logf!("Fetch: Begin rows={} endpoint={}", roster.len(), opts.endpoint);

    let ctx = ctx.clone();
    let spawned = thread::Builder::new()
        .name(s!("batch"))
        .spawn(move || {
            let source = match LeetCode::new(&opts) {
                Ok(s) => {
                    logd!("Fetch: client ready → {}", s.endpoint());
                    s
                }
                Err(e) => {
                    let _ = tx.send(RunEvent::Crashed(e.to_string()));
                    ctx.request_repaint();
                    return;
                }
            };

            let mut prog = GuiProgress::new(tx.clone(), ctx.clone());

            // → This is where the fetching happens ←
            let summary = runner::run_batch(&roster, &source, &opts, Some(&mut prog));

            let _ = tx.send(RunEvent::Finished(summary));
            ctx.request_repaint();
        });

    if let Err(e) = spawned {
        loge!("Fetch: spawn failed: {}", e);
        app.events = None;
        app.session.apply(RunEvent::Crashed(e.to_string()));
    }
}
