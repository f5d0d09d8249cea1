use std::io::BufRead;
use std::sync::mpsc;
use std::thread;

use anyhow::{Context, Result};
use syllable_core::{update, AppState, AppViewModel, HarvestResultKind, Msg, SessionState};
use syllable_harvester::{HarvestSettings, HarvesterHandle};

use crate::effects::EffectRunner;

/// Run one harvest in the foreground, printing progress until it ends.
pub fn run_harvest(settings: HarvestSettings, page_limit: u64) -> Result<HarvestResultKind> {
    let (msg_tx, msg_rx) = mpsc::channel::<Msg>();
    let runner = EffectRunner::new(HarvesterHandle::new(settings), msg_tx.clone());
    spawn_stop_listener(msg_tx.clone());

    msg_tx
        .send(Msg::HarvestRequested { page_limit })
        .context("Harvest message loop closed")?;

    let mut state = AppState::new();
    let mut shown_session = None;
    for msg in msg_rx.iter() {
        let (next, effects) = update(state, msg);
        state = next;
        runner.enqueue(effects);

        if state.consume_dirty() {
            let view = state.view();
            if shown_session != Some(view.session) {
                println!("{}", view.status_line());
                shown_session = Some(view.session);
            }
            render(&view);
        }
        if state.session() == SessionState::Finished {
            break;
        }
    }

    Ok(state.view().result.unwrap_or(HarvestResultKind::Failed))
}

fn render(view: &AppViewModel) {
    println!("{}", view.progress_line());
}

/// A line on stdin asks the harvest to stop. End of input does not.
fn spawn_stop_listener(msg_tx: mpsc::Sender<Msg>) {
    thread::spawn(move || {
        let mut line = String::new();
        if let Ok(read) = std::io::stdin().lock().read_line(&mut line) {
            if read > 0 {
                let _ = msg_tx.send(Msg::StopRequested);
            }
        }
    });
}
