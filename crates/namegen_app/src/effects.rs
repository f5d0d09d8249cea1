use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use engine_logging::{engine_info, engine_warn};
use syllable_core::{Effect, HarvestResultKind, Msg};
use syllable_harvester::{HarvestOutcome, HarvestSession, HarvesterHandle};

/// How often the observer copies the session counters.
const POLL_INTERVAL: Duration = Duration::from_millis(100);

pub struct EffectRunner {
    harvester: HarvesterHandle,
}

impl EffectRunner {
    pub fn new(harvester: HarvesterHandle, msg_tx: mpsc::Sender<Msg>) -> Self {
        let runner = Self { harvester };
        runner.spawn_observer(msg_tx);
        runner
    }

    pub fn enqueue(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::StartHarvest { page_limit } => {
                    engine_info!("StartHarvest page_limit={}", page_limit);
                    self.harvester.start_harvest(page_limit);
                }
                Effect::StopHarvest => {
                    engine_info!("StopHarvest requested");
                    self.harvester.request_stop();
                }
            }
        }
    }

    /// Polls the current session and reports its counters, then its end,
    /// exactly once per session. Exits when the receiver is dropped.
    fn spawn_observer(&self, msg_tx: mpsc::Sender<Msg>) {
        let harvester = self.harvester.clone();
        thread::spawn(move || {
            let mut reported: Option<Arc<HarvestSession>> = None;
            loop {
                let msg = harvester
                    .session()
                    .filter(|session| !reported.as_ref().is_some_and(|r| Arc::ptr_eq(r, session)))
                    .map(|session| {
                        if session.is_running() {
                            Msg::Progress(session.snapshot())
                        } else {
                            let msg = finished_msg(&session);
                            reported = Some(session);
                            msg
                        }
                    })
                    .unwrap_or(Msg::Tick);
                if msg_tx.send(msg).is_err() {
                    break;
                }
                thread::sleep(POLL_INTERVAL);
            }
        });
    }
}

fn finished_msg(session: &HarvestSession) -> Msg {
    let result = match session.outcome() {
        Some(HarvestOutcome::Failed(failure)) => {
            engine_warn!("Harvest failed: {}", failure);
            HarvestResultKind::Failed
        }
        Some(outcome) => outcome.kind(),
        None => HarvestResultKind::Failed,
    };
    Msg::HarvestFinished {
        progress: session.snapshot(),
        result,
    }
}
