use std::sync::{mpsc, Arc, Mutex, PoisonError};
use std::thread;

use engine_logging::{engine_debug, engine_error, engine_info};
use syllable_core::HarvestProgress;

use crate::fetch::{Fetcher, ReqwestFetcher};
use crate::{run_harvest, HarvestFailure, HarvestOutcome, HarvestSession, HarvestSettings};

enum EngineCommand {
    Harvest { session: Arc<HarvestSession> },
}

/// Control surface of the background harvest worker.
///
/// A single worker thread runs one harvest at a time. Clones share the
/// worker and the current session.
#[derive(Clone)]
pub struct HarvesterHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    current: Arc<Mutex<Option<Arc<HarvestSession>>>>,
}

impl HarvesterHandle {
    pub fn new(settings: HarvestSettings) -> Self {
        let fetcher = Arc::new(ReqwestFetcher::new(settings.fetch.clone()));
        Self::with_fetcher(settings, fetcher)
    }

    pub fn with_fetcher(settings: HarvestSettings, fetcher: Arc<dyn Fetcher>) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel::<EngineCommand>();

        thread::spawn(move || {
            let runtime = match tokio::runtime::Runtime::new() {
                Ok(runtime) => runtime,
                Err(err) => {
                    engine_error!("Could not start harvest runtime: {}", err);
                    // Dropping the receiver fails every later start request.
                    return;
                }
            };
            while let Ok(command) = cmd_rx.recv() {
                match command {
                    EngineCommand::Harvest { session } => {
                        runtime.block_on(run_harvest(fetcher.as_ref(), &settings, &session));
                    }
                }
            }
            engine_debug!("Harvest worker shutting down");
        });

        Self {
            cmd_tx,
            current: Arc::new(Mutex::new(None)),
        }
    }

    /// Start a harvest reading at most `page_limit` pages.
    ///
    /// While a session is running this is a no-op that returns the running
    /// session.
    pub fn start_harvest(&self, page_limit: u64) -> Arc<HarvestSession> {
        let mut current = self.current.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(session) = current.as_ref().filter(|s| s.is_running()) {
            engine_debug!("Harvest already running; ignoring start request");
            return session.clone();
        }

        let session = Arc::new(HarvestSession::new(page_limit));
        let command = EngineCommand::Harvest {
            session: session.clone(),
        };
        if self.cmd_tx.send(command).is_err() {
            engine_error!("Harvest worker is gone; cannot start a harvest");
            session.finish(HarvestOutcome::Failed(HarvestFailure::WorkerUnavailable));
        } else {
            engine_info!("Queued harvest with page_limit={}", page_limit);
        }
        *current = Some(session.clone());
        session
    }

    pub fn request_stop(&self) {
        if let Some(session) = self.session() {
            session.request_stop();
        }
    }

    pub fn is_running(&self) -> bool {
        self.session().is_some_and(|s| s.is_running())
    }

    /// Most recent session, running or not.
    pub fn session(&self) -> Option<Arc<HarvestSession>> {
        self.current
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Counters of the most recent session; zeros before the first harvest.
    pub fn progress(&self) -> HarvestProgress {
        self.session()
            .map(|s| s.snapshot())
            .unwrap_or_default()
    }

    pub fn pages_read(&self) -> u64 {
        self.progress().pages_read
    }

    pub fn page_limit(&self) -> u64 {
        self.progress().page_limit
    }

    pub fn total_pages_discovered(&self) -> u64 {
        self.progress().total_pages_discovered
    }

    pub fn syllables_found(&self) -> u64 {
        self.progress().syllables_found
    }
}
