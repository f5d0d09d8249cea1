use crate::{AppState, Effect, Msg, SessionState};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::HarvestRequested { page_limit } => match state.session() {
            SessionState::Idle | SessionState::Finished => {
                state.start_session(page_limit);
                vec![Effect::StartHarvest { page_limit }]
            }
            // One session at a time.
            SessionState::Running | SessionState::Stopping => Vec::new(),
        },
        Msg::StopRequested => {
            if state.session() == SessionState::Running {
                state.begin_stopping();
                vec![Effect::StopHarvest]
            } else {
                Vec::new()
            }
        }
        Msg::Progress(progress) => {
            if is_active(state.session()) {
                state.apply_progress(progress);
            }
            Vec::new()
        }
        Msg::HarvestFinished { progress, result } => {
            if is_active(state.session()) {
                state.finish_session(progress, result);
            }
            Vec::new()
        }
        Msg::Tick => Vec::new(),
    };

    (state, effects)
}

fn is_active(session: SessionState) -> bool {
    matches!(session, SessionState::Running | SessionState::Stopping)
}
