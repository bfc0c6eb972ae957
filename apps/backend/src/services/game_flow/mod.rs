//! Round engine orchestration: start the game, derive poll state, record
//! answers.
//!
//! Each public method runs inside the caller's transaction and takes `now`
//! from the request boundary, so phase derivation is a pure function of
//! stored state plus that single timestamp.

mod answer;
mod start;
mod state;

pub use answer::AnswerOutcome;

/// Game flow domain service.
pub struct GameFlowService;

impl GameFlowService {
    pub fn new() -> Self {
        Self
    }
}

impl Default for GameFlowService {
    fn default() -> Self {
        Self::new()
    }
}
