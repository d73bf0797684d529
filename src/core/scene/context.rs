//=========================================================================
// Scene Context
//=========================================================================
//
// Handle passed to the current scene during its update.
//
// Scenes cannot reach the game while the tick holds its lock, so they
// express switch/pause/end through this context instead. The lifecycle
// drains it once draw has finished.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use super::{RequestQueue, SceneKey, SceneRequest};

//=== SceneContext ========================================================

/// Per-tick context handed to [`super::Scene::on_update`].
#[derive(Debug)]
pub struct SceneContext<S: SceneKey> {
    /// Requests queued by the scene this tick.
    pub requests: RequestQueue<S>,
}

impl<S: SceneKey> SceneContext<S> {
    pub(crate) fn new() -> Self {
        Self {
            requests: RequestQueue::new(),
        }
    }

    /// Requests a switch to `key` at the end of this tick.
    pub fn switch_to(&mut self, key: S) {
        self.requests.push(SceneRequest::Activate(key));
    }

    /// Requests that the game pause at the end of this tick.
    pub fn pause_game(&mut self) {
        self.requests.push(SceneRequest::Pause);
    }

    /// Requests that the game end at the end of this tick.
    pub fn end_game(&mut self) {
        self.requests.push(SceneRequest::End);
    }
}
